use crate::loc;
use thiserror::Error;

/// A problem with a type reference inside an otherwise well-formed type
/// definition. These are collected across the whole schema so that a single
/// build reports all of them at once.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum TypeValidationError {
    #[error(
        "The `{type_name}` type declares that it implements `{non_interface_type_name}`, \
        which is not an interface type"
    )]
    ImplementsNonInterfaceType {
        def_location: loc::SourceLocation,
        non_interface_type_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements \
        `{undefined_interface_name}`, which is not defined in the schema"
    )]
    ImplementsUndefinedInterface {
        def_location: loc::SourceLocation,
        type_name: String,
        undefined_interface_name: String,
    },

    #[error(
        "Directive parameters can only be declared with input-compatible types: \
        The `@{directive_name}({parameter_name}:)` parameter was declared with \
        the `{outputonly_type_name}` type"
    )]
    InvalidDirectiveParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        directive_name: String,
        outputonly_type_name: String,
        parameter_name: String,
    },

    #[error(
        "Input fields can not be declared with an output type: The \
        `{parent_type_name}.{field_name}` input field was declared with the \
        `{output_type_name}` type"
    )]
    InvalidInputFieldWithOutputType {
        def_location: loc::SourceLocation,
        field_name: String,
        output_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Output fields can not be declared with an input type: The \
        `{parent_type_name}.{field_name}` field is an output field, but the \
        `{input_type_name}` type is an input type"
    )]
    InvalidOutputFieldWithInputType {
        def_location: loc::SourceLocation,
        field_name: String,
        input_type_name: String,
        parent_type_name: String,
    },

    #[error(
        "Parameters can only be declared with input-compatible types: The \
        `{parent_type_name}.{field_name}({parameter_name}:)` parameter was \
        declared with the `{outputonly_type_name}` type"
    )]
    InvalidParameterWithOutputOnlyType {
        def_location: loc::SourceLocation,
        field_name: String,
        outputonly_type_name: String,
        parameter_name: String,
        parent_type_name: String,
    },

    #[error(
        "The `{union_name}` union lists `{member_name}` as a member, but only \
        object types may be union members"
    )]
    NonObjectUnionMember {
        def_location: loc::SourceLocation,
        member_name: String,
        union_name: String,
    },

    #[error("Reference to a type named `{type_name}` that is not defined in the schema")]
    UndefinedTypeName {
        ref_location: loc::SourceLocation,
        type_name: String,
    },
}
