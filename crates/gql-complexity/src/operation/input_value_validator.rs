use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::InputObjectType;
use crate::types::TypeAnnotation;
use std::collections::BTreeMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, InputValueError>;

/// A variable referenced by an argument value, together with the type of the
/// position it appears in.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VariableUsage<'a> {
    /// The position declares a default value, so it may receive a nullable
    /// variable even when its type is non-null.
    pub(crate) default_provided: bool,
    pub(crate) expected_type: &'a TypeAnnotation,
    pub(crate) location: &'a loc::SourceLocation,
    pub(crate) variable_name: &'a str,
}

/// Checks input values (field and directive arguments, variable defaults)
/// against the input type of the position they are given in.
pub(crate) struct InputValueValidator<'schema> {
    pub(crate) schema: &'schema Schema,
}
impl<'schema> InputValueValidator<'schema> {
    /// Variables are accepted in any position unless `constant` is set. The
    /// declared type of a variable is checked against its position once the
    /// operation that defines it is known.
    pub(crate) fn validate(
        &self,
        value: &ast::operation::Value,
        expected_type: &TypeAnnotation,
        constant: bool,
    ) -> Result<()> {
        use ast::operation::Value;

        match (value, expected_type) {
            (Value::Variable(variable_name), _) if constant =>
                Err(InputValueError::VariableInConstantValue {
                    variable_name: variable_name.to_string(),
                }),

            (Value::Variable(_), _) => Ok(()),

            (Value::Null, _) if expected_type.nullable() => Ok(()),

            (Value::Null, _) => Err(incompatible_value(value, expected_type)),

            (Value::List(items), TypeAnnotation::List(list_type)) => items.iter().try_for_each(
                |item| self.validate(item, list_type.inner_type_annotation(), constant),
            ),

            // A single item is coerced to a one-item list.
            (_, TypeAnnotation::List(list_type)) =>
                self.validate(value, list_type.inner_type_annotation(), constant),

            (_, TypeAnnotation::Named(named)) => {
                // Undefined type names are rejected while building the schema
                // or the variable definitions.
                let Some(named_type) = self.schema.lookup_type(named.graphql_type_name()) else {
                    return Ok(());
                };
                self.validate_named(value, named_type, expected_type, constant)
            },
        }
    }

    fn validate_named(
        &self,
        value: &ast::operation::Value,
        named_type: &GraphQLType,
        expected_type: &TypeAnnotation,
        constant: bool,
    ) -> Result<()> {
        use ast::operation::Value;

        let accepted = match (named_type, value) {
            (GraphQLType::Bool, Value::Boolean(_)) => true,
            (GraphQLType::Enum(enum_type), Value::Enum(value_name)) =>
                enum_type.values().contains(value_name),
            (GraphQLType::Float, Value::Float(_) | Value::Int(_)) => true,
            (GraphQLType::ID, Value::Int(_) | Value::String(_)) => true,
            (GraphQLType::InputObject(input_type), Value::Object(fields)) =>
                return self.validate_input_object(input_type, fields, constant),
            (GraphQLType::Int, Value::Int(num)) =>
                num.as_i64().is_some_and(|num| i32::try_from(num).is_ok()),
            // Custom scalars define their own literal formats.
            (GraphQLType::Scalar(_), _) => true,
            (GraphQLType::String, Value::String(_)) => true,
            _ => false,
        };

        if accepted {
            Ok(())
        } else {
            Err(incompatible_value(value, expected_type))
        }
    }

    fn validate_input_object(
        &self,
        input_type: &InputObjectType,
        fields: &BTreeMap<String, ast::operation::Value>,
        constant: bool,
    ) -> Result<()> {
        for (field_name, field_value) in fields {
            let Some(input_field) = input_type.fields().get(field_name) else {
                return Err(InputValueError::UndefinedInputField {
                    field_name: field_name.to_string(),
                    type_name: input_type.name().to_string(),
                });
            };
            self.validate(field_value, input_field.type_annotation(), constant)?;
        }

        match input_type.fields().values().find(
            |input_field| input_field.is_required() && !fields.contains_key(input_field.name()),
        ) {
            Some(missing) => Err(InputValueError::MissingInputField {
                field_name: missing.name().to_string(),
                type_name: input_type.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Record every variable referenced within `value`, typed by the position
    /// it occupies. Values whose shape does not fit their position are
    /// rejected by [`InputValueValidator::validate`] and contribute nothing
    /// below the mismatch.
    pub(crate) fn collect_variable_usages<'a>(
        &self,
        value: &'a ast::operation::Value,
        expected_type: &'a TypeAnnotation,
        default_provided: bool,
        location: &'a loc::SourceLocation,
        usages: &mut Vec<VariableUsage<'a>>,
    ) where 'schema: 'a {
        use ast::operation::Value;

        match (value, expected_type) {
            (Value::Variable(variable_name), _) => usages.push(VariableUsage {
                default_provided,
                expected_type,
                location,
                variable_name: variable_name.as_str(),
            }),

            (Value::List(items), TypeAnnotation::List(list_type)) => {
                for item in items {
                    self.collect_variable_usages(
                        item,
                        list_type.inner_type_annotation(),
                        false,
                        location,
                        usages,
                    );
                }
            },

            (Value::List(_), TypeAnnotation::Named(_)) => (),

            (_, TypeAnnotation::List(list_type)) => self.collect_variable_usages(
                value,
                list_type.inner_type_annotation(),
                false,
                location,
                usages,
            ),

            (Value::Object(fields), TypeAnnotation::Named(named)) => {
                let Some(GraphQLType::InputObject(input_type)) =
                    self.schema.lookup_type(named.graphql_type_name()) else {
                    return;
                };
                for (field_name, field_value) in fields {
                    if let Some(input_field) = input_type.fields().get(field_name) {
                        self.collect_variable_usages(
                            field_value,
                            input_field.type_annotation(),
                            input_field.default_value().is_some(),
                            location,
                            usages,
                        );
                    }
                }
            },

            _ => (),
        }
    }
}

fn incompatible_value(
    value: &ast::operation::Value,
    expected_type: &TypeAnnotation,
) -> InputValueError {
    InputValueError::IncompatibleValue {
        expected_type: expected_type.to_string(),
        value: value.to_string(),
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum InputValueError {
    #[error("expected a value of type `{expected_type}` but found `{value}`")]
    IncompatibleValue {
        expected_type: String,
        value: String,
    },

    #[error("the `{type_name}` input type requires the `{field_name}` field")]
    MissingInputField {
        field_name: String,
        type_name: String,
    },

    #[error("the `{type_name}` input type has no field named `{field_name}`")]
    UndefinedInputField {
        field_name: String,
        type_name: String,
    },

    #[error("variable `${variable_name}` cannot be used in a constant value")]
    VariableInConstantValue {
        variable_name: String,
    },
}
