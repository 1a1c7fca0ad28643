use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::schema::Schema;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

pub type NamedGraphQLTypeRef = NamedRef<Schema, GraphQLType>;

/// Represents a defined GraphQL type, including the built-in scalars that
/// every [`Schema`] implicitly contains.
#[derive(Clone, Debug, PartialEq)]
pub enum GraphQLType {
    Bool,
    Enum(Box<EnumType>),
    Float,
    ID,
    InputObject(Box<InputObjectType>),
    Int,
    Interface(Box<InterfaceType>),
    Object(Box<ObjectType>),
    Scalar(Box<ScalarType>),
    String,
    Union(Box<UnionType>),
}
impl GraphQLType {
    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// Look up a field that may be selected on this type. Composite types
    /// always answer for the `__typename` meta-field in addition to their
    /// declared fields; leaf and input types have no selectable fields.
    pub fn field(&self, field_name: &str) -> Option<&Field> {
        match self {
            Self::Interface(type_) => type_.field(field_name),
            Self::Object(type_) => type_.field(field_name),
            Self::Union(type_) => type_.field(field_name),
            _ => None,
        }
    }

    /// The declared fields of an object or interface type.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(type_) => Some(type_.fields()),
            Self::Object(type_) => Some(type_.fields()),
            _ => None,
        }
    }

    /// Object, interface, and union types are "composite": selecting one
    /// requires a nested selection set.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface(_) | Self::Object(_) | Self::Union(_))
    }

    /// Indicates whether values of this type may be used as arguments.
    pub fn is_input_type(&self) -> bool {
        !self.is_composite()
    }

    /// Indicates whether this type may be used as the type of an output field.
    pub fn is_output_type(&self) -> bool {
        !matches!(self, Self::InputObject(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(type_) => type_.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(type_) => type_.name(),
            Self::Int => "Int",
            Self::Interface(type_) => type_.name(),
            Self::Object(type_) => type_.name(),
            Self::Scalar(type_) => type_.name(),
            Self::String => "String",
            Self::Union(type_) => type_.name(),
        }
    }

    pub fn type_kind(&self) -> GraphQLTypeKind {
        match self {
            Self::Enum(_) => GraphQLTypeKind::Enum,
            Self::InputObject(_) => GraphQLTypeKind::InputObject,
            Self::Interface(_) => GraphQLTypeKind::Interface,
            Self::Object(_) => GraphQLTypeKind::Object,
            Self::Union(_) => GraphQLTypeKind::Union,
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::Scalar(_)
                | Self::String => GraphQLTypeKind::Scalar,
        }
    }
}
impl DerefByName for GraphQLType {
    type Source = Schema;

    fn deref_name<'a>(
        schema: &'a Schema,
        name: &str,
    ) -> Result<&'a GraphQLType, DerefByNameError> {
        schema.all_types().get(name).ok_or_else(
            || DerefByNameError::DanglingReference(name.to_string())
        )
    }
}
