use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::NamedGraphQLTypeRef;
use crate::types::NamedTypeAnnotation;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// An output field defined on an object or interface type (or the implicit
/// `__typename` meta-field on any composite type).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) parent_type: NamedGraphQLTypeRef,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// The type on which this field is defined.
    pub fn parent_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Result<&'schema GraphQLType, DerefByNameError> {
        self.parent_type.deref(schema)
    }

    pub fn parent_type_name(&self) -> &str {
        self.parent_type.name()
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub(crate) fn typename_meta_field(parent_type_name: &str) -> Self {
        Self {
            def_location: loc::SourceLocation::builtin(),
            name: "__typename".to_string(),
            parameters: IndexMap::new(),
            parent_type: GraphQLType::named_ref(
                parent_type_name,
                loc::SourceLocation::builtin(),
            ),
            type_annotation: TypeAnnotation::Named(NamedTypeAnnotation {
                nullable: false,
                type_ref: GraphQLType::named_ref(
                    "String",
                    loc::SourceLocation::builtin(),
                ),
            }),
        }
    }
}

