use crate::loc;
use crate::types::Field;
use crate::types::NamedGraphQLTypeRef;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`](crate::schema::Schema).
///
/// Unions declare no fields of their own; only `__typename` may be selected
/// directly on a union.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) members: Vec<NamedGraphQLTypeRef>,
    pub(crate) name: String,
    pub(crate) typename_field: Field,
}
impl UnionType {
    pub(crate) fn new(name: &str, def_location: loc::SourceLocation) -> Self {
        Self {
            def_location,
            members: vec![],
            name: name.to_string(),
            typename_field: Field::typename_meta_field(name),
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn field(&self, field_name: &str) -> Option<&Field> {
        (field_name == self.typename_field.name()).then_some(&self.typename_field)
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member_ref| member_ref.name())
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
