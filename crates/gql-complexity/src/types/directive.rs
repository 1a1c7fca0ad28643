use crate::ast;
use crate::loc;
use crate::types::Parameter;
use indexmap::IndexMap;

/// A directive definition: one of the built-in `@skip`, `@include`,
/// `@deprecated` and `@specifiedBy` directives, or one declared in the schema
/// with `directive @name(...) on ...`.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) locations: Vec<ast::schema::DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn is_allowed_at(&self, location: &ast::schema::DirectiveLocation) -> bool {
        self.locations.contains(location)
    }

    /// Whether the directive may be applied more than once at the same
    /// location.
    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn locations(&self) -> &[ast::schema::DirectiveLocation] {
        &self.locations
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
