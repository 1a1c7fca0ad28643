use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// A directive applied to an operation, fragment, or selection
/// (e.g. `@include(if: $flag)`). Carried through flattening untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation {
    pub(crate) arguments: IndexMap<String, ast::operation::Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl DirectiveAnnotation {
    pub fn arguments(&self) -> &IndexMap<String, ast::operation::Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_directives: &[ast::operation::Directive],
    ) -> Vec<Self> {
        ast_directives.iter().map(|ast_directive| DirectiveAnnotation {
            arguments: ast_directive.arguments.iter()
                .map(|(name, value)| (name.to_string(), value.clone()))
                .collect(),
            def_location: loc::SourceLocation::from_pos(
                file_path,
                ast_directive.position,
            ),
            name: ast_directive.name.to_string(),
        }).collect()
    }
}
