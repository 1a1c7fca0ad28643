use crate::ast;
use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use crate::types::Field;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSelection<'schema> {
    pub(crate) alias: Option<String>,
    pub(crate) arguments: IndexMap<String, ast::operation::Value>,
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) field: &'schema Field,
    pub(crate) selection_set: SelectionSet<'schema>,
}
impl<'schema> FieldSelection<'schema> {
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn arguments(&self) -> &IndexMap<String, ast::operation::Value> {
        &self.arguments
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// The schema definition of the selected field.
    pub fn field(&self) -> &'schema Field {
        self.field
    }

    pub fn name(&self) -> &str {
        self.field.name()
    }

    /**
     * The key under which this selection appears in a response: the alias if
     * one was specified, otherwise the name of the field.
     */
    pub fn response_key(&self) -> &str {
        self.alias().unwrap_or_else(|| self.field.name())
    }

    /// Sub-selections of this field. Empty for fields of a leaf type.
    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    /// A copy of this selection (same field, alias, arguments, directives and
    /// location) with its sub-selections replaced.
    pub(crate) fn with_selection_set(
        &self,
        selection_set: SelectionSet<'schema>,
    ) -> Self {
        Self {
            alias: self.alias.clone(),
            arguments: self.arguments.clone(),
            def_location: self.def_location.clone(),
            directives: self.directives.clone(),
            field: self.field,
            selection_set,
        }
    }
}
