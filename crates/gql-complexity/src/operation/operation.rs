use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::OperationKind;
use crate::operation::SelectionSet;
use crate::operation::Variable;

/// A single query, mutation, or subscription from an
/// [`ExecutableDocument`](crate::operation::ExecutableDocument).
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<'schema> {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) kind: OperationKind,
    pub(crate) name: Option<String>,
    pub(crate) selection_set: SelectionSet<'schema>,
    pub(crate) variables: Vec<Variable>,
}
impl<'schema> Operation<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn kind(&self) -> &OperationKind {
        &self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    /// Variable declarations in the order they were declared.
    pub fn variables(&self) -> &Vec<Variable> {
        &self.variables
    }
}
