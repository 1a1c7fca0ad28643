use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::SelectionSet;
use crate::types::NamedGraphQLTypeRef;

#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'schema> {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) selection_set: SelectionSet<'schema>,
    pub(crate) type_condition: Option<NamedGraphQLTypeRef>,
}
impl<'schema> InlineFragment<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    /// The name of the type in the `... on Type` condition, if any.
    pub fn type_condition_name(&self) -> Option<&str> {
        self.type_condition.as_ref().map(|type_ref| type_ref.name())
    }
}
