use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'schema> {
    Field(FieldSelection<'schema>),
    FragmentSpread(FragmentSpread<'schema>),
    InlineFragment(InlineFragment<'schema>),
}
impl<'schema> Selection<'schema> {
    pub fn as_field(&self) -> Option<&FieldSelection<'schema>> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }
}
