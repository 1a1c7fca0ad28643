use crate::operation::FieldSelection;
use crate::operation::Selection;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionSet<'schema> {
    pub(crate) selections: Vec<Selection<'schema>>,
}
impl<'schema> SelectionSet<'schema> {
    /// Iterate over the [`FieldSelection`]s directly within this set,
    /// skipping any fragment spreads or inline fragments.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSelection<'schema>> {
        self.selections.iter().filter_map(Selection::as_field)
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn selections(&self) -> &Vec<Selection<'schema>> {
        &self.selections
    }
}
impl<'schema> std::convert::From<Vec<Selection<'schema>>> for SelectionSet<'schema> {
    fn from(selections: Vec<Selection<'schema>>) -> Self {
        Self { selections }
    }
}
