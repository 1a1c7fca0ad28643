
use crate::operation::FragmentRegistry;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use std::collections::BTreeMap;

/// Order-insensitive structure of a flattened selection set: response key ->
/// structure of that field's sub-selections.
#[derive(Debug, Default, Eq, PartialEq)]
pub(super) struct Shape(BTreeMap<String, Shape>);
impl Shape {
    pub(super) fn of(selection_set: &SelectionSet<'_>) -> Self {
        let mut shape = BTreeMap::new();
        for selection in selection_set.selections() {
            let Selection::Field(field) = selection else {
                panic!("flattened selection sets contain only fields: {selection:?}");
            };
            let previous = shape.insert(
                field.response_key().to_string(),
                Self::of(field.selection_set()),
            );
            assert!(
                previous.is_none(),
                "response key `{}` appears more than once",
                field.response_key(),
            );
        }
        Shape(shape)
    }

    pub(super) fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub(super) fn get(&self, response_key: &str) -> &Shape {
        &self.0[response_key]
    }
}

/// Response keys of every field that a selection set contributes at its own
/// level once fragments are expanded, duplicates included.
pub(super) fn contributed_keys<'s>(
    selection_set: &SelectionSet<'s>,
    registry: &FragmentRegistry<'s>,
) -> Vec<String> {
    let mut keys = vec![];
    for selection in selection_set.selections() {
        match selection {
            Selection::Field(field) => keys.push(field.response_key().to_string()),
            Selection::InlineFragment(inline) =>
                keys.extend(contributed_keys(inline.selection_set(), registry)),
            Selection::FragmentSpread(spread) => keys.extend(contributed_keys(
                spread.fragment(registry).unwrap().selection_set(),
                registry,
            )),
        }
    }
    keys
}
