use crate::operation::FieldSelection;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentSpreadError;
use crate::operation::Selection;
use crate::operation::SelectionSet;
use crate::operation::SpreadChain;
use indexmap::IndexMap;
use indexmap::map::Entry;

type Result<T> = std::result::Result<T, FragmentSpreadError>;
type MergedFields<'schema> = IndexMap<String, FieldSelection<'schema>>;

/// Merges sibling selections into a fragment-free [`SelectionSet`] whose
/// fields have pairwise-distinct response keys, recursively.
///
/// Merged fields keep the field definition, alias, arguments, directives and
/// location of the first selection contributing their response key. The
/// sub-selections of every contributor are concatenated and merged again, so
/// duplicate grandchildren are collapsed too.
///
/// Inputs are never modified: fragments are read through the registry and
/// every returned node is newly allocated.
#[derive(Clone, Copy, Debug)]
pub struct SelectionMerger<'doc, 'schema> {
    fragment_registry: &'doc FragmentRegistry<'schema>,
}
impl<'doc, 'schema> SelectionMerger<'doc, 'schema> {
    pub fn new(fragment_registry: &'doc FragmentRegistry<'schema>) -> Self {
        Self { fragment_registry }
    }

    pub fn merge<'a>(
        &self,
        selections: impl IntoIterator<Item = &'a Selection<'schema>>,
    ) -> Result<SelectionSet<'schema>>
    where
        'schema: 'a,
    {
        let merged = self.merge_selections(selections, &mut SpreadChain::default())?;
        Ok(into_selection_set(merged))
    }

    fn merge_selections<'a>(
        &self,
        selections: impl IntoIterator<Item = &'a Selection<'schema>>,
        spread_chain: &mut SpreadChain<'doc>,
    ) -> Result<MergedFields<'schema>>
    where
        'schema: 'a,
    {
        let mut merged = MergedFields::new();
        for selection in selections {
            match selection {
                Selection::Field(field) => match merged.entry(field.response_key().to_string()) {
                    Entry::Occupied(mut entry) => self.merge_children(
                        entry.get_mut(),
                        field.selection_set(),
                        spread_chain,
                    )?,
                    Entry::Vacant(entry) => {
                        let children = self.merge_selections(
                            field.selection_set().selections(),
                            spread_chain,
                        )?;
                        entry.insert(field.with_selection_set(into_selection_set(children)));
                    },
                },

                Selection::InlineFragment(inline) => {
                    let fragment_fields = self.merge_selections(
                        inline.selection_set().selections(),
                        spread_chain,
                    )?;
                    self.fold_fields(&mut merged, fragment_fields, spread_chain)?;
                },

                Selection::FragmentSpread(spread) => {
                    let fragment = spread_chain.enter(self.fragment_registry, spread)?;
                    let fragment_fields = self.merge_selections(
                        fragment.selection_set().selections(),
                        spread_chain,
                    );
                    spread_chain.exit();
                    self.fold_fields(&mut merged, fragment_fields?, spread_chain)?;
                },
            }
        }

        Ok(merged)
    }

    /// Fold already-merged fields into `merged`, combining with any existing
    /// field that has the same response key.
    fn fold_fields(
        &self,
        merged: &mut MergedFields<'schema>,
        fields: MergedFields<'schema>,
        spread_chain: &mut SpreadChain<'doc>,
    ) -> Result<()> {
        for (response_key, field) in fields {
            match merged.entry(response_key) {
                Entry::Occupied(mut entry) => self.merge_children(
                    entry.get_mut(),
                    field.selection_set(),
                    spread_chain,
                )?,
                Entry::Vacant(entry) => {
                    entry.insert(field);
                },
            }
        }
        Ok(())
    }

    /// Replace the children of `existing` with the merge of its current
    /// children followed by `additional`.
    fn merge_children(
        &self,
        existing: &mut FieldSelection<'schema>,
        additional: &SelectionSet<'schema>,
        spread_chain: &mut SpreadChain<'doc>,
    ) -> Result<()> {
        let previous = std::mem::take(&mut existing.selection_set);
        let children = self.merge_selections(
            previous.selections().iter().chain(additional.selections()),
            spread_chain,
        )?;
        existing.selection_set = into_selection_set(children);
        Ok(())
    }
}

fn into_selection_set<'schema>(merged: MergedFields<'schema>) -> SelectionSet<'schema> {
    SelectionSet {
        selections: merged.into_values().map(Selection::Field).collect(),
    }
}
