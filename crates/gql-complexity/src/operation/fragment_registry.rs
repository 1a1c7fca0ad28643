use crate::operation::Fragment;
use crate::operation::FragmentSpread;
use crate::operation::FragmentSpreadError;
use crate::named_ref::DerefByNameError;
use std::collections::HashMap;

/// The named fragments defined in a single
/// [`ExecutableDocument`](crate::operation::ExecutableDocument), keyed by
/// fragment name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FragmentRegistry<'schema> {
    pub(crate) fragments: HashMap<String, Fragment<'schema>>,
}
impl<'schema> FragmentRegistry<'schema> {
    pub fn fragments(&self) -> &HashMap<String, Fragment<'schema>> {
        &self.fragments
    }

    /// Look up a fragment definition by name.
    pub fn resolve(
        &self,
        fragment_name: &str,
    ) -> Result<&Fragment<'schema>, DerefByNameError> {
        self.fragments.get(fragment_name).ok_or_else(
            || DerefByNameError::DanglingReference(fragment_name.to_string()),
        )
    }
}

/// The stack of fragment names currently being expanded along one path of a
/// selection-set walk. Spreading a fragment that is already on the stack is a
/// cycle.
#[derive(Debug, Default)]
pub(crate) struct SpreadChain<'doc> {
    names: Vec<&'doc str>,
}
impl<'doc> SpreadChain<'doc> {
    /// Resolve `spread` and push its fragment onto the chain. Every successful
    /// call must be paired with a call to [`SpreadChain::exit`].
    pub(crate) fn enter<'schema>(
        &mut self,
        fragment_registry: &'doc FragmentRegistry<'schema>,
        spread: &FragmentSpread<'schema>,
    ) -> Result<&'doc Fragment<'schema>, FragmentSpreadError> {
        let fragment = spread.fragment(fragment_registry).map_err(
            |_| FragmentSpreadError::UndefinedFragment {
                fragment_name: spread.fragment_name().to_string(),
                location: spread.def_location().clone(),
            },
        )?;

        if let Some(start) = self.names.iter().position(|name| *name == fragment.name()) {
            let mut cycle_path: Vec<String> = self.names[start..]
                .iter()
                .map(|name| name.to_string())
                .collect();
            cycle_path.push(fragment.name().to_string());
            return Err(FragmentSpreadError::FragmentCycle { cycle_path });
        }

        self.names.push(fragment.name());
        Ok(fragment)
    }

    pub(crate) fn exit(&mut self) {
        self.names.pop();
    }
}
