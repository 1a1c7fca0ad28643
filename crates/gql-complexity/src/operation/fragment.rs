use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByName;
use crate::named_ref::DerefByNameError;
use crate::named_ref::NamedRef;
use crate::operation::FragmentRegistry;
use crate::operation::SelectionSet;
use crate::types::NamedGraphQLTypeRef;

pub type FragmentRef<'schema> = NamedRef<FragmentRegistry<'schema>, Fragment<'schema>>;

/// A named fragment definition (`fragment Name on Type { ... }`).
///
/// Fragments are owned by the [`FragmentRegistry`] of their document and are
/// only ever borrowed by the spreads that reference them.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment<'schema> {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) name: String,
    pub(crate) selection_set: SelectionSet<'schema>,
    pub(crate) type_condition: NamedGraphQLTypeRef,
}
impl<'schema> Fragment<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn selection_set(&self) -> &SelectionSet<'schema> {
        &self.selection_set
    }

    pub fn type_condition_name(&self) -> &str {
        self.type_condition.name()
    }
}
impl<'schema> DerefByName for Fragment<'schema> {
    type Source = FragmentRegistry<'schema>;

    fn deref_name<'a>(
        registry: &'a FragmentRegistry<'schema>,
        name: &str,
    ) -> Result<&'a Fragment<'schema>, DerefByNameError> {
        registry.resolve(name)
    }
}
