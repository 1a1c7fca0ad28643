use crate::DirectiveAnnotation;
use crate::loc;
use crate::named_ref::DerefByNameError;
use crate::operation::Fragment;
use crate::operation::FragmentRef;
use crate::operation::FragmentRegistry;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'schema> {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) directives: Vec<DirectiveAnnotation>,
    pub(crate) fragment: FragmentRef<'schema>,
}
impl<'schema> FragmentSpread<'schema> {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    /// Resolve the spread [`Fragment`] within the given registry.
    pub fn fragment<'doc>(
        &self,
        fragment_registry: &'doc FragmentRegistry<'schema>,
    ) -> Result<&'doc Fragment<'schema>, DerefByNameError> {
        self.fragment.deref(fragment_registry)
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment.name()
    }
}
