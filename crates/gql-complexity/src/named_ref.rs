use crate::loc;
use std::marker::PhantomData;
use thiserror::Error;

/// A reference, by name, to a `TResource` owned by some `TSource`.
///
/// The reference carries no borrow of its source. Resolving it requires
/// handing the source back in via [`NamedRef::deref`], which lets spreads
/// point at fragments held by their own document's
/// [`FragmentRegistry`](crate::operation::FragmentRegistry) (and field types
/// point at types held by the [`Schema`](crate::schema::Schema) being built)
/// without any self-referential structure.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<TSource, TResource: DerefByName<Source = TSource>> {
    name: String,
    ref_location: loc::SourceLocation,
    resource: PhantomData<fn(&TSource) -> TResource>,
}
impl<TSource, TResource: DerefByName<Source = TSource>> NamedRef<TSource, TResource> {
    pub fn deref<'a>(&self, source: &'a TSource) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, &self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn new(name: impl Into<String>, ref_location: loc::SourceLocation) -> Self {
        Self {
            name: name.into(),
            ref_location,
            resource: PhantomData,
        }
    }

    /// Where the name was written, not where the resource is defined.
    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}

/// Something a [`NamedRef`] can resolve to.
pub trait DerefByName: Sized {
    type Source;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError>;

    fn named_ref(
        name: impl Into<String>,
        ref_location: loc::SourceLocation,
    ) -> NamedRef<Self::Source, Self> {
        NamedRef::new(name, ref_location)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DerefByNameError {
    #[error("Nothing named `{0}` is defined")]
    DanglingReference(String),
}
