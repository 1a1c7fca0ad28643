use crate::flatten;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentSpreadError;
use crate::operation::Operation;

/// A validated GraphQL executable document: its operations, in document
/// order, and the named fragments they may spread.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument<'schema> {
    pub(crate) fragment_registry: FragmentRegistry<'schema>,
    pub(crate) operations: Vec<Operation<'schema>>,
}
impl<'schema> ExecutableDocument<'schema> {
    /// Produce a flattened copy of every operation in the document, in
    /// document order. See [`flatten::flatten_operation`].
    pub fn flattened_operations(
        &self,
    ) -> Result<Vec<Operation<'schema>>, FragmentSpreadError> {
        self.operations
            .iter()
            .map(|operation| flatten::flatten_operation(
                operation,
                &self.fragment_registry,
            ))
            .collect()
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry<'schema> {
        &self.fragment_registry
    }

    /// Look up an operation by name.
    pub fn operation(&self, name: &str) -> Option<&Operation<'schema>> {
        self.operations.iter().find(|op| op.name() == Some(name))
    }

    pub fn operations(&self) -> &Vec<Operation<'schema>> {
        &self.operations
    }
}
