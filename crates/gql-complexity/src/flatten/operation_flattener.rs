use crate::flatten::SelectionMerger;
use crate::operation::FragmentRegistry;
use crate::operation::FragmentSpreadError;
use crate::operation::Operation;

/// Produce a copy of `operation` whose selection tree contains no fragment
/// spreads or inline fragments, with fields sharing a response key merged at
/// every level.
///
/// Kind, name, variables, directives and location are carried over
/// unchanged. `fragment_registry` supplies the fragments spread by the
/// operation (normally that of the operation's own
/// [`ExecutableDocument`](crate::operation::ExecutableDocument)).
pub fn flatten_operation<'schema>(
    operation: &Operation<'schema>,
    fragment_registry: &FragmentRegistry<'schema>,
) -> Result<Operation<'schema>, FragmentSpreadError> {
    let selection_set = SelectionMerger::new(fragment_registry)
        .merge(operation.selection_set().selections())?;

    Ok(Operation {
        def_location: operation.def_location.clone(),
        directives: operation.directives.clone(),
        kind: operation.kind.clone(),
        name: operation.name.clone(),
        selection_set,
        variables: operation.variables.clone(),
    })
}
