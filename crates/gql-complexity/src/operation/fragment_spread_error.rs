use crate::loc;
use thiserror::Error;

/// Raised when a fragment spread cannot be expanded while walking an
/// operation. Documents produced by the
/// [`ExecutableDocumentBuilder`](crate::operation::ExecutableDocumentBuilder)
/// never contain either condition.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FragmentSpreadError {
    #[error("Fragment cycle detected: {}", .cycle_path.join(" → "))]
    FragmentCycle {
        cycle_path: Vec<String>,
    },

    #[error(
        "Fragment spread `...{fragment_name}` at {location} references a \
        fragment that is not defined in this document"
    )]
    UndefinedFragment {
        fragment_name: String,
        location: loc::SourceLocation,
    },
}
