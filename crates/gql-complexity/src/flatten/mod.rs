//! Fragment flattening: rewriting a selection tree so that it contains only
//! field selections, with fragment contents inlined and sibling fields that
//! share a response key merged into one.
//!
//! Inline fragment type conditions are not consulted while merging; the
//! fields of every fragment are folded into the enclosing selection set.
//! Field order in a flattened selection set follows first appearance, but is
//! not part of the contract.

mod operation_flattener;
mod selection_merger;

pub use operation_flattener::flatten_operation;
pub use selection_merger::SelectionMerger;

#[cfg(test)]
mod tests;
