//! Schema-aware complexity analysis of GraphQL operations.
//!
//! Operations are scored twice: once as written and once after
//! [flattening](crate::flatten), which inlines every fragment spread and
//! inline fragment and merges sibling fields that share a response key. The
//! difference between the two scores shows how much repeated selection work a
//! document's fragments introduce.

pub mod ast;
pub mod batch;
pub mod complexity;
mod directive_annotation;
pub use directive_annotation::DirectiveAnnotation;
pub mod file_reader;
pub mod flatten;
pub mod loc;
pub mod named_ref;
pub mod operation;
pub mod schema;
pub mod types;
