//! Glob-driven analysis of every GraphQL document under a directory against a
//! schema assembled from every matching SDL file.

mod batch_config;
mod batch_error;
mod batch_runner;
mod complexity_report;
mod file_matcher;

pub use batch_config::BatchConfig;
pub use batch_config::DEFAULT_DOCUMENT_PATTERN;
pub use batch_config::DEFAULT_SCHEMA_PATTERN;
pub use batch_error::BatchError;
pub use batch_error::DocumentError;
pub use batch_runner::BatchRunner;
pub use complexity_report::BatchOutcome;
pub use complexity_report::ComplexityReport;
pub use complexity_report::SkippedDocument;
pub use file_matcher::FileMatcher;

#[cfg(test)]
mod tests;
