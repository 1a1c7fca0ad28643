use crate::batch::DocumentError;
use serde::Serialize;
use std::path::PathBuf;

/// Raw and flattened complexity of one operation in one file.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ComplexityReport {
    pub complexity: usize,
    pub flattened_complexity: usize,
    /// `None` for an anonymous operation.
    pub operation_name: Option<String>,
    /// Relative to the batch root.
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct SkippedDocument {
    pub error: DocumentError,
    pub path: PathBuf,
}

/// Everything a batch run produced: reports in file order (and document order
/// within a file), plus the documents that could not be analyzed.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<ComplexityReport>,
    pub skipped: Vec<SkippedDocument>,
}
