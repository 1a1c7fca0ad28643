use std::path::PathBuf;

pub const DEFAULT_DOCUMENT_PATTERN: &str = "*.graphql";
pub const DEFAULT_SCHEMA_PATTERN: &str = "*.graphqls";

/// Where a [`BatchRunner`](crate::batch::BatchRunner) looks for files.
///
/// Both patterns are glob patterns matched against paths relative to `root`
/// (e.g. `schema/*.graphqls`, `**/*.graphql`). `*` does not cross directory
/// separators; `**` does.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchConfig {
    pub document_pattern: String,
    pub root: PathBuf,
    pub schema_pattern: String,
}
impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            document_pattern: DEFAULT_DOCUMENT_PATTERN.to_string(),
            root: PathBuf::from("."),
            schema_pattern: DEFAULT_SCHEMA_PATTERN.to_string(),
        }
    }
}
