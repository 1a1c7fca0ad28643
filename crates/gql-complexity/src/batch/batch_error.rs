use crate::ast;
use crate::complexity::DocumentAnalysisError;
use crate::file_reader::ReadContentError;
use crate::schema::SchemaBuildError;
use std::path::PathBuf;
use thiserror::Error;

/// A failure that aborts a whole batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Failed to walk the directory tree at {root:?}: {err}")]
    DirectoryWalkError {
        err: walkdir::Error,
        root: PathBuf,
    },

    #[error("Invalid glob pattern `{pattern}`: {err}")]
    InvalidPattern {
        err: glob::PatternError,
        pattern: String,
    },

    #[error("No schema files match `{pattern}` under {root:?}")]
    NoSchemaFiles {
        pattern: String,
        root: PathBuf,
    },

    #[error("Failed to load schema: {0}")]
    SchemaBuildError(Box<SchemaBuildError>),
}
impl std::convert::From<SchemaBuildError> for BatchError {
    fn from(value: SchemaBuildError) -> Self {
        Self::SchemaBuildError(Box::new(value))
    }
}

/// A failure confined to a single document. The batch skips the document and
/// carries on.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("{0}")]
    AnalysisError(DocumentAnalysisError),

    #[error("Error parsing document: {0}")]
    ParseError(ast::operation::ParseError),

    #[error("{0}")]
    ReadError(ReadContentError),
}
