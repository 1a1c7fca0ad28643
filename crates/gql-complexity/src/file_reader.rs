//! Reading GraphQL source files (SDL and executable documents) as UTF-8 text.

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read the whole file at `file_path` into a `String`.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if file_path.is_dir() {
        return Err(ReadContentError::IsADirectory(file_path.to_path_buf()));
    }

    std::fs::read_to_string(file_path).map_err(|err| match err.kind() {
        ErrorKind::InvalidData => ReadContentError::NotUtf8(file_path.to_path_buf()),
        _ => ReadContentError::Io {
            err,
            file_path: file_path.to_path_buf(),
        },
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    #[error("Failed to read {file_path:?}: {err}")]
    Io {
        err: std::io::Error,
        file_path: PathBuf,
    },

    #[error("Expected a file but {0:?} is a directory")]
    IsADirectory(PathBuf),

    #[error("File {0:?} does not contain valid UTF-8")]
    NotUtf8(PathBuf),
}
