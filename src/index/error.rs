//! Index pipeline errors.
//!
//! Every variant is fatal: the run stops and no artifact is written.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndexError {
    #[error("content directory `{0}` does not exist or is not a directory")]
    MissingContentDir(PathBuf),

    #[error("failed to read content directory `{0}`")]
    ReadDir(PathBuf, #[source] std::io::Error),

    #[error("failed to read `{0}`")]
    ReadFile(PathBuf, #[source] std::io::Error),

    #[error("failed to serialize search index")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_display_names_path() {
        let err = IndexError::MissingContentDir(PathBuf::from("src/content/blog"));
        assert!(err.to_string().contains("src/content/blog"));
    }

    #[test]
    fn test_source_is_io_error() {
        let err = IndexError::ReadFile(
            PathBuf::from("a.md"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("a.md"));
        assert_eq!(err.source().unwrap().to_string(), "denied");
    }
}
