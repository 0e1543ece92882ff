//! Error types for `PackCreator`

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The error type for pack operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Archive Errors ====================
    /// The zip writer rejected an entry or failed to finish the archive.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    // ==================== Input Errors ====================
    /// A referenced path (source, vehicle, manifest) does not exist.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The offending path.
        path: PathBuf,
    },

    /// A referenced path exists but is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// Caller-level contract violation (empty vehicle list, missing template, bad pack name).
    #[error("validation failed: {0}")]
    Validation(String),

    // ==================== Parsing Errors ====================
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ==================== File System Errors ====================
    /// Invalid file path.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDirError(String),
}

impl Error {
    pub(crate) fn not_found(path: &Path) -> Self {
        Error::NotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn not_a_directory(path: &Path) -> Self {
        Error::NotADirectory {
            path: path.to_path_buf(),
        }
    }
}

// Add conversion from walkdir::Error
impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDirError(err.to_string())
    }
}

/// A specialized Result type for pack operations.
pub type Result<T> = std::result::Result<T, Error>;
