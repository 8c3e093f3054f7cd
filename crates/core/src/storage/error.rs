//! Storage error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Required storage configuration is missing or invalid.
    #[error("storage configuration error: {0}")]
    Configuration(String),

    /// Local filesystem operation failed.
    #[error("filesystem operation failed on {}: {source}", path.display())]
    Io {
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Object store rejected the credentials or the request.
    #[error("object store access denied: {0}")]
    PermissionDenied(String),

    /// Object store operation failed (network, throttling, server error).
    #[error("object store operation failed: {0}")]
    Operation(String),
}

impl StorageError {
    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a filesystem error for `path`.
    #[must_use]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<opendal::Error> for StorageError {
    fn from(err: opendal::Error) -> Self {
        match err.kind() {
            opendal::ErrorKind::ConfigInvalid => Self::Configuration(err.to_string()),
            opendal::ErrorKind::PermissionDenied => Self::PermissionDenied(err.to_string()),
            _ => Self::Operation(err.to_string()),
        }
    }
}
