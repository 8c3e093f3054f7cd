//! Album error types.

use thiserror::Error;

use super::types::AlbumId;
use crate::storage::StorageError;

/// Album operation errors.
#[derive(Debug, Error)]
pub enum AlbumError {
    /// Another album already uses this name.
    #[error("album with name '{0}' already exists")]
    Conflict(String),

    /// Album not found.
    #[error("album not found: {0}")]
    NotFound(AlbumId),

    /// Relational store failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Relational store rejected the write by constraint.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// An update by primary key touched more than one row.
    #[error("update of album {album_id} affected {rows} rows")]
    IntegrityAnomaly {
        /// Album that was updated.
        album_id: AlbumId,
        /// Rows reported as affected.
        rows: u64,
    },

    /// The album row is committed but its storage container is not.
    ///
    /// The row is not rolled back; a reconciliation sweep repairs it.
    #[error("album {album_id} was saved but its storage container was not created: {source}")]
    Storage {
        /// ID of the committed album row.
        album_id: AlbumId,
        /// Backend failure.
        #[source]
        source: StorageError,
    },
}

impl AlbumError {
    /// Create a conflict error.
    #[must_use]
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict(name.into())
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: AlbumId) -> Self {
        Self::NotFound(id)
    }

    /// Create a persistence error.
    #[must_use]
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a constraint error.
    #[must_use]
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }

    /// Create a storage error for a committed album.
    #[must_use]
    pub fn storage(album_id: AlbumId, source: StorageError) -> Self {
        Self::Storage { album_id, source }
    }

    /// Whether this failure comes from missing storage configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Storage {
                source: StorageError::Configuration(_),
                ..
            }
        )
    }

    /// ID of an album row left without a storage container, if any.
    #[must_use]
    pub fn orphaned_album(&self) -> Option<AlbumId> {
        match self {
            Self::Storage { album_id, .. } => Some(*album_id),
            _ => None,
        }
    }
}
