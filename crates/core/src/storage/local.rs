//! Local filesystem album containers.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::backend::{CONTAINER_ROOT, ContainerId, StorageBackend};
use super::error::StorageError;

/// Stores album containers as directories: `{root}/albums/{id}`.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a backend rooted at the upload directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory of the container for `id`.
    #[must_use]
    pub fn container_path(&self, id: ContainerId) -> PathBuf {
        self.root.join(CONTAINER_ROOT).join(id.to_string())
    }
}

#[async_trait]
impl StorageBackend for LocalBackend {
    fn kind(&self) -> &'static str {
        "local"
    }

    async fn create_container(&self, id: ContainerId) -> Result<(), StorageError> {
        let path = self.container_path(id);

        // create_dir_all is a no-op for an existing directory
        fs::create_dir_all(&path)
            .await
            .map_err(|e| StorageError::io(&path, e))?;

        debug!(path = %path.display(), "Album directory ready");
        Ok(())
    }

    async fn container_exists(&self, id: ContainerId) -> Result<bool, StorageError> {
        let path = self.container_path(id);

        match fs::metadata(&path).await {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::io(&path, e)),
        }
    }
}
