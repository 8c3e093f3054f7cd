//! Storage backend capability.

use async_trait::async_trait;

use super::error::StorageError;

/// Identifier of an album container. Same value as the album ID.
pub type ContainerId = i32;

/// Top-level directory / key prefix holding every album container.
pub const CONTAINER_ROOT: &str = "albums";

/// Object store key of the container marker for `id`.
///
/// The trailing separator gives the key folder semantics.
#[must_use]
pub fn container_key(id: ContainerId) -> String {
    format!("{CONTAINER_ROOT}/{id}/")
}

/// Somewhere album containers can be created.
///
/// Implementations must be idempotent: creating a container that already
/// exists succeeds without side effects.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short backend name for logs ("local" or "remote").
    fn kind(&self) -> &'static str;

    /// Create the container for `id` if it does not exist yet.
    async fn create_container(&self, id: ContainerId) -> Result<(), StorageError>;

    /// Check whether the container for `id` exists.
    async fn container_exists(&self, id: ContainerId) -> Result<bool, StorageError>;
}
