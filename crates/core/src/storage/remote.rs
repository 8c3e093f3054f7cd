//! Object store album containers using Apache OpenDAL.

use async_trait::async_trait;
use opendal::{Operator, services};
use tracing::debug;

use super::backend::{ContainerId, StorageBackend, container_key};
use super::config::RemoteConfig;
use super::error::StorageError;

#[derive(Clone)]
struct Bucket {
    operator: Operator,
    name: String,
}

impl std::fmt::Debug for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bucket")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Stores album containers as zero-length marker objects `albums/{id}/`.
///
/// Without a bucket the backend still constructs, and every container call
/// fails with [`StorageError::Configuration`].
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    bucket: Option<Bucket>,
}

impl RemoteBackend {
    /// Create an S3-compatible backend from connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator cannot be built from the settings.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, StorageError> {
        let Some(bucket) = config.bucket.as_deref() else {
            return Ok(Self::unconfigured());
        };

        let mut builder = services::S3::default()
            .bucket(bucket)
            .region(&config.region);
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint(endpoint);
        }
        if let Some(access_key_id) = &config.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }
        if let Some(secret_access_key) = &config.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        let operator = Operator::new(builder)
            .map_err(|e| StorageError::configuration(e.to_string()))?
            .finish();

        Ok(Self::with_operator(operator, bucket))
    }

    /// Create a backend over an existing operator.
    #[must_use]
    pub fn with_operator(operator: Operator, bucket: impl Into<String>) -> Self {
        Self {
            bucket: Some(Bucket {
                operator,
                name: bucket.into(),
            }),
        }
    }

    /// Create a backend with no bucket configured.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { bucket: None }
    }

    /// Get the bucket name, if configured.
    #[must_use]
    pub fn bucket_name(&self) -> Option<&str> {
        self.bucket.as_ref().map(|b| b.name.as_str())
    }

    fn bucket(&self) -> Result<&Bucket, StorageError> {
        self.bucket
            .as_ref()
            .ok_or_else(|| StorageError::configuration("object store bucket name is not configured"))
    }
}

#[async_trait]
impl StorageBackend for RemoteBackend {
    fn kind(&self) -> &'static str {
        "remote"
    }

    async fn create_container(&self, id: ContainerId) -> Result<(), StorageError> {
        let bucket = self.bucket()?;
        let key = container_key(id);

        // Writes an empty object at the trailing-slash key; rewriting it is harmless.
        bucket.operator.create_dir(&key).await?;

        debug!(bucket = %bucket.name, key = %key, "Album marker written");
        Ok(())
    }

    async fn container_exists(&self, id: ContainerId) -> Result<bool, StorageError> {
        let bucket = self.bucket()?;
        Ok(bucket.operator.exists(&container_key(id)).await?)
    }
}
