//! Storage backend selection.
//!
//! The active backend is decided once, at process start, from
//! `StorageSettings::remote_enabled`. Nothing downstream branches on the flag
//! again: callers hold the `Arc<dyn StorageBackend>` returned by
//! [`build_backend`].

use std::path::PathBuf;
use std::sync::Arc;

use gallery_shared::StorageSettings;
use tracing::{info, warn};

use super::backend::StorageBackend;
use super::error::StorageError;
use super::local::LocalBackend;
use super::remote::RemoteBackend;

/// Object store connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Bucket name. `None` defers the failure to the first container call.
    pub bucket: Option<String>,
    /// Region.
    pub region: String,
    /// Custom endpoint for S3-compatible stores.
    pub endpoint: Option<String>,
    /// Access key ID.
    pub access_key_id: Option<String>,
    /// Secret access key.
    pub secret_access_key: Option<String>,
}

/// Resolved storage mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// Album containers are directories under `root`.
    Local {
        /// Upload root directory.
        root: PathBuf,
    },
    /// Album containers are key prefixes in an object store.
    Remote(RemoteConfig),
}

impl StorageMode {
    /// Resolve the storage mode from settings.
    ///
    /// A missing bucket does not fail here: remote mode without a bucket
    /// surfaces a configuration error when a container is first touched.
    #[must_use]
    pub fn resolve(settings: &StorageSettings) -> Self {
        if !settings.remote_enabled {
            return Self::Local {
                root: settings.upload_root.clone(),
            };
        }

        Self::Remote(RemoteConfig {
            bucket: settings
                .bucket
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(String::from),
            region: settings.region.clone(),
            endpoint: settings.endpoint.clone(),
            access_key_id: settings.access_key_id.clone(),
            secret_access_key: settings.secret_access_key.clone(),
        })
    }

    /// Get the mode name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Local { .. } => "local",
            Self::Remote(_) => "remote",
        }
    }
}

/// Build the process-wide storage backend.
///
/// # Errors
///
/// Returns an error if the object store client cannot be constructed from
/// the given settings.
pub fn build_backend(settings: &StorageSettings) -> Result<Arc<dyn StorageBackend>, StorageError> {
    match StorageMode::resolve(settings) {
        StorageMode::Local { root } => {
            info!(root = %root.display(), "Using local album storage");
            Ok(Arc::new(LocalBackend::new(root)))
        }
        StorageMode::Remote(remote) => {
            match remote.bucket.as_deref() {
                Some(bucket) => info!(bucket, region = %remote.region, "Using object store album storage"),
                None => warn!("Remote album storage enabled without a bucket name"),
            }
            Ok(Arc::new(RemoteBackend::from_config(&remote)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> StorageSettings {
        StorageSettings {
            upload_root: PathBuf::from("/data"),
            ..StorageSettings::default()
        }
    }

    #[test]
    fn test_flag_off_resolves_local() {
        let mode = StorageMode::resolve(&settings());
        assert_eq!(
            mode,
            StorageMode::Local {
                root: PathBuf::from("/data")
            }
        );
        assert_eq!(mode.name(), "local");
    }

    #[test]
    fn test_flag_on_resolves_remote() {
        let mut settings = settings();
        settings.remote_enabled = true;
        settings.bucket = Some("photo-albums".to_string());

        let StorageMode::Remote(remote) = StorageMode::resolve(&settings) else {
            panic!("expected remote mode");
        };
        assert_eq!(remote.bucket.as_deref(), Some("photo-albums"));
        assert_eq!(remote.region, "us-east-1");
    }

    #[test]
    fn test_blank_bucket_is_unset() {
        let mut settings = settings();
        settings.remote_enabled = true;
        settings.bucket = Some("   ".to_string());

        let StorageMode::Remote(remote) = StorageMode::resolve(&settings) else {
            panic!("expected remote mode");
        };
        assert!(remote.bucket.is_none());
    }

    #[test]
    fn test_bucket_ignored_when_flag_off() {
        let mut settings = settings();
        settings.bucket = Some("photo-albums".to_string());
        assert_eq!(StorageMode::resolve(&settings).name(), "local");
    }

    #[test]
    fn test_build_backend_kinds() {
        let local = build_backend(&settings()).expect("local backend");
        assert_eq!(local.kind(), "local");

        let mut remote_settings = settings();
        remote_settings.remote_enabled = true;
        let remote = build_backend(&remote_settings).expect("remote backend without bucket");
        assert_eq!(remote.kind(), "remote");
    }
}
