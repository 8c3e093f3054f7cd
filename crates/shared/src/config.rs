//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Album storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path prefix the album routes are nested under.
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            base_path: default_base_path(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5050
}

fn default_base_path() -> String {
    "/api".to_string()
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Where album containers live and how to reach the object store.
///
/// `remote_enabled` is the single switch between the local directory tree
/// and the object store. Credentials are optional: when absent the object
/// store client falls back to its ambient credential chain.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Root directory for local album containers.
    #[serde(default = "default_upload_root")]
    pub upload_root: PathBuf,
    /// Store album containers in the object store instead of on disk.
    #[serde(default)]
    pub remote_enabled: bool,
    /// Bucket holding album containers when remote storage is enabled.
    #[serde(default)]
    pub bucket: Option<String>,
    /// Object store region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Custom endpoint for S3-compatible stores.
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Access key ID.
    #[serde(default)]
    pub access_key_id: Option<String>,
    /// Secret access key.
    #[serde(default)]
    pub secret_access_key: Option<String>,
    /// Run the container reconciliation sweep once at startup.
    #[serde(default)]
    pub reconcile_on_startup: bool,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_root: default_upload_root(),
            remote_enabled: false,
            bucket: None,
            region: default_region(),
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
            reconcile_on_startup: false,
        }
    }
}

fn default_upload_root() -> PathBuf {
    PathBuf::from("./uploads")
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`,
    /// `config/{RUN_MODE}`, then `GALLERY__`-prefixed environment variables
    /// (e.g. `GALLERY__STORAGE__REMOTE_ENABLED=true`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("GALLERY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
