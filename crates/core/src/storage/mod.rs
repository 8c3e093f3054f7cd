//! Album storage containers.
//!
//! Every album owns a container named after its ID, created once when the
//! album is created:
//! - Local filesystem: directory `{upload_root}/albums/{id}`
//! - Object store (S3-compatible, via Apache OpenDAL): marker key `albums/{id}/`
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────────┐
//! │ StorageSettings          │─────▶│ build_backend (once, at boot)│
//! │ remote_enabled: bool     │      └──────────────┬───────────────┘
//! └──────────────────────────┘                     │
//!                              ┌───────────────────┴───────────────┐
//!                              ▼                                   ▼
//!                     LocalBackend (tokio::fs)         RemoteBackend (opendal)
//! ```

mod backend;
mod config;
mod error;
mod local;
mod remote;

pub use backend::{CONTAINER_ROOT, ContainerId, StorageBackend, container_key};
pub use config::{RemoteConfig, StorageMode, build_backend};
pub use error::StorageError;
pub use local::LocalBackend;
pub use remote::RemoteBackend;
