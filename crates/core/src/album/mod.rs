//! Album service.
//!
//! This module provides business logic for albums including:
//! - Creation with duplicate-name check and storage container creation
//! - Row updates (containers are immutable once created)
//! - Listing and lookup with the cover photo path
//! - Reconciliation of rows left without a container

mod error;
mod service;
mod types;

pub use error::AlbumError;
pub use service::{AlbumRepository, AlbumService};
pub use types::{
    Album, AlbumId, AlbumWithCover, CreatedAlbum, NewAlbum, PhotoId, ReconcileReport,
    UpdateAlbumInput,
};
