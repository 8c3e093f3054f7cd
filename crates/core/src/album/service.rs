//! Album service implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::AlbumError;
use super::types::{
    Album, AlbumId, AlbumWithCover, CreatedAlbum, NewAlbum, ReconcileReport, UpdateAlbumInput,
};
use crate::storage::StorageBackend;

/// Repository trait for album persistence.
///
/// This trait is implemented by the db crate to provide actual database operations.
pub trait AlbumRepository: Send + Sync {
    /// Find albums with exactly this name.
    fn find_by_name(
        &self,
        album_name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Album>, AlbumError>> + Send;

    /// Insert an album row and return its assigned ID.
    ///
    /// Store-level constraint rejections are reported as
    /// [`AlbumError::Constraint`].
    fn insert(
        &self,
        input: &NewAlbum,
    ) -> impl std::future::Future<Output = Result<AlbumId, AlbumError>> + Send;

    /// Overwrite the album row and return the number of affected rows.
    fn update(
        &self,
        input: &UpdateAlbumInput,
    ) -> impl std::future::Future<Output = Result<u64, AlbumError>> + Send;

    /// List every album with its cover photo path.
    fn get_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<AlbumWithCover>, AlbumError>> + Send;

    /// Find an album with its cover photo path.
    fn get_by_id(
        &self,
        album_id: AlbumId,
    ) -> impl std::future::Future<Output = Result<Option<AlbumWithCover>, AlbumError>> + Send;
}

/// Album service keeping album rows and storage containers in step.
pub struct AlbumService<R: AlbumRepository> {
    repo: Arc<R>,
    storage: Arc<dyn StorageBackend>,
}

impl<R: AlbumRepository> AlbumService<R> {
    /// Create a new album service.
    #[must_use]
    pub fn new(repo: Arc<R>, storage: Arc<dyn StorageBackend>) -> Self {
        Self { repo, storage }
    }

    /// Name of the active storage backend.
    #[must_use]
    pub fn storage_kind(&self) -> &'static str {
        self.storage.kind()
    }

    /// Create an album and its storage container.
    ///
    /// Steps run strictly in order: duplicate-name check, row insert,
    /// container creation. The name check is advisory; two concurrent calls
    /// with the same name can both pass it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An album with the same name exists (`Conflict`, nothing written)
    /// - The insert fails (`Persistence`/`Constraint`, no container created)
    /// - The container cannot be created (`Storage`); the row stays committed
    pub async fn create_album(&self, input: NewAlbum) -> Result<CreatedAlbum, AlbumError> {
        let existing = self.repo.find_by_name(&input.album_name).await?;
        if !existing.is_empty() {
            debug!(album_name = %input.album_name, "Duplicate album name rejected");
            return Err(AlbumError::conflict(input.album_name));
        }

        let album_id = self.repo.insert(&input).await?;

        if let Err(e) = self.storage.create_container(album_id).await {
            warn!(
                album_id,
                backend = self.storage.kind(),
                error = %e,
                "Album row committed without storage container"
            );
            return Err(AlbumError::storage(album_id, e));
        }

        info!(
            album_id,
            album_name = %input.album_name,
            backend = self.storage.kind(),
            "Album created"
        );

        Ok(CreatedAlbum {
            album_id,
            album_name: input.album_name,
            album_description: input.album_description,
        })
    }

    /// Update an album's row. The storage container is never touched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No row was affected (`NotFound`)
    /// - More than one row was affected (`IntegrityAnomaly`)
    /// - Database operation fails
    pub async fn update_album(&self, input: UpdateAlbumInput) -> Result<Album, AlbumError> {
        let rows = self.repo.update(&input).await?;

        match rows {
            0 => Err(AlbumError::not_found(input.album_id)),
            1 => {
                info!(album_id = input.album_id, "Album updated");
                Ok(Album::from(input))
            }
            rows => {
                warn!(album_id = input.album_id, rows, "Album update hit multiple rows");
                Err(AlbumError::IntegrityAnomaly {
                    album_id: input.album_id,
                    rows,
                })
            }
        }
    }

    /// List all albums with their cover photo paths.
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails.
    pub async fn get_albums(&self) -> Result<Vec<AlbumWithCover>, AlbumError> {
        self.repo.get_all().await
    }

    /// Get album by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if album not found or database operation fails.
    pub async fn get_album_by_id(&self, album_id: AlbumId) -> Result<AlbumWithCover, AlbumError> {
        self.repo
            .get_by_id(album_id)
            .await?
            .ok_or_else(|| AlbumError::not_found(album_id))
    }

    /// Create the missing storage container of every album.
    ///
    /// Per-album storage failures are collected in the report. Rows are
    /// never deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the album list cannot be read.
    pub async fn reconcile_containers(&self) -> Result<ReconcileReport, AlbumError> {
        let albums = self.repo.get_all().await?;
        let mut report = ReconcileReport {
            checked: albums.len(),
            ..ReconcileReport::default()
        };

        for AlbumWithCover { album, .. } in albums {
            let album_id = album.album_id;

            match self.storage.container_exists(album_id).await {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    report.failed.push((album_id, e.to_string()));
                    continue;
                }
            }

            match self.storage.create_container(album_id).await {
                Ok(()) => {
                    info!(album_id, "Missing album container created");
                    report.repaired.push(album_id);
                }
                Err(e) => {
                    warn!(album_id, error = %e, "Album container still missing");
                    report.failed.push((album_id, e.to_string()));
                }
            }
        }

        Ok(report)
    }
}
