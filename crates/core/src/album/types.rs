//! Album types and data structures.

/// Album identifier, assigned by the repository on insert.
pub type AlbumId = i32;

/// Photo identifier.
pub type PhotoId = i32;

/// Input for creating an album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAlbum {
    /// Album name, unique among albums at creation time.
    pub album_name: String,
    /// Optional description.
    pub album_description: Option<String>,
}

impl NewAlbum {
    /// Build a creation input.
    pub fn new(album_name: impl Into<String>, album_description: Option<String>) -> Self {
        Self {
            album_name: album_name.into(),
            album_description,
        }
    }
}

/// Result of a successful album creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedAlbum {
    /// Assigned ID, also the storage container name.
    pub album_id: AlbumId,
    /// Album name.
    pub album_name: String,
    /// Description.
    pub album_description: Option<String>,
}

/// Input for updating an album. Every field is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateAlbumInput {
    /// Album to update.
    pub album_id: AlbumId,
    /// New name.
    pub album_name: String,
    /// New description.
    pub album_description: Option<String>,
    /// New cover photo. Not checked against the photos table.
    pub cover_photo_id: Option<PhotoId>,
    /// New visibility flag.
    pub visible: bool,
}

/// Album row fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    /// Unique identifier.
    pub album_id: AlbumId,
    /// Album name.
    pub album_name: String,
    /// Description.
    pub album_description: Option<String>,
    /// Cover photo reference.
    pub cover_photo_id: Option<PhotoId>,
    /// Listing visibility flag.
    pub visible: bool,
}

impl From<UpdateAlbumInput> for Album {
    fn from(input: UpdateAlbumInput) -> Self {
        Self {
            album_id: input.album_id,
            album_name: input.album_name,
            album_description: input.album_description,
            cover_photo_id: input.cover_photo_id,
            visible: input.visible,
        }
    }
}

/// Album joined with the path of its cover photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumWithCover {
    /// Album row.
    pub album: Album,
    /// Path of the cover photo; `None` when unset or dangling.
    pub cover_photo_path: Option<String>,
}

/// Outcome of a container reconciliation sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Albums inspected.
    pub checked: usize,
    /// Albums whose missing container was created.
    pub repaired: Vec<AlbumId>,
    /// Albums whose container could not be checked or created.
    pub failed: Vec<(AlbumId, String)>,
}

impl ReconcileReport {
    /// True when every album already had its container.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.repaired.is_empty() && self.failed.is_empty()
    }
}
