//! Album routes.
//!
//! Bodies use camelCase field names.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AppState, error::ApiError};
use gallery_core::album::{
    Album, AlbumId, AlbumWithCover, CreatedAlbum, NewAlbum, PhotoId, UpdateAlbumInput,
};

/// Creates the album routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/albums", get(list_albums).post(create_album))
        .route("/albums/{album_id}", get(get_album).put(update_album))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for creating an album.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAlbumRequest {
    /// Album name.
    pub album_name: String,
    /// Optional description.
    #[serde(default)]
    pub album_description: Option<String>,
}

/// Request body for updating an album. Every field is overwritten.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAlbumRequest {
    /// New name.
    pub album_name: String,
    /// New description.
    #[serde(default)]
    pub album_description: Option<String>,
    /// New cover photo.
    #[serde(default)]
    pub cover_photo_id: Option<PhotoId>,
    /// New visibility flag.
    pub visible: bool,
}

/// Response for a created album.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedAlbumResponse {
    /// Assigned ID.
    pub album_id: AlbumId,
    /// Album name.
    pub album_name: String,
    /// Description.
    pub album_description: Option<String>,
}

/// Response for an album row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumResponse {
    /// Album ID.
    pub album_id: AlbumId,
    /// Album name.
    pub album_name: String,
    /// Description.
    pub album_description: Option<String>,
    /// Cover photo ID.
    pub cover_photo_id: Option<PhotoId>,
    /// Visibility flag.
    pub visible: bool,
}

/// Response for an album with its cover photo path.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumWithCoverResponse {
    #[serde(flatten)]
    album: AlbumResponse,
    /// Path of the cover photo.
    pub cover_photo_path: Option<String>,
}

impl From<CreatedAlbum> for CreatedAlbumResponse {
    fn from(created: CreatedAlbum) -> Self {
        Self {
            album_id: created.album_id,
            album_name: created.album_name,
            album_description: created.album_description,
        }
    }
}

impl From<Album> for AlbumResponse {
    fn from(album: Album) -> Self {
        Self {
            album_id: album.album_id,
            album_name: album.album_name,
            album_description: album.album_description,
            cover_photo_id: album.cover_photo_id,
            visible: album.visible,
        }
    }
}

impl From<AlbumWithCover> for AlbumWithCoverResponse {
    fn from(record: AlbumWithCover) -> Self {
        Self {
            album: record.album.into(),
            cover_photo_path: record.cover_photo_path,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/albums`
async fn list_albums(
    State(state): State<AppState>,
) -> Result<Json<Vec<AlbumWithCoverResponse>>, ApiError> {
    let albums = state.albums.get_albums().await?;
    Ok(Json(albums.into_iter().map(Into::into).collect()))
}

/// GET `/albums/{album_id}`
async fn get_album(
    State(state): State<AppState>,
    album_id: Result<Path<AlbumId>, PathRejection>,
) -> Result<Json<AlbumWithCoverResponse>, ApiError> {
    let Path(album_id) = album_id?;
    let album = state.albums.get_album_by_id(album_id).await?;
    Ok(Json(album.into()))
}

/// POST `/albums`
async fn create_album(
    State(state): State<AppState>,
    payload: Result<Json<CreateAlbumRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;

    let created = state
        .albums
        .create_album(NewAlbum::new(payload.album_name, payload.album_description))
        .await?;

    info!(album_id = created.album_id, "Album created via API");
    Ok((
        StatusCode::CREATED,
        Json(CreatedAlbumResponse::from(created)),
    ))
}

/// PUT `/albums/{album_id}`
async fn update_album(
    State(state): State<AppState>,
    album_id: Result<Path<AlbumId>, PathRejection>,
    payload: Result<Json<UpdateAlbumRequest>, JsonRejection>,
) -> Result<Json<AlbumResponse>, ApiError> {
    let Path(album_id) = album_id?;
    let Json(payload) = payload?;

    let album = state
        .albums
        .update_album(UpdateAlbumInput {
            album_id,
            album_name: payload.album_name,
            album_description: payload.album_description,
            cover_photo_id: payload.cover_photo_id,
            visible: payload.visible,
        })
        .await?;

    Ok(Json(album.into()))
}
