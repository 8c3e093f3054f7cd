//! Mapping of album failures to JSON error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use gallery_core::album::AlbumError;
use gallery_core::storage::StorageError;
use gallery_shared::AppError;

/// Error returned by route handlers.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AlbumError> for ApiError {
    fn from(err: AlbumError) -> Self {
        let app = match err {
            AlbumError::Conflict(name) => {
                AppError::Conflict(format!("Album '{name}' already exists"))
            }
            AlbumError::NotFound(id) => AppError::NotFound(format!("Album {id} not found")),
            err @ (AlbumError::Persistence(_)
            | AlbumError::Constraint(_)
            | AlbumError::IntegrityAnomaly { .. }) => AppError::Database(err.to_string()),
            AlbumError::Storage { album_id, source } => {
                let saved =
                    format!("Album {album_id} was saved but its storage container was not created");
                match source {
                    StorageError::Configuration(reason) => {
                        AppError::Configuration(format!("{saved}: {reason}"))
                    }
                    _ => AppError::Storage(saved),
                }
            }
        };
        Self(app)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &self.0 {
            AppError::Database(_) => {
                error!(error = %self.0, "Request failed");
                "An internal error occurred".to_string()
            }
            err if err.is_client_error() => {
                debug!(error = %err, "Request rejected");
                err.to_string()
            }
            err => {
                error!(error = %err, "Request failed");
                err.to_string()
            }
        };

        (
            status,
            Json(json!({
                "error": self.0.error_code(),
                "message": message
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AlbumError::conflict("Summer 2024"), StatusCode::CONFLICT, "CONFLICT")]
    #[case(AlbumError::not_found(7), StatusCode::NOT_FOUND, "NOT_FOUND")]
    #[case(
        AlbumError::persistence("connection reset"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR"
    )]
    #[case(
        AlbumError::constraint("UNIQUE constraint failed"),
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR"
    )]
    #[case(
        AlbumError::IntegrityAnomaly { album_id: 1, rows: 2 },
        StatusCode::INTERNAL_SERVER_ERROR,
        "DATABASE_ERROR"
    )]
    #[case(
        AlbumError::storage(3, StorageError::Operation("timeout".to_string())),
        StatusCode::BAD_GATEWAY,
        "STORAGE_ERROR"
    )]
    #[case(
        AlbumError::storage(3, StorageError::configuration("no bucket")),
        StatusCode::INTERNAL_SERVER_ERROR,
        "CONFIGURATION_ERROR"
    )]
    fn test_album_error_mapping(
        #[case] err: AlbumError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let api = ApiError::from(err);
        assert_eq!(api.0.error_code(), code);
        assert_eq!(api.into_response().status(), status);
    }

    #[test]
    fn test_storage_message_names_committed_album() {
        let api = ApiError::from(AlbumError::storage(
            12,
            StorageError::configuration("object store bucket name is not configured"),
        ));
        let msg = api.0.to_string();
        assert!(msg.contains("Album 12"));
        assert!(msg.contains("bucket name is not configured"));
    }
}
