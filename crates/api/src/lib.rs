//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for albums
//! - Health check
//! - JSON error responses

pub mod error;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use gallery_core::album::AlbumService;
use gallery_db::AlbumRepository;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Album service backed by the database and the active storage backend.
    pub albums: Arc<AlbumService<AlbumRepository>>,
}

impl AppState {
    /// Wrap an album service for sharing across handlers.
    #[must_use]
    pub fn new(albums: AlbumService<AlbumRepository>) -> Self {
        Self {
            albums: Arc::new(albums),
        }
    }
}

/// Creates the main application router with every route under `base_path`.
pub fn create_router(state: AppState, base_path: &str) -> Router {
    let base_path = base_path.trim_end_matches('/');
    let router = if base_path.is_empty() {
        Router::new().merge(routes::api_routes())
    } else {
        Router::new().nest(base_path, routes::api_routes())
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
