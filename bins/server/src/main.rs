//! Gallery API Server
//!
//! Main entry point for the Gallery backend service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gallery_api::{AppState, create_router};
use gallery_core::album::AlbumService;
use gallery_core::storage::build_backend;
use gallery_db::migration::MigratorTrait;
use gallery_db::{AlbumRepository, Migrator, connect};
use gallery_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gallery=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Connect to database and bring the schema up to date
    let db = connect(&config.database).await?;
    info!("Connected to database");
    Migrator::up(&db, None).await?;
    info!("Migrations applied");

    // Select the storage backend once for the process lifetime
    let storage = build_backend(&config.storage)?;
    let albums = AlbumService::new(Arc::new(AlbumRepository::new(db)), storage);

    if config.storage.reconcile_on_startup {
        let report = albums.reconcile_containers().await?;
        if report.failed.is_empty() {
            info!(
                checked = report.checked,
                repaired = report.repaired.len(),
                "Album containers reconciled"
            );
        } else {
            warn!(
                checked = report.checked,
                repaired = report.repaired.len(),
                failed = report.failed.len(),
                "Some album containers could not be created"
            );
        }
    }

    // Create router
    let app = create_router(AppState::new(albums), &config.server.base_path);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
