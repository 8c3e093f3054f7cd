//! Integration tests for the album repository.
//!
//! Runs the real migrator against an in-memory SQLite database, then drives
//! the repository directly and through the album service.

use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectionTrait, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tempfile::TempDir;

use gallery_core::album::{
    AlbumError, AlbumRepository as AlbumRepoTrait, AlbumService, NewAlbum, UpdateAlbumInput,
};
use gallery_core::storage::LocalBackend;
use gallery_db::{AlbumRepository, Migrator, connect, entities::photos};
use gallery_shared::DatabaseConfig;

/// Connect to a fresh in-memory database and run migrations.
///
/// A single pooled connection keeps every query on the same in-memory database.
async fn setup_db() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        min_connections: 1,
    };
    let db = connect(&config)
        .await
        .expect("Failed to connect to database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

async fn add_photo(db: &DatabaseConnection, album_id: i32, path: &str) -> i32 {
    let photo = photos::ActiveModel {
        album_id: Set(album_id),
        photo_path: Set(path.to_string()),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    photo
        .insert(db)
        .await
        .expect("Failed to create test photo")
        .photo_id
}

#[tokio::test]
async fn test_insert_and_find_by_name() {
    let db = setup_db().await;
    let repo = AlbumRepository::new(db);

    let first = repo
        .insert(&NewAlbum::new("Summer 2024", Some("Beach trip".to_string())))
        .await
        .expect("Failed to insert album");
    let second = repo
        .insert(&NewAlbum::new("Winter", None))
        .await
        .expect("Failed to insert album");
    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let found = repo.find_by_name("Summer 2024").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].album_id, first);
    assert_eq!(found[0].album_description.as_deref(), Some("Beach trip"));
    assert!(found[0].visible, "visible should default to true");
    assert!(found[0].cover_photo_id.is_none());

    assert!(repo.find_by_name("Autumn").await.unwrap().is_empty());
    assert!(repo.find_by_name("summer 2024").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_duplicate_names_are_not_rejected_by_the_store() {
    let db = setup_db().await;
    let repo = AlbumRepository::new(db);

    repo.insert(&NewAlbum::new("Twins", None)).await.unwrap();
    repo.insert(&NewAlbum::new("Twins", None)).await.unwrap();

    let found = repo.find_by_name("Twins").await.unwrap();
    assert_eq!(
        found.iter().map(|a| a.album_id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn test_store_constraint_rejection_is_constraint_error() {
    let db = setup_db().await;
    db.execute_unprepared("CREATE UNIQUE INDEX uq_albums_name ON albums(album_name)")
        .await
        .expect("Failed to create unique index");
    let repo = AlbumRepository::new(db);

    repo.insert(&NewAlbum::new("Twins", None)).await.unwrap();
    let err = repo
        .insert(&NewAlbum::new("Twins", None))
        .await
        .unwrap_err();

    assert!(matches!(err, AlbumError::Constraint(_)), "unexpected error: {err}");
    assert_eq!(repo.find_by_name("Twins").await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_reports_affected_rows() {
    let db = setup_db().await;
    let repo = AlbumRepository::new(db);
    let album_id = repo.insert(&NewAlbum::new("Draft", None)).await.unwrap();

    let rows = repo
        .update(&UpdateAlbumInput {
            album_id,
            album_name: "Final".to_string(),
            album_description: Some("Edited".to_string()),
            cover_photo_id: Some(42),
            visible: false,
        })
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let album = repo.get_by_id(album_id).await.unwrap().unwrap().album;
    assert_eq!(album.album_name, "Final");
    assert_eq!(album.album_description.as_deref(), Some("Edited"));
    assert_eq!(album.cover_photo_id, Some(42));
    assert!(!album.visible);

    let rows = repo
        .update(&UpdateAlbumInput {
            album_id: 999,
            album_name: "Ghost".to_string(),
            album_description: None,
            cover_photo_id: None,
            visible: true,
        })
        .await
        .unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn test_update_can_clear_optional_fields() {
    let db = setup_db().await;
    let repo = AlbumRepository::new(db);
    let album_id = repo
        .insert(&NewAlbum::new("Trip", Some("Notes".to_string())))
        .await
        .unwrap();

    repo.update(&UpdateAlbumInput {
        album_id,
        album_name: "Trip".to_string(),
        album_description: None,
        cover_photo_id: None,
        visible: true,
    })
    .await
    .unwrap();

    let album = repo.get_by_id(album_id).await.unwrap().unwrap().album;
    assert!(album.album_description.is_none());
}

#[tokio::test]
async fn test_get_all_left_joins_cover_path() {
    let db = setup_db().await;
    let repo = AlbumRepository::new(db.clone());

    let with_cover = repo.insert(&NewAlbum::new("Covered", None)).await.unwrap();
    let without_cover = repo.insert(&NewAlbum::new("Bare", None)).await.unwrap();
    let dangling = repo.insert(&NewAlbum::new("Dangling", None)).await.unwrap();

    let photo_id = add_photo(&db, with_cover, "albums/1/sunset.jpg").await;
    for (album_id, name, cover) in [(with_cover, "Covered", photo_id), (dangling, "Dangling", 999)] {
        repo.update(&UpdateAlbumInput {
            album_id,
            album_name: name.to_string(),
            album_description: None,
            cover_photo_id: Some(cover),
            visible: true,
        })
        .await
        .unwrap();
    }

    let all = repo.get_all().await.unwrap();
    assert_eq!(
        all.iter().map(|a| a.album.album_id).collect::<Vec<_>>(),
        vec![with_cover, without_cover, dangling]
    );
    assert_eq!(all[0].cover_photo_path.as_deref(), Some("albums/1/sunset.jpg"));
    assert!(all[1].cover_photo_path.is_none());
    assert_eq!(all[2].album.cover_photo_id, Some(999));
    assert!(all[2].cover_photo_path.is_none());

    let single = repo.get_by_id(with_cover).await.unwrap().unwrap();
    assert_eq!(single, all[0]);
    assert!(repo.get_by_id(12345).await.unwrap().is_none());
}

#[tokio::test]
async fn test_service_creates_row_and_container() {
    let db = setup_db().await;
    let root = TempDir::new().unwrap();
    let service = AlbumService::new(
        Arc::new(AlbumRepository::new(db)),
        Arc::new(LocalBackend::new(root.path())),
    );

    let created = service
        .create_album(NewAlbum::new("Summer 2024", Some("Beach trip".to_string())))
        .await
        .unwrap();
    assert_eq!(created.album_id, 1);
    assert!(root.path().join("albums").join("1").is_dir());

    let err = service
        .create_album(NewAlbum::new("Summer 2024", Some("Beach trip".to_string())))
        .await
        .unwrap_err();
    assert!(matches!(err, AlbumError::Conflict(_)));
    assert_eq!(service.get_albums().await.unwrap().len(), 1);

    let report = service.reconcile_containers().await.unwrap();
    assert!(report.is_clean());
    assert_eq!(report.checked, 1);
}

#[tokio::test]
async fn test_concurrent_creates_with_distinct_names() {
    let db = setup_db().await;
    let root = TempDir::new().unwrap();
    let service = Arc::new(AlbumService::new(
        Arc::new(AlbumRepository::new(db)),
        Arc::new(LocalBackend::new(root.path())),
    ));

    let tasks = (0..8).map(|i| {
        let service = service.clone();
        tokio::spawn(async move {
            service
                .create_album(NewAlbum::new(format!("Album {i}"), None))
                .await
        })
    });

    let mut ids: Vec<i32> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.expect("task panicked").expect("create failed").album_id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<_>>());

    for id in ids {
        assert!(root.path().join("albums").join(id.to_string()).is_dir());
    }
}

#[tokio::test]
async fn test_overlapping_same_name_creates_yield_success_or_conflict() {
    let db = setup_db().await;
    let root = TempDir::new().unwrap();
    let service = Arc::new(AlbumService::new(
        Arc::new(AlbumRepository::new(db)),
        Arc::new(LocalBackend::new(root.path())),
    ));

    let tasks = (0..4).map(|_| {
        let service = service.clone();
        tokio::spawn(async move { service.create_album(NewAlbum::new("Race", None)).await })
    });

    let results: Vec<_> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.expect("task panicked"))
        .collect();

    // Queries share one pooled connection, so the checks and inserts of the
    // tasks interleave but never run in parallel. Every create either wins or
    // conflicts, and only winners leave a row.
    let created = results.iter().filter(|r| r.is_ok()).count();
    assert!(created >= 1);
    for result in &results {
        if let Err(e) = result {
            assert!(matches!(e, AlbumError::Conflict(_)), "unexpected error: {e}");
        }
    }

    let rows = service.get_albums().await.unwrap().len();
    assert_eq!(rows, created);
}
