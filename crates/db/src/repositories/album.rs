//! Album repository for database operations.
//!
//! Implements the core album repository trait using SeaORM. Reads left join
//! the cover photo so albums without one are still returned.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::entities::{albums, photos};
use gallery_core::album::{
    Album, AlbumError, AlbumId, AlbumRepository as AlbumRepoTrait, AlbumWithCover, NewAlbum,
    UpdateAlbumInput,
};

/// Album repository implementation.
#[derive(Debug, Clone)]
pub struct AlbumRepository {
    db: DatabaseConnection,
}

impl AlbumRepository {
    /// Create a new album repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl AlbumRepoTrait for AlbumRepository {
    async fn find_by_name(&self, album_name: &str) -> Result<Vec<Album>, AlbumError> {
        let models = albums::Entity::find()
            .filter(albums::Column::AlbumName.eq(album_name))
            .order_by_asc(albums::Column::AlbumId)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_domain).collect())
    }

    async fn insert(&self, input: &NewAlbum) -> Result<AlbumId, AlbumError> {
        // `visible` is left to the column default.
        let active_model = albums::ActiveModel {
            album_name: Set(input.album_name.clone()),
            album_description: Set(input.album_description.clone()),
            ..Default::default()
        };

        let result = albums::Entity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.last_insert_id)
    }

    async fn update(&self, input: &UpdateAlbumInput) -> Result<u64, AlbumError> {
        let result = albums::Entity::update_many()
            .col_expr(
                albums::Column::AlbumName,
                Expr::value(input.album_name.clone()),
            )
            .col_expr(
                albums::Column::AlbumDescription,
                Expr::value(input.album_description.clone()),
            )
            .col_expr(albums::Column::CoverPhotoId, Expr::value(input.cover_photo_id))
            .col_expr(albums::Column::Visible, Expr::value(input.visible))
            .filter(albums::Column::AlbumId.eq(input.album_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.rows_affected)
    }

    async fn get_all(&self) -> Result<Vec<AlbumWithCover>, AlbumError> {
        let rows = albums::Entity::find()
            .find_also_related(photos::Entity)
            .order_by_asc(albums::Column::AlbumId)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(with_cover).collect())
    }

    async fn get_by_id(&self, album_id: AlbumId) -> Result<Option<AlbumWithCover>, AlbumError> {
        let row = albums::Entity::find_by_id(album_id)
            .find_also_related(photos::Entity)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(with_cover))
    }
}

/// Split constraint rejections from other database failures.
fn map_db_err(err: DbErr) -> AlbumError {
    match err.sql_err() {
        Some(
            SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
        ) => AlbumError::constraint(msg),
        _ => AlbumError::persistence(err.to_string()),
    }
}

/// Convert database model to domain album.
fn to_domain(model: albums::Model) -> Album {
    Album {
        album_id: model.album_id,
        album_name: model.album_name,
        album_description: model.album_description,
        cover_photo_id: model.cover_photo_id,
        visible: model.visible,
    }
}

fn with_cover((album, cover): (albums::Model, Option<photos::Model>)) -> AlbumWithCover {
    AlbumWithCover {
        album: to_domain(album),
        cover_photo_path: cover.map(|photo| photo.photo_path),
    }
}
