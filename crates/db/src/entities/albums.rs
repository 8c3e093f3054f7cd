//! `SeaORM` Entity for albums table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "albums")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub album_id: i32,
    pub album_name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub album_description: Option<String>,
    pub cover_photo_id: Option<i32>,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Weak reference, no foreign key in the schema.
    #[sea_orm(
        belongs_to = "super::photos::Entity",
        from = "Column::CoverPhotoId",
        to = "super::photos::Column::PhotoId"
    )]
    CoverPhoto,
}

impl Related<super::photos::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CoverPhoto.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
