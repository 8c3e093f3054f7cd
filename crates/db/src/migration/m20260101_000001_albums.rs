//! Albums and photos tables.
//!
//! `album_name` is indexed but not unique. `cover_photo_id` has no foreign
//! key so a cover may dangle.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Albums::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Albums::AlbumId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Albums::AlbumName).string_len(255).not_null())
                    .col(ColumnDef::new(Albums::AlbumDescription).text().null())
                    .col(ColumnDef::new(Albums::CoverPhotoId).integer().null())
                    .col(
                        ColumnDef::new(Albums::Visible)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_albums_name")
                    .table(Albums::Table)
                    .col(Albums::AlbumName)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Photos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Photos::PhotoId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Photos::AlbumId).integer().not_null())
                    .col(ColumnDef::new(Photos::PhotoPath).text().not_null())
                    .col(
                        ColumnDef::new(Photos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photos_album")
                            .from(Photos::Table, Photos::AlbumId)
                            .to(Albums::Table, Albums::AlbumId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photos_album")
                    .table(Photos::Table)
                    .col(Photos::AlbumId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Photos::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Albums::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Albums {
    Table,
    AlbumId,
    AlbumName,
    AlbumDescription,
    CoverPhotoId,
    Visible,
}

#[derive(DeriveIden)]
enum Photos {
    Table,
    PhotoId,
    AlbumId,
    PhotoPath,
    CreatedAt,
}
