//! Create `images` table.
//!
//! Uploaded assets; users reference one as their avatar.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Image::Table)
                    .if_not_exists()
                    .col(string(Image::Id).primary_key())
                    .col(string(Image::Url))
                    .col(string_null(Image::PublicId))
                    .col(timestamp_with_time_zone(Image::CreatedAt))
                    .col(timestamp_with_time_zone(Image::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Image::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Image {
    #[sea_orm(iden = "images")]
    Table,
    Id,
    Url,
    PublicId,
    CreatedAt,
    UpdatedAt,
}
