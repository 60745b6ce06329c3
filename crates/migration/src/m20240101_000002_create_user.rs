//! Create `users` table with optional FK to `images`.
//!
//! Email uniqueness lives here, not in the service layer.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(string(User::Id).primary_key())
                    .col(string(User::Email).unique_key())
                    .col(string(User::Password))
                    .col(string_null(User::Name))
                    .col(date_null(User::Birthday))
                    .col(string_null(User::LinkSocialMedia))
                    .col(text_null(User::Bio))
                    .col(string_null(User::ImageId))
                    .col(timestamp_with_time_zone(User::CreatedAt))
                    .col(timestamp_with_time_zone(User::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_users_image")
                            .from(User::Table, User::ImageId)
                            .to(Image::Table, Image::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Password,
    Name,
    Birthday,
    LinkSocialMedia,
    Bio,
    ImageId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Image {
    #[sea_orm(iden = "images")]
    Table,
    Id,
}
