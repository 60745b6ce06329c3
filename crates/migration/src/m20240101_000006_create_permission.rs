//! Create `permissions` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Permission::Table)
                    .if_not_exists()
                    .col(string(Permission::Id).primary_key())
                    .col(string(Permission::Name).unique_key())
                    .col(timestamp_with_time_zone(Permission::CreatedAt))
                    .col(timestamp_with_time_zone(Permission::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Permission::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Permission {
    #[sea_orm(iden = "permissions")]
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}
