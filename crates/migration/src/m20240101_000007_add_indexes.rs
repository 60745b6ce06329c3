use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Posts: lookup by author
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_posts_user")
                    .table(Post::Table)
                    .col(Post::UserId)
                    .to_owned(),
            )
            .await?;

        // Comments: lookup by post and by author
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_comments_post")
                    .table(Comment::Table)
                    .col(Comment::PostId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_comments_user")
                    .table(Comment::Table)
                    .col(Comment::UserId)
                    .to_owned(),
            )
            .await?;

        // Users: avatar back-reference
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_image")
                    .table(User::Table)
                    .col(User::ImageId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_users_image").table(User::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comments_user").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_comments_post").table(Comment::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_posts_user").table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum User {
    #[sea_orm(iden = "users")]
    Table,
    ImageId,
}

#[derive(DeriveIden)]
enum Post {
    #[sea_orm(iden = "posts")]
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Comment {
    #[sea_orm(iden = "comments")]
    Table,
    UserId,
    PostId,
}
