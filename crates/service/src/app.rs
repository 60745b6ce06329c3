//! Composition root: one service per entity over a chosen backend.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use configs::{AppConfig, StorageBackend};
use migration::MigratorTrait;
use models::{comment, image, permission, post, role, user};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tracing::info;

use crate::domain::{Comment, Image, Permission, Post, Role, User};
use crate::errors::ServiceError;
use crate::services::{CommentService, ImageService, PermissionService, PostService, RoleService, UserService};
use crate::storage::{MapRepository, SeaOrmRepository, StorageError};

#[derive(Clone)]
pub struct AppServices {
    pub users: UserService,
    pub posts: PostService,
    pub comments: CommentService,
    pub images: ImageService,
    pub roles: RoleService,
    pub permissions: PermissionService,
}

/// Record count per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub users: u64,
    pub posts: u64,
    pub comments: u64,
    pub images: u64,
    pub roles: u64,
    pub permissions: u64,
}

fn user_email(u: &User) -> Option<String> {
    Some(u.email.clone())
}

fn role_name(r: &Role) -> Option<String> {
    Some(r.name.clone())
}

fn permission_name(p: &Permission) -> Option<String> {
    Some(p.name.clone())
}

impl AppServices {
    /// SQL-backed services sharing one connection pool. The schema must already exist.
    pub fn with_database(db: DatabaseConnection) -> Self {
        Self {
            users: UserService::new(Arc::new(SeaOrmRepository::<user::Entity>::new(db.clone()))),
            posts: PostService::new(Arc::new(SeaOrmRepository::<post::Entity>::new(db.clone()))),
            comments: CommentService::new(Arc::new(SeaOrmRepository::<comment::Entity>::new(db.clone()))),
            images: ImageService::new(Arc::new(SeaOrmRepository::<image::Entity>::new(db.clone()))),
            roles: RoleService::new(Arc::new(SeaOrmRepository::<role::Entity>::new(db.clone()))),
            permissions: PermissionService::new(Arc::new(SeaOrmRepository::<permission::Entity>::new(db))),
        }
    }

    /// Volatile services; unique columns behave as in the SQL schema.
    pub fn in_memory() -> Self {
        Self {
            users: UserService::new(Arc::new(MapRepository::<User>::in_memory().with_unique("users.email", user_email))),
            posts: PostService::new(Arc::new(MapRepository::<Post>::in_memory())),
            comments: CommentService::new(Arc::new(MapRepository::<Comment>::in_memory())),
            images: ImageService::new(Arc::new(MapRepository::<Image>::in_memory())),
            roles: RoleService::new(Arc::new(MapRepository::<Role>::in_memory().with_unique("roles.name", role_name))),
            permissions: PermissionService::new(Arc::new(
                MapRepository::<Permission>::in_memory().with_unique("permissions.name", permission_name),
            )),
        }
    }

    /// One JSON file per collection under `dir`.
    pub async fn with_files(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        Ok(Self {
            users: UserService::new(Arc::new(
                MapRepository::<User>::open(dir.join("users.json")).await?.with_unique("users.email", user_email),
            )),
            posts: PostService::new(Arc::new(MapRepository::<Post>::open(dir.join("posts.json")).await?)),
            comments: CommentService::new(Arc::new(MapRepository::<Comment>::open(dir.join("comments.json")).await?)),
            images: ImageService::new(Arc::new(MapRepository::<Image>::open(dir.join("images.json")).await?)),
            roles: RoleService::new(Arc::new(
                MapRepository::<Role>::open(dir.join("roles.json")).await?.with_unique("roles.name", role_name),
            )),
            permissions: PermissionService::new(Arc::new(
                MapRepository::<Permission>::open(dir.join("permissions.json"))
                    .await?
                    .with_unique("permissions.name", permission_name),
            )),
        })
    }

    /// Build from configuration. The database backend connects and runs pending migrations first.
    pub async fn from_config(cfg: &AppConfig) -> anyhow::Result<Self> {
        let services = match cfg.storage.backend {
            StorageBackend::Database => {
                let db = models::db::connect_with_config(&cfg.database).await?;
                migration::Migrator::up(&db, None).await.context("apply migrations")?;
                info!(event = "migrations_applied", "schema up to date");
                Self::with_database(db)
            }
            StorageBackend::File => {
                common::env::ensure_data_dir(&cfg.storage.data_dir).await?;
                Self::with_files(&cfg.storage.data_dir)
                    .await
                    .with_context(|| format!("open data files in {}", cfg.storage.data_dir))?
            }
            StorageBackend::Memory => Self::in_memory(),
        };
        info!(event = "services_ready", backend = ?cfg.storage.backend, "application services built");
        Ok(services)
    }

    pub async fn inventory(&self) -> Result<Inventory, ServiceError> {
        Ok(Inventory {
            users: self.users.count().await?,
            posts: self.posts.count().await?,
            comments: self.comments.count().await?,
            images: self.images.count().await?,
            roles: self.roles.count().await?,
            permissions: self.permissions.count().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewImage, NewRole, NewUser};

    #[tokio::test]
    async fn in_memory_inventory_counts_each_collection() -> Result<(), anyhow::Error> {
        let app = AppServices::in_memory();
        assert_eq!(app.inventory().await?, Inventory::default());

        app.images.create(NewImage { url: "https://img/1".into(), ..Default::default() }).await?;
        app.users.create(NewUser { email: "a@x.com".into(), password: "pw".into(), ..Default::default() }).await?;
        app.roles.create(NewRole { name: "admin".into(), ..Default::default() }).await?;

        let inv = app.inventory().await?;
        assert_eq!((inv.images, inv.users, inv.roles, inv.posts), (1, 1, 1, 0));
        Ok(())
    }

    #[tokio::test]
    async fn file_backend_reloads_from_disk() -> Result<(), anyhow::Error> {
        let dir = std::env::temp_dir().join(format!("social_files_{}", uuid::Uuid::new_v4()));
        let app = AppServices::with_files(&dir).await?;
        let user = app.users.create(NewUser { email: "f@x.com".into(), password: "pw".into(), ..Default::default() }).await?;
        drop(app);

        let reopened = AppServices::with_files(&dir).await?;
        assert_eq!(reopened.users.get_by_id(&user.id).await?, Some(user));
        let dup = reopened.users.create(NewUser { email: "f@x.com".into(), password: "x".into(), ..Default::default() }).await;
        assert!(matches!(dup, Err(ServiceError::ConstraintViolation(_))));

        let _ = tokio::fs::remove_dir_all(&dir).await;
        Ok(())
    }

    #[tokio::test]
    async fn from_config_memory_backend() -> Result<(), anyhow::Error> {
        let mut cfg = AppConfig::default();
        cfg.storage.backend = StorageBackend::Memory;
        let app = AppServices::from_config(&cfg).await?;
        assert_eq!(app.inventory().await?.users, 0);
        Ok(())
    }

    #[tokio::test]
    async fn from_config_sqlite_runs_migrations() -> Result<(), anyhow::Error> {
        if crate::test_support::skip_db_tests() { return Ok(()); }
        let mut cfg = AppConfig::default();
        cfg.database.url = "sqlite::memory:".into();
        let app = AppServices::from_config(&cfg).await?;
        let role = app.roles.create(NewRole { name: "admin".into(), ..Default::default() }).await?;
        assert_eq!(app.roles.get_by_id(&role.id).await?, Some(role));
        Ok(())
    }
}
