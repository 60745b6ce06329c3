#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Shared external databases are migrated once per test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// `TEST_DATABASE_URL` when set, otherwise a private in-memory SQLite database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => {
            MIGRATED
                .get_or_try_init(|| async {
                    let db = connect_with_config(&DatabaseConfig::for_url(url.clone())).await?;
                    migration::Migrator::up(&db, None).await?;
                    drop(db);
                    Ok::<(), anyhow::Error>(())
                })
                .await?;
            let mut cfg = DatabaseConfig::for_url(url);
            cfg.min_connections = 1;
            cfg.acquire_timeout_secs = 10;
            connect_with_config(&cfg).await
        }
        Err(_) => {
            let db = connect_with_config(&DatabaseConfig::for_url("sqlite::memory:")).await?;
            migration::Migrator::up(&db, None).await?;
            Ok(db)
        }
    }
}

pub fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok()
}

/// Unique suffix for values that must not collide on a shared database.
pub fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4().simple())
}
