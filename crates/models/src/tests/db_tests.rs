use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::{setup_test_db, skip_db_tests};
use crate::db::connect_with_config;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    let backend = db.get_database_backend();
    let stmt = Statement::from_string(backend, "SELECT 1 AS test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let value: i32 = row.try_get("", "test")?;
    assert_eq!(value, 1);
    Ok(())
}

/// In-memory SQLite must survive across statements on the pinned connection
#[tokio::test]
async fn test_memory_database_keeps_schema() -> Result<()> {
    if skip_db_tests() {
        return Ok(());
    }

    let mut cfg = DatabaseConfig::for_url("sqlite::memory:");
    cfg.max_connections = 8;
    let db = connect_with_config(&cfg).await?;
    assert_eq!(db.get_database_backend(), DatabaseBackend::Sqlite);

    migration::Migrator::up(&db, None).await?;
    let pending = migration::Migrator::get_pending_migrations(&db).await?;
    assert!(pending.is_empty());

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT COUNT(*) AS n FROM users".to_string());
    let row = db.query_one(stmt).await?.expect("count row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 0);
    Ok(())
}

/// Migrations can be rolled back and re-applied (private SQLite only)
#[tokio::test]
async fn test_migrations_down_and_up() -> Result<()> {
    if skip_db_tests() || std::env::var("TEST_DATABASE_URL").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    migration::Migrator::down(&db, None).await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert!(applied.is_empty());
    migration::Migrator::up(&db, None).await?;
    let applied = migration::Migrator::get_applied_migrations(&db).await?;
    assert_eq!(applied.len(), migration::Migrator::migrations().len());
    Ok(())
}
