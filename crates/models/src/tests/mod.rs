/// Connection and pool configuration tests
pub mod db_tests;


use anyhow::Result;
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect_with_config;

/// Fresh database with the full schema: `TEST_DATABASE_URL` or in-memory SQLite.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let db = connect_with_config(&DatabaseConfig::for_url(url)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub(crate) fn skip_db_tests() -> bool {
    std::env::var("SKIP_DB_TESTS").is_ok()
}
