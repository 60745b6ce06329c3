//! Storage abstractions for the service layer
//!
//! One generic [`Repository`] contract, implemented once per backend:
//! [`SeaOrmRepository`] for SQL databases and [`MapRepository`] for an
//! in-process map that can persist itself as a JSON file.

use async_trait::async_trait;
use common::pagination::Pagination;
use sea_orm::{sqlx, DbErr, RuntimeErr, SqlErr};
use thiserror::Error;

pub mod map_store;
pub mod mapper;
pub mod seaorm;

pub use map_store::MapRepository;
pub use seaorm::{RowMapping, SeaOrmRepository};

/// Failures surfaced by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("record not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// SQLite reports `ON DELETE RESTRICT` failures as extended code 1811,
/// which `DbErr::sql_err` does not classify.
const SQLITE_CONSTRAINT_TRIGGER: &str = "1811";

fn database_error_code(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => e.code().map(|c| c.into_owned()),
        _ => None,
    }
}

impl From<DbErr> for StorageError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => return Self::ConstraintViolation(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => return Self::ConstraintViolation(msg),
            _ => {}
        }
        if database_error_code(&err).as_deref() == Some(SQLITE_CONSTRAINT_TRIGGER) {
            return Self::ConstraintViolation(err.to_string());
        }
        match err {
            DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => Self::NotFound,
            other => Self::Backend(other.to_string()),
        }
    }
}

/// Keyed storage over one record type.
///
/// `K` is the identifier type; every entity here uses string ids.
#[async_trait]
pub trait Repository<T: Send + 'static, K: ?Sized + Sync = str>: Send + Sync {
    /// All records, in no particular order.
    async fn find_all(&self) -> Result<Vec<T>, StorageError>;

    /// One page of records ordered by id.
    async fn find_page(&self, page: Pagination) -> Result<Vec<T>, StorageError>;

    async fn find_by_id(&self, id: &K) -> Result<Option<T>, StorageError>;

    /// Records whose reference `field` points at `id`, ordered by id.
    /// Unknown fields are a backend error.
    async fn find_by_reference(&self, field: &str, id: &K) -> Result<Vec<T>, StorageError>;

    /// Persist a new record; duplicate ids or unique keys are constraint violations.
    async fn insert(&self, record: T) -> Result<T, StorageError>;

    /// Replace an existing record; [`StorageError::NotFound`] when absent.
    async fn update(&self, record: T) -> Result<T, StorageError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: &K) -> Result<bool, StorageError>;

    async fn count(&self) -> Result<u64, StorageError>;
}

#[cfg(test)]
mod tests {
    use configs::DatabaseConfig;
    use models::db::connect_with_config;
    use sea_orm::ConnectionTrait;

    use super::*;
    use crate::test_support::skip_db_tests;

    #[test]
    fn unmatched_update_is_not_found() {
        assert!(matches!(StorageError::from(DbErr::RecordNotUpdated), StorageError::NotFound));
        assert!(matches!(StorageError::from(DbErr::Custom("boom".into())), StorageError::Backend(_)));
    }

    #[tokio::test]
    async fn sqlite_restrict_is_a_constraint_violation() -> Result<(), anyhow::Error> {
        if skip_db_tests() { return Ok(()); }
        let db = connect_with_config(&DatabaseConfig::for_url("sqlite::memory:")).await?;
        db.execute_unprepared("CREATE TABLE parent (id TEXT PRIMARY KEY)").await?;
        db.execute_unprepared(
            "CREATE TABLE child (id TEXT PRIMARY KEY, parent_id TEXT NOT NULL REFERENCES parent(id) ON DELETE RESTRICT)",
        )
        .await?;
        db.execute_unprepared("INSERT INTO parent (id) VALUES ('p')").await?;
        db.execute_unprepared("INSERT INTO child (id, parent_id) VALUES ('c', 'p')").await?;

        let err = db.execute_unprepared("DELETE FROM parent WHERE id = 'p'").await.unwrap_err();
        assert!(matches!(StorageError::from(err), StorageError::ConstraintViolation(_)));
        Ok(())
    }
}
