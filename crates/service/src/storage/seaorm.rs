use std::marker::PhantomData;

use async_trait::async_trait;
use common::pagination::Pagination;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use super::{Repository, StorageError};
use crate::domain::Record;

/// Explicit conversion between a storage row and its domain record.
pub trait RowMapping: EntityTrait {
    type Record: Record;

    /// Primary key column; ids are strings.
    fn id_column() -> Self::Column;

    /// Column backing the record's reference field `field`.
    fn reference_column(_field: &str) -> Option<Self::Column> {
        None
    }

    fn to_record(row: Self::Model) -> Self::Record;

    /// Every column set, ready for insert or full update.
    fn to_row(record: Self::Record) -> Self::ActiveModel;
}

/// SeaORM-backed repository implementation, shared by every mapped entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, entity: PhantomData }
    }
}

#[async_trait]
impl<E> Repository<E::Record> for SeaOrmRepository<E>
where
    E: RowMapping,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<E::Record>, StorageError> {
        let rows = E::find().all(&self.db).await?;
        Ok(rows.into_iter().map(E::to_record).collect())
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<E::Record>, StorageError> {
        let (page_idx, per_page) = page.normalize();
        let rows = E::find()
            .order_by_asc(E::id_column())
            .paginate(&self.db, per_page)
            .fetch_page(page_idx)
            .await?;
        Ok(rows.into_iter().map(E::to_record).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<E::Record>, StorageError> {
        let row = E::find().filter(E::id_column().eq(id)).one(&self.db).await?;
        Ok(row.map(E::to_record))
    }

    async fn find_by_reference(&self, field: &str, id: &str) -> Result<Vec<E::Record>, StorageError> {
        let column = E::reference_column(field).ok_or_else(|| {
            StorageError::Backend(format!("{} has no reference {field}", <E::Record as Record>::KIND))
        })?;
        let rows = E::find().filter(column.eq(id)).order_by_asc(E::id_column()).all(&self.db).await?;
        Ok(rows.into_iter().map(E::to_record).collect())
    }

    async fn insert(&self, record: E::Record) -> Result<E::Record, StorageError> {
        let row = E::to_row(record).insert(&self.db).await?;
        Ok(E::to_record(row))
    }

    async fn update(&self, record: E::Record) -> Result<E::Record, StorageError> {
        let row = E::to_row(record).update(&self.db).await?;
        Ok(E::to_record(row))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let res = E::delete_many().filter(E::id_column().eq(id)).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        Ok(E::find().count(&self.db).await?)
    }
}
