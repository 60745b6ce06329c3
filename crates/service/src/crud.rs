use std::sync::Arc;

use common::pagination::Pagination;
use tracing::{debug, info, instrument};

use crate::domain::{new_id, next_modification, now, Record};
use crate::errors::ServiceError;
use crate::storage::{Repository, StorageError};

/// Create/read/update/delete over one record type.
///
/// Storage is whatever [`Repository`] the service was built with; the
/// service only adds id and timestamp stamping, patch application and
/// typed not-found errors.
pub struct CrudService<T: Record> {
    repo: Arc<dyn Repository<T>>,
}

impl<T: Record> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self { repo: self.repo.clone() }
    }
}

impl<T: Record> CrudService<T> {
    pub fn new(repo: Arc<dyn Repository<T>>) -> Self {
        Self { repo }
    }

    /// Every record, unordered.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let all = self.repo.find_all().await?;
        debug!(count = all.len(), "listed");
        Ok(all)
    }

    /// One page ordered by id.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn list_page(&self, page: Pagination) -> Result<Vec<T>, ServiceError> {
        Ok(self.repo.find_page(page).await?)
    }

    /// `None` when no record has this id.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn get_by_id(&self, id: &str) -> Result<Option<T>, ServiceError> {
        Ok(self.repo.find_by_id(id).await?)
    }

    /// Records whose reference `field` holds `id`, ordered by id.
    #[instrument(skip(self), fields(kind = T::KIND))]
    pub(crate) async fn list_referencing(&self, field: &'static str, id: &str) -> Result<Vec<T>, ServiceError> {
        let found = self.repo.find_by_reference(field, id).await?;
        debug!(count = found.len(), "listed");
        Ok(found)
    }

    /// Persist a new record. A missing or empty draft id is replaced with a fresh UUID.
    #[instrument(skip(self, draft), fields(kind = T::KIND))]
    pub async fn create(&self, draft: T::Draft) -> Result<T, ServiceError> {
        let id = match T::draft_id(&draft) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => new_id(),
        };
        let record = T::from_draft(id, draft, now());
        let saved = self.repo.insert(record).await?;
        info!(id = %saved.id(), "record_created");
        Ok(saved)
    }

    /// Apply `patch` to an existing record. Never creates.
    #[instrument(skip(self, patch), fields(kind = T::KIND))]
    pub async fn update(&self, id: &str, patch: T::Patch) -> Result<T, ServiceError> {
        let mut record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(T::KIND, id))?;
        let created_at = record.created_at();
        let previous = record.updated_at();
        record.apply_patch(patch);
        record.set_updated_at(next_modification(previous));
        debug_assert_eq!(record.created_at(), created_at, "patch must not touch created_at");

        let saved = self.repo.update(record).await.map_err(|e| match e {
            StorageError::NotFound => ServiceError::not_found(T::KIND, id),
            other => other.into(),
        })?;
        info!(id, "record_updated");
        Ok(saved)
    }

    #[instrument(skip(self), fields(kind = T::KIND))]
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(T::KIND, id));
        }
        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found(T::KIND, id));
        }
        info!(id, "record_deleted");
        Ok(())
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.repo.count().await?)
    }
}
