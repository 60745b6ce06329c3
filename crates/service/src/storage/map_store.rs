use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use async_trait::async_trait;
use common::pagination::Pagination;
use serde::{de::DeserializeOwned, Serialize};
use tokio::{fs, sync::RwLock};
use tracing::debug;

use super::{Repository, StorageError};
use crate::domain::Record;

/// Extracts the value of a unique column from a record.
pub type UniqueKeyFn<T> = fn(&T) -> Option<String>;

/// Generic map-backed repository, optionally persisted to a JSON file.
///
/// Holds `id -> record` in memory. With a file path every write rewrites the
/// file while the write lock is held, so the file always matches the map.
/// Unique columns registered with [`MapRepository::with_unique`] are checked
/// on insert and update the way a database unique index would be.
pub struct MapRepository<T> {
    inner: Arc<RwLock<HashMap<String, T>>>,
    file_path: Option<PathBuf>,
    unique: Vec<(&'static str, UniqueKeyFn<T>)>,
}

impl<T> MapRepository<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// Volatile store; contents vanish with the process.
    pub fn in_memory() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())), file_path: None, unique: Vec::new() }
    }

    /// Open (or create) a JSON file-backed store.
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StorageError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| StorageError::Backend(e.to_string()))?;
        }

        let map: HashMap<String, T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StorageError::Backend(format!("{}: {e}", file_path.display())))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty: HashMap<String, T> = HashMap::new();
                write_json(&file_path, &empty).await?;
                empty
            }
            Err(e) => return Err(StorageError::Backend(e.to_string())),
        };
        debug!(kind = T::KIND, path = %file_path.display(), records = map.len(), "map_store_opened");

        Ok(Self { inner: Arc::new(RwLock::new(map)), file_path: Some(file_path), unique: Vec::new() })
    }

    /// Register a unique column.
    pub fn with_unique(mut self, name: &'static str, key: UniqueKeyFn<T>) -> Self {
        self.unique.push((name, key));
        self
    }

    fn check_unique(&self, map: &HashMap<String, T>, record: &T) -> Result<(), StorageError> {
        for (name, key) in &self.unique {
            let Some(value) = key(record) else { continue };
            let taken = map
                .values()
                .any(|other| other.id() != record.id() && key(other).as_deref() == Some(value.as_str()));
            if taken {
                return Err(StorageError::ConstraintViolation(format!("duplicate value for {name}")));
            }
        }
        Ok(())
    }

    async fn save(&self, map: &HashMap<String, T>) -> Result<(), StorageError> {
        match &self.file_path {
            Some(path) => write_json(path, map).await,
            None => Ok(()),
        }
    }
}

async fn write_json<V: Serialize>(path: &Path, value: &V) -> Result<(), StorageError> {
    let data = serde_json::to_vec_pretty(value).map_err(|e| StorageError::Backend(e.to_string()))?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, data).await.map_err(|e| StorageError::Backend(e.to_string()))?;
    fs::rename(&tmp, path).await.map_err(|e| StorageError::Backend(e.to_string()))?;
    Ok(())
}

#[async_trait]
impl<T> Repository<T> for MapRepository<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    async fn find_all(&self) -> Result<Vec<T>, StorageError> {
        let map = self.inner.read().await;
        Ok(map.values().cloned().collect())
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<T>, StorageError> {
        let (_, per_page) = page.normalize();
        let map = self.inner.read().await;
        let mut ids: Vec<&String> = map.keys().collect();
        ids.sort();
        Ok(ids
            .into_iter()
            .skip(page.offset() as usize)
            .take(per_page as usize)
            .filter_map(|id| map.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StorageError> {
        let map = self.inner.read().await;
        Ok(map.get(id).cloned())
    }

    async fn find_by_reference(&self, field: &str, id: &str) -> Result<Vec<T>, StorageError> {
        if !T::REFERENCES.contains(&field) {
            return Err(StorageError::Backend(format!("{} has no reference {field}", T::KIND)));
        }
        let map = self.inner.read().await;
        let mut found: Vec<T> = map.values().filter(|r| r.reference(field) == Some(id)).cloned().collect();
        found.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(found)
    }

    async fn insert(&self, record: T) -> Result<T, StorageError> {
        let mut map = self.inner.write().await;
        if map.contains_key(record.id()) {
            return Err(StorageError::ConstraintViolation(format!("duplicate {} id {}", T::KIND, record.id())));
        }
        self.check_unique(&map, &record)?;
        map.insert(record.id().to_string(), record.clone());
        if let Err(e) = self.save(&map).await {
            map.remove(record.id());
            return Err(e);
        }
        Ok(record)
    }

    async fn update(&self, record: T) -> Result<T, StorageError> {
        let mut map = self.inner.write().await;
        if !map.contains_key(record.id()) {
            return Err(StorageError::NotFound);
        }
        self.check_unique(&map, &record)?;
        let previous = map.insert(record.id().to_string(), record.clone());
        if let Err(e) = self.save(&map).await {
            if let Some(prev) = previous {
                map.insert(record.id().to_string(), prev);
            }
            return Err(e);
        }
        Ok(record)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, StorageError> {
        let mut map = self.inner.write().await;
        let Some(removed) = map.remove(id) else { return Ok(false) };
        if let Err(e) = self.save(&map).await {
            map.insert(id.to_string(), removed);
            return Err(e);
        }
        Ok(true)
    }

    async fn count(&self) -> Result<u64, StorageError> {
        let map = self.inner.read().await;
        Ok(map.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{now, NewRole, Role};

    fn role(name: &str) -> Role {
        Role::from_draft(crate::domain::new_id(), NewRole { id: None, name: name.into(), description: None }, now())
    }

    fn roles() -> MapRepository<Role> {
        MapRepository::in_memory().with_unique("roles.name", |r: &Role| Some(r.name.clone()))
    }

    #[tokio::test]
    async fn unique_key_rejects_duplicates_but_allows_self_update() -> Result<(), anyhow::Error> {
        let repo = roles();
        let admin = repo.insert(role("admin")).await?;
        let err = repo.insert(role("admin")).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));

        let mut same = admin.clone();
        same.description = Some("root".into());
        repo.update(same).await?;

        let member = repo.insert(role("member")).await?;
        let mut clash = member.clone();
        clash.name = "admin".into();
        assert!(matches!(repo.update(clash).await, Err(StorageError::ConstraintViolation(_))));
        assert_eq!(repo.find_by_id(member.id.as_str()).await?.map(|r| r.name), Some("member".into()));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_id_is_a_constraint_violation() -> Result<(), anyhow::Error> {
        let repo = roles();
        let first = repo.insert(role("a")).await?;
        let mut copy = role("b");
        copy.id = first.id.clone();
        assert!(matches!(repo.insert(copy).await, Err(StorageError::ConstraintViolation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = roles();
        assert!(matches!(repo.update(role("ghost")).await, Err(StorageError::NotFound)));
        assert!(!repo.delete_by_id("ghost").await.unwrap());
    }

    #[tokio::test]
    async fn pages_are_ordered_by_id() -> Result<(), anyhow::Error> {
        let repo = roles();
        for i in 0..5 {
            let mut r = role(&format!("r{i}"));
            r.id = format!("id-{i}");
            repo.insert(r).await?;
        }
        let first = repo.find_page(Pagination::new(1, 2)).await?;
        let third = repo.find_page(Pagination::new(3, 2)).await?;
        assert_eq!(first.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["id-0", "id-1"]);
        assert_eq!(third.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), ["id-4"]);
        assert!(repo.find_page(Pagination::new(4, 2)).await?.is_empty());
        assert_eq!(repo.count().await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn file_store_persists_across_reopen() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("map_store_{}.json", uuid::Uuid::new_v4()));
        let store = MapRepository::<Role>::open(&tmp).await?;
        assert_eq!(store.count().await?, 0);

        let kept = store.insert(role("kept")).await?;
        let dropped = store.insert(role("dropped")).await?;
        assert!(store.delete_by_id(dropped.id.as_str()).await?);

        let reloaded = MapRepository::<Role>::open(&tmp).await?;
        let all = reloaded.find_all().await?;
        assert_eq!(all, vec![kept]);

        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_file_is_an_error() -> Result<(), anyhow::Error> {
        let tmp = std::env::temp_dir().join(format!("map_store_bad_{}.json", uuid::Uuid::new_v4()));
        tokio::fs::write(&tmp, b"not json").await?;
        assert!(matches!(MapRepository::<Role>::open(&tmp).await, Err(StorageError::Backend(_))));
        let _ = tokio::fs::remove_file(&tmp).await;
        Ok(())
    }
}
