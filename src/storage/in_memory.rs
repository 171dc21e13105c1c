//! In-memory implementation of DataService for testing and development

use crate::core::entity::Entity;
use crate::core::error::{EntityError, StorageError};
use crate::core::service::DataService;
use anyhow::Result;
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

const BACKEND: &str = "in-memory";

/// In-memory data service implementation
///
/// Records are kept in insertion order and `list` returns them in that
/// order. Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryDataService<T: Entity> {
    records: Arc<RwLock<IndexMap<i64, T>>>,
}

impl<T: Entity> InMemoryDataService<T> {
    /// Create an empty in-memory data service
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize> {
        let records = self.records.read().map_err(Self::lock_error)?;
        Ok(records.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn lock_error(e: impl std::fmt::Display) -> StorageError {
        StorageError::QueryError {
            backend: BACKEND.to_string(),
            message: format!("Failed to acquire lock: {}", e),
        }
    }
}

impl<T: Entity> Default for InMemoryDataService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> DataService<T> for InMemoryDataService<T> {
    async fn create(&self, entity: T) -> Result<T> {
        let mut records = self.records.write().map_err(Self::lock_error)?;

        if records.contains_key(&entity.id()) {
            return Err(EntityError::AlreadyExists {
                entity_type: T::resource_name_singular().to_string(),
                id: entity.id(),
            }
            .into());
        }

        records.insert(entity.id(), entity.clone());

        Ok(entity)
    }

    async fn get(&self, id: i64) -> Result<Option<T>> {
        let records = self.records.read().map_err(Self::lock_error)?;

        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<T>> {
        let records = self.records.read().map_err(Self::lock_error)?;

        Ok(records.values().cloned().collect())
    }
}
