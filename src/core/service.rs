//! Data-access service trait

use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Service trait for reading and writing entity records
///
/// Implementations own any locking or connection discipline of the
/// underlying store. The API layer only reads through [`DataService::list`].
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Store a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: i64) -> Result<Option<T>>;

    /// List all entities, in the store's own order
    async fn list(&self) -> Result<Vec<T>>;
}
