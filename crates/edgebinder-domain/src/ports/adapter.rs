use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::value_objects::{Binding, EntityRef};

/// Persistence backend for bindings
///
/// Every storage backend an EdgeBinder instance can resolve to implements
/// this contract. Resolution treats adapters as opaque: only the binder
/// calls these operations.
///
/// # Example
///
/// ```ignore
/// use edgebinder_domain::ports::PersistenceAdapter;
///
/// adapter.store(&binding).await?;
/// let found = adapter.find(&binding.id).await?;
/// assert_eq!(found.as_ref(), Some(&binding));
/// ```
#[async_trait]
pub trait PersistenceAdapter: Send + Sync {
    /// Identifier of the backend (e.g., "weaviate", "memory")
    fn provider_name(&self) -> &str;

    /// Persist a binding, replacing any binding with the same id
    async fn store(&self, binding: &Binding) -> Result<()>;

    /// Look up a binding by id
    async fn find(&self, id: &str) -> Result<Option<Binding>>;

    /// Remove a binding
    ///
    /// Returns `Error::NotFound` if no binding has this id.
    async fn delete(&self, id: &str) -> Result<()>;

    /// All bindings where `entity` is either end
    async fn find_by_entity(&self, entity: &EntityRef) -> Result<Vec<Binding>>;

    /// Health check for the adapter (default implementation)
    async fn health_check(&self) -> Result<()> {
        self.find("__health_check__").await?;
        Ok(())
    }
}

/// Shared, type-erased adapter handle
pub type SharedAdapter = Arc<dyn PersistenceAdapter>;
