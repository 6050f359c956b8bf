//! Null persistence adapter for testing
//!
//! Accepts every write and stores nothing. Useful as a placeholder backend
//! when a test exercises resolution but not persistence.

use std::sync::Arc;

use async_trait::async_trait;
use edgebinder_application::registry::{ADAPTERS, AdapterEntry};
use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::{AdapterConfigBundle, PersistenceAdapter, SharedAdapter};
use edgebinder_domain::{Binding, EntityRef};
use tracing::trace;

/// Adapter type this adapter registers under
pub const NULL_ADAPTER_TYPE: &str = "null";

/// Null persistence adapter
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAdapter;

impl NullAdapter {
    /// Create a new null adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PersistenceAdapter for NullAdapter {
    fn provider_name(&self) -> &str {
        NULL_ADAPTER_TYPE
    }

    async fn store(&self, binding: &Binding) -> Result<()> {
        trace!(id = %binding.id, "Null adapter discarding binding");
        Ok(())
    }

    async fn find(&self, _id: &str) -> Result<Option<Binding>> {
        Ok(None)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Err(Error::not_found(id))
    }

    async fn find_by_entity(&self, _entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(Vec::new())
    }
}

fn null_adapter_factory(_bundle: &AdapterConfigBundle<'_>) -> Result<SharedAdapter> {
    Ok(Arc::new(NullAdapter::new()))
}

#[linkme::distributed_slice(ADAPTERS)]
static NULL_ADAPTER: AdapterEntry = AdapterEntry {
    name: NULL_ADAPTER_TYPE,
    description: "Null adapter (discards all bindings)",
    factory: null_adapter_factory,
};
