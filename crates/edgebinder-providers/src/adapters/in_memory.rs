//! In-memory persistence adapter
//!
//! Keeps bindings in a concurrent map. Nothing survives a restart.
//!
//! ## Settings
//!
//! | Key | Type | Description |
//! |-----|------|-------------|
//! | `max_bindings` | positive integer | Optional cap on stored bindings |

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use edgebinder_application::registry::{ADAPTERS, AdapterEntry};
use edgebinder_domain::error::{ConfigurationError, Error, Result};
use edgebinder_domain::ports::{AdapterConfigBundle, PersistenceAdapter, SharedAdapter};
use edgebinder_domain::{Binding, EntityRef, InstanceConfig};

/// Adapter type this adapter registers under
pub const MEMORY_ADAPTER_TYPE: &str = "memory";

/// In-memory persistence adapter
///
/// Bindings live in a `DashMap` keyed by id, so concurrent binders sharing
/// one adapter see each other's writes.
#[derive(Debug, Default)]
pub struct InMemoryAdapter {
    bindings: DashMap<String, Binding>,
    max_bindings: Option<usize>,
}

impl InMemoryAdapter {
    /// Create an unbounded in-memory adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter holding at most `max_bindings` bindings
    pub fn with_max_bindings(max_bindings: usize) -> Self {
        Self {
            bindings: DashMap::new(),
            max_bindings: Some(max_bindings),
        }
    }

    /// Create an adapter from an instance configuration
    ///
    /// Rejects a `max_bindings` setting that is not a positive integer.
    pub fn from_config(instance: &InstanceConfig) -> Result<Self> {
        match instance.get("max_bindings") {
            None => Ok(Self::new()),
            Some(value) => {
                let max_bindings = value
                    .as_u64()
                    .filter(|max| *max > 0)
                    .and_then(|max| usize::try_from(max).ok())
                    .ok_or_else(|| {
                        ConfigurationError::invalid_configuration(format!(
                            "memory adapter: max_bindings must be a positive integer, got {value}"
                        ))
                    })?;
                Ok(Self::with_max_bindings(max_bindings))
            }
        }
    }

    /// Number of stored bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no binding is stored
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[async_trait]
impl PersistenceAdapter for InMemoryAdapter {
    fn provider_name(&self) -> &str {
        MEMORY_ADAPTER_TYPE
    }

    async fn store(&self, binding: &Binding) -> Result<()> {
        if let Some(max) = self.max_bindings
            && !self.bindings.contains_key(&binding.id)
            && self.bindings.len() >= max
        {
            return Err(Error::persistence(format!(
                "memory adapter is full ({max} bindings)"
            )));
        }
        self.bindings.insert(binding.id.clone(), binding.clone());
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Option<Binding>> {
        Ok(self.bindings.get(id).map(|entry| entry.value().clone()))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.bindings
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::not_found(id))
    }

    async fn find_by_entity(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        let mut bindings: Vec<Binding> = self
            .bindings
            .iter()
            .filter(|entry| entry.value().involves(entity))
            .map(|entry| entry.value().clone())
            .collect();
        bindings.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(bindings)
    }
}

fn in_memory_adapter_factory(bundle: &AdapterConfigBundle<'_>) -> Result<SharedAdapter> {
    Ok(Arc::new(InMemoryAdapter::from_config(bundle.instance)?))
}

#[linkme::distributed_slice(ADAPTERS)]
static MEMORY_ADAPTER: AdapterEntry = AdapterEntry {
    name: MEMORY_ADAPTER_TYPE,
    description: "In-memory binding storage (fast, non-persistent)",
    factory: in_memory_adapter_factory,
};
