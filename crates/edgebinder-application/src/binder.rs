//! The bound object handed out by the factory
//!
//! [`EdgeBinder`] owns the resolved adapter and exposes binding operations
//! on top of it. It knows nothing about which backend it talks to.

use edgebinder_domain::error::{Error, Result};
use edgebinder_domain::ports::SharedAdapter;
use edgebinder_domain::{Binding, EntityRef};
use serde_json::{Map, Value};
use tracing::debug;
use uuid::Uuid;

/// Binding manager backed by a resolved persistence adapter
#[derive(Clone)]
pub struct EdgeBinder {
    adapter: SharedAdapter,
}

impl EdgeBinder {
    /// Wrap an adapter
    pub fn new(adapter: SharedAdapter) -> Self {
        Self { adapter }
    }

    /// The adapter this binder persists through
    pub fn adapter(&self) -> &SharedAdapter {
        &self.adapter
    }

    /// Name of the backing adapter
    pub fn provider_name(&self) -> &str {
        self.adapter.provider_name()
    }

    /// Create and persist a binding from `from` to `to`
    pub async fn bind(
        &self,
        from: EntityRef,
        to: EntityRef,
        binding_type: &str,
        metadata: Map<String, Value>,
    ) -> Result<Binding> {
        if binding_type.trim().is_empty() {
            return Err(Error::invalid_argument("binding type must not be empty"));
        }

        let binding = Binding::new(Uuid::new_v4().to_string(), from, to, binding_type)
            .with_metadata(metadata);
        self.adapter.store(&binding).await?;
        debug!(id = %binding.id, binding_type, "Stored binding");
        Ok(binding)
    }

    /// Remove a binding
    pub async fn unbind(&self, id: &str) -> Result<()> {
        self.adapter.delete(id).await
    }

    /// Look up a binding by id
    pub async fn find_binding(&self, id: &str) -> Result<Option<Binding>> {
        self.adapter.find(id).await
    }

    /// Every binding involving `entity`
    pub async fn bindings_for(&self, entity: &EntityRef) -> Result<Vec<Binding>> {
        self.adapter.find_by_entity(entity).await
    }

    /// Whether `from` is bound to `to` with `binding_type`
    pub async fn are_bound(
        &self,
        from: &EntityRef,
        to: &EntityRef,
        binding_type: &str,
    ) -> Result<bool> {
        let bindings = self.adapter.find_by_entity(from).await?;
        Ok(bindings
            .iter()
            .any(|b| &b.from == from && &b.to == to && b.binding_type == binding_type))
    }
}

impl std::fmt::Debug for EdgeBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeBinder")
            .field("adapter", &self.adapter.provider_name())
            .finish()
    }
}
