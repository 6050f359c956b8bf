//! In-memory service container
//!
//! Name-keyed service storage implementing the `ServiceContainer` port.
//! Backed by a `DashMap`, so lookups from concurrent resolutions need no
//! extra locking.

use std::any::Any;
use std::sync::Arc;

use dashmap::DashMap;
use edgebinder_domain::constants::{
    CONFIG_SERVICE, WEAVIATE_FACTORY_SERVICE, adapter_service_name,
};
use edgebinder_domain::ports::{
    AdapterFactoryService, ServiceContainer, ServiceInstance, SharedWeaviateFactory,
};
use serde_json::Value;
use tracing::debug;

/// Service container holding type-erased services by name
///
/// Clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryServiceContainer {
    services: Arc<DashMap<String, ServiceInstance>>,
}

impl InMemoryServiceContainer {
    /// Create an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container whose `config` service is `config`
    pub fn with_config(config: Value) -> Self {
        let container = Self::new();
        container.register_config(config);
        container
    }

    /// Register `service` under `name`, returning the service it replaced
    ///
    /// The service is later retrieved by downcasting to `T`.
    pub fn register<T: Any + Send + Sync>(
        &self,
        name: impl Into<String>,
        service: T,
    ) -> Option<ServiceInstance> {
        self.register_instance(name, Arc::new(service))
    }

    /// Register an already type-erased service
    pub fn register_instance(
        &self,
        name: impl Into<String>,
        service: ServiceInstance,
    ) -> Option<ServiceInstance> {
        let name = name.into();
        debug!(service = %name, "Registering service");
        self.services.insert(name, service)
    }

    /// Register the host configuration tree as the `config` service
    pub fn register_config(&self, config: Value) -> Option<ServiceInstance> {
        self.register(CONFIG_SERVICE, config)
    }

    /// Register a factory service for `adapter_type`
    /// under `edgebinder.adapter.<adapter_type>`
    pub fn register_adapter_factory(
        &self,
        adapter_type: &str,
        factory: AdapterFactoryService,
    ) -> Option<ServiceInstance> {
        self.register(adapter_service_name(adapter_type), factory)
    }

    /// Register the construction service of the built-in Weaviate adapter
    pub fn register_weaviate_factory(
        &self,
        factory: SharedWeaviateFactory,
    ) -> Option<ServiceInstance> {
        self.register(WEAVIATE_FACTORY_SERVICE, factory)
    }

    /// Remove a service; returns whether one was registered
    pub fn remove(&self, name: &str) -> bool {
        self.services.remove(name).is_some()
    }

    /// Registered service names, sorted
    pub fn service_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .services
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether no service is registered
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceContainer for InMemoryServiceContainer {
    fn has(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<ServiceInstance> {
        self.services.get(name).map(|entry| Arc::clone(entry.value()))
    }
}

impl std::fmt::Debug for InMemoryServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryServiceContainer")
            .field("services", &self.service_names())
            .finish()
    }
}
