//! Shared test doubles

use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use edgebinder_domain::constants::{
    CONFIG_SERVICE, WEAVIATE_FACTORY_SERVICE, adapter_service_name,
};
use edgebinder_domain::ports::{
    AdapterFactoryService, PersistenceAdapter, ServiceContainer, ServiceInstance, SharedAdapter,
    SharedWeaviateFactory, WeaviateAdapterFactory,
};
use edgebinder_domain::{Binding, ConfigurationError, EntityRef, InstanceConfig, Result};
use serde_json::Value;

/// Adapter identified only by its name
pub struct StubAdapter(pub &'static str);

impl StubAdapter {
    pub fn shared(name: &'static str) -> SharedAdapter {
        Arc::new(Self(name))
    }
}

#[async_trait]
impl PersistenceAdapter for StubAdapter {
    fn provider_name(&self) -> &str {
        self.0
    }

    async fn store(&self, _binding: &Binding) -> Result<()> {
        Ok(())
    }

    async fn find(&self, _id: &str) -> Result<Option<Binding>> {
        Ok(None)
    }

    async fn delete(&self, _id: &str) -> Result<()> {
        Ok(())
    }

    async fn find_by_entity(&self, _entity: &EntityRef) -> Result<Vec<Binding>> {
        Ok(Vec::new())
    }
}

/// HashMap-backed container
#[derive(Default)]
pub struct TestContainer {
    services: HashMap<String, ServiceInstance>,
}

impl TestContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: Value) -> Self {
        Self::new().with(CONFIG_SERVICE, config)
    }

    pub fn with<T: Any + Send + Sync>(mut self, name: &str, service: T) -> Self {
        self.services.insert(name.to_string(), Arc::new(service));
        self
    }

    pub fn with_adapter_factory(self, adapter_type: &str, factory: AdapterFactoryService) -> Self {
        let name = adapter_service_name(adapter_type);
        self.with(&name, factory)
    }

    pub fn with_weaviate_factory(self, factory: SharedWeaviateFactory) -> Self {
        self.with(WEAVIATE_FACTORY_SERVICE, factory)
    }
}

impl ServiceContainer for TestContainer {
    fn has(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    fn get(&self, name: &str) -> Option<ServiceInstance> {
        self.services.get(name).cloned()
    }
}

/// Weaviate construction service recording the configs it was given
#[derive(Default)]
pub struct StubWeaviateFactory {
    pub received: Mutex<Vec<InstanceConfig>>,
}

impl WeaviateAdapterFactory for StubWeaviateFactory {
    fn create_adapter_from_config(
        &self,
        _container: &dyn ServiceContainer,
        instance: &InstanceConfig,
    ) -> Result<SharedAdapter> {
        if let Ok(mut received) = self.received.lock() {
            received.push(instance.clone());
        }
        Ok(StubAdapter::shared("weaviate"))
    }
}

/// Extract the configuration error from a failed resolution
pub fn config_error<T>(result: Result<T>) -> ConfigurationError {
    match result {
        Ok(_) => panic!("expected a configuration error, resolution succeeded"),
        Err(err) => err
            .as_configuration()
            .cloned()
            .unwrap_or_else(|| panic!("expected a configuration error, got {err}")),
    }
}
