//! Runtime bootstrap
//!
//! Wires a configuration tree, the service container and the adapter
//! registry into an [`EdgeBinderRuntime`].
//!
//! ```ignore
//! let runtime = EdgeBinderRuntime::load(&ConfigLoader::new())?;
//! let binder = runtime.binder("analytics")?;
//! ```

use std::sync::Arc;

use edgebinder_application::{AdapterRegistry, EdgeBinder, EdgeBinderFactory};
use edgebinder_domain::error::Result;
use edgebinder_domain::ports::AdapterTypeRegistry;
use serde_json::Value;
use tracing::info;

use crate::config::ConfigLoader;
use crate::di::container::InMemoryServiceContainer;

/// Build a container whose `config` service is `config`
pub fn build_container(config: Value) -> InMemoryServiceContainer {
    InMemoryServiceContainer::with_config(config)
}

/// Service container plus factory, ready to hand out binders
#[derive(Clone, Debug)]
pub struct EdgeBinderRuntime {
    container: InMemoryServiceContainer,
    factory: EdgeBinderFactory,
}

impl EdgeBinderRuntime {
    /// Combine an existing container with an adapter registry
    pub fn new(
        container: InMemoryServiceContainer,
        registry: Arc<dyn AdapterTypeRegistry>,
    ) -> Self {
        Self {
            container,
            factory: EdgeBinderFactory::new(registry),
        }
    }

    /// Runtime over `config` using every compile-time registered adapter
    pub fn from_config(config: Value) -> Self {
        let registry = AdapterRegistry::with_registered();
        info!(adapters = ?registry.adapter_types(), "EdgeBinder runtime created");
        Self::new(build_container(config), Arc::new(registry))
    }

    /// Load configuration with `loader` and build a runtime from it
    pub fn load(loader: &ConfigLoader) -> Result<Self> {
        let config = loader.load()?;
        Ok(Self::from_config(config.tree))
    }

    /// The service container; register extra services here
    pub fn container(&self) -> &InMemoryServiceContainer {
        &self.container
    }

    /// The factory resolving instances
    pub fn factory(&self) -> &EdgeBinderFactory {
        &self.factory
    }

    /// Create the instance configured under `name`
    pub fn binder(&self, name: &str) -> Result<EdgeBinder> {
        self.factory.create_instance(&self.container, name)
    }

    /// Create the `default` instance
    pub fn default_binder(&self) -> Result<EdgeBinder> {
        self.factory.create(&self.container)
    }

    /// Names of the configured instances
    pub fn configured_instances(&self) -> Result<Vec<String>> {
        self.factory.configured_instances(&self.container)
    }
}
