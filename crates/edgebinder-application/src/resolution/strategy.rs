//! Adapter resolution strategies
//!
//! Turns an instance configuration into an adapter by trying three
//! strategies in a fixed order. The first one that produces an adapter wins
//! and later ones are never consulted.
//!
//! ```text
//! adapter type (instance.adapter, default "weaviate")
//!        │
//!        ▼
//! ┌───────────────────────┐  has type   ┌──────────────────────────┐
//! │ 1. AdapterTypeRegistry│ ──────────► │ registry.create(bundle)  │
//! └───────────────────────┘             └──────────────────────────┘
//!        │ no
//!        ▼
//! ┌───────────────────────┐  adapter    ┌──────────────────────────┐
//! │ 2. container service  │ ──────────► │ AdapterFactoryService    │
//! │ edgebinder.adapter.T  │             │ callable/factory/invoke  │
//! └───────────────────────┘             └──────────────────────────┘
//!        │ absent or no adapter
//!        ▼
//! ┌───────────────────────┐
//! │ 3. built-in adapters  │ ──► UnsupportedAdapter(T) if unknown
//! └───────────────────────┘
//! ```

use std::sync::Arc;

use edgebinder_domain::constants::{WEAVIATE_FACTORY_SERVICE, adapter_service_name};
use edgebinder_domain::error::{ConfigurationError, Result};
use edgebinder_domain::ports::{
    AdapterFactoryService, AdapterTypeRegistry, ServiceContainer, SharedAdapter,
    SharedWeaviateFactory,
};
use edgebinder_domain::{GlobalConfig, InstanceConfig};
use tracing::{debug, info};

use crate::resolution::bundle::AdapterConfigBuilder;

/// Adapter types this crate can construct without registry or container
/// factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinAdapter {
    /// Weaviate vector database, built by the container's
    /// `edgebinder.factory.weaviate` service
    Weaviate,
}

impl BuiltinAdapter {
    /// Every built-in adapter
    pub const ALL: [BuiltinAdapter; 1] = [BuiltinAdapter::Weaviate];

    /// Look up a built-in adapter by type identifier
    pub fn from_type(adapter_type: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|builtin| builtin.adapter_type() == adapter_type)
    }

    /// Type identifier of this adapter
    pub fn adapter_type(self) -> &'static str {
        match self {
            Self::Weaviate => "weaviate",
        }
    }

    fn construct(
        self,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
    ) -> Result<SharedAdapter> {
        match self {
            Self::Weaviate => create_weaviate_adapter(container, instance),
        }
    }
}

/// Builds the Weaviate adapter through the container's construction service,
/// which only receives the instance configuration.
fn create_weaviate_adapter(
    container: &dyn ServiceContainer,
    instance: &InstanceConfig,
) -> Result<SharedAdapter> {
    if !container.has(WEAVIATE_FACTORY_SERVICE) {
        return Err(ConfigurationError::missing_service(WEAVIATE_FACTORY_SERVICE).into());
    }
    let service = container
        .get(WEAVIATE_FACTORY_SERVICE)
        .ok_or_else(|| ConfigurationError::missing_service(WEAVIATE_FACTORY_SERVICE))?;

    let factory = service
        .downcast_ref::<SharedWeaviateFactory>()
        .ok_or_else(|| {
            ConfigurationError::invalid_service(
                WEAVIATE_FACTORY_SERVICE,
                "must be an Arc<dyn WeaviateAdapterFactory>",
            )
        })?;

    factory.create_adapter_from_config(container, instance)
}

/// Resolves adapter instances from instance configurations
///
/// Holds no state between calls besides the injected registry; every
/// [`resolve`](Self::resolve) evaluates the strategies afresh.
#[derive(Clone)]
pub struct AdapterResolver {
    registry: Arc<dyn AdapterTypeRegistry>,
}

impl AdapterResolver {
    /// Create a resolver consulting `registry` first
    pub fn new(registry: Arc<dyn AdapterTypeRegistry>) -> Self {
        Self { registry }
    }

    /// The injected registry
    pub fn registry(&self) -> &Arc<dyn AdapterTypeRegistry> {
        &self.registry
    }

    /// Resolve the adapter for `instance`
    ///
    /// Fails with `UnsupportedAdapter` when no strategy knows the type.
    pub fn resolve(
        &self,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
        global: &GlobalConfig,
    ) -> Result<SharedAdapter> {
        let adapter_type = instance.adapter_type();

        if let Some(adapter) = self.from_registry(adapter_type, container, instance, global)? {
            info!(adapter = adapter_type, strategy = "registry", "Resolved adapter");
            return Ok(adapter);
        }

        if let Some(adapter) = Self::from_container(adapter_type, container, instance, global) {
            info!(adapter = adapter_type, strategy = "container", "Resolved adapter");
            return Ok(adapter);
        }

        let adapter = Self::from_builtin(adapter_type, container, instance)?;
        info!(adapter = adapter_type, strategy = "builtin", "Resolved adapter");
        Ok(adapter)
    }

    /// Strategy 1: the injected registry. Its result is returned as is.
    fn from_registry(
        &self,
        adapter_type: &str,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
        global: &GlobalConfig,
    ) -> Result<Option<SharedAdapter>> {
        if !self.registry.has_adapter(adapter_type) {
            debug!(adapter = adapter_type, "Adapter type not in registry");
            return Ok(None);
        }

        let bundle = AdapterConfigBuilder::build(instance, global, container);
        self.registry.create(adapter_type, &bundle).map(Some)
    }

    /// Strategy 2: a factory service named after the adapter type.
    ///
    /// Yields `None` rather than an error whenever the service is missing,
    /// is not an [`AdapterFactoryService`], or produces no adapter.
    fn from_container(
        adapter_type: &str,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
        global: &GlobalConfig,
    ) -> Option<SharedAdapter> {
        let service_name = adapter_service_name(adapter_type);
        if !container.has(&service_name) {
            debug!(service = %service_name, "No adapter factory service in container");
            return None;
        }

        let Some(service) = container.get_as::<AdapterFactoryService>(&service_name) else {
            debug!(service = %service_name, "Container service is not an adapter factory");
            return None;
        };

        let bundle = AdapterConfigBuilder::build(instance, global, container);
        let adapter = service.create(&bundle);
        if adapter.is_none() {
            debug!(
                service = %service_name,
                convention = service.convention(),
                "Adapter factory service produced no adapter"
            );
        }
        adapter
    }

    /// Strategy 3: built-in adapters, the end of the chain.
    fn from_builtin(
        adapter_type: &str,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
    ) -> Result<SharedAdapter> {
        let builtin = BuiltinAdapter::from_type(adapter_type)
            .ok_or_else(|| ConfigurationError::unsupported_adapter(adapter_type))?;
        builtin.construct(container, instance)
    }

    /// Adapter types known to the registry and built-in strategies
    ///
    /// Container factory services are not listed; they are only discovered
    /// by name at resolution time.
    pub fn available_adapters(&self) -> AvailableAdapters {
        AvailableAdapters {
            registered: self.registry.adapter_types(),
            builtin: BuiltinAdapter::ALL
                .iter()
                .map(|builtin| builtin.adapter_type())
                .collect(),
        }
    }
}

impl std::fmt::Debug for AdapterResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterResolver")
            .field("registered", &self.registry.adapter_types())
            .finish()
    }
}

/// Adapter types a resolver knows up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableAdapters {
    /// Types with a registry constructor
    pub registered: Vec<String>,
    /// Built-in types
    pub builtin: Vec<&'static str>,
}

impl std::fmt::Display for AvailableAdapters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Available Adapters:")?;
        writeln!(f)?;

        writeln!(f, "Registered Adapters:")?;
        for name in &self.registered {
            writeln!(f, "  - {name}")?;
        }
        writeln!(f)?;

        writeln!(f, "Built-in Adapters:")?;
        for name in &self.builtin {
            writeln!(f, "  - {name}")?;
        }

        Ok(())
    }
}
