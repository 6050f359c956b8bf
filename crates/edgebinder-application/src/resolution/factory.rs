//! EdgeBinder factory
//!
//! Public entry point of adapter resolution: reads the host configuration
//! from the container, picks the requested instance and wraps the resolved
//! adapter into an [`EdgeBinder`].
//!
//! ## Usage
//!
//! ```ignore
//! let factory = EdgeBinderFactory::new(Arc::new(AdapterRegistry::with_registered()));
//!
//! let default = factory.create(&container)?;
//! let analytics = factory.create_instance(&container, "analytics")?;
//! ```

use std::sync::Arc;

use edgebinder_domain::constants::{CONFIG_ROOT_KEY, CONFIG_SERVICE, DEFAULT_INSTANCE_NAME};
use edgebinder_domain::error::{ConfigResult, ConfigurationError, Result};
use edgebinder_domain::ports::{AdapterTypeRegistry, ServiceContainer};
use edgebinder_domain::GlobalConfig;
use serde_json::Value;
use tracing::debug;

use crate::binder::EdgeBinder;
use crate::resolution::config_resolver::{configured_instances, resolve_instance_config};
use crate::resolution::strategy::AdapterResolver;

/// Creates [`EdgeBinder`] instances from container configuration
#[derive(Clone, Debug)]
pub struct EdgeBinderFactory {
    resolver: AdapterResolver,
}

impl EdgeBinderFactory {
    /// Create a factory consulting `registry` before container and built-in
    /// adapters
    pub fn new(registry: Arc<dyn AdapterTypeRegistry>) -> Self {
        Self {
            resolver: AdapterResolver::new(registry),
        }
    }

    /// The resolver used for every instance
    pub fn resolver(&self) -> &AdapterResolver {
        &self.resolver
    }

    /// Create the `default` instance
    pub fn create(&self, container: &dyn ServiceContainer) -> Result<EdgeBinder> {
        self.create_instance(container, DEFAULT_INSTANCE_NAME)
    }

    /// Create the instance configured under `name`
    pub fn create_instance(
        &self,
        container: &dyn ServiceContainer,
        name: &str,
    ) -> Result<EdgeBinder> {
        let global = load_global_config(container)?;
        let instance = resolve_instance_config(&global, name)?;
        debug!(
            instance = name,
            adapter = instance.adapter_type(),
            "Resolving EdgeBinder instance"
        );

        let adapter = self.resolver.resolve(container, &instance, &global)?;
        Ok(EdgeBinder::new(adapter))
    }

    /// Names of the instances the container's configuration defines
    pub fn configured_instances(&self, container: &dyn ServiceContainer) -> Result<Vec<String>> {
        let global = load_global_config(container)?;
        Ok(configured_instances(&global))
    }
}

/// Read the `edgebinder` sub-tree from the container's `config` service
///
/// Fails with `MissingConfiguration` when there is no `config` service and
/// with `InvalidConfiguration` when it is not a mapping. A missing
/// `edgebinder` key yields an empty configuration.
pub fn load_global_config(container: &dyn ServiceContainer) -> ConfigResult<GlobalConfig> {
    if !container.has(CONFIG_SERVICE) {
        return Err(ConfigurationError::missing_configuration(
            "config service not found in container",
        ));
    }

    let config = container.get(CONFIG_SERVICE).ok_or_else(|| {
        ConfigurationError::missing_configuration("config service not found in container")
    })?;

    let Some(Value::Object(root)) = config.downcast_ref::<Value>() else {
        return Err(ConfigurationError::invalid_configuration(
            "config service must return a mapping",
        ));
    };

    match root.get(CONFIG_ROOT_KEY) {
        None | Some(Value::Null) => Ok(GlobalConfig::default()),
        Some(section) => GlobalConfig::from_value(section.clone()),
    }
}
