use edgebinder_domain::ports::{AdapterConfigBundle, ServiceContainer};
use edgebinder_domain::{GlobalConfig, InstanceConfig};

/// Assembles the configuration bundle handed to adapter constructors
///
/// Pure assembly: nothing is validated and nothing can fail. The resolver
/// builds a new bundle for every strategy it attempts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdapterConfigBuilder;

impl AdapterConfigBuilder {
    /// Build a bundle from its three parts
    pub fn build<'a>(
        instance: &'a InstanceConfig,
        global: &'a GlobalConfig,
        container: &'a dyn ServiceContainer,
    ) -> AdapterConfigBundle<'a> {
        AdapterConfigBundle::new(instance, global, container)
    }
}
