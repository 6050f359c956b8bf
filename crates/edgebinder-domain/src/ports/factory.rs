//! Adapter construction ports
//!
//! Contracts for anything able to build a [`PersistenceAdapter`]: the
//! configuration bundle handed to constructors, the factory services a
//! container may expose per adapter type, and the construction service
//! behind the built-in Weaviate adapter.

use std::sync::Arc;

use crate::error::Result;
use crate::ports::adapter::SharedAdapter;
use crate::ports::container::{ServiceContainer, ServiceInstance};
use crate::value_objects::{GlobalConfig, InstanceConfig};

/// Standardized configuration handed to adapter constructors
///
/// Built fresh for every resolution attempt and only ever borrowed.
#[derive(Clone, Copy)]
pub struct AdapterConfigBundle<'a> {
    /// Configuration of the instance being resolved
    pub instance: &'a InstanceConfig,
    /// The whole `edgebinder` configuration sub-tree
    pub global: &'a GlobalConfig,
    /// Container the instance is resolved from
    pub container: &'a dyn ServiceContainer,
}

impl<'a> AdapterConfigBundle<'a> {
    /// Assemble a bundle
    pub fn new(
        instance: &'a InstanceConfig,
        global: &'a GlobalConfig,
        container: &'a dyn ServiceContainer,
    ) -> Self {
        Self {
            instance,
            global,
            container,
        }
    }
}

impl std::fmt::Debug for AdapterConfigBundle<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterConfigBundle")
            .field("instance", self.instance)
            .field("global", self.global)
            .finish_non_exhaustive()
    }
}

/// Plain function building an adapter from a bundle
pub type AdapterFn = Arc<dyn Fn(&AdapterConfigBundle<'_>) -> Option<SharedAdapter> + Send + Sync>;

/// Object exposing a dedicated adapter-creation operation
pub trait AdapterFactory: Send + Sync {
    /// Build an adapter, or `None` if this factory cannot
    fn create_adapter(&self, bundle: &AdapterConfigBundle<'_>) -> Option<SharedAdapter>;
}

/// Object exposing a generic invocation operation
///
/// The output is only used if it turns out to be a [`SharedAdapter`]
/// (see [`adapter_instance`]).
pub trait InvocableService: Send + Sync {
    /// Invoke the service with a bundle
    fn invoke(&self, bundle: &AdapterConfigBundle<'_>) -> ServiceInstance;
}

/// Wrap an adapter so an [`InvocableService`] can return it
pub fn adapter_instance(adapter: SharedAdapter) -> ServiceInstance {
    Arc::new(adapter)
}

/// Adapter factory registered in a container under
/// `edgebinder.adapter.<type>`
///
/// One variant per supported calling convention.
#[derive(Clone)]
pub enum AdapterFactoryService {
    /// Called directly with the bundle
    Callable(AdapterFn),
    /// Asked to `create_adapter`
    Factory(Arc<dyn AdapterFactory>),
    /// Asked to `invoke`; the result must be an adapter
    Invocable(Arc<dyn InvocableService>),
}

impl AdapterFactoryService {
    /// Wrap a closure as a callable factory service
    pub fn callable<F>(f: F) -> Self
    where
        F: Fn(&AdapterConfigBundle<'_>) -> Option<SharedAdapter> + Send + Sync + 'static,
    {
        Self::Callable(Arc::new(f))
    }

    /// Name of the calling convention, for diagnostics
    pub fn convention(&self) -> &'static str {
        match self {
            Self::Callable(_) => "callable",
            Self::Factory(_) => "factory",
            Self::Invocable(_) => "invocable",
        }
    }

    /// Try to build an adapter through this service's calling convention
    ///
    /// Returns `None` when the service yields nothing usable as an adapter.
    pub fn create(&self, bundle: &AdapterConfigBundle<'_>) -> Option<SharedAdapter> {
        match self {
            Self::Callable(f) => f(bundle),
            Self::Factory(factory) => factory.create_adapter(bundle),
            Self::Invocable(service) => service
                .invoke(bundle)
                .downcast_ref::<SharedAdapter>()
                .cloned(),
        }
    }
}

impl std::fmt::Debug for AdapterFactoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AdapterFactoryService")
            .field(&self.convention())
            .finish()
    }
}

/// Construction service behind the built-in Weaviate adapter
///
/// Registered in the container under
/// [`WEAVIATE_FACTORY_SERVICE`](crate::constants::WEAVIATE_FACTORY_SERVICE)
/// as an `Arc<dyn WeaviateAdapterFactory>`.
pub trait WeaviateAdapterFactory: Send + Sync {
    /// Build a Weaviate adapter from the instance configuration
    fn create_adapter_from_config(
        &self,
        container: &dyn ServiceContainer,
        instance: &InstanceConfig,
    ) -> Result<SharedAdapter>;
}

/// Shared handle to the Weaviate construction service
pub type SharedWeaviateFactory = Arc<dyn WeaviateAdapterFactory>;
