//! Domain Port Interfaces
//!
//! Contracts between the resolution core and the outside world:
//!
//! - **adapter** - the persistence contract every backend implements
//! - **container** - named service lookup offered by the host
//! - **factory** - the configuration bundle and adapter factory services
//! - **registry** - injected table of adapter constructors

/// Persistence adapter contract
pub mod adapter;
/// Hosting service container
pub mod container;
/// Adapter construction contracts
pub mod factory;
/// Adapter type registry
pub mod registry;

pub use adapter::{PersistenceAdapter, SharedAdapter};
pub use container::{ServiceContainer, ServiceInstance};
pub use factory::{
    AdapterConfigBundle, AdapterFactory, AdapterFactoryService, AdapterFn, InvocableService,
    SharedWeaviateFactory, WeaviateAdapterFactory, adapter_instance,
};
pub use registry::AdapterTypeRegistry;
