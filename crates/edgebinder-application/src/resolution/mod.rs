//! Adapter Resolution
//!
//! ```text
//! EdgeBinderFactory::create_instance(container, name)
//!        │
//!        ├─► load_global_config(container)        config → edgebinder
//!        ├─► resolve_instance_config(global, name) named or legacy default
//!        ├─► AdapterResolver::resolve(..)          registry → container → built-in
//!        ▼
//!    EdgeBinder(adapter)
//! ```

pub mod bundle;
pub mod config_resolver;
pub mod factory;
pub mod strategy;

pub use bundle::AdapterConfigBuilder;
pub use config_resolver::{configured_instances, resolve_instance_config};
pub use factory::{EdgeBinderFactory, load_global_config};
pub use strategy::{AdapterResolver, AvailableAdapters, BuiltinAdapter};
