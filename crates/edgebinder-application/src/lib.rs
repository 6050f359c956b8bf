//! # EdgeBinder Application
//!
//! Resolves named EdgeBinder instances into concrete persistence adapters.
//!
//! - `registry` - injected adapter type → constructor table
//! - `resolution` - instance config lookup, strategy chain and the factory
//! - `binder` - the [`EdgeBinder`] bound object

pub mod binder;
pub mod registry;
pub mod resolution;

pub use binder::EdgeBinder;
pub use registry::{ADAPTERS, AdapterEntry, AdapterRegistry, list_registered_adapters};
pub use resolution::{AdapterResolver, EdgeBinderFactory};
