//! Service container and runtime wiring

pub mod bootstrap;
pub mod container;

pub use bootstrap::{EdgeBinderRuntime, build_container};
pub use container::InMemoryServiceContainer;
