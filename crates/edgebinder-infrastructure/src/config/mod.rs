//! Configuration management
//!
//! Loads the host configuration tree consumed by adapter resolution.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{HostConfig, LoggingConfig};
