//! # EdgeBinder Domain
//!
//! Core types shared by every EdgeBinder layer.
//!
//! ## Modules
//!
//! - `constants` - service names, configuration keys and defaults
//! - `error` - [`ConfigurationError`] for resolution, [`Error`] for adapter operations
//! - `ports` - contracts for adapters, containers, factories and registries
//! - `value_objects` - configuration and binding types

/// Domain constants
pub mod constants;
/// Error types
pub mod error;
/// Port interfaces
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{ConfigResult, ConfigurationError, Error, Result};
pub use value_objects::{Binding, EntityRef, GlobalConfig, InstanceConfig};
