//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`GlobalConfig`] | The `edgebinder` configuration sub-tree |
//! | [`InstanceConfig`] | Configuration of one named instance |
//! | [`Binding`] | Persisted relationship between two entities |
//! | [`EntityRef`] | One end of a binding |

/// Binding value objects
pub mod binding;
/// Configuration value objects
pub mod config;

pub use binding::{Binding, EntityRef};
pub use config::{GlobalConfig, InstanceConfig};
