//! # EdgeBinder Infrastructure
//!
//! Host-side plumbing around adapter resolution.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration loading |
//! | [`di`] | Service container and runtime wiring |
//! | [`logging`] | Tracing subscriber setup |
//! | [`error_ext`] | Error context helpers |
//! | [`constants`] | File names, env prefixes and log defaults |

// Bundled adapters register through linkme; the crate must be linked
extern crate edgebinder_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{ConfigLoader, HostConfig, LoggingConfig};
pub use di::{EdgeBinderRuntime, InMemoryServiceContainer, build_container};
pub use logging::init_logging;
