//! Domain layer constants
//!
//! Names and identifiers shared by the resolution algorithm and the
//! components that wire services into a container.

// ============================================================================
// INSTANCE CONSTANTS
// ============================================================================

/// Instance resolved when no name is requested
pub const DEFAULT_INSTANCE_NAME: &str = "default";

/// Key holding the adapter type inside an instance configuration
pub const ADAPTER_KEY: &str = "adapter";

/// Adapter type assumed when an instance does not declare one.
///
/// Legacy convenience only: new instances should always set `adapter`.
pub const DEFAULT_ADAPTER_TYPE: &str = "weaviate";

// ============================================================================
// CONTAINER SERVICE NAMES
// ============================================================================

/// Container service holding the host configuration tree
pub const CONFIG_SERVICE: &str = "config";

/// Key of the EdgeBinder sub-tree inside the host configuration
pub const CONFIG_ROOT_KEY: &str = "edgebinder";

/// Prefix of container services providing adapter factories
pub const ADAPTER_SERVICE_PREFIX: &str = "edgebinder.adapter.";

/// Container service constructing the built-in Weaviate adapter
pub const WEAVIATE_FACTORY_SERVICE: &str = "edgebinder.factory.weaviate";

/// Container service name for an adapter type's factory
///
/// `adapter_service_name("custom")` is `"edgebinder.adapter.custom"`.
pub fn adapter_service_name(adapter_type: &str) -> String {
    format!("{ADAPTER_SERVICE_PREFIX}{adapter_type}")
}
