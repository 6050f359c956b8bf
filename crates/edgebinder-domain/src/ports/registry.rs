use crate::error::Result;
use crate::ports::adapter::SharedAdapter;
use crate::ports::factory::AdapterConfigBundle;

/// Table of adapter constructors keyed by adapter type
///
/// Injected into the resolver; consulted before any container lookup.
pub trait AdapterTypeRegistry: Send + Sync {
    /// Whether a constructor is registered for `adapter_type`
    fn has_adapter(&self, adapter_type: &str) -> bool;

    /// Build an adapter with the constructor registered for `adapter_type`
    fn create(&self, adapter_type: &str, bundle: &AdapterConfigBundle<'_>)
    -> Result<SharedAdapter>;

    /// Registered adapter types, for diagnostics
    fn adapter_types(&self) -> Vec<String> {
        Vec::new()
    }
}
