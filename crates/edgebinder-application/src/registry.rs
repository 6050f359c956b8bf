//! Adapter Registry
//!
//! Injected table mapping adapter types to constructors. The resolver asks
//! it first, before any container lookup.
//!
//! ## Registration
//!
//! Constructors are added at runtime with [`AdapterRegistry::register`], or
//! at compile time through the `ADAPTERS` distributed slice:
//!
//! ```ignore
//! use edgebinder_application::registry::{AdapterEntry, ADAPTERS};
//!
//! #[linkme::distributed_slice(ADAPTERS)]
//! static MEMORY_ADAPTER: AdapterEntry = AdapterEntry {
//!     name: "memory",
//!     description: "In-memory adapter",
//!     factory: |bundle| Ok(Arc::new(InMemoryAdapter::from_config(bundle.instance))),
//! };
//! ```
//!
//! Compile-time entries only reach a registry built with
//! [`AdapterRegistry::with_registered`]; [`AdapterRegistry::new`] starts empty.

use std::collections::HashMap;
use std::sync::Arc;

use edgebinder_domain::error::{ConfigurationError, Result};
use edgebinder_domain::ports::{AdapterConfigBundle, AdapterTypeRegistry, SharedAdapter};
use tracing::{debug, warn};

/// Constructor stored in an [`AdapterRegistry`]
pub type AdapterConstructor =
    Arc<dyn Fn(&AdapterConfigBundle<'_>) -> Result<SharedAdapter> + Send + Sync>;

/// Compile-time registry entry
///
/// Adapter crates submit one of these per adapter type using
/// `#[linkme::distributed_slice(ADAPTERS)]`.
pub struct AdapterEntry {
    /// Adapter type identifier (e.g., "memory")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function building the adapter from a bundle
    pub factory: fn(&AdapterConfigBundle<'_>) -> Result<SharedAdapter>,
}

// Auto-collection via linkme distributed slices - adapters submit entries at compile time
#[linkme::distributed_slice]
pub static ADAPTERS: [AdapterEntry] = [..];

/// List compile-time registered adapters as (name, description) tuples
pub fn list_registered_adapters() -> Vec<(&'static str, &'static str)> {
    ADAPTERS.iter().map(|e| (e.name, e.description)).collect()
}

struct Registration {
    description: String,
    constructor: AdapterConstructor,
}

/// Adapter type → constructor table
#[derive(Default)]
pub struct AdapterRegistry {
    adapters: HashMap<String, Registration>,
}

impl AdapterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with every compile-time registered adapter
    pub fn with_registered() -> Self {
        let mut registry = Self::new();
        for entry in ADAPTERS {
            registry.register(entry.name, entry.description, entry.factory);
        }
        debug!(count = registry.len(), "Seeded adapter registry");
        registry
    }

    /// Register a constructor, replacing any previous one for the same type
    pub fn register<F>(
        &mut self,
        adapter_type: impl Into<String>,
        description: impl Into<String>,
        constructor: F,
    ) -> &mut Self
    where
        F: Fn(&AdapterConfigBundle<'_>) -> Result<SharedAdapter> + Send + Sync + 'static,
    {
        let adapter_type = adapter_type.into();
        let registration = Registration {
            description: description.into(),
            constructor: Arc::new(constructor),
        };
        if self
            .adapters
            .insert(adapter_type.clone(), registration)
            .is_some()
        {
            warn!(adapter = %adapter_type, "Replacing registered adapter constructor");
        }
        self
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_adapter<F>(
        mut self,
        adapter_type: impl Into<String>,
        description: impl Into<String>,
        constructor: F,
    ) -> Self
    where
        F: Fn(&AdapterConfigBundle<'_>) -> Result<SharedAdapter> + Send + Sync + 'static,
    {
        self.register(adapter_type, description, constructor);
        self
    }

    /// Remove a constructor; returns whether one was registered
    pub fn unregister(&mut self, adapter_type: &str) -> bool {
        self.adapters.remove(adapter_type).is_some()
    }

    /// Registered adapters as (name, description) tuples, sorted by name
    pub fn list_adapters(&self) -> Vec<(String, String)> {
        let mut adapters: Vec<(String, String)> = self
            .adapters
            .iter()
            .map(|(name, registration)| (name.clone(), registration.description.clone()))
            .collect();
        adapters.sort();
        adapters
    }

    /// Number of registered adapters
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// Whether no adapter is registered
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }
}

impl AdapterTypeRegistry for AdapterRegistry {
    fn has_adapter(&self, adapter_type: &str) -> bool {
        self.adapters.contains_key(adapter_type)
    }

    fn create(
        &self,
        adapter_type: &str,
        bundle: &AdapterConfigBundle<'_>,
    ) -> Result<SharedAdapter> {
        let registration = self
            .adapters
            .get(adapter_type)
            .ok_or_else(|| ConfigurationError::unsupported_adapter(adapter_type))?;
        (registration.constructor)(bundle)
    }

    fn adapter_types(&self) -> Vec<String> {
        self.list_adapters().into_iter().map(|(name, _)| name).collect()
    }
}

impl std::fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("adapters", &self.adapter_types())
            .finish()
    }
}
