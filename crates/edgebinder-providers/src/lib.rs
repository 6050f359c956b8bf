//! # EdgeBinder - Adapter Implementations
//!
//! Persistence adapters bundled with EdgeBinder. Each one implements the
//! `PersistenceAdapter` port from `edgebinder-domain` and registers itself in
//! the application layer's `ADAPTERS` slice, so linking this crate is enough
//! for `AdapterRegistry::with_registered()` to know them.
//!
//! | Adapter type | Implementation | Description |
//! |--------------|----------------|-------------|
//! | `memory` | [`InMemoryAdapter`] | Concurrent in-memory storage (non-persistent) |
//! | `null` | [`NullAdapter`] | Accepts writes, stores nothing |

pub use edgebinder_domain::error::{Error, Result};
pub use edgebinder_domain::ports::PersistenceAdapter;

/// Persistence adapter implementations
pub mod adapters;

pub use adapters::{InMemoryAdapter, NullAdapter};
