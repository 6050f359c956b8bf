//! Persistence Adapter Implementations
//!
//! ## Adapter Selection Guide
//!
//! - **Unit tests without storage**: `NullAdapter`
//! - **Development and integration tests**: `InMemoryAdapter`

pub mod in_memory;
pub mod null;

pub use in_memory::InMemoryAdapter;
pub use null::NullAdapter;
