//! Persistence Adapters
//!
//! Catalog implementations of the leg lookup port.

pub mod in_memory;

pub use in_memory::InMemoryLegCatalog;
