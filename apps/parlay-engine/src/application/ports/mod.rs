//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.

mod leg_catalog_port;

pub use leg_catalog_port::{CatalogLeg, LegCatalogPort};
