//! Seed legs for the in-memory catalog.

use serde::{Deserialize, Serialize};

use crate::application::ports::CatalogLeg;

/// Legs available to catalog-backed quotes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Legs in listing order.
    #[serde(default)]
    pub legs: Vec<CatalogLeg>,
}
