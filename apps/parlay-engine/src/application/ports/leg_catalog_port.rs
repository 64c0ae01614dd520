//! Leg Catalog Port (Driven Port)
//!
//! Read-only access to the legs tickets may be built from.

use serde::{Deserialize, Serialize};

/// A leg as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogLeg {
    /// Leg id as registered on chain.
    pub id: u64,
    /// The proposition.
    pub question: String,
    /// Grouping used for correlation warnings.
    pub category: String,
    /// Probability of Yes, in PPM.
    pub probability_ppm: u32,
    /// Whether new tickets may include this leg.
    pub active: bool,
}

/// Port for leg lookups.
///
/// Caching and refresh policy belong to the adapter.
pub trait LegCatalogPort: Send + Sync {
    /// Find a leg by id.
    fn find_leg(&self, id: u64) -> Option<CatalogLeg>;
}
