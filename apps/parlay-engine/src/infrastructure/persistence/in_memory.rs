//! In-memory leg catalog.

use std::collections::HashMap;

use crate::application::ports::{CatalogLeg, LegCatalogPort};

/// In-memory implementation of `LegCatalogPort`.
///
/// Seeded once from configuration; lookups never block.
#[derive(Debug, Default)]
pub struct InMemoryLegCatalog {
    legs: Vec<CatalogLeg>,
    index: HashMap<u64, usize>,
}

impl InMemoryLegCatalog {
    /// Create a catalog over `legs`, kept in the given order.
    ///
    /// A repeated id resolves to its last listing.
    #[must_use]
    pub fn new(legs: Vec<CatalogLeg>) -> Self {
        let index = legs
            .iter()
            .enumerate()
            .map(|(position, leg)| (leg.id, position))
            .collect();
        Self { legs, index }
    }

    /// Get the number of legs in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl LegCatalogPort for InMemoryLegCatalog {
    fn find_leg(&self, id: u64) -> Option<CatalogLeg> {
        self.index
            .get(&id)
            .and_then(|&position| self.legs.get(position))
            .cloned()
    }
}
