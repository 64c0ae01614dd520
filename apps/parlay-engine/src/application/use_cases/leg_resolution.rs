//! Catalog-side preconditions shared by the catalog-backed use cases.

use std::collections::HashSet;

use crate::application::ports::{CatalogLeg, LegCatalogPort};
use crate::error::EngineError;

/// Look up every leg, in order.
///
/// Unknown legs are reported before inactive ones, and both before
/// duplicates, each for the first offending id.
pub(crate) fn resolve_legs<C>(catalog: &C, leg_ids: &[u64]) -> Result<Vec<CatalogLeg>, EngineError>
where
    C: LegCatalogPort + ?Sized,
{
    let mut legs = Vec::with_capacity(leg_ids.len());
    for &leg_id in leg_ids {
        let leg = catalog
            .find_leg(leg_id)
            .ok_or_else(|| EngineError::leg_not_found(leg_id))?;
        if !leg.active {
            return Err(EngineError::leg_inactive(leg_id));
        }
        legs.push(leg);
    }

    let mut seen = HashSet::with_capacity(leg_ids.len());
    if !leg_ids.iter().all(|id| seen.insert(*id)) {
        return Err(EngineError::duplicate_leg());
    }

    Ok(legs)
}

/// Reject requests whose per-leg lists disagree in length.
pub(crate) fn ensure_same_length(lengths: &[usize], message: &str) -> Result<(), EngineError> {
    match lengths.split_first() {
        Some((first, rest)) if rest.iter().any(|len| len != first) => {
            Err(EngineError::invalid_request(message))
        }
        _ => Ok(()),
    }
}
