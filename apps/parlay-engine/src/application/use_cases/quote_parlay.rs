//! Quote Parlay Use Case

use std::sync::Arc;

use super::leg_resolution::{ensure_same_length, resolve_legs};
use crate::application::dto::{QuoteRequestDto, QuoteResponseDto};
use crate::application::ports::LegCatalogPort;
use crate::domain::pricing::QuoteValidator;
use crate::domain::shared::UsdcAmount;
use crate::error::EngineError;

/// Use case for quoting a ticket built from catalog legs.
///
/// Owns the checks the validator leaves to its caller: every leg must exist,
/// be active and appear once.
pub struct QuoteParlayUseCase<C>
where
    C: LegCatalogPort,
{
    catalog: Arc<C>,
    validator: QuoteValidator,
}

impl<C> QuoteParlayUseCase<C>
where
    C: LegCatalogPort,
{
    /// Create a new QuoteParlayUseCase.
    pub fn new(catalog: Arc<C>, validator: QuoteValidator) -> Self {
        Self { catalog, validator }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for mismatched list lengths, unknown,
    /// inactive or duplicate legs, or an unparseable stake. Structural
    /// problems the validator owns come back as an invalid quote.
    pub fn execute(&self, request: QuoteRequestDto) -> Result<QuoteResponseDto, EngineError> {
        ensure_same_length(
            &[request.leg_ids.len(), request.outcomes.len()],
            "legIds and outcomes must have the same length",
        )?;

        let legs = resolve_legs(self.catalog.as_ref(), &request.leg_ids)?;
        let probabilities: Vec<u32> = legs.iter().map(|leg| leg.probability_ppm).collect();
        let stake = UsdcAmount::parse(&request.stake)?;

        let quote = self
            .validator
            .quote(&probabilities, stake, &request.leg_ids, &request.outcomes);

        if let Some(reason) = quote.reason() {
            tracing::warn!(leg_ids = ?request.leg_ids, %reason, "Quote rejected");
        }

        Ok(QuoteResponseDto::from(quote))
    }
}
