//! Simulate Quote Use Case

use super::leg_resolution::ensure_same_length;
use crate::application::dto::{QuoteResponseDto, SimulateQuoteRequestDto};
use crate::domain::pricing::QuoteValidator;
use crate::domain::shared::UsdcAmount;
use crate::error::EngineError;

/// Use case for quoting caller-supplied probabilities without the catalog.
pub struct SimulateQuoteUseCase {
    validator: QuoteValidator,
}

impl SimulateQuoteUseCase {
    /// Create a new SimulateQuoteUseCase.
    #[must_use]
    pub const fn new(validator: QuoteValidator) -> Self {
        Self { validator }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for mismatched list lengths or an
    /// unparseable stake.
    pub fn execute(
        &self,
        request: SimulateQuoteRequestDto,
    ) -> Result<QuoteResponseDto, EngineError> {
        ensure_same_length(
            &[
                request.leg_ids.len(),
                request.outcomes.len(),
                request.probabilities.len(),
            ],
            "legIds, outcomes, and probabilities must have the same length",
        )?;

        let stake = UsdcAmount::parse(&request.stake)?;
        let quote = self.validator.quote(
            &request.probabilities,
            stake,
            &request.leg_ids,
            &request.outcomes,
        );

        tracing::debug!(
            leg_count = request.probabilities.len(),
            valid = quote.is_valid(),
            "Simulated quote"
        );

        Ok(QuoteResponseDto::from(quote))
    }
}
