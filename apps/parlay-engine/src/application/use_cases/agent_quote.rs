//! Agent Quote Use Case

use std::sync::Arc;

use super::assess_risk::assess;
use super::leg_resolution::{ensure_same_length, resolve_legs};
use crate::application::dto::{
    AgentQuoteRequestDto, AgentQuoteResponseDto, QuoteResponseDto, RiskAssessmentDto,
};
use crate::application::ports::LegCatalogPort;
use crate::domain::pricing::QuoteValidator;
use crate::domain::risk_management::RiskAdvisor;
use crate::domain::shared::UsdcAmount;
use crate::error::EngineError;

/// Use case for a quote plus risk assessment over catalog legs.
pub struct AgentQuoteUseCase<C>
where
    C: LegCatalogPort,
{
    catalog: Arc<C>,
    validator: QuoteValidator,
    advisor: RiskAdvisor,
}

impl<C> AgentQuoteUseCase<C>
where
    C: LegCatalogPort,
{
    /// Create a new AgentQuoteUseCase.
    pub fn new(catalog: Arc<C>, validator: QuoteValidator, advisor: RiskAdvisor) -> Self {
        Self {
            catalog,
            validator,
            advisor,
        }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for the same catalog and amount failures
    /// as a plain quote, or when the advisor rejects the resolved legs.
    pub fn execute(
        &self,
        request: AgentQuoteRequestDto,
    ) -> Result<AgentQuoteResponseDto, EngineError> {
        ensure_same_length(
            &[request.leg_ids.len(), request.outcomes.len()],
            "legIds and outcomes must have the same length",
        )?;

        let legs = resolve_legs(self.catalog.as_ref(), &request.leg_ids)?;
        let (probabilities, categories): (Vec<u32>, Vec<String>) = legs
            .into_iter()
            .map(|leg| (leg.probability_ppm, leg.category))
            .unzip();

        let stake = UsdcAmount::parse(&request.stake)?;
        let quote = self
            .validator
            .quote(&probabilities, stake, &request.leg_ids, &request.outcomes);

        let assessment = assess(
            &self.advisor,
            probabilities,
            categories,
            stake,
            &request.bankroll,
            request.risk_tolerance,
        )?;

        tracing::debug!(
            leg_ids = ?request.leg_ids,
            valid = quote.is_valid(),
            action = %assessment.action(),
            "Agent quote"
        );

        Ok(AgentQuoteResponseDto {
            quote: QuoteResponseDto::from(quote),
            risk: RiskAssessmentDto::present(&assessment, request.stake.trim()),
        })
    }
}
