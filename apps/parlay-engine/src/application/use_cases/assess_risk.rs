//! Assess Risk Use Case

use super::leg_resolution::ensure_same_length;
use crate::application::dto::{RiskAssessRequestDto, RiskAssessmentDto};
use crate::domain::pricing::{QuoteLimits, QuoteRejection};
use crate::domain::risk_management::{RiskAdvisor, RiskAssessment, RiskInput, RiskTier};
use crate::domain::shared::UsdcAmount;
use crate::error::EngineError;

/// Use case for advisory sizing of a ticket.
pub struct AssessRiskUseCase {
    advisor: RiskAdvisor,
    limits: QuoteLimits,
}

impl AssessRiskUseCase {
    /// Create a new AssessRiskUseCase.
    #[must_use]
    pub const fn new(advisor: RiskAdvisor, limits: QuoteLimits) -> Self {
        Self { advisor, limits }
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] for mismatched list lengths, unparseable
    /// amounts, a stake under the floor, or risk input the advisor rejects.
    pub fn execute(
        &self,
        request: RiskAssessRequestDto,
    ) -> Result<RiskAssessmentDto, EngineError> {
        ensure_same_length(
            &[
                request.leg_ids.len(),
                request.outcomes.len(),
                request.probabilities.len(),
            ],
            "legIds, outcomes, and probabilities must have the same length",
        )?;

        let stake = UsdcAmount::parse(&request.stake)?;
        if stake < UsdcAmount::from_whole(self.limits.min_stake_usdc) {
            let rejection = QuoteRejection::StakeBelowMinimum {
                min_usdc: self.limits.min_stake_usdc,
            };
            return Err(EngineError::invalid_request(rejection.to_string()));
        }

        let assessment = assess(
            &self.advisor,
            request.probabilities,
            request.categories.unwrap_or_default(),
            stake,
            &request.bankroll,
            request.risk_tolerance,
        )?;

        Ok(RiskAssessmentDto::present(&assessment, request.stake.trim()))
    }
}

/// Run the advisor over parsed amounts.
pub(crate) fn assess(
    advisor: &RiskAdvisor,
    probabilities: Vec<u32>,
    categories: Vec<String>,
    stake: UsdcAmount,
    bankroll: &str,
    tier: RiskTier,
) -> Result<RiskAssessment, EngineError> {
    let bankroll = UsdcAmount::parse(bankroll)?;
    let input = RiskInput {
        probabilities,
        categories,
        stake: stake.to_f64(),
        bankroll: bankroll.to_f64(),
        tier,
    };
    Ok(advisor.assess(&input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_management::RiskAction;
    use crate::error::ErrorCode;

    fn use_case() -> AssessRiskUseCase {
        AssessRiskUseCase::new(RiskAdvisor::default(), QuoteLimits::default())
    }

    fn request(probabilities: &[u32], tier: RiskTier) -> RiskAssessRequestDto {
        RiskAssessRequestDto {
            leg_ids: (1..=probabilities.len() as u64).collect(),
            outcomes: vec!["Yes".to_string(); probabilities.len()],
            stake: "10".to_string(),
            probabilities: probabilities.to_vec(),
            bankroll: "1000".to_string(),
            risk_tolerance: tier,
            categories: None,
        }
    }

    #[test]
    fn two_leg_assessment() {
        let dto = use_case()
            .execute(request(&[600_000, 450_000], RiskTier::Moderate))
            .unwrap();

        assert_eq!(dto.action, RiskAction::ReduceStake);
        assert!((dto.win_probability - 0.27).abs() < 1e-12);
        assert!((dto.fair_multiplier - 3.7).abs() < 1e-12);
        assert!((dto.net_multiplier - 3.63).abs() < 1e-12);
        assert_eq!(dto.suggested_stake, "0.00");
        assert_eq!(dto.kelly_fraction, 0.0);
        assert!((dto.expected_value - -0.2).abs() < 1e-12);
        assert_eq!(dto.edge_bps, 200);
        assert_eq!(
            dto.reasoning,
            "House edge (200bps) exceeds edge on fair odds. Kelly suggests $0. \
             Bet only if you believe your true win probability exceeds 27.00%."
        );
    }

    #[test]
    fn conservative_four_legs() {
        let dto = use_case()
            .execute(request(&[700_000; 4], RiskTier::Conservative))
            .unwrap();

        assert_eq!(dto.action, RiskAction::Avoid);
        assert_eq!(
            dto.warnings,
            vec!["conservative profile recommends max 3 legs, you have 4".to_string()]
        );
        assert_eq!(
            dto.reasoning,
            "4-leg parlay at 24.01% win probability exceeds conservative risk tolerance limits."
        );
        assert!((dto.confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn correlated_categories() {
        let mut correlated = request(&[500_000, 600_000, 700_000], RiskTier::Aggressive);
        correlated.categories = Some(vec![
            "nba".to_string(),
            "nba".to_string(),
            "crypto".to_string(),
        ]);

        let dto = use_case().execute(correlated).unwrap();

        assert_eq!(
            dto.warnings,
            vec!["2 legs in category \"nba\" may be correlated".to_string()]
        );
    }

    #[test]
    fn stake_floor() {
        let mut low = request(&[500_000, 500_000], RiskTier::Moderate);
        low.stake = "0.99".to_string();
        let error = use_case().execute(low).unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Stake must be at least 1 USDC");
    }

    #[test]
    fn zero_probability_is_rejected() {
        let error = use_case()
            .execute(request(&[0, 500_000], RiskTier::Moderate))
            .unwrap_err();
        assert_eq!(error.code(), ErrorCode::InvalidRiskInput);
    }

    #[test]
    fn zero_bankroll_is_rejected() {
        let mut broke = request(&[500_000, 500_000], RiskTier::Moderate);
        broke.bankroll = "0".to_string();
        let error = use_case().execute(broke).unwrap_err();
        assert_eq!(error.message(), "Bankroll must be positive");
    }
}
