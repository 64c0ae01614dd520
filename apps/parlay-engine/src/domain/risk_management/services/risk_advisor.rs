//! Risk Advisor
//!
//! Kelly-criterion sizing under per-tier caps, with leg-count, win-probability
//! and correlation warnings.
//!
//! Floating point is used here on purpose: these figures are advisory and
//! never reach settlement. The only rounding happens to `expected_value` and
//! `suggested_stake` (cents, ties toward positive infinity).

use crate::domain::pricing::{FeeSchedule, QuoteLimits};
use crate::domain::risk_management::errors::RiskInputError;
use crate::domain::risk_management::value_objects::{
    Recommendation, RiskAssessment, RiskTier, RiskWarning, TierCaps,
};
use crate::domain::shared::numeric::round_half_up;
use crate::domain::shared::{BPS, PPM};

/// What the advisor needs to know about a proposed ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskInput {
    /// Leg probabilities in PPM, each in `(0, PPM]`.
    pub probabilities: Vec<u32>,
    /// One category per leg, or empty when unknown.
    pub categories: Vec<String>,
    /// Proposed stake in whole USDC.
    pub stake: f64,
    /// Bettor bankroll in whole USDC.
    pub bankroll: f64,
    pub tier: RiskTier,
}

/// Sizes positions and flags risky tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskAdvisor {
    fees: FeeSchedule,
    limits: QuoteLimits,
}

impl RiskAdvisor {
    /// Create an advisor charging `fees` on tickets within `limits`.
    ///
    /// `limits.max_legs` must not exceed the protocol maximum.
    #[must_use]
    pub const fn new(fees: FeeSchedule, limits: QuoteLimits) -> Self {
        Self { fees, limits }
    }

    /// Assess a proposed ticket.
    ///
    /// # Errors
    ///
    /// Returns [`RiskInputError`] when the input cannot be assessed: a leg
    /// count outside the configured bounds, a probability outside `(0, PPM]`,
    /// a category list of the wrong length, or a non-positive bankroll.
    pub fn assess(&self, input: &RiskInput) -> Result<RiskAssessment, RiskInputError> {
        validate(input, &self.limits)?;

        let num_legs = input.probabilities.len();
        let caps = input.tier.caps();

        let win_probability = win_probability(&input.probabilities);
        let fair_multiplier = 1.0 / win_probability;
        let edge_bps = self.fees.edge_bps(num_legs);
        let net_multiplier =
            fair_multiplier * f64::from(BPS.saturating_sub(edge_bps)) / f64::from(BPS);

        let expected_value =
            round_half_up((win_probability * net_multiplier - 1.0) * input.stake, 2);

        let kelly_fraction = kelly_fraction(net_multiplier, win_probability, caps.max_kelly);
        let suggested_stake = round_half_up(kelly_fraction * input.bankroll, 2);

        let warnings = collect_warnings(input, &caps, win_probability);
        let recommendation = recommend(
            &caps,
            num_legs,
            win_probability,
            kelly_fraction,
            suggested_stake,
            input.stake,
        );

        let confidence = (1.0 - (num_legs as f64 - 2.0) * 0.1).max(0.5);

        tracing::debug!(
            leg_count = num_legs,
            tier = %input.tier,
            edge_bps,
            win_probability,
            kelly_fraction,
            action = %recommendation.action(),
            warnings = warnings.len(),
            "Risk assessed"
        );

        Ok(RiskAssessment {
            recommendation,
            suggested_stake,
            kelly_fraction,
            win_probability,
            expected_value,
            confidence,
            warnings,
            tier: input.tier,
            fair_multiplier,
            net_multiplier,
            edge_bps,
            num_legs,
        })
    }
}

fn validate(input: &RiskInput, limits: &QuoteLimits) -> Result<(), RiskInputError> {
    let num_legs = input.probabilities.len();
    if !(limits.min_legs..=limits.max_legs).contains(&num_legs) {
        return Err(RiskInputError::LegCount {
            min: limits.min_legs,
            max: limits.max_legs,
        });
    }

    if let Some(index) = input
        .probabilities
        .iter()
        .position(|&p| p == 0 || p > PPM)
    {
        return Err(RiskInputError::ProbabilityOutOfRange { index });
    }

    if !input.categories.is_empty() && input.categories.len() != num_legs {
        return Err(RiskInputError::CategoryCount {
            expected: num_legs,
            actual: input.categories.len(),
        });
    }

    if !input.bankroll.is_finite() || input.bankroll <= 0.0 {
        return Err(RiskInputError::InvalidBankroll);
    }

    if !input.stake.is_finite() || input.stake < 0.0 {
        return Err(RiskInputError::InvalidStake);
    }

    Ok(())
}

/// `prod(p) / PPM^n`, accumulated exactly and converted once.
///
/// With at most five legs both terms stay under `10^30`, inside `u128`.
fn win_probability(probabilities: &[u32]) -> f64 {
    let (numerator, denominator) = probabilities
        .iter()
        .fold((1_u128, 1_u128), |(numerator, denominator), &p| {
            (numerator * u128::from(p), denominator * u128::from(PPM))
        });
    numerator as f64 / denominator as f64
}

/// Kelly fraction `(b*p - q) / b` floored at zero and capped at `max_kelly`.
fn kelly_fraction(net_multiplier: f64, win_probability: f64, max_kelly: f64) -> f64 {
    let b = net_multiplier - 1.0;
    let kelly = if b > 0.0 {
        ((b * win_probability - (1.0 - win_probability)) / b).max(0.0)
    } else {
        0.0
    };
    kelly.min(max_kelly)
}

fn collect_warnings(input: &RiskInput, caps: &TierCaps, win_probability: f64) -> Vec<RiskWarning> {
    let num_legs = input.probabilities.len();
    let mut warnings = Vec::new();

    if num_legs > caps.max_legs {
        warnings.push(RiskWarning::TooManyLegs {
            tier: input.tier,
            max_legs: caps.max_legs,
            num_legs,
        });
    }

    if win_probability < caps.min_win_prob {
        warnings.push(RiskWarning::LowWinProbability {
            tier: input.tier,
            win_probability,
            min_win_prob: caps.min_win_prob,
        });
    }

    // Categories in order of first appearance.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for category in &input.categories {
        match counts.iter_mut().find(|(seen, _)| *seen == category.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((category.as_str(), 1)),
        }
    }
    warnings.extend(
        counts
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .map(|(category, count)| RiskWarning::CorrelatedCategory {
                category: category.to_string(),
                count,
            }),
    );

    warnings
}

fn recommend(
    caps: &TierCaps,
    num_legs: usize,
    win_probability: f64,
    kelly_fraction: f64,
    suggested_stake: f64,
    proposed_stake: f64,
) -> Recommendation {
    if win_probability < caps.min_win_prob || num_legs > caps.max_legs {
        Recommendation::Avoid
    } else if kelly_fraction == 0.0 {
        Recommendation::NoEdge
    } else if suggested_stake < proposed_stake {
        Recommendation::ReduceStake
    } else {
        Recommendation::Buy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::risk_management::value_objects::RiskAction;
    use test_case::test_case;

    fn input(probabilities: &[u32], tier: RiskTier) -> RiskInput {
        RiskInput {
            probabilities: probabilities.to_vec(),
            categories: Vec::new(),
            stake: 10.0,
            bankroll: 1_000.0,
            tier,
        }
    }

    fn assess(input: &RiskInput) -> RiskAssessment {
        RiskAdvisor::default().assess(input).unwrap()
    }

    #[test]
    fn two_leg_end_to_end() {
        let a = assess(&input(&[600_000, 450_000], RiskTier::Moderate));

        assert!((a.win_probability - 0.27).abs() < 1e-12);
        assert!((a.fair_multiplier - 3.70).abs() < 0.01);
        assert_eq!(a.edge_bps, 200);
        assert!((a.net_multiplier - a.fair_multiplier * 0.98).abs() < 1e-12);
        assert!((a.expected_value - -0.2).abs() < 1e-12);
        assert_eq!(a.kelly_fraction, 0.0);
        assert_eq!(a.suggested_stake, 0.0);
        assert_eq!(a.recommendation, Recommendation::NoEdge);
        assert_eq!(a.action(), RiskAction::ReduceStake);
        assert!((a.confidence - 1.0).abs() < f64::EPSILON);
        assert!(a.warnings.is_empty());
        assert_eq!(a.num_legs, 2);
    }

    #[test]
    fn conservative_tier_avoids_four_legs() {
        let a = assess(&input(&[700_000; 4], RiskTier::Conservative));

        assert_eq!(a.action(), RiskAction::Avoid);
        assert_eq!(
            a.warnings,
            vec![RiskWarning::TooManyLegs {
                tier: RiskTier::Conservative,
                max_legs: 3,
                num_legs: 4,
            }]
        );
    }

    #[test]
    fn low_win_probability_avoids() {
        let a = assess(&input(&[200_000, 200_000], RiskTier::Moderate));

        assert_eq!(a.action(), RiskAction::Avoid);
        assert!(matches!(
            a.warnings.as_slice(),
            [RiskWarning::LowWinProbability { tier: RiskTier::Moderate, .. }]
        ));
    }

    #[test]
    fn both_limits_warn_in_order() {
        let a = assess(&input(&[300_000; 4], RiskTier::Conservative));

        assert_eq!(a.warnings.len(), 2);
        assert!(matches!(a.warnings[0], RiskWarning::TooManyLegs { .. }));
        assert!(matches!(a.warnings[1], RiskWarning::LowWinProbability { .. }));
    }

    #[test]
    fn shared_categories_warn_once_per_category() {
        let mut risk_input = input(&[500_000, 600_000, 700_000, 800_000], RiskTier::Aggressive);
        risk_input.categories = ["nba", "nfl", "nba", "nfl"]
            .into_iter()
            .map(String::from)
            .collect();

        let a = assess(&risk_input);

        assert_eq!(
            a.warnings,
            vec![
                RiskWarning::CorrelatedCategory {
                    category: "nba".to_string(),
                    count: 2,
                },
                RiskWarning::CorrelatedCategory {
                    category: "nfl".to_string(),
                    count: 2,
                },
            ]
        );
    }

    #[test]
    fn distinct_categories_do_not_warn() {
        let mut risk_input = input(&[500_000, 600_000], RiskTier::Aggressive);
        risk_input.categories = vec!["nba".to_string(), "crypto".to_string()];
        assert!(assess(&risk_input).warnings.is_empty());
    }

    #[test_case(2, 1.0)]
    #[test_case(3, 0.9)]
    #[test_case(4, 0.8)]
    #[test_case(5, 0.7)]
    fn confidence_falls_with_legs(num_legs: usize, expected: f64) {
        let probabilities = vec![900_000; num_legs];
        let a = assess(&input(&probabilities, RiskTier::Aggressive));
        assert!((a.confidence - expected).abs() < 1e-9);
    }

    #[test]
    fn certain_legs_without_fees_have_no_edge() {
        let advisor = RiskAdvisor::new(FeeSchedule::new(0, 0), QuoteLimits::default());
        let a = advisor
            .assess(&input(&[1_000_000, 1_000_000], RiskTier::Aggressive))
            .unwrap();
        assert!((a.win_probability - 1.0).abs() < f64::EPSILON);
        assert_eq!(a.kelly_fraction, 0.0);
        assert_eq!(a.recommendation, Recommendation::NoEdge);
    }

    #[test]
    fn five_tiny_legs_keep_precision() {
        let a = assess(&input(&[1; 5], RiskTier::Aggressive));
        assert!(a.win_probability > 0.0);
        assert!((a.win_probability - 1e-30).abs() < 1e-42);
    }

    #[test_case(3.0, 0.5, 1.0, 0.25 ; "uncapped")]
    #[test_case(3.0, 0.5, 0.05, 0.05 ; "capped by tier")]
    #[test_case(2.0, 0.4, 1.0, 0.0 ; "negative edge floors at zero")]
    #[test_case(1.0, 0.9, 1.0, 0.0 ; "even money has no edge")]
    #[test_case(0.5, 0.9, 1.0, 0.0 ; "losing odds")]
    fn kelly_vectors(net_multiplier: f64, p: f64, cap: f64, expected: f64) {
        assert!((kelly_fraction(net_multiplier, p, cap) - expected).abs() < 1e-12);
    }

    #[test]
    fn recommendation_priority() {
        let caps = RiskTier::Moderate.caps();

        assert_eq!(recommend(&caps, 5, 0.5, 0.1, 100.0, 10.0), Recommendation::Avoid);
        assert_eq!(recommend(&caps, 2, 0.01, 0.1, 100.0, 10.0), Recommendation::Avoid);
        assert_eq!(recommend(&caps, 2, 0.5, 0.0, 0.0, 10.0), Recommendation::NoEdge);
        assert_eq!(recommend(&caps, 2, 0.5, 0.1, 5.0, 10.0), Recommendation::ReduceStake);
        assert_eq!(recommend(&caps, 2, 0.5, 0.1, 10.0, 10.0), Recommendation::Buy);
    }

    #[test_case(&[500_000], RiskInputError::LegCount { min: 2, max: 5 } ; "one leg")]
    #[test_case(&[500_000; 6], RiskInputError::LegCount { min: 2, max: 5 } ; "six legs")]
    #[test_case(&[500_000, 0], RiskInputError::ProbabilityOutOfRange { index: 1 } ; "zero probability")]
    #[test_case(&[1_000_001, 500_000], RiskInputError::ProbabilityOutOfRange { index: 0 } ; "above scale")]
    fn rejects_bad_probabilities(probabilities: &[u32], expected: RiskInputError) {
        let result = RiskAdvisor::default().assess(&input(probabilities, RiskTier::Moderate));
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn leg_count_follows_configured_limits() {
        let limits = QuoteLimits {
            min_legs: 3,
            max_legs: 4,
            ..QuoteLimits::default()
        };
        let advisor = RiskAdvisor::new(FeeSchedule::default(), limits);
        let expected = Err(RiskInputError::LegCount { min: 3, max: 4 });

        assert_eq!(advisor.assess(&input(&[500_000; 2], RiskTier::Moderate)), expected);
        assert_eq!(advisor.assess(&input(&[500_000; 5], RiskTier::Moderate)), expected);
        assert!(advisor.assess(&input(&[500_000; 3], RiskTier::Moderate)).is_ok());
    }

    #[test]
    fn accepts_certain_leg() {
        let a = assess(&input(&[1_000_000, 500_000], RiskTier::Moderate));
        assert!((a.win_probability - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_bad_amounts() {
        let advisor = RiskAdvisor::default();

        let mut risk_input = input(&[500_000, 500_000], RiskTier::Moderate);
        risk_input.bankroll = 0.0;
        assert_eq!(advisor.assess(&risk_input), Err(RiskInputError::InvalidBankroll));

        let mut risk_input = input(&[500_000, 500_000], RiskTier::Moderate);
        risk_input.stake = f64::NAN;
        assert_eq!(advisor.assess(&risk_input), Err(RiskInputError::InvalidStake));
    }

    #[test]
    fn rejects_partial_categories() {
        let mut risk_input = input(&[500_000, 500_000], RiskTier::Moderate);
        risk_input.categories = vec!["nba".to_string()];
        assert_eq!(
            RiskAdvisor::default().assess(&risk_input),
            Err(RiskInputError::CategoryCount {
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn deterministic() {
        let risk_input = input(&[612_345, 487_654, 333_333], RiskTier::Moderate);
        assert_eq!(assess(&risk_input), assess(&risk_input));
    }
}
