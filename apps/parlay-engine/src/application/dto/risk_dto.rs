//! Risk DTOs
//!
//! Also the presentation layer for risk assessments: reasoning sentences,
//! warning messages and display rounding live here, not in the domain.

use serde::{Deserialize, Serialize};

use crate::domain::risk_management::{
    Recommendation, RiskAction, RiskAssessment, RiskTier, RiskWarning,
};
use crate::domain::shared::numeric::{round_half_up, to_fixed};

/// Request to assess a ticket from caller-supplied probabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessRequestDto {
    pub leg_ids: Vec<u64>,
    pub outcomes: Vec<String>,
    /// Proposed stake as a decimal USDC string.
    pub stake: String,
    /// Probability per leg, in PPM.
    pub probabilities: Vec<u32>,
    /// Bankroll as a decimal USDC string.
    pub bankroll: String,
    pub risk_tolerance: RiskTier,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

/// Risk assessment as shown to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessmentDto {
    pub action: RiskAction,
    /// Kelly stake, two decimals.
    pub suggested_stake: String,
    pub kelly_fraction: f64,
    pub win_probability: f64,
    pub expected_value: f64,
    pub confidence: f64,
    pub reasoning: String,
    pub warnings: Vec<String>,
    pub risk_tolerance: RiskTier,
    pub fair_multiplier: f64,
    pub net_multiplier: f64,
    pub edge_bps: u32,
}

impl RiskAssessmentDto {
    /// Render an assessment. `proposed_stake` is echoed verbatim in the
    /// reduce-stake sentence.
    #[must_use]
    pub fn present(assessment: &RiskAssessment, proposed_stake: &str) -> Self {
        Self {
            action: assessment.action(),
            suggested_stake: to_fixed(assessment.suggested_stake, 2),
            kelly_fraction: round_half_up(assessment.kelly_fraction, 4),
            win_probability: round_half_up(assessment.win_probability, 6),
            expected_value: assessment.expected_value,
            confidence: round_half_up(assessment.confidence, 2),
            reasoning: reasoning(assessment, proposed_stake),
            warnings: assessment.warnings.iter().map(warning_message).collect(),
            risk_tolerance: assessment.tier,
            fair_multiplier: round_half_up(assessment.fair_multiplier, 2),
            net_multiplier: round_half_up(assessment.net_multiplier, 2),
            edge_bps: assessment.edge_bps,
        }
    }
}

fn percent(fraction: f64, decimals: u32) -> String {
    to_fixed(fraction * 100.0, decimals)
}

/// Sentence explaining the recommendation.
#[must_use]
pub fn reasoning(assessment: &RiskAssessment, proposed_stake: &str) -> String {
    let num_legs = assessment.num_legs;
    let win_pct = percent(assessment.win_probability, 2);
    let kelly_pct = percent(assessment.kelly_fraction, 2);
    let suggested = to_fixed(assessment.suggested_stake, 2);

    match assessment.recommendation {
        Recommendation::Avoid => format!(
            "{num_legs}-leg parlay at {win_pct}% win probability exceeds {} risk tolerance limits.",
            assessment.tier
        ),
        Recommendation::NoEdge => format!(
            "House edge ({}bps) exceeds edge on fair odds. Kelly suggests $0. \
             Bet only if you believe your true win probability exceeds {win_pct}%.",
            assessment.edge_bps
        ),
        Recommendation::ReduceStake => format!(
            "Kelly criterion suggests {suggested} USDC ({kelly_pct}% of bankroll). \
             Your proposed stake of {proposed_stake} USDC exceeds this."
        ),
        Recommendation::Buy => format!(
            "{num_legs}-leg parlay at {win_pct}% win probability. \
             Kelly suggests {kelly_pct}% of bankroll = {suggested} USDC."
        ),
    }
}

/// Message for a single warning.
#[must_use]
pub fn warning_message(warning: &RiskWarning) -> String {
    match warning {
        RiskWarning::TooManyLegs {
            tier,
            max_legs,
            num_legs,
        } => format!("{tier} profile recommends max {max_legs} legs, you have {num_legs}"),
        RiskWarning::LowWinProbability {
            tier,
            win_probability,
            min_win_prob,
        } => format!(
            "Win probability {}% is below {tier} minimum of {}%",
            percent(*win_probability, 2),
            percent(*min_win_prob, 0)
        ),
        RiskWarning::CorrelatedCategory { category, count } => {
            format!("{count} legs in category \"{category}\" may be correlated")
        }
    }
}
