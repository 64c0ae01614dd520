//! Risk assessment result types.
//!
//! The advisor produces numbers and tagged variants only. Sentences are
//! rendered by the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::risk_tier::RiskTier;

/// Action advised to the bettor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskAction {
    /// Place the ticket as proposed.
    Buy,
    /// Place a smaller ticket.
    ReduceStake,
    /// Do not place the ticket.
    Avoid,
}

impl fmt::Display for RiskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::ReduceStake => write!(f, "REDUCE_STAKE"),
            Self::Avoid => write!(f, "AVOID"),
        }
    }
}

/// Which branch of the decision produced the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    /// Outside the tier's leg-count or win-probability limits.
    Avoid,
    /// Kelly sizes the position at zero: the house edge eats any advantage.
    NoEdge,
    /// Kelly stake is below the proposed stake.
    ReduceStake,
    /// Proposed stake fits within the Kelly stake.
    Buy,
}

impl Recommendation {
    /// Action reported for this branch.
    #[must_use]
    pub const fn action(self) -> RiskAction {
        match self {
            Self::Avoid => RiskAction::Avoid,
            Self::NoEdge | Self::ReduceStake => RiskAction::ReduceStake,
            Self::Buy => RiskAction::Buy,
        }
    }
}

/// A condition worth flagging regardless of the action.
#[derive(Debug, Clone, PartialEq)]
pub enum RiskWarning {
    /// More legs than the tier recommends.
    TooManyLegs {
        tier: RiskTier,
        max_legs: usize,
        num_legs: usize,
    },
    /// Win probability under the tier minimum.
    LowWinProbability {
        tier: RiskTier,
        win_probability: f64,
        min_win_prob: f64,
    },
    /// Several legs share a category.
    CorrelatedCategory { category: String, count: usize },
}

/// Advisory sizing for a ticket.
///
/// `expected_value` and `suggested_stake` are rounded to cents when computed.
/// Every other float is unrounded; display rounding is a presentation concern.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub recommendation: Recommendation,
    /// Kelly stake in whole USDC, rounded to cents.
    pub suggested_stake: f64,
    /// Kelly fraction after the tier cap, in `[0, max_kelly]`.
    pub kelly_fraction: f64,
    pub win_probability: f64,
    /// Expected profit on the proposed stake in whole USDC, rounded to cents.
    pub expected_value: f64,
    /// In `[0.5, 1.0]`; falls with leg count.
    pub confidence: f64,
    pub warnings: Vec<RiskWarning>,
    pub tier: RiskTier,
    pub fair_multiplier: f64,
    pub net_multiplier: f64,
    pub edge_bps: u32,
    pub num_legs: usize,
}

impl RiskAssessment {
    /// Advised action.
    #[must_use]
    pub const fn action(&self) -> RiskAction {
        self.recommendation.action()
    }
}
