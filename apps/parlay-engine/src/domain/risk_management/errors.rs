//! Risk management errors.

use thiserror::Error;

/// Input that cannot be assessed at all.
///
/// A ticket the advisor merely dislikes is not an error; it is an `AVOID`
/// recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RiskInputError {
    /// Leg count outside the protocol bounds.
    #[error("Leg count must be {min}-{max}")]
    LegCount {
        /// Fewest legs.
        min: usize,
        /// Most legs.
        max: usize,
    },

    /// A probability of zero or above the PPM scale.
    #[error("Probability at leg {index} must be between 1 and 1000000")]
    ProbabilityOutOfRange {
        /// Zero-based leg index.
        index: usize,
    },

    /// Categories supplied for some legs but not others.
    #[error("Expected {expected} categories, got {actual}")]
    CategoryCount {
        /// Leg count.
        expected: usize,
        /// Categories supplied.
        actual: usize,
    },

    /// Bankroll must be a positive finite amount.
    #[error("Bankroll must be positive")]
    InvalidBankroll,

    /// Stake must be a non-negative finite amount.
    #[error("Stake must be a non-negative amount")]
    InvalidStake,

    /// Tier name not recognised.
    #[error("Unknown risk tolerance: {0}")]
    UnknownTier(String),
}
