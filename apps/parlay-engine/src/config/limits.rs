//! Ticket shape limits.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::QuoteLimits;
use crate::domain::shared::scale::{MAX_LEGS, MIN_LEGS, MIN_STAKE_USDC};

/// Leg count and stake bounds for new tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Fewest legs a ticket may carry.
    #[serde(default = "default_min_legs")]
    pub min_legs: usize,
    /// Most legs a ticket may carry.
    #[serde(default = "default_max_legs")]
    pub max_legs: usize,
    /// Stake floor in whole USDC.
    #[serde(default = "default_min_stake_usdc")]
    pub min_stake_usdc: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_legs: default_min_legs(),
            max_legs: default_max_legs(),
            min_stake_usdc: default_min_stake_usdc(),
        }
    }
}

impl LimitsConfig {
    /// Domain quote limits for these settings.
    #[must_use]
    pub const fn quote_limits(&self) -> QuoteLimits {
        QuoteLimits {
            min_legs: self.min_legs,
            max_legs: self.max_legs,
            min_stake_usdc: self.min_stake_usdc,
        }
    }
}

const fn default_min_legs() -> usize {
    MIN_LEGS
}

const fn default_max_legs() -> usize {
    MAX_LEGS
}

const fn default_min_stake_usdc() -> u64 {
    MIN_STAKE_USDC
}
