//! Early exit configuration.

use serde::{Deserialize, Serialize};

use crate::domain::cashout::{CashoutValuer, DEFAULT_SLIPPAGE_TOLERANCE_PCT};
use crate::domain::shared::scale::BASE_CASHOUT_PENALTY_BPS;

/// Cashout penalty and slippage settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashoutConfig {
    /// Penalty used when a ticket carries no snapshot.
    #[serde(default = "default_penalty_bps")]
    pub default_penalty_bps: u32,
    /// Percent shaved off the value to produce `minOut`.
    #[serde(default = "default_slippage_tolerance_pct")]
    pub slippage_tolerance_pct: u32,
}

impl Default for CashoutConfig {
    fn default() -> Self {
        Self {
            default_penalty_bps: default_penalty_bps(),
            slippage_tolerance_pct: default_slippage_tolerance_pct(),
        }
    }
}

impl CashoutConfig {
    /// Valuer using the configured default penalty.
    #[must_use]
    pub const fn valuer(&self) -> CashoutValuer {
        CashoutValuer::new(self.default_penalty_bps)
    }
}

const fn default_penalty_bps() -> u32 {
    BASE_CASHOUT_PENALTY_BPS
}

const fn default_slippage_tolerance_pct() -> u32 {
    DEFAULT_SLIPPAGE_TOLERANCE_PCT
}
