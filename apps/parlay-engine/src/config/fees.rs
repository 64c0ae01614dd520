//! House edge configuration.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::FeeSchedule;
use crate::domain::shared::scale::{BASE_FEE_BPS, PER_LEG_FEE_BPS};

/// Fee schedule applied to every quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeesConfig {
    /// Flat edge in basis points.
    #[serde(default = "default_base_fee_bps")]
    pub base_fee_bps: u32,
    /// Additional edge per leg in basis points.
    #[serde(default = "default_per_leg_fee_bps")]
    pub per_leg_fee_bps: u32,
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            base_fee_bps: default_base_fee_bps(),
            per_leg_fee_bps: default_per_leg_fee_bps(),
        }
    }
}

impl FeesConfig {
    /// Domain fee schedule for these settings.
    #[must_use]
    pub const fn schedule(&self) -> FeeSchedule {
        FeeSchedule::new(self.base_fee_bps, self.per_leg_fee_bps)
    }
}

const fn default_base_fee_bps() -> u32 {
    BASE_FEE_BPS
}

const fn default_per_leg_fee_bps() -> u32 {
    PER_LEG_FEE_BPS
}
