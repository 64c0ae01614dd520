//! Payout calculator: house edge, net multiplier, payout and fee.
//!
//! Pure integer arithmetic with floor division throughout.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{BASE_FEE_BPS, BPS, BPS_U256, PER_LEG_FEE_BPS, PPM_U256, UsdcAmount};

/// House-edge parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSchedule {
    /// Flat edge charged on every ticket.
    pub base_fee_bps: u32,
    /// Edge added per leg.
    pub per_leg_fee_bps: u32,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            base_fee_bps: BASE_FEE_BPS,
            per_leg_fee_bps: PER_LEG_FEE_BPS,
        }
    }
}

impl FeeSchedule {
    /// Create a fee schedule.
    #[must_use]
    pub const fn new(base_fee_bps: u32, per_leg_fee_bps: u32) -> Self {
        Self {
            base_fee_bps,
            per_leg_fee_bps,
        }
    }

    /// `base + legs * per_leg`.
    #[must_use]
    pub const fn edge_bps(&self, num_legs: usize) -> u32 {
        self.base_fee_bps + num_legs as u32 * self.per_leg_fee_bps
    }
}

/// `fair * (BPS - edge) / BPS`. An edge at or above 100% yields zero.
#[must_use]
pub fn apply_edge(fair_multiplier: U256, edge_bps: u32) -> U256 {
    fair_multiplier * U256::from(BPS.saturating_sub(edge_bps)) / BPS_U256
}

/// `floor(stake * multiplier / PPM)`.
#[must_use]
pub fn compute_payout(stake: UsdcAmount, multiplier: U256) -> UsdcAmount {
    UsdcAmount::from_raw(stake.raw() * multiplier / PPM_U256)
}

/// [`compute_payout`] that returns `None` instead of wrapping past 256 bits.
#[must_use]
pub fn checked_payout(stake: UsdcAmount, multiplier: U256) -> Option<UsdcAmount> {
    let product = stake.raw().checked_mul(multiplier)?;
    Some(UsdcAmount::from_raw(product / PPM_U256))
}

/// Fee withheld by the edge: payout at the fair multiplier minus payout at net.
#[must_use]
pub fn compute_fee(stake: UsdcAmount, fair_multiplier: U256, net_multiplier: U256) -> UsdcAmount {
    let fair_payout = compute_payout(stake, fair_multiplier).raw();
    let net_payout = compute_payout(stake, net_multiplier).raw();
    UsdcAmount::from_raw(fair_payout.saturating_sub(net_payout))
}
