//! Early cashout valuation.
//!
//! Floor-integer arithmetic end to end, bit-exact with settlement. A value
//! that cannot be offered is `None`, never an error.

use alloy_primitives::U256;

use super::leg_state::TicketProgress;
use crate::domain::pricing::{checked_payout, compute_multiplier};
use crate::domain::shared::{BASE_CASHOUT_PENALTY_BPS, BPS, BPS_U256, UsdcAmount};

/// Slippage tolerance applied to cashout transactions by default (2%).
pub const DEFAULT_SLIPPAGE_TOLERANCE_PCT: u32 = 2;

/// Inputs for valuing a partially resolved ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashoutInput {
    /// Stake net of the fee taken at purchase.
    pub effective_stake: UsdcAmount,
    /// Effective probabilities of the legs already won.
    pub won_probabilities: Vec<u32>,
    /// Open legs, voided legs included.
    pub unresolved_count: usize,
    pub total_legs: usize,
    /// Cap on the cashout value.
    pub potential_payout: UsdcAmount,
    /// Penalty before scaling by the unresolved fraction.
    pub base_penalty_bps: u64,
}

/// `floor(base * unresolved / total)`, capped at 100%.
///
/// `total` must be non-zero.
#[must_use]
pub fn scaled_penalty_bps(base_penalty_bps: u64, unresolved_count: usize, total_legs: usize) -> u32 {
    let scaled =
        U256::from(base_penalty_bps) * U256::from(unresolved_count) / U256::from(total_legs);
    u32::try_from(scaled).map_or(BPS, |bps| bps.min(BPS))
}

/// Value a ticket for early exit.
///
/// Returns `None` when cashout is not offerable: no won legs, nothing left
/// unresolved, zero legs or zero stake, a won probability outside
/// `(0, PPM]`, or a fair value past 256 bits.
#[must_use]
pub fn compute_cashout_value(input: &CashoutInput) -> Option<UsdcAmount> {
    if input.won_probabilities.is_empty()
        || input.unresolved_count == 0
        || input.total_legs == 0
        || input.effective_stake.is_zero()
    {
        return None;
    }

    let won_multiplier = compute_multiplier(&input.won_probabilities)?;
    let fair_value = checked_payout(input.effective_stake, won_multiplier)?;
    let penalty_bps =
        scaled_penalty_bps(input.base_penalty_bps, input.unresolved_count, input.total_legs);

    let value = fair_value.raw().checked_mul(U256::from(BPS - penalty_bps))? / BPS_U256;
    Some(UsdcAmount::from_raw(value.min(input.potential_payout.raw())))
}

/// Minimum acceptable proceeds for a cashout transaction:
/// `floor(value * (100 - tolerance) / 100)`.
#[must_use]
pub fn min_cashout_out(value: UsdcAmount, slippage_tolerance_pct: u32) -> UsdcAmount {
    let keep = U256::from(100_u32.saturating_sub(slippage_tolerance_pct));
    UsdcAmount::from_raw(value.raw() * keep / U256::from(100_u32))
}

/// Values live tickets with a protocol default penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CashoutValuer {
    default_penalty_bps: u32,
}

impl Default for CashoutValuer {
    fn default() -> Self {
        Self::new(BASE_CASHOUT_PENALTY_BPS)
    }
}

/// A ticket's cashout figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashoutValuation {
    /// Value before slippage, `None` when no offer can be made.
    pub value: Option<UsdcAmount>,
    /// Base penalty the value was computed with.
    pub base_penalty_bps: u64,
}

impl CashoutValuer {
    /// Create a valuer falling back to `default_penalty_bps`.
    #[must_use]
    pub const fn new(default_penalty_bps: u32) -> Self {
        Self {
            default_penalty_bps,
        }
    }

    /// Penalty for a ticket: its snapshot, unless absent or zero.
    #[must_use]
    pub const fn base_penalty_bps(&self, snapshot: Option<u64>) -> u64 {
        match snapshot {
            Some(bps) if bps > 0 => bps,
            _ => self.default_penalty_bps as u64,
        }
    }

    /// Value a ticket from its classified legs.
    ///
    /// A ticket with a lost leg can no longer win and is never offered a
    /// cashout.
    #[must_use]
    pub fn value(
        &self,
        progress: &TicketProgress,
        stake: UsdcAmount,
        fee_paid: UsdcAmount,
        potential_payout: UsdcAmount,
        snapshot_penalty_bps: Option<u64>,
    ) -> CashoutValuation {
        let base_penalty_bps = self.base_penalty_bps(snapshot_penalty_bps);
        if progress.has_lost_leg() {
            return CashoutValuation {
                value: None,
                base_penalty_bps,
            };
        }

        let input = CashoutInput {
            effective_stake: UsdcAmount::from_raw(stake.raw().saturating_sub(fee_paid.raw())),
            won_probabilities: progress.won_probabilities.clone(),
            unresolved_count: progress.unresolved,
            total_legs: progress.total,
            potential_payout,
            base_penalty_bps,
        };

        CashoutValuation {
            value: compute_cashout_value(&input),
            base_penalty_bps,
        }
    }
}
