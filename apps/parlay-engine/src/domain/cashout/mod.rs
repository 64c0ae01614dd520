//! Cashout Bounded Context
//!
//! Early-exit valuation of partially resolved tickets.
//!
//! # Key Concepts
//!
//! - **Leg Classification**: Won, lost or still open (voided legs stay open)
//! - **Penalty**: Base penalty scaled by the fraction of legs still open
//! - **Slippage Floor**: Minimum proceeds accepted when the cashout is submitted

mod leg_state;
mod valuer;

pub use leg_state::{LegClass, LegStatus, OutcomeChoice, TicketLeg, TicketProgress};
pub use valuer::{
    CashoutInput, CashoutValuation, CashoutValuer, DEFAULT_SLIPPAGE_TOLERANCE_PCT,
    compute_cashout_value, min_cashout_out, scaled_penalty_bps,
};
