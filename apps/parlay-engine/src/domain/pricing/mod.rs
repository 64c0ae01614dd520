//! Pricing Bounded Context
//!
//! Exact integer pricing of a ticket, matching settlement to the last unit.
//!
//! # Key Concepts
//!
//! - **Fair Multiplier**: Reciprocal of the combined leg probability (PPM)
//! - **House Edge**: Base plus per-leg basis points taken off the fair multiplier
//! - **Quote**: Net multiplier, payout and fee, or a rejection reason

mod combiner;
mod payout;
mod quote;

pub use combiner::compute_multiplier;
pub use payout::{FeeSchedule, apply_edge, checked_payout, compute_fee, compute_payout};
pub use quote::{Quote, QuoteLimits, QuoteRejection, QuoteValidator};
