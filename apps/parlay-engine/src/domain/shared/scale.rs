//! Fixed-point scales and protocol constants.
//!
//! Every settlement-critical quantity in the engine is an integer on one of
//! three scales:
//!
//! | Scale | Unit | Meaning |
//! |-------|------|---------|
//! | PPM | 1,000,000 | probability 1.0 / multiplier 1.0x |
//! | BPS | 10,000 | 100% (fees, penalties) |
//! | USDC | 10^6 | one whole USDC (6 decimals) |
//!
//! These values mirror the settlement contract and must never drift from it.

use alloy_primitives::U256;

/// Parts-per-million scale for probabilities and multipliers.
pub const PPM: u32 = 1_000_000;

/// Basis-point scale (10,000 = 100%).
pub const BPS: u32 = 10_000;

/// Decimal digits carried by the settlement currency.
pub const USDC_DECIMALS: u32 = 6;

/// Raw units in one whole USDC.
pub const USDC_UNIT: u64 = 1_000_000;

/// Fewest legs a ticket may carry.
pub const MIN_LEGS: usize = 2;

/// Most legs a ticket may carry.
pub const MAX_LEGS: usize = 5;

/// Smallest stake accepted for a quote, in whole USDC.
pub const MIN_STAKE_USDC: u64 = 1;

/// House edge charged on every ticket.
pub const BASE_FEE_BPS: u32 = 100;

/// Additional house edge per leg.
pub const PER_LEG_FEE_BPS: u32 = 50;

/// Protocol default early-cashout penalty (15%).
pub const BASE_CASHOUT_PENALTY_BPS: u32 = 1_500;

/// [`PPM`] as a 256-bit integer.
pub const PPM_U256: U256 = U256::from_limbs([PPM as u64, 0, 0, 0]);

/// [`BPS`] as a 256-bit integer.
pub const BPS_U256: U256 = U256::from_limbs([BPS as u64, 0, 0, 0]);

/// [`USDC_UNIT`] as a 256-bit integer.
pub const USDC_UNIT_U256: U256 = U256::from_limbs([USDC_UNIT, 0, 0, 0]);
