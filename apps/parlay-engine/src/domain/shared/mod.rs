//! Shared Domain Types
//!
//! Fixed-point scales, value objects and errors shared across bounded contexts.

pub mod errors;
pub mod numeric;
pub mod scale;
pub mod value_objects;

pub use errors::ScaleError;
pub use scale::{
    BASE_CASHOUT_PENALTY_BPS, BASE_FEE_BPS, BPS, BPS_U256, MAX_LEGS, MIN_LEGS, MIN_STAKE_USDC,
    PER_LEG_FEE_BPS, PPM, PPM_U256, USDC_DECIMALS, USDC_UNIT, USDC_UNIT_U256,
};
pub use value_objects::UsdcAmount;
