//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! Everything here is pure computation over immutable inputs.
//!
//! # Bounded Contexts
//!
//! - [`shared`]: Fixed-point scales, USDC amounts and rounding helpers
//! - [`pricing`]: Fair/net multipliers, payout, fee and quote validation
//! - [`risk_management`]: Kelly sizing, risk tiers and warnings
//! - [`cashout`]: Leg classification and early-exit valuation

pub mod cashout;
pub mod pricing;
pub mod risk_management;
pub mod shared;
