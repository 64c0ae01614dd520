//! Risk Management Bounded Context
//!
//! Advisory position sizing for a proposed ticket.
//!
//! # Key Concepts
//!
//! - **Risk Tier**: Fixed caps on Kelly fraction, leg count and win probability
//! - **Kelly Sizing**: Bankroll fraction implied by the offered net multiplier
//! - **Warnings**: Leg count, win probability and correlated categories

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::RiskInputError;
pub use services::{RiskAdvisor, RiskInput};
pub use value_objects::{
    Recommendation, RiskAction, RiskAssessment, RiskTier, RiskWarning, TierCaps,
};
