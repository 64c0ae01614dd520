//! Risk Management Value Objects

mod assessment;
mod risk_tier;

pub use assessment::{Recommendation, RiskAction, RiskAssessment, RiskWarning};
pub use risk_tier::{RiskTier, TierCaps};
