//! Risk Management Services

mod risk_advisor;

pub use risk_advisor::{RiskAdvisor, RiskInput};
