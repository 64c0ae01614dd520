//! Agent quote DTOs
//!
//! Quote and risk assessment in one call, with probabilities and categories
//! resolved from the catalog.

use serde::{Deserialize, Serialize};

use super::quote_dto::QuoteResponseDto;
use super::risk_dto::RiskAssessmentDto;
use crate::domain::risk_management::RiskTier;

/// Request for a combined quote and assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentQuoteRequestDto {
    pub leg_ids: Vec<u64>,
    pub outcomes: Vec<String>,
    /// Stake as a decimal USDC string.
    pub stake: String,
    /// Bankroll as a decimal USDC string.
    pub bankroll: String,
    pub risk_tolerance: RiskTier,
}

/// Combined response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentQuoteResponseDto {
    pub quote: QuoteResponseDto,
    pub risk: RiskAssessmentDto,
}
