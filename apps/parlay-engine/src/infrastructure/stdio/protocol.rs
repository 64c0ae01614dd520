//! Line protocol records.
//!
//! One JSON object per line in each direction. Requests carry an `op`
//! discriminator alongside the fields of the matching request DTO.

use serde::{Deserialize, Serialize};

use crate::application::dto::{
    AgentQuoteRequestDto, AgentQuoteResponseDto, CashoutRequestDto, CashoutResponseDto,
    QuoteRequestDto, QuoteResponseDto, RiskAssessRequestDto, RiskAssessmentDto,
    SimulateQuoteRequestDto,
};
use crate::error::ErrorResponse;

/// A request read from stdin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EngineRequest {
    /// Quote catalog legs.
    Quote(QuoteRequestDto),
    /// Quote caller-supplied probabilities.
    Simulate(SimulateQuoteRequestDto),
    /// Advisory sizing.
    RiskAssess(RiskAssessRequestDto),
    /// Quote plus sizing over catalog legs.
    AgentQuote(AgentQuoteRequestDto),
    /// Value a live ticket.
    Cashout(CashoutRequestDto),
}

impl EngineRequest {
    /// Wire name of the operation.
    #[must_use]
    pub const fn op(&self) -> &'static str {
        match self {
            Self::Quote(_) => "quote",
            Self::Simulate(_) => "simulate",
            Self::RiskAssess(_) => "riskAssess",
            Self::AgentQuote(_) => "agentQuote",
            Self::Cashout(_) => "cashout",
        }
    }
}

/// A response written to stdout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EngineResponse {
    /// Priced ticket.
    Quote(QuoteResponseDto),
    /// Advisory sizing.
    Risk(RiskAssessmentDto),
    /// Quote plus sizing.
    AgentQuote(AgentQuoteResponseDto),
    /// Cashout figures.
    Cashout(CashoutResponseDto),
    /// Request the engine could not act on.
    Error(ErrorResponse),
}
