//! Data Transfer Objects (DTOs)
//!
//! DTOs are used for API boundaries and use case inputs/outputs.

mod agent_quote_dto;
mod cashout_dto;
mod quote_dto;
mod risk_dto;

pub use agent_quote_dto::{AgentQuoteRequestDto, AgentQuoteResponseDto};
pub use cashout_dto::{CashoutRequestDto, CashoutResponseDto, TicketLegDto};
pub use quote_dto::{QuoteRequestDto, QuoteResponseDto, SimulateQuoteRequestDto};
pub use risk_dto::{RiskAssessRequestDto, RiskAssessmentDto, reasoning, warning_message};
