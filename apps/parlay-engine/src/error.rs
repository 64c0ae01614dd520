//! Error handling at the engine boundary.
//!
//! Business outcomes are not errors: an invalid quote is a quote with a
//! reason, and a cashout that cannot be offered is an absent value. The
//! types here cover requests the engine cannot act on at all.
//!
//! # Error Codes
//!
//! | Code | Usage |
//! |------|-------|
//! | `INVALID_REQUEST` | Malformed request or mismatched list lengths |
//! | `INVALID_AMOUNT` | Amount that is not a non-negative decimal |
//! | `LEG_NOT_FOUND` | Leg id absent from the catalog |
//! | `LEG_INACTIVE` | Leg no longer accepting tickets |
//! | `DUPLICATE_LEG` | Same leg twice on one ticket |
//! | `INVALID_RISK_INPUT` | Risk input that cannot be assessed |
//! | `CASHOUT_UNAVAILABLE` | Ticket snapshot that cannot be valued |
//! | `CONFIG_ERROR` | Configuration could not be loaded |
//! | `INTERNAL_ERROR` | Unexpected failure |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::risk_management::RiskInputError;
use crate::domain::shared::ScaleError;

/// Error codes for the parlay engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Invalid request format or missing fields.
    InvalidRequest,
    /// Unparseable or out-of-range amount.
    InvalidAmount,
    /// Leg not found in the catalog.
    LegNotFound,
    /// Leg is not active.
    LegInactive,
    /// Leg repeated on a ticket.
    DuplicateLeg,
    /// Risk input rejected.
    InvalidRiskInput,
    /// Cashout snapshot rejected.
    CashoutUnavailable,
    /// Configuration error.
    ConfigError,
    /// Internal error.
    InternalError,
}

impl ErrorCode {
    /// Get the error reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::LegNotFound => "LEG_NOT_FOUND",
            Self::LegInactive => "LEG_INACTIVE",
            Self::DuplicateLeg => "DUPLICATE_LEG",
            Self::InvalidRiskInput => "INVALID_RISK_INPUT",
            Self::CashoutUnavailable => "CASHOUT_UNAVAILABLE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// An error with a code for the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct EngineError {
    code: ErrorCode,
    message: String,
}

impl EngineError {
    /// Create a new engine error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Wire body for this error.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.code,
            message: self.message.clone(),
        }
    }
}

/// Error body written to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub error: ErrorCode,
    /// Human-readable message.
    pub message: String,
}

/// Convenience constructors for common errors.
impl EngineError {
    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Leg not found.
    #[must_use]
    pub fn leg_not_found(leg_id: u64) -> Self {
        Self::new(ErrorCode::LegNotFound, format!("Leg {leg_id} not found"))
    }

    /// Leg not active.
    #[must_use]
    pub fn leg_inactive(leg_id: u64) -> Self {
        Self::new(ErrorCode::LegInactive, format!("Leg {leg_id} is not active"))
    }

    /// Duplicate leg ids on one ticket.
    #[must_use]
    pub fn duplicate_leg() -> Self {
        Self::new(ErrorCode::DuplicateLeg, "Duplicate leg IDs not allowed")
    }

    /// Cashout snapshot rejected.
    #[must_use]
    pub fn cashout_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::CashoutUnavailable, message)
    }

    /// Internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<ScaleError> for EngineError {
    fn from(error: ScaleError) -> Self {
        Self::new(ErrorCode::InvalidAmount, error.to_string())
    }
}

impl From<RiskInputError> for EngineError {
    fn from(error: RiskInputError) -> Self {
        Self::new(ErrorCode::InvalidRiskInput, error.to_string())
    }
}

impl From<ConfigError> for EngineError {
    fn from(error: ConfigError) -> Self {
        Self::new(ErrorCode::ConfigError, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = EngineError::new(ErrorCode::InvalidRequest, "Bad request");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(error.message(), "Bad request");
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::invalid_request("Missing field");
        assert_eq!(error.to_string(), "[INVALID_REQUEST] Missing field");
    }

    #[test]
    fn test_leg_messages() {
        assert_eq!(EngineError::leg_not_found(7).message(), "Leg 7 not found");
        assert_eq!(EngineError::leg_inactive(7).message(), "Leg 7 is not active");
        assert_eq!(
            EngineError::duplicate_leg().message(),
            "Duplicate leg IDs not allowed"
        );
    }

    #[test]
    fn test_response_body() {
        let body = serde_json::to_value(EngineError::leg_inactive(3).to_response()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "LEG_INACTIVE", "message": "Leg 3 is not active" })
        );
    }

    #[test]
    fn test_from_domain_errors() {
        let scale: EngineError = ScaleError::InvalidAmount {
            input: "abc".to_string(),
        }
        .into();
        assert_eq!(scale.code(), ErrorCode::InvalidAmount);

        let risk: EngineError = RiskInputError::InvalidBankroll.into();
        assert_eq!(risk.code(), ErrorCode::InvalidRiskInput);
        assert_eq!(risk.message(), "Bankroll must be positive");
    }
}
