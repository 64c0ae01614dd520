//! Structured logging for the parlay engine.
//!
//! Logs go to stderr so stdout stays a pure protocol stream.
//!
//! # Example
//!
//! ```ignore
//! use parlay_engine::config::LoggingConfig;
//! use parlay_engine::observability::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for tracing operations.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser message.
        reason: String,
    },
    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the filter: `RUST_LOG` when set, else `parlay_engine={level}`.
///
/// # Errors
///
/// Returns [`TracingError::InvalidFilter`] when the fallback directive does
/// not parse.
pub fn env_filter(level: &str) -> Result<EnvFilter, TracingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let directive = format!("parlay_engine={level}");
    EnvFilter::try_new(&directive).map_err(|e| TracingError::InvalidFilter {
        directive,
        reason: e.to_string(),
    })
}

/// Install the global subscriber in the configured format.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let filter = env_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = if config.format == "pretty" {
        builder.pretty().try_init()
    } else {
        builder.json().try_init()
    };
    installed.map_err(|e| TracingError::SubscriberError(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "Tracing initialized");
    Ok(())
}
