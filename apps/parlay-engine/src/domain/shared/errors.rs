//! Errors raised while converting external values onto the fixed-point scales.

use thiserror::Error;

/// Failure to read an amount or integer off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// The text is not a non-negative decimal number.
    #[error("Invalid amount '{input}': expected a non-negative decimal number")]
    InvalidAmount {
        /// The rejected input.
        input: String,
    },

    /// The amount does not fit the engine's 128-bit raw amount bound.
    #[error("Amount '{input}' is too large")]
    Overflow {
        /// The rejected input.
        input: String,
    },
}
