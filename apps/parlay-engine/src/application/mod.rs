//! Application Layer
//!
//! Orchestrates the pricing, risk and cashout domains for callers.
//!
//! - **Ports**: The leg catalog the engine reads from
//! - **Use Cases**: Quote, simulate, risk assessment, agent quote, cashout
//! - **DTOs**: Wire records, plus presentation of risk assessments

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
