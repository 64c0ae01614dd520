//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod agent_quote;
mod assess_risk;
mod leg_resolution;
mod quote_parlay;
mod simulate_quote;
mod value_cashout;

pub use agent_quote::AgentQuoteUseCase;
pub use assess_risk::AssessRiskUseCase;
pub use quote_parlay::QuoteParlayUseCase;
pub use simulate_quote::SimulateQuoteUseCase;
pub use value_cashout::ValueCashoutUseCase;
