//! Request dispatcher for the line protocol.

use super::protocol::{EngineRequest, EngineResponse};
use crate::application::ports::LegCatalogPort;
use crate::application::use_cases::{
    AgentQuoteUseCase, AssessRiskUseCase, QuoteParlayUseCase, SimulateQuoteUseCase,
    ValueCashoutUseCase,
};
use crate::error::EngineError;
use crate::infrastructure::config::Container;

/// Routes decoded requests to their use cases.
pub struct Dispatcher<C>
where
    C: LegCatalogPort + 'static,
{
    quote: QuoteParlayUseCase<C>,
    simulate: SimulateQuoteUseCase,
    risk: AssessRiskUseCase,
    agent_quote: AgentQuoteUseCase<C>,
    cashout: ValueCashoutUseCase,
}

impl<C> Dispatcher<C>
where
    C: LegCatalogPort + 'static,
{
    /// Build every use case from the container.
    pub fn new(container: &Container<C>) -> Self {
        Self {
            quote: container.quote_parlay_use_case(),
            simulate: container.simulate_quote_use_case(),
            risk: container.assess_risk_use_case(),
            agent_quote: container.agent_quote_use_case(),
            cashout: container.value_cashout_use_case(),
        }
    }

    /// Handle one decoded request.
    pub fn dispatch(&self, request: EngineRequest) -> EngineResponse {
        let op = request.op();
        let result = match request {
            EngineRequest::Quote(dto) => self.quote.execute(dto).map(EngineResponse::Quote),
            EngineRequest::Simulate(dto) => {
                self.simulate.execute(dto).map(EngineResponse::Quote)
            }
            EngineRequest::RiskAssess(dto) => self.risk.execute(dto).map(EngineResponse::Risk),
            EngineRequest::AgentQuote(dto) => {
                self.agent_quote.execute(dto).map(EngineResponse::AgentQuote)
            }
            EngineRequest::Cashout(dto) => {
                self.cashout.execute(dto).map(EngineResponse::Cashout)
            }
        };

        result.unwrap_or_else(|error| {
            tracing::warn!(op, code = %error.code(), message = error.message(), "Request failed");
            EngineResponse::Error(error.to_response())
        })
    }

    /// Handle one raw line and return the encoded response line.
    pub fn handle_line(&self, line: &str) -> String {
        let response = match serde_json::from_str::<EngineRequest>(line) {
            Ok(request) => self.dispatch(request),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request");
                let error = EngineError::invalid_request(format!("Malformed request: {e}"));
                EngineResponse::Error(error.to_response())
            }
        };

        serde_json::to_string(&response).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to encode response");
            encode_failure_line()
        })
    }
}

/// Fallback line when a response cannot be encoded.
fn encode_failure_line() -> String {
    let error = EngineError::internal("Failed to encode response");
    serde_json::json!({
        "error": error.code().reason(),
        "message": error.message(),
    })
    .to_string()
}
