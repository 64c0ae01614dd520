//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::sync::Arc;

use crate::application::ports::LegCatalogPort;
use crate::application::use_cases::{
    AgentQuoteUseCase, AssessRiskUseCase, QuoteParlayUseCase, SimulateQuoteUseCase,
    ValueCashoutUseCase,
};
use crate::config::EngineConfig;
use crate::domain::cashout::CashoutValuer;
use crate::domain::pricing::QuoteValidator;
use crate::domain::risk_management::RiskAdvisor;
use crate::infrastructure::persistence::InMemoryLegCatalog;

/// Dependency injection container.
///
/// Holds the catalog adapter and the domain services configured for it.
/// Use [`Container::from_config`] for the in-memory catalog.
pub struct Container<C>
where
    C: LegCatalogPort + 'static,
{
    // Ports
    catalog: Arc<C>,

    // Domain services
    validator: QuoteValidator,
    advisor: RiskAdvisor,
    valuer: CashoutValuer,
    slippage_tolerance_pct: u32,
}

impl Container<InMemoryLegCatalog> {
    /// Wire the engine from validated configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        let catalog = InMemoryLegCatalog::new(config.catalog.legs.clone());
        if catalog.is_empty() {
            tracing::warn!("Leg catalog is empty, catalog-backed requests will fail");
        } else {
            tracing::debug!(legs = catalog.len(), "Leg catalog seeded");
        }
        let fees = config.fees.schedule();
        let limits = config.limits.quote_limits();

        Self::new(
            Arc::new(catalog),
            QuoteValidator::new(fees, limits),
            RiskAdvisor::new(fees, limits),
            config.cashout.valuer(),
            config.cashout.slippage_tolerance_pct,
        )
    }
}

impl<C> Container<C>
where
    C: LegCatalogPort + 'static,
{
    /// Create a new container with all dependencies.
    pub const fn new(
        catalog: Arc<C>,
        validator: QuoteValidator,
        advisor: RiskAdvisor,
        valuer: CashoutValuer,
        slippage_tolerance_pct: u32,
    ) -> Self {
        Self {
            catalog,
            validator,
            advisor,
            valuer,
            slippage_tolerance_pct,
        }
    }

    /// Create a `QuoteParlayUseCase`.
    pub fn quote_parlay_use_case(&self) -> QuoteParlayUseCase<C> {
        QuoteParlayUseCase::new(Arc::clone(&self.catalog), self.validator)
    }

    /// Create a `SimulateQuoteUseCase`.
    pub const fn simulate_quote_use_case(&self) -> SimulateQuoteUseCase {
        SimulateQuoteUseCase::new(self.validator)
    }

    /// Create an `AssessRiskUseCase`.
    pub const fn assess_risk_use_case(&self) -> AssessRiskUseCase {
        AssessRiskUseCase::new(self.advisor, *self.validator.limits())
    }

    /// Create an `AgentQuoteUseCase`.
    pub fn agent_quote_use_case(&self) -> AgentQuoteUseCase<C> {
        AgentQuoteUseCase::new(Arc::clone(&self.catalog), self.validator, self.advisor)
    }

    /// Create a `ValueCashoutUseCase`.
    pub const fn value_cashout_use_case(&self) -> ValueCashoutUseCase {
        ValueCashoutUseCase::new(self.valuer, self.slippage_tolerance_pct)
    }
}
