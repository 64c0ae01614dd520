// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::cast_possible_truncation
    )
)]

//! Parlay Engine - Rust Core Library
//!
//! Deterministic fixed-point engine for multi-leg parlay tickets. Every
//! on-chain figure is reproduced bit-exactly with integer math.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: PPM/BPS scales, USDC amounts, display rounding
//!   - `pricing`: Multiplier combination, edge, payout, quote validation
//!   - `risk_management`: Kelly sizing and tier recommendations
//!   - `cashout`: Early exit valuation of partially resolved tickets
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Leg catalog lookups
//!   - `use_cases`: Quote, Simulate, AssessRisk, AgentQuote, ValueCashout
//!   - `dto`: Wire records
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory leg catalog
//!   - `stdio`: JSON-lines protocol
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration loading.
pub mod config;

/// Engine boundary errors.
pub mod error;

/// Structured logging setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::cashout::{CashoutValuer, TicketLeg, TicketProgress};
pub use domain::pricing::{FeeSchedule, Quote, QuoteLimits, QuoteValidator, compute_multiplier};
pub use domain::risk_management::{RiskAdvisor, RiskAssessment, RiskInput, RiskTier};
pub use domain::shared::{ScaleError, UsdcAmount};

// Application re-exports
pub use application::ports::{CatalogLeg, LegCatalogPort};
pub use application::use_cases::{
    AgentQuoteUseCase, AssessRiskUseCase, QuoteParlayUseCase, SimulateQuoteUseCase,
    ValueCashoutUseCase,
};

// Infrastructure re-exports
pub use config::{ConfigError, EngineConfig, load_config};
pub use error::{EngineError, ErrorCode, ErrorResponse};
pub use infrastructure::config::Container;
pub use infrastructure::persistence::InMemoryLegCatalog;
pub use infrastructure::stdio::{Dispatcher, EngineRequest, EngineResponse};
