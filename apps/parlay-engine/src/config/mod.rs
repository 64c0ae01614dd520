//! Configuration module for the parlay engine.
//!
//! Loads the engine configuration from YAML, interpolates environment
//! variables and validates the result against the settlement scales.
//!
//! # Usage
//!
//! ```rust,ignore
//! use parlay_engine::config::load_config;
//!
//! // Path from PARLAY_ENGINE_CONFIG, else parlay-engine.yaml
//! let config = load_config(None)?;
//!
//! println!("base fee: {}bps", config.fees.base_fee_bps);
//! ```

mod cashout;
mod catalog;
mod fees;
mod limits;
mod observability;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::scale::{BPS, MAX_LEGS, MIN_LEGS, PPM};

pub use cashout::CashoutConfig;
pub use catalog::CatalogConfig;
pub use fees::FeesConfig;
pub use limits::LimitsConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "PARLAY_ENGINE_CONFIG";

/// Config file used when neither an argument nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "parlay-engine.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// House edge.
    #[serde(default)]
    pub fees: FeesConfig,
    /// Ticket shape limits.
    #[serde(default)]
    pub limits: LimitsConfig,
    /// Early exit settings.
    #[serde(default)]
    pub cashout: CashoutConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Legs served by the in-memory catalog.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Falls back to
///   `PARLAY_ENGINE_CONFIG`, then to `parlay-engine.yaml`.
///
/// A missing file yields the validated defaults.
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<EngineConfig, ConfigError> {
    let path = path.map_or_else(
        || std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string()),
        str::to_string,
    );

    let contents = match std::fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "Config file not found, using defaults");
            let config = EngineConfig::default();
            validate_config(&config)?;
            return Ok(config);
        }
        Err(e) => {
            return Err(ConfigError::ReadError { path, source: e });
        }
    };

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<EngineConfig, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: EngineConfig = if interpolated.trim().is_empty() {
        EngineConfig::default()
    } else {
        serde_yaml_bw::from_str(&interpolated)?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &EngineConfig) -> Result<(), ConfigError> {
    let limits = &config.limits;
    if limits.min_legs < MIN_LEGS || limits.min_legs > limits.max_legs || limits.max_legs > MAX_LEGS
    {
        return Err(ConfigError::ValidationError(format!(
            "limits must satisfy {MIN_LEGS} <= min_legs <= max_legs <= {MAX_LEGS}"
        )));
    }

    if limits.min_stake_usdc == 0 {
        return Err(ConfigError::ValidationError(
            "limits.min_stake_usdc must be at least 1".to_string(),
        ));
    }

    // Edge at the widest ticket must leave a positive net multiplier.
    let max_edge = u64::from(config.fees.base_fee_bps)
        + limits.max_legs as u64 * u64::from(config.fees.per_leg_fee_bps);
    if max_edge >= u64::from(BPS) {
        return Err(ConfigError::ValidationError(format!(
            "fees at {} legs total {max_edge}bps, must be below {BPS}",
            limits.max_legs
        )));
    }

    if config.cashout.default_penalty_bps > BPS {
        return Err(ConfigError::ValidationError(format!(
            "cashout.default_penalty_bps must be at most {BPS}"
        )));
    }

    if config.cashout.slippage_tolerance_pct >= 100 {
        return Err(ConfigError::ValidationError(
            "cashout.slippage_tolerance_pct must be below 100".to_string(),
        ));
    }

    let valid_formats = ["json", "pretty"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    let mut seen = HashSet::new();
    for leg in &config.catalog.legs {
        if leg.probability_ppm == 0 || leg.probability_ppm >= PPM {
            return Err(ConfigError::ValidationError(format!(
                "catalog leg {} probability_ppm must be in (0, {PPM})",
                leg.id
            )));
        }
        if !seen.insert(leg.id) {
            return Err(ConfigError::ValidationError(format!(
                "catalog leg {} is listed twice",
                leg.id
            )));
        }
    }

    Ok(())
}
