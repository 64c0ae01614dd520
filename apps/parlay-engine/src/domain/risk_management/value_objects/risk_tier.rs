//! Risk tolerance tiers and their fixed caps.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::risk_management::errors::RiskInputError;

/// Bettor risk tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// Small positions, few legs.
    Conservative,
    /// Default profile.
    Moderate,
    /// No sizing cap beyond full Kelly.
    Aggressive,
}

/// Caps a tier places on sizing and ticket shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierCaps {
    /// Largest Kelly fraction recommended.
    pub max_kelly: f64,
    /// Most legs before the ticket is flagged.
    pub max_legs: usize,
    /// Smallest acceptable win probability.
    pub min_win_prob: f64,
}

impl RiskTier {
    /// All tiers, most cautious first.
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Moderate, Self::Aggressive];

    /// The tier's caps.
    #[must_use]
    pub const fn caps(self) -> TierCaps {
        match self {
            Self::Conservative => TierCaps {
                max_kelly: 0.05,
                max_legs: 3,
                min_win_prob: 0.15,
            },
            Self::Moderate => TierCaps {
                max_kelly: 0.15,
                max_legs: 4,
                min_win_prob: 0.05,
            },
            Self::Aggressive => TierCaps {
                max_kelly: 1.0,
                max_legs: 5,
                min_win_prob: 0.0,
            },
        }
    }

    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Aggressive => "aggressive",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskTier {
    type Err = RiskInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| RiskInputError::UnknownTier(s.to_string()))
    }
}
