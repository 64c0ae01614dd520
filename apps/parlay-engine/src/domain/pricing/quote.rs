//! Quote validator.
//!
//! Structural checks on a ticket, then pricing through the combiner and the
//! payout calculator. Rejections are values, not errors.
//!
//! # Caller-owned preconditions
//!
//! The validator only sees probabilities. Whether every leg id exists in the
//! catalog, whether it is active, and whether ids repeat are checked by the
//! caller before a quote is requested (see the quote use case). Callers must
//! also pass `leg_ids` and `outcomes` of the same length as `probabilities`.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::combiner::compute_multiplier;
use super::payout::{FeeSchedule, apply_edge, compute_fee, compute_payout};
use crate::domain::shared::{MAX_LEGS, MIN_LEGS, MIN_STAKE_USDC, PPM, UsdcAmount};

/// Structural bounds on a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLimits {
    /// Fewest legs accepted.
    pub min_legs: usize,
    /// Most legs accepted.
    pub max_legs: usize,
    /// Stake floor in whole USDC.
    pub min_stake_usdc: u64,
}

impl Default for QuoteLimits {
    fn default() -> Self {
        Self {
            min_legs: MIN_LEGS,
            max_legs: MAX_LEGS,
            min_stake_usdc: MIN_STAKE_USDC,
        }
    }
}

/// Why a quote was rejected. `Display` renders the published reason string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteRejection {
    /// Leg count outside `[min, max]`.
    LegCount { min: usize, max: usize },
    /// Stake below the floor.
    StakeBelowMinimum { min_usdc: u64 },
    /// A probability at or beyond either end of the PPM scale.
    ProbabilityOutOfRange,
}

impl fmt::Display for QuoteRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LegCount { min, max } => write!(f, "Leg count must be {min}-{max}"),
            Self::StakeBelowMinimum { min_usdc } => {
                write!(f, "Stake must be at least {min_usdc} USDC")
            }
            Self::ProbabilityOutOfRange => {
                write!(f, "Probability must be between 0 and {PPM} exclusive")
            }
        }
    }
}

/// A priced (or rejected) ticket.
///
/// A rejected quote echoes the caller's inputs and carries zero for every
/// computed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub leg_ids: Vec<u64>,
    pub outcomes: Vec<String>,
    pub stake: UsdcAmount,
    /// Multiplier after house edge, PPM-scaled.
    pub net_multiplier: U256,
    pub potential_payout: UsdcAmount,
    pub fee_paid: UsdcAmount,
    pub edge_bps: u32,
    pub probabilities: Vec<u32>,
    pub rejection: Option<QuoteRejection>,
}

impl Quote {
    /// True when the ticket passed every check.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    /// Rejection reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.rejection.map(|rejection| rejection.to_string())
    }

    fn rejected(
        leg_ids: &[u64],
        outcomes: &[String],
        stake: UsdcAmount,
        probabilities: &[u32],
        rejection: QuoteRejection,
    ) -> Self {
        Self {
            leg_ids: leg_ids.to_vec(),
            outcomes: outcomes.to_vec(),
            stake,
            net_multiplier: U256::ZERO,
            potential_payout: UsdcAmount::ZERO,
            fee_paid: UsdcAmount::ZERO,
            edge_bps: 0,
            probabilities: probabilities.to_vec(),
            rejection: Some(rejection),
        }
    }
}

/// Validates and prices tickets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuoteValidator {
    fees: FeeSchedule,
    limits: QuoteLimits,
}

impl QuoteValidator {
    /// Create a validator.
    #[must_use]
    pub const fn new(fees: FeeSchedule, limits: QuoteLimits) -> Self {
        Self { fees, limits }
    }

    /// Fee schedule in force.
    #[must_use]
    pub const fn fees(&self) -> &FeeSchedule {
        &self.fees
    }

    /// Limits in force.
    #[must_use]
    pub const fn limits(&self) -> &QuoteLimits {
        &self.limits
    }

    /// Price a ticket.
    ///
    /// Checks run in order and the first failure wins: leg count, stake
    /// floor, then probability range.
    #[must_use]
    pub fn quote(
        &self,
        probabilities: &[u32],
        stake: UsdcAmount,
        leg_ids: &[u64],
        outcomes: &[String],
    ) -> Quote {
        let reject = |rejection| Quote::rejected(leg_ids, outcomes, stake, probabilities, rejection);

        let num_legs = probabilities.len();
        if num_legs < self.limits.min_legs || num_legs > self.limits.max_legs {
            return reject(QuoteRejection::LegCount {
                min: self.limits.min_legs,
                max: self.limits.max_legs,
            });
        }

        if stake < UsdcAmount::from_whole(self.limits.min_stake_usdc) {
            return reject(QuoteRejection::StakeBelowMinimum {
                min_usdc: self.limits.min_stake_usdc,
            });
        }

        if probabilities.iter().any(|&p| p == 0 || p >= PPM) {
            return reject(QuoteRejection::ProbabilityOutOfRange);
        }

        let Some(fair_multiplier) = compute_multiplier(probabilities) else {
            return reject(QuoteRejection::ProbabilityOutOfRange);
        };
        let edge_bps = self.fees.edge_bps(num_legs);
        let net_multiplier = apply_edge(fair_multiplier, edge_bps);
        let potential_payout = compute_payout(stake, net_multiplier);
        let fee_paid = compute_fee(stake, fair_multiplier, net_multiplier);

        tracing::debug!(
            leg_count = num_legs,
            edge_bps,
            net_multiplier = %net_multiplier,
            potential_payout = %potential_payout.raw(),
            "Quote priced"
        );

        Quote {
            leg_ids: leg_ids.to_vec(),
            outcomes: outcomes.to_vec(),
            stake,
            net_multiplier,
            potential_payout,
            fee_paid,
            edge_bps,
            probabilities: probabilities.to_vec(),
            rejection: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn outcomes(n: usize) -> Vec<String> {
        vec!["Yes".to_string(); n]
    }

    fn ids(n: usize) -> Vec<u64> {
        (1..=n as u64).collect()
    }

    fn quote(probabilities: &[u32], stake: UsdcAmount) -> Quote {
        let n = probabilities.len();
        QuoteValidator::default().quote(probabilities, stake, &ids(n), &outcomes(n))
    }

    #[test]
    fn two_coin_flips_for_ten_usdc() {
        let q = quote(&[500_000, 500_000], UsdcAmount::from_whole(10));

        assert!(q.is_valid());
        assert_eq!(q.reason(), None);
        assert_eq!(q.edge_bps, 200);
        assert_eq!(q.net_multiplier, U256::from(3_920_000_u64));
        assert_eq!(q.potential_payout.raw(), U256::from(39_200_000_u64));
        assert_eq!(q.fee_paid.raw(), U256::from(800_000_u64));
        assert_eq!(q.leg_ids, vec![1, 2]);
        assert_eq!(q.probabilities, vec![500_000, 500_000]);
    }

    #[test]
    fn three_legs_use_incremental_multiplier() {
        let q = quote(&[600_000, 400_000, 500_000], UsdcAmount::from_whole(10));

        // fair 8_333_330, edge 250 => net floor(8_333_330 * 9_750 / 10_000)
        assert_eq!(q.edge_bps, 250);
        assert_eq!(q.net_multiplier, U256::from(8_124_996_u64));
        assert_eq!(q.potential_payout.raw(), U256::from(81_249_960_u64));
        assert_eq!(q.fee_paid.raw(), U256::from(2_083_340_u64));
    }

    #[test]
    fn payout_never_exceeds_exact_product() {
        let stake = UsdcAmount::parse("7.123457").unwrap();
        let q = quote(&[333_333, 777_777, 123_456], stake);
        let exact = stake.raw() * q.net_multiplier;
        assert!(q.potential_payout.raw() * U256::from(PPM) <= exact);
    }

    #[test_case(&[500_000] ; "one leg")]
    #[test_case(&[500_000; 6] ; "six legs")]
    #[test_case(&[] ; "no legs")]
    fn rejects_leg_count(probabilities: &[u32]) {
        let q = quote(probabilities, UsdcAmount::from_whole(10));
        assert!(!q.is_valid());
        assert_eq!(q.reason().as_deref(), Some("Leg count must be 2-5"));
        assert_eq!(q.net_multiplier, U256::ZERO);
        assert_eq!(q.potential_payout, UsdcAmount::ZERO);
        assert_eq!(q.fee_paid, UsdcAmount::ZERO);
        assert_eq!(q.edge_bps, 0);
    }

    #[test]
    fn rejects_stake_below_floor() {
        let q = quote(&[500_000, 500_000], UsdcAmount::parse("0.999999").unwrap());
        assert_eq!(q.reason().as_deref(), Some("Stake must be at least 1 USDC"));
    }

    #[test]
    fn accepts_stake_at_floor() {
        let q = quote(&[500_000, 500_000], UsdcAmount::from_whole(1));
        assert!(q.is_valid());
    }

    #[test_case(&[0, 500_000] ; "zero")]
    #[test_case(&[500_000, 1_000_000] ; "certain")]
    #[test_case(&[500_000, 1_500_000] ; "above scale")]
    fn rejects_probability_range(probabilities: &[u32]) {
        let q = quote(probabilities, UsdcAmount::from_whole(10));
        assert_eq!(
            q.reason().as_deref(),
            Some("Probability must be between 0 and 1000000 exclusive")
        );
    }

    #[test]
    fn leg_count_checked_before_stake() {
        let q = quote(&[500_000], UsdcAmount::ZERO);
        assert_eq!(q.rejection, Some(QuoteRejection::LegCount { min: 2, max: 5 }));
    }

    #[test]
    fn stake_checked_before_probabilities() {
        let q = quote(&[0, 0], UsdcAmount::ZERO);
        assert_eq!(
            q.rejection,
            Some(QuoteRejection::StakeBelowMinimum { min_usdc: 1 })
        );
    }

    #[test]
    fn rejected_quote_echoes_inputs() {
        let stake = UsdcAmount::parse("0.5").unwrap();
        let q = quote(&[500_000, 500_000], stake);
        assert_eq!(q.stake, stake);
        assert_eq!(q.probabilities, vec![500_000, 500_000]);
        assert_eq!(q.outcomes, outcomes(2));
    }

    #[test]
    fn custom_limits_and_fees() {
        let validator = QuoteValidator::new(
            FeeSchedule::new(0, 0),
            QuoteLimits {
                min_legs: 3,
                max_legs: 3,
                min_stake_usdc: 5,
            },
        );

        let q = validator.quote(&[500_000, 500_000], UsdcAmount::from_whole(10), &ids(2), &outcomes(2));
        assert_eq!(q.reason().as_deref(), Some("Leg count must be 3-3"));

        let q = validator.quote(&[500_000; 3], UsdcAmount::from_whole(4), &ids(3), &outcomes(3));
        assert_eq!(q.reason().as_deref(), Some("Stake must be at least 5 USDC"));

        let q = validator.quote(&[500_000; 3], UsdcAmount::from_whole(5), &ids(3), &outcomes(3));
        assert_eq!(q.net_multiplier, U256::from(8_000_000_u64));
        assert_eq!(q.fee_paid, UsdcAmount::ZERO);
    }
}
