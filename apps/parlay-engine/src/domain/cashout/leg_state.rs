//! Leg classification for partially resolved tickets.
//!
//! Each leg of a live ticket is classified from the bettor's side, the oracle
//! status and the resolved flag:
//!
//! ```text
//!   resolved? ──no──────────────────────────────► Unresolved
//!      │
//!     yes ── status Voided ─────────────────────► Unresolved
//!      │
//!      ├── status matches side ── ppm > 0 ──────► Won { effective_ppm }
//!      │                       └─ ppm == 0 ─────► Settled
//!      ├── status against side ─────────────────► Lost
//!      └── anything else ───────────────────────► Settled
//! ```
//!
//! A voided leg is never won.

use serde::{Deserialize, Serialize};

use crate::domain::shared::PPM;

/// Side the bettor took on a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeChoice {
    Yes,
    No,
    /// Unrecognised encoding; never credited as a win.
    Unknown,
}

impl OutcomeChoice {
    /// Decode the on-chain outcome code: `1` is Yes, `2` is No.
    #[must_use]
    pub const fn from_code(code: u64) -> Self {
        match code {
            1 => Self::Yes,
            2 => Self::No,
            _ => Self::Unknown,
        }
    }

    /// Probability of this side winning, given the Yes probability.
    #[must_use]
    pub const fn effective_ppm(self, yes_ppm: u32) -> u32 {
        match self {
            Self::Yes => yes_ppm,
            Self::No => PPM.saturating_sub(yes_ppm),
            Self::Unknown => 0,
        }
    }

    const fn is_no(self) -> bool {
        matches!(self, Self::No)
    }
}

/// Oracle status of a leg, from the Yes side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegStatus {
    Unresolved,
    /// The proposition happened.
    Won,
    /// The proposition did not happen.
    Lost,
    /// The proposition could not be resolved.
    Voided,
}

impl LegStatus {
    /// Decode the oracle status code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unresolved),
            1 => Some(Self::Won),
            2 => Some(Self::Lost),
            3 => Some(Self::Voided),
            _ => None,
        }
    }
}

/// One leg of a live ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketLeg {
    /// Yes probability captured when the ticket was bought.
    pub probability_ppm: u32,
    pub outcome: OutcomeChoice,
    pub resolved: bool,
    pub status: LegStatus,
}

/// Where a leg stands for cashout purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegClass {
    /// Resolved in the bettor's favour.
    Won { effective_ppm: u32 },
    /// Resolved against the bettor.
    Lost,
    /// Not resolved yet, or voided.
    Unresolved,
    /// Resolved, but contributes nothing to the cashout.
    Settled,
}

impl TicketLeg {
    /// Classify this leg.
    #[must_use]
    pub const fn classify(&self) -> LegClass {
        if !self.resolved {
            return LegClass::Unresolved;
        }
        let is_no = self.outcome.is_no();
        match self.status {
            LegStatus::Voided => LegClass::Unresolved,
            LegStatus::Won if !is_no => self.credit(),
            LegStatus::Lost if is_no => self.credit(),
            LegStatus::Won | LegStatus::Lost => LegClass::Lost,
            LegStatus::Unresolved => LegClass::Settled,
        }
    }

    const fn credit(&self) -> LegClass {
        let effective_ppm = self.outcome.effective_ppm(self.probability_ppm);
        if effective_ppm > 0 {
            LegClass::Won { effective_ppm }
        } else {
            LegClass::Settled
        }
    }
}

/// Aggregate classification of a ticket's legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketProgress {
    /// Effective probabilities of won legs, in leg order.
    pub won_probabilities: Vec<u32>,
    /// Legs still open, voided legs included.
    pub unresolved: usize,
    pub lost: usize,
    pub total: usize,
}

impl TicketProgress {
    /// Classify every leg.
    #[must_use]
    pub fn from_legs(legs: &[TicketLeg]) -> Self {
        let mut progress = Self {
            total: legs.len(),
            ..Self::default()
        };
        for leg in legs {
            match leg.classify() {
                LegClass::Won { effective_ppm } => progress.won_probabilities.push(effective_ppm),
                LegClass::Lost => progress.lost += 1,
                LegClass::Unresolved => progress.unresolved += 1,
                LegClass::Settled => {}
            }
        }
        progress
    }

    /// True once any leg has gone against the bettor.
    #[must_use]
    pub const fn has_lost_leg(&self) -> bool {
        self.lost > 0
    }
}
