//! Quote DTOs

use serde::{Deserialize, Serialize};

use crate::domain::pricing::Quote;

/// Request to quote a ticket from catalog legs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestDto {
    /// Catalog leg ids.
    pub leg_ids: Vec<u64>,
    /// Chosen side per leg.
    pub outcomes: Vec<String>,
    /// Stake as a decimal USDC string, e.g. `"10.5"`.
    pub stake: String,
}

/// Request to quote a ticket from caller-supplied probabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateQuoteRequestDto {
    /// Leg ids, echoed only.
    pub leg_ids: Vec<u64>,
    /// Chosen side per leg.
    pub outcomes: Vec<String>,
    /// Stake as a decimal USDC string.
    pub stake: String,
    /// Probability per leg, in PPM.
    pub probabilities: Vec<u32>,
}

/// A priced ticket.
///
/// Raw integers (stake, multiplier, payout, fee) are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponseDto {
    pub leg_ids: Vec<u64>,
    pub outcomes: Vec<String>,
    /// Raw 6-decimal stake.
    pub stake: String,
    /// PPM-scaled multiplier after house edge.
    pub net_multiplier: String,
    /// Raw 6-decimal payout.
    pub potential_payout: String,
    /// Raw 6-decimal fee.
    pub fee_paid: String,
    pub edge_bps: u32,
    pub probabilities: Vec<u32>,
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<Quote> for QuoteResponseDto {
    fn from(quote: Quote) -> Self {
        let reason = quote.reason();
        Self {
            valid: quote.is_valid(),
            reason,
            leg_ids: quote.leg_ids,
            outcomes: quote.outcomes,
            stake: quote.stake.raw().to_string(),
            net_multiplier: quote.net_multiplier.to_string(),
            potential_payout: quote.potential_payout.raw().to_string(),
            fee_paid: quote.fee_paid.raw().to_string(),
            edge_bps: quote.edge_bps,
            probabilities: quote.probabilities,
        }
    }
}
