//! Cashout DTOs

use serde::{Deserialize, Serialize};

use crate::domain::shared::UsdcAmount;

/// One leg of a ticket snapshot, as read from chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketLegDto {
    /// Yes probability when the ticket was bought, in PPM.
    pub probability_ppm: u32,
    /// Outcome code: `1` Yes, `2` No.
    pub outcome: u64,
    /// Whether the oracle has settled the leg.
    pub resolved: bool,
    /// Oracle status code: `0` unresolved, `1` won, `2` lost, `3` voided.
    #[serde(default)]
    pub status: u8,
}

/// Request to value a live ticket for early cashout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutRequestDto {
    /// Raw 6-decimal stake.
    pub stake: UsdcAmount,
    /// Raw 6-decimal fee taken at purchase.
    pub fee_paid: UsdcAmount,
    /// Raw 6-decimal payout cap.
    pub potential_payout: UsdcAmount,
    /// Penalty snapshotted on the ticket. Zero or absent means the default.
    #[serde(default)]
    pub cashout_penalty_bps: Option<serde_json::Number>,
    /// Legs in ticket order.
    pub legs: Vec<TicketLegDto>,
}

/// Cashout figures for a live ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashoutResponseDto {
    /// Raw 6-decimal value, absent when cashout is not offerable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cashout_value: Option<String>,
    /// Raw 6-decimal slippage floor for the cashout transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_out: Option<String>,
    pub won_legs: usize,
    pub unresolved_legs: usize,
    pub lost_legs: usize,
    pub total_legs: usize,
    /// Penalty before scaling, absent when the snapshot is unusable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_penalty_bps: Option<u64>,
    /// Penalty after scaling by the open fraction and capping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty_bps: Option<u32>,
}
