//! Value Cashout Use Case

use crate::application::dto::{CashoutRequestDto, CashoutResponseDto, TicketLegDto};
use crate::domain::cashout::{
    CashoutValuer, LegStatus, OutcomeChoice, TicketLeg, TicketProgress, min_cashout_out,
    scaled_penalty_bps,
};
use crate::error::EngineError;

/// Use case for valuing a live ticket for early exit.
pub struct ValueCashoutUseCase {
    valuer: CashoutValuer,
    slippage_tolerance_pct: u32,
}

impl ValueCashoutUseCase {
    /// Create a new ValueCashoutUseCase.
    #[must_use]
    pub const fn new(valuer: CashoutValuer, slippage_tolerance_pct: u32) -> Self {
        Self {
            valuer,
            slippage_tolerance_pct,
        }
    }

    /// Execute the use case.
    ///
    /// A ticket that cannot be cashed out yields a response without a value.
    /// So does a snapshotted penalty that is negative or fractional.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] when a leg carries an unknown status code.
    pub fn execute(&self, request: CashoutRequestDto) -> Result<CashoutResponseDto, EngineError> {
        let legs = request
            .legs
            .iter()
            .enumerate()
            .map(|(index, leg)| decode_leg(index, leg))
            .collect::<Result<Vec<_>, _>>()?;
        let progress = TicketProgress::from_legs(&legs);

        let snapshot = match request.cashout_penalty_bps.as_ref() {
            None => Some(None),
            Some(number) => integer_penalty(number).map(Some),
        };

        let mut response = CashoutResponseDto {
            cashout_value: None,
            min_out: None,
            won_legs: progress.won_probabilities.len(),
            unresolved_legs: progress.unresolved,
            lost_legs: progress.lost,
            total_legs: progress.total,
            base_penalty_bps: None,
            penalty_bps: None,
        };

        let Some(snapshot) = snapshot else {
            tracing::warn!(
                penalty = ?request.cashout_penalty_bps,
                "Cashout penalty is not a non-negative integer"
            );
            return Ok(response);
        };

        let valuation = self.valuer.value(
            &progress,
            request.stake,
            request.fee_paid,
            request.potential_payout,
            snapshot,
        );

        response.base_penalty_bps = Some(valuation.base_penalty_bps);
        if progress.total > 0 {
            response.penalty_bps = Some(scaled_penalty_bps(
                valuation.base_penalty_bps,
                progress.unresolved,
                progress.total,
            ));
        }
        if let Some(value) = valuation.value {
            response.cashout_value = Some(value.raw().to_string());
            response.min_out = Some(
                min_cashout_out(value, self.slippage_tolerance_pct)
                    .raw()
                    .to_string(),
            );
        }

        tracing::debug!(
            won = response.won_legs,
            unresolved = response.unresolved_legs,
            lost = response.lost_legs,
            offerable = response.cashout_value.is_some(),
            "Cashout valued"
        );

        Ok(response)
    }
}

/// Whole non-negative penalty, accepting integral floats such as `1500.0`.
fn integer_penalty(number: &serde_json::Number) -> Option<u64> {
    number.as_u64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && *value >= 0.0 && *value < u64::MAX as f64)
            .map(|value| value as u64)
    })
}

fn decode_leg(index: usize, leg: &TicketLegDto) -> Result<TicketLeg, EngineError> {
    let status = LegStatus::from_code(leg.status).ok_or_else(|| {
        EngineError::cashout_unavailable(format!(
            "Leg {index} has unknown status {}",
            leg.status
        ))
    })?;
    Ok(TicketLeg {
        probability_ppm: leg.probability_ppm,
        outcome: OutcomeChoice::from_code(leg.outcome),
        resolved: leg.resolved,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cashout::DEFAULT_SLIPPAGE_TOLERANCE_PCT;
    use crate::domain::shared::UsdcAmount;
    use crate::error::ErrorCode;
    use alloy_primitives::U256;

    fn raw(value: u64) -> UsdcAmount {
        UsdcAmount::from_raw(U256::from(value))
    }

    fn leg(probability_ppm: u32, outcome: u64, resolved: bool, status: u8) -> TicketLegDto {
        TicketLegDto {
            probability_ppm,
            outcome,
            resolved,
            status,
        }
    }

    fn request(legs: Vec<TicketLegDto>, penalty: Option<serde_json::Number>) -> CashoutRequestDto {
        CashoutRequestDto {
            stake: raw(10_000_000),
            fee_paid: raw(300_000),
            potential_payout: raw(39_200_000),
            cashout_penalty_bps: penalty,
            legs,
        }
    }

    fn use_case() -> ValueCashoutUseCase {
        ValueCashoutUseCase::new(CashoutValuer::default(), DEFAULT_SLIPPAGE_TOLERANCE_PCT)
    }

    #[test]
    fn values_half_resolved_ticket() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                None,
            ))
            .unwrap();

        assert_eq!(response.cashout_value.as_deref(), Some("25635706"));
        assert_eq!(response.min_out.as_deref(), Some("25122991"));
        assert_eq!(response.won_legs, 1);
        assert_eq!(response.unresolved_legs, 1);
        assert_eq!(response.base_penalty_bps, Some(1_500));
        assert_eq!(response.penalty_bps, Some(750));
    }

    #[test]
    fn no_side_win_uses_flipped_probability() {
        // No on a 650_000 Yes leg that resolved No wins at 350_000.
        let response = use_case()
            .execute(request(
                vec![leg(650_000, 2, true, 2), leg(600_000, 1, false, 0)],
                None,
            ))
            .unwrap();

        assert_eq!(response.cashout_value.as_deref(), Some("25635706"));
    }

    #[test]
    fn zero_snapshot_uses_default_penalty() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                Some(0_u64.into()),
            ))
            .unwrap();
        assert_eq!(response.base_penalty_bps, Some(1_500));
    }

    #[test]
    fn snapshot_penalty_applies() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                Some(3_000_u64.into()),
            ))
            .unwrap();
        assert_eq!(response.base_penalty_bps, Some(3_000));
        assert_eq!(response.penalty_bps, Some(1_500));
    }

    #[test]
    fn negative_penalty_has_no_value() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                Some((-5_i64).into()),
            ))
            .unwrap();
        assert_eq!(response.cashout_value, None);
        assert_eq!(response.base_penalty_bps, None);
    }

    #[test]
    fn fractional_penalty_has_no_value() {
        let fractional = serde_json::Number::from_f64(1_500.5).unwrap();
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                Some(fractional),
            ))
            .unwrap();
        assert_eq!(response.cashout_value, None);
    }

    #[test]
    fn integral_float_penalty_is_accepted() {
        let integral = serde_json::Number::from_f64(2_000.0).unwrap();
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, false, 0)],
                Some(integral),
            ))
            .unwrap();
        assert_eq!(response.base_penalty_bps, Some(2_000));
    }

    #[test]
    fn voided_leg_stays_unresolved() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, true, 3)],
                None,
            ))
            .unwrap();
        assert_eq!(response.won_legs, 1);
        assert_eq!(response.unresolved_legs, 1);
        assert_eq!(response.cashout_value.as_deref(), Some("25635706"));
    }

    #[test]
    fn fully_won_ticket_has_no_cashout() {
        let response = use_case()
            .execute(request(
                vec![leg(350_000, 1, true, 1), leg(600_000, 1, true, 1)],
                None,
            ))
            .unwrap();
        assert_eq!(response.cashout_value, None);
        assert_eq!(response.penalty_bps, Some(0));
    }

    #[test]
    fn lost_leg_has_no_cashout() {
        let response = use_case()
            .execute(request(
                vec![
                    leg(350_000, 1, true, 1),
                    leg(600_000, 1, true, 2),
                    leg(600_000, 1, false, 0),
                ],
                None,
            ))
            .unwrap();
        assert_eq!(response.cashout_value, None);
        assert_eq!(response.lost_legs, 1);
    }

    #[test]
    fn unknown_status_is_an_error() {
        let error = use_case()
            .execute(request(vec![leg(350_000, 1, true, 9)], None))
            .unwrap_err();
        assert_eq!(error.code(), ErrorCode::CashoutUnavailable);
        assert_eq!(error.message(), "Leg 0 has unknown status 9");
    }
}
