//! Rounding helpers for advisory (floating-point) figures.
//!
//! Settlement math never touches these. They exist so advisory output rounds
//! the same way the published API always has: half-up, ties toward +infinity.

use rust_decimal::prelude::*;

/// Round to `decimals` places, ties toward positive infinity.
///
/// Matches `Math.round(x * 10^d) / 10^d`: `-2.5` rounds to `-2`, `2.5` to `3`.
/// Negative zero is normalised to zero.
#[must_use]
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    let scaled = value * factor;
    let mut rounded = scaled.round();
    if scaled - rounded == 0.5 {
        rounded += 1.0;
    }
    let result = rounded / factor;
    if result == 0.0 { 0.0 } else { result }
}

/// Fixed-point text with exactly `decimals` digits after the point.
///
/// Ties round away from zero on the exact binary value, the same choice
/// `Number.prototype.toFixed` makes for the non-negative figures we display.
#[must_use]
pub fn to_fixed(value: f64, decimals: u32) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    let precision = decimals as usize;
    Decimal::from_f64_retain(value).map_or_else(
        || format!("{value:.precision$}"),
        |exact| {
            let rounded =
                exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.precision$}")
        },
    )
}
