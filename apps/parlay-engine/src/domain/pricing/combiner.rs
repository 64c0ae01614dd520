//! Probability combiner: independent leg probabilities to a fair multiplier.

use alloy_primitives::U256;

use crate::domain::shared::{PPM, PPM_U256};

/// Combine leg probabilities (PPM) into a PPM-scaled fair multiplier.
///
/// The running multiplier starts at `PPM` and, for each leg in order, is
/// multiplied by `PPM` and floor-divided by the leg probability. The floor at
/// every step is part of the settlement contract: computing the product first
/// and dividing once gives different results (`[600_000, 400_000, 500_000]`
/// yields `8_333_330` here, not `8_333_333`).
///
/// Intermediates are 256-bit. With five legs at 1 PPM the running value peaks
/// at `10^36`, far below `2^256` (about `1.16 * 10^77`).
///
/// Returns `None` when any probability is `0` or above `PPM`, or if the
/// accumulation would not fit in 256 bits.
#[must_use]
pub fn compute_multiplier(probabilities_ppm: &[u32]) -> Option<U256> {
    let mut multiplier = PPM_U256;
    for &probability in probabilities_ppm {
        if probability == 0 || probability > PPM {
            return None;
        }
        multiplier = multiplier.checked_mul(PPM_U256)? / U256::from(probability);
    }
    Some(multiplier)
}
