//! USDC amount value object.

use std::fmt;

use alloy_primitives::U256;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::shared::errors::ScaleError;
use crate::domain::shared::scale::{USDC_DECIMALS, USDC_UNIT, USDC_UNIT_U256};

/// A USDC amount held as a raw 6-decimal integer.
///
/// Raw values are bounded to 128 bits when read from outside, so any product
/// with a PPM-scaled multiplier (at most 10^36 for legal tickets) stays inside
/// 256 bits. On the wire the raw integer is always a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct UsdcAmount(U256);

impl UsdcAmount {
    /// Zero USDC.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Wrap a raw 6-decimal integer.
    #[must_use]
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// Whole USDC to raw units.
    #[must_use]
    pub fn from_whole(whole: u64) -> Self {
        Self(U256::from(whole) * USDC_UNIT_U256)
    }

    /// The raw 6-decimal integer.
    #[must_use]
    pub const fn raw(&self) -> U256 {
        self.0
    }

    /// Returns true for a zero amount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Parse a human decimal string such as `"12.5"` into raw units.
    ///
    /// Fractional digits beyond the sixth are truncated, never rounded.
    /// Shorter fractions are right-padded with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidAmount`] for anything other than digits with
    /// an optional single decimal point, and [`ScaleError::Overflow`] when the
    /// raw value exceeds 128 bits.
    pub fn parse(input: &str) -> Result<Self, ScaleError> {
        let text = input.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid(input));
        }
        if !is_digits(whole) || !is_digits(fraction) {
            return Err(invalid(input));
        }

        let whole_raw = if whole.is_empty() {
            U256::ZERO
        } else {
            U256::from_str_radix(whole, 10).map_err(|_| overflow(input))?
        };

        let mut fraction_digits: String = fraction
            .chars()
            .take(USDC_DECIMALS as usize)
            .collect();
        while fraction_digits.len() < USDC_DECIMALS as usize {
            fraction_digits.push('0');
        }
        let fraction_raw = fraction_digits
            .parse::<u64>()
            .map_err(|_| invalid(input))?;

        let raw = whole_raw
            .checked_mul(USDC_UNIT_U256)
            .and_then(|scaled| scaled.checked_add(U256::from(fraction_raw)))
            .ok_or_else(|| overflow(input))?;

        Self::bounded(raw, input)
    }

    /// Parse a raw integer string (already in 6-decimal units), as read from chain.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidAmount`] for non-digit input and
    /// [`ScaleError::Overflow`] past 128 bits.
    pub fn parse_raw(input: &str) -> Result<Self, ScaleError> {
        let text = input.trim();
        if text.is_empty() || !is_digits(text) {
            return Err(invalid(input));
        }
        let raw = U256::from_str_radix(text, 10).map_err(|_| overflow(input))?;
        Self::bounded(raw, input)
    }

    /// Human formatting: whole part, then the fraction with trailing zeros removed.
    ///
    /// `12_345_678` formats as `"12.345678"`, `100_000_000` as `"100"`.
    #[must_use]
    pub fn format(&self) -> String {
        let whole = self.0 / USDC_UNIT_U256;
        let fraction = self.0 % USDC_UNIT_U256;
        if fraction.is_zero() {
            return whole.to_string();
        }
        let padded = format!(
            "{:0>width$}",
            fraction.to_string(),
            width = USDC_DECIMALS as usize
        );
        format!("{whole}.{}", padded.trim_end_matches('0'))
    }

    /// Approximate value in whole USDC, for advisory (non-settlement) math.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        let raw = self.0.to_string().parse::<f64>().unwrap_or(f64::INFINITY);
        raw / USDC_UNIT as f64
    }

    fn bounded(raw: U256, input: &str) -> Result<Self, ScaleError> {
        if raw > U256::from(u128::MAX) {
            return Err(overflow(input));
        }
        Ok(Self(raw))
    }
}

fn is_digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

fn invalid(input: &str) -> ScaleError {
    ScaleError::InvalidAmount {
        input: input.to_string(),
    }
}

fn overflow(input: &str) -> ScaleError {
    ScaleError::Overflow {
        input: input.to_string(),
    }
}

impl fmt::Display for UsdcAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} USDC", self.format())
    }
}

impl From<U256> for UsdcAmount {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl From<UsdcAmount> for U256 {
    fn from(value: UsdcAmount) -> Self {
        value.0
    }
}

impl Serialize for UsdcAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for UsdcAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse_raw(&text).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("100", 100_000_000 ; "whole number")]
    #[test_case("12.345678", 12_345_678 ; "six decimals")]
    #[test_case("0", 0 ; "zero")]
    #[test_case("1.1234567", 1_123_456 ; "truncates seventh decimal")]
    #[test_case("1.9999999", 1_999_999 ; "truncates instead of rounding")]
    #[test_case("5.1", 5_100_000 ; "pads short fraction")]
    #[test_case(".5", 500_000 ; "empty whole part")]
    #[test_case("5.", 5_000_000 ; "empty fraction")]
    #[test_case(" 10 ", 10_000_000 ; "surrounding whitespace")]
    fn parse_vectors(input: &str, expected: u64) {
        let amount = UsdcAmount::parse(input).unwrap();
        assert_eq!(amount.raw(), U256::from(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("." ; "bare point")]
    #[test_case("-1" ; "negative")]
    #[test_case("1.2.3" ; "two points")]
    #[test_case("1e6" ; "exponent")]
    #[test_case("abc" ; "letters")]
    fn parse_rejects_garbage(input: &str) {
        assert!(matches!(
            UsdcAmount::parse(input),
            Err(ScaleError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn parse_rejects_amounts_past_128_bits() {
        let huge = "1".repeat(40);
        assert!(matches!(
            UsdcAmount::parse(&huge),
            Err(ScaleError::Overflow { .. })
        ));
        assert!(matches!(
            UsdcAmount::parse_raw(&huge),
            Err(ScaleError::Overflow { .. })
        ));
    }

    #[test_case(100_000_000, "100")]
    #[test_case(12_345_678, "12.345678")]
    #[test_case(0, "0")]
    #[test_case(5_100_000, "5.1")]
    #[test_case(1, "0.000001")]
    fn format_vectors(raw: u64, expected: &str) {
        assert_eq!(UsdcAmount::from_raw(U256::from(raw)).format(), expected);
    }

    #[test]
    fn parse_raw_reads_integer_units() {
        let amount = UsdcAmount::parse_raw("39200000").unwrap();
        assert_eq!(amount, UsdcAmount::from_raw(U256::from(39_200_000_u64)));
        assert!(UsdcAmount::parse_raw("39.2").is_err());
    }

    #[test]
    fn serializes_as_raw_integer_string() {
        let amount = UsdcAmount::from_whole(10);
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"10000000\"");
        let back: UsdcAmount = serde_json::from_str("\"10000000\"").unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn to_f64_is_whole_usdc() {
        let amount = UsdcAmount::parse("12.5").unwrap();
        assert!((amount.to_f64() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn display_includes_currency() {
        assert_eq!(UsdcAmount::from_whole(3).to_string(), "3 USDC");
    }
}
