//! Display-stable rounding of computed amounts.
//!
//! Every computed field is rounded exactly once, when it leaves an engine.
//! Running balances stay unrounded so rounding error never compounds.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an amount to `dp` decimal places, halves away from zero.
///
/// The value goes through `rust_decimal`, which drops the excess binary
/// digits of the `f64` before rounding. Non-finite inputs are returned
/// unchanged.
#[must_use]
pub fn round_to(value: f64, dp: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Rounds a monetary amount to cents.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Converts a decimal fraction into a percentage rounded to `dp` places.
///
/// `to_percent(0.07654, 2) == 7.65`
#[must_use]
pub fn to_percent(value: f64, dp: u32) -> f64 {
    round_to(value * 100.0, dp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(9.863_013_698_630_137), 9.86);
        assert_eq!(round_cents(41.666_666_666_666_664), 41.67);
        assert_eq!(round_cents(100.0), 100.0);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(10.375), 10.38);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_percent() {
        assert_eq!(to_percent(0.052_000_000_000_000_005, 2), 5.2);
        assert_eq!(to_percent(0.064_498_061_986_388_4, 2), 6.45);
    }

    #[test]
    fn test_matches_decimal_rounding() {
        use rust_decimal_macros::dec;

        let expected = dec!(2.375).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(expected, dec!(2.38));
        assert_eq!(round_cents(2.375), expected.to_f64().unwrap());
    }

    #[test]
    fn test_round_to_other_precisions() {
        assert_eq!(round_to(0.496_138_938, 2), 0.5);
        assert_eq!(round_to(0.496_138_938, 4), 0.4961);
        assert_eq!(round_to(12.5, 0), 13.0);
    }
}
