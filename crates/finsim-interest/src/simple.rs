//! Simple interest.

use finsim_core::Rate;

/// Interest earned on `principal` at `rate` for `years` (simple interest).
///
/// ```text
/// I = C × t × n
/// ```
#[must_use]
pub fn simple_interest(principal: f64, rate: Rate, years: f64) -> f64 {
    principal * rate.value() * years
}

/// Acquired value: principal plus simple interest.
///
/// ```text
/// V = C × (1 + t × n)
/// ```
#[must_use]
pub fn future_value_simple(principal: f64, rate: Rate, years: f64) -> f64 {
    principal * (1.0 + rate.value() * years)
}

/// Principal needed today to reach `target` after `years` of simple interest.
///
/// Inverse of [`future_value_simple`]. Divides by zero (infinite result)
/// when `rate × years == -1`.
#[must_use]
pub fn required_principal(target: f64, rate: Rate, years: f64) -> f64 {
    target / (1.0 + rate.value() * years)
}
