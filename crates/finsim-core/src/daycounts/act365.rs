//! Actual/365 Fixed day count convention.

use super::DayCount;

/// Actual/365 Fixed day count convention.
///
/// Actual calendar days over a 365-day year, leap years ignored. Used for
/// debit interest on current-account overdrafts.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn basis(&self) -> u32 {
        365
    }
}
