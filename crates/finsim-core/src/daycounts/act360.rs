//! Actual/360 day count convention.

use super::DayCount;

/// Actual/360 day count convention.
///
/// Actual calendar days over a 360-day commercial year. Banks use it to
/// price the discount (escompte) on trade bills.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{360}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn basis(&self) -> u32 {
        360
    }
}
