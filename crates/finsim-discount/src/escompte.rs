//! Commercial discount on a single draft.

use finsim_core::daycounts::{Act360, DayCount};
use finsim_core::{Date, Rate};
use serde::{Deserialize, Serialize};

/// A trade bill presented for discounting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DraftEffect {
    /// Nominal value payable at maturity.
    pub face_value: f64,
    /// Days remaining until maturity.
    pub days_to_maturity: i64,
}

impl DraftEffect {
    /// Creates a draft from its face value and days to maturity.
    #[must_use]
    pub fn new(face_value: f64, days_to_maturity: i64) -> Self {
        Self {
            face_value,
            days_to_maturity,
        }
    }

    /// Creates a draft from its creation and maturity dates.
    ///
    /// The day count is the absolute number of calendar days between the
    /// two dates, so swapped dates give the same draft.
    #[must_use]
    pub fn from_dates(face_value: f64, creation: Date, maturity: Date) -> Self {
        Self::new(face_value, Act360.day_count(creation, maturity).abs())
    }
}

/// Discount retained by the bank on a bill.
///
/// ```text
/// E = V × t × j / 360
/// ```
///
/// Zero or negative `days` give a zero or negative discount.
#[must_use]
pub fn commercial_discount(face_value: f64, annual_rate: Rate, days: i64) -> f64 {
    Act360.accrue(face_value, annual_rate.value(), days)
}

/// Present (net) value of a bill once the discount is deducted.
#[must_use]
pub fn present_value(face_value: f64, discount: f64) -> f64 {
    face_value - discount
}

/// Rate for `days` equivalent to `annual_rate` on a 360-day year.
#[must_use]
pub fn equivalent_rate(annual_rate: Rate, days: i64) -> f64 {
    annual_rate.value() * days as f64 / f64::from(Act360.basis())
}
