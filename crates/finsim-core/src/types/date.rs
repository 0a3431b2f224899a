//! Date type for day-count derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{FinsimError, FinsimResult};

/// A calendar date.
///
/// Newtype around `chrono::NaiveDate`. Drafts use it to derive the number of
/// days between creation and maturity.
///
/// # Example
///
/// ```rust
/// use finsim_core::types::Date;
///
/// let created = Date::from_ymd(2025, 1, 15).unwrap();
/// let maturity = Date::parse("2025-03-16").unwrap();
/// assert_eq!(created.days_between(&maturity), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FinsimError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FinsimResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| FinsimError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `FinsimError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> FinsimResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| FinsimError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Signed number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
