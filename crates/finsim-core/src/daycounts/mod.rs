//! Day count conventions.
//!
//! Two conventions coexist in retail banking:
//!
//! - [`Act360`]: commercial year, used for discounting trade bills (escompte)
//! - [`Act365Fixed`]: civil year, used for overdraft interest (agios)
//!
//! # Usage
//!
//! ```rust
//! use finsim_core::daycounts::{Act360, Act365Fixed, DayCount};
//!
//! // 5000 at 5% for 60 days
//! let discount = Act360.accrue(5000.0, 0.05, 60);
//! assert!((discount - 41.666_666).abs() < 1e-5);
//!
//! // Same inputs on a 365-day basis cost less
//! assert!(Act365Fixed.accrue(5000.0, 0.05, 60) < discount);
//! ```

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year basis; counting and simple-interest
/// accrual are derived from it.
pub trait DayCount: Send + Sync {
    /// Number of days in the conventional year.
    fn basis(&self) -> u32;

    /// Actual calendar days between two dates. Negative if `end < start`.
    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }

    /// Simple interest on `amount` at `annual_rate` over `days`.
    ///
    /// Computed as `amount * rate * days / basis`.
    fn accrue(&self, amount: f64, annual_rate: f64, days: i64) -> f64 {
        amount * annual_rate * days as f64 / f64::from(self.basis())
    }
}
