//! Annual interest rate type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An annual rate expressed as a decimal fraction (0.05 = 5%).
///
/// Forms collect percentages; engines work in decimals. Use
/// [`Rate::from_percent`] at the boundary.
///
/// # Example
///
/// ```rust
/// use finsim_core::types::Rate;
///
/// let rate = Rate::from_percent(6.0);
/// assert_eq!(rate.value(), 0.06);
/// assert!((rate.monthly() - 0.005).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rate(f64);

impl Rate {
    /// Zero rate.
    pub const ZERO: Rate = Rate(0.0);

    /// Creates a rate from a decimal value (0.05 = 5%).
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Creates a rate from a percentage value (5.0 = 5%).
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// Returns the rate as a decimal.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Returns the rate as a percentage.
    #[must_use]
    pub fn as_percent(&self) -> f64 {
        self.0 * 100.0
    }

    /// Proportional monthly rate (`annual / 12`).
    #[must_use]
    pub fn monthly(&self) -> f64 {
        self.0 / 12.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.as_percent())
    }
}
