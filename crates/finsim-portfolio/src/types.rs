//! Portfolio inputs.

use serde::{Deserialize, Serialize};

/// A risky asset and its weight in the portfolio.
///
/// `expected_return`, `volatility` and `weight` are decimal fractions.
/// Weights are not checked here; see [`crate::validate_weights`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Display name.
    pub name: String,
    /// Expected annual return.
    pub expected_return: f64,
    /// Annual volatility (standard deviation of returns).
    pub volatility: f64,
    /// Share of the portfolio.
    pub weight: f64,
}

impl Asset {
    /// Creates an asset with a zero weight.
    #[must_use]
    pub fn new(name: impl Into<String>, expected_return: f64, volatility: f64) -> Self {
        Self {
            name: name.into(),
            expected_return,
            volatility,
            weight: 0.0,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }
}
