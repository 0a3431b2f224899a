//! Efficient frontier sampling for two assets.

use finsim_core::to_percent;
use serde::{Deserialize, Serialize};

use crate::analytics::{portfolio_return, portfolio_volatility};
use crate::correlation::CorrelationMatrix;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Asset;

/// One allocation on the frontier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// Expected return in percent (2 decimals).
    pub expected_return: f64,
    /// Volatility in percent (2 decimals).
    pub volatility: f64,
    /// Weights of the first and second asset as fractions.
    pub weights: [f64; 2],
}

/// Sweeps the first asset's weight from 0 to 1 in `point_count` equal steps.
///
/// Only the first two assets and the top-left 2x2 block of `correlation`
/// are used. The result holds `point_count + 1` points, or none when fewer
/// than two assets are given or `point_count` is zero.
///
/// # Errors
///
/// Returns `PortfolioError::DimensionMismatch` if the correlation matrix
/// covers fewer than two assets.
///
/// # Example
///
/// ```rust
/// use finsim_portfolio::{efficient_frontier, Asset, CorrelationMatrix};
///
/// let assets = [Asset::new("A", 0.10, 0.20), Asset::new("B", 0.04, 0.05)];
/// let rho = CorrelationMatrix::two_asset(0.3).unwrap();
///
/// let points = efficient_frontier(&assets, &rho, 2).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points[2].expected_return, 10.0);
/// ```
pub fn efficient_frontier(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    point_count: usize,
) -> PortfolioResult<Vec<FrontierPoint>> {
    if assets.len() < 2 || point_count == 0 {
        return Ok(Vec::new());
    }
    if correlation.dim() < 2 {
        return Err(PortfolioError::dimension_mismatch(assets.len(), correlation.dim()));
    }
    let pair_correlation = CorrelationMatrix::two_asset_unchecked(correlation.get(0, 1));

    (0..=point_count)
        .map(|i| {
            let w1 = i as f64 / point_count as f64;
            let w2 = 1.0 - w1;
            let pair = [
                assets[0].clone().with_weight(w1),
                assets[1].clone().with_weight(w2),
            ];
            let volatility = portfolio_volatility(&pair, &pair_correlation)?;

            Ok(FrontierPoint {
                expected_return: to_percent(portfolio_return(&pair), 2),
                volatility: to_percent(volatility, 2),
                weights: [w1, w2],
            })
        })
        .collect()
}
