//! Portfolio return, risk and risk-adjusted return.

use finsim_core::{round_to, to_percent};
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::correlation::CorrelationMatrix;
use crate::error::{PortfolioError, PortfolioResult};
use crate::types::Asset;

/// Tolerance on the sum of weights accepted by [`validate_weights`].
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// Summary statistics of a weighted portfolio, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStats {
    /// Expected return in percent (2 decimals).
    pub expected_return: f64,
    /// Volatility in percent (2 decimals).
    pub volatility: f64,
    /// Sharpe ratio (2 decimals).
    pub sharpe_ratio: f64,
    /// Risk-free rate in percent (2 decimals).
    pub risk_free_rate: f64,
}

fn ensure_dimension(assets: &[Asset], correlation: &CorrelationMatrix) -> PortfolioResult<()> {
    if assets.len() == correlation.dim() {
        Ok(())
    } else {
        Err(PortfolioError::dimension_mismatch(assets.len(), correlation.dim()))
    }
}

/// Weighted sum of expected returns.
#[must_use]
pub fn portfolio_return(assets: &[Asset]) -> f64 {
    assets.iter().map(|a| a.weight * a.expected_return).sum()
}

/// Covariance matrix `Σᵢⱼ = σᵢ σⱼ ρᵢⱼ`.
///
/// # Errors
///
/// Returns `PortfolioError::DimensionMismatch` if the matrix does not have
/// one row per asset.
pub fn covariance_matrix(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
) -> PortfolioResult<DMatrix<f64>> {
    ensure_dimension(assets, correlation)?;
    let n = assets.len();
    Ok(DMatrix::from_fn(n, n, |i, j| {
        assets[i].volatility * assets[j].volatility * correlation.get(i, j)
    }))
}

/// Portfolio volatility `sqrt(wᵀ Σ w)` over all asset pairs.
///
/// Round-off below zero (perfectly hedged pairs) is clamped to zero.
///
/// # Errors
///
/// Returns `PortfolioError::DimensionMismatch` if the matrix does not have
/// one row per asset.
pub fn portfolio_volatility(assets: &[Asset], correlation: &CorrelationMatrix) -> PortfolioResult<f64> {
    let covariance = covariance_matrix(assets, correlation)?;
    let weights = DVector::from_iterator(assets.len(), assets.iter().map(|a| a.weight));
    let variance = weights.dot(&(&covariance * &weights));

    Ok(if variance < 0.0 { 0.0 } else { variance.sqrt() })
}

/// Excess return per unit of volatility.
///
/// Exactly zero when `volatility` is zero.
#[must_use]
pub fn sharpe_ratio(portfolio_return: f64, risk_free_rate: f64, volatility: f64) -> f64 {
    if volatility == 0.0 {
        return 0.0;
    }
    (portfolio_return - risk_free_rate) / volatility
}

/// Return, volatility and Sharpe ratio of a weighted portfolio.
///
/// # Errors
///
/// Returns `PortfolioError::DimensionMismatch` if the matrix does not have
/// one row per asset.
pub fn portfolio_statistics(
    assets: &[Asset],
    correlation: &CorrelationMatrix,
    risk_free_rate: f64,
) -> PortfolioResult<PortfolioStats> {
    let expected = portfolio_return(assets);
    let volatility = portfolio_volatility(assets, correlation)?;
    let sharpe = sharpe_ratio(expected, risk_free_rate, volatility);

    Ok(PortfolioStats {
        expected_return: to_percent(expected, 2),
        volatility: to_percent(volatility, 2),
        sharpe_ratio: round_to(sharpe, 2),
        risk_free_rate: to_percent(risk_free_rate, 2),
    })
}

/// True when the weights sum to 1 within one percentage point.
#[must_use]
pub fn validate_weights(assets: &[Asset]) -> bool {
    let total: f64 = assets.iter().map(|a| a.weight).sum();
    (total - 1.0).abs() < WEIGHT_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sixty_forty() -> Vec<Asset> {
        vec![
            Asset::new("Equities", 0.10, 0.20).with_weight(0.6),
            Asset::new("Bonds", 0.04, 0.05).with_weight(0.4),
        ]
    }

    #[test]
    fn test_portfolio_return() {
        assert_abs_diff_eq!(portfolio_return(&sixty_forty()), 0.076, epsilon = 1e-12);
        assert_eq!(portfolio_return(&[]), 0.0);
    }

    #[test]
    fn test_portfolio_volatility() {
        let rho = CorrelationMatrix::two_asset(0.3).unwrap();
        let vol = portfolio_volatility(&sixty_forty(), &rho).unwrap();
        assert_abs_diff_eq!(vol, 0.127_436_258_6, epsilon = 1e-9);
    }

    #[test]
    fn test_perfect_hedge_has_zero_volatility() {
        let assets = vec![
            Asset::new("A", 0.05, 0.10).with_weight(0.5),
            Asset::new("B", 0.05, 0.10).with_weight(0.5),
        ];
        let rho = CorrelationMatrix::two_asset(-1.0).unwrap();
        let vol = portfolio_volatility(&assets, &rho).unwrap();
        assert_abs_diff_eq!(vol, 0.0, epsilon = 1e-8);
    }

    #[test]
    fn test_dimension_mismatch() {
        let rho = CorrelationMatrix::identity(3);
        let err = portfolio_volatility(&sixty_forty(), &rho).unwrap_err();
        assert_eq!(err, PortfolioError::dimension_mismatch(2, 3));
    }

    #[test]
    fn test_covariance_matrix() {
        let rho = CorrelationMatrix::two_asset(0.3).unwrap();
        let cov = covariance_matrix(&sixty_forty(), &rho).unwrap();

        assert_abs_diff_eq!(cov[(0, 0)], 0.04, epsilon = 1e-15);
        assert_abs_diff_eq!(cov[(1, 1)], 0.0025, epsilon = 1e-15);
        assert_abs_diff_eq!(cov[(0, 1)], 0.003, epsilon = 1e-15);
        assert_eq!(cov[(0, 1)], cov[(1, 0)]);
    }

    #[test]
    fn test_sharpe_ratio() {
        assert_abs_diff_eq!(sharpe_ratio(0.08, 0.02, 0.15), 0.4, epsilon = 1e-12);
        assert_eq!(sharpe_ratio(0.08, 0.02, 0.0), 0.0);
    }

    #[test]
    fn test_portfolio_statistics() {
        let rho = CorrelationMatrix::two_asset(0.3).unwrap();
        let stats = portfolio_statistics(&sixty_forty(), &rho, 0.02).unwrap();

        assert_eq!(stats.expected_return, 7.6);
        assert_eq!(stats.volatility, 12.74);
        assert_eq!(stats.sharpe_ratio, 0.44);
        assert_eq!(stats.risk_free_rate, 2.0);
    }

    #[test]
    fn test_validate_weights() {
        assert!(validate_weights(&sixty_forty()));

        let off = vec![
            Asset::new("A", 0.1, 0.2).with_weight(0.6),
            Asset::new("B", 0.1, 0.2).with_weight(0.38),
        ];
        assert!(!validate_weights(&off));

        let close = vec![
            Asset::new("A", 0.1, 0.2).with_weight(0.6),
            Asset::new("B", 0.1, 0.2).with_weight(0.395),
        ];
        assert!(validate_weights(&close));
    }
}
