//! Sharpe-maximizing split between two assets.

use finsim_core::{round_to, to_percent};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::analytics::{portfolio_return, portfolio_volatility, sharpe_ratio};
use crate::correlation::CorrelationMatrix;
use crate::types::Asset;

/// Grid resolution: weights move in steps of 1 / `GRID_STEPS`.
const GRID_STEPS: u32 = 100;

/// Best allocation found by [`optimize_two_asset_portfolio`], in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalAllocation {
    /// Weight of the first asset in whole percent.
    pub weight1: f64,
    /// Weight of the second asset in whole percent.
    pub weight2: f64,
    /// Expected return in percent (2 decimals).
    pub expected_return: f64,
    /// Volatility in percent (2 decimals).
    pub volatility: f64,
    /// Sharpe ratio (2 decimals).
    pub sharpe_ratio: f64,
}

struct Candidate {
    step: u32,
    expected_return: f64,
    volatility: f64,
    sharpe: f64,
}

fn evaluate(
    asset1: &Asset,
    asset2: &Asset,
    correlation: &CorrelationMatrix,
    risk_free_rate: f64,
    step: u32,
) -> Candidate {
    let w1 = f64::from(step) / f64::from(GRID_STEPS);
    let pair = [asset1.clone().with_weight(w1), asset2.clone().with_weight(1.0 - w1)];

    let expected_return = portfolio_return(&pair);
    // A 2x2 matrix always matches a pair of assets.
    let volatility = portfolio_volatility(&pair, correlation).unwrap_or(f64::NAN);

    Candidate {
        step,
        expected_return,
        volatility,
        sharpe: sharpe_ratio(expected_return, risk_free_rate, volatility),
    }
}

/// Searches the weight of `asset1` over 0%, 1%, ..., 100% for the highest
/// Sharpe ratio.
///
/// Ties keep the lowest weight of `asset1`. `correlation` is taken as is,
/// without range checks. If every candidate has an undefined Sharpe ratio
/// (non-finite inputs), the 0% allocation is returned.
#[must_use]
pub fn optimize_two_asset_portfolio(
    asset1: &Asset,
    asset2: &Asset,
    correlation: f64,
    risk_free_rate: f64,
) -> OptimalAllocation {
    let matrix = CorrelationMatrix::two_asset_unchecked(correlation);
    let first = evaluate(asset1, asset2, &matrix, risk_free_rate, 0);

    let best = (1..=GRID_STEPS)
        .map(|step| evaluate(asset1, asset2, &matrix, risk_free_rate, step))
        .fold(first, |best, candidate| {
            if candidate.sharpe > best.sharpe || (best.sharpe.is_nan() && !candidate.sharpe.is_nan()) {
                candidate
            } else {
                best
            }
        });

    debug!(
        "optimal split {}/{} with Sharpe {:.4}",
        best.step,
        GRID_STEPS - best.step,
        best.sharpe
    );

    OptimalAllocation {
        weight1: f64::from(best.step),
        weight2: f64::from(GRID_STEPS - best.step),
        expected_return: to_percent(best.expected_return, 2),
        volatility: to_percent(best.volatility, 2),
        sharpe_ratio: round_to(best.sharpe, 2),
    }
}
