//! # Finsim Portfolio
//!
//! Mean-variance (Markowitz) analytics for a small set of risky assets.
//!
//! - **Statistics**: weighted return, volatility from a correlation matrix,
//!   Sharpe ratio, covariance matrix
//! - **Efficient frontier**: return/volatility of two-asset allocations
//!   swept from 0% to 100%
//! - **Optimizer**: brute-force search of the Sharpe-maximizing split
//!   between two assets on a 1% grid
//!
//! Rates, returns and volatilities are decimal fractions on input.
//! [`PortfolioStats`], [`FrontierPoint`] and [`OptimalAllocation`] report
//! percentages for display.
//!
//! ## Example
//!
//! ```rust
//! use finsim_portfolio::{optimize_two_asset_portfolio, Asset};
//!
//! let equities = Asset::new("Equities", 0.10, 0.20);
//! let bonds = Asset::new("Bonds", 0.04, 0.05);
//!
//! let best = optimize_two_asset_portfolio(&equities, &bonds, 0.3, 0.02);
//! assert_eq!(best.weight1 + best.weight2, 100.0);
//! assert_eq!(best.sharpe_ratio, 0.5);
//! ```
//!
//! The grid search only covers two assets. Larger universes would need a
//! quadratic-programming solver.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod analytics;
pub mod correlation;
pub mod error;
pub mod frontier;
pub mod optimizer;
pub mod types;

pub use analytics::{
    covariance_matrix, portfolio_return, portfolio_statistics, portfolio_volatility,
    sharpe_ratio, validate_weights, PortfolioStats,
};
pub use correlation::CorrelationMatrix;
pub use error::{PortfolioError, PortfolioResult};
pub use frontier::{efficient_frontier, FrontierPoint};
pub use optimizer::{optimize_two_asset_portfolio, OptimalAllocation};
pub use types::Asset;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::analytics::{portfolio_return, portfolio_statistics, portfolio_volatility, sharpe_ratio};
    pub use crate::correlation::CorrelationMatrix;
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::frontier::efficient_frontier;
    pub use crate::optimizer::optimize_two_asset_portfolio;
    pub use crate::types::Asset;
}
