//! CLI command implementations.

pub mod agios;
pub mod bond;
pub mod config;
pub mod discount;
pub mod loan;
pub mod portfolio;
pub mod prepay;
pub mod savings;
pub mod simple;

pub use agios::AgiosArgs;
pub use bond::BondArgs;
pub use config::ConfigArgs;
pub use discount::DiscountArgs;
pub use loan::LoanArgs;
pub use portfolio::PortfolioArgs;
pub use prepay::PrepayArgs;
pub use savings::SavingsArgs;
pub use simple::SimpleArgs;

use finsim::validation::{ensure_finite, ensure_non_negative, ensure_positive};
use finsim::Rate;

use crate::error::CliResult;

/// Converts a percentage argument into a validated [`Rate`].
pub fn parse_rate(field: &str, percent: f64) -> CliResult<Rate> {
    Ok(Rate::from_percent(ensure_finite(field, percent)?))
}

/// Validates an amount that may be zero but not negative.
pub fn validate_amount(field: &str, value: f64) -> CliResult<f64> {
    Ok(ensure_non_negative(field, value)?)
}

/// Validates a duration in whole years.
pub fn validate_years(years: u32) -> CliResult<u32> {
    ensure_positive("years", f64::from(years))?;
    Ok(years)
}
