//! Savings account growth with monthly contributions.

use finsim_core::{round_cents, Rate};
use log::debug;
use serde::{Deserialize, Serialize};

/// How interest is credited on a savings schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SavingsCompounding {
    /// Interest compounds monthly at `annual / 12`, credited before the
    /// month's contribution is deposited.
    #[default]
    Monthly,
    /// Interest is the opening balance times the annual rate; the twelve
    /// contributions of the year earn nothing until the following year.
    Annual,
}

/// One line of a savings schedule.
///
/// Year 0 is the starting point: no contributions, no interest, the opening
/// and closing balances both equal the initial capital.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsYear {
    /// Year index (0 = start).
    pub year: u32,
    /// Balance at the start of the year.
    pub opening_balance: f64,
    /// Contributions deposited during the year.
    pub contributions: f64,
    /// Interest credited during the year.
    pub interest: f64,
    /// Balance at the end of the year.
    pub closing_balance: f64,
}

/// Savings growth with monthly contributions and monthly compounding.
///
/// Returns `years + 1` rows (year 0 through year `years`).
#[must_use]
pub fn savings_with_contributions(
    initial_capital: f64,
    monthly_contribution: f64,
    annual_rate: Rate,
    years: u32,
) -> Vec<SavingsYear> {
    savings_schedule(
        initial_capital,
        monthly_contribution,
        annual_rate,
        years,
        SavingsCompounding::Monthly,
    )
}

/// Savings growth under the chosen compounding rule.
///
/// The running balance is carried unrounded from year to year; each row's
/// fields are rounded to cents on output only.
#[must_use]
pub fn savings_schedule(
    initial_capital: f64,
    monthly_contribution: f64,
    annual_rate: Rate,
    years: u32,
    compounding: SavingsCompounding,
) -> Vec<SavingsYear> {
    let mut rows = Vec::with_capacity(years as usize + 1);
    let mut balance = initial_capital;

    rows.push(SavingsYear {
        year: 0,
        opening_balance: round_cents(balance),
        contributions: 0.0,
        interest: 0.0,
        closing_balance: round_cents(balance),
    });

    for year in 1..=years {
        let opening = balance;
        let (contributions, interest) = match compounding {
            SavingsCompounding::Monthly => {
                accrue_monthly(&mut balance, monthly_contribution, annual_rate.monthly())
            }
            SavingsCompounding::Annual => {
                let interest = balance * annual_rate.value();
                let contributions = monthly_contribution * 12.0;
                balance += contributions + interest;
                (contributions, interest)
            }
        };

        rows.push(SavingsYear {
            year,
            opening_balance: round_cents(opening),
            contributions: round_cents(contributions),
            interest: round_cents(interest),
            closing_balance: round_cents(balance),
        });
    }

    debug!(
        "savings schedule: {} years, {:?} compounding, final balance {:.2}",
        years, compounding, balance
    );

    rows
}

/// Runs twelve months: interest on the running balance, then the deposit.
/// Returns the year's (contributions, interest).
fn accrue_monthly(balance: &mut f64, contribution: f64, monthly_rate: f64) -> (f64, f64) {
    let mut contributions = 0.0;
    let mut interest = 0.0;
    for _ in 0..12 {
        let month_interest = *balance * monthly_rate;
        *balance += month_interest;
        interest += month_interest;

        *balance += contribution;
        contributions += contribution;
    }
    (contributions, interest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_year_zero_row() {
        let rows = savings_with_contributions(5000.0, 200.0, Rate::new(0.03), 10);
        assert_eq!(rows.len(), 11);

        let start = &rows[0];
        assert_eq!(start.year, 0);
        assert_eq!(start.opening_balance, 5000.0);
        assert_eq!(start.contributions, 0.0);
        assert_eq!(start.interest, 0.0);
        assert_eq!(start.closing_balance, 5000.0);
    }

    #[test]
    fn test_monthly_compounding_first_year() {
        // 1000 initial, 100 per month, 12% → 1% per month
        let rows = savings_with_contributions(1000.0, 100.0, Rate::new(0.12), 1);
        let year1 = &rows[1];

        assert_eq!(year1.opening_balance, 1000.0);
        assert_eq!(year1.contributions, 1200.0);
        assert_abs_diff_eq!(year1.interest, 195.08, epsilon = 1e-9);
        assert_abs_diff_eq!(year1.closing_balance, 2395.08, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_accrues_before_contribution() {
        // With nothing invested, the first deposit earns nothing in its own month
        let rows = savings_with_contributions(0.0, 100.0, Rate::new(0.12), 1);
        // 100 × (1.01^11 + ... + 1.01^0) - 1200 = 100 × ((1.01^12 - 1) / 0.01) - 1200
        let expected = 100.0 * ((1.01f64.powi(12) - 1.0) / 0.01) - 1200.0;
        assert_abs_diff_eq!(rows[1].interest, expected, epsilon = 0.005);
    }

    #[test]
    fn test_rows_chain() {
        let rows = savings_with_contributions(5000.0, 200.0, Rate::new(0.03), 10);
        for pair in rows.windows(2) {
            assert_abs_diff_eq!(pair[1].opening_balance, pair[0].closing_balance, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(rows[10].closing_balance, 34_695.05, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_rate() {
        let rows = savings_with_contributions(1000.0, 100.0, Rate::ZERO, 1);
        assert_eq!(rows[1].interest, 0.0);
        assert_eq!(rows[1].closing_balance, 2200.0);
    }

    #[test]
    fn test_annual_variant() {
        let rows = savings_schedule(
            1000.0,
            100.0,
            Rate::new(0.12),
            2,
            SavingsCompounding::Annual,
        );
        assert_abs_diff_eq!(rows[1].interest, 120.0, epsilon = 1e-9);
        assert_abs_diff_eq!(rows[1].closing_balance, 2320.0, epsilon = 1e-9);
        // Second year earns on the whole prior closing balance
        assert_abs_diff_eq!(rows[2].interest, 278.4, epsilon = 1e-9);
    }

    #[test]
    fn test_variants_differ() {
        let monthly = savings_with_contributions(5000.0, 200.0, Rate::new(0.03), 10);
        let annual = savings_schedule(5000.0, 200.0, Rate::new(0.03), 10, SavingsCompounding::Annual);
        assert_ne!(monthly[10].closing_balance, annual[10].closing_balance);
    }

    #[test]
    fn test_zero_years() {
        let rows = savings_with_contributions(5000.0, 200.0, Rate::new(0.03), 0);
        assert_eq!(rows.len(), 1);
    }
}
