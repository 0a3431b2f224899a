//! Year-by-year debt service of a bond issue.

use finsim_core::{round_cents, round_to};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::issuance::BondIssue;

/// Cash paid by the issuer in one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    /// Year number, starting at 1.
    pub year: u32,
    /// Coupons paid across all bonds.
    pub coupons: f64,
    /// Principal repaid; non-zero only in the final year.
    pub redemption: f64,
    /// Coupons plus redemption.
    pub total: f64,
}

/// Service table with the issuer's overall cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondService {
    /// One row per year.
    pub rows: Vec<ServiceRow>,
    /// All coupons plus redemption, less proceeds raised.
    pub total_cost: f64,
    /// Average annual cost as a percentage of proceeds (2 decimals).
    pub yield_rate: f64,
}

/// Builds the service table of an in fine issue over `years`.
///
/// Works from the issue terms rather than a [`BondIssuanceSummary`], whose
/// fields are already rounded to cents; every output is rounded once.
///
/// `yield_rate = total_cost / proceeds / years × 100` is a simple average,
/// not an actuarial rate. Zero years leave it non-finite.
///
/// [`BondIssuanceSummary`]: crate::issuance::BondIssuanceSummary
#[must_use]
pub fn bond_service_table(issue: &BondIssue, years: u32) -> BondService {
    let flows = issue.flows();
    let coupons = flows.aggregate_coupon;
    let rows: Vec<ServiceRow> = (1..=years)
        .map(|year| {
            let redemption = if year == years { flows.redemption_amount } else { 0.0 };
            ServiceRow {
                year,
                coupons: round_cents(coupons),
                redemption: round_cents(redemption),
                total: round_cents(coupons + redemption),
            }
        })
        .collect();

    let total_cost = coupons * f64::from(years) + flows.redemption_amount - flows.proceeds;
    let yield_rate = total_cost / flows.proceeds / f64::from(years) * 100.0;
    debug!("bond service over {years} years: cost {total_cost}, yield {yield_rate}%");

    BondService {
        rows,
        total_cost: round_cents(total_cost),
        yield_rate: round_to(yield_rate, 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finsim_core::Rate;

    #[test]
    fn test_default_service_table() {
        let service = bond_service_table(&BondIssue::default(), 10);

        for row in &service.rows[..9] {
            assert_eq!(row.coupons, 50_000.0);
            assert_eq!(row.redemption, 0.0);
            assert_eq!(row.total, 50_000.0);
        }
        let last = &service.rows[9];
        assert_eq!(last.year, 10);
        assert_eq!(last.redemption, 1_000_000.0);
        assert_eq!(last.total, 1_050_000.0);

        assert_eq!(service.total_cost, 520_000.0);
        assert_eq!(service.yield_rate, 5.31);
    }

    #[test]
    fn test_par_issue_yield_equals_coupon() {
        let service = bond_service_table(&BondIssue::new(100_000.0, 100.0, Rate::new(0.04)), 5);

        assert_eq!(service.total_cost, 20_000.0);
        assert_eq!(service.yield_rate, 4.0);
    }

    #[test]
    fn test_zero_years() {
        let service = bond_service_table(&BondIssue::default(), 0);

        assert!(service.rows.is_empty());
        assert!(!service.yield_rate.is_finite());
    }

    #[test]
    fn test_cost_uses_unrounded_coupons() {
        // 10000.01 bonds paying 5.123 each: aggregate coupon 51230.05123
        let issue = BondIssue::new(1_000_001.0, 100.0, Rate::from_percent(5.123)).with_issue_price(98.0);
        let service = bond_service_table(&issue, 10);

        assert_eq!(service.rows[0].coupons, 51_230.05);
        assert_eq!(service.total_cost, 532_300.53);
        assert_eq!(service.yield_rate, 5.43);
    }
}
