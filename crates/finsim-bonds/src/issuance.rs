//! Issue terms and derived characteristics.

use finsim_core::{round_cents, Rate};
use serde::{Deserialize, Serialize};

/// Terms of a bond issue.
///
/// Prices are quoted per bond in currency units, like the face value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondIssue {
    /// Nominal amount of the whole issue.
    pub issuance_amount: f64,
    /// Nominal value of one bond.
    pub face_value: f64,
    /// Annual coupon rate applied to the face value.
    pub coupon_rate: Rate,
    /// Price paid by subscribers per bond.
    pub issue_price: f64,
    /// Price repaid per bond at maturity.
    pub redemption_price: f64,
}

impl BondIssue {
    /// Creates an issue placed and redeemed at par.
    #[must_use]
    pub fn new(issuance_amount: f64, face_value: f64, coupon_rate: Rate) -> Self {
        Self {
            issuance_amount,
            face_value,
            coupon_rate,
            issue_price: face_value,
            redemption_price: face_value,
        }
    }

    /// Sets the issue price per bond.
    #[must_use]
    pub fn with_issue_price(mut self, price: f64) -> Self {
        self.issue_price = price;
        self
    }

    /// Sets the redemption price per bond.
    #[must_use]
    pub fn with_redemption_price(mut self, price: f64) -> Self {
        self.redemption_price = price;
        self
    }
}

impl Default for BondIssue {
    /// 1,000,000 in bonds of 100 at 5%, issued at 98, redeemed at par.
    fn default() -> Self {
        Self::new(1_000_000.0, 100.0, Rate::new(0.05)).with_issue_price(98.0)
    }
}

/// Characteristics derived from the issue terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondIssuanceSummary {
    /// Number of bonds placed. Not rounded; a fractional count is reported as is.
    pub number_of_bonds: f64,
    /// Cash actually raised at the issue price.
    pub proceeds: f64,
    /// Annual coupon per bond.
    pub coupon_per_bond: f64,
    /// Annual coupon across all bonds.
    pub aggregate_coupon: f64,
    /// Amount repaid at maturity across all bonds.
    pub redemption_amount: f64,
    /// Issue discount per bond (face value less issue price).
    pub issue_premium: f64,
    /// Redemption premium per bond (redemption price less face value).
    pub redemption_premium: f64,
}

/// Unrounded amounts shared by the summary and the service table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IssueFlows {
    pub(crate) count: f64,
    pub(crate) proceeds: f64,
    pub(crate) coupon_per_bond: f64,
    pub(crate) aggregate_coupon: f64,
    pub(crate) redemption_amount: f64,
}

impl BondIssue {
    pub(crate) fn flows(&self) -> IssueFlows {
        let count = self.issuance_amount / self.face_value;
        let coupon_per_bond = self.face_value * self.coupon_rate.value();

        IssueFlows {
            count,
            proceeds: count * self.issue_price,
            coupon_per_bond,
            aggregate_coupon: coupon_per_bond * count,
            redemption_amount: count * self.redemption_price,
        }
    }
}

/// Derives the characteristics of an issue.
#[must_use]
pub fn bond_issuance_summary(issue: &BondIssue) -> BondIssuanceSummary {
    let flows = issue.flows();

    BondIssuanceSummary {
        number_of_bonds: flows.count,
        proceeds: round_cents(flows.proceeds),
        coupon_per_bond: round_cents(flows.coupon_per_bond),
        aggregate_coupon: round_cents(flows.aggregate_coupon),
        redemption_amount: round_cents(flows.redemption_amount),
        issue_premium: round_cents(issue.face_value - issue.issue_price),
        redemption_premium: round_cents(issue.redemption_price - issue.face_value),
    }
}
