//! Aggregate cost of a schedule.

use finsim_core::round_cents;
use serde::{Deserialize, Serialize};

use crate::schedule::AmortizationRow;

/// Totals over an amortization schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoanCost {
    /// Opening balance of the first row.
    pub principal_borrowed: f64,
    /// Sum of all payments.
    pub total_payments: f64,
    /// Sum of all interest.
    pub total_interest: f64,
    /// Cost of credit, equal to the total interest.
    pub total_cost: f64,
}

/// Sums payments and interest across `schedule`.
///
/// An empty schedule costs nothing.
#[must_use]
pub fn total_cost(schedule: &[AmortizationRow]) -> LoanCost {
    let principal_borrowed = schedule.first().map_or(0.0, |row| row.opening_balance);
    let (payments, interest) = schedule
        .iter()
        .fold((0.0, 0.0), |(p, i), row| (p + row.payment, i + row.interest));

    LoanCost {
        principal_borrowed: round_cents(principal_borrowed),
        total_payments: round_cents(payments),
        total_interest: round_cents(interest),
        total_cost: round_cents(interest),
    }
}
