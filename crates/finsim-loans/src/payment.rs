//! Level-payment (annuity) formula and early repayment.

use finsim_core::{round_cents, Rate};
use serde::{Deserialize, Serialize};

/// Level monthly payment over `months` at `monthly_rate`, rounded to cents.
///
/// ```text
/// a = P × i / (1 − (1 + i)^−n)
/// ```
///
/// A zero rate falls back to `P / n`. Zero months divide by zero and the
/// non-finite result is returned as is.
pub(crate) fn annuity_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    let n = f64::from(months);
    if monthly_rate == 0.0 {
        return round_cents(principal / n);
    }
    let discount = 1.0 - (1.0 + monthly_rate).powf(-n);
    round_cents(principal * monthly_rate / discount)
}

/// Monthly payment of a constant-annuity loan, rounded to cents.
///
/// # Example
///
/// ```rust
/// use finsim_core::Rate;
/// use finsim_loans::constant_annuity_payment;
///
/// assert_eq!(constant_annuity_payment(12_000.0, Rate::new(0.0), 1), 1000.0);
/// ```
#[must_use]
pub fn constant_annuity_payment(principal: f64, annual_rate: Rate, years: u32) -> f64 {
    annuity_payment(principal, annual_rate.monthly(), years.saturating_mul(12))
}

/// Effect of a partial prepayment on a constant-annuity loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EarlyRepayment {
    /// Outstanding principal after the prepayment.
    pub new_principal: f64,
    /// Monthly payment before the prepayment.
    pub old_payment: f64,
    /// Monthly payment after the prepayment, same remaining term.
    pub new_payment: f64,
    /// Payment reduction times the remaining months.
    pub total_savings: f64,
}

/// Recomputes the monthly payment after prepaying part of the balance.
///
/// The remaining term is kept; only the payment shrinks.
#[must_use]
pub fn early_repayment(
    remaining_principal: f64,
    prepayment: f64,
    annual_rate: Rate,
    months_remaining: u32,
) -> EarlyRepayment {
    let new_principal = remaining_principal - prepayment;
    let old_payment = annuity_payment(remaining_principal, annual_rate.monthly(), months_remaining);
    let new_payment = annuity_payment(new_principal, annual_rate.monthly(), months_remaining);

    EarlyRepayment {
        new_principal: round_cents(new_principal),
        old_payment,
        new_payment,
        total_savings: round_cents((old_payment - new_payment) * f64::from(months_remaining)),
    }
}
