//! Overdraft agios (debit interest on a current account).

use finsim_core::daycounts::{Act365Fixed, DayCount};
use finsim_core::{round_cents, Rate};
use serde::{Deserialize, Serialize};

/// Commission charged on the overdrawn amount (0.05%).
pub const OVERDRAFT_COMMISSION_RATE: f64 = 0.0005;

/// Agios charged for an overdraft.
///
/// Each field is rounded to cents independently. `total` rounds the exact
/// sum, so it can differ by a cent from `interest + commission`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agios {
    /// Debit interest on an ACT/365 basis.
    pub interest: f64,
    /// Commission on the overdrawn amount.
    pub commission: f64,
    /// Interest plus commission.
    pub total: f64,
}

/// Agios on `amount` overdrawn for `days` at `annual_rate`.
///
/// ```text
/// interest   = amount × rate × days / 365
/// commission = amount × 0.0005
/// ```
#[must_use]
pub fn overdraft_agios(amount: f64, annual_rate: Rate, days: i64) -> Agios {
    overdraft_agios_with_commission(amount, annual_rate, days, OVERDRAFT_COMMISSION_RATE)
}

/// Agios with a bank-specific commission rate.
#[must_use]
pub fn overdraft_agios_with_commission(
    amount: f64,
    annual_rate: Rate,
    days: i64,
    commission_rate: f64,
) -> Agios {
    let interest = Act365Fixed.accrue(amount, annual_rate.value(), days);
    let commission = amount * commission_rate;

    Agios {
        interest: round_cents(interest),
        commission: round_cents(commission),
        total: round_cents(interest + commission),
    }
}
