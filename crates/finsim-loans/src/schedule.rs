//! Amortization schedule generation.

use std::fmt;

use finsim_core::{round_cents, Rate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::payment::constant_annuity_payment;

/// Repayment profile of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmortizationType {
    /// Level total payments (annuités constantes).
    #[default]
    ConstantAnnuity,
    /// Level principal repayments (amortissement constant).
    ConstantPrincipal,
    /// Interest only, principal at maturity (in fine).
    Bullet,
}

impl AmortizationType {
    /// Short label used in reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AmortizationType::ConstantAnnuity => "Constant annuity",
            AmortizationType::ConstantPrincipal => "Constant principal",
            AmortizationType::Bullet => "Bullet",
        }
    }
}

impl fmt::Display for AmortizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One month of an amortization schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Month number, starting at 1.
    pub period: u32,
    /// Principal outstanding before the payment.
    pub opening_balance: f64,
    /// Amount paid this month.
    pub payment: f64,
    /// Interest part of the payment.
    pub interest: f64,
    /// Principal part of the payment.
    pub principal_portion: f64,
    /// Principal outstanding after the payment.
    pub closing_balance: f64,
}

impl AmortizationRow {
    fn new(period: u32, opening: f64, payment: f64, interest: f64, principal: f64, closing: f64) -> Self {
        Self {
            period,
            opening_balance: round_cents(opening),
            payment: round_cents(payment),
            interest: round_cents(interest),
            principal_portion: round_cents(principal),
            closing_balance: round_cents(closing),
        }
    }
}

/// Builds the schedule for the given repayment profile.
#[must_use]
pub fn generate_schedule(
    kind: AmortizationType,
    principal: f64,
    annual_rate: Rate,
    years: u32,
) -> Vec<AmortizationRow> {
    let schedule = match kind {
        AmortizationType::ConstantAnnuity => constant_annuity_schedule(principal, annual_rate, years),
        AmortizationType::ConstantPrincipal => {
            constant_principal_schedule(principal, annual_rate, years)
        }
        AmortizationType::Bullet => bullet_schedule(principal, annual_rate, years),
    };
    debug!(
        "{kind} schedule: principal {principal}, rate {annual_rate}, {} rows",
        schedule.len()
    );
    schedule
}

/// Level-payment schedule.
///
/// The payment is the cent-rounded annuity, so the running balance drifts
/// by a few cents; the last row closes at exactly zero regardless.
#[must_use]
pub fn constant_annuity_schedule(principal: f64, annual_rate: Rate, years: u32) -> Vec<AmortizationRow> {
    let months = years.saturating_mul(12);
    let i = annual_rate.monthly();
    let payment = constant_annuity_payment(principal, annual_rate, years);

    let mut balance = principal;
    (1..=months)
        .map(|period| {
            let opening = balance;
            let interest = opening * i;
            let portion = payment - interest;
            balance = if period == months { 0.0 } else { opening - portion };
            AmortizationRow::new(period, opening, payment, interest, portion, balance)
        })
        .collect()
}

/// Constant-principal schedule: `principal / months` is repaid every month
/// and the payment declines with the interest.
#[must_use]
pub fn constant_principal_schedule(
    principal: f64,
    annual_rate: Rate,
    years: u32,
) -> Vec<AmortizationRow> {
    let months = years.saturating_mul(12);
    let i = annual_rate.monthly();
    let portion = principal / f64::from(months);

    let mut balance = principal;
    (1..=months)
        .map(|period| {
            let opening = balance;
            let interest = opening * i;
            balance = if period == months { 0.0 } else { opening - portion };
            AmortizationRow::new(period, opening, portion + interest, interest, portion, balance)
        })
        .collect()
}

/// In fine schedule: interest on the full principal every month, principal
/// repaid with the last payment.
#[must_use]
pub fn bullet_schedule(principal: f64, annual_rate: Rate, years: u32) -> Vec<AmortizationRow> {
    let months = years.saturating_mul(12);
    let interest = principal * annual_rate.monthly();

    (1..=months)
        .map(|period| {
            if period == months {
                AmortizationRow::new(period, principal, interest + principal, interest, principal, 0.0)
            } else {
                AmortizationRow::new(period, principal, interest, interest, 0.0, principal)
            }
        })
        .collect()
}
