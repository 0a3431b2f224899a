//! # Finsim Loans
//!
//! Monthly amortization of a fixed-rate loan.
//!
//! - [`constant_annuity_schedule`]: level payments, declining interest
//! - [`constant_principal_schedule`]: level principal, declining payments
//! - [`bullet_schedule`]: interest only, principal repaid in the last month
//!
//! Durations are given in years; schedules run over `years * 12` months at a
//! monthly rate of `annual_rate / 12`. Every monetary field of a row is
//! rounded to cents, while the running balance is carried unrounded.
//!
//! ## Example
//!
//! ```rust
//! use finsim_core::Rate;
//! use finsim_loans::{constant_annuity_payment, constant_annuity_schedule, total_cost};
//!
//! let payment = constant_annuity_payment(200_000.0, Rate::new(0.035), 20);
//! assert!((payment - 1159.93).abs() < 0.02);
//!
//! let schedule = constant_annuity_schedule(200_000.0, Rate::new(0.035), 20);
//! assert_eq!(schedule.len(), 240);
//! assert_eq!(schedule.last().unwrap().closing_balance, 0.0);
//!
//! let cost = total_cost(&schedule);
//! assert_eq!(cost.principal_borrowed, 200_000.0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod cost;
pub mod payment;
pub mod schedule;

pub use cost::{total_cost, LoanCost};
pub use payment::{constant_annuity_payment, early_repayment, EarlyRepayment};
pub use schedule::{
    bullet_schedule, constant_annuity_schedule, constant_principal_schedule, generate_schedule,
    AmortizationRow, AmortizationType,
};
