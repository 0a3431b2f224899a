//! # Finsim Interest
//!
//! Simple interest, savings growth with monthly contributions, and overdraft
//! agios.
//!
//! All functions are pure: explicit inputs, no I/O, no validation. Negative
//! or zero inputs flow through the arithmetic unchanged.
//!
//! ## Quick Start
//!
//! ```rust
//! use finsim_core::Rate;
//! use finsim_interest::{overdraft_agios, simple_interest};
//!
//! assert_eq!(simple_interest(1000.0, Rate::new(0.05), 2.0), 100.0);
//!
//! let agios = overdraft_agios(1000.0, Rate::new(0.12), 30);
//! assert_eq!(agios.interest, 9.86);
//! assert_eq!(agios.commission, 0.5);
//! assert_eq!(agios.total, 10.36);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod overdraft;
pub mod savings;
pub mod simple;

pub use overdraft::{
    overdraft_agios, overdraft_agios_with_commission, Agios, OVERDRAFT_COMMISSION_RATE,
};
pub use savings::{savings_schedule, savings_with_contributions, SavingsCompounding, SavingsYear};
pub use simple::{future_value_simple, required_principal, simple_interest};
