//! # Finsim Bonds
//!
//! Issuer-side view of a fixed-coupon bond issue (emprunt obligataire):
//! how many bonds are placed, what the issue raises, and what the issuer
//! pays back year by year.
//!
//! ## Example
//!
//! ```rust
//! use finsim_bonds::{bond_issuance_summary, bond_service_table, BondIssue};
//!
//! let summary = bond_issuance_summary(&BondIssue::default());
//! assert_eq!(summary.number_of_bonds, 10_000.0);
//! assert_eq!(summary.proceeds, 980_000.0);
//!
//! let service = bond_service_table(&BondIssue::default(), 10);
//! assert_eq!(service.rows.len(), 10);
//! assert_eq!(service.yield_rate, 5.31);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod issuance;
pub mod service;

pub use issuance::{bond_issuance_summary, BondIssuanceSummary, BondIssue};
pub use service::{bond_service_table, BondService, ServiceRow};
