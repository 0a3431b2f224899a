//! Domain types for the calculation engines.
//!
//! - [`Rate`]: Annual rate as a decimal fraction
//! - [`Date`]: Calendar date used to derive day counts
//! - [`round_cents`], [`round_to`], [`to_percent`]: Display-stable rounding

mod date;
mod rate;
mod rounding;

pub use date::Date;
pub use rate::Rate;
pub use rounding::{round_cents, round_to, to_percent};
