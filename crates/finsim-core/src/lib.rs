//! # Finsim Core
//!
//! Foundational building blocks shared by the Finsim calculation engines.
//!
//! - **Types**: [`Rate`] (decimal annual rates), [`Date`], cent and percent rounding
//! - **Day Count Conventions**: ACT/360 for commercial paper, ACT/365 Fixed for overdrafts
//! - **Validation**: optional input checks for callers that want to reject bad form input
//!
//! The engines themselves never validate: every numeric input produces a
//! deterministic (possibly degenerate) result. Validation is the caller's job.
//!
//! ## Example
//!
//! ```rust
//! use finsim_core::prelude::*;
//!
//! let rate = Rate::from_percent(5.0);
//! assert_eq!(rate.value(), 0.05);
//!
//! let interest = Act360.accrue(5000.0, rate.value(), 60);
//! assert_eq!(round_cents(interest), 41.67);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod daycounts;
pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act360, Act365Fixed, DayCount};
    pub use crate::error::{FinsimError, FinsimResult};
    pub use crate::types::{round_cents, round_to, to_percent, Date, Rate};
}

// Re-export commonly used types at crate root
pub use error::{FinsimError, FinsimResult};
pub use types::{round_cents, round_to, to_percent, Date, Rate};
