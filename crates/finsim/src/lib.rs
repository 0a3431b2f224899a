//! # Finsim
//!
//! Closed-form financial simulations behind one dependency.
//!
//! | Module        | Engine                                                  |
//! |---------------|---------------------------------------------------------|
//! | [`interest`]  | simple interest, savings with contributions, agios      |
//! | [`discount`]  | commercial discount and bordereau                       |
//! | [`loans`]     | annuity, constant-principal and bullet schedules        |
//! | [`bonds`]     | bond issuance and service table                         |
//! | [`portfolio`] | Markowitz statistics, frontier and two-asset optimizer  |
//!
//! ```rust
//! use finsim::prelude::*;
//!
//! let schedule = loans::generate_schedule(
//!     loans::AmortizationType::ConstantPrincipal,
//!     12_000.0,
//!     Rate::from_percent(12.0),
//!     1,
//! );
//! assert_eq!(schedule[0].payment, 1120.0);
//! ```

#![warn(missing_docs)]

pub use finsim_core::{daycounts, validation};
pub use finsim_core::{round_cents, round_to, to_percent, Date, FinsimError, FinsimResult, Rate};

/// Simple interest, savings growth and overdraft agios.
pub mod interest {
    pub use finsim_interest::*;
}

/// Commercial discount (escompte) and bordereau.
pub mod discount {
    pub use finsim_discount::*;
}

/// Loan amortization schedules.
pub mod loans {
    pub use finsim_loans::*;
}

/// Bond issuance and debt service.
pub mod bonds {
    pub use finsim_bonds::*;
}

/// Mean-variance portfolio analytics.
pub mod portfolio {
    pub use finsim_portfolio::*;
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{bonds, discount, interest, loans, portfolio};
    pub use finsim_core::prelude::*;
}
