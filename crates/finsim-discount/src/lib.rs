//! # Finsim Discount
//!
//! Commercial discounting of trade bills (escompte) on a 360-day year, and
//! the bordereau: the itemized settlement statement for a batch of drafts.
//!
//! ## Quick Start
//!
//! ```rust
//! use finsim_core::Rate;
//! use finsim_discount::{discount_bordereau, BordereauTerms, DraftEffect};
//!
//! let drafts = vec![DraftEffect::new(5000.0, 60), DraftEffect::new(1000.0, 30)];
//! let bordereau = discount_bordereau(&drafts, Rate::new(0.05), BordereauTerms::default());
//!
//! assert_eq!(bordereau.count, 2);
//! assert_eq!(bordereau.effects[0].discount, 41.67);
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bordereau;
pub mod escompte;

pub use bordereau::{
    discount_bordereau, Bordereau, BordereauTerms, BordereauTotals, DiscountResult,
    DEFAULT_COMMISSION_RATE, DEFAULT_FIXED_FEES,
};
pub use escompte::{commercial_discount, equivalent_rate, present_value, DraftEffect};
