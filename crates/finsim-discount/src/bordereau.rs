//! Bordereau d'escompte: settlement statement for a batch of drafts.
//!
//! Each draft is priced independently and its fields are rounded to cents.
//! Totals are the rounded sum of those already-rounded per-draft values, so
//! they can differ by a cent from fees recomputed on the aggregate face value.

use finsim_core::{round_cents, Rate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::escompte::{commercial_discount, DraftEffect};

/// Bank commission charged on each draft's face value (0.6%).
pub const DEFAULT_COMMISSION_RATE: f64 = 0.006;

/// Flat handling fee per draft.
pub const DEFAULT_FIXED_FEES: f64 = 2.0;

/// Bank terms applied to every draft of a bordereau.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BordereauTerms {
    /// Commission as a decimal fraction of face value.
    pub commission_rate: f64,
    /// Fixed fee charged per draft.
    pub fixed_fees: f64,
}

impl Default for BordereauTerms {
    fn default() -> Self {
        Self {
            commission_rate: DEFAULT_COMMISSION_RATE,
            fixed_fees: DEFAULT_FIXED_FEES,
        }
    }
}

/// Pricing of one draft in a bordereau.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResult {
    /// 1-based position in the bordereau.
    pub number: usize,
    /// Nominal value of the draft.
    pub face_value: f64,
    /// Days to maturity.
    pub days: i64,
    /// Commercial discount (ACT/360).
    pub discount: f64,
    /// Commission on face value.
    pub commission: f64,
    /// Fixed fee.
    pub fixed_fees: f64,
    /// Discount plus commission plus fixed fee.
    pub total_fees: f64,
    /// Face value less total fees.
    pub net_proceeds: f64,
}

/// Column totals of a bordereau.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BordereauTotals {
    /// Sum of face values.
    pub face_value: f64,
    /// Sum of discounts.
    pub discount: f64,
    /// Sum of commissions.
    pub commission: f64,
    /// Sum of fixed fees.
    pub fixed_fees: f64,
    /// Sum of total fees.
    pub total_fees: f64,
    /// Sum of net proceeds.
    pub net_proceeds: f64,
}

impl BordereauTotals {
    fn add(mut self, row: &DiscountResult) -> Self {
        self.face_value += row.face_value;
        self.discount += row.discount;
        self.commission += row.commission;
        self.fixed_fees += row.fixed_fees;
        self.total_fees += row.total_fees;
        self.net_proceeds += row.net_proceeds;
        self
    }

    fn rounded(self) -> Self {
        Self {
            face_value: round_cents(self.face_value),
            discount: round_cents(self.discount),
            commission: round_cents(self.commission),
            fixed_fees: round_cents(self.fixed_fees),
            total_fees: round_cents(self.total_fees),
            net_proceeds: round_cents(self.net_proceeds),
        }
    }
}

/// A complete discount statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bordereau {
    /// One line per draft, in input order.
    pub effects: Vec<DiscountResult>,
    /// Column totals.
    pub totals: BordereauTotals,
    /// Annual discount rate applied.
    pub rate_used: Rate,
    /// Number of drafts.
    pub count: usize,
}

fn price_effect(number: usize, effect: &DraftEffect, rate: Rate, terms: BordereauTerms) -> DiscountResult {
    let discount = commercial_discount(effect.face_value, rate, effect.days_to_maturity);
    let commission = effect.face_value * terms.commission_rate;
    let total_fees = discount + commission + terms.fixed_fees;

    DiscountResult {
        number,
        face_value: effect.face_value,
        days: effect.days_to_maturity,
        discount: round_cents(discount),
        commission: round_cents(commission),
        fixed_fees: terms.fixed_fees,
        total_fees: round_cents(total_fees),
        net_proceeds: round_cents(effect.face_value - total_fees),
    }
}

/// Prices every draft at `annual_rate` under `terms` and totals the columns.
///
/// An empty slice yields an empty bordereau with zero totals.
///
/// # Example
///
/// ```rust
/// use finsim_core::Rate;
/// use finsim_discount::{discount_bordereau, BordereauTerms, DraftEffect};
///
/// let bordereau = discount_bordereau(
///     &[DraftEffect::new(10_000.0, 90)],
///     Rate::new(0.05),
///     BordereauTerms::default(),
/// );
/// assert_eq!(bordereau.totals.net_proceeds, 9813.0);
/// ```
#[must_use]
pub fn discount_bordereau(effects: &[DraftEffect], annual_rate: Rate, terms: BordereauTerms) -> Bordereau {
    let rows: Vec<DiscountResult> = effects
        .iter()
        .enumerate()
        .map(|(i, effect)| price_effect(i + 1, effect, annual_rate, terms))
        .collect();

    let totals = rows
        .iter()
        .fold(BordereauTotals::default(), BordereauTotals::add)
        .rounded();

    debug!(
        "bordereau: {} drafts at {}, net proceeds {}",
        rows.len(),
        annual_rate,
        totals.net_proceeds
    );

    Bordereau {
        count: rows.len(),
        effects: rows,
        totals,
        rate_used: annual_rate,
    }
}
