//! Property tests for cent rounding and day-count accrual.

use finsim_core::daycounts::{Act360, Act365Fixed, DayCount};
use finsim_core::types::{round_cents, Date};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rounding_is_idempotent(x in -1.0e9f64..1.0e9) {
        let once = round_cents(x);
        prop_assert_eq!(round_cents(once), once);
    }

    #[test]
    fn rounding_moves_at_most_half_a_cent(x in -1.0e7f64..1.0e7) {
        prop_assert!((round_cents(x) - x).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn commercial_year_accrues_more_than_civil_year(
        amount in 1.0f64..1.0e7,
        rate in 0.0001f64..0.5,
        days in 1i64..3650,
    ) {
        prop_assert!(Act360.accrue(amount, rate, days) > Act365Fixed.accrue(amount, rate, days));
    }

    #[test]
    fn day_count_is_antisymmetric(
        (m1, d1) in (1u32..=12, 1u32..=28),
        (m2, d2) in (1u32..=12, 1u32..=28),
    ) {
        let start = Date::from_ymd(2025, m1, d1).unwrap();
        let end = Date::from_ymd(2026, m2, d2).unwrap();
        let forward = Act360.day_count(start, end);

        prop_assert!(forward > 0);
        prop_assert_eq!(Act365Fixed.day_count(end, start), -forward);
    }
}
