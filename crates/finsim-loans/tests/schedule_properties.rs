//! Scenario and property tests for the amortization engine.

use approx::assert_abs_diff_eq;
use finsim_core::Rate;
use finsim_loans::{
    bullet_schedule, constant_annuity_payment, generate_schedule, total_cost, AmortizationType,
};
use proptest::prelude::*;

const KINDS: [AmortizationType; 3] = [
    AmortizationType::ConstantAnnuity,
    AmortizationType::ConstantPrincipal,
    AmortizationType::Bullet,
];

#[test]
fn scenario_annuity_payment() {
    let payment = constant_annuity_payment(200_000.0, Rate::new(0.035), 20);
    assert_abs_diff_eq!(payment, 1159.93, epsilon = 0.011);
}

#[test]
fn rows_serialize_with_identical_keys() {
    let schedule = generate_schedule(AmortizationType::ConstantPrincipal, 5000.0, Rate::new(0.05), 1);
    let first = serde_json::to_value(&schedule[0]).unwrap();
    let last = serde_json::to_value(&schedule[11]).unwrap();

    let keys = |v: &serde_json::Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys(&first), keys(&last));
}

proptest! {
    #[test]
    fn payment_is_interest_plus_principal(
        principal in 1_000.0f64..1_000_000.0,
        rate in 0.0f64..0.15,
        years in 1u32..30,
        kind in 0usize..3,
    ) {
        let schedule = generate_schedule(KINDS[kind], principal, Rate::new(rate), years);
        for row in &schedule {
            prop_assert!((row.payment - (row.interest + row.principal_portion)).abs() <= 0.011);
        }
    }

    #[test]
    fn last_row_closes_at_zero(
        principal in 1_000.0f64..1_000_000.0,
        rate in 0.0f64..0.15,
        years in 1u32..30,
        kind in 0usize..3,
    ) {
        let schedule = generate_schedule(KINDS[kind], principal, Rate::new(rate), years);
        prop_assert_eq!(schedule.len() as u32, years * 12);
        prop_assert_eq!(schedule.last().unwrap().closing_balance, 0.0);
    }

    #[test]
    fn principal_borrowed_matches_input(
        principal in 1_000.0f64..1_000_000.0,
        rate in 0.0f64..0.15,
        years in 1u32..30,
        kind in 0usize..3,
    ) {
        let schedule = generate_schedule(KINDS[kind], principal, Rate::new(rate), years);
        let cost = total_cost(&schedule);
        prop_assert!((cost.principal_borrowed - principal).abs() <= 0.005 + 1e-9);
    }

    #[test]
    fn bullet_interest_is_flat(
        principal in 1_000.0f64..1_000_000.0,
        rate in 0.0f64..0.15,
        years in 1u32..30,
    ) {
        let rate = Rate::new(rate);
        let schedule = bullet_schedule(principal, rate, years);
        let expected = finsim_core::round_cents(principal * rate.monthly());
        let (last, rest) = schedule.split_last().unwrap();

        for row in rest {
            prop_assert_eq!(row.interest, expected);
            prop_assert_eq!(row.principal_portion, 0.0);
        }
        prop_assert_eq!(last.interest, expected);
        prop_assert_eq!(last.principal_portion, finsim_core::round_cents(principal));
    }
}
