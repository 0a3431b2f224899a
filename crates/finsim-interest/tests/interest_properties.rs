//! Scenario and property tests for the simple interest engine.

use approx::assert_relative_eq;
use finsim_core::Rate;
use finsim_interest::{
    future_value_simple, overdraft_agios, savings_schedule, savings_with_contributions,
    simple_interest, SavingsCompounding,
};
use proptest::prelude::*;

#[test]
fn scenario_simple_interest() {
    assert_eq!(simple_interest(1000.0, Rate::new(0.05), 2.0), 100.0);
}

#[test]
fn scenario_overdraft_agios() {
    let agios = overdraft_agios(1000.0, Rate::new(0.12), 30);
    assert_relative_eq!(agios.interest, 9.86);
    assert_eq!(agios.commission, 0.5);
    assert_relative_eq!(agios.total, 10.36);
}

#[test]
fn savings_rows_serialize_with_identical_keys() {
    let rows = savings_with_contributions(5000.0, 200.0, Rate::new(0.03), 3);
    let keys: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            let value = serde_json::to_value(r).unwrap();
            value.as_object().unwrap().keys().cloned().collect()
        })
        .collect();

    assert!(keys.windows(2).all(|w| w[0] == w[1]));
    assert!(keys[0].contains(&"closing_balance".to_string()));
}

proptest! {
    #[test]
    fn future_value_is_principal_plus_interest(
        principal in 0.0f64..1.0e7,
        rate in 0.0f64..0.5,
        years in 0.0f64..50.0,
    ) {
        let rate = Rate::new(rate);
        let fv = future_value_simple(principal, rate, years);
        let expected = principal + simple_interest(principal, rate, years);
        prop_assert!((fv - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn savings_balances_never_shrink_with_non_negative_inputs(
        initial in 0.0f64..1.0e6,
        monthly in 0.0f64..5000.0,
        rate in 0.0f64..0.2,
        years in 1u32..40,
    ) {
        for compounding in [SavingsCompounding::Monthly, SavingsCompounding::Annual] {
            let rows = savings_schedule(initial, monthly, Rate::new(rate), years, compounding);
            prop_assert_eq!(rows.len(), years as usize + 1);
            for pair in rows.windows(2) {
                prop_assert!(pair[1].closing_balance >= pair[0].closing_balance);
            }
        }
    }

    #[test]
    fn savings_contributions_are_twelve_deposits(
        monthly in 0.0f64..5000.0,
        years in 1u32..10,
    ) {
        let rows = savings_with_contributions(1000.0, monthly, Rate::new(0.02), years);
        for row in rows.iter().skip(1) {
            prop_assert!((row.contributions - monthly * 12.0).abs() <= 0.01);
        }
    }
}
