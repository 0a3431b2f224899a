//! End-to-end bond issue scenarios.

use approx::assert_abs_diff_eq;
use finsim_bonds::{bond_issuance_summary, bond_service_table, BondIssue};
use finsim_core::Rate;

#[test]
fn service_totals_match_cost() {
    let issue = BondIssue::new(2_000_000.0, 500.0, Rate::from_percent(6.0))
        .with_issue_price(490.0)
        .with_redemption_price(510.0);
    let summary = bond_issuance_summary(&issue);
    let service = bond_service_table(&issue, 8);

    let paid: f64 = service.rows.iter().map(|r| r.total).sum();
    assert_abs_diff_eq!(paid - summary.proceeds, service.total_cost, epsilon = 0.01);
    assert!(service.yield_rate > 6.0);
}

#[test]
fn only_final_year_redeems() {
    let service = bond_service_table(&BondIssue::default(), 3);

    let redeeming: Vec<u32> = service
        .rows
        .iter()
        .filter(|r| r.redemption != 0.0)
        .map(|r| r.year)
        .collect();
    assert_eq!(redeeming, vec![3]);
}

#[test]
fn service_rows_serialize_with_identical_keys() {
    let service = bond_service_table(&BondIssue::default(), 2);
    let json = serde_json::to_value(&service).unwrap();

    let keys = |v: &serde_json::Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys(&json["rows"][0]), keys(&json["rows"][1]));
    assert_eq!(json["yield_rate"], 5.31);
}

#[test]
fn sub_cent_coupons_round_once() {
    let issue = BondIssue::new(1_000_001.0, 100.0, Rate::from_percent(5.123)).with_issue_price(98.0);
    let summary = bond_issuance_summary(&issue);
    let service = bond_service_table(&issue, 10);

    // Rebuilding the cost from the cent-rounded summary drifts by a cent
    let from_summary = summary.aggregate_coupon * 10.0 + summary.redemption_amount - summary.proceeds;
    assert_abs_diff_eq!(from_summary, 532_300.52, epsilon = 1e-6);
    assert_eq!(service.total_cost, 532_300.53);
}
