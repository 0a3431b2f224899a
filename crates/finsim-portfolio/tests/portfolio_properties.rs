//! Scenario and property tests for the portfolio engine.

use finsim_portfolio::prelude::*;
use finsim_portfolio::{validate_weights, OptimalAllocation};
use proptest::prelude::*;

fn reference_pair() -> (Asset, Asset) {
    (Asset::new("Equities", 0.10, 0.20), Asset::new("Bonds", 0.04, 0.05))
}

#[test]
fn scenario_optimizer_beats_sixty_forty() {
    let (equities, bonds) = reference_pair();
    let best: OptimalAllocation = optimize_two_asset_portfolio(&equities, &bonds, 0.3, 0.02);

    let default_mix = [equities.with_weight(0.6), bonds.with_weight(0.4)];
    let rho = CorrelationMatrix::two_asset(0.3).unwrap();
    let stats = portfolio_statistics(&default_mix, &rho, 0.02).unwrap();

    assert_eq!(best.weight1 + best.weight2, 100.0);
    assert!(best.sharpe_ratio >= stats.sharpe_ratio);
}

#[test]
fn frontier_spans_both_assets() {
    let (equities, bonds) = reference_pair();
    let rho = CorrelationMatrix::two_asset(0.3).unwrap();
    let points = efficient_frontier(&[equities, bonds], &rho, 30).unwrap();

    assert_eq!(points.len(), 31);
    assert_eq!(points.first().unwrap().expected_return, 4.0);
    assert_eq!(points.last().unwrap().expected_return, 10.0);
    for pair in points.windows(2) {
        assert!(pair[1].expected_return >= pair[0].expected_return);
    }
}

#[test]
fn dimension_mismatch_is_an_error() {
    let (equities, bonds) = reference_pair();
    let assets = [equities.with_weight(0.5), bonds.with_weight(0.5)];
    let result = portfolio_statistics(&assets, &CorrelationMatrix::identity(1), 0.02);

    assert!(matches!(result, Err(PortfolioError::DimensionMismatch { assets: 2, matrix: 1 })));
}

#[test]
fn frontier_points_serialize_with_identical_keys() {
    let (equities, bonds) = reference_pair();
    let rho = CorrelationMatrix::two_asset(0.3).unwrap();
    let points = efficient_frontier(&[equities, bonds], &rho, 4).unwrap();
    let json = serde_json::to_value(&points).unwrap();
    let rows = json.as_array().unwrap();

    let keys = |v: &serde_json::Value| v.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    for row in rows {
        assert_eq!(keys(row), keys(&rows[0]));
        assert_eq!(row["weights"].as_array().unwrap().len(), 2);
    }
    assert!(keys(&rows[0]).contains(&"volatility".to_string()));
}

proptest! {
    #[test]
    fn single_asset_volatility_is_exact(sigma in 0.001f64..1.0, mu in -0.2f64..0.3) {
        let asset = [Asset::new("Solo", mu, sigma).with_weight(1.0)];
        let vol = portfolio_volatility(&asset, &CorrelationMatrix::identity(1)).unwrap();
        prop_assert_eq!(vol, sigma);
    }

    #[test]
    fn sharpe_is_zero_without_volatility(ret in -1.0f64..1.0, rf in 0.0f64..0.1) {
        prop_assert_eq!(sharpe_ratio(ret, rf, 0.0), 0.0);
    }

    #[test]
    fn optimizer_weights_sum_to_hundred(
        r1 in 0.0f64..0.2, s1 in 0.01f64..0.5,
        r2 in 0.0f64..0.2, s2 in 0.01f64..0.5,
        rho in -1.0f64..=1.0,
    ) {
        let best = optimize_two_asset_portfolio(
            &Asset::new("A", r1, s1),
            &Asset::new("B", r2, s2),
            rho,
            0.02,
        );
        prop_assert_eq!(best.weight1 + best.weight2, 100.0);
        prop_assert!((0.0..=100.0).contains(&best.weight1));
    }

    #[test]
    fn volatility_never_exceeds_weighted_sum(
        w in 0.0f64..=1.0,
        s1 in 0.01f64..0.5,
        s2 in 0.01f64..0.5,
        rho in -1.0f64..=1.0,
    ) {
        let assets = [
            Asset::new("A", 0.05, s1).with_weight(w),
            Asset::new("B", 0.05, s2).with_weight(1.0 - w),
        ];
        let vol = portfolio_volatility(&assets, &CorrelationMatrix::two_asset(rho).unwrap()).unwrap();
        prop_assert!(vol <= w * s1 + (1.0 - w) * s2 + 1e-12);
        prop_assert!(validate_weights(&assets));
    }
}
