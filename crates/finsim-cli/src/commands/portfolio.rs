//! Portfolio command.

use anyhow::Result;
use clap::Args;
use finsim::portfolio::{
    efficient_frontier, optimize_two_asset_portfolio, portfolio_statistics, validate_weights, Asset,
    CorrelationMatrix, FrontierPoint, OptimalAllocation, PortfolioStats,
};
use finsim::validation::{ensure_finite, ensure_in_range, ensure_non_negative};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::parse_rate;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::{print_header, print_json, print_summary, print_table, print_warning, KeyValue};

/// Arguments for the portfolio command.
#[derive(Args, Debug)]
pub struct PortfolioArgs {
    /// Asset as NAME:RETURN:VOLATILITY:WEIGHT in percent (repeatable).
    /// Defaults to Equities:10:20:60 and Bonds:4:5:40.
    #[arg(long = "asset", value_name = "NAME:RETURN:VOL:WEIGHT", value_parser = parse_asset)]
    pub assets: Vec<Asset>,

    /// Correlation applied to every pair of assets
    #[arg(long, default_value = "0.3", allow_hyphen_values = true)]
    pub correlation: f64,

    /// Risk-free rate in percent (defaults to the configured rate)
    #[arg(long)]
    pub risk_free: Option<f64>,

    /// Frontier sampling steps (defaults to the configured count)
    #[arg(long)]
    pub points: Option<usize>,

    /// Skip the efficient frontier table
    #[arg(long)]
    pub no_frontier: bool,
}

/// Parses `NAME:RETURN:VOLATILITY:WEIGHT` with percentages.
pub fn parse_asset(s: &str) -> CliResult<Asset> {
    let invalid = || CliError::InvalidAsset(s.to_string());
    let parts: Vec<&str> = s.split(':').collect();
    let [name, expected, volatility, weight] = parts.as_slice() else {
        return Err(invalid());
    };
    let percent = |v: &str| v.trim().parse::<f64>().map(|p| p / 100.0).map_err(|_| invalid());

    Ok(Asset::new(name.trim(), percent(*expected)?, percent(*volatility)?)
        .with_weight(percent(*weight)?))
}

fn default_assets() -> Vec<Asset> {
    vec![
        Asset::new("Equities", 0.10, 0.20).with_weight(0.6),
        Asset::new("Bonds", 0.04, 0.05).with_weight(0.4),
    ]
}

fn constant_correlation(n: usize, rho: f64) -> CliResult<CorrelationMatrix> {
    let rows: Vec<Vec<f64>> = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { rho }).collect())
        .collect();
    Ok(CorrelationMatrix::from_rows(&rows)?)
}

/// Portfolio analysis result.
#[derive(Debug, Serialize)]
pub struct PortfolioReport {
    pub assets: Vec<Asset>,
    pub correlation: f64,
    pub stats: PortfolioStats,
    pub optimal: OptimalAllocation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frontier: Vec<FrontierPoint>,
}

#[derive(Tabled)]
struct FrontierRow {
    #[tabled(rename = "Weight 1")]
    weight1: String,
    #[tabled(rename = "Weight 2")]
    weight2: String,
    #[tabled(rename = "Return")]
    expected_return: String,
    #[tabled(rename = "Volatility")]
    volatility: String,
}

impl From<&FrontierPoint> for FrontierRow {
    fn from(point: &FrontierPoint) -> Self {
        Self {
            weight1: format!("{:.1}%", point.weights[0] * 100.0),
            weight2: format!("{:.1}%", point.weights[1] * 100.0),
            expected_return: format!("{:.2}%", point.expected_return),
            volatility: format!("{:.2}%", point.volatility),
        }
    }
}

/// Execute the portfolio command.
pub fn execute(args: PortfolioArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let assets = if args.assets.is_empty() {
        default_assets()
    } else {
        args.assets
    };
    if assets.len() < 2 {
        return Err(CliError::MissingArgument("at least two --asset values".into()).into());
    }
    for asset in &assets {
        ensure_finite("expected return", asset.expected_return)?;
        ensure_non_negative("volatility", asset.volatility)?;
        ensure_finite("weight", asset.weight)?;
    }
    let rho = ensure_in_range("correlation", args.correlation, -1.0, 1.0)?;
    let risk_free = match args.risk_free {
        Some(percent) => parse_rate("risk-free rate", percent)?.value(),
        None => config.risk_free_rate,
    };

    if !validate_weights(&assets) {
        let total: f64 = assets.iter().map(|a| a.weight * 100.0).sum();
        print_warning(&format!("Weights sum to {total:.2}%, not 100%"));
    }

    let correlation = constant_correlation(assets.len(), rho)?;
    let stats = portfolio_statistics(&assets, &correlation, risk_free)?;
    let optimal = optimize_two_asset_portfolio(&assets[0], &assets[1], rho, risk_free);
    let frontier = if args.no_frontier {
        Vec::new()
    } else {
        efficient_frontier(&assets, &correlation, args.points.unwrap_or(config.frontier_points))?
    };

    let report = PortfolioReport {
        assets,
        correlation: rho,
        stats,
        optimal,
        frontier,
    };

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            print_summary(
                "Current Portfolio",
                &[
                    KeyValue::percent("Expected return", report.stats.expected_return),
                    KeyValue::percent("Volatility", report.stats.volatility),
                    KeyValue::new("Sharpe ratio", format!("{:.2}", report.stats.sharpe_ratio)),
                    KeyValue::percent("Risk-free rate", report.stats.risk_free_rate),
                ],
            );

            let (first, second) = (&report.assets[0].name, &report.assets[1].name);
            print_summary(
                "Optimal Allocation",
                &[
                    KeyValue::new(first.as_str(), format!("{:.0}%", report.optimal.weight1)),
                    KeyValue::new(second.as_str(), format!("{:.0}%", report.optimal.weight2)),
                    KeyValue::percent("Expected return", report.optimal.expected_return),
                    KeyValue::percent("Volatility", report.optimal.volatility),
                    KeyValue::new("Sharpe ratio", format!("{:.2}", report.optimal.sharpe_ratio)),
                ],
            );

            if !report.frontier.is_empty() {
                let rows: Vec<FrontierRow> = report.frontier.iter().map(FrontierRow::from).collect();
                print_header(&format!("Efficient Frontier ({first} / {second})"));
                print_table(&rows);
            }
        }
    }

    Ok(())
}
