//! Simple interest command.

use anyhow::Result;
use clap::Args;
use finsim::interest::{future_value_simple, required_principal, simple_interest};
use finsim::{round_cents, validation::ensure_non_negative, Rate};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount};
use crate::config::CliConfig;
use crate::output::{print_json, print_summary, KeyValue};

/// Arguments for the simple command.
#[derive(Args, Debug)]
pub struct SimpleArgs {
    /// Invested principal
    #[arg(long)]
    pub principal: f64,

    /// Annual rate in percent (e.g. 5 for 5%)
    #[arg(long)]
    pub rate: f64,

    /// Duration in years (fractions allowed)
    #[arg(long)]
    pub years: f64,

    /// Also compute the principal needed to reach this amount
    #[arg(long)]
    pub target: Option<f64>,
}

/// Simple interest result.
#[derive(Debug, Serialize)]
pub struct SimpleInterestReport {
    pub principal: f64,
    pub rate: Rate,
    pub years: f64,
    pub interest: f64,
    pub future_value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_principal: Option<f64>,
}

/// Execute the simple command.
pub fn execute(args: SimpleArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let principal = validate_amount("principal", args.principal)?;
    let rate = parse_rate("rate", args.rate)?;
    let years = ensure_non_negative("years", args.years)?;

    let report = SimpleInterestReport {
        principal,
        rate,
        years,
        interest: round_cents(simple_interest(principal, rate, years)),
        future_value: round_cents(future_value_simple(principal, rate, years)),
        required_principal: args
            .target
            .map(|target| round_cents(required_principal(target, rate, years))),
    };

    match format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Table => {
            let currency = &config.currency;
            let mut rows = vec![
                KeyValue::amount("Principal", report.principal, currency),
                KeyValue::percent("Rate", rate.as_percent()),
                KeyValue::new("Years", report.years.to_string()),
                KeyValue::amount("Interest", report.interest, currency),
                KeyValue::amount("Future value", report.future_value, currency),
            ];
            if let (Some(target), Some(needed)) = (args.target, report.required_principal) {
                rows.push(KeyValue::amount(format!("Principal for {target:.2}"), needed, currency));
            }
            print_summary("Simple Interest", &rows);
        }
    }

    Ok(())
}
