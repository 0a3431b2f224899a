//! Savings command.

use anyhow::Result;
use clap::{Args, ValueEnum};
use finsim::interest::{savings_schedule, SavingsCompounding, SavingsYear};
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount, validate_years};
use crate::config::CliConfig;
use crate::output::{format_amount, print_header, print_json, print_summary, print_table, KeyValue};

/// Compounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Compounding {
    /// Interest compounds every month
    #[default]
    Monthly,
    /// Interest on the opening balance once a year
    Annual,
}

impl From<Compounding> for SavingsCompounding {
    fn from(value: Compounding) -> Self {
        match value {
            Compounding::Monthly => SavingsCompounding::Monthly,
            Compounding::Annual => SavingsCompounding::Annual,
        }
    }
}

/// Arguments for the savings command.
#[derive(Args, Debug)]
pub struct SavingsArgs {
    /// Initial capital
    #[arg(long, default_value = "0")]
    pub initial: f64,

    /// Monthly contribution
    #[arg(long, default_value = "0")]
    pub monthly: f64,

    /// Annual rate in percent
    #[arg(long)]
    pub rate: f64,

    /// Duration in years
    #[arg(long)]
    pub years: u32,

    /// Compounding rule
    #[arg(long, value_enum, default_value = "monthly")]
    pub compounding: Compounding,
}

#[derive(Tabled)]
struct SavingsRow {
    #[tabled(rename = "Year")]
    year: u32,
    #[tabled(rename = "Opening")]
    opening: String,
    #[tabled(rename = "Contributions")]
    contributions: String,
    #[tabled(rename = "Interest")]
    interest: String,
    #[tabled(rename = "Closing")]
    closing: String,
}

impl From<&SavingsYear> for SavingsRow {
    fn from(row: &SavingsYear) -> Self {
        Self {
            year: row.year,
            opening: format_amount(row.opening_balance),
            contributions: format_amount(row.contributions),
            interest: format_amount(row.interest),
            closing: format_amount(row.closing_balance),
        }
    }
}

/// Execute the savings command.
pub fn execute(args: SavingsArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let initial = validate_amount("initial", args.initial)?;
    let monthly = validate_amount("monthly", args.monthly)?;
    let rate = parse_rate("rate", args.rate)?;
    let years = validate_years(args.years)?;

    let schedule = savings_schedule(initial, monthly, rate, years, args.compounding.into());

    match format {
        OutputFormat::Json => print_json(&schedule)?,
        OutputFormat::Table => {
            let rows: Vec<SavingsRow> = schedule.iter().map(SavingsRow::from).collect();
            print_header("Savings Schedule");
            print_table(&rows);

            let contributed: f64 = schedule.iter().map(|r| r.contributions).sum();
            let earned: f64 = schedule.iter().map(|r| r.interest).sum();
            let final_balance = schedule.last().map_or(initial, |r| r.closing_balance);
            print_summary(
                "Summary",
                &[
                    KeyValue::amount("Total contributions", contributed, &config.currency),
                    KeyValue::amount("Total interest", earned, &config.currency),
                    KeyValue::amount("Final balance", final_balance, &config.currency),
                ],
            );
        }
    }

    Ok(())
}
