//! Overdraft agios command.

use anyhow::Result;
use clap::Args;
use finsim::interest::overdraft_agios_with_commission;
use finsim::validation::ensure_non_negative;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount};
use crate::config::CliConfig;
use crate::output::{print_json, print_summary, KeyValue};

/// Arguments for the agios command.
#[derive(Args, Debug)]
pub struct AgiosArgs {
    /// Overdrawn amount
    #[arg(long)]
    pub amount: f64,

    /// Annual debit rate in percent
    #[arg(long)]
    pub rate: f64,

    /// Days overdrawn
    #[arg(long)]
    pub days: i64,

    /// Commission in percent of the amount (defaults to the configured rate)
    #[arg(long)]
    pub commission: Option<f64>,
}

/// Execute the agios command.
pub fn execute(args: AgiosArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let amount = validate_amount("amount", args.amount)?;
    let rate = parse_rate("rate", args.rate)?;
    ensure_non_negative("days", args.days as f64)?;
    let commission_rate = match args.commission {
        Some(percent) => parse_rate("commission", percent)?.value(),
        None => config.overdraft_commission_rate,
    };

    let agios = overdraft_agios_with_commission(amount, rate, args.days, commission_rate);

    match format {
        OutputFormat::Json => print_json(&agios)?,
        OutputFormat::Table => {
            let currency = &config.currency;
            print_summary(
                "Overdraft Agios",
                &[
                    KeyValue::amount("Amount", amount, currency),
                    KeyValue::percent("Rate", rate.as_percent()),
                    KeyValue::new("Days", args.days.to_string()),
                    KeyValue::amount("Interest (ACT/365)", agios.interest, currency),
                    KeyValue::amount("Commission", agios.commission, currency),
                    KeyValue::amount("Total agios", agios.total, currency),
                ],
            );
        }
    }

    Ok(())
}
