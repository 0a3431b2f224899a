//! Early repayment command.

use anyhow::Result;
use clap::Args;
use finsim::loans::early_repayment;
use finsim::validation::ensure_positive;

use crate::cli::OutputFormat;
use crate::commands::{parse_rate, validate_amount};
use crate::config::CliConfig;
use crate::output::{print_json, print_summary, KeyValue};

/// Arguments for the prepay command.
#[derive(Args, Debug)]
pub struct PrepayArgs {
    /// Principal still outstanding
    #[arg(long)]
    pub remaining: f64,

    /// Amount repaid early
    #[arg(long)]
    pub amount: f64,

    /// Annual rate in percent
    #[arg(long)]
    pub rate: f64,

    /// Months left on the loan
    #[arg(long)]
    pub months: u32,
}

/// Execute the prepay command.
pub fn execute(args: PrepayArgs, format: OutputFormat, config: &CliConfig) -> Result<()> {
    let remaining = validate_amount("remaining", args.remaining)?;
    let amount = validate_amount("amount", args.amount)?;
    let rate = parse_rate("rate", args.rate)?;
    ensure_positive("months", f64::from(args.months))?;

    let result = early_repayment(remaining, amount, rate, args.months);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Table => {
            let currency = &config.currency;
            print_summary(
                "Early Repayment",
                &[
                    KeyValue::amount("New principal", result.new_principal, currency),
                    KeyValue::amount("Old payment", result.old_payment, currency),
                    KeyValue::amount("New payment", result.new_payment, currency),
                    KeyValue::new("Months remaining", args.months.to_string()),
                    KeyValue::amount("Total savings", result.total_savings, currency),
                ],
            );
        }
    }

    Ok(())
}
