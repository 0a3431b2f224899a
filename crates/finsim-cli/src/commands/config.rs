//! Config command implementation.

use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::cli::OutputFormat;
use crate::config::CliConfig;
use crate::output::{print_json, print_summary, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,
}

/// Execute the config command.
pub fn execute(
    args: ConfigArgs,
    format: OutputFormat,
    config: &CliConfig,
    explicit: Option<&Path>,
) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(config, format),
        ConfigCommand::Path => execute_path(explicit, format),
    }
}

fn execute_show(config: &CliConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(config)?,
        OutputFormat::Table => {
            let format_name = match config.format {
                OutputFormat::Table => "table",
                OutputFormat::Json => "json",
            };
            print_summary(
                "Current Configuration",
                &[
                    KeyValue::new("format", format_name),
                    KeyValue::new("currency", config.currency.as_str()),
                    KeyValue::new("discount_commission_rate", config.discount_commission_rate.to_string()),
                    KeyValue::new("discount_fixed_fees", config.discount_fixed_fees.to_string()),
                    KeyValue::new("overdraft_commission_rate", config.overdraft_commission_rate.to_string()),
                    KeyValue::new("risk_free_rate", config.risk_free_rate.to_string()),
                    KeyValue::new("frontier_points", config.frontier_points.to_string()),
                ],
            );
        }
    }
    Ok(())
}

fn execute_path(explicit: Option<&Path>, format: OutputFormat) -> Result<()> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(CliConfig::default_path)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    let exists = path.exists();

    match format {
        OutputFormat::Json => print_json(&json!({ "path": path, "exists": exists }))?,
        OutputFormat::Table => {
            let status = if exists { "exists" } else { "not created yet (using defaults)" };
            print_summary(
                "Configuration File",
                &[
                    KeyValue::new("Path", path.display().to_string()),
                    KeyValue::new("Status", status),
                ],
            );
        }
    }
    Ok(())
}
