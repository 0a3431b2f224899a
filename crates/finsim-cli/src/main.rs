//! Finsim CLI - Command-line front end for the Finsim financial simulation engines.
//!
//! # Usage
//!
//! ```bash
//! # Monthly payment and schedule of a 20-year loan at 3.5%
//! finsim loan --principal 200000 --rate 3.5 --years 20
//!
//! # Discount two drafts at 5%
//! finsim discount --rate 5 --effect 5000:60 --effect 10000:90
//!
//! # Optimal split between equities and bonds, as JSON
//! finsim --format json portfolio
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;
mod error;
mod output;

use cli::{Cli, Commands};
use config::CliConfig;

fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else if quiet {
        "error".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    debug!(?format, currency = %config.currency, "configuration loaded");

    match cli.command {
        Commands::Simple(args) => commands::simple::execute(args, format, &config)?,
        Commands::Savings(args) => commands::savings::execute(args, format, &config)?,
        Commands::Agios(args) => commands::agios::execute(args, format, &config)?,
        Commands::Discount(args) => commands::discount::execute(args, format, &config)?,
        Commands::Loan(args) => commands::loan::execute(args, format, &config)?,
        Commands::Prepay(args) => commands::prepay::execute(args, format, &config)?,
        Commands::Bond(args) => commands::bond::execute(args, format, &config)?,
        Commands::Portfolio(args) => commands::portfolio::execute(args, format, &config)?,
        Commands::Config(args) => commands::config::execute(args, format, &config, cli.config.as_deref())?,
    }

    Ok(())
}
