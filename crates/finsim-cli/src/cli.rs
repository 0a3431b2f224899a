//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{
    AgiosArgs, BondArgs, ConfigArgs, DiscountArgs, LoanArgs, PortfolioArgs, PrepayArgs,
    SavingsArgs, SimpleArgs,
};

/// Finsim - Savings, loans, discounting, bonds and portfolio simulations
#[derive(Parser)]
#[command(name = "finsim")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the configuration file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "FINSIM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log engine diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Simple interest and future value
    Simple(SimpleArgs),

    /// Year-by-year growth of savings with monthly contributions
    Savings(SavingsArgs),

    /// Overdraft interest and commission (agios)
    Agios(AgiosArgs),

    /// Commercial discount bordereau for one or more drafts
    Discount(DiscountArgs),

    /// Loan amortization schedule and total cost
    Loan(LoanArgs),

    /// Effect of a partial early repayment on the monthly payment
    Prepay(PrepayArgs),

    /// Bond issuance characteristics and service table
    Bond(BondArgs),

    /// Portfolio statistics, efficient frontier and optimal allocation
    Portfolio(PortfolioArgs),

    /// Inspect the configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}
