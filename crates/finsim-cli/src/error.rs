//! CLI error types.

use finsim::portfolio::PortfolioError;
use finsim::FinsimError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Malformed `--effect` value.
    #[error("Invalid effect '{0}'. Use FACE:DAYS, e.g. 5000:60.")]
    InvalidEffect(String),

    /// Malformed `--draft` value.
    #[error("Invalid draft '{0}'. Use FACE:CREATED:MATURITY, e.g. 5000:2025-01-15:2025-03-16.")]
    InvalidDraft(String),

    /// Malformed `--asset` value.
    #[error("Invalid asset '{0}'. Use NAME:RETURN:VOLATILITY:WEIGHT in percent, e.g. Equities:10:20:60.")]
    InvalidAsset(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Rejected input value.
    #[error(transparent)]
    Input(#[from] FinsimError),

    /// Inconsistent portfolio inputs.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
