//! CLI configuration.
//!
//! Read from `--config <path>` (or `FINSIM_CONFIG`), else from
//! `<config_dir>/finsim/config.toml` when it exists, else built-in defaults.
//! Missing keys take their default value.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Currency label printed next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Bordereau commission as a decimal fraction of face value
    #[serde(default = "default_discount_commission_rate")]
    pub discount_commission_rate: f64,

    /// Bordereau fixed fee per draft
    #[serde(default = "default_discount_fixed_fees")]
    pub discount_fixed_fees: f64,

    /// Overdraft commission as a decimal fraction of the amount
    #[serde(default = "default_overdraft_commission_rate")]
    pub overdraft_commission_rate: f64,

    /// Risk-free rate as a decimal fraction
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,

    /// Number of steps when sampling the efficient frontier
    #[serde(default = "default_frontier_points")]
    pub frontier_points: usize,
}

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_discount_commission_rate() -> f64 {
    finsim::discount::DEFAULT_COMMISSION_RATE
}

fn default_discount_fixed_fees() -> f64 {
    finsim::discount::DEFAULT_FIXED_FEES
}

fn default_overdraft_commission_rate() -> f64 {
    finsim::interest::OVERDRAFT_COMMISSION_RATE
}

fn default_risk_free_rate() -> f64 {
    0.02
}

fn default_frontier_points() -> usize {
    30
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            currency: default_currency(),
            discount_commission_rate: default_discount_commission_rate(),
            discount_fixed_fees: default_discount_fixed_fees(),
            overdraft_commission_rate: default_overdraft_commission_rate(),
            risk_free_rate: default_risk_free_rate(),
            frontier_points: default_frontier_points(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    /// Per-user configuration file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("finsim").join("config.toml"))
    }

    /// File that [`CliConfig::load`] reads, if any.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.exists()),
        }
    }

    /// Loads the effective configuration.
    ///
    /// An explicit path must exist; the per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        match Self::resolve_path(explicit) {
            Some(path) => {
                debug!(path = %path.display(), "reading configuration");
                Self::from_file(&path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.currency, "EUR");
        assert_eq!(config.discount_commission_rate, 0.006);
        assert_eq!(config.discount_fixed_fees, 2.0);
        assert_eq!(config.overdraft_commission_rate, 0.0005);
        assert_eq!(config.risk_free_rate, 0.02);
        assert_eq!(config.frontier_points, 30);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: CliConfig = toml::from_str("format = \"json\"\ncurrency = \"TND\"").unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.currency, "TND");
        assert_eq!(config.frontier_points, 30);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "risk_free_rate = 0.03").unwrap();

        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.risk_free_rate, 0.03);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = CliConfig::load(Some(Path::new("/nonexistent/finsim.toml"))).unwrap_err();
        assert!(err.to_string().contains("finsim.toml"));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frontier_points = \"many\"").unwrap();
        assert!(CliConfig::from_file(file.path()).is_err());
    }
}
