//! Error types for portfolio analytics.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur when combining assets with a correlation matrix.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The correlation matrix is malformed.
    #[error("Invalid correlation matrix: {reason}")]
    InvalidCorrelation {
        /// What is wrong with the matrix.
        reason: String,
    },

    /// The matrix size does not match the number of assets.
    #[error("Dimension mismatch: {assets} assets but a {matrix}x{matrix} correlation matrix")]
    DimensionMismatch {
        /// Number of assets supplied.
        assets: usize,
        /// Dimension of the correlation matrix.
        matrix: usize,
    },
}

impl PortfolioError {
    /// Creates an invalid correlation error.
    #[must_use]
    pub fn invalid_correlation(reason: impl Into<String>) -> Self {
        Self::InvalidCorrelation {
            reason: reason.into(),
        }
    }

    /// Creates a dimension mismatch error.
    #[must_use]
    pub fn dimension_mismatch(assets: usize, matrix: usize) -> Self {
        Self::DimensionMismatch { assets, matrix }
    }
}
