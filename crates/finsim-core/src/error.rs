//! Error types for the Finsim library.
//!
//! Engines are infallible over numeric input; these errors come from
//! building typed inputs (dates) and from the optional validation layer.

use thiserror::Error;

/// A specialized Result type for Finsim operations.
pub type FinsimResult<T> = Result<T, FinsimError>;

/// The main error type for Finsim operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinsimError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A caller-supplied value was rejected by validation.
    #[error("Invalid {field}: {value} - {reason}")]
    InvalidInput {
        /// Name of the offending input.
        field: String,
        /// The rejected value.
        value: f64,
        /// Reason for rejection.
        reason: String,
    },
}

impl FinsimError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            value,
            reason: reason.into(),
        }
    }
}
