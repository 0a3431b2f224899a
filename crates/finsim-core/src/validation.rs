//! Optional input validation.
//!
//! The engines accept any number and never fail. Callers that collect user
//! input (forms, the CLI) run these checks first to reject values that
//! would only produce degenerate output.

use crate::error::{FinsimError, FinsimResult};

/// Rejects `NaN` and infinities.
pub fn ensure_finite(field: &str, value: f64) -> FinsimResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinsimError::invalid_input(field, value, "must be a finite number"))
    }
}

/// Rejects negative (and non-finite) values.
pub fn ensure_non_negative(field: &str, value: f64) -> FinsimResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(FinsimError::invalid_input(field, value, "must not be negative"));
    }
    Ok(value)
}

/// Rejects zero, negative and non-finite values.
pub fn ensure_positive(field: &str, value: f64) -> FinsimResult<f64> {
    let value = ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(FinsimError::invalid_input(field, value, "must be greater than zero"));
    }
    Ok(value)
}

/// Rejects values outside `[min, max]`.
pub fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> FinsimResult<f64> {
    let value = ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(FinsimError::invalid_input(
            field,
            value,
            format!("must be between {min} and {max}"),
        ));
    }
    Ok(value)
}
