//! Numeric input coercion for console fields.

use crate::errors::{AppError, AppResult};

/// Coerce a raw input string into an `f64`.
///
/// This is the whole validation story for calculator inputs: anything
/// that parses to a finite number is accepted, everything else is an
/// invalid-number error. Domain checks (negative airflow, implausible
/// ΔT) live with the calculators.
pub fn parse_number(raw: &str) -> AppResult<f64> {
    let cleaned = raw.trim();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| AppError::InvalidNumber(cleaned.to_string()))?;

    if !value.is_finite() {
        return Err(AppError::InvalidNumber(cleaned.to_string()));
    }

    Ok(value)
}
