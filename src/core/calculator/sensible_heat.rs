//! HVAC sensible heat: BTU/h from airflow and temperature differential.

use crate::errors::{AppError, AppResult};

/// Standard-air factor of the sensible heat formula, valid for standard
/// air density and specific heat.
pub const AIR_FACTOR: f64 = 1.08;

/// `BTU/h = 1.08 × CFM × ΔT`.
///
/// Total over all finite inputs: negative airflow or ΔT produce a
/// negative result here. Domain checks live with the input layer, not
/// the formula.
pub fn sensible_heat_btuh(cfm: f64, delta_t: f64) -> f64 {
    AIR_FACTOR * cfm * delta_t
}

/// Reject physically meaningless airflow before it reaches the state.
pub fn validate_airflow(cfm: f64) -> AppResult<()> {
    if cfm < 0.0 {
        return Err(AppError::InvalidAirflow(format!(
            "airflow cannot be negative (got {cfm} CFM)"
        )));
    }
    Ok(())
}

/// A ΔT far outside normal duct measurements is usually a typo. The
/// console accepts it but warns.
pub fn delta_t_plausible(delta_t: f64, max_delta_t: f64) -> bool {
    delta_t.abs() <= max_delta_t
}
