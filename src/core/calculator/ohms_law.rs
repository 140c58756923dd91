//! Ohm's law: power and resistance derived from voltage and current.

/// Derived electrical readings for a voltage/current pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerReading {
    pub watts: f64,
    pub ohms: f64,
}

/// Compute power (W = V × A) and resistance (Ω = V / A).
///
/// Returns `None` when `amps <= 0`: with no current flowing there is
/// nothing to derive, and the resistance division is undefined.
pub fn power_and_resistance(volts: f64, amps: f64) -> Option<PowerReading> {
    if amps > 0.0 {
        Some(PowerReading {
            watts: volts * amps,
            ohms: volts / amps,
        })
    } else {
        None
    }
}
