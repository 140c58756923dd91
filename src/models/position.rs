use crate::config::Config;
use serde::Serialize;
use std::fmt;

/// Coarse geolocation attached to every job event.
///
/// Coordinates are simulated and come from the configuration file; real
/// device geolocation is out of scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The position the console will log, as configured.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            latitude: cfg.latitude,
            longitude: cfg.longitude,
        }
    }

    /// Latitude in the shortest round-trip form used by the history file.
    pub fn lat_str(&self) -> String {
        self.latitude.to_string()
    }

    /// Longitude in the shortest round-trip form used by the history file.
    pub fn lon_str(&self) -> String {
        self.longitude.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
