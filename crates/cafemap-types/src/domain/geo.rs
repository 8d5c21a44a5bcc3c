use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both axes are finite numbers (NaN and infinities are rejected at ingestion)
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Default map center when no other focus point applies (Guadalajara)
pub const DEFAULT_MAP_CENTER: Coordinates = Coordinates {
    latitude: 20.6736,
    longitude: -103.405,
};

/// Parse a "LAT,LNG" pair as passed on the command line or stored in config
pub fn parse_coordinates(s: &str) -> Result<Coordinates, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG but got '{}'", s))?;

    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lng
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lng.trim()))?;

    let coordinates = Coordinates::new(latitude, longitude);
    if !coordinates.is_finite() {
        return Err(format!("coordinates must be finite, got '{}'", s));
    }

    Ok(coordinates)
}
