//! Ecliptic coordinates and angle helpers

pub mod angle;

pub use angle::{signed_difference, wrap_180, wrap_degrees};

use serde::{Deserialize, Serialize};

/// Geocentric ecliptic position of a body
///
/// Longitude and latitude are in degrees; longitude is always in `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    pub longitude: f64,
    pub latitude: f64,
}

impl EclipticPosition {
    /// Create a position, normalizing the longitude
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude: wrap_degrees(longitude),
            latitude,
        }
    }

    /// The same position shifted into the sidereal zodiac
    pub fn sidereal(&self, ayanamsa_deg: f64) -> Self {
        Self::new(self.longitude - ayanamsa_deg, self.latitude)
    }
}
