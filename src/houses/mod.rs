//! Ascendant (lagna) and whole-sign houses

use crate::constants::{DEG2RAD, RAD2DEG, SIGN_SPAN};
use crate::coordinates::wrap_degrees;
use crate::nutationlib::apparent_obliquity;
use crate::precessionlib::ayanamsa;
use crate::time::{sidereal_time_deg, Instant};
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};

/// Observer location on the Earth
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geographic latitude, degrees north positive
    pub latitude: f64,
    /// Geographic longitude, degrees east positive
    pub longitude: f64,
    /// Offset of local civil time from UTC, in hours
    pub utc_offset_hours: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude,
            longitude,
            utc_offset_hours,
        }
    }
}

/// One whole-sign house
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseInfo {
    /// House number 1–12
    pub number: u8,
    /// Cusp longitude in `[0, 360)`
    pub cusp: f64,
    /// Sign number 1–12 of the cusp
    pub sign: u8,
}

/// Tropical ecliptic longitude rising on the eastern horizon
pub fn tropical_ascendant(instant: Instant, latitude: f64, longitude: f64) -> f64 {
    let theta = sidereal_time_deg(instant, longitude) * DEG2RAD;
    let eps = apparent_obliquity(instant) * DEG2RAD;
    let phi = latitude * DEG2RAD;

    let asc = theta
        .cos()
        .atan2(-(theta.sin() * eps.cos() + phi.tan() * eps.sin()));
    wrap_degrees(asc * RAD2DEG)
}

/// Sidereal ascendant in degrees
pub fn ascendant(instant: Instant, latitude: f64, longitude: f64) -> f64 {
    wrap_degrees(tropical_ascendant(instant, latitude, longitude) - ayanamsa(instant))
}

/// Whole-sign houses counted from the ascendant
pub fn houses(ascendant_deg: f64) -> [HouseInfo; 12] {
    std::array::from_fn(|i| {
        let cusp = wrap_degrees(ascendant_deg + i as f64 * SIGN_SPAN);
        HouseInfo {
            number: i as u8 + 1,
            cusp,
            sign: Sign::from_longitude(cusp).number(),
        }
    })
}
