//! Nutation and obliquity of the ecliptic
//!
//! Low-precision series (Meeus, Astronomical Algorithms ch. 22): four terms
//! each for nutation in longitude and in obliquity, accurate to about 0.5″,
//! well inside what sidereal longitudes and ascendants need.

use crate::constants::{ASEC_PER_DEG, DEG2RAD};
use crate::time::Instant;

/// Nutation angles in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nutation {
    /// Nutation in longitude (Δψ)
    pub longitude: f64,
    /// Nutation in obliquity (Δε)
    pub obliquity: f64,
}

/// Nutation in longitude and obliquity at the given instant
pub fn nutation(instant: Instant) -> Nutation {
    let t = instant.centuries_since_j2000();

    // Longitude of the Moon's mean ascending node
    let omega = (125.04452 - 1934.136261 * t + 0.0020708 * t * t + t * t * t / 450_000.0) * DEG2RAD;
    // Mean longitudes of the Sun and Moon
    let l_sun = (280.4665 + 36_000.7698 * t) * DEG2RAD;
    let l_moon = (218.3165 + 481_267.8813 * t) * DEG2RAD;

    let dpsi = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    let deps = 9.20 * omega.cos() + 0.57 * (2.0 * l_sun).cos() + 0.10 * (2.0 * l_moon).cos()
        - 0.09 * (2.0 * omega).cos();

    Nutation {
        longitude: dpsi / ASEC_PER_DEG,
        obliquity: deps / ASEC_PER_DEG,
    }
}

/// Nutation in longitude (Δψ) in degrees
pub fn nutation_in_longitude(instant: Instant) -> f64 {
    nutation(instant).longitude
}

/// Mean obliquity of the ecliptic in degrees
pub fn mean_obliquity(instant: Instant) -> f64 {
    let t = instant.centuries_since_j2000();
    23.439_291_1 - 0.013_004_2 * t
}

/// Apparent (true) obliquity of the ecliptic in degrees
pub fn apparent_obliquity(instant: Instant) -> f64 {
    mean_obliquity(instant) + nutation(instant).obliquity
}
