//! Precession: ayanamsa and general precession in longitude
//!
//! The ayanamsa is the offset between the tropical and the sidereal zodiac.
//! It is modelled as a quadratic in Julian centuries from J2000 whose rate is
//! the general precession in longitude, anchored at the Lahiri value for
//! J2000.0 (23°51′11″).

use crate::time::Instant;

/// Ayanamsa at J2000.0 in degrees
pub const AYANAMSA_J2000: f64 = 23.853_05;

/// General precession in longitude, degrees per Julian century
const PRECESSION_RATE: f64 = 1.396_971;

/// Quadratic precession term, degrees per century squared
const PRECESSION_ACCEL: f64 = 0.000_308_6;

/// Ayanamsa in degrees at the given instant
pub fn ayanamsa(instant: Instant) -> f64 {
    let t = instant.centuries_since_j2000();
    AYANAMSA_J2000 + general_precession_deg(t)
}

/// Accumulated general precession in longitude since J2000, in degrees
///
/// Adding this to a longitude measured from the J2000 equinox refers it to
/// the mean equinox of date.
pub fn general_precession_deg(centuries: f64) -> f64 {
    PRECESSION_RATE * centuries + PRECESSION_ACCEL * centuries * centuries
}
