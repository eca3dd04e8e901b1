//! Apparent geocentric longitude of the Sun
//!
//! Mean elements of the Earth's orbit (Meeus ch. 25) with the equation of
//! center obtained from one Kepler solve, a few small perturbations by the
//! Moon, Venus and Jupiter, nutation in longitude and annual aberration.

use super::kepler::{solve_kepler, true_anomaly};
use crate::constants::{ABERRATION_ASEC, ASEC_PER_DEG, DEG2RAD};
use crate::coordinates::wrap_degrees;
use crate::nutationlib::nutation_in_longitude;
use crate::time::Instant;

/// Geometric solar coordinates before nutation and aberration
#[derive(Debug, Clone, Copy)]
pub struct SolarOrbit {
    /// True longitude, mean equinox of date (degrees)
    pub true_longitude: f64,
    /// Sun–Earth distance (AU)
    pub distance: f64,
}

/// True longitude and distance of the Sun
pub fn solar_orbit(instant: Instant, kepler_iterations: usize) -> SolarOrbit {
    let t = instant.centuries_since_j2000();

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = 357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t;
    let e = 0.016_708_634 - 0.000_042_037 * t - 0.000_000_126_7 * t * t;

    let m_rad = wrap_degrees(m) * DEG2RAD;
    let ecc_anomaly = solve_kepler(m_rad, e, kepler_iterations);
    let nu = true_anomaly(ecc_anomaly, e);

    // Equation of center, wrapped so the mean anomaly's turn count cancels
    let center = crate::coordinates::wrap_180((nu - m_rad).to_degrees());

    SolarOrbit {
        true_longitude: wrap_degrees(l0 + center + perturbations(t)),
        distance: 1.000_001_018 * (1.0 - e * ecc_anomaly.cos()),
    }
}

/// Small periodic perturbations of the solar longitude (degrees)
fn perturbations(t: f64) -> f64 {
    let arg = |a: f64, b: f64| (a + b * t) * DEG2RAD;

    0.00134 * arg(153.23, 22_518.7541).cos()
        + 0.00154 * arg(216.57, 45_037.5082).cos()
        + 0.00200 * arg(312.69, 32_964.3577).cos()
        + 0.00179 * arg(297.85, 445_267.1142).sin()
        + 0.00178 * arg(231.19, 20.20).sin()
}

/// Apparent tropical longitude of the Sun in degrees
pub fn apparent_longitude(instant: Instant, kepler_iterations: usize) -> f64 {
    let orbit = solar_orbit(instant, kepler_iterations);
    let aberration = ABERRATION_ASEC / ASEC_PER_DEG / orbit.distance;
    wrap_degrees(orbit.true_longitude + nutation_in_longitude(instant) - aberration)
}
