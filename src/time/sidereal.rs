//! Greenwich and local sidereal time

use super::Instant;
use crate::constants::{DEG2RAD, J2000};
use crate::coordinates::wrap_degrees;
use crate::nutationlib::{apparent_obliquity, nutation_in_longitude};

/// Greenwich mean sidereal time in degrees (IAU 1982 expression)
pub fn greenwich_mean_sidereal_deg(instant: Instant) -> f64 {
    let t = instant.centuries_since_j2000();
    wrap_degrees(
        280.460_618_37 + 360.985_647_366_29 * (instant.jd() - J2000) + 0.000_387_933 * t * t
            - t * t * t / 38_710_000.0,
    )
}

/// Greenwich apparent sidereal time in degrees
///
/// Mean sidereal time corrected by the equation of the equinoxes
/// (Δψ·cos ε).
pub fn greenwich_apparent_sidereal_deg(instant: Instant) -> f64 {
    let equation_of_equinoxes =
        nutation_in_longitude(instant) * (apparent_obliquity(instant) * DEG2RAD).cos();
    wrap_degrees(greenwich_mean_sidereal_deg(instant) + equation_of_equinoxes)
}

/// Local apparent sidereal time in degrees for an east-positive longitude
pub fn sidereal_time_deg(instant: Instant, longitude_deg: f64) -> f64 {
    wrap_degrees(greenwich_apparent_sidereal_deg(instant) + longitude_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST 13h10m46.3668s
        let t = Instant::from_jd(2_446_895.5);
        let expected = (13.0 + 10.0 / 60.0 + 46.3668 / 3600.0) * 15.0;
        assert_abs_diff_eq!(greenwich_mean_sidereal_deg(t), expected, epsilon = 1e-5);
        // Apparent: 13h10m46.1351s
        let expected = (13.0 + 10.0 / 60.0 + 46.1351 / 3600.0) * 15.0;
        assert_abs_diff_eq!(greenwich_apparent_sidereal_deg(t), expected, epsilon = 1e-3);
    }

    #[test]
    fn test_local_sidereal_wraps() {
        let t = Instant::J2000;
        let lst = sidereal_time_deg(t, 200.0);
        assert!((0.0..360.0).contains(&lst));
        assert_abs_diff_eq!(
            lst,
            wrap_degrees(greenwich_apparent_sidereal_deg(t) + 200.0),
            epsilon = 1e-12
        );
    }
}
