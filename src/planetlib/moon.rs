//! Geocentric position of the Moon
//!
//! Mean longitude corrected by the 60+60 principal periodic terms of the
//! lunar theory, the additive planetary terms (Venus, Jupiter and the
//! flattening of the Earth) and nutation in longitude.

use super::lunar_terms::{LATITUDE, LONGITUDE_DISTANCE};
use crate::constants::DEG2RAD;
use crate::coordinates::wrap_degrees;
use crate::nutationlib::nutation_in_longitude;
use crate::time::Instant;

/// Fundamental arguments of the lunar theory, in degrees
#[derive(Debug, Clone, Copy)]
pub struct LunarArguments {
    /// Moon's mean longitude (L′)
    pub mean_longitude: f64,
    /// Mean elongation of the Moon from the Sun (D)
    pub elongation: f64,
    /// Sun's mean anomaly (M)
    pub sun_anomaly: f64,
    /// Moon's mean anomaly (M′)
    pub moon_anomaly: f64,
    /// Moon's argument of latitude (F)
    pub latitude_argument: f64,
}

impl LunarArguments {
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: wrap_degrees(
                218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
                    - t4 / 65_194_000.0,
            ),
            elongation: wrap_degrees(
                297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
                    - t4 / 113_065_000.0,
            ),
            sun_anomaly: wrap_degrees(
                357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0,
            ),
            moon_anomaly: wrap_degrees(
                134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
                    - t4 / 14_712_000.0,
            ),
            latitude_argument: wrap_degrees(
                93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
                    + t4 / 863_310_000.0,
            ),
        }
    }

    /// Argument `dD + mM + m′M′ + fF` in radians
    fn combine(&self, d: i8, m: i8, mp: i8, f: i8) -> f64 {
        (d as f64 * self.elongation
            + m as f64 * self.sun_anomaly
            + mp as f64 * self.moon_anomaly
            + f as f64 * self.latitude_argument)
            * DEG2RAD
    }
}

/// Geometric lunar coordinates referred to the mean equinox of date
#[derive(Debug, Clone, Copy)]
pub struct LunarPosition {
    /// Ecliptic longitude (degrees)
    pub longitude: f64,
    /// Ecliptic latitude (degrees)
    pub latitude: f64,
    /// Earth–Moon distance (km)
    pub distance_km: f64,
}

/// Geometric position of the Moon (no nutation)
pub fn lunar_position(instant: Instant) -> LunarPosition {
    let t = instant.centuries_since_j2000();
    let args = LunarArguments::at(t);

    // Decreasing eccentricity of the Earth's orbit
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;
    let e_factor = |m: i8| match m.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mp, f, l, r) in LONGITUDE_DISTANCE.iter() {
        let arg = args.combine(d, m, mp, f);
        let scale = e_factor(m);
        sum_l += l as f64 * scale * arg.sin();
        sum_r += r as f64 * scale * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(d, m, mp, f, b) in LATITUDE.iter() {
        sum_b += b as f64 * e_factor(m) * args.combine(d, m, mp, f).sin();
    }

    let a1 = (119.75 + 131.849 * t) * DEG2RAD;
    let a2 = (53.09 + 479_264.290 * t) * DEG2RAD;
    let a3 = (313.45 + 481_266.484 * t) * DEG2RAD;
    let lp = args.mean_longitude * DEG2RAD;
    let mp = args.moon_anomaly * DEG2RAD;
    let f = args.latitude_argument * DEG2RAD;

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    LunarPosition {
        longitude: wrap_degrees(args.mean_longitude + sum_l / 1_000_000.0),
        latitude: sum_b / 1_000_000.0,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}

/// Apparent tropical longitude and latitude of the Moon in degrees
pub fn apparent_position(instant: Instant) -> (f64, f64) {
    let pos = lunar_position(instant);
    (
        wrap_degrees(pos.longitude + nutation_in_longitude(instant)),
        pos.latitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_meeus_example_47a() {
        // 1992 April 12, 0h TD
        let t = Instant::from_jd(2_448_724.5);
        let pos = lunar_position(t);
        assert_abs_diff_eq!(pos.longitude, 133.162_655, epsilon = 1e-3);
        assert_abs_diff_eq!(pos.latitude, -3.229_126, epsilon = 1e-3);
        assert_abs_diff_eq!(pos.distance_km, 368_409.7, epsilon = 5.0);

        let (lon, _) = apparent_position(t);
        assert_abs_diff_eq!(lon, 133.167, epsilon = 2e-3);
    }

    #[test]
    fn test_arguments_at_j2000() {
        let args = LunarArguments::at(0.0);
        assert_abs_diff_eq!(args.mean_longitude, 218.316_447_7, epsilon = 1e-9);
        assert_abs_diff_eq!(args.latitude_argument, 93.272_095, epsilon = 1e-9);
    }

    #[test]
    fn test_latitude_bounded_by_inclination() {
        let mut jd = 2_451_545.0;
        while jd < 2_451_545.0 + 400.0 {
            let lat = lunar_position(Instant::from_jd(jd)).latitude;
            assert!(lat.abs() < 5.4, "lat = {lat}");
            jd += 1.7;
        }
    }
}
