//! Two-body orbits: Kepler's equation and osculating elements
//!
//! Elements are the JPL "approximate positions of the planets" set
//! (Standish, valid 1800–2050), referred to the J2000 ecliptic and equinox,
//! each a linear function of Julian centuries from J2000.

use crate::constants::DEG2RAD;
use crate::planetlib::Body;
use nalgebra::Vector3;

/// Solve Kepler's equation `E = M + e·sin E` by fixed-point iteration
///
/// The iteration count is fixed with no convergence test; seven passes are
/// ample for the eccentricities of the Sun's apparent orbit and the planets
/// handled here. Angles are in radians.
pub fn solve_kepler(mean_anomaly: f64, eccentricity: f64, iterations: usize) -> f64 {
    let mut e_anom = mean_anomaly;
    for _ in 0..iterations {
        e_anom = mean_anomaly + eccentricity * e_anom.sin();
    }
    e_anom
}

/// True anomaly (radians) from eccentric anomaly
pub fn true_anomaly(eccentric_anomaly: f64, eccentricity: f64) -> f64 {
    let half = eccentric_anomaly / 2.0;
    2.0 * ((1.0 + eccentricity).sqrt() * half.sin()).atan2((1.0 - eccentricity).sqrt() * half.cos())
}

/// Element value and its rate per Julian century
type Rate = (f64, f64);

/// Osculating Keplerian elements of one orbit
#[derive(Debug, Clone, Copy)]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    pub semi_major_axis: Rate,
    /// Eccentricity
    pub eccentricity: Rate,
    /// Inclination (degrees)
    pub inclination: Rate,
    /// Mean longitude (degrees)
    pub mean_longitude: Rate,
    /// Longitude of perihelion (degrees)
    pub perihelion: Rate,
    /// Longitude of the ascending node (degrees)
    pub node: Rate,
}

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.387_099_27, 0.000_000_37),
    eccentricity: (0.205_635_93, 0.000_019_06),
    inclination: (7.004_979_02, -0.005_947_49),
    mean_longitude: (252.250_323_50, 149_472.674_111_75),
    perihelion: (77.457_796_28, 0.160_476_89),
    node: (48.330_765_93, -0.125_340_81),
};

#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis: (0.723_335_66, 0.000_003_90),
    eccentricity: (0.006_776_72, -0.000_041_07),
    inclination: (3.394_676_05, -0.000_788_90),
    mean_longitude: (181.979_099_50, 58_517.815_387_29),
    perihelion: (131.602_467_18, 0.002_683_29),
    node: (76.679_842_55, -0.277_694_18),
};

/// Earth–Moon barycentre
#[rustfmt::skip]
const EARTH: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.000_002_61, 0.000_005_62),
    eccentricity: (0.016_711_23, -0.000_043_92),
    inclination: (-0.000_015_31, -0.012_946_68),
    mean_longitude: (100.464_571_66, 35_999.372_449_81),
    perihelion: (102.937_681_93, 0.323_273_64),
    node: (0.0, 0.0),
};

#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis: (1.523_710_34, 0.000_018_47),
    eccentricity: (0.093_394_10, 0.000_078_82),
    inclination: (1.849_691_42, -0.008_131_31),
    mean_longitude: (-4.553_432_05, 19_140.302_684_99),
    perihelion: (-23.943_629_59, 0.444_410_88),
    node: (49.559_538_91, -0.292_573_43),
};

#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis: (5.202_887_00, -0.000_116_07),
    eccentricity: (0.048_386_24, -0.000_132_53),
    inclination: (1.304_396_95, -0.001_837_14),
    mean_longitude: (34.396_440_51, 3_034.746_127_75),
    perihelion: (14.728_479_83, 0.212_526_68),
    node: (100.473_909_09, 0.204_691_06),
};

#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis: (9.536_675_94, -0.001_250_60),
    eccentricity: (0.053_861_79, -0.000_509_91),
    inclination: (2.485_991_87, 0.001_936_09),
    mean_longitude: (49.954_244_23, 1_222.493_622_01),
    perihelion: (92.598_878_31, -0.418_972_16),
    node: (113.662_424_48, -0.288_677_94),
};

/// Orbital elements of a body that moves on a Keplerian orbit
pub fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        _ => None,
    }
}

/// Elements of the Earth–Moon barycentre
pub fn earth_elements() -> &'static OrbitalElements {
    &EARTH
}

fn at(rate: Rate, t: f64) -> f64 {
    rate.0 + rate.1 * t
}

impl OrbitalElements {
    /// Heliocentric ecliptic position (AU, J2000 ecliptic) at `t` centuries
    pub fn heliocentric(&self, t: f64, kepler_iterations: usize) -> Vector3<f64> {
        let a = at(self.semi_major_axis, t);
        let e = at(self.eccentricity, t);
        let inc = at(self.inclination, t) * DEG2RAD;
        let l = at(self.mean_longitude, t);
        let peri = at(self.perihelion, t);
        let node = at(self.node, t) * DEG2RAD;

        let arg_peri = peri * DEG2RAD - node;
        let mean_anomaly = ((l - peri) * DEG2RAD).rem_euclid(std::f64::consts::TAU);
        let ecc_anomaly = solve_kepler(mean_anomaly, e, kepler_iterations);

        // Position in the orbital plane, x toward perihelion
        let xp = a * (ecc_anomaly.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

        let (sw, cw) = arg_peri.sin_cos();
        let (so, co) = node.sin_cos();
        let (si, ci) = inc.sin_cos();

        Vector3::new(
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        )
    }
}

/// Geocentric ecliptic longitude/latitude (degrees, J2000 frame) of a planet
pub fn geocentric_j2000(elements: &OrbitalElements, t: f64, kepler_iterations: usize) -> (f64, f64) {
    let planet = elements.heliocentric(t, kepler_iterations);
    let earth = EARTH.heliocentric(t, kepler_iterations);
    let geo = planet - earth;

    let lon = geo.y.atan2(geo.x).to_degrees();
    let lat = geo.z.atan2(geo.x.hypot(geo.y)).to_degrees();
    (lon, lat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_kepler_circular_orbit() {
        assert_abs_diff_eq!(solve_kepler(1.0, 0.0, 7), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_kepler_satisfies_equation() {
        for &e in &[0.0167, 0.0934, 0.2056] {
            for i in 0..12 {
                let m = i as f64 * 0.5;
                let ea = solve_kepler(m, e, 7);
                assert_abs_diff_eq!(ea - e * ea.sin(), m, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_true_anomaly_at_apsides() {
        assert_abs_diff_eq!(true_anomaly(0.0, 0.1), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            true_anomaly(std::f64::consts::PI, 0.1).abs(),
            std::f64::consts::PI,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_earth_distance_near_one_au() {
        for i in 0..20 {
            let r = earth_elements().heliocentric(i as f64 * 0.013, 7).norm();
            assert!(r > 0.98 && r < 1.02, "r = {r}");
        }
    }

    #[test]
    fn test_planet_orbit_radii() {
        let t = 0.2;
        let radius = |b| elements_for(b).unwrap().heliocentric(t, 7).norm();
        assert!(radius(Body::Mercury) > 0.30 && radius(Body::Mercury) < 0.47);
        assert!(radius(Body::Jupiter) > 4.9 && radius(Body::Jupiter) < 5.5);
        assert!(radius(Body::Saturn) > 9.0 && radius(Body::Saturn) < 10.1);
        assert!(elements_for(Body::Moon).is_none());
    }
}
