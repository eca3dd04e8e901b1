//! Planetary ephemeris calculations module
//!
//! Analytic theories for the nine grahas: the Sun and Moon from Meeus'
//! series, Mercury through Saturn from two-body Keplerian orbits, and the
//! lunar nodes from the mean node plus its leading periodic terms.
//!
//! Positions are evaluated at the instant's Julian Day as given. Callers
//! that want dynamical time add ΔT first (see [`crate::almanac`]).

pub mod kepler;
mod lunar_terms;
pub mod moon;
pub mod nodes;
pub mod sun;

use crate::coordinates::{signed_difference, wrap_degrees, EclipticPosition};
use crate::nutationlib::nutation_in_longitude;
use crate::precessionlib::general_precession_deg;
use crate::time::Instant;
use crate::zodiac::{nakshatra_progress, pada_from_longitude, Nakshatra, Sign};
use crate::{JyotishError, Result};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The nine grahas of Vedic astrology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All bodies in weekday order, which is also their numeric identifier order
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

/// English and Sanskrit names accepted by [`Body::from_name`]
const BODY_NAME_PAIRS: &[(&str, Body)] = &[
    ("sun", Body::Sun),
    ("surya", Body::Sun),
    ("moon", Body::Moon),
    ("chandra", Body::Moon),
    ("mars", Body::Mars),
    ("mangal", Body::Mars),
    ("mercury", Body::Mercury),
    ("budha", Body::Mercury),
    ("jupiter", Body::Jupiter),
    ("guru", Body::Jupiter),
    ("brihaspati", Body::Jupiter),
    ("venus", Body::Venus),
    ("shukra", Body::Venus),
    ("saturn", Body::Saturn),
    ("shani", Body::Saturn),
    ("rahu", Body::Rahu),
    ("north node", Body::Rahu),
    ("ketu", Body::Ketu),
    ("south node", Body::Ketu),
];

lazy_static! {
    /// Map from lowercase body names to bodies
    static ref BODY_NAMES: HashMap<&'static str, Body> = BODY_NAME_PAIRS.iter().copied().collect();
}

impl Body {
    /// Get the body's name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Mercury => "Mercury",
            Body::Jupiter => "Jupiter",
            Body::Venus => "Venus",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    /// Look a body up by English or Sanskrit name, ignoring case
    pub fn from_name(name: &str) -> Result<Body> {
        BODY_NAMES
            .get(name.trim().to_lowercase().as_str())
            .copied()
            .ok_or_else(|| JyotishError::InvalidBody(name.to_string()))
    }

    /// Look a body up by its numeric identifier (0 = Sun … 8 = Ketu)
    pub fn from_id(id: u8) -> Result<Body> {
        ALL_BODIES
            .get(id as usize)
            .copied()
            .ok_or_else(|| JyotishError::InvalidBody(format!("id {id}")))
    }

    /// Numeric identifier of the body
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Whether the body is one of the lunar nodes
    pub fn is_node(&self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sidereal position of a body at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub body: Body,
    /// Sidereal ecliptic longitude in `[0, 360)`
    pub longitude: f64,
    /// Ecliptic latitude (degrees)
    pub latitude: f64,
    /// Longitudinal speed (degrees per day)
    pub speed: f64,
    /// Sign number 1–12
    pub sign: u8,
    /// Degrees elapsed within the sign
    pub degrees_in_sign: f64,
    pub retrograde: bool,
    /// Nakshatra number 1–27
    pub nakshatra: u8,
    /// Pada 1–4
    pub pada: u8,
}

impl PlanetPosition {
    /// Build a position record, deriving sign, nakshatra and pada from the
    /// longitude and the retrograde flag from the speed
    pub fn new(body: Body, longitude: f64, latitude: f64, speed: f64) -> Self {
        let longitude = wrap_degrees(longitude);
        let sign = Sign::from_longitude(longitude);
        Self {
            body,
            longitude,
            latitude,
            speed,
            sign: sign.number(),
            degrees_in_sign: longitude - sign.index0() as f64 * 30.0,
            retrograde: speed < 0.0,
            nakshatra: Nakshatra::from_longitude(longitude).number(),
            pada: pada_from_longitude(longitude),
        }
    }

    /// The sign as a typed value
    pub fn rashi(&self) -> Sign {
        Sign::from_longitude(self.longitude)
    }

    /// The nakshatra as a typed value
    pub fn nakshatra_kind(&self) -> Nakshatra {
        Nakshatra::from_longitude(self.longitude)
    }

    /// Fraction of the current nakshatra already traversed, in `[0, 1)`
    pub fn nakshatra_progress(&self) -> f64 {
        nakshatra_progress(self.longitude)
    }
}

/// Tunable parameters of the ephemeris
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EphemerisConfig {
    /// Fixed-point passes when solving Kepler's equation
    pub kepler_iterations: usize,
    /// Backward step for the finite-difference speed (days)
    pub speed_step_days: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            kepler_iterations: 7,
            speed_step_days: 0.1,
        }
    }
}

impl EphemerisConfig {
    pub fn with_kepler_iterations(mut self, iterations: usize) -> Self {
        self.kepler_iterations = iterations;
        self
    }

    pub fn with_speed_step(mut self, days: f64) -> Self {
        self.speed_step_days = days;
        self
    }
}

/// Analytic ephemeris for the nine grahas
///
/// Stateless apart from its configuration, so one value can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    /// Create an ephemeris with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an ephemeris with an explicit configuration
    pub fn with_config(config: EphemerisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Apparent tropical ecliptic position, equinox of date
    pub fn tropical(&self, instant: Instant, body: Body) -> EclipticPosition {
        let iters = self.config.kepler_iterations;
        match body {
            Body::Sun => EclipticPosition::new(sun::apparent_longitude(instant, iters), 0.0),
            Body::Moon => {
                let (lon, lat) = moon::apparent_position(instant);
                EclipticPosition::new(lon, lat)
            }
            Body::Rahu => EclipticPosition::new(nodes::true_node(instant), 0.0),
            Body::Ketu => EclipticPosition::new(nodes::south_node(instant), 0.0),
            Body::Mars | Body::Mercury | Body::Jupiter | Body::Venus | Body::Saturn => {
                let t = instant.centuries_since_j2000();
                let (lon, lat) = match kepler::elements_for(body) {
                    Some(elements) => kepler::geocentric_j2000(elements, t, iters),
                    None => unreachable!("{body} has no orbital elements"),
                };
                EclipticPosition::new(
                    lon + general_precession_deg(t) + nutation_in_longitude(instant),
                    lat,
                )
            }
        }
    }

    /// Tropical longitudinal speed in degrees per day
    ///
    /// Backward difference over the configured step; the nodes report their
    /// fixed nominal motion.
    pub fn speed(&self, instant: Instant, body: Body) -> f64 {
        if body.is_node() {
            return nodes::NODE_SPEED;
        }
        let step = self.config.speed_step_days;
        let now = self.tropical(instant, body).longitude;
        let before = self.tropical(instant - step, body).longitude;
        signed_difference(before, now) / step
    }

    /// Sidereal position of `body` for the given ayanamsa
    pub fn position(&self, instant: Instant, body: Body, ayanamsa_deg: f64) -> PlanetPosition {
        let sidereal = self.tropical(instant, body).sidereal(ayanamsa_deg);
        PlanetPosition::new(
            body,
            sidereal.longitude,
            sidereal.latitude,
            self.speed(instant, body),
        )
    }

    /// Sidereal position of a body named by string
    pub fn position_by_name(
        &self,
        instant: Instant,
        name: &str,
        ayanamsa_deg: f64,
    ) -> Result<PlanetPosition> {
        let body = Body::from_name(name)?;
        Ok(self.position(instant, body, ayanamsa_deg))
    }

    /// Sidereal positions of all nine bodies, in [`ALL_BODIES`] order
    pub fn all_positions(&self, instant: Instant, ayanamsa_deg: f64) -> Vec<PlanetPosition> {
        ALL_BODIES
            .iter()
            .map(|&body| self.position(instant, body, ayanamsa_deg))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precessionlib::ayanamsa;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Sun", Body::Sun)]
    #[case("CHANDRA", Body::Moon)]
    #[case(" guru ", Body::Jupiter)]
    #[case("shani", Body::Saturn)]
    #[case("South Node", Body::Ketu)]
    fn test_body_from_name(#[case] name: &str, #[case] expected: Body) {
        assert_eq!(Body::from_name(name).unwrap(), expected);
    }

    #[test]
    fn test_body_ids_round_trip() {
        for body in ALL_BODIES {
            assert_eq!(Body::from_id(body.id()).unwrap(), body);
        }
        assert!(matches!(Body::from_id(9), Err(JyotishError::InvalidBody(_))));
    }

    #[test]
    fn test_position_record_fields() {
        let p = PlanetPosition::new(Body::Moon, 365.0, 0.0, 13.2);
        assert_abs_diff_eq!(p.longitude, 5.0, epsilon = 1e-12);
        assert_eq!(p.sign, 1);
        assert_abs_diff_eq!(p.degrees_in_sign, 5.0, epsilon = 1e-12);
        assert_eq!(p.nakshatra, 1);
        assert_eq!(p.pada, 2);
        assert!(!p.retrograde);
        assert_eq!(p.rashi(), Sign::Aries);

        let p = PlanetPosition::new(Body::Saturn, 359.9, 0.0, -0.02);
        assert_eq!((p.sign, p.nakshatra, p.pada), (12, 27, 4));
        assert!(p.retrograde);
    }

    #[test]
    fn test_sun_at_j2000() {
        let t = Instant::J2000;
        let eph = Ephemeris::new();
        // Apparent tropical longitude 280.37°
        assert_abs_diff_eq!(eph.tropical(t, Body::Sun).longitude, 280.37, epsilon = 0.02);
        let sun = eph.position(t, Body::Sun, ayanamsa(t));
        assert!(sun.longitude > 256.0 && sun.longitude < 258.0);
        assert_abs_diff_eq!(sun.speed, 1.019, epsilon = 0.005);
    }

    #[test]
    fn test_planets_at_j2000() {
        // Geocentric apparent longitudes for 2000-01-01 12:00 (equinox of date)
        let t = Instant::J2000;
        let eph = Ephemeris::new();
        let lon = |b| eph.tropical(t, b).longitude;
        assert_abs_diff_eq!(lon(Body::Mercury), 271.9, epsilon = 0.5);
        assert_abs_diff_eq!(lon(Body::Venus), 241.6, epsilon = 0.5);
        assert_abs_diff_eq!(lon(Body::Mars), 328.0, epsilon = 0.5);
        assert_abs_diff_eq!(lon(Body::Jupiter), 25.3, epsilon = 0.5);
        assert_abs_diff_eq!(lon(Body::Saturn), 40.3, epsilon = 0.5);
    }

    #[test]
    fn test_nodes_always_retrograde() {
        let eph = Ephemeris::new();
        let t = Instant::from_jd(2_460_000.5);
        for body in [Body::Rahu, Body::Ketu] {
            let p = eph.position(t, body, ayanamsa(t));
            assert!(p.retrograde);
            assert_eq!(p.speed, nodes::NODE_SPEED);
        }
    }

    #[test]
    fn test_position_by_name() {
        let eph = Ephemeris::new();
        let t = Instant::J2000;
        assert!(eph.position_by_name(t, "Pluto", 0.0).is_err());
        let moon = eph.position_by_name(t, "moon", 0.0).unwrap();
        assert_eq!(moon.body, Body::Moon);
        assert_eq!(eph.all_positions(t, 0.0).len(), 9);
    }

    #[test]
    fn test_every_planet_has_orbital_elements() {
        let eph = Ephemeris::new();
        for body in ALL_BODIES {
            let keplerian = !body.is_node() && !matches!(body, Body::Sun | Body::Moon);
            assert_eq!(kepler::elements_for(body).is_some(), keplerian, "{body}");
            if keplerian {
                // Geocentric latitudes of the five planets stay within 10°
                let pos = eph.tropical(Instant::J2000, body);
                assert!(pos.latitude.abs() < 10.0 && pos.latitude != 0.0, "{body}");
            }
        }
    }
}
