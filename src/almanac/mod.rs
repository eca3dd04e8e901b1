//! Panchanga segments and the times at which they begin and end
//!
//! The five calendrical limbs are all equal-width divisions of an angle
//! built from the Sun and Moon:
//!
//! | Segment        | Angle                     | Width    | Count |
//! |----------------|---------------------------|----------|-------|
//! | tithi          | Moon − Sun                | 12°      | 30    |
//! | karana         | Moon − Sun                | 6°       | 60    |
//! | nakshatra      | sidereal Moon             | 13°20′   | 27    |
//! | nakshatra pada | sidereal Moon             | 3°20′    | 108   |
//! | yoga           | sidereal Sun + Moon       | 13°20′   | 27    |
//!
//! [`find_crossing`] locates the boundaries of the segment current at a
//! given instant; [`panchanga`] reports which segments are current.

mod solver;

pub use solver::{find_crossing, find_crossing_with, SegmentBoundary, SegmentSpan, SolverConfig};

use crate::constants::{KARANA_SPAN, NAKSHATRA_SPAN, PADA_SPAN, TITHI_SPAN, YOGA_SPAN};
use crate::coordinates::wrap_degrees;
use crate::planetlib::{Body, Ephemeris};
use crate::precessionlib::ayanamsa;
use crate::time::Instant;
use serde::{Deserialize, Serialize};

/// The kinds of time segment the solver can bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    Tithi,
    Karana,
    Nakshatra,
    NakshatraPada,
    Yoga,
}

impl SegmentKind {
    /// Angular width of one segment in degrees
    pub fn width(self) -> f64 {
        match self {
            SegmentKind::Tithi => TITHI_SPAN,
            SegmentKind::Karana => KARANA_SPAN,
            SegmentKind::Nakshatra => NAKSHATRA_SPAN,
            SegmentKind::NakshatraPada => PADA_SPAN,
            SegmentKind::Yoga => YOGA_SPAN,
        }
    }

    /// Number of segments in a full circle
    pub fn count(self) -> u32 {
        match self {
            SegmentKind::Tithi => 30,
            SegmentKind::Karana => 60,
            SegmentKind::Nakshatra | SegmentKind::Yoga => 27,
            SegmentKind::NakshatraPada => 108,
        }
    }

    /// The angle this kind divides, in `[0, 360)`, at a dynamical-time instant
    pub fn angle(self, ephemeris: &Ephemeris, instant_tt: Instant) -> f64 {
        let moon = ephemeris.tropical(instant_tt, Body::Moon).longitude;
        match self {
            SegmentKind::Tithi | SegmentKind::Karana => {
                let sun = ephemeris.tropical(instant_tt, Body::Sun).longitude;
                wrap_degrees(moon - sun)
            }
            SegmentKind::Nakshatra | SegmentKind::NakshatraPada => {
                wrap_degrees(moon - ayanamsa(instant_tt))
            }
            SegmentKind::Yoga => {
                let sun = ephemeris.tropical(instant_tt, Body::Sun).longitude;
                wrap_degrees(sun + moon - 2.0 * ayanamsa(instant_tt))
            }
        }
    }

    /// Zero-based index of the segment containing `angle`
    pub fn index_of(self, angle: f64) -> u32 {
        let index = (wrap_degrees(angle) / self.width()).floor() as u32;
        index.min(self.count() - 1)
    }
}

/// Lunar fortnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing (Shukla)
    Bright,
    /// Waning (Krishna)
    Dark,
}

impl Paksha {
    /// Fortnight for a Moon − Sun elongation in degrees
    pub fn from_elongation(elongation: f64) -> Self {
        if wrap_degrees(elongation) < 180.0 {
            Paksha::Bright
        } else {
            Paksha::Dark
        }
    }
}

/// The segments current at one instant, all 1-based
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Panchanga {
    /// Tithi 1–30
    pub tithi: u8,
    pub paksha: Paksha,
    /// Nakshatra 1–27
    pub nakshatra: u8,
    /// Pada 1–4 within the nakshatra
    pub pada: u8,
    /// Yoga 1–27
    pub yoga: u8,
    /// Karana 1–60 within the lunar month
    pub karana: u8,
}

/// Current panchanga at a UT instant
pub fn panchanga(instant: Instant) -> Panchanga {
    let ephemeris = Ephemeris::new();
    let tt = instant + instant.delta_t();
    let number = |kind: SegmentKind| (kind.index_of(kind.angle(&ephemeris, tt)) + 1) as u8;

    let elongation = SegmentKind::Tithi.angle(&ephemeris, tt);
    let pada_index = SegmentKind::NakshatraPada.index_of(SegmentKind::NakshatraPada.angle(&ephemeris, tt));

    Panchanga {
        tithi: number(SegmentKind::Tithi),
        paksha: Paksha::from_elongation(elongation),
        nakshatra: number(SegmentKind::Nakshatra),
        pada: (pada_index % 4 + 1) as u8,
        yoga: number(SegmentKind::Yoga),
        karana: number(SegmentKind::Karana),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SegmentKind::Tithi)]
    #[case(SegmentKind::Karana)]
    #[case(SegmentKind::Nakshatra)]
    #[case(SegmentKind::NakshatraPada)]
    #[case(SegmentKind::Yoga)]
    fn test_segments_tile_the_circle(#[case] kind: SegmentKind) {
        assert!((kind.width() * kind.count() as f64 - 360.0).abs() < 1e-9);
        assert_eq!(kind.index_of(0.0), 0);
        assert_eq!(kind.index_of(359.999_999_999), kind.count() - 1);
        assert_eq!(kind.index_of(-0.5), kind.count() - 1);
    }

    #[test]
    fn test_paksha_from_elongation() {
        assert_eq!(Paksha::from_elongation(10.0), Paksha::Bright);
        assert_eq!(Paksha::from_elongation(179.9), Paksha::Bright);
        assert_eq!(Paksha::from_elongation(180.0), Paksha::Dark);
        assert_eq!(Paksha::from_elongation(-10.0), Paksha::Dark);
    }

    #[test]
    fn test_panchanga_consistency() {
        let t = Instant::utc((2024, 4, 9, 12, 0, 0.0)).unwrap();
        let p = panchanga(t);
        assert!((1..=30).contains(&p.tithi));
        assert!((1..=27).contains(&p.nakshatra));
        assert!((1..=4).contains(&p.pada));
        assert!((1..=27).contains(&p.yoga));
        // Two karanas per tithi
        assert!(p.karana == 2 * p.tithi - 1 || p.karana == 2 * p.tithi);
        assert_eq!(p.paksha == Paksha::Bright, p.tithi <= 15);
    }

    #[test]
    fn test_new_moon_starts_first_tithi() {
        // New moon of 2024 April 8 at 18:21 UT
        let t = Instant::utc((2024, 4, 8, 20, 0, 0.0)).unwrap();
        let p = panchanga(t);
        assert_eq!(p.tithi, 1);
        assert_eq!(p.paksha, Paksha::Bright);
        let before = panchanga(Instant::utc((2024, 4, 8, 16, 0, 0.0)).unwrap());
        assert_eq!(before.tithi, 30);
        assert_eq!(before.paksha, Paksha::Dark);
    }
}
