//! Jyotish: sidereal ephemeris and Vedic calendrical calculations
//!
//! This crate computes sidereal planetary positions and derives from them the
//! panchanga time segments (tithi, karana, nakshatra, yoga), planetary period
//! ("dasha") timelines, divisional charts and Ashta-Koota chart matching.
//!
//! Every operation is a pure function of its inputs. Nothing here performs
//! I/O or holds shared mutable state, so any of it may be called from as many
//! threads as the caller likes.
//!
//! ```rust
//! use jyotish::{Body, Ephemeris, Instant};
//! use jyotish::precessionlib::ayanamsa;
//!
//! let t = Instant::J2000;
//! let sun = Ephemeris::new().position(t, Body::Sun, ayanamsa(t));
//! assert!(sun.longitude > 255.0 && sun.longitude < 259.0);
//! ```

use thiserror::Error;

pub mod almanac;
pub mod chart;
pub mod constants;
pub mod coordinates;
pub mod dasha;
pub mod houses;
pub mod matching;
pub mod nutationlib;
pub mod planetlib;
pub mod precessionlib;
pub mod time;
pub mod varga;
pub mod zodiac;

// Re-export commonly used types
pub use almanac::{find_crossing, SegmentKind, SegmentSpan, SolverConfig};
pub use chart::BirthChart;
pub use houses::{GeoLocation, HouseInfo};
pub use planetlib::{Body, Ephemeris, PlanetPosition};
pub use time::{CalendarTuple, Instant};
pub use zodiac::{Nakshatra, Sign};

/// Main error type for the jyotish library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JyotishError {
    #[error("Invalid body: {0}")]
    InvalidBody(String),

    #[error("Invalid harmonic number: {0}")]
    InvalidHarmonic(u32),

    #[error("Invalid sign index: {0} (expected 1-12)")]
    InvalidSign(u8),

    #[error("Invalid nakshatra index: {0} (expected 1-27)")]
    InvalidNakshatra(u8),

    #[error("Invalid calendar date: {0}")]
    InvalidCalendar(String),
}

/// Result type for jyotish operations
pub type Result<T> = std::result::Result<T, JyotishError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = JyotishError::InvalidBody("Pluto".to_string());
        assert_eq!(err.to_string(), "Invalid body: Pluto");

        let err = JyotishError::InvalidHarmonic(0);
        assert_eq!(err.to_string(), "Invalid harmonic number: 0");
    }

    #[test]
    fn test_unknown_body_is_an_error() {
        let result = Body::from_name("Pluto");
        assert!(matches!(result, Err(JyotishError::InvalidBody(_))));
    }
}
