//! Signs (rashi), nakshatras and the static rulership tables built on them
//!
//! Indices exposed to callers are 1-based (Aries = 1, Ashwini = 1) to match
//! how charts are read; the enums carry 0-based discriminants internally so
//! they can index the static tables directly.

use crate::constants::{NAKSHATRA_SPAN, PADA_SPAN, SIGN_SPAN};
use crate::coordinates::wrap_degrees;
use crate::planetlib::Body;
use crate::{JyotishError, Result};
use serde::{Deserialize, Serialize};

/// The twelve signs of the sidereal zodiac
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All signs in zodiacal order
pub const ALL_SIGNS: [Sign; 12] = [
    Sign::Aries,
    Sign::Taurus,
    Sign::Gemini,
    Sign::Cancer,
    Sign::Leo,
    Sign::Virgo,
    Sign::Libra,
    Sign::Scorpio,
    Sign::Sagittarius,
    Sign::Capricorn,
    Sign::Aquarius,
    Sign::Pisces,
];

/// Movable, fixed or dual quality of a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

impl Sign {
    /// Sign from a 0-based index, wrapping modulo 12
    pub fn from_index0(index: usize) -> Sign {
        ALL_SIGNS[index % 12]
    }

    /// Sign from a 1-based index (Aries = 1)
    pub fn from_number(number: u8) -> Result<Sign> {
        if (1..=12).contains(&number) {
            Ok(ALL_SIGNS[number as usize - 1])
        } else {
            Err(JyotishError::InvalidSign(number))
        }
    }

    /// Sign containing a sidereal longitude
    pub fn from_longitude(longitude: f64) -> Sign {
        let idx = (wrap_degrees(longitude) / SIGN_SPAN).floor() as usize;
        Self::from_index0(idx.min(11))
    }

    /// 0-based index (Aries = 0)
    pub fn index0(self) -> usize {
        self as usize
    }

    /// 1-based index (Aries = 1)
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Sign `offset` places further along the zodiac
    pub fn offset(self, offset: i32) -> Sign {
        Self::from_index0((self as i32 + offset).rem_euclid(12) as usize)
    }

    /// Odd signs are Aries, Gemini, Leo, ...
    pub fn is_odd(self) -> bool {
        self.index0() % 2 == 0
    }

    /// Movable / fixed / dual classification
    pub fn modality(self) -> Modality {
        match self.index0() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    /// Ruling planet of the sign
    pub fn lord(self) -> Body {
        SIGN_LORDS[self.index0()]
    }

    /// Signs counted from `self` to `other`, forward, 0 when equal
    pub fn forward_distance(self, other: Sign) -> u8 {
        ((other.index0() + 12 - self.index0()) % 12) as u8
    }

    /// Signs counted from `self` to `other`, backward, 0 when equal
    pub fn backward_distance(self, other: Sign) -> u8 {
        ((self.index0() + 12 - other.index0()) % 12) as u8
    }
}

/// Sign lords, Aries through Pisces
const SIGN_LORDS: [Body; 12] = [
    Body::Mars,
    Body::Venus,
    Body::Mercury,
    Body::Moon,
    Body::Sun,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Saturn,
    Body::Jupiter,
];

/// Sign of exaltation, for the seven visible planets
pub fn exaltation_sign(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Aries),
        Body::Moon => Some(Sign::Taurus),
        Body::Mars => Some(Sign::Capricorn),
        Body::Mercury => Some(Sign::Virgo),
        Body::Jupiter => Some(Sign::Cancer),
        Body::Venus => Some(Sign::Pisces),
        Body::Saturn => Some(Sign::Libra),
        Body::Rahu | Body::Ketu => None,
    }
}

/// Sign of debilitation, always opposite the exaltation sign
pub fn debilitation_sign(body: Body) -> Option<Sign> {
    exaltation_sign(body).map(|s| s.offset(6))
}

/// The 27 nakshatras
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All nakshatras starting from Ashwini
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Nakshatra from a 0-based index, wrapping modulo 27
    pub fn from_index0(index: usize) -> Nakshatra {
        ALL_NAKSHATRAS[index % 27]
    }

    /// Nakshatra from a 1-based index (Ashwini = 1)
    pub fn from_number(number: u8) -> Result<Nakshatra> {
        if (1..=27).contains(&number) {
            Ok(ALL_NAKSHATRAS[number as usize - 1])
        } else {
            Err(JyotishError::InvalidNakshatra(number))
        }
    }

    /// Nakshatra containing a sidereal longitude
    pub fn from_longitude(longitude: f64) -> Nakshatra {
        let idx = (wrap_degrees(longitude) / NAKSHATRA_SPAN).floor() as usize;
        Self::from_index0(idx.min(26))
    }

    /// 0-based index (Ashwini = 0)
    pub fn index0(self) -> usize {
        self as usize
    }

    /// 1-based index (Ashwini = 1)
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Starting longitude of the nakshatra
    pub fn start_longitude(self) -> f64 {
        self.index0() as f64 * NAKSHATRA_SPAN
    }
}

/// Pada (quarter, 1–4) of the nakshatra containing a longitude
pub fn pada_from_longitude(longitude: f64) -> u8 {
    let idx = (wrap_degrees(longitude) / PADA_SPAN).floor() as usize;
    (idx.min(107) % 4) as u8 + 1
}

/// Fraction `[0, 1)` of its nakshatra already traversed at a longitude
pub fn nakshatra_progress(longitude: f64) -> f64 {
    let lon = wrap_degrees(longitude);
    let nak = Nakshatra::from_longitude(lon);
    ((lon - nak.start_longitude()) / NAKSHATRA_SPAN).clamp(0.0, 1.0)
}

/// Fraction `[0, 1)` of its sign already traversed at a longitude
pub fn sign_progress(longitude: f64) -> f64 {
    let lon = wrap_degrees(longitude);
    let sign = Sign::from_longitude(lon);
    ((lon - sign.index0() as f64 * SIGN_SPAN) / SIGN_SPAN).clamp(0.0, 1.0)
}
