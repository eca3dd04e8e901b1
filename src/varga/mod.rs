//! Divisional (varga) charts
//!
//! A harmonic-n chart cuts every sign into n equal divisions and sends each
//! division to a sign of its own. Six harmonics have classical placement
//! rules; any other harmonic uses the plain harmonic projection
//! `sign = ⌊n·λ / 30⌋ mod 12`.

use crate::chart::BirthChart;
use crate::constants::SIGN_SPAN;
use crate::coordinates::wrap_degrees;
use crate::planetlib::{Body, PlanetPosition};
use crate::zodiac::Sign;
use crate::{JyotishError, Result};
use serde::{Deserialize, Serialize};

/// Placement rule for one harmonic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VargaRule {
    /// D3: the sign itself, then its 5th and 9th
    Drekkana,
    /// D4: the sign itself, then its 4th, 7th and 10th
    Chaturthamsha,
    /// D9: movable signs count from themselves, fixed from their 9th, dual from their 5th
    Navamsha,
    /// D10: odd signs count from themselves, even signs from their 9th
    Dashamsha,
    /// D12: counted from the sign itself
    Dwadashamsha,
    /// D60: counted from the sign itself
    Shashtiamsha,
    /// Any other harmonic
    Harmonic(u32),
}

impl VargaRule {
    /// Rule for a harmonic number; zero is rejected
    pub fn for_harmonic(harmonic: u32) -> Result<Self> {
        Ok(match harmonic {
            0 => return Err(JyotishError::InvalidHarmonic(0)),
            3 => VargaRule::Drekkana,
            4 => VargaRule::Chaturthamsha,
            9 => VargaRule::Navamsha,
            10 => VargaRule::Dashamsha,
            12 => VargaRule::Dwadashamsha,
            60 => VargaRule::Shashtiamsha,
            n => VargaRule::Harmonic(n),
        })
    }

    pub fn harmonic(self) -> u32 {
        match self {
            VargaRule::Drekkana => 3,
            VargaRule::Chaturthamsha => 4,
            VargaRule::Navamsha => 9,
            VargaRule::Dashamsha => 10,
            VargaRule::Dwadashamsha => 12,
            VargaRule::Shashtiamsha => 60,
            VargaRule::Harmonic(n) => n,
        }
    }

    pub fn name(self) -> String {
        match self {
            VargaRule::Drekkana => "Drekkana".to_string(),
            VargaRule::Chaturthamsha => "Chaturthamsha".to_string(),
            VargaRule::Navamsha => "Navamsha".to_string(),
            VargaRule::Dashamsha => "Dashamsha".to_string(),
            VargaRule::Dwadashamsha => "Dwadashamsha".to_string(),
            VargaRule::Shashtiamsha => "Shashtiamsha".to_string(),
            VargaRule::Harmonic(n) => format!("D{n}"),
        }
    }

    /// Sign receiving division `division` (zero-based) of `sign`
    ///
    /// Only meaningful for the classical rules; the harmonic projection does
    /// not depend on the base sign.
    pub fn target_sign(self, sign: Sign, division: u32) -> Sign {
        let d = division as i32;
        match self {
            VargaRule::Drekkana => sign.offset(4 * d),
            VargaRule::Chaturthamsha => sign.offset(3 * d),
            VargaRule::Navamsha => {
                let start = [0, 8, 4][sign.index0() % 3];
                sign.offset(start + d)
            }
            VargaRule::Dashamsha => {
                let start = if sign.is_odd() { 0 } else { 8 };
                sign.offset(start + d)
            }
            VargaRule::Dwadashamsha | VargaRule::Shashtiamsha => sign.offset(d),
            VargaRule::Harmonic(n) => {
                let steps = (sign.index0() as i64 * n as i64 + division as i64).rem_euclid(12);
                Sign::from_index0(steps as usize)
            }
        }
    }

    /// Position of a sidereal longitude in this divisional chart
    pub fn place(self, longitude: f64) -> VargaPosition {
        let n = self.harmonic() as f64;
        let lon = wrap_degrees(longitude);
        let sign = Sign::from_longitude(lon);
        let in_sign = lon - sign.index0() as f64 * SIGN_SPAN;
        let width = SIGN_SPAN / n;
        let division = ((in_sign / width).floor() as u32).min(self.harmonic() - 1);

        let target = match self {
            VargaRule::Harmonic(_) => {
                let index = ((lon * n) / SIGN_SPAN).floor().rem_euclid(12.0) as usize;
                Sign::from_index0(index.min(11))
            }
            _ => self.target_sign(sign, division),
        };
        VargaPosition {
            sign: target.number(),
            degrees: (in_sign * n).rem_euclid(SIGN_SPAN),
        }
    }
}

/// A longitude remapped into a divisional chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPosition {
    /// Sign number 1–12
    pub sign: u8,
    /// Degrees within that sign
    pub degrees: f64,
}

impl VargaPosition {
    pub fn rashi(&self) -> Sign {
        Sign::from_index0(self.sign as usize - 1)
    }
}

/// A complete divisional chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionalChart {
    pub harmonic: u32,
    pub name: String,
    pub placements: Vec<(Body, VargaPosition)>,
    pub ascendant: VargaPosition,
}

impl DivisionalChart {
    pub fn placement(&self, body: Body) -> Option<&VargaPosition> {
        self.placements.iter().find(|(b, _)| *b == body).map(|(_, p)| p)
    }
}

/// Remap planets and ascendant into the harmonic-`harmonic` chart
pub fn divisional_chart(
    harmonic: u32,
    planets: &[PlanetPosition],
    ascendant_longitude: f64,
) -> Result<DivisionalChart> {
    let rule = VargaRule::for_harmonic(harmonic)?;
    Ok(DivisionalChart {
        harmonic,
        name: rule.name(),
        placements: planets
            .iter()
            .map(|p| (p.body, rule.place(p.longitude)))
            .collect(),
        ascendant: rule.place(ascendant_longitude),
    })
}

/// Divisional chart of a computed birth chart
pub fn divisional_chart_for(chart: &BirthChart, harmonic: u32) -> Result<DivisionalChart> {
    divisional_chart(harmonic, &chart.planets, chart.ascendant)
}
