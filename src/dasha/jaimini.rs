//! Jaimini Chara dasha: sign periods counted from the ascendant
//!
//! Each sign runs for as many years as there are signs between it and the
//! sign its lord occupies, counted forward for the first three signs of
//! each half of the zodiac (Aries–Gemini, Libra–Sagittarius) and backward
//! for the rest. A lord in its own sign gives twelve years. Exaltation adds
//! a year and debilitation removes one, within 1–12 years.

use super::types::{equal_children, DashaLord, DashaPeriod};
use crate::constants::DASHA_YEAR_DAYS;
use crate::planetlib::{Body, PlanetPosition};
use crate::time::Instant;
use crate::zodiac::{debilitation_sign, exaltation_sign, sign_progress, Modality, Sign};
use serde::{Deserialize, Serialize};

/// Signs whose periods are counted forward (zero-based)
const FORWARD_COUNTED: [usize; 6] = [0, 1, 2, 6, 7, 8];

/// A Chara dasha period, or a marker for a sign whose lord was not supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CharaPeriod {
    Resolved { sign: Sign, period: DashaPeriod },
    /// The lord's placement was missing from the chart; no dates exist
    Unresolved { sign: Sign, lord: Body },
}

impl CharaPeriod {
    pub fn sign(&self) -> Sign {
        match self {
            CharaPeriod::Resolved { sign, .. } | CharaPeriod::Unresolved { sign, .. } => *sign,
        }
    }

    pub fn period(&self) -> Option<&DashaPeriod> {
        match self {
            CharaPeriod::Resolved { period, .. } => Some(period),
            CharaPeriod::Unresolved { .. } => None,
        }
    }
}

/// Years of the Chara period of `sign`, or `None` when its lord is missing
pub fn chara_years(sign: Sign, planets: &[PlanetPosition]) -> Option<u8> {
    let lord = sign.lord();
    let placed = planets.iter().find(|p| p.body == lord)?.rashi();

    let distance = if FORWARD_COUNTED.contains(&sign.index0()) {
        sign.forward_distance(placed)
    } else {
        sign.backward_distance(placed)
    };
    let mut years = if distance == 0 { 12 } else { distance as i32 };

    if exaltation_sign(lord) == Some(placed) {
        years += 1;
    } else if debilitation_sign(lord) == Some(placed) {
        years -= 1;
    }
    Some(years.clamp(1, 12) as u8)
}

/// Signs of the twelve antardashas of a mahadasha sign
fn antardasha_signs(sign: Sign) -> Vec<DashaLord> {
    let offset = match sign.modality() {
        Modality::Movable => 0,
        Modality::Fixed => 6,
        Modality::Dual => 4,
    };
    let first = sign.offset(offset);
    (0..12).map(|k| DashaLord::Rashi(first.offset(k))).collect()
}

/// Chara dasha from the sidereal ascendant and the chart's placements
///
/// The sequence starts at the ascendant sign and runs forward for an odd
/// ascendant, backward for an even one. The first period is reduced by the
/// ascendant's progress through its sign.
pub fn jaimini_chara(birth: Instant, ascendant_longitude: f64, planets: &[PlanetPosition]) -> Vec<CharaPeriod> {
    let lagna = Sign::from_longitude(ascendant_longitude);
    let step = if lagna.is_odd() { 1 } else { -1 };
    let elapsed = sign_progress(ascendant_longitude);

    let mut cursor = birth;
    (0..12)
        .map(|k| {
            let sign = lagna.offset(step * k);
            match chara_years(sign, planets) {
                Some(years) => {
                    let fraction = if k == 0 { 1.0 - elapsed } else { 1.0 };
                    let end = cursor + years as f64 * fraction * DASHA_YEAR_DAYS;
                    let mut period = DashaPeriod::leaf(DashaLord::Rashi(sign), cursor, end);
                    period.sub_periods = equal_children(&period, &antardasha_signs(sign));
                    cursor = end;
                    CharaPeriod::Resolved { sign, period }
                }
                None => {
                    log::warn!("Chara dasha: lord {} of {sign:?} not found in chart", sign.lord());
                    CharaPeriod::Unresolved {
                        sign,
                        lord: sign.lord(),
                    }
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(body: Body, sign: Sign) -> PlanetPosition {
        PlanetPosition::new(body, sign.index0() as f64 * 30.0 + 15.0, 0.0, 1.0)
    }

    fn chart() -> Vec<PlanetPosition> {
        vec![
            placed(Body::Sun, Sign::Leo),
            placed(Body::Moon, Sign::Taurus),
            placed(Body::Mars, Sign::Gemini),
            placed(Body::Mercury, Sign::Virgo),
            placed(Body::Jupiter, Sign::Pisces),
            placed(Body::Venus, Sign::Libra),
            placed(Body::Saturn, Sign::Aries),
        ]
    }

    #[test]
    fn test_period_years() {
        let planets = chart();
        // Aries: Mars in Gemini, counted forward, 2 years
        assert_eq!(chara_years(Sign::Aries, &planets), Some(2));
        // Cancer: Moon in Taurus, counted backward 2, exalted +1
        assert_eq!(chara_years(Sign::Cancer, &planets), Some(3));
        // Leo: Sun in own sign, 12
        assert_eq!(chara_years(Sign::Leo, &planets), Some(12));
        // Capricorn: Saturn in Aries counted backward 9, debilitated -1
        assert_eq!(chara_years(Sign::Capricorn, &planets), Some(8));
        // Virgo: Mercury exalted in own sign, 12 + 1 clamped to 12
        assert_eq!(chara_years(Sign::Virgo, &planets), Some(12));
    }

    #[test]
    fn test_direction_and_contiguity() {
        let planets = chart();
        // Aries ascendant, odd: forward
        let periods = jaimini_chara(Instant::J2000, 0.0, &planets);
        assert_eq!(periods.len(), 12);
        assert_eq!(periods[1].sign(), Sign::Taurus);
        let resolved: Vec<&DashaPeriod> = periods.iter().filter_map(|p| p.period()).collect();
        for pair in resolved.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }

        // Taurus ascendant, even: backward
        let periods = jaimini_chara(Instant::J2000, 45.0, &planets);
        assert_eq!(periods[0].sign(), Sign::Taurus);
        assert_eq!(periods[1].sign(), Sign::Aries);
        // Halfway through Taurus: Venus in Libra counted forward is 5 years, half remains
        let first = periods[0].period().unwrap();
        assert!((first.duration_years() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_antardasha_start_by_modality() {
        let periods = jaimini_chara(Instant::J2000, 0.0, &chart());
        let aries = periods[0].period().unwrap();
        assert_eq!(aries.sub_periods.len(), 12);
        assert_eq!(aries.sub_periods[0].lord, DashaLord::Rashi(Sign::Aries));
        assert_eq!(aries.sub_periods[11].end, aries.end);

        let taurus = periods[1].period().unwrap();
        assert_eq!(taurus.sub_periods[0].lord, DashaLord::Rashi(Sign::Scorpio));
        let gemini = periods[2].period().unwrap();
        assert_eq!(gemini.sub_periods[0].lord, DashaLord::Rashi(Sign::Libra));
    }

    #[test]
    fn test_missing_lord_is_unresolved() {
        let planets: Vec<_> = chart().into_iter().filter(|p| p.body != Body::Venus).collect();
        let periods = jaimini_chara(Instant::J2000, 0.0, &planets);
        assert_eq!(
            periods[1],
            CharaPeriod::Unresolved {
                sign: Sign::Taurus,
                lord: Body::Venus
            }
        );
        // Neighbours still meet
        let aries = periods[0].period().unwrap();
        let gemini = periods[2].period().unwrap();
        assert_eq!(aries.end, gemini.start);
    }
}
