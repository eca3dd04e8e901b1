//! Vimshottari (120-year) and Tribhagi (40-year) dashas

use super::types::{chain, proportional_children, rotated, DashaLord, DashaPeriod};
use crate::constants::DASHA_YEAR_DAYS;
use crate::planetlib::Body;
use crate::time::Instant;
use crate::zodiac::{nakshatra_progress, Nakshatra};

/// Vimshottari lords and their periods in years
pub const VIMSHOTTARI_SEQUENCE: [(Body, f64); 9] = [
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

/// Length of the full Vimshottari cycle in years
pub const VIMSHOTTARI_YEARS: f64 = 120.0;

/// Number of Vimshottari passes in a Tribhagi timeline
const TRIBHAGI_PASSES: usize = 3;

fn weights() -> Vec<(DashaLord, f64)> {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .map(|&(body, years)| (DashaLord::Graha(body), years))
        .collect()
}

/// Index into [`VIMSHOTTARI_SEQUENCE`] of the lord of a nakshatra
pub fn nakshatra_lord_index(nakshatra: Nakshatra) -> usize {
    nakshatra.index0() % 9
}

/// Antardashas of one mahadasha, starting with the mahadasha lord
fn with_antardashas(mut period: DashaPeriod, start_index: usize) -> DashaPeriod {
    let sequence: Vec<_> = rotated(&weights(), start_index).collect();
    period.sub_periods = proportional_children(&period, &sequence, VIMSHOTTARI_YEARS);
    period
}

/// Lay out `passes` Vimshottari cycles whose periods are scaled by `scale`
fn scaled_timeline(birth: Instant, moon_longitude: f64, scale: f64, passes: usize) -> Vec<DashaPeriod> {
    let first = nakshatra_lord_index(Nakshatra::from_longitude(moon_longitude));
    let elapsed = nakshatra_progress(moon_longitude);
    let table = weights();

    let order: Vec<usize> = (0..9 * passes).map(|k| (first + k) % 9).collect();
    let durations = order.iter().enumerate().map(|(k, &i)| {
        let (lord, years) = table[i];
        let fraction = if k == 0 { 1.0 - elapsed } else { 1.0 };
        (lord, years * scale * fraction * DASHA_YEAR_DAYS)
    });

    chain(birth, durations)
        .into_iter()
        .zip(order)
        .map(|(period, i)| with_antardashas(period, i))
        .collect()
}

/// Vimshottari mahadashas with antardashas from a sidereal Moon longitude
///
/// The first mahadasha carries only its unexpired balance, so the timeline
/// covers 120 years less the portion of the birth nakshatra already
/// traversed.
pub fn vimshottari(birth: Instant, moon_longitude: f64) -> Vec<DashaPeriod> {
    scaled_timeline(birth, moon_longitude, 1.0, 1)
}

/// Tribhagi dasha: Vimshottari periods cut to a third, run three times
pub fn tribhagi(birth: Instant, moon_longitude: f64) -> Vec<DashaPeriod> {
    scaled_timeline(birth, moon_longitude, 1.0 / 3.0, TRIBHAGI_PASSES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    fn total_years(periods: &[DashaPeriod]) -> f64 {
        (periods[periods.len() - 1].end - periods[0].start) / DASHA_YEAR_DAYS
    }

    #[test]
    fn test_sequence_totals_120() {
        let total: f64 = VIMSHOTTARI_SEQUENCE.iter().map(|&(_, y)| y).sum();
        assert_eq!(total, VIMSHOTTARI_YEARS);
    }

    #[test]
    fn test_moon_at_zero_starts_with_full_ketu() {
        let periods = vimshottari(Instant::J2000, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, DashaLord::Graha(Body::Ketu));
        assert_abs_diff_eq!(periods[0].duration_years(), 7.0, epsilon = 1e-9);
        assert_eq!(periods[1].lord, DashaLord::Graha(Body::Venus));
        assert_abs_diff_eq!(total_years(&periods), 120.0, epsilon = 1.0 / 365.25);
    }

    #[rstest]
    #[case(45.0, Body::Moon)] // Rohini
    #[case(130.0, Body::Ketu)] // Magha
    #[case(355.0, Body::Mercury)] // Revati
    fn test_starting_lord(#[case] moon: f64, #[case] lord: Body) {
        assert_eq!(vimshottari(Instant::J2000, moon)[0].lord, DashaLord::Graha(lord));
    }

    #[test]
    fn test_balance_reduces_first_period() {
        // Halfway through Bharani (Venus): 10 of 20 years remain
        let moon = Nakshatra::Bharani.start_longitude() + 360.0 / 54.0;
        let periods = vimshottari(Instant::J2000, moon);
        assert_abs_diff_eq!(periods[0].duration_years(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(total_years(&periods), 110.0, epsilon = 1e-6);
    }

    #[test]
    fn test_antardashas() {
        let periods = vimshottari(Instant::J2000, 0.0);
        let ketu = &periods[0];
        assert_eq!(ketu.sub_periods.len(), 9);
        assert_eq!(ketu.sub_periods[0].lord, DashaLord::Graha(Body::Ketu));
        // Ketu/Ketu: 7 × 7 / 120 years
        assert_abs_diff_eq!(ketu.sub_periods[0].duration_years(), 49.0 / 120.0, epsilon = 1e-9);
        assert_eq!(ketu.sub_periods[8].end, ketu.end);

        let venus = &periods[1];
        assert_eq!(venus.sub_periods[0].lord, DashaLord::Graha(Body::Venus));
        assert_eq!(venus.sub_periods[1].lord, DashaLord::Graha(Body::Sun));
        assert_eq!(venus.sub_periods[0].start, venus.start);
    }

    #[test]
    fn test_tribhagi() {
        let periods = tribhagi(Instant::J2000, 0.0);
        assert_eq!(periods.len(), 27);
        assert_abs_diff_eq!(periods[0].duration_years(), 7.0 / 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(total_years(&periods), 120.0, epsilon = 1e-6);
        assert_eq!(periods[9].lord, DashaLord::Graha(Body::Ketu));
        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }
}
