//! Ashtottari (108-year) dasha

use super::types::{chain, proportional_children, rotated, DashaLord, DashaPeriod};
use crate::almanac::Paksha;
use crate::constants::DASHA_YEAR_DAYS;
use crate::planetlib::Body;
use crate::time::Instant;
use crate::zodiac::{nakshatra_progress, Nakshatra};

/// Ashtottari lords and their periods in years
pub const ASHTOTTARI_SEQUENCE: [(Body, f64); 8] = [
    (Body::Sun, 6.0),
    (Body::Moon, 15.0),
    (Body::Mars, 8.0),
    (Body::Mercury, 17.0),
    (Body::Saturn, 10.0),
    (Body::Jupiter, 19.0),
    (Body::Rahu, 12.0),
    (Body::Venus, 21.0),
];

pub const ASHTOTTARI_YEARS: f64 = 108.0;

/// Ashtottari lord index for each nakshatra (Ashwini first), bright fortnight
///
/// Groups of three or four nakshatras counted from Ardra.
#[rustfmt::skip]
const BRIGHT_START: [usize; 27] = [
    6, 6,           // Ashwini, Bharani: Rahu
    7, 7, 7,        // Krittika..Mrigashira: Venus
    0, 0, 0, 0,     // Ardra..Ashlesha: Sun
    1, 1, 1,        // Magha..Uttara Phalguni: Moon
    2, 2, 2, 2,     // Hasta..Vishakha: Mars
    3, 3, 3,        // Anuradha..Mula: Mercury
    4, 4, 4,        // Purva Ashadha..Shravana: Saturn
    5, 5, 5,        // Dhanishta..Purva Bhadrapada: Jupiter
    6, 6,           // Uttara Bhadrapada, Revati: Rahu
];

/// Index into [`ASHTOTTARI_SEQUENCE`] of the first lord
///
/// Dark-fortnight births start one lord further along the cycle.
pub fn starting_lord_index(nakshatra: Nakshatra, paksha: Paksha) -> usize {
    let bright = BRIGHT_START[nakshatra.index0()];
    match paksha {
        Paksha::Bright => bright,
        Paksha::Dark => (bright + 1) % ASHTOTTARI_SEQUENCE.len(),
    }
}

/// Ashtottari mahadashas with antardashas
pub fn ashtottari(birth: Instant, moon_longitude: f64, paksha: Paksha) -> Vec<DashaPeriod> {
    let first = starting_lord_index(Nakshatra::from_longitude(moon_longitude), paksha);
    let elapsed = nakshatra_progress(moon_longitude);
    let table: Vec<(DashaLord, f64)> = ASHTOTTARI_SEQUENCE
        .iter()
        .map(|&(body, years)| (DashaLord::Graha(body), years))
        .collect();

    let n = table.len();
    let order: Vec<usize> = (0..n).map(|k| (first + k) % n).collect();
    let durations = order.iter().enumerate().map(|(k, &i)| {
        let (lord, years) = table[i];
        let fraction = if k == 0 { 1.0 - elapsed } else { 1.0 };
        (lord, years * fraction * DASHA_YEAR_DAYS)
    });

    chain(birth, durations)
        .into_iter()
        .zip(order)
        .map(|(mut period, i)| {
            let sequence: Vec<_> = rotated(&table, i).collect();
            period.sub_periods = proportional_children(&period, &sequence, ASHTOTTARI_YEARS);
            period
        })
        .collect()
}
