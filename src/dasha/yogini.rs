//! Yogini (36-year) dasha

use super::types::{chain, proportional_children, rotated, DashaLord, DashaPeriod, Yogini};
use crate::constants::DASHA_YEAR_DAYS;
use crate::time::Instant;
use crate::zodiac::{nakshatra_progress, Nakshatra};

/// Yoginis and their periods in years
pub const YOGINI_SEQUENCE: [(Yogini, f64); 8] = [
    (Yogini::Mangala, 1.0),
    (Yogini::Pingala, 2.0),
    (Yogini::Dhanya, 3.0),
    (Yogini::Bhramari, 4.0),
    (Yogini::Bhadrika, 5.0),
    (Yogini::Ulka, 6.0),
    (Yogini::Siddha, 7.0),
    (Yogini::Sankata, 8.0),
];

pub const YOGINI_YEARS: f64 = 36.0;

/// Cycles emitted: the birth cycle and one full cycle after it
const YOGINI_CYCLES: usize = 2;

/// Index into [`YOGINI_SEQUENCE`] of the yogini ruling a birth nakshatra
pub fn starting_yogini_index(nakshatra: Nakshatra) -> usize {
    (nakshatra.index0() + 3) % 8
}

/// Yogini mahadashas with antardashas
pub fn yogini(birth: Instant, moon_longitude: f64) -> Vec<DashaPeriod> {
    let first = starting_yogini_index(Nakshatra::from_longitude(moon_longitude));
    let elapsed = nakshatra_progress(moon_longitude);
    let table: Vec<(DashaLord, f64)> = YOGINI_SEQUENCE
        .iter()
        .map(|&(y, years)| (DashaLord::Yogini(y), years))
        .collect();

    let order: Vec<usize> = (0..8 * YOGINI_CYCLES).map(|k| (first + k) % 8).collect();
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
            period.sub_periods = proportional_children(&period, &sequence, YOGINI_YEARS);
            period
        })
        .collect()
}
