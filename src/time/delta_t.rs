//! ΔT (TT − UT) estimation
//!
//! Between 1620 and 2030 ΔT is linearly interpolated from decade values;
//! outside that range the quadratic long-term formulas from Meeus
//! (Astronomical Algorithms, ch. 10) are used. Extrapolated values carry
//! reduced accuracy but never fail.

use super::Instant;
use crate::constants::DAY_S;

/// Decade table of (year, ΔT seconds), 1620–2030
#[rustfmt::skip]
const DELTA_T_DECADES: [(f64, f64); 42] = [
    (1620.0, 124.0), (1630.0, 85.0), (1640.0, 62.0), (1650.0, 48.0),
    (1660.0, 37.0), (1670.0, 26.0), (1680.0, 16.0), (1690.0, 10.0),
    (1700.0, 9.0), (1710.0, 10.0), (1720.0, 11.0), (1730.0, 11.0),
    (1740.0, 12.0), (1750.0, 13.0), (1760.0, 15.0), (1770.0, 16.0),
    (1780.0, 17.0), (1790.0, 17.0), (1800.0, 13.7), (1810.0, 12.5),
    (1820.0, 12.0), (1830.0, 7.5), (1840.0, 5.7), (1850.0, 7.1),
    (1860.0, 7.9), (1870.0, 1.6), (1880.0, -5.4), (1890.0, -5.9),
    (1900.0, -2.7), (1910.0, 10.5), (1920.0, 21.2), (1930.0, 24.0),
    (1940.0, 24.3), (1950.0, 29.1), (1960.0, 33.1), (1970.0, 40.2),
    (1980.0, 50.5), (1990.0, 56.9), (2000.0, 63.8), (2010.0, 66.1),
    (2020.0, 69.4), (2030.0, 72.0),
];

/// ΔT at the given instant as a fraction of a day
pub fn delta_t(instant: Instant) -> f64 {
    delta_t_seconds(instant.decimal_year()) / DAY_S
}

/// ΔT in seconds for a decimal year
pub fn delta_t_seconds(year: f64) -> f64 {
    let (first, first_dt) = DELTA_T_DECADES[0];
    let (last, last_dt) = DELTA_T_DECADES[DELTA_T_DECADES.len() - 1];

    // The long-term formulas are shifted to meet the table at either end
    if year < first {
        return delta_t_long_term(year) - delta_t_long_term(first) + first_dt;
    }
    if year > last {
        return delta_t_long_term(year) - delta_t_long_term(last) + last_dt;
    }

    interpolate(year, &DELTA_T_DECADES)
}

/// Long-term quadratic formulas outside the tabulated range
fn delta_t_long_term(year: f64) -> f64 {
    let t = (year - 2000.0) / 100.0;
    if year < 948.0 {
        2177.0 + 497.0 * t + 44.1 * t * t
    } else if year < 2000.0 {
        102.0 + 102.0 * t + 25.3 * t * t
    } else {
        // Meeus's correction keeps the 2000–2100 arc closer to observations
        102.0 + 102.0 * t + 25.3 * t * t + 0.37 * (year - 2100.0)
    }
}

/// Linear interpolation over a table sorted by x
pub fn interpolate(x: f64, table: &[(f64, f64)]) -> f64 {
    if table.is_empty() {
        return f64::NAN;
    }

    // Binary search to find the segment
    match table.binary_search_by(|&(tx, _)| tx.total_cmp(&x)) {
        Ok(i) => table[i].1, // Exact match
        Err(0) => table[0].1,
        Err(i) if i >= table.len() => table[table.len() - 1].1,
        Err(i) => {
            let (x0, y0) = table[i - 1];
            let (x1, y1) = table[i];
            let t = (x - x0) / (x1 - x0);
            y0 + t * (y1 - y0)
        }
    }
}
