//! Calendar date and Julian day number conversion functions
//!
//! Integer algorithms from the Explanatory Supplement to the Astronomical
//! Almanac 15.11, always using the (proleptic) Gregorian calendar.

/// Largest day number handled without overflow; about 10^13 years
const MAX_DAY_NUMBER: i64 = 1 << 52;

/// Convert (year, month, day) to Julian day number
///
/// The returned number is the Julian day that begins at noon of the given
/// civil date.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let janfeb = if month < 3 { 1 } else { 0 };
    let year = year as i64;
    let month = month as i64;

    1461 * (year + 4800 - janfeb) / 4 + 367 * (month - 2 + 12 * janfeb) / 12
        - 3 * ((year + 4900 - janfeb) / 100) / 4
        - 32075
        + day as i64
}

/// Convert Julian day number to calendar date (year, month, day)
///
/// Day numbers below zero are pinned to day 0 (-4713-11-24); years beyond
/// the `i32` range saturate.
pub fn calendar_date(jd_number: i64) -> (i32, u32, u32) {
    let jd_number = jd_number.clamp(0, MAX_DAY_NUMBER);
    // See the Explanatory Supplement to the Astronomical Almanac 15.11.
    let f = jd_number + 1401 + ((4 * jd_number + 274277) / 146097 * 3 / 4 - 38);

    let e = 4 * f + 3;
    let g = (e % 1461) / 4;
    let h = 5 * g + 2;
    let day = (h % 153) / 5 + 1;
    let month = (h / 153 + 2) % 12 + 1;
    let year = e / 1461 - 4716 + (12 + 2 - month) / 12;

    let year = i32::try_from(year).unwrap_or(if year > 0 { i32::MAX } else { i32::MIN });
    (year, month as u32, day as u32)
}

/// Whether `year` is a Gregorian leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}
