//! Time module for continuous day counts and civil calendar conversion
//!
//! All astronomy in this crate is driven by an [`Instant`]: a Julian Day in
//! Universal Time. This module converts between instants and Gregorian
//! calendar tuples, estimates ΔT (TT − UT) and computes sidereal time.

pub mod calendar;
pub mod delta_t;
pub mod sidereal;

use crate::constants::{DAY_MS, DAY_S, J2000, JULIAN_CENTURY, JULIAN_YEAR};
use crate::{JyotishError, Result};
use chrono::{DateTime, Datelike, Duration, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

pub use delta_t::{delta_t, delta_t_seconds};
pub use sidereal::sidereal_time_deg;

/// Calendar tuple for representing a date and time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarTuple {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl CalendarTuple {
    /// Create a validated calendar tuple
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(JyotishError::InvalidCalendar(format!("month {month}")));
        }
        if day == 0 || day > calendar::days_in_month(year, month) {
            return Err(JyotishError::InvalidCalendar(format!(
                "day {day} in {year}-{month:02}"
            )));
        }
        if hour > 23 || minute > 59 || !(0.0..60.0).contains(&second) {
            return Err(JyotishError::InvalidCalendar(format!(
                "time {hour:02}:{minute:02}:{second}"
            )));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Fraction of the civil day elapsed since midnight
    pub fn day_fraction(&self) -> f64 {
        (self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0) / 24.0
    }
}

impl fmt::Display for CalendarTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:06.3}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Type to allow different ways of inputting calendar dates
#[derive(Debug, Clone)]
pub enum CalendarInput {
    Tuple(i32, u32, u32, u32, u32, f64),
    CalendarTuple(CalendarTuple),
}

impl From<(i32, u32, u32, u32, u32, f64)> for CalendarInput {
    fn from(tuple: (i32, u32, u32, u32, u32, f64)) -> Self {
        CalendarInput::Tuple(tuple.0, tuple.1, tuple.2, tuple.3, tuple.4, tuple.5)
    }
}

impl From<CalendarTuple> for CalendarInput {
    fn from(cal: CalendarTuple) -> Self {
        CalendarInput::CalendarTuple(cal)
    }
}

impl From<(i32, u32, u32)> for CalendarInput {
    fn from(date: (i32, u32, u32)) -> Self {
        CalendarInput::Tuple(date.0, date.1, date.2, 0, 0, 0.0)
    }
}

impl CalendarInput {
    fn into_tuple(self) -> Result<CalendarTuple> {
        match self {
            CalendarInput::Tuple(y, m, d, h, mi, s) => CalendarTuple::new(y, m, d, h, mi, s),
            CalendarInput::CalendarTuple(cal) => CalendarTuple::new(
                cal.year, cal.month, cal.day, cal.hour, cal.minute, cal.second,
            ),
        }
    }
}

/// A moment in time as a continuous Julian Day count (UT)
///
/// Instants are plain values: arithmetic produces new instants and nothing
/// is ever mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Instant {
    jd: f64,
}

impl Instant {
    /// The J2000.0 epoch (2000-01-01 12:00)
    pub const J2000: Instant = Instant { jd: J2000 };

    /// Create an instant from a Julian Day
    pub const fn from_jd(jd: f64) -> Self {
        Self { jd }
    }

    /// Create an instant from a UTC calendar date and time
    ///
    /// Valid indefinitely forward and back to the Gregorian reform
    /// (1582-10-15); earlier dates are treated as proleptic Gregorian.
    pub fn utc<T: Into<CalendarInput>>(date: T) -> Result<Self> {
        let cal = date.into().into_tuple()?;
        Ok(Self::from_calendar(&cal))
    }

    /// Convert an already validated calendar tuple to an instant
    pub fn from_calendar(cal: &CalendarTuple) -> Self {
        let jdn = calendar::julian_day_number(cal.year, cal.month, cal.day);
        // Julian days start at noon, civil days at midnight
        Self {
            jd: jdn as f64 - 0.5 + cal.day_fraction(),
        }
    }

    /// Create an instant from a chrono UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let cal = CalendarTuple {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 / 1_000_000_000.0,
        };
        Self::from_calendar(&cal)
    }

    /// Julian Day value
    pub fn jd(&self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0
    pub fn centuries_since_j2000(&self) -> f64 {
        (self.jd - J2000) / JULIAN_CENTURY
    }

    /// Approximate decimal year, e.g. 2000.0 at J2000.0
    pub fn decimal_year(&self) -> f64 {
        2000.0 + (self.jd - J2000) / JULIAN_YEAR
    }

    /// ΔT (TT − UT) at this instant, as a fraction of a day
    pub fn delta_t(&self) -> f64 {
        delta_t(*self)
    }

    /// Convert to a UTC calendar tuple
    ///
    /// The time of day is rounded to the nearest millisecond, which keeps
    /// whole-second inputs exact through a round trip.
    pub fn to_calendar(&self) -> CalendarTuple {
        let jd_plus_half = self.jd + 0.5;
        let mut z = jd_plus_half.floor();
        let mut ms = ((jd_plus_half - z) * DAY_MS).round();
        if ms >= DAY_MS {
            z += 1.0;
            ms -= DAY_MS;
        }

        let (year, month, day) = calendar::calendar_date(z as i64);

        let ms = ms as u64;
        CalendarTuple {
            year,
            month,
            day,
            hour: (ms / 3_600_000) as u32,
            minute: ((ms % 3_600_000) / 60_000) as u32,
            second: (ms % 60_000) as f64 / 1000.0,
        }
    }

    /// Convert to a local calendar tuple for the given UTC offset in hours
    pub fn to_local_calendar(&self, utc_offset_hours: f64) -> CalendarTuple {
        (*self + utc_offset_hours / 24.0).to_calendar()
    }

    /// Convert to a chrono UTC datetime
    ///
    /// Returns `None` when the instant is outside chrono's supported range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let cal = self.to_calendar();
        let whole_seconds = cal.second.trunc() as u32;
        let millis = ((cal.second - whole_seconds as f64) * 1000.0).round() as i64;
        Utc.with_ymd_and_hms(
            cal.year,
            cal.month,
            cal.day,
            cal.hour,
            cal.minute,
            whole_seconds,
        )
        .single()
        .map(|dt| dt + Duration::milliseconds(millis))
    }

    /// Seconds elapsed since another instant
    pub fn seconds_since(&self, other: Instant) -> f64 {
        (self.jd - other.jd) * DAY_S
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Instant jd={:.6} utc={}>", self.jd, self.to_calendar())
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

// Addition and subtraction operations for Instant

impl Add<f64> for Instant {
    type Output = Instant;

    fn add(self, days: f64) -> Self::Output {
        Instant {
            jd: self.jd + days,
        }
    }
}

impl Sub<f64> for Instant {
    type Output = Instant;

    fn sub(self, days: f64) -> Self::Output {
        Instant {
            jd: self.jd - days,
        }
    }
}

impl Sub<Instant> for Instant {
    type Output = f64;

    fn sub(self, other: Instant) -> Self::Output {
        // Return the difference in days
        self.jd - other.jd
    }
}

impl Add<Duration> for Instant {
    type Output = Instant;

    fn add(self, duration: Duration) -> Self::Output {
        self + duration.num_milliseconds() as f64 / DAY_MS
    }
}
