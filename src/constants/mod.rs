//! Constants module for astronomical and calendrical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// Milliseconds in a day
pub const DAY_MS: f64 = 86_400_000.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const JULIAN_CENTURY: f64 = 36_525.0;
/// Days in a Julian year
pub const JULIAN_YEAR: f64 = 365.25;

// Angles
/// Arcseconds in a degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;

// Zodiac divisions
/// Span of one sign (rashi) in degrees
pub const SIGN_SPAN: f64 = 30.0;
/// Span of one nakshatra in degrees (13°20′)
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;
/// Span of one nakshatra pada in degrees (3°20′)
pub const PADA_SPAN: f64 = 90.0 / 27.0;
/// Moon−Sun elongation covered by one tithi
pub const TITHI_SPAN: f64 = 12.0;
/// Moon−Sun elongation covered by one karana
pub const KARANA_SPAN: f64 = 6.0;
/// Sun+Moon span covered by one yoga
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

// Dasha arithmetic
/// Length of a dasha year in days
pub const DASHA_YEAR_DAYS: f64 = JULIAN_YEAR;

// Aberration
/// Constant of annual aberration in arcseconds, scaled by 1/R (AU)
pub const ABERRATION_ASEC: f64 = 20.496;
