//! Boundary search for panchanga segments

use super::SegmentKind;
use crate::coordinates::signed_difference;
use crate::planetlib::Ephemeris;
use crate::time::{CalendarTuple, Instant};
use serde::{Deserialize, Serialize};

/// Iteration limits for the boundary search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Newton steps before giving up on the tolerance
    pub max_iterations: usize,
    /// Residual below which a boundary counts as found (degrees)
    pub tolerance_deg: f64,
    /// Span of the centred difference used for the angular rate (days)
    pub speed_span_days: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            tolerance_deg: 1e-4,
            speed_span_days: 0.01,
        }
    }
}

impl SolverConfig {
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance_deg: f64) -> Self {
        self.tolerance_deg = tolerance_deg;
        self
    }
}

/// One end of a segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentBoundary {
    /// Boundary instant (UT)
    pub instant: Instant,
    /// Civil time of the boundary at the requested UTC offset
    pub local: CalendarTuple,
    /// False when the iteration cap was reached before the tolerance
    pub converged: bool,
}

/// The segment in force at a reference instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentSpan {
    pub kind: SegmentKind,
    /// Segment number, 1-based (tithi 1–30, karana 1–60, ...)
    pub index: u32,
    pub start: SegmentBoundary,
    pub end: SegmentBoundary,
}

impl SegmentSpan {
    /// Length of the segment in days
    pub fn duration_days(&self) -> f64 {
        self.end.instant - self.start.instant
    }

    /// Whether `instant` falls inside `[start, end)`
    pub fn contains(&self, instant: Instant) -> bool {
        self.start.instant <= instant && instant < self.end.instant
    }
}

/// Bracket the segment of `kind` in force at `reference` with the default
/// solver limits
pub fn find_crossing(reference: Instant, tz_offset_hours: f64, kind: SegmentKind) -> SegmentSpan {
    find_crossing_with(reference, tz_offset_hours, kind, &SolverConfig::default())
}

/// Bracket the segment of `kind` in force at `reference`
///
/// `reference` is UT. The ephemeris is evaluated in dynamical time, and
/// the boundaries are returned as UT instants together with civil times
/// at `tz_offset_hours`.
pub fn find_crossing_with(
    reference: Instant,
    tz_offset_hours: f64,
    kind: SegmentKind,
    config: &SolverConfig,
) -> SegmentSpan {
    let ephemeris = Ephemeris::new();
    let delta_t = reference.delta_t();
    let reference_tt = reference + delta_t;

    let current = kind.index_of(kind.angle(&ephemeris, reference_tt));

    let boundary = |step: u32| {
        let target = ((current + step) % kind.count()) as f64 * kind.width();
        let (solved_tt, converged) = solve(&ephemeris, kind, reference_tt, target, config);
        let instant = solved_tt - delta_t;
        SegmentBoundary {
            instant,
            local: instant.to_local_calendar(tz_offset_hours),
            converged,
        }
    };

    SegmentSpan {
        kind,
        index: current + 1,
        start: boundary(0),
        end: boundary(1),
    }
}

/// Newton iteration for the instant at which `kind`'s angle equals `target`
fn solve(
    ephemeris: &Ephemeris,
    kind: SegmentKind,
    guess: Instant,
    target: f64,
    config: &SolverConfig,
) -> (Instant, bool) {
    let half_span = config.speed_span_days / 2.0;
    let mut guess = guess;

    for iteration in 0..config.max_iterations {
        let residual = signed_difference(kind.angle(ephemeris, guess), target);
        log::trace!("{kind:?} target {target:.4}: iteration {iteration}, residual {residual:.3e}°");
        if residual.abs() < config.tolerance_deg {
            return (guess, true);
        }

        let rate = signed_difference(
            kind.angle(ephemeris, guess - half_span),
            kind.angle(ephemeris, guess + half_span),
        ) / config.speed_span_days;
        guess = guess + residual / rate;
    }

    let residual = signed_difference(kind.angle(ephemeris, guess), target);
    let converged = residual.abs() < config.tolerance_deg;
    if !converged {
        log::debug!(
            "{kind:?} boundary at {target:.4}° not within tolerance after {} iterations (residual {residual:.3e}°)",
            config.max_iterations
        );
    }
    (guess, converged)
}
