//! Period records shared by every dasha system

use crate::constants::DASHA_YEAR_DAYS;
use crate::planetlib::Body;
use crate::time::Instant;
use crate::zodiac::Sign;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight yoginis, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yogini {
    Mangala,
    Pingala,
    Dhanya,
    Bhramari,
    Bhadrika,
    Ulka,
    Siddha,
    Sankata,
}

impl Yogini {
    pub fn name(self) -> &'static str {
        match self {
            Yogini::Mangala => "Mangala",
            Yogini::Pingala => "Pingala",
            Yogini::Dhanya => "Dhanya",
            Yogini::Bhramari => "Bhramari",
            Yogini::Bhadrika => "Bhadrika",
            Yogini::Ulka => "Ulka",
            Yogini::Siddha => "Siddha",
            Yogini::Sankata => "Sankata",
        }
    }
}

/// Whatever rules a period: a graha, a sign or a yogini
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashaLord {
    Graha(Body),
    Rashi(Sign),
    Yogini(Yogini),
}

impl fmt::Display for DashaLord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashaLord::Graha(body) => write!(f, "{body}"),
            DashaLord::Rashi(sign) => write!(f, "{sign:?}"),
            DashaLord::Yogini(yogini) => f.write_str(yogini.name()),
        }
    }
}

/// One period of a dasha timeline, with its sub-periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: DashaLord,
    /// Inclusive start
    pub start: Instant,
    /// Exclusive end; equal to the next period's start
    pub end: Instant,
    /// Antardashas, empty below the second level
    pub sub_periods: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Period without sub-periods
    pub fn leaf(lord: DashaLord, start: Instant, end: Instant) -> Self {
        Self {
            lord,
            start,
            end,
            sub_periods: Vec::new(),
        }
    }

    pub fn duration_days(&self) -> f64 {
        self.end - self.start
    }

    /// Duration in dasha years of 365.25 days
    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DASHA_YEAR_DAYS
    }

    /// Whether `instant` falls inside `[start, end)`
    pub fn contains(&self, instant: Instant) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// Find the period in force at `instant`
pub fn period_at(periods: &[DashaPeriod], instant: Instant) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(instant))
}

/// Lay periods of the given durations (days) end to end from `start`
///
/// Each period's start is bit-for-bit the previous period's end.
pub(crate) fn chain(start: Instant, durations: impl IntoIterator<Item = (DashaLord, f64)>) -> Vec<DashaPeriod> {
    let mut cursor = start;
    durations
        .into_iter()
        .map(|(lord, days)| {
            let end = cursor + days;
            let period = DashaPeriod::leaf(lord, cursor, end);
            cursor = end;
            period
        })
        .collect()
}

/// Children whose durations are `weight / total` of the parent's
///
/// The last child ends exactly on the parent's end so that rounding never
/// opens a gap at the next parent.
pub(crate) fn proportional_children(parent: &DashaPeriod, sequence: &[(DashaLord, f64)], total: f64) -> Vec<DashaPeriod> {
    let span = parent.duration_days();
    let mut children = chain(
        parent.start,
        sequence.iter().map(|&(lord, weight)| (lord, weight / total * span)),
    );
    snap_last_child_end(&mut children, parent.end);
    children
}

/// Children of equal length, one per lord
pub(crate) fn equal_children(parent: &DashaPeriod, lords: &[DashaLord]) -> Vec<DashaPeriod> {
    if lords.is_empty() {
        return Vec::new();
    }
    let each = parent.duration_days() / lords.len() as f64;
    let mut children = chain(parent.start, lords.iter().map(|&lord| (lord, each)));
    snap_last_child_end(&mut children, parent.end);
    children
}

fn snap_last_child_end(children: &mut [DashaPeriod], parent_end: Instant) {
    if let Some(last) = children.last_mut() {
        last.end = parent_end;
    }
}

/// Rotate a cyclic table so it starts at `start`
pub(crate) fn rotated<T: Copy>(table: &[T], start: usize) -> impl Iterator<Item = T> + '_ {
    table.iter().cycle().skip(start).take(table.len()).copied()
}
