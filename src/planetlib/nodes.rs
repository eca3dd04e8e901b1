//! Lunar nodes (Rahu and Ketu)

use super::moon::LunarArguments;
use crate::constants::DEG2RAD;
use crate::coordinates::wrap_degrees;
use crate::time::Instant;

/// Nominal daily motion of the node, degrees per day
pub const NODE_SPEED: f64 = -0.052_954;

/// Longitude of the Moon's mean ascending node, mean equinox of date
pub fn mean_node(instant: Instant) -> f64 {
    let t = instant.centuries_since_j2000();
    let t2 = t * t;
    wrap_degrees(
        125.044_547_9 - 1934.136_289_1 * t + 0.002_075_4 * t2 + t2 * t / 467_441.0
            - t2 * t2 / 60_616_000.0,
    )
}

/// True ascending node (Rahu): mean node plus its two largest periodic terms
pub fn true_node(instant: Instant) -> f64 {
    let args = LunarArguments::at(instant.centuries_since_j2000());
    let d = args.elongation * DEG2RAD;
    let f = args.latitude_argument * DEG2RAD;
    let m = args.sun_anomaly * DEG2RAD;
    wrap_degrees(mean_node(instant) - 1.4979 * (2.0 * (d - f)).sin() - 0.1500 * m.sin())
}

/// Descending node (Ketu), always opposite Rahu
pub fn south_node(instant: Instant) -> f64 {
    wrap_degrees(true_node(instant) + 180.0)
}
