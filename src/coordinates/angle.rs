//! # Angle arithmetic
//!
//! Every longitude this crate hands out is normalized to `[0, 360)`, and
//! every comparison between two longitudes goes through the signed shortest
//! path so that nothing breaks at the 0°/360° seam.
//!
//! ```rust
//! use jyotish::coordinates::angle::{signed_difference, wrap_degrees};
//!
//! assert_eq!(wrap_degrees(-30.0), 330.0);
//! assert_eq!(signed_difference(359.0, 1.0), 2.0);
//! ```

/// Normalize an angle in degrees to `[0, 360)`
pub fn wrap_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Normalize an angle in degrees to `[-180, 180)`
pub fn wrap_180(deg: f64) -> f64 {
    wrap_degrees(deg + 180.0) - 180.0
}

/// Signed shortest-path difference `to - from`, in `[-180, 180)`
pub fn signed_difference(from: f64, to: f64) -> f64 {
    wrap_180(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(45.0, 45.0)]
    #[case(360.0, 0.0)]
    #[case(-10.0, 350.0)]
    #[case(730.0, 10.0)]
    #[case(-370.0, 350.0)]
    fn test_wrap_degrees(#[case] input: f64, #[case] expected: f64) {
        assert!((wrap_degrees(input) - expected).abs() < 1e-10);
    }

    #[test]
    fn test_wrap_tiny_negative() {
        let r = wrap_degrees(-1e-18);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn test_wrap_sampled_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let raw: f64 = rng.gen_range(-1e6..1e6);
            let w = wrap_degrees(raw);
            assert!((0.0..360.0).contains(&w), "{raw} -> {w}");
            let s = wrap_180(raw);
            assert!((-180.0..180.0).contains(&s), "{raw} -> {s}");
        }
    }

    #[rstest]
    #[case(10.0, 20.0, 10.0)]
    #[case(20.0, 10.0, -10.0)]
    #[case(359.0, 1.0, 2.0)]
    #[case(1.0, 359.0, -2.0)]
    #[case(0.0, 180.0, -180.0)]
    fn test_signed_difference(#[case] from: f64, #[case] to: f64, #[case] expected: f64) {
        assert!((signed_difference(from, to) - expected).abs() < 1e-10);
    }
}
