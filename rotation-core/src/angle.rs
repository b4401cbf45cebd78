//! Angle wrapping and unit conversion.
//!
//! The Euler-angle engine never normalizes angles on its own: a triple set by the
//! caller is stored as given, and a decomposed triple comes straight out of `atan2`.
//! These helpers exist for callers (and tests) that want to compare or display
//! angles in a canonical range.
//!
//! | Function | Output Range |
//! |----------|--------------|
//! | [`wrap_pm_pi`] | [-pi, +pi) |
//! | [`wrap_0_2pi`] | [0, 2pi) |
//! | [`angular_difference`] | [-pi, +pi) |
//!
//! The wrapping functions use `libm::fmod` (via [`crate::math::fmod`]) rather than
//! the `%` operator so the reduction is well defined for negative inputs.

use crate::constants::{DEG_TO_RAD, PI, RAD_TO_DEG, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// ```
/// use rotation_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// // 270 degrees -> -90 degrees
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x - (-PI / 2.0)).abs() < 1e-10);
///
/// // Already in range: unchanged
/// assert_eq!(wrap_pm_pi(1.0), 1.0);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }

    w
}

/// Wraps an angle to [0, 2pi) radians.
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}

/// Shortest signed difference `a - b` in radians, in [-pi, +pi).
///
/// Two angles that describe the same direction (e.g. `pi` and `-pi`) have a
/// difference of zero up to rounding.
#[inline]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    wrap_pm_pi(a - b)
}

/// Converts a triple from degrees to radians.
#[inline]
pub fn triple_to_radians(degrees: [f64; 3]) -> [f64; 3] {
    degrees.map(|d| d * DEG_TO_RAD)
}

/// Converts a triple from radians to degrees.
#[inline]
pub fn triple_to_degrees(radians: [f64; 3]) -> [f64; 3] {
    radians.map(|r| r * RAD_TO_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::HALF_PI;

    #[test]
    fn test_wrap_pm_pi() {
        assert_eq!(wrap_pm_pi(1.0), 1.0);
        assert!((wrap_pm_pi(3.0 * PI / 2.0) - (-PI / 2.0)).abs() < 1e-15);
        assert!((wrap_pm_pi(-3.0 * PI / 2.0) - (PI / 2.0)).abs() < 1e-15);
        // At boundary: abs >= PI triggers adjustment
        assert!((wrap_pm_pi(PI) - (-PI)).abs() < 1e-15);
    }

    #[test]
    fn test_wrap_0_2pi() {
        assert_eq!(wrap_0_2pi(1.0), 1.0);
        assert!((wrap_0_2pi(-PI / 2.0) - (3.0 * PI / 2.0)).abs() < 1e-15);
        assert!((wrap_0_2pi(3.0 * PI) - PI).abs() < 1e-15);
        assert!(wrap_0_2pi(TWOPI).abs() < 1e-15);
    }

    #[test]
    fn test_angular_difference_across_seam() {
        assert!(angular_difference(PI, -PI).abs() < 1e-15);
        assert!((angular_difference(PI - 0.1, -PI + 0.1) + 0.2).abs() < 1e-14);
    }

    #[test]
    fn test_degree_conversions() {
        let rad = triple_to_radians([0.0, 90.0, 180.0]);
        assert_eq!(rad[0], 0.0);
        assert!((rad[1] - HALF_PI).abs() < 1e-15);
        assert!((rad[2] - PI).abs() < 1e-15);

        let deg = triple_to_degrees(rad);
        assert!((deg[1] - 90.0).abs() < 1e-12);
        assert!((deg[2] - 180.0).abs() < 1e-12);
    }
}
