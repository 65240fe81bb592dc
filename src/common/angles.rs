//! This module contains common constructs for working with angles

use crate::Vector2;

/// Computes the inverse cosine of a value after clamping it to the range [-1, 1], so that small
/// floating point drift past the ends of the range yields 0 or pi instead of NaN. A NaN input
/// is still returned as NaN.
///
/// # Arguments
///
/// * `cosine`: the cosine of the angle to recover
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use edge_measure::common::clamped_acos;
/// use std::f64::consts::PI;
/// assert_eq!(clamped_acos(1.0 + 1.0e-15), 0.0);
/// assert_eq!(clamped_acos(-1.0 - 1.0e-15), PI);
/// ```
pub fn clamped_acos(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos()
}

/// Returns the length of a 2D vector, computed with `hypot` so that very small or very large
/// finite components neither underflow to zero nor overflow to infinity in the intermediate
/// squares.
///
/// # Examples
///
/// ```
/// use edge_measure::common::length2;
/// use edge_measure::Vector2;
/// assert_eq!(length2(&Vector2::new(3.0, 4.0)), 5.0);
/// assert_eq!(length2(&Vector2::new(1.0e-170, 0.0)), 1.0e-170);
/// ```
pub fn length2(v: &Vector2) -> f64 {
    v.x.hypot(v.y)
}

/// Returns the unsigned angle, in radians in the range [0, pi], between two 2D vectors as
/// computed from their normalized dot product. Returns `None` when either vector has zero length
/// or a length which is not a finite number, as the angle is undefined in both cases.
///
/// Each vector is divided by its length before the dot product is taken, so the result is
/// defined for any pair of finite, non-zero vectors regardless of their magnitude.
///
/// # Arguments
///
/// * `a`: the first vector
/// * `b`: the second vector
///
/// returns: Option<f64>
///
/// # Examples
///
/// ```
/// use edge_measure::common::unsigned_angle;
/// use edge_measure::Vector2;
/// use std::f64::consts::PI;
/// use approx::assert_relative_eq;
/// let angle = unsigned_angle(&Vector2::new(2.0, 0.0), &Vector2::new(0.0, 3.0)).unwrap();
/// assert_relative_eq!(angle, PI / 2.0, epsilon = 1.0e-12);
/// assert!(unsigned_angle(&Vector2::zeros(), &Vector2::new(0.0, 3.0)).is_none());
/// ```
pub fn unsigned_angle(a: &Vector2, b: &Vector2) -> Option<f64> {
    let la = length2(a);
    let lb = length2(b);
    if la == 0.0 || lb == 0.0 || !la.is_finite() || !lb.is_finite() {
        return None;
    }

    let cosine = (b / lb).dot(&(a / la));
    if cosine.is_finite() {
        Some(clamped_acos(cosine))
    } else {
        None
    }
}
