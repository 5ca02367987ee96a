//! Small vector helpers on top of `glam`.

use config::constants::MIN_DIRECTION_LENGTH;
use glam::{DVec2, DVec3};

/// Returns the unit vector `(cos, sin)` for an angle in radians.
///
/// # Examples
/// ```
/// use sweep_mesh::math::unit_vector_by_angle;
/// let v = unit_vector_by_angle(0.0);
/// assert_eq!(v, glam::DVec2::new(1.0, 0.0));
/// ```
#[inline]
pub fn unit_vector_by_angle(angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(cos, sin)
}

/// Linearly interpolates between `a` and `b`.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate.
///
/// # Examples
/// ```
/// use sweep_mesh::math::lerp;
/// use glam::DVec3;
/// assert_eq!(lerp(DVec3::ZERO, DVec3::X, 2.0), DVec3::new(2.0, 0.0, 0.0));
/// ```
#[inline]
pub fn lerp(a: DVec3, b: DVec3, t: f64) -> DVec3 {
    a + (b - a) * t
}

/// Normalizes `v`, or returns `None` when it is too short (or not finite)
/// to carry a direction.
///
/// # Examples
/// ```
/// use sweep_mesh::math::direction;
/// use glam::DVec3;
/// assert_eq!(direction(DVec3::new(0.0, 3.0, 0.0)), Some(DVec3::Y));
/// assert_eq!(direction(DVec3::ZERO), None);
/// ```
#[inline]
pub fn direction(v: DVec3) -> Option<DVec3> {
    let length = v.length();
    if !length.is_finite() || length < MIN_DIRECTION_LENGTH {
        return None;
    }
    Some(v / length)
}
