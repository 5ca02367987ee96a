//! # Cubic Bezier Curves
//!
//! Evaluation by De Casteljau reduction:
//!
//! ```text
//! a = lerp(p0, p1, t)   b = lerp(p1, p2, t)   c = lerp(p2, p3, t)
//! d = lerp(a, b, t)     e = lerp(b, c, t)
//! point = lerp(d, e, t)  tangent = normalize(e - d)
//! ```
//!
//! The parameter is never clamped. Values outside `[0, 1]` extrapolate past
//! the curve ends.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::vector::{direction, lerp};
use crate::error::{MeshError, MeshResult};

/// A cubic Bezier curve defined by four control points.
///
/// The curve passes through `p0` and `p3`; `p1` and `p2` shape the start and
/// end tangents.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::BezierCurve;
/// use glam::DVec3;
///
/// let curve = BezierCurve::new(
///     DVec3::ZERO,
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(2.0, 1.0, 0.0),
/// );
/// assert_eq!(curve.point(1.0), DVec3::new(2.0, 1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierCurve {
    /// Control points `[p0, p1, p2, p3]`
    pub points: [DVec3; 4],
}

impl BezierCurve {
    /// Creates a curve from its four control points.
    pub fn new(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3) -> Self {
        Self {
            points: [p0, p1, p2, p3],
        }
    }

    /// Evaluates the curve position at `t`.
    pub fn point(&self, t: f64) -> DVec3 {
        let [p0, p1, p2, p3] = self.points;
        bezier_point(p0, p1, p2, p3, t)
    }

    /// Evaluates the unit tangent direction at `t`.
    ///
    /// # Errors
    ///
    /// [`MeshError::DegenerateGeometry`] when the tangent has zero length,
    /// e.g. at `t = 0` with `p0 == p1`.
    pub fn tangent(&self, t: f64) -> MeshResult<DVec3> {
        let [p0, p1, p2, p3] = self.points;
        bezier_tangent_direction(p0, p1, p2, p3, t)
    }

    /// Direction from `p0` to the first control point distinct from it.
    ///
    /// Used as a stand-in orientation where the tangent vanishes. Returns
    /// `None` when all four points coincide.
    pub fn chord_direction(&self) -> Option<DVec3> {
        let p0 = self.points[0];
        self.points[1..].iter().find_map(|p| direction(*p - p0))
    }

    /// Returns true if every control point is finite.
    pub fn is_finite(&self) -> bool {
        self.points.iter().all(|p| p.is_finite())
    }
}

/// Runs the first two De Casteljau levels, returning `(d, e)`.
#[inline]
fn reduce(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> (DVec3, DVec3) {
    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    let c = lerp(p2, p3, t);
    (lerp(a, b, t), lerp(b, c, t))
}

/// Evaluates a cubic Bezier position.
///
/// # Examples
/// ```
/// use sweep_mesh::math::bezier_point;
/// use glam::DVec3;
/// let p = DVec3::new(1.0, 2.0, 3.0);
/// assert_eq!(bezier_point(p, p, p, p, 0.3), p);
/// ```
pub fn bezier_point(p0: DVec3, p1: DVec3, p2: DVec3, p3: DVec3, t: f64) -> DVec3 {
    let (d, e) = reduce(p0, p1, p2, p3, t);
    lerp(d, e, t)
}

/// Evaluates the normalized cubic Bezier tangent `normalize(e - d)`.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] when `e - d` is too short to normalize.
///
/// # Examples
/// ```
/// use sweep_mesh::math::bezier_tangent_direction;
/// use glam::DVec3;
/// let p = DVec3::ONE;
/// assert!(bezier_tangent_direction(p, p, p, p, 0.5).is_err());
/// ```
pub fn bezier_tangent_direction(
    p0: DVec3,
    p1: DVec3,
    p2: DVec3,
    p3: DVec3,
    t: f64,
) -> MeshResult<DVec3> {
    let (d, e) = reduce(p0, p1, p2, p3, t);
    direction(e - d).ok_or_else(|| {
        MeshError::degenerate(format!("zero-length curve tangent at t={t}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn s_curve() -> BezierCurve {
        BezierCurve::new(
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
        )
    }

    #[test]
    fn endpoints_are_interpolated() {
        let curve = s_curve();
        assert_eq!(curve.point(0.0), curve.points[0]);
        assert_eq!(curve.point(1.0), curve.points[3]);
    }

    #[test]
    fn midpoint_matches_bernstein_form() {
        // B(0.5) = (p0 + 3 p1 + 3 p2 + p3) / 8
        let curve = s_curve();
        let [p0, p1, p2, p3] = curve.points;
        let expected = (p0 + 3.0 * p1 + 3.0 * p2 + p3) / 8.0;
        assert_abs_diff_eq!(curve.point(0.5), expected, epsilon = 1e-12);
    }

    #[test]
    fn coincident_points_are_a_fixed_point() {
        let p = DVec3::new(-4.0, 0.5, 9.0);
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            assert_eq!(bezier_point(p, p, p, p, t), p);
        }
    }

    #[test]
    fn parameter_is_not_clamped() {
        // A straight, evenly spaced curve is linear in t, so t=2 lands at 2 * p3
        let curve = BezierCurve::new(
            DVec3::ZERO,
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        );
        assert_abs_diff_eq!(curve.point(2.0), DVec3::new(6.0, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(curve.point(-1.0), DVec3::new(-3.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn tangent_at_endpoints_follows_control_legs() {
        let curve = s_curve();
        assert_abs_diff_eq!(curve.tangent(0.0).unwrap(), DVec3::X, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.tangent(1.0).unwrap(), DVec3::X, epsilon = 1e-12);
    }

    #[test]
    fn tangent_is_unit_length() {
        let curve = s_curve();
        for i in 0..=8 {
            let t = i as f64 / 8.0;
            assert_abs_diff_eq!(curve.tangent(t).unwrap().length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn tangent_degenerate_at_collapsed_leg() {
        let curve = BezierCurve::new(DVec3::ZERO, DVec3::ZERO, DVec3::Y, DVec3::X);
        let err = curve.tangent(0.0).unwrap_err();
        assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
        // Interior parameters are still fine
        assert!(curve.tangent(0.5).is_ok());
    }

    #[test]
    fn chord_direction_skips_coincident_points() {
        let curve = BezierCurve::new(DVec3::ZERO, DVec3::ZERO, DVec3::new(0.0, 0.0, 5.0), DVec3::X);
        assert_eq!(curve.chord_direction(), Some(DVec3::Z));

        let point = BezierCurve::new(DVec3::ONE, DVec3::ONE, DVec3::ONE, DVec3::ONE);
        assert_eq!(point.chord_direction(), None);
    }

    #[test]
    fn curve_round_trips_through_json() {
        let curve = s_curve();
        let json = serde_json::to_string(&curve).unwrap();
        let parsed: BezierCurve = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, curve);
    }
}
