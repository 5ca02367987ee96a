//! # Oriented Frames
//!
//! A frame is a position plus a rotation that maps the local reference
//! frame to world space. Frames along a curve put the local +Z axis on the
//! curve tangent, so a 2D profile drawn in local XY stands across the curve.
//!
//! ## Up Reference
//!
//! Rotations built from a forward direction alone need an up reference:
//! - `WORLD_UP` (+Y) normally
//! - `FALLBACK_UP` (+Z) when forward is (anti)parallel to +Y
//! - identity when forward is zero or not finite
//!
//! None of these cases produce NaN.

use config::constants::{FALLBACK_UP, PARALLEL_TOLERANCE, WORLD_UP};
use glam::{DMat3, DQuat, DVec3};

use super::bezier::BezierCurve;
use super::vector::direction;
use crate::error::MeshResult;

/// A position and orientation sampled along a curve.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::OrientedPoint;
/// use glam::{DQuat, DVec3};
///
/// let frame = OrientedPoint::new(DVec3::new(0.0, 0.0, 5.0), DQuat::IDENTITY);
/// assert_eq!(frame.local_to_world(DVec3::X), DVec3::new(1.0, 0.0, 5.0));
/// assert_eq!(frame.local_to_world_vector(DVec3::X), DVec3::X);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedPoint {
    /// Frame origin in world space
    pub position: DVec3,
    /// Local-to-world rotation
    pub rotation: DQuat,
}

impl OrientedPoint {
    /// Creates a frame from a position and rotation.
    pub fn new(position: DVec3, rotation: DQuat) -> Self {
        Self { position, rotation }
    }

    /// Transforms a local point to world space: `position + rotation * p`.
    #[inline]
    pub fn local_to_world(&self, point: DVec3) -> DVec3 {
        self.position + self.rotation * point
    }

    /// Transforms a local direction to world space, ignoring translation.
    #[inline]
    pub fn local_to_world_vector(&self, vector: DVec3) -> DVec3 {
        self.rotation * vector
    }
}

/// Builds a rotation whose local +Z axis points along `forward`.
///
/// Local +X is `up x forward` and local +Y completes the right-handed basis.
/// See the module docs for the up reference and its fallbacks.
///
/// # Examples
/// ```
/// use sweep_mesh::math::orientation_from_forward;
/// use glam::DVec3;
///
/// let rotation = orientation_from_forward(DVec3::new(0.0, 0.0, 2.0));
/// assert!((rotation * DVec3::X - DVec3::X).length() < 1e-12);
/// ```
pub fn orientation_from_forward(forward: DVec3) -> DQuat {
    let Some(forward) = direction(forward) else {
        return DQuat::IDENTITY;
    };

    let world_up = DVec3::from_array(WORLD_UP);
    let up = if forward.cross(world_up).length() < PARALLEL_TOLERANCE {
        DVec3::from_array(FALLBACK_UP)
    } else {
        world_up
    };

    let right = up.cross(forward).normalize();
    let local_up = forward.cross(right);
    DQuat::from_mat3(&DMat3::from_cols(right, local_up, forward)).normalize()
}

/// Samples the frame at `t`, failing on a zero-length tangent.
///
/// # Errors
///
/// [`crate::MeshError::DegenerateGeometry`] when the tangent at `t` vanishes.
pub fn try_frame_at(curve: &BezierCurve, t: f64) -> MeshResult<OrientedPoint> {
    let tangent = curve.tangent(t)?;
    Ok(OrientedPoint::new(
        curve.point(t),
        orientation_from_forward(tangent),
    ))
}

/// Samples the frame at `t`.
///
/// Where the tangent vanishes the rotation faces along the curve's chord
/// direction instead, and is the identity for a curve collapsed to a point.
///
/// # Examples
/// ```
/// use sweep_mesh::{frame_at, BezierCurve};
/// use glam::DVec3;
///
/// let p = DVec3::new(1.0, 2.0, 3.0);
/// let frame = frame_at(&BezierCurve::new(p, p, p, p), 0.5);
/// assert_eq!(frame.position, p);
/// assert!(frame.rotation.is_finite());
/// ```
pub fn frame_at(curve: &BezierCurve, t: f64) -> OrientedPoint {
    try_frame_at(curve, t).unwrap_or_else(|_| {
        let rotation = curve
            .chord_direction()
            .map_or(DQuat::IDENTITY, orientation_from_forward);
        OrientedPoint::new(curve.point(t), rotation)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_forward(rotation: DQuat, forward: DVec3) {
        assert_abs_diff_eq!(rotation * DVec3::Z, forward, epsilon = 1e-9);
    }

    #[test]
    fn forward_z_is_identity() {
        let rotation = orientation_from_forward(DVec3::Z);
        assert_abs_diff_eq!(rotation * DVec3::X, DVec3::X, epsilon = 1e-12);
        assert_abs_diff_eq!(rotation * DVec3::Y, DVec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn forward_x_turns_local_x_to_negative_z() {
        let rotation = orientation_from_forward(DVec3::X);
        assert_forward(rotation, DVec3::X);
        assert_abs_diff_eq!(rotation * DVec3::X, -DVec3::Z, epsilon = 1e-12);
        assert_abs_diff_eq!(rotation * DVec3::Y, DVec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn arbitrary_forward_keeps_local_up_above_horizon() {
        let forward = DVec3::new(1.0, 0.5, -2.0).normalize();
        let rotation = orientation_from_forward(forward);
        assert_forward(rotation, forward);
        // Local X stays horizontal, local Y leans up
        assert_abs_diff_eq!((rotation * DVec3::X).y, 0.0, epsilon = 1e-12);
        assert!((rotation * DVec3::Y).y > 0.0);
    }

    #[test]
    fn parallel_to_up_uses_fallback_reference() {
        for forward in [DVec3::Y, -DVec3::Y] {
            let rotation = orientation_from_forward(forward);
            assert!(rotation.is_finite());
            assert_forward(rotation, forward);
            // Up reference is +Z, so local X = Z x forward
            assert_abs_diff_eq!(
                rotation * DVec3::X,
                DVec3::Z.cross(forward),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn zero_forward_is_identity() {
        assert_eq!(orientation_from_forward(DVec3::ZERO), DQuat::IDENTITY);
        assert_eq!(
            orientation_from_forward(DVec3::new(f64::NAN, 1.0, 0.0)),
            DQuat::IDENTITY
        );
    }

    #[test]
    fn rotation_is_unit_quaternion() {
        let rotation = orientation_from_forward(DVec3::new(-3.0, 1.0, 4.0));
        assert!(rotation.is_normalized());
    }

    #[test]
    fn frame_transforms_points_and_vectors() {
        let frame = OrientedPoint::new(DVec3::new(2.0, 1.0, 0.0), orientation_from_forward(DVec3::X));
        assert_abs_diff_eq!(
            frame.local_to_world(DVec3::new(0.5, 0.0, 0.0)),
            DVec3::new(2.0, 1.0, -0.5),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(frame.local_to_world_vector(DVec3::Y), DVec3::Y, epsilon = 1e-12);
    }

    #[test]
    fn frame_at_uses_curve_point_and_tangent() {
        let curve = BezierCurve::new(
            DVec3::ZERO,
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(0.0, 0.0, 2.0),
            DVec3::new(0.0, 0.0, 3.0),
        );
        let frame = frame_at(&curve, 0.5);
        assert_abs_diff_eq!(frame.position, DVec3::new(0.0, 0.0, 1.5), epsilon = 1e-12);
        assert_forward(frame.rotation, DVec3::Z);
    }

    #[test]
    fn frame_at_falls_back_to_chord() {
        let curve = BezierCurve::new(DVec3::ZERO, DVec3::ZERO, DVec3::X, DVec3::new(2.0, 0.0, 0.0));
        assert!(try_frame_at(&curve, 0.0).is_err());

        let frame = frame_at(&curve, 0.0);
        assert_eq!(frame.position, DVec3::ZERO);
        assert_forward(frame.rotation, DVec3::X);
    }

    #[test]
    fn frame_at_point_curve_is_identity() {
        let curve = BezierCurve::new(DVec3::ONE, DVec3::ONE, DVec3::ONE, DVec3::ONE);
        let frame = frame_at(&curve, 0.25);
        assert_eq!(frame.rotation, DQuat::IDENTITY);
        assert_eq!(frame.position, DVec3::ONE);
    }
}
