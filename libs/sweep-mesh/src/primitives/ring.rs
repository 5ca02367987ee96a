//! # Ring Primitive
//!
//! Generates a flat annulus between two concentric circles.
//!
//! ## Layout
//!
//! Angular sample `i` (for `i` in `0..=angular_segments`) contributes an
//! outer vertex at index `2i` and an inner vertex at `2i + 1`. The last
//! sample repeats the first position instead of wrapping indices with a
//! modulo, so the texture seam gets its own vertices (`u = 1` beside
//! `u = 0`).

use std::f64::consts::TAU;

use config::constants::{DEFAULT_ANGULAR_SEGMENTS, DEFAULT_INNER_RADIUS, DEFAULT_THICKNESS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::math::unit_vector_by_angle;
use crate::mesh::{check_vertex_budget, MeshBuffers};

/// Texture coordinate projection for the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UvMode {
    /// `u` follows the angle, `v` is 1 on the outer edge and 0 on the inner edge
    #[default]
    Radial,
    /// Planar projection of the ring onto the unit square, outer edge touching it
    TopDown,
}

/// Parameters for ring generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingParams {
    /// Radius of the inner circle
    pub inner_radius: f64,
    /// Distance from the inner to the outer circle
    pub thickness: f64,
    /// Number of quads around the ring
    pub angular_segments: u32,
    /// Texture coordinate projection
    pub uv_mode: UvMode,
}

impl Default for RingParams {
    fn default() -> Self {
        Self {
            inner_radius: DEFAULT_INNER_RADIUS,
            thickness: DEFAULT_THICKNESS,
            angular_segments: DEFAULT_ANGULAR_SEGMENTS,
            uv_mode: UvMode::Radial,
        }
    }
}

impl RingParams {
    /// Radius of the outer circle.
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }

    /// Number of vertices the ring will have, seam duplicates included.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        (self.angular_segments as usize + 1) * 2
    }
}

/// Generates a ring mesh in the XY plane with normals along +Z.
///
/// Radii are not range-checked; hosts clamp them before calling (see
/// `config::constants::clamp_ring_radius`). Any `angular_segments >= 1`
/// produces a mesh, degenerate for fewer than 3 segments.
///
/// # Errors
///
/// [`MeshError::InvalidConfiguration`] when `angular_segments` is 0.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::{generate_ring, RingParams, UvMode};
///
/// let params = RingParams {
///     inner_radius: 1.0,
///     thickness: 1.0,
///     angular_segments: 4,
///     uv_mode: UvMode::Radial,
/// };
/// let mesh = generate_ring(&params).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn generate_ring(params: &RingParams) -> MeshResult<MeshBuffers> {
    if params.angular_segments == 0 {
        return Err(MeshError::invalid_configuration(
            "ring angular_segments must be at least 1",
        ));
    }
    check_vertex_budget(params.vertex_count())?;

    let segments = params.angular_segments;
    let inner_radius = params.inner_radius;
    let outer_radius = params.outer_radius();
    let inner_uv_scale = if outer_radius != 0.0 {
        inner_radius / outer_radius
    } else {
        0.0
    };

    let mut mesh = MeshBuffers::with_uv_capacity(params.vertex_count(), segments as usize * 2);

    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let dir = unit_vector_by_angle(t * TAU);

        let (outer_uv, inner_uv) = match params.uv_mode {
            UvMode::Radial => (DVec2::new(t, 1.0), DVec2::new(t, 0.0)),
            UvMode::TopDown => (
                dir * 0.5 + DVec2::splat(0.5),
                dir * inner_uv_scale * 0.5 + DVec2::splat(0.5),
            ),
        };

        mesh.add_textured_vertex((dir * outer_radius).extend(0.0), DVec3::Z, outer_uv);
        mesh.add_textured_vertex((dir * inner_radius).extend(0.0), DVec3::Z, inner_uv);
    }

    for i in 0..segments {
        let root = i * 2;
        let inner = root + 1;
        let outer_next = root + 2;
        let inner_next = root + 3;

        mesh.add_triangle(root, outer_next, inner_next);
        mesh.add_triangle(root, inner_next, inner);
    }

    log::debug!(
        "ring mesh: {} vertices, {} triangles ({:?} uvs)",
        mesh.vertex_count(),
        mesh.triangle_count(),
        params.uv_mode
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn params(angular_segments: u32, uv_mode: UvMode) -> RingParams {
        RingParams {
            inner_radius: 1.0,
            thickness: 1.0,
            angular_segments,
            uv_mode,
        }
    }

    #[test]
    fn test_ring_counts() {
        for segments in 3..=32 {
            let mesh = generate_ring(&params(segments, UvMode::Radial)).unwrap();
            assert_eq!(mesh.vertex_count(), (segments as usize + 1) * 2);
            assert_eq!(mesh.indices().len(), segments as usize * 6);
            assert!(mesh.validate());
        }
    }

    #[test]
    fn test_ring_radial_uvs() {
        let mesh = generate_ring(&params(4, UvMode::Radial)).unwrap();
        let uvs = mesh.uvs().unwrap();
        let expected_u = [0.0, 0.25, 0.5, 0.75, 1.0];

        for (i, u) in expected_u.iter().enumerate() {
            assert_eq!(uvs[i * 2], DVec2::new(*u, 1.0), "outer uv {i}");
            assert_eq!(uvs[i * 2 + 1], DVec2::new(*u, 0.0), "inner uv {i}");
        }
    }

    #[test]
    fn test_ring_radii() {
        let mesh = generate_ring(&params(8, UvMode::Radial)).unwrap();
        for (i, v) in mesh.vertices().iter().enumerate() {
            let expected = if i % 2 == 0 { 2.0 } else { 1.0 };
            assert_abs_diff_eq!(v.length(), expected, epsilon = 1e-12);
            assert_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_ring_seam_is_closed() {
        let segments = 7;
        let mesh = generate_ring(&params(segments, UvMode::Radial)).unwrap();
        let last = segments * 2;
        assert_abs_diff_eq!(mesh.vertex(last), mesh.vertex(0), epsilon = 1e-12);
        assert_abs_diff_eq!(mesh.vertex(last + 1), mesh.vertex(1), epsilon = 1e-12);
        // Same position, different u
        let uvs = mesh.uvs().unwrap();
        assert_eq!(uvs[0].x, 0.0);
        assert_eq!(uvs[last as usize].x, 1.0);
    }

    #[test]
    fn test_ring_top_down_uvs() {
        let mesh = generate_ring(&params(4, UvMode::TopDown)).unwrap();
        let uvs = mesh.uvs().unwrap();
        // Angle 0: outer at the right edge, inner halfway there
        assert_abs_diff_eq!(uvs[0], DVec2::new(1.0, 0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(uvs[1], DVec2::new(0.75, 0.5), epsilon = 1e-12);
        // Quarter turn: outer at the top edge
        assert_abs_diff_eq!(uvs[2], DVec2::new(0.5, 1.0), epsilon = 1e-12);
        for uv in uvs {
            assert!((0.0..=1.0 + 1e-12).contains(&uv.x));
            assert!((0.0..=1.0 + 1e-12).contains(&uv.y));
        }
    }

    #[test]
    fn test_ring_normals_face_z() {
        let mesh = generate_ring(&params(5, UvMode::Radial)).unwrap();
        assert!(mesh.normals().iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_ring_winding_is_ccw_from_normal() {
        let mesh = generate_ring(&params(6, UvMode::Radial)).unwrap();
        for [a, b, c] in mesh.triangles() {
            let (a, b, c) = (mesh.vertex(a), mesh.vertex(b), mesh.vertex(c));
            assert!((b - a).cross(c - a).z > 0.0);
        }
    }

    #[test]
    fn test_ring_single_segment_does_not_crash() {
        let mesh = generate_ring(&params(1, UvMode::TopDown)).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.validate());
        assert!(mesh.vertices().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_ring_zero_segments_rejected() {
        let err = generate_ring(&params(0, UvMode::Radial)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidConfiguration { .. }));
    }

    #[test]
    fn test_ring_zero_outer_radius_top_down_is_finite() {
        let params = RingParams {
            inner_radius: 0.0,
            thickness: 0.0,
            angular_segments: 3,
            uv_mode: UvMode::TopDown,
        };
        let mesh = generate_ring(&params).unwrap();
        assert!(mesh.uvs().unwrap().iter().all(|uv| uv.is_finite()));
    }

    #[test]
    fn test_ring_params_from_json() {
        let json = r#"{
            "inner_radius": 0.5,
            "thickness": 0.25,
            "angular_segments": 12,
            "uv_mode": "top_down"
        }"#;
        let params: RingParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.uv_mode, UvMode::TopDown);
        assert_eq!(params.outer_radius(), 0.75);
    }
}
