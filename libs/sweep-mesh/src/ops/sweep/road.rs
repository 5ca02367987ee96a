//! # Profile Sweep
//!
//! Places a copy of a cross-section profile at evenly spaced frames along a
//! curve and stitches consecutive copies into triangles.
//!
//! ## Layout
//!
//! Vertices are grouped by ring: ring `r` occupies indices
//! `r * vertex_count .. (r + 1) * vertex_count`, in profile vertex order.
//! Each profile segment `[a, b]` adds two triangles between ring `r` and
//! ring `r + 1`:
//!
//! ```text
//! (a, a', b')  and  (b', b, a)        x' = same vertex on the next ring
//! ```
//!
//! Triangles are counter-clockwise seen from the side `(b - a) x forward`
//! points to. A segment running along local +X therefore faces local +Y.

use config::constants::{DEFAULT_RING_COUNT, MIN_RING_COUNT};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::sample_frames;
use crate::error::{MeshError, MeshResult};
use crate::math::BezierCurve;
use crate::mesh::{check_vertex_budget, MeshBuffers};
use crate::profile::CrossSectionProfile;

/// Parameters for profile sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepParams {
    /// Number of profile copies along the curve (at least 2)
    pub ring_count: u32,
    /// Emit `(vertex.u, t)` texture coordinates
    #[serde(default)]
    pub generate_uvs: bool,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            ring_count: DEFAULT_RING_COUNT,
            generate_uvs: false,
        }
    }
}

/// Sweeps `profile` along `curve`.
///
/// The output has `ring_count * profile.vertex_count()` vertices and
/// `(ring_count - 1) * profile.line_count() * 2` triangles. Identical
/// inputs always produce identical buffers. An empty profile yields empty
/// buffers without sampling the curve.
///
/// # Errors
///
/// - [`MeshError::InvalidConfiguration`] when `ring_count < 2` or the curve
///   is not finite
/// - [`MeshError::InvalidAsset`] when the profile fails validation
/// - [`MeshError::TooManyVertices`] when the output exceeds the vertex budget
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{sweep_profile, BezierCurve, CrossSectionProfile, SweepParams};
/// use glam::DVec3;
///
/// let curve = BezierCurve::new(
///     DVec3::ZERO,
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(2.0, 1.0, 0.0),
/// );
/// let params = SweepParams { ring_count: 8, ..Default::default() };
/// let mesh = sweep_profile(&curve, &CrossSectionProfile::flat(1.0), &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.triangle_count(), 14);
/// ```
pub fn sweep_profile(
    curve: &BezierCurve,
    profile: &CrossSectionProfile,
    params: &SweepParams,
) -> MeshResult<MeshBuffers> {
    if params.ring_count < MIN_RING_COUNT {
        return Err(MeshError::invalid_configuration(format!(
            "ring_count must be >= {MIN_RING_COUNT}, got {}",
            params.ring_count
        )));
    }
    profile.validate()?;
    if profile.is_empty() {
        return Ok(MeshBuffers::new());
    }

    let ring_count = params.ring_count as usize;
    let ring_size = profile.vertex_count();
    let vertex_count = ring_count.saturating_mul(ring_size);
    check_vertex_budget(vertex_count)?;

    let triangle_count = (ring_count - 1) * profile.line_count() * 2;
    let mut mesh = if params.generate_uvs {
        MeshBuffers::with_uv_capacity(vertex_count, triangle_count)
    } else {
        MeshBuffers::with_capacity(vertex_count, triangle_count)
    };

    for sample in sample_frames(curve, params.ring_count)? {
        for vertex in &profile.vertices {
            let position = sample.frame.local_to_world(vertex.point.extend(0.0));
            let normal = sample.frame.local_to_world_vector(vertex.normal.extend(0.0));
            if params.generate_uvs {
                mesh.add_textured_vertex(position, normal, DVec2::new(vertex.u, sample.t));
            } else {
                mesh.add_vertex(position, normal);
            }
        }
    }

    let ring_size = ring_size as u32;
    for ring in 0..params.ring_count - 1 {
        let base = ring * ring_size;
        let base_next = base + ring_size;

        for &[a, b] in &profile.lines {
            mesh.add_triangle(base + a, base_next + a, base_next + b);
            mesh.add_triangle(base_next + b, base + b, base + a);
        }
    }

    log::debug!(
        "profile sweep: {} rings x {} vertices, {} triangles",
        params.ring_count,
        ring_size,
        mesh.triangle_count()
    );

    Ok(mesh)
}
