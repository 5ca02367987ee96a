//! # Strip Sweep
//!
//! Sweeps a single flat strip of constant width along a curve. Unlike the
//! profile sweep it always carries texture coordinates: `u` is 1 on the left
//! edge and 0 on the right, `v` is the curve parameter.

use config::constants::{DEFAULT_STRIP_HALF_WIDTH, DEFAULT_STRIP_SEGMENTS};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use super::sample_frames;
use crate::error::{MeshError, MeshResult};
use crate::math::BezierCurve;
use crate::mesh::{check_vertex_budget, MeshBuffers};

/// Parameters for strip sweeping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripParams {
    /// Number of quads along the curve
    pub segments: u32,
    /// Distance from the curve to each strip edge
    pub half_width: f64,
}

impl Default for StripParams {
    fn default() -> Self {
        Self {
            segments: DEFAULT_STRIP_SEGMENTS,
            half_width: DEFAULT_STRIP_HALF_WIDTH,
        }
    }
}

/// Sweeps a flat strip along `curve`.
///
/// Sample `i` (for `i` in `0..=segments`) contributes a left vertex at
/// index `2i` and a right vertex at `2i + 1`, both with the frame's local +Y
/// as normal.
///
/// # Errors
///
/// [`MeshError::InvalidConfiguration`] when `segments` is 0 or the curve is
/// not finite.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{generate_strip, BezierCurve, StripParams};
/// use glam::DVec3;
///
/// let curve = BezierCurve::new(DVec3::ZERO, DVec3::Z, DVec3::Z * 2.0, DVec3::Z * 3.0);
/// let mesh = generate_strip(&curve, &StripParams { segments: 4, half_width: 0.5 }).unwrap();
/// assert_eq!(mesh.vertex_count(), 10);
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn generate_strip(curve: &BezierCurve, params: &StripParams) -> MeshResult<MeshBuffers> {
    if params.segments == 0 {
        return Err(MeshError::invalid_configuration(
            "strip segments must be at least 1",
        ));
    }

    let vertex_count = (params.segments as usize + 1) * 2;
    check_vertex_budget(vertex_count)?;
    let samples = params.segments + 1;

    let left = DVec3::new(-params.half_width, 0.0, 0.0);
    let right = DVec3::new(params.half_width, 0.0, 0.0);

    let mut mesh = MeshBuffers::with_uv_capacity(vertex_count, params.segments as usize * 2);

    for sample in sample_frames(curve, samples)? {
        let frame = sample.frame;
        let normal = frame.local_to_world_vector(DVec3::Y);

        mesh.add_textured_vertex(frame.local_to_world(left), normal, DVec2::new(1.0, sample.t));
        mesh.add_textured_vertex(frame.local_to_world(right), normal, DVec2::new(0.0, sample.t));
    }

    for i in 0..params.segments {
        let root = i * 2;
        let right = root + 1;
        let left_next = root + 2;
        let right_next = root + 3;

        mesh.add_triangle(root, left_next, right_next);
        mesh.add_triangle(root, right_next, right);
    }

    log::debug!(
        "strip sweep: {} segments, {} vertices",
        params.segments,
        mesh.vertex_count()
    );

    Ok(mesh)
}
