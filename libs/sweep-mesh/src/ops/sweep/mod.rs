//! # Sweep Operations
//!
//! Algorithms that carry a 2D shape along a cubic Bezier curve:
//! - **sweep_profile**: Sweep a [`CrossSectionProfile`](crate::CrossSectionProfile),
//!   one quad strip per profile segment
//! - **generate_strip**: Sweep a single flat strip with `(u, t)` texture coordinates
//! - **sweep_batch**: Sweep one profile along many independent curves
//!
//! ## Frames
//!
//! Curve samples sit at `t = i / (samples - 1)`, so the first and last
//! samples land exactly on the curve endpoints. Each sample gets an
//! [`OrientedPoint`] whose local +Z follows the tangent. Where the tangent
//! vanishes the previous sample's rotation is reused; a vanishing tangent on
//! the first sample faces along the curve chord instead.

mod batch;
mod road;
mod strip;


pub use batch::sweep_batch;
pub use road::{sweep_profile, SweepParams};
pub use strip::{generate_strip, StripParams};

use crate::error::{MeshError, MeshResult};
use crate::math::{frame_at, try_frame_at, BezierCurve, OrientedPoint};
use crate::mesh::check_vertex_budget;

/// A curve sample: its parameter and frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CurveSample {
    pub t: f64,
    pub frame: OrientedPoint,
}

/// Samples `samples` evenly spaced frames spanning `t = 0..=1`.
///
/// The sample count is held to the vertex budget.
pub(crate) fn sample_frames(curve: &BezierCurve, samples: u32) -> MeshResult<Vec<CurveSample>> {
    if samples < 2 {
        return Err(MeshError::invalid_configuration(format!(
            "a sweep needs at least 2 curve samples, got {samples}"
        )));
    }
    if !curve.is_finite() {
        return Err(MeshError::invalid_configuration(
            "curve control points must be finite",
        ));
    }

    check_vertex_budget(samples as usize)?;

    let last = (samples - 1) as f64;
    let mut result: Vec<CurveSample> = Vec::with_capacity(samples as usize);
    let mut recovered = 0usize;

    for i in 0..samples {
        let t = i as f64 / last;
        let frame = match try_frame_at(curve, t) {
            Ok(frame) => frame,
            Err(_) => {
                recovered += 1;
                match result.last() {
                    Some(previous) => OrientedPoint::new(curve.point(t), previous.frame.rotation),
                    None => frame_at(curve, t),
                }
            }
        };
        result.push(CurveSample { t, frame });
    }

    if recovered > 0 {
        log::warn!(
            "zero-length curve tangent at {recovered} of {samples} samples; reused neighbouring orientation"
        );
    }

    Ok(result)
}
