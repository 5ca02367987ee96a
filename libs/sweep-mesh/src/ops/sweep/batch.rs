//! # Batch Sweeping
//!
//! Sweeps one profile along many curves. Each mesh is independent, so with
//! the `parallel` feature the curves are distributed over the rayon pool.
//! A single mesh is always built on one thread.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::road::{sweep_profile, SweepParams};
use crate::error::MeshResult;
use crate::math::BezierCurve;
use crate::mesh::MeshBuffers;
use crate::profile::CrossSectionProfile;

/// Sweeps `profile` along every curve, returning one result per curve in
/// input order.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{sweep_batch, BezierCurve, CrossSectionProfile, SweepParams};
/// use glam::DVec3;
///
/// let straight = BezierCurve::new(DVec3::ZERO, DVec3::Z, DVec3::Z * 2.0, DVec3::Z * 3.0);
/// let meshes = sweep_batch(&[straight, straight], &CrossSectionProfile::flat(1.0), &SweepParams::default());
/// assert_eq!(meshes.len(), 2);
/// ```
pub fn sweep_batch(
    curves: &[BezierCurve],
    profile: &CrossSectionProfile,
    params: &SweepParams,
) -> Vec<MeshResult<MeshBuffers>> {
    sweep_each(curves, profile, params)
}

#[cfg(feature = "parallel")]
fn sweep_each(
    curves: &[BezierCurve],
    profile: &CrossSectionProfile,
    params: &SweepParams,
) -> Vec<MeshResult<MeshBuffers>> {
    curves
        .par_iter()
        .map(|curve| sweep_profile(curve, profile, params))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn sweep_each(
    curves: &[BezierCurve],
    profile: &CrossSectionProfile,
    params: &SweepParams,
) -> Vec<MeshResult<MeshBuffers>> {
    curves
        .iter()
        .map(|curve| sweep_profile(curve, profile, params))
        .collect()
}
