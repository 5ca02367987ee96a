//! # Cross-Section Profiles
//!
//! A profile is the 2D shape swept along a curve: an ordered list of
//! vertices (point, normal, u parameter) plus independent line segments
//! given as vertex index pairs.
//!
//! Segments do not have to form a closed loop. A road with a median is two
//! disjoint segments, and the sweep stitches one quad strip per segment
//! without bridging the gap.
//!
//! Profiles are authored outside this crate and deserialize with `serde`:
//!
//! ```json
//! {
//!   "vertices": [
//!     { "point": [-0.5, 0.0], "normal": [0.0, 1.0], "u": 0.0 },
//!     { "point": [0.5, 0.0], "normal": [0.0, 1.0], "u": 1.0 }
//!   ],
//!   "lines": [[0, 1]]
//! }
//! ```
//!
//! Index ranges are checked at generation time by [`CrossSectionProfile::validate`].

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// One vertex of a cross-section profile, in profile-local 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileVertex {
    /// Position in the profile plane (local X across, local Y up)
    pub point: DVec2,
    /// Surface normal in the profile plane
    pub normal: DVec2,
    /// Texture coordinate across the profile
    #[serde(default)]
    pub u: f64,
}

impl ProfileVertex {
    /// Creates a vertex with `u = 0`.
    pub fn new(point: DVec2, normal: DVec2) -> Self {
        Self {
            point,
            normal,
            u: 0.0,
        }
    }

    /// Sets the texture coordinate across the profile.
    pub fn with_u(mut self, u: f64) -> Self {
        self.u = u;
        self
    }
}

/// A 2D polyline-with-normals profile.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::CrossSectionProfile;
///
/// let profile = CrossSectionProfile::flat(1.0);
/// assert_eq!(profile.vertex_count(), 2);
/// assert_eq!(profile.line_count(), 1);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CrossSectionProfile {
    /// Ordered profile vertices
    pub vertices: Vec<ProfileVertex>,
    /// Line segments as `[a, b]` vertex index pairs
    pub lines: Vec<[u32; 2]>,
}

impl CrossSectionProfile {
    /// Creates a profile from vertices and segment index pairs.
    pub fn new(vertices: Vec<ProfileVertex>, lines: Vec<[u32; 2]>) -> Self {
        Self { vertices, lines }
    }

    /// Creates a profile from a flat index list `[a0, b0, a1, b1, ...]`.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidAsset`] if the list has an odd length.
    pub fn from_flat_indices(vertices: Vec<ProfileVertex>, indices: &[u32]) -> MeshResult<Self> {
        if indices.len() % 2 != 0 {
            return Err(MeshError::invalid_asset(format!(
                "line index list must hold pairs, got {} entries",
                indices.len()
            )));
        }
        let lines = indices
            .chunks_exact(2)
            .map(|pair| [pair[0], pair[1]])
            .collect();
        Ok(Self { vertices, lines })
    }

    /// Creates a flat strip of the given width centred on the origin.
    ///
    /// Both normals point along local +Y; `u` runs 0 to 1 from left to right.
    pub fn flat(width: f64) -> Self {
        let half = width * 0.5;
        Self::new(
            vec![
                ProfileVertex::new(DVec2::new(-half, 0.0), DVec2::Y).with_u(0.0),
                ProfileVertex::new(DVec2::new(half, 0.0), DVec2::Y).with_u(1.0),
            ],
            vec![[0, 1]],
        )
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of line segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the number of line indices (two per segment).
    #[inline]
    pub fn line_index_count(&self) -> usize {
        self.lines.len() * 2
    }

    /// Returns true if the profile has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks that every line index refers to a vertex and all data is finite.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidAsset`] naming the first offending line or vertex.
    pub fn validate(&self) -> MeshResult<()> {
        let vertex_count = self.vertices.len();

        for (line, pair) in self.lines.iter().enumerate() {
            if let Some(&index) = pair.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_asset(format!(
                    "line {line} index {index} out of bounds (vertex count {vertex_count})"
                )));
            }
        }

        if let Some(index) = self
            .vertices
            .iter()
            .position(|v| !(v.point.is_finite() && v.normal.is_finite() && v.u.is_finite()))
        {
            return Err(MeshError::invalid_asset(format!(
                "vertex {index} has non-finite data"
            )));
        }

        Ok(())
    }
}
