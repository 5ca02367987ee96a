//! # Mesh Buffers
//!
//! Output of every generator: vertex positions, normals, optional texture
//! coordinates and a flat triangle index list.

use config::constants::MAX_VERTICES;
use glam::{DVec2, DVec3};

use crate::error::{MeshError, MeshResult};

/// A freshly generated triangle mesh.
///
/// All geometry is computed in f64. Export to f32 only happens when the
/// buffers are handed to a GPU-facing sink.
///
/// Invariants upheld by the generators (see [`MeshBuffers::validate`]):
/// - `normals().len() == vertices().len()`
/// - `uvs()`, when present, has one entry per vertex
/// - `indices()` holds three entries per triangle, each `< vertex_count()`
///
/// # Example
///
/// ```rust
/// use sweep_mesh::MeshBuffers;
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffers::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// One normal per vertex
    normals: Vec<DVec3>,
    /// Optional texture coordinates, one per vertex
    uvs: Option<Vec<DVec2>>,
    /// Triangle indices (3 per triangle, CCW seen from the normal side)
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates buffers with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: None,
            indices: Vec::with_capacity(triangle_count * 3),
        }
    }

    /// Creates buffers with pre-allocated capacity and a texture coordinate channel.
    pub fn with_uv_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            uvs: Some(Vec::with_capacity(vertex_count)),
            ..Self::with_capacity(vertex_count, triangle_count)
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a vertex with normal and texture coordinate and returns its index.
    ///
    /// Enables the texture coordinate channel on first use.
    pub fn add_textured_vertex(&mut self, position: DVec3, normal: DVec3, uv: DVec2) -> u32 {
        self.uvs.get_or_insert_with(Vec::new).push(uv);
        self.add_vertex(position, normal)
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Returns a reference to the vertex positions.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the texture coordinates, if this mesh carries them.
    #[inline]
    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Returns the flat triangle index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        let base = index * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Iterates over triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the buffer invariants.
    ///
    /// Checks:
    /// - One normal (and uv, if present) per vertex
    /// - Index count is a multiple of three
    /// - All triangle indices are valid
    ///
    /// Degenerate (zero-area) triangles are allowed; a ring with a single
    /// angular segment legitimately produces them.
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len();

        if self.normals.len() != vertex_count {
            return false;
        }
        if let Some(uvs) = &self.uvs {
            if uvs.len() != vertex_count {
                return false;
            }
        }
        if self.indices.len() % 3 != 0 {
            return false;
        }

        self.indices.iter().all(|&i| (i as usize) < vertex_count)
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as f32 array for GPU.
    ///
    /// Returns flattened [u, v, u, v, ...] array.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs.as_ref().map(|uvs| {
            let mut result = Vec::with_capacity(uvs.len() * 2);
            for uv in uvs {
                result.push(uv.x as f32);
                result.push(uv.y as f32);
            }
            result
        })
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

/// Rejects outputs that would exceed the vertex budget.
pub(crate) fn check_vertex_budget(count: usize) -> MeshResult<()> {
    if count > MAX_VERTICES {
        return Err(MeshError::TooManyVertices {
            count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}
