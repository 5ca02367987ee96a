//! # Quad Primitive
//!
//! A single textured square in the XY plane, facing +Z.

use glam::{DVec2, DVec3};

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffers;

/// Creates a square quad spanning `[-half_extent, half_extent]` on X and Y.
///
/// Vertex order is top-left, top-right, bottom-left, bottom-right, with uvs
/// `(0,1)`, `(1,1)`, `(0,0)`, `(1,0)`.
///
/// # Errors
///
/// [`MeshError::InvalidConfiguration`] when `half_extent` is not a positive
/// finite number.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::primitives::create_quad;
///
/// let mesh = create_quad(1.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.indices(), &[2, 1, 0, 2, 3, 1]);
/// ```
pub fn create_quad(half_extent: f64) -> MeshResult<MeshBuffers> {
    if !(half_extent.is_finite() && half_extent > 0.0) {
        return Err(MeshError::invalid_configuration(format!(
            "quad half extent must be positive: {half_extent}"
        )));
    }

    let h = half_extent;
    let corners = [
        (DVec3::new(-h, h, 0.0), DVec2::new(0.0, 1.0)),
        (DVec3::new(h, h, 0.0), DVec2::new(1.0, 1.0)),
        (DVec3::new(-h, -h, 0.0), DVec2::new(0.0, 0.0)),
        (DVec3::new(h, -h, 0.0), DVec2::new(1.0, 0.0)),
    ];

    let mut mesh = MeshBuffers::with_uv_capacity(4, 2);
    for (position, uv) in corners {
        mesh.add_textured_vertex(position, DVec3::Z, uv);
    }
    mesh.add_triangle(2, 1, 0);
    mesh.add_triangle(2, 3, 1);

    Ok(mesh)
}
