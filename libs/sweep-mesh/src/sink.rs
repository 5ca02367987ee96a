//! # Render Sink
//!
//! The hand-off point between the generators and whatever displays the
//! result. Generators never hold on to their output; a sink receives each
//! freshly built [`MeshBuffers`] and decides what to keep.

use crate::error::MeshResult;
use crate::mesh::MeshBuffers;

/// Consumer of finished mesh buffers.
pub trait MeshSink {
    /// Takes ownership of a complete set of buffers.
    fn submit(&mut self, mesh: MeshBuffers);
}

/// A sink holding only the most recently submitted mesh.
///
/// Each submission replaces the previous buffers in full.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{MeshBuffers, MeshSink, MeshSlot};
///
/// let mut slot = MeshSlot::default();
/// slot.submit(MeshBuffers::new());
/// assert_eq!(slot.submissions(), 1);
/// assert!(slot.current().is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshSlot {
    current: Option<MeshBuffers>,
    submissions: u64,
}

impl MeshSlot {
    /// Returns the latest mesh, if any was submitted.
    pub fn current(&self) -> Option<&MeshBuffers> {
        self.current.as_ref()
    }

    /// Returns how many meshes were submitted so far.
    pub fn submissions(&self) -> u64 {
        self.submissions
    }

    /// Removes and returns the latest mesh.
    pub fn take(&mut self) -> Option<MeshBuffers> {
        self.current.take()
    }
}

impl MeshSink for MeshSlot {
    fn submit(&mut self, mesh: MeshBuffers) {
        self.current = Some(mesh);
        self.submissions += 1;
    }
}

impl MeshSink for Vec<MeshBuffers> {
    fn submit(&mut self, mesh: MeshBuffers) {
        self.push(mesh);
    }
}

/// Runs one generation pass and hands the result to `sink`.
///
/// On failure nothing is submitted and the sink keeps whatever it had; the
/// error is returned so the host can skip this tick or abort.
///
/// # Example
///
/// ```rust
/// use sweep_mesh::{generate_ring, regenerate, MeshSlot, RingParams};
///
/// let mut slot = MeshSlot::default();
/// let params = RingParams::default();
/// regenerate(&mut slot, || generate_ring(&params)).unwrap();
/// assert!(slot.current().is_some());
/// ```
pub fn regenerate<S, F>(sink: &mut S, generate: F) -> MeshResult<()>
where
    S: MeshSink + ?Sized,
    F: FnOnce() -> MeshResult<MeshBuffers>,
{
    let mesh = generate()?;
    sink.submit(mesh);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use glam::DVec3;

    fn single_vertex(x: f64) -> MeshBuffers {
        let mut mesh = MeshBuffers::new();
        mesh.add_vertex(DVec3::new(x, 0.0, 0.0), DVec3::Z);
        mesh
    }

    #[test]
    fn test_slot_replaces_previous_mesh() {
        let mut slot = MeshSlot::default();
        slot.submit(single_vertex(1.0));
        slot.submit(single_vertex(2.0));

        assert_eq!(slot.submissions(), 2);
        let current = slot.current().unwrap();
        assert_eq!(current.vertex_count(), 1);
        assert_eq!(current.vertex(0).x, 2.0);
    }

    #[test]
    fn test_slot_take() {
        let mut slot = MeshSlot::default();
        slot.submit(single_vertex(1.0));
        assert!(slot.take().is_some());
        assert!(slot.current().is_none());
        assert_eq!(slot.submissions(), 1);
    }

    #[test]
    fn test_regenerate_keeps_previous_on_error() {
        let mut slot = MeshSlot::default();
        regenerate(&mut slot, || Ok(single_vertex(1.0))).unwrap();

        let result = regenerate(&mut slot, || {
            Err(MeshError::invalid_configuration("ring_count must be >= 2"))
        });

        assert!(result.is_err());
        assert_eq!(slot.submissions(), 1);
        assert_eq!(slot.current().unwrap().vertex(0).x, 1.0);
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut meshes: Vec<MeshBuffers> = Vec::new();
        regenerate(&mut meshes, || Ok(single_vertex(1.0))).unwrap();
        regenerate(&mut meshes, || Ok(single_vertex(2.0))).unwrap();
        assert_eq!(meshes.len(), 2);
    }
}
