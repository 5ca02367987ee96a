//! # Sweep Mesh
//!
//! Procedural mesh generation from curves and flat profiles.
//!
//! ## Architecture
//!
//! ```text
//! math (vector, bezier, frame)
//!    ↓
//! primitives (ring, quad)        ops::sweep (profile, strip, batch) ← profile
//!    ↓                                ↓
//!             MeshBuffers → MeshSink (host renderer)
//! ```
//!
//! ## Generators
//!
//! Every generator is a pure function of its inputs returning fresh
//! [`MeshBuffers`]. Nothing is cached between calls, so a host may call
//! them every frame or only when an input changes.
//! - **Ring**: flat annulus with radial or top-down texture coordinates
//! - **Quad**: a single textured square
//! - **Profile sweep**: a [`CrossSectionProfile`] carried along a cubic Bezier
//! - **Strip sweep**: a flat textured strip carried along a cubic Bezier
//!
//! ## Usage
//!
//! ```rust
//! use sweep_mesh::{sweep_profile, BezierCurve, CrossSectionProfile, SweepParams};
//! use glam::DVec3;
//!
//! let curve = BezierCurve::new(
//!     DVec3::ZERO,
//!     DVec3::new(1.0, 0.0, 0.0),
//!     DVec3::new(1.0, 1.0, 0.0),
//!     DVec3::new(2.0, 1.0, 0.0),
//! );
//! let mesh = sweep_profile(&curve, &CrossSectionProfile::flat(1.0), &SweepParams::default())?;
//! assert!(mesh.validate());
//! # Ok::<(), sweep_mesh::MeshError>(())
//! ```

pub mod error;
pub mod math;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod profile;
pub mod sink;

pub use error::{MeshError, MeshResult};
pub use math::{frame_at, BezierCurve, OrientedPoint};
pub use mesh::MeshBuffers;
pub use ops::sweep::{generate_strip, sweep_batch, sweep_profile, StripParams, SweepParams};
pub use primitives::{create_quad, generate_ring, RingParams, UvMode};
pub use profile::{CrossSectionProfile, ProfileVertex};
pub use sink::{regenerate, MeshSink, MeshSlot};
