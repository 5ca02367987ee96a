//! # Mesh Operations
//!
//! Operations that build meshes from curves.

pub mod sweep;

pub use sweep::{generate_strip, sweep_batch, sweep_profile, StripParams, SweepParams};
