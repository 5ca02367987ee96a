//! # Primitives
//!
//! Flat mesh primitives built in their local XY plane, facing +Z.

pub mod quad;
pub mod ring;

pub use quad::create_quad;
pub use ring::{generate_ring, RingParams, UvMode};
