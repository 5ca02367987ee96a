//! # Curve and Frame Math
//!
//! Leaf helpers shared by every generator:
//! - **vector**: unit vectors by angle, interpolation, safe normalization
//! - **bezier**: cubic Bezier evaluation by De Casteljau reduction
//! - **frame**: oriented frames (position + rotation) along a curve
//!
//! All math is `glam` f64 (`DVec2`, `DVec3`, `DQuat`).

pub mod bezier;
pub mod frame;
pub mod vector;

pub use bezier::{bezier_point, bezier_tangent_direction, BezierCurve};
pub use frame::{frame_at, orientation_from_forward, try_frame_at, OrientedPoint};
pub use vector::{direction, lerp, unit_vector_by_angle};
