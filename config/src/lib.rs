//! # Config Crate
//!
//! Centralized configuration constants for the procedural mesh generators.
//! Every tolerance, default and host-side range limit lives here so the
//! generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{clamp_ring_count, MIN_DIRECTION_LENGTH, MIN_RING_COUNT};
//!
//! // Shorter vectors carry no direction
//! let tangent_length: f64 = 1e-13;
//! assert!(tangent_length < MIN_DIRECTION_LENGTH);
//!
//! // Hosts clamp slider input before invoking the sweep generator
//! assert_eq!(clamp_ring_count(1), MIN_RING_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Ranges Separate**: Slider ranges are exposed as clamp helpers; the
//!   generators themselves only reject inputs that would divide by zero
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
