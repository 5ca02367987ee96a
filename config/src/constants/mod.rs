//! # Configuration Constants
//!
//! Centralized constants for the ring and sweep generators. Geometry
//! tolerances, default parameters and the ranges hosts expose on their
//! sliders are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Direction and parallelism tolerances
//! - **Orientation**: Reference axes for building frames from a direction
//! - **Ring**: Defaults and host ranges for the annulus generator
//! - **Sweep**: Defaults and host ranges for the curve sweep generators
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Shortest vector length still treated as a usable direction.
///
/// Tangents shorter than this come from coincident control points and are
/// reported as degenerate instead of being normalized into NaN.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_DIRECTION_LENGTH;
///
/// let tangent_length = 0.0_f64;
/// assert!(tangent_length < MIN_DIRECTION_LENGTH);
/// ```
pub const MIN_DIRECTION_LENGTH: f64 = 1e-12;

/// Tolerance on `|forward x up|` below which the two are considered parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// ORIENTATION CONSTANTS
// =============================================================================

/// World up reference used when building a rotation from a forward direction.
///
/// # Example
///
/// ```rust
/// use config::constants::WORLD_UP;
///
/// assert_eq!(WORLD_UP, [0.0, 1.0, 0.0]);
/// ```
pub const WORLD_UP: [f64; 3] = [0.0, 1.0, 0.0];

/// Up reference used instead of [`WORLD_UP`] when the forward direction is
/// (anti)parallel to it.
pub const FALLBACK_UP: [f64; 3] = [0.0, 0.0, 1.0];

// =============================================================================
// RING CONSTANTS
// =============================================================================

/// Default inner radius of the ring generator.
pub const DEFAULT_INNER_RADIUS: f64 = 1.0;

/// Default thickness (outer radius minus inner radius) of the ring generator.
pub const DEFAULT_THICKNESS: f64 = 0.5;

/// Smallest radius or thickness a host slider offers.
pub const MIN_RING_RADIUS: f64 = 0.1;

/// Largest radius or thickness a host slider offers.
pub const MAX_RING_RADIUS: f64 = 2.0;

/// Default number of angular segments around the ring.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_ANGULAR_SEGMENTS, MIN_ANGULAR_SEGMENTS};
///
/// assert!(DEFAULT_ANGULAR_SEGMENTS >= MIN_ANGULAR_SEGMENTS);
/// ```
pub const DEFAULT_ANGULAR_SEGMENTS: u32 = 16;

/// Smallest angular segment count a host slider offers (a triangle).
pub const MIN_ANGULAR_SEGMENTS: u32 = 3;

/// Largest angular segment count a host slider offers.
pub const MAX_ANGULAR_SEGMENTS: u32 = 32;

// =============================================================================
// SWEEP CONSTANTS
// =============================================================================

/// Default number of cross-section rings placed along the curve.
pub const DEFAULT_RING_COUNT: u32 = 8;

/// Fewest rings that still span both curve endpoints.
///
/// Ring parameters are `t = ring / (ring_count - 1)`, so a single ring
/// would divide by zero.
pub const MIN_RING_COUNT: u32 = 2;

/// Largest ring count a host slider offers.
pub const MAX_RING_COUNT: u32 = 32;

/// Default number of quads in the single strip sweep.
pub const DEFAULT_STRIP_SEGMENTS: u32 = 3;

/// Smallest strip segment count a host slider offers.
pub const MIN_STRIP_SEGMENTS: u32 = 3;

/// Largest strip segment count a host slider offers.
pub const MAX_STRIP_SEGMENTS: u32 = 128;

/// Default half width of the single strip sweep.
pub const DEFAULT_STRIP_HALF_WIDTH: f64 = 0.1;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single generated mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_VERTICES;
///
/// let vertex_count = 1000;
/// assert!(vertex_count < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a requested angular segment count to the host slider range.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_angular_segments;
///
/// assert_eq!(clamp_angular_segments(1), 3);
/// assert_eq!(clamp_angular_segments(100), 32);
/// ```
#[inline]
pub fn clamp_angular_segments(segments: u32) -> u32 {
    segments.clamp(MIN_ANGULAR_SEGMENTS, MAX_ANGULAR_SEGMENTS)
}

/// Clamps a requested ring count to the host slider range.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_ring_count;
///
/// assert_eq!(clamp_ring_count(0), 2);
/// assert_eq!(clamp_ring_count(8), 8);
/// ```
#[inline]
pub fn clamp_ring_count(ring_count: u32) -> u32 {
    ring_count.clamp(MIN_RING_COUNT, MAX_RING_COUNT)
}

/// Clamps a requested strip segment count to the host slider range.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_strip_segments;
///
/// assert_eq!(clamp_strip_segments(0), 3);
/// assert_eq!(clamp_strip_segments(u32::MAX), 128);
/// ```
#[inline]
pub fn clamp_strip_segments(segments: u32) -> u32 {
    segments.clamp(MIN_STRIP_SEGMENTS, MAX_STRIP_SEGMENTS)
}

/// Clamps a ring radius or thickness to the host slider range.
///
/// NaN input maps to the lower bound.
///
/// # Example
///
/// ```rust
/// use config::constants::clamp_ring_radius;
///
/// assert_eq!(clamp_ring_radius(0.0), 0.1);
/// assert_eq!(clamp_ring_radius(f64::NAN), 0.1);
/// ```
#[inline]
pub fn clamp_ring_radius(radius: f64) -> f64 {
    if radius.is_nan() {
        return MIN_RING_RADIUS;
    }
    radius.clamp(MIN_RING_RADIUS, MAX_RING_RADIUS)
}
