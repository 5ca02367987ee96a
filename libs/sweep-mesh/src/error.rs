//! # Mesh Errors
//!
//! Error types for the ring and sweep generators.
//!
//! Every failure is reported to the caller as soon as it is detected. The
//! host decides whether to skip the frame's regeneration or abort.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Generator parameters that would divide by zero or sample nothing
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    /// Geometry without a usable direction (coincident control points)
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Malformed cross-section profile
    #[error("Invalid asset: {message}")]
    InvalidAsset { message: String },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid asset error.
    pub fn invalid_asset(message: impl Into<String>) -> Self {
        Self::InvalidAsset {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
