//! Error handling for ShapeKit
//!
//! Provides the error types shared by every layer of the editor:
//! - Geometry errors (degenerate transforms, non-finite input)
//! - Mesh errors (structural preconditions of polygon operations)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when a coordinate computation would produce a value that must not
/// reach the render buffer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The owning transform has zero scale, so it cannot be inverted
    #[error("Transform with zero scale cannot be inverted")]
    ZeroScale,

    /// An input value was NaN or infinite
    #[error("Non-finite value for {what}")]
    NonFinite {
        /// The quantity that was not finite.
        what: &'static str,
    },
}

/// Mesh error type
///
/// Represents failures of polygon mesh-editing operations. When one of these
/// is returned the polygon is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// The polygon does not have enough vertices for the operation
    #[error("Operation requires at least {required} vertices, polygon has {actual}")]
    TooFewVertices {
        /// The minimum vertex count.
        required: usize,
        /// The current vertex count.
        actual: usize,
    },

    /// A parameter is outside its documented range
    #[error("Invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// The parameter name.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The geometry has no usable area or extent
    #[error("Degenerate geometry: {reason}")]
    Degenerate {
        /// A description of the degeneracy.
        reason: String,
    },

    /// Underlying coordinate error
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl MeshError {
    /// Create an invalid-parameter error
    pub fn invalid(param: &'static str, reason: impl Into<String>) -> Self {
        MeshError::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }
}

/// Main error type for ShapeKit core
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Mesh error
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error comes from degenerate geometry
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Error::Geometry(_)
                | Error::Mesh(MeshError::Degenerate { .. })
                | Error::Mesh(MeshError::Geometry(_))
        )
    }

    /// Check if this is a mesh error
    pub fn is_mesh_error(&self) -> bool {
        matches!(self, Error::Mesh(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
