//! Error types for shape editing and editor operations.

use shapekit_core::{GeometryError, MeshError};
use thiserror::Error;

use crate::editor::EditMode;
use crate::shape::ShapeType;

/// Errors raised by shape mutators.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The vertex index is outside the shape's ring
    #[error("Vertex {index} out of range for shape with {len} vertices")]
    VertexOutOfRange { index: usize, len: usize },

    /// The requested coordinate or transform is degenerate
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by editor operations.
///
/// Every failing operation leaves the editor and its shapes unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("No shape selected")]
    NoSelection,

    #[error("No vertex selected")]
    NoVertexSelected,

    #[error("Shape {0} not found")]
    ShapeNotFound(u64),

    #[error("Operation requires a polygon, selected shape is a {kind}")]
    NotAPolygon { kind: ShapeType },

    #[error("Another interaction session is already active")]
    SessionActive,

    #[error("No interaction session is active")]
    NoActiveSession,

    #[error("Operation is only available in {required} mode")]
    WrongMode { required: EditMode },

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;
