//! # ShapeKit Core
//!
//! Core types and utilities for ShapeKit.
//! Provides the vector and transform math every shape is built on, the
//! vertex-buffer layout shared with the renderer, and the error taxonomy.

pub mod color;
pub mod error;
pub mod layout;
pub mod transform;
pub mod vector;

pub use color::Color;
pub use error::{Error, GeometryError, MeshError, Result};
pub use layout::{VertexRecord, VERTEX_SIZE};
pub use transform::Transform;
pub use vector::{Vector2, Vector3};
