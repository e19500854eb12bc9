//! # ShapeKit Designer
//!
//! Shapes, polygon mesh operations and the interactive editor state for
//! ShapeKit.
//!
//! ## Core Components
//!
//! ### Shapes
//! - **Line**, **Square**, **Rectangle**: parametric shapes that keep their
//!   vertices consistent when one of them is dragged
//! - **Polygon**: free vertex ring with subdivide, bevel, triangulate,
//!   flip-normal and reposition-origin operations
//!
//! ### Editor
//! - **Selection**: nearest-hit picking of shapes and vertices
//! - **Sessions**: pointer-driven grab, rotate and scale with cancel
//! - **Modes**: object/edit and solid/wireframe
//! - **Rendering**: draw calls emitted to a [`RenderBackend`]
//!
//! ## Architecture
//!
//! ```text
//! Editor
//!   ├── ShapeStore (draw order, ids, names)
//!   ├── SelectionManager (shape + vertex)
//!   ├── Session (active grab/rotate/scale)
//!   └── render -> RenderBackend
//!
//! Shape (Line | Square | Rectangle | Polygon)
//!   └── ShapeBody (vertices, transform, cached buffer)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{Editor, RecordingBackend};
//!
//! let mut editor = Editor::default();
//! let id = editor.create_default_polygon(Some(6), Some(0.5)).unwrap();
//! editor.select(Some(id)).unwrap();
//! editor.subdivide_selected(2).unwrap();
//!
//! let mut backend = RecordingBackend::new();
//! editor.render(&mut backend);
//! // Fill, highlight outline and one marker per vertex.
//! assert_eq!(backend.draws().count(), 14);
//! ```

pub mod commands;
pub mod editor;
pub mod error;
pub mod events;
pub mod mesh;
pub mod params;
pub mod render;
pub mod selection_manager;
pub mod session;
pub mod shape;
pub mod shape_store;
pub mod vertex;
pub mod viewport;

pub use commands::EditorCommand;
pub use editor::{EditMode, Editor, ViewMode};
pub use error::{EditorError, EditorResult, ShapeError};
pub use events::EditorEvent;
pub use render::{buffer_bytes, DrawCommand, RecordingBackend, RenderBackend};
pub use selection_manager::SelectionManager;
pub use session::{Session, SessionKind};
pub use shape::{
    DesignerShape, DrawTopology, Line, Polygon, Rectangle, Shape, ShapeBody, ShapeType, Square,
};
pub use shape_store::{ShapeEntry, ShapeStore};
pub use vertex::{Vertex, VertexRef};
pub use viewport::Viewport;
