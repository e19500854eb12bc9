//! Shape vertices.
//!
//! A [`Vertex`] stores only local-space data. Its world coordinate depends on
//! the owning shape's [`Transform`], which the vertex never holds itself;
//! [`VertexRef`] pairs a borrowed vertex with its owner's transform for reads,
//! and all writes go through the owning shape so linkage rules and cache
//! invalidation always run.

use shapekit_core::layout::{self, VertexRecord};
use shapekit_core::{Color, Transform, Vector2};

/// A point in a shape's local space with a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    position: Vector2,
    color: Color,
}

impl Vertex {
    pub fn new(position: Vector2, color: Color) -> Self {
        Self { position, color }
    }

    /// Local position relative to the owning transform.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn with_position(self, position: Vector2) -> Self {
        Self { position, ..self }
    }

    /// Interpolates position and color.
    pub fn lerp(&self, other: &Vertex, t: f64) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            color: self.color.lerp(other.color, t),
        }
    }

    /// World coordinate under `parent`.
    pub fn global_coord(&self, parent: &Transform) -> Vector2 {
        parent.to_global(self.position)
    }

    /// Flattens the vertex into its render record.
    pub fn record(&self, parent: &Transform) -> VertexRecord {
        let mut record = [0.0f32; layout::VERTEX_SIZE];
        record[layout::POSITION_INDEX] = self.position.x as f32;
        record[layout::POSITION_INDEX + 1] = self.position.y as f32;
        record[layout::R] = self.color.x as f32;
        record[layout::G] = self.color.y as f32;
        record[layout::B] = self.color.z as f32;
        record[layout::PARENT_POSITION_INDEX] = parent.position.x as f32;
        record[layout::PARENT_POSITION_INDEX + 1] = parent.position.y as f32;
        record[layout::PARENT_ROTATION_INDEX] = parent.rotation as f32;
        record[layout::PARENT_SCALE_INDEX] = parent.scale as f32;
        record
    }

    // Sibling writes from linkage rules land here and never re-trigger
    // `on_vertex_changed`.
    pub(crate) fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        self.position = self.position.scale(factor);
    }
}

/// Read-only view of a vertex together with its owner's transform.
///
/// The view borrows the shape; it does not keep the shape alive beyond the
/// borrow and cannot mutate it.
#[derive(Debug, Clone, Copy)]
pub struct VertexRef<'a> {
    index: usize,
    vertex: &'a Vertex,
    parent: &'a Transform,
}

impl<'a> VertexRef<'a> {
    pub(crate) fn new(index: usize, vertex: &'a Vertex, parent: &'a Transform) -> Self {
        Self {
            index,
            vertex,
            parent,
        }
    }

    /// Position of the vertex in its shape's ring.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn position(&self) -> Vector2 {
        self.vertex.position
    }

    pub fn color(&self) -> Color {
        self.vertex.color
    }

    pub fn global_coord(&self) -> Vector2 {
        self.vertex.global_coord(self.parent)
    }

    pub fn parent(&self) -> &'a Transform {
        self.parent
    }

    pub fn vertex(&self) -> &'a Vertex {
        self.vertex
    }

    pub fn record(&self) -> VertexRecord {
        self.vertex.record(self.parent)
    }
}
