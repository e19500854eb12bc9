//! Shapes.
//!
//! Every shape kind wraps a [`ShapeBody`] (vertex ring, transform, flags and
//! the memoized render buffer) and implements [`DesignerShape`], which supplies
//! the common transform and vertex-editing operations on top of four required
//! methods. [`Shape`] is the closed set of kinds the editor stores.

use std::cell::OnceCell;
use std::fmt;

use shapekit_core::{Color, GeometryError, Transform, Vector2};

use crate::error::ShapeError;
use crate::vertex::{Vertex, VertexRef};

mod line;
mod polygon;
mod rectangle;
mod square;

pub use line::Line;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use square::Square;

/// Primitive the renderer should use for a shape's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawTopology {
    Lines,
    LineLoop,
    TriangleFan,
    Triangles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Line,
    Square,
    Rectangle,
    Polygon,
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Line => write!(f, "Line"),
            ShapeType::Square => write!(f, "Square"),
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Polygon => write!(f, "Polygon"),
        }
    }
}

/// State shared by every shape kind.
///
/// The flattened buffer is either valid or absent; every mutator clears it
/// and the next read rebuilds it once.
#[derive(Debug, Clone)]
pub struct ShapeBody {
    vertices: Vec<Vertex>,
    transform: Transform,
    highlighted: bool,
    hidden: bool,
    buffer: OnceCell<Vec<f32>>,
}

impl ShapeBody {
    pub fn new(transform: Transform, vertices: Vec<Vertex>) -> Self {
        Self {
            vertices,
            transform,
            highlighted: false,
            hidden: false,
            buffer: OnceCell::new(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Flattened render buffer, rebuilt only if stale.
    pub fn data(&self) -> &[f32] {
        self.buffer.get_or_init(|| {
            self.vertices
                .iter()
                .flat_map(|v| v.record(&self.transform))
                .collect()
        })
    }

    /// `true` until the buffer is next read after a mutation.
    pub fn is_stale(&self) -> bool {
        self.buffer.get().is_none()
    }

    pub(crate) fn invalidate(&mut self) {
        self.buffer.take();
    }

    /// Mutable ring access; the buffer is invalidated up front.
    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Vertex> {
        self.invalidate();
        &mut self.vertices
    }

    pub(crate) fn replace_vertices(&mut self, vertices: Vec<Vertex>) {
        self.vertices = vertices;
        self.invalidate();
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) -> Result<(), GeometryError> {
        if !transform.is_finite() {
            return Err(GeometryError::NonFinite { what: "transform" });
        }
        self.transform = transform;
        self.invalidate();
        Ok(())
    }
}

/// Common capability interface of all shape kinds.
pub trait DesignerShape {
    fn body(&self) -> &ShapeBody;
    fn body_mut(&mut self) -> &mut ShapeBody;
    fn shape_type(&self) -> ShapeType;
    fn draw_topology(&self) -> DrawTopology;

    /// Linkage hook, called synchronously after vertex `index` moved.
    ///
    /// Implementations update sibling vertices directly through the body and
    /// must not call the public vertex setters.
    fn on_vertex_changed(&mut self, _index: usize) {}

    fn vertices(&self) -> &[Vertex] {
        self.body().vertices()
    }

    fn vertex_count(&self) -> usize {
        self.body().vertices().len()
    }

    fn vertex(&self, index: usize) -> Option<VertexRef<'_>> {
        let body = self.body();
        body.vertices()
            .get(index)
            .map(|v| VertexRef::new(index, v, body.transform()))
    }

    fn vertex_refs(&self) -> Vec<VertexRef<'_>> {
        let body = self.body();
        body.vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| VertexRef::new(i, v, body.transform()))
            .collect()
    }

    /// World coordinates of the ring, in order.
    fn global_coords(&self) -> Vec<Vector2> {
        let body = self.body();
        body.vertices()
            .iter()
            .map(|v| v.global_coord(body.transform()))
            .collect()
    }

    fn transform(&self) -> &Transform {
        self.body().transform()
    }

    fn data(&self) -> &[f32] {
        self.body().data()
    }

    fn is_hidden(&self) -> bool {
        self.body().hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.body_mut().hidden = hidden;
    }

    fn is_highlighted(&self) -> bool {
        self.body().highlighted
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.body_mut().highlighted = highlighted;
    }

    fn set_transform(&mut self, transform: Transform) -> Result<(), GeometryError> {
        self.body_mut().set_transform(transform)
    }

    fn set_position(&mut self, position: Vector2) -> Result<(), GeometryError> {
        let t = *self.transform();
        self.set_transform(Transform::new(position, t.rotation, t.scale))
    }

    fn set_rotation(&mut self, rotation: f64) -> Result<(), GeometryError> {
        let t = *self.transform();
        self.set_transform(Transform::new(t.position, rotation, t.scale))
    }

    fn set_scale(&mut self, scale: f64) -> Result<(), GeometryError> {
        let t = *self.transform();
        self.set_transform(Transform::new(t.position, t.rotation, scale))
    }

    fn translate(&mut self, distance: Vector2) -> Result<(), GeometryError> {
        if !distance.is_finite() {
            return Err(GeometryError::NonFinite { what: "translation" });
        }
        let t = self.transform().translated(distance);
        self.set_transform(t)
    }

    fn translate_x(&mut self, distance: f64) -> Result<(), GeometryError> {
        self.translate(Vector2::new(distance, 0.0))
    }

    fn translate_y(&mut self, distance: f64) -> Result<(), GeometryError> {
        self.translate(Vector2::new(0.0, distance))
    }

    /// Adds `angle` radians to the current rotation.
    fn rotate(&mut self, angle: f64) -> Result<(), GeometryError> {
        if !angle.is_finite() {
            return Err(GeometryError::NonFinite { what: "rotation" });
        }
        let t = self.transform().rotated(angle);
        self.set_transform(t)
    }

    /// Multiplies the current scale by `factor`.
    fn scale(&mut self, factor: f64) -> Result<(), GeometryError> {
        if !factor.is_finite() {
            return Err(GeometryError::NonFinite { what: "scale" });
        }
        let t = self.transform().scaled(factor);
        self.set_transform(t)
    }

    /// Moves vertex `index` to a new local position and runs the linkage hook.
    fn set_vertex_position(&mut self, index: usize, position: Vector2) -> Result<(), ShapeError> {
        if !position.is_finite() {
            return Err(GeometryError::NonFinite { what: "vertex position" }.into());
        }
        let len = self.vertex_count();
        let vertex = self
            .body_mut()
            .vertices_mut()
            .get_mut(index)
            .ok_or(ShapeError::VertexOutOfRange { index, len })?;
        vertex.set_position(position);
        self.on_vertex_changed(index);
        self.body_mut().invalidate();
        Ok(())
    }

    /// Moves vertex `index` so that its world coordinate becomes `global`.
    fn set_vertex_global(&mut self, index: usize, global: Vector2) -> Result<(), ShapeError> {
        if index >= self.vertex_count() {
            return Err(ShapeError::VertexOutOfRange {
                index,
                len: self.vertex_count(),
            });
        }
        let local = self.transform().to_local(global)?;
        self.set_vertex_position(index, local)
    }

    fn set_vertex_color(&mut self, index: usize, color: Color) -> Result<(), ShapeError> {
        let len = self.vertex_count();
        let vertex = self
            .body_mut()
            .vertices_mut()
            .get_mut(index)
            .ok_or(ShapeError::VertexOutOfRange { index, len })?;
        vertex.set_color(color);
        Ok(())
    }

    fn set_vertices_color(&mut self, color: Color) {
        for vertex in self.body_mut().vertices_mut() {
            vertex.set_color(color);
        }
    }
}

/// Closed set of shape kinds stored by the editor.
#[derive(Debug, Clone)]
pub enum Shape {
    Line(Line),
    Square(Square),
    Rectangle(Rectangle),
    Polygon(Polygon),
}

impl DesignerShape for Shape {
    fn body(&self) -> &ShapeBody {
        match self {
            Shape::Line(s) => s.body(),
            Shape::Square(s) => s.body(),
            Shape::Rectangle(s) => s.body(),
            Shape::Polygon(s) => s.body(),
        }
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        match self {
            Shape::Line(s) => s.body_mut(),
            Shape::Square(s) => s.body_mut(),
            Shape::Rectangle(s) => s.body_mut(),
            Shape::Polygon(s) => s.body_mut(),
        }
    }

    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Line(_) => ShapeType::Line,
            Shape::Square(_) => ShapeType::Square,
            Shape::Rectangle(_) => ShapeType::Rectangle,
            Shape::Polygon(_) => ShapeType::Polygon,
        }
    }

    fn draw_topology(&self) -> DrawTopology {
        match self {
            Shape::Line(s) => s.draw_topology(),
            Shape::Square(s) => s.draw_topology(),
            Shape::Rectangle(s) => s.draw_topology(),
            Shape::Polygon(s) => s.draw_topology(),
        }
    }

    fn on_vertex_changed(&mut self, index: usize) {
        match self {
            Shape::Line(s) => s.on_vertex_changed(index),
            Shape::Square(s) => s.on_vertex_changed(index),
            Shape::Rectangle(s) => s.on_vertex_changed(index),
            Shape::Polygon(s) => s.on_vertex_changed(index),
        }
    }
}

impl Shape {
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Shape::Polygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Line> for Shape {
    fn from(s: Line) -> Self {
        Shape::Line(s)
    }
}

impl From<Square> for Shape {
    fn from(s: Square) -> Self {
        Shape::Square(s)
    }
}

impl From<Rectangle> for Shape {
    fn from(s: Rectangle) -> Self {
        Shape::Rectangle(s)
    }
}

impl From<Polygon> for Shape {
    fn from(s: Polygon) -> Self {
        Shape::Polygon(s)
    }
}
