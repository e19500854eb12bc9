use shapekit_core::color::DEFAULT_SHAPE_COLOR;
use shapekit_core::{GeometryError, Transform, Vector2};

use super::{DesignerShape, DrawTopology, ShapeBody, ShapeType};
use crate::vertex::Vertex;

/// Corner signs in ring order: top-right, top-left, bottom-left, bottom-right.
const SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];

/// A rectangle centered on its local origin with independent half-extents.
///
/// Dragging a corner mirrors it across the local axes onto the other three.
#[derive(Debug, Clone)]
pub struct Rectangle {
    body: ShapeBody,
    length: f64,
    width: f64,
}

impl Rectangle {
    /// `length` runs along local x, `width` along local y.
    pub fn new(transform: Transform, length: f64, width: f64) -> Self {
        Self {
            body: ShapeBody::new(transform, Self::corners(length / 2.0, width / 2.0)),
            length,
            width,
        }
    }

    fn corners(hx: f64, hy: f64) -> Vec<Vertex> {
        SIGNS
            .iter()
            .map(|&(sx, sy)| Vertex::new(Vector2::new(hx * sx, hy * sy), DEFAULT_SHAPE_COLOR))
            .collect()
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_length(&mut self, length: f64) -> Result<(), GeometryError> {
        if !length.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "rectangle length",
            });
        }
        self.reshape(length / 2.0, self.width / 2.0);
        self.length = length;
        Ok(())
    }

    pub fn set_width(&mut self, width: f64) -> Result<(), GeometryError> {
        if !width.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "rectangle width",
            });
        }
        self.reshape(self.length / 2.0, width / 2.0);
        self.width = width;
        Ok(())
    }

    // Rewrites every corner from the half-extents, keeping colors. Equivalent
    // to scaling x or y by new/old, and still defined when the old extent is 0.
    fn reshape(&mut self, hx: f64, hy: f64) {
        for (vertex, &(sx, sy)) in self.body.vertices_mut().iter_mut().zip(SIGNS.iter()) {
            vertex.set_position(Vector2::new(hx * sx, hy * sy));
        }
    }
}

impl DesignerShape for Rectangle {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn draw_topology(&self) -> DrawTopology {
        DrawTopology::TriangleFan
    }

    fn on_vertex_changed(&mut self, index: usize) {
        let position = self.body.vertices()[index].position();
        let (sx, sy) = SIGNS[index];
        let hx = position.x * sx;
        let hy = position.y * sy;
        self.length = 2.0 * hx.abs();
        self.width = 2.0 * hy.abs();
        self.reshape(hx, hy);
    }
}
