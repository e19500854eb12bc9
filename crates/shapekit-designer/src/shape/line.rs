use shapekit_core::color::DEFAULT_SHAPE_COLOR;
use shapekit_core::{GeometryError, Transform, Vector2};

use super::{DesignerShape, DrawTopology, ShapeBody, ShapeType};
use crate::vertex::Vertex;

/// A line segment centered on its local origin.
///
/// The two endpoints stay point-symmetric: moving one endpoint to `p` moves
/// the other to `-p`.
#[derive(Debug, Clone)]
pub struct Line {
    body: ShapeBody,
    length: f64,
}

impl Line {
    pub fn new(transform: Transform, length: f64) -> Self {
        Self {
            body: ShapeBody::new(transform, Self::endpoints(length)),
            length,
        }
    }

    fn endpoints(length: f64) -> Vec<Vertex> {
        let half = length / 2.0;
        vec![
            Vertex::new(Vector2::new(-half, 0.0), DEFAULT_SHAPE_COLOR),
            Vertex::new(Vector2::new(half, 0.0), DEFAULT_SHAPE_COLOR),
        ]
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Rescales both endpoints about the local origin.
    pub fn set_length(&mut self, length: f64) -> Result<(), GeometryError> {
        if !length.is_finite() {
            return Err(GeometryError::NonFinite { what: "line length" });
        }
        if self.length == 0.0 {
            // Direction is lost once collapsed; restart along local x.
            let colors: Vec<_> = self.body.vertices().iter().map(|v| v.color()).collect();
            let mut vertices = Self::endpoints(length);
            for (vertex, color) in vertices.iter_mut().zip(colors) {
                vertex.set_color(color);
            }
            self.body.replace_vertices(vertices);
        } else {
            let factor = length / self.length;
            for vertex in self.body.vertices_mut() {
                vertex.scale(factor);
            }
        }
        self.length = length;
        Ok(())
    }
}

impl DesignerShape for Line {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn draw_topology(&self) -> DrawTopology {
        DrawTopology::Lines
    }

    fn on_vertex_changed(&mut self, index: usize) {
        let position = self.body.vertices()[index].position();
        self.length = position.magnitude() * 2.0;
        let other = 1 - index;
        self.body.vertices_mut()[other].set_position(-position);
    }
}
