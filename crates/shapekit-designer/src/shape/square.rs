use std::f64::consts::{FRAC_PI_2, SQRT_2};

use shapekit_core::color::DEFAULT_SHAPE_COLOR;
use shapekit_core::{GeometryError, Transform, Vector2};

use super::{DesignerShape, DrawTopology, ShapeBody, ShapeType};
use crate::vertex::Vertex;

/// An axis-relative square centered on its local origin.
///
/// Corners are stored counter-clockwise starting at the top-right. Moving any
/// corner re-derives the other three by successive quarter turns, so the ring
/// always stays a square.
#[derive(Debug, Clone)]
pub struct Square {
    body: ShapeBody,
    size: f64,
}

impl Square {
    pub fn new(transform: Transform, size: f64) -> Self {
        Self {
            body: ShapeBody::new(transform, Self::corners(size)),
            size,
        }
    }

    fn corners(size: f64) -> Vec<Vertex> {
        let s = size / 2.0;
        [(s, s), (-s, s), (-s, -s), (s, -s)]
            .into_iter()
            .map(|(x, y)| Vertex::new(Vector2::new(x, y), DEFAULT_SHAPE_COLOR))
            .collect()
    }

    /// Side length.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Rescales all four corners about the local origin.
    pub fn set_size(&mut self, size: f64) -> Result<(), GeometryError> {
        if !size.is_finite() {
            return Err(GeometryError::NonFinite { what: "square size" });
        }
        if self.size == 0.0 {
            let colors: Vec<_> = self.body.vertices().iter().map(|v| v.color()).collect();
            let mut corners = Self::corners(size);
            for (corner, color) in corners.iter_mut().zip(colors) {
                corner.set_color(color);
            }
            self.body.replace_vertices(corners);
        } else {
            let factor = size / self.size;
            for vertex in self.body.vertices_mut() {
                vertex.scale(factor);
            }
        }
        self.size = size;
        Ok(())
    }
}

impl DesignerShape for Square {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Square
    }

    fn draw_topology(&self) -> DrawTopology {
        DrawTopology::TriangleFan
    }

    fn on_vertex_changed(&mut self, index: usize) {
        let mut position = self.body.vertices()[index].position();
        self.size = position.magnitude() * SQRT_2;
        let vertices = self.body.vertices_mut();
        for i in 1..4 {
            position = position.rotate(FRAC_PI_2);
            vertices[(index + i) % 4].set_position(position);
        }
    }
}
