//! # Render Command Generation
//!
//! The editor never talks to a graphics API. Each frame it emits a sequence of
//! clear and draw calls against a [`RenderBackend`]; every draw call carries a
//! [`DrawTopology`] and a flat buffer of vertex records laid out as described
//! in [`shapekit_core::layout`]. A GPU backend uploads the buffer as-is (see
//! [`buffer_bytes`]); [`RecordingBackend`] keeps the calls for inspection.

use std::f64::consts::FRAC_PI_4;

use shapekit_core::layout::{self, VERTEX_SIZE};
use shapekit_core::{Color, Vector2};

use crate::shape::{DesignerShape, DrawTopology};
use crate::vertex::VertexRef;

/// Number of records in a point marker: the vertex itself plus the rim.
pub const POINT_MARKER_RECORDS: usize = 10;

/// The external renderer seam.
pub trait RenderBackend {
    /// Clears the frame to `color`.
    fn clear(&mut self, color: Color);

    /// Draws `data.len() / VERTEX_SIZE` records with the given primitive.
    fn draw(&mut self, topology: DrawTopology, data: &[f32]);
}

/// A single recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Draw {
        topology: DrawTopology,
        data: Vec<f32>,
    },
}

impl DrawCommand {
    /// Number of vertex records drawn, zero for a clear.
    pub fn vertex_count(&self) -> usize {
        match self {
            DrawCommand::Clear(_) => 0,
            DrawCommand::Draw { data, .. } => vertex_count(data),
        }
    }
}

/// Backend that stores every call, for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub commands: Vec<DrawCommand>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the recorded calls.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn draws(&self) -> impl Iterator<Item = (DrawTopology, &[f32])> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Draw { topology, data } => Some((*topology, data.as_slice())),
            DrawCommand::Clear(_) => None,
        })
    }
}

impl RenderBackend for RecordingBackend {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn draw(&mut self, topology: DrawTopology, data: &[f32]) {
        self.commands.push(DrawCommand::Draw {
            topology,
            data: data.to_vec(),
        });
    }
}

/// Exact bytes to upload for a vertex buffer.
pub fn buffer_bytes(data: &[f32]) -> &[u8] {
    bytemuck::cast_slice(data)
}

pub fn vertex_count(data: &[f32]) -> usize {
    data.len() / VERTEX_SIZE
}

/// Overwrites the color channels of every record in `data`.
pub fn recolor(data: &mut [f32], color: Color) {
    for record in data.chunks_exact_mut(VERTEX_SIZE) {
        record[layout::R] = color.x as f32;
        record[layout::G] = color.y as f32;
        record[layout::B] = color.z as f32;
    }
}

/// The shape's records in a single color, to be drawn as a line loop.
pub fn outline_data<S: DesignerShape + ?Sized>(shape: &S, color: Color) -> Vec<f32> {
    let mut data = shape.data().to_vec();
    recolor(&mut data, color);
    data
}

/// A small filled disc around a vertex, to be drawn as a triangle fan.
///
/// The first record is the vertex itself. The rim records are expressed in a
/// unit-scale frame centered on the vertex's world coordinate and turned by
/// `i * π/4`, so the shader places them on a circle of `radius`.
pub fn point_marker(vertex: &VertexRef<'_>, color: Color, radius: f64) -> Vec<f32> {
    let mut data = Vec::with_capacity(POINT_MARKER_RECORDS * VERTEX_SIZE);
    data.extend_from_slice(&vertex.record());

    let center = vertex.global_coord();
    let rim = Vector2::new(radius, 0.0);
    for i in 0..POINT_MARKER_RECORDS - 1 {
        data.extend_from_slice(&[
            rim.x as f32,
            rim.y as f32,
            0.0,
            0.0,
            0.0,
            center.x as f32,
            center.y as f32,
            (i as f64 * FRAC_PI_4) as f32,
            1.0,
        ]);
    }
    recolor(&mut data, color);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Shape, Square};
    use shapekit_core::{color, Transform};

    #[test]
    fn test_buffer_bytes_native_layout() {
        let data = [1.0f32, -2.5];
        let bytes = buffer_bytes(&data);
        assert_eq!(bytes.len(), 8);
        assert_eq!(&bytes[..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[4..], &(-2.5f32).to_ne_bytes());
    }

    #[test]
    fn test_outline_keeps_geometry() {
        let shape: Shape = Square::new(Transform::origin(), 1.0).into();
        let outline = outline_data(&shape, color::BLACK);
        assert_eq!(outline.len(), shape.data().len());
        for (a, b) in outline
            .chunks_exact(VERTEX_SIZE)
            .zip(shape.data().chunks_exact(VERTEX_SIZE))
        {
            assert_eq!(&a[..2], &b[..2]);
            assert_eq!(&a[2..5], &[0.0f32, 0.0, 0.0]);
            assert_eq!(&a[5..], &b[5..]);
        }
    }

    #[test]
    fn test_point_marker_layout() {
        let shape: Shape =
            Square::new(Transform::new(Vector2::new(0.5, 0.0), 0.0, 2.0), 1.0).into();
        let vertex = shape.vertex(0).unwrap();
        let marker = point_marker(&vertex, color::ORANGE, 0.01);
        assert_eq!(vertex_count(&marker), POINT_MARKER_RECORDS);

        // Vertex record first, recolored.
        assert_eq!(&marker[..2], &[0.5f32, 0.5]);
        assert_eq!(&marker[2..5], &[1.0f32, 0.568, 0.0]);
        assert_eq!(marker[layout::PARENT_SCALE_INDEX], 2.0);

        // Rim records around the world coordinate (1.5, 1.0).
        let rim = &marker[VERTEX_SIZE * 3..VERTEX_SIZE * 4];
        assert_eq!(&rim[..2], &[0.01f32, 0.0]);
        assert_eq!(&rim[5..7], &[1.5f32, 1.0]);
        assert_eq!(rim[7], (2.0 * FRAC_PI_4) as f32);
        assert_eq!(rim[8], 1.0);
    }

    #[test]
    fn test_recording_backend() {
        let mut backend = RecordingBackend::new();
        backend.clear(color::CLEAR_COLOR);
        backend.draw(DrawTopology::Lines, &[0.0; VERTEX_SIZE * 2]);
        assert_eq!(backend.commands.len(), 2);
        assert_eq!(backend.commands[1].vertex_count(), 2);
        assert_eq!(backend.draws().count(), 1);
        backend.reset();
        assert!(backend.commands.is_empty());
    }
}
