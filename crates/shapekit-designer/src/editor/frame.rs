//! Per-frame render command generation.

use shapekit_core::Color;

use super::{EditMode, Editor, ViewMode};
use crate::render::{self, RenderBackend};
use crate::shape::{DesignerShape, DrawTopology, Shape};

impl Editor {
    /// Emits one frame of draw calls.
    ///
    /// Order: clear, then for each visible shape in draw order either its fill
    /// (solid view) or a black outline with vertex markers (wireframe view),
    /// followed by the highlight outline and markers if it is selected. In
    /// edit mode the selected vertex marker is drawn last, in the highlight
    /// color.
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        let settings = &self.config.render;
        backend.clear(settings.clear_color);

        let selected = self.selected_id();
        for entry in self.store.iter() {
            let shape = &entry.shape;
            if shape.is_hidden() {
                continue;
            }

            match self.view_mode {
                ViewMode::Solid => backend.draw(shape.draw_topology(), shape.data()),
                ViewMode::Wireframe => self.draw_outlined(backend, shape, settings.outline_color),
            }

            if selected == Some(entry.id) {
                let color = match self.mode {
                    EditMode::Object => settings.highlight_color,
                    EditMode::Edit => settings.outline_color,
                };
                self.draw_outlined(backend, shape, color);
            }
        }

        if self.mode == EditMode::Edit {
            let vertex = self
                .selected_shape()
                .zip(self.selected_vertex())
                .and_then(|(shape, index)| shape.vertex(index));
            if let Some(vertex) = vertex {
                let marker =
                    render::point_marker(&vertex, settings.highlight_color, settings.point_radius);
                backend.draw(DrawTopology::TriangleFan, &marker);
            }
        }
    }

    fn draw_outlined<B: RenderBackend + ?Sized>(&self, backend: &mut B, shape: &Shape, color: Color) {
        let radius = self.config.render.point_radius;
        backend.draw(DrawTopology::LineLoop, &render::outline_data(shape, color));
        for vertex in shape.vertex_refs() {
            backend.draw(
                DrawTopology::TriangleFan,
                &render::point_marker(&vertex, color, radius),
            );
        }
    }
}
