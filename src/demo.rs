//! Scripted headless editing session.
//!
//! Drives an [`Editor`] the way the UI glue would: pointer positions arrive
//! in pixels and go through a [`Viewport`], keys go through
//! [`EditorCommand::from_key_code`], and frames are rendered to a backend
//! after each step.

use shapekit_core::{Color, Vector2};
use shapekit_designer::render::{buffer_bytes, vertex_count};
use shapekit_designer::{
    params, DesignerShape, DrawTopology, Editor, EditorCommand, RenderBackend, Viewport,
};
use shapekit_settings::Config;
use tracing::{debug, info};

/// Canvas size the script's pixel coordinates refer to.
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 600.0;

/// Backend that logs every call and tallies what a GPU would receive.
#[derive(Debug, Default)]
pub struct LogBackend {
    frames: usize,
    draws: usize,
    bytes: usize,
}

impl LogBackend {
    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Total vertex buffer bytes uploaded so far.
    pub fn bytes(&self) -> usize {
        self.bytes
    }
}

impl RenderBackend for LogBackend {
    fn clear(&mut self, color: Color) {
        self.frames += 1;
        debug!(frame = self.frames, r = color.x, g = color.y, b = color.z, "clear");
    }

    fn draw(&mut self, topology: DrawTopology, data: &[f32]) {
        self.draws += 1;
        self.bytes += buffer_bytes(data).len();
        debug!(?topology, vertices = vertex_count(data), "draw");
    }
}

struct Script<'a, B: RenderBackend + ?Sized> {
    editor: Editor,
    viewport: Viewport,
    backend: &'a mut B,
}

impl<B: RenderBackend + ?Sized> Script<'_, B> {
    fn pointer(&self, px: f64, py: f64) -> Vector2 {
        self.viewport.pixel_to_ndc(px, py)
    }

    fn click(&mut self, px: f64, py: f64) -> anyhow::Result<()> {
        let point = self.pointer(px, py);
        self.editor.click(point)?;
        Ok(())
    }

    fn key(&mut self, code: &str, px: f64, py: f64) -> anyhow::Result<()> {
        let command = EditorCommand::from_key_code(code)
            .ok_or_else(|| anyhow::anyhow!("unmapped key {code}"))?;
        let pointer = self.pointer(px, py);
        self.editor.execute(command, pointer)?;
        Ok(())
    }

    fn drag(&mut self, path: &[(f64, f64)]) -> anyhow::Result<()> {
        for &(px, py) in path {
            let pointer = self.pointer(px, py);
            self.editor.update_session(pointer)?;
        }
        Ok(())
    }

    fn frame(&mut self) {
        self.editor.render(&mut *self.backend);
        for event in self.editor.drain_events() {
            info!(event = %event.description(), "Editor event");
        }
    }
}

/// Runs the scripted session and returns the final editor state.
pub fn run<B: RenderBackend + ?Sized>(config: Config, backend: &mut B) -> anyhow::Result<Editor> {
    let defaults = config.shapes.clone();
    let mut script = Script {
        editor: Editor::new(config),
        viewport: Viewport::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        backend,
    };

    // One shape per quadrant.
    let square = script.editor.create_default_square(None);
    let line = script.editor.create_default_line(None);
    let rectangle = script.editor.create_default_rectangle(None, None);
    let polygon = script.editor.create_default_polygon(Some(6), None)?;
    for (id, x, y) in [
        (square, -0.5, 0.5),
        (line, 0.5, 0.5),
        (rectangle, -0.5, -0.5),
        (polygon, 0.5, -0.5),
    ] {
        if let Some(shape) = script.editor.shape_mut(id) {
            shape.set_position(Vector2::new(x, y))?;
        }
    }
    script.frame();

    // Move the square, turn it and cancel, then scale it and commit by click.
    script.click(200.0, 150.0)?;
    script.key("KeyG", 200.0, 150.0)?;
    script.drag(&[(220.0, 160.0), (240.0, 170.0)])?;
    script.key("Enter", 240.0, 170.0)?;
    script.key("KeyR", 300.0, 170.0)?;
    script.drag(&[(240.0, 100.0)])?;
    script.key("Escape", 240.0, 100.0)?;
    script.key("KeyS", 300.0, 170.0)?;
    script.drag(&[(320.0, 170.0)])?;
    script.click(320.0, 170.0)?;
    script.frame();

    // Reshape the hexagon.
    script.click(600.0, 450.0)?;
    let division = params::subdivision(Some(2), &defaults);
    script.editor.subdivide_selected(division)?;
    let length = params::bevel_length(Some(0.2), &defaults);
    script.editor.bevel_selected(length)?;
    script.editor.flip_normal_selected()?;
    script.editor.reposition_origin_selected()?;
    script.frame();

    // Drag one of its vertices in edit mode.
    script.key("Tab", 600.0, 450.0)?;
    let target = script
        .editor
        .shape(polygon)
        .and_then(|shape| shape.global_coords().first().copied());
    if let Some(target) = target {
        let (px, py) = script.viewport.ndc_to_pixel(target);
        script.click(px, py)?;
        if script.editor.selected_vertex().is_some() {
            script.key("KeyG", px, py)?;
            script.drag(&[(px + 15.0, py)])?;
            script.key("Enter", px + 15.0, py)?;
        }
    }
    script.key("Tab", 600.0, 450.0)?;
    script.key("KeyW", 0.0, 0.0)?;
    script.frame();

    let triangles = script.editor.triangulate_selected()?;
    info!(count = triangles.len(), "Hexagon triangulated");
    script.key("KeyQ", 0.0, 0.0)?;
    script.frame();

    Ok(script.editor)
}
