//! Shape creation, deletion and visibility for the editor.

use shapekit_core::{GeometryError, Transform};
use tracing::info;

use super::Editor;
use crate::error::{EditorError, EditorResult};
use crate::events::EditorEvent;
use crate::params;
use crate::shape::{DesignerShape, Line, Polygon, Rectangle, Shape, Square};

fn finite(what: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what })
    }
}

fn finite_transform(transform: &Transform) -> Result<(), GeometryError> {
    if transform.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what: "transform" })
    }
}

impl Editor {
    /// Registers a shape on top of the draw order and returns its id.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) -> u64 {
        let id = self.store.insert(shape.into());
        self.emit(EditorEvent::ShapeListChanged);
        id
    }

    fn add_colored(&mut self, mut shape: Shape) -> u64 {
        shape.set_vertices_color(self.config.shapes.color);
        self.add_shape(shape)
    }

    /// Creates a line at the origin; missing or rejected length falls back
    /// to the configured default.
    pub fn create_default_line(&mut self, length: Option<f64>) -> u64 {
        let length = params::line_length(length, &self.config.shapes);
        self.add_colored(Line::new(Transform::origin(), length).into())
    }

    pub fn create_default_square(&mut self, size: Option<f64>) -> u64 {
        let size = params::square_size(size, &self.config.shapes);
        self.add_colored(Square::new(Transform::origin(), size).into())
    }

    pub fn create_default_rectangle(&mut self, length: Option<f64>, width: Option<f64>) -> u64 {
        let length = params::rectangle_length(length, &self.config.shapes);
        let width = params::rectangle_width(width, &self.config.shapes);
        self.add_colored(Rectangle::new(Transform::origin(), length, width).into())
    }

    /// Creates a regular polygon at the origin; two or fewer sides become the
    /// default side count.
    pub fn create_default_polygon(
        &mut self,
        sides: Option<i64>,
        size: Option<f64>,
    ) -> EditorResult<u64> {
        let sides = params::polygon_sides(sides, &self.config.shapes);
        let size = params::polygon_size(size, &self.config.shapes);
        let polygon = Polygon::regular(sides, size)?;
        Ok(self.add_colored(polygon.into()))
    }

    pub fn create_line(&mut self, transform: Transform, length: f64) -> EditorResult<u64> {
        finite_transform(&transform)?;
        finite("line length", length)?;
        Ok(self.add_colored(Line::new(transform, length).into()))
    }

    pub fn create_square(&mut self, transform: Transform, size: f64) -> EditorResult<u64> {
        finite_transform(&transform)?;
        finite("square size", size)?;
        Ok(self.add_colored(Square::new(transform, size).into()))
    }

    pub fn create_rectangle(
        &mut self,
        transform: Transform,
        length: f64,
        width: f64,
    ) -> EditorResult<u64> {
        finite_transform(&transform)?;
        finite("rectangle length", length)?;
        finite("rectangle width", width)?;
        Ok(self.add_colored(Rectangle::new(transform, length, width).into()))
    }

    /// Creates an empty polygon to be filled with
    /// [`Polygon::add_vertex`] through [`Editor::shape_mut`].
    pub fn create_polygon(&mut self, transform: Transform) -> EditorResult<u64> {
        finite_transform(&transform)?;
        Ok(self.add_shape(Polygon::new(transform)))
    }

    pub fn create_regular_polygon(
        &mut self,
        transform: Transform,
        sides: usize,
        size: f64,
    ) -> EditorResult<u64> {
        finite_transform(&transform)?;
        let polygon = Polygon::regular_at(transform, sides, size)?;
        Ok(self.add_colored(polygon.into()))
    }

    /// Removes a shape, clearing the selection if it pointed at it.
    pub fn remove_shape(&mut self, id: u64) -> EditorResult<Shape> {
        self.ensure_idle()?;
        let entry = self.store.remove(id).ok_or(EditorError::ShapeNotFound(id))?;
        if self.selected_id() == Some(id) {
            self.apply_selection(None);
        } else {
            self.emit(EditorEvent::ShapeListChanged);
        }
        Ok(entry.shape)
    }

    /// Deletes the selected shape and returns its id.
    pub fn delete_selected(&mut self) -> EditorResult<u64> {
        let id = self.require_selection()?;
        self.remove_shape(id)?;
        Ok(id)
    }

    pub fn set_hidden(&mut self, id: u64, hidden: bool) -> EditorResult<()> {
        let entry = self.entry_mut(id)?;
        if entry.shape.is_hidden() != hidden {
            entry.shape.set_hidden(hidden);
            info!(id, hidden, "Visibility changed");
            self.emit(EditorEvent::ShapeListChanged);
        }
        Ok(())
    }

    /// Flips a shape's visibility and returns the new hidden state.
    pub fn toggle_hidden(&mut self, id: u64) -> EditorResult<bool> {
        let hidden = !self
            .shape(id)
            .ok_or(EditorError::ShapeNotFound(id))?
            .is_hidden();
        self.set_hidden(id, hidden)?;
        Ok(hidden)
    }
}
