//! Polygon mesh operations applied to the selected shape.
//!
//! Each operation requires the selection to be a polygon and no session to be
//! active. Clamping of raw user input happens before these are called (see
//! [`crate::params`]); out-of-range values reaching here are rejected.

use tracing::{info, warn};

use super::Editor;
use crate::error::{EditorError, EditorResult};
use crate::events::EditorEvent;
use crate::shape::{DesignerShape, Polygon, Shape};

impl Editor {
    fn selected_polygon_mut(&mut self) -> EditorResult<&mut Polygon> {
        self.ensure_idle()?;
        let id = self.require_selection()?;
        let shape = &mut self.entry_mut(id)?.shape;
        let kind = shape.shape_type();
        shape
            .as_polygon_mut()
            .ok_or(EditorError::NotAPolygon { kind })
    }

    fn with_selected_polygon<T>(
        &mut self,
        action: &str,
        op: impl FnOnce(&mut Polygon) -> EditorResult<T>,
    ) -> EditorResult<T> {
        let result = self.selected_polygon_mut().and_then(op);
        match &result {
            Ok(_) => self.emit(EditorEvent::Action(action.to_string())),
            Err(e) => warn!(action, error = %e, "Mesh operation rejected"),
        }
        result
    }

    /// Splits every edge of the selected polygon into `division` edges.
    pub fn subdivide_selected(&mut self, division: usize) -> EditorResult<()> {
        self.with_selected_polygon("Subdivide", |p| Ok(p.subdivide(division)?))
    }

    /// Bevels every corner of the selected polygon.
    pub fn bevel_selected(&mut self, length: f64) -> EditorResult<()> {
        self.with_selected_polygon("Bevel", |p| Ok(p.bevel(length)?))
    }

    pub fn reposition_origin_selected(&mut self) -> EditorResult<()> {
        self.with_selected_polygon("Reposition origin", |p| Ok(p.reposition_origin()?))
    }

    pub fn flip_normal_selected(&mut self) -> EditorResult<()> {
        self.with_selected_polygon("Flip normal", |p| {
            p.flip_normal();
            Ok(())
        })
    }

    /// Replaces the selected polygon with its triangles.
    ///
    /// The triangles take the polygon's place in draw order, keep its
    /// visibility and inherit nothing else; the selection is cleared.
    /// Returns the new shape ids.
    pub fn triangulate_selected(&mut self) -> EditorResult<Vec<u64>> {
        let (triangles, hidden) = self.with_selected_polygon("Triangulate", |p| {
            Ok((p.triangulate()?, p.is_hidden()))
        })?;
        let id = self.require_selection()?;
        let index = self
            .store
            .position(id)
            .ok_or(EditorError::ShapeNotFound(id))?;

        self.store.remove(id);
        let ids: Vec<u64> = triangles
            .into_iter()
            .enumerate()
            .map(|(offset, mut triangle)| {
                triangle.set_hidden(hidden);
                self.store.insert_at(index + offset, Shape::Polygon(triangle))
            })
            .collect();

        info!(source = id, triangles = ids.len(), "Replaced polygon with triangles");
        self.apply_selection(None);
        Ok(ids)
    }
}
