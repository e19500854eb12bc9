//! Grab, rotate and scale sessions driven by the pointer.

use shapekit_core::Vector2;
use tracing::{debug, info};

use super::{EditMode, Editor};
use crate::error::{EditorError, EditorResult};
use crate::events::EditorEvent;
use crate::session::{Session, SessionKind};

impl Editor {
    fn begin(&mut self, session: Session) {
        if let Some(kind) = session.kind() {
            info!(%kind, shape = ?session.shape_id(), "Session started");
            self.emit(EditorEvent::Action(kind.to_string()));
        }
        self.session = session;
    }

    /// Starts grabbing with the pointer at `pointer`.
    ///
    /// In object mode the selected shape follows the pointer; in edit mode the
    /// selected vertex is placed under the pointer.
    pub fn begin_grab(&mut self, pointer: Vector2) -> EditorResult<()> {
        self.ensure_idle()?;
        let id = self.require_selection()?;
        let session = match self.mode {
            EditMode::Object => Session::grab(id, &self.entry(id)?.shape, pointer),
            EditMode::Edit => {
                let vertex = self
                    .selected_vertex()
                    .ok_or(EditorError::NoVertexSelected)?;
                Session::grab_vertex(id, &self.entry(id)?.shape, vertex)
            }
        };
        self.begin(session);
        Ok(())
    }

    /// Starts rotating the selected shape about its position.
    pub fn begin_rotate(&mut self, pointer: Vector2) -> EditorResult<()> {
        self.ensure_idle()?;
        self.require_mode(EditMode::Object)?;
        let id = self.require_selection()?;
        let session = Session::rotate(id, &self.entry(id)?.shape, pointer);
        self.begin(session);
        Ok(())
    }

    /// Starts scaling the selected shape about its position.
    pub fn begin_scale(&mut self, pointer: Vector2) -> EditorResult<()> {
        self.ensure_idle()?;
        self.require_mode(EditMode::Object)?;
        let id = self.require_selection()?;
        let session = Session::scale(id, &self.entry(id)?.shape, pointer);
        self.begin(session);
        Ok(())
    }

    /// Feeds a pointer position to the active session.
    pub fn update_session(&mut self, pointer: Vector2) -> EditorResult<()> {
        let id = self.session.shape_id().ok_or(EditorError::NoActiveSession)?;
        let entry = self
            .store
            .get_mut(id)
            .ok_or(EditorError::ShapeNotFound(id))?;
        self.session.update(&mut entry.shape, pointer)?;
        debug!(id, x = pointer.x, y = pointer.y, "Session update");
        Ok(())
    }

    /// Ends the active session keeping the current state.
    pub fn commit_session(&mut self) -> EditorResult<SessionKind> {
        let kind = self.session.kind().ok_or(EditorError::NoActiveSession)?;
        self.session = Session::Idle;
        info!(%kind, "Session committed");
        self.emit(EditorEvent::Action(format!("{kind} applied")));
        Ok(kind)
    }

    /// Ends the active session and restores the state captured at its start.
    pub fn cancel_session(&mut self) -> EditorResult<SessionKind> {
        let kind = self.session.kind().ok_or(EditorError::NoActiveSession)?;
        let session = std::mem::take(&mut self.session);
        if let Some(id) = session.shape_id() {
            if let Some(entry) = self.store.get_mut(id) {
                session.restore(&mut entry.shape)?;
            }
        }
        info!(%kind, "Session cancelled");
        self.emit(EditorEvent::Action(format!("{kind} cancelled")));
        Ok(kind)
    }
}
