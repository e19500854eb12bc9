//! Editor state for UI integration.
//!
//! [`Editor`] owns the shape collection, the selection, the current modes and
//! the active drag session, and is the single entry point the UI glue calls
//! into. It is split into submodules:
//! - `shapes`: factories, deletion and visibility
//! - `mesh_ops`: polygon mesh operations on the selection
//! - `sessions`: grab/rotate/scale pointer sessions
//! - `frame`: per-frame render command generation

mod frame;
mod mesh_ops;
mod sessions;
mod shapes;

use std::fmt;

use shapekit_core::Vector2;
use shapekit_settings::Config;
use tracing::info;

use crate::commands::EditorCommand;
use crate::error::{EditorError, EditorResult, ShapeError};
use crate::events::EditorEvent;
use crate::selection_manager::SelectionManager;
use crate::session::Session;
use crate::shape::{DesignerShape, Shape};
use crate::shape_store::{ShapeEntry, ShapeStore};

/// Whether clicks and grabs act on whole shapes or on vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditMode {
    #[default]
    Object,
    Edit,
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::Object => write!(f, "Object"),
            EditMode::Edit => write!(f, "Edit"),
        }
    }
}

/// How shapes are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewMode {
    #[default]
    Solid,
    Wireframe,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Solid => write!(f, "Solid"),
            ViewMode::Wireframe => write!(f, "Wireframe"),
        }
    }
}

/// Interactive shape editor
#[derive(Debug, Clone, Default)]
pub struct Editor {
    config: Config,
    store: ShapeStore,
    selection: SelectionManager,
    mode: EditMode,
    view_mode: ViewMode,
    session: Session,
    events: Vec<EditorEvent>,
}

impl Editor {
    /// Creates an empty editor using `config` for defaults, thresholds and
    /// colors.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeStore {
        &self.store
    }

    pub fn shape(&self, id: u64) -> Option<&Shape> {
        self.store.get(id).map(|e| &e.shape)
    }

    /// Direct mutable access for scripted edits. Changes made here do not
    /// emit events.
    pub fn shape_mut(&mut self, id: u64) -> Option<&mut Shape> {
        self.store.get_mut(id).map(|e| &mut e.shape)
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    pub fn selected_vertex(&self) -> Option<usize> {
        self.selection.selected_vertex()
    }

    pub fn selected_entry(&self) -> Option<&ShapeEntry> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selected_entry().map(|e| &e.shape)
    }

    /// Removes and returns all pending events, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: EditorEvent) {
        self.events.push(event);
    }

    fn ensure_idle(&self) -> EditorResult<()> {
        if self.session.is_active() {
            return Err(EditorError::SessionActive);
        }
        Ok(())
    }

    fn require_selection(&self) -> EditorResult<u64> {
        self.selected_id().ok_or(EditorError::NoSelection)
    }

    fn require_mode(&self, required: EditMode) -> EditorResult<()> {
        if self.mode != required {
            return Err(EditorError::WrongMode { required });
        }
        Ok(())
    }

    pub(crate) fn entry(&self, id: u64) -> EditorResult<&ShapeEntry> {
        self.store.get(id).ok_or(EditorError::ShapeNotFound(id))
    }

    pub(crate) fn entry_mut(&mut self, id: u64) -> EditorResult<&mut ShapeEntry> {
        self.store.get_mut(id).ok_or(EditorError::ShapeNotFound(id))
    }

    /// Selects a shape, or clears the selection with `None`.
    ///
    /// Clearing the selection while in edit mode drops back to object mode.
    pub fn select(&mut self, id: Option<u64>) -> EditorResult<()> {
        self.ensure_idle()?;
        if let Some(id) = id {
            if self.store.get(id).is_none() {
                return Err(EditorError::ShapeNotFound(id));
            }
        }
        self.apply_selection(id);
        Ok(())
    }

    fn apply_selection(&mut self, id: Option<u64>) {
        self.selection.select(&mut self.store, id);
        if id.is_none() && self.mode == EditMode::Edit {
            self.set_mode(EditMode::Object);
        }
        self.emit(EditorEvent::ShapeListChanged);
    }

    /// Selects a vertex of the selected shape in edit mode.
    pub fn select_vertex(&mut self, index: Option<usize>) -> EditorResult<()> {
        self.require_mode(EditMode::Edit)?;
        let id = self.require_selection()?;
        if let Some(index) = index {
            let len = self.entry(id)?.shape.vertex_count();
            if index >= len {
                return Err(ShapeError::VertexOutOfRange { index, len }.into());
            }
        }
        self.selection.select_vertex(index);
        Ok(())
    }

    /// Selects the shape nearest to `point`, or clears the selection.
    pub fn select_at(&mut self, point: Vector2) -> EditorResult<Option<u64>> {
        self.ensure_idle()?;
        let threshold = self.config.interaction.shape_pick_threshold;
        let id = SelectionManager::pick_shape(&self.store, point, threshold);
        self.apply_selection(id);
        Ok(id)
    }

    /// Selects the vertex of the selected shape nearest to `point`.
    pub fn select_vertex_at(&mut self, point: Vector2) -> EditorResult<Option<usize>> {
        self.ensure_idle()?;
        self.require_mode(EditMode::Edit)?;
        self.require_selection()?;
        let threshold = self.config.interaction.vertex_pick_threshold;
        Ok(self.selection.select_vertex_at(&self.store, point, threshold))
    }

    /// Handles a click at `point`: ends an active session, otherwise picks a
    /// shape in object mode or a vertex in edit mode.
    pub fn click(&mut self, point: Vector2) -> EditorResult<()> {
        if self.session.is_active() {
            self.commit_session()?;
            return Ok(());
        }
        match self.mode {
            EditMode::Object => self.select_at(point).map(|_| ()),
            EditMode::Edit => self.select_vertex_at(point).map(|_| ()),
        }
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        if self.view_mode != view_mode {
            self.view_mode = view_mode;
            info!(%view_mode, "View mode changed");
            self.emit(EditorEvent::ViewModeChanged(view_mode));
        }
    }

    pub fn switch_view_mode(&mut self) {
        let next = match self.view_mode {
            ViewMode::Solid => ViewMode::Wireframe,
            ViewMode::Wireframe => ViewMode::Solid,
        };
        self.set_view_mode(next);
    }

    fn set_mode(&mut self, mode: EditMode) {
        if self.mode != mode {
            self.mode = mode;
            self.selection.select_vertex(None);
            info!(%mode, "Mode changed");
            self.emit(EditorEvent::ModeChanged(mode));
        }
    }

    /// Toggles between object and edit mode. Entering edit mode requires a
    /// selected shape.
    pub fn switch_mode(&mut self) -> EditorResult<EditMode> {
        self.ensure_idle()?;
        match self.mode {
            EditMode::Object => {
                self.require_selection()?;
                self.set_mode(EditMode::Edit);
            }
            EditMode::Edit => self.set_mode(EditMode::Object),
        }
        Ok(self.mode)
    }

    /// Runs a keyboard command with the pointer at `pointer`.
    pub fn execute(&mut self, command: EditorCommand, pointer: Vector2) -> EditorResult<()> {
        match command {
            EditorCommand::SetViewMode(mode) => {
                self.set_view_mode(mode);
                Ok(())
            }
            EditorCommand::DeleteSelected => self.delete_selected().map(|_| ()),
            EditorCommand::Grab => self.begin_grab(pointer),
            EditorCommand::Rotate => self.begin_rotate(pointer),
            EditorCommand::Scale => self.begin_scale(pointer),
            EditorCommand::SwitchMode => self.switch_mode().map(|_| ()),
            EditorCommand::Confirm => self.commit_session().map(|_| ()),
            EditorCommand::Cancel => self.cancel_session().map(|_| ()),
        }
    }
}
