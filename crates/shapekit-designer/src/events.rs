//! Editor notifications for the UI layer.
//!
//! The editor pushes events onto a queue as it changes; the UI glue drains
//! the queue after each input and refreshes the shape list, mode label and
//! action label.

use crate::editor::{EditMode, ViewMode};

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    /// Shapes were added, removed, renamed, hidden, or the selection moved
    ShapeListChanged,
    /// Object/Edit mode switched
    ModeChanged(EditMode),
    /// Solid/Wireframe view switched
    ViewModeChanged(ViewMode),
    /// Short description of the current or last interaction
    Action(String),
}

impl EditorEvent {
    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::ShapeListChanged => "Shape list changed".to_string(),
            EditorEvent::ModeChanged(mode) => format!("{} mode", mode),
            EditorEvent::ViewModeChanged(mode) => format!("{} view", mode),
            EditorEvent::Action(action) => action.clone(),
        }
    }
}
