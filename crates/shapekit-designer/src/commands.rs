//! Keyboard commands understood by the editor.
//!
//! The UI glue maps a key code to an [`EditorCommand`] and hands it to
//! [`Editor::execute`](crate::editor::Editor::execute) together with the
//! current pointer position.

use crate::editor::ViewMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorCommand {
    SetViewMode(ViewMode),
    DeleteSelected,
    /// Grab the selected shape, or the selected vertex in edit mode.
    Grab,
    Rotate,
    Scale,
    SwitchMode,
    /// Ends the active session and keeps its result.
    Confirm,
    /// Ends the active session and restores the captured state.
    Cancel,
}

impl EditorCommand {
    /// Maps a DOM-style key code (`"KeyG"`, `"Tab"`, ...) to a command.
    pub fn from_key_code(code: &str) -> Option<Self> {
        let command = match code {
            "KeyQ" => EditorCommand::SetViewMode(ViewMode::Solid),
            "KeyW" => EditorCommand::SetViewMode(ViewMode::Wireframe),
            "KeyX" => EditorCommand::DeleteSelected,
            "KeyG" => EditorCommand::Grab,
            "KeyR" => EditorCommand::Rotate,
            "KeyS" => EditorCommand::Scale,
            "Tab" => EditorCommand::SwitchMode,
            "Enter" => EditorCommand::Confirm,
            "Escape" => EditorCommand::Cancel,
            _ => return None,
        };
        Some(command)
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            EditorCommand::SetViewMode(ViewMode::Solid) => "Solid view",
            EditorCommand::SetViewMode(ViewMode::Wireframe) => "Wireframe view",
            EditorCommand::DeleteSelected => "Delete",
            EditorCommand::Grab => "Grab",
            EditorCommand::Rotate => "Rotate",
            EditorCommand::Scale => "Scale",
            EditorCommand::SwitchMode => "Switch mode",
            EditorCommand::Confirm => "Confirm",
            EditorCommand::Cancel => "Cancel",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        assert_eq!(
            EditorCommand::from_key_code("KeyW"),
            Some(EditorCommand::SetViewMode(ViewMode::Wireframe))
        );
        assert_eq!(
            EditorCommand::from_key_code("Tab"),
            Some(EditorCommand::SwitchMode)
        );
        assert_eq!(
            EditorCommand::from_key_code("Escape"),
            Some(EditorCommand::Cancel)
        );
        assert_eq!(EditorCommand::from_key_code("KeyZ"), None);
        assert_eq!(EditorCommand::Grab.name(), "Grab");
    }
}
