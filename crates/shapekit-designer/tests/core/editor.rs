use shapekit_core::{Transform, Vector2};
use shapekit_designer::{
    DesignerShape, EditMode, Editor, EditorCommand, EditorError, EditorEvent, ViewMode, Viewport,
};

#[test]
fn test_names_and_ids() {
    let mut editor = Editor::default();
    let a = editor.create_default_square(None);
    let b = editor.create_default_line(None);
    let c = editor.create_default_square(None);
    editor.remove_shape(c).unwrap();
    let d = editor.create_default_square(None);

    assert!(a < b && b < c && c < d);
    let names: Vec<_> = editor.shapes().iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["Square 1", "Line 1", "Square 3"]);
}

#[test]
fn test_click_selects_nearest_shape() {
    let mut editor = Editor::default();
    let left = editor
        .create_square(Transform::at(Vector2::new(-0.5, 0.0)), 0.2)
        .unwrap();
    let right = editor
        .create_square(Transform::at(Vector2::new(0.5, 0.0)), 0.2)
        .unwrap();

    editor.click(Vector2::new(0.45, 0.02)).unwrap();
    assert_eq!(editor.selected_id(), Some(right));
    assert!(editor.shape(right).unwrap().is_highlighted());
    assert!(!editor.shape(left).unwrap().is_highlighted());

    // Nothing within reach clears the selection.
    editor.click(Vector2::new(0.0, 0.9)).unwrap();
    assert_eq!(editor.selected_id(), None);
    assert!(!editor.shape(right).unwrap().is_highlighted());
}

#[test]
fn test_click_tie_picks_earliest() {
    let mut editor = Editor::default();
    let first = editor
        .create_square(Transform::at(Vector2::new(-0.05, 0.0)), 0.2)
        .unwrap();
    editor
        .create_square(Transform::at(Vector2::new(0.05, 0.0)), 0.2)
        .unwrap();
    editor.click(Vector2::ZERO).unwrap();
    assert_eq!(editor.selected_id(), Some(first));
}

#[test]
fn test_edit_mode_click_picks_vertex() {
    let mut editor = Editor::default();
    let id = editor
        .create_square(Transform::at(Vector2::new(0.5, 0.5)), 0.5)
        .unwrap();
    editor.select(Some(id)).unwrap();
    editor.switch_mode().unwrap();

    editor.click(Vector2::new(0.26, 0.25)).unwrap();
    assert_eq!(editor.selected_vertex(), Some(2));
    editor.click(Vector2::new(0.5, 0.5)).unwrap();
    assert_eq!(editor.selected_vertex(), None);
    assert_eq!(editor.mode(), EditMode::Edit);
}

#[test]
fn test_keyboard_flow() {
    let mut editor = Editor::default();
    let id = editor.create_default_square(None);
    editor.select(Some(id)).unwrap();
    editor.drain_events();

    let pointer = Vector2::new(0.1, 0.1);
    for code in ["KeyW", "Tab", "Tab", "KeyX"] {
        let command = EditorCommand::from_key_code(code).unwrap();
        editor.execute(command, pointer).unwrap();
    }

    assert_eq!(editor.view_mode(), ViewMode::Wireframe);
    assert!(editor.shapes().is_empty());
    assert_eq!(
        editor.drain_events(),
        vec![
            EditorEvent::ViewModeChanged(ViewMode::Wireframe),
            EditorEvent::ModeChanged(EditMode::Edit),
            EditorEvent::ModeChanged(EditMode::Object),
            EditorEvent::ShapeListChanged,
        ]
    );
    assert_eq!(
        editor.execute(EditorCommand::Confirm, pointer),
        Err(EditorError::NoActiveSession)
    );
    assert_eq!(EditorCommand::from_key_code("KeyZ"), None);
}

#[test]
fn test_viewport_pointer_to_selection() {
    let viewport = Viewport::new(800.0, 600.0);
    let mut editor = Editor::default();
    let id = editor
        .create_square(Transform::at(Vector2::new(0.5, 0.5)), 0.2)
        .unwrap();

    let pointer = viewport.pixel_to_ndc(600.0, 150.0);
    assert_eq!(pointer, Vector2::new(0.5, 0.5));
    editor.click(pointer).unwrap();
    assert_eq!(editor.selected_id(), Some(id));
}

#[test]
fn test_triangulate_then_edit_triangle() {
    let mut editor = Editor::default();
    let id = editor.create_default_polygon(Some(5), Some(0.5)).unwrap();
    editor.select(Some(id)).unwrap();
    let triangles = editor.triangulate_selected().unwrap();
    assert_eq!(triangles.len(), 3);

    editor.select(Some(triangles[0])).unwrap();
    editor.subdivide_selected(2).unwrap();
    assert_eq!(editor.selected_shape().unwrap().vertex_count(), 6);
    assert_eq!(editor.shapes().get(triangles[2]).unwrap().name, "Polygon 4");
}
