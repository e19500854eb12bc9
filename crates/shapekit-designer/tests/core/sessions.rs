use std::f64::consts::FRAC_PI_2;

use shapekit_core::{Transform, Vector2};
use shapekit_designer::{DesignerShape, Editor, EditorError, Session, SessionKind, Shape, Square};

fn assert_close(a: Vector2, b: Vector2) {
    assert!((a - b).magnitude() < 1e-9, "{} != {}", a, b);
}

fn selected_square(position: Vector2) -> (Editor, u64) {
    let mut editor = Editor::default();
    let id = editor.create_square(Transform::at(position), 0.5).unwrap();
    editor.select(Some(id)).unwrap();
    (editor, id)
}

#[test]
fn test_rotate_follows_pointer_angle() {
    let (mut editor, id) = selected_square(Vector2::new(0.1, 0.1));
    editor.begin_rotate(Vector2::new(0.6, 0.1)).unwrap();
    editor.update_session(Vector2::new(0.1, 0.9)).unwrap();
    let rotation = editor.shape(id).unwrap().transform().rotation;
    assert!((rotation - FRAC_PI_2).abs() < 1e-9);
    assert_eq!(editor.commit_session(), Ok(SessionKind::Rotate));
}

#[test]
fn test_rotate_across_the_negative_axis() {
    let square: Shape = Square::new(Transform::origin(), 0.5).into();
    let mut shape = square.clone();
    let session = Session::rotate(1, &square, Vector2::new(-1.0, 0.1));
    session.update(&mut shape, Vector2::new(-1.0, -0.1)).unwrap();
    // A small turn through the negative x axis, not a near-full revolution.
    assert!(shape.transform().rotation.abs() < 0.3);
}

#[test]
fn test_scale_on_pivot_is_ignored() {
    let (mut editor, id) = selected_square(Vector2::new(0.2, 0.2));
    editor.begin_scale(Vector2::new(0.2, 0.2)).unwrap();
    editor.update_session(Vector2::new(0.8, 0.8)).unwrap();
    assert_eq!(editor.shape(id).unwrap().transform().scale, 1.0);
    editor.commit_session().unwrap();
}

#[test]
fn test_grab_vertex_then_cancel() {
    let (mut editor, id) = selected_square(Vector2::ZERO);
    editor.switch_mode().unwrap();
    editor.select_vertex(Some(0)).unwrap();
    let before = editor.shape(id).unwrap().vertices().to_vec();

    editor.begin_grab(Vector2::ZERO).unwrap();
    editor.update_session(Vector2::new(0.5, 0.0)).unwrap();
    let moved = editor.shape(id).unwrap().global_coords();
    assert_close(moved[0], Vector2::new(0.5, 0.0));
    assert_close(moved[1], Vector2::new(0.0, 0.5));

    assert_eq!(editor.cancel_session(), Ok(SessionKind::GrabVertex));
    let shape = editor.shape(id).unwrap();
    assert_eq!(shape.vertices(), before.as_slice());
    assert!(shape.is_highlighted());
    match shape {
        Shape::Square(s) => assert_eq!(s.size(), 0.5),
        other => panic!("unexpected shape {:?}", other),
    }
}

#[test]
fn test_grab_vertex_on_scaled_shape_rejects_zero_scale() {
    let (mut editor, id) = selected_square(Vector2::ZERO);
    editor.shape_mut(id).unwrap().set_scale(0.0).unwrap();
    editor.switch_mode().unwrap();
    editor.select_vertex(Some(1)).unwrap();
    editor.begin_grab(Vector2::ZERO).unwrap();
    assert!(matches!(
        editor.update_session(Vector2::new(0.3, 0.3)),
        Err(EditorError::Shape(_))
    ));
    editor.cancel_session().unwrap();
}

#[test]
fn test_non_finite_pointer_rejected() {
    let (mut editor, id) = selected_square(Vector2::ZERO);
    editor.begin_grab(Vector2::ZERO).unwrap();
    assert!(editor
        .update_session(Vector2::new(f64::NAN, 0.0))
        .is_err());
    assert_eq!(editor.shape(id).unwrap().transform().position, Vector2::ZERO);
}
