use std::f64::consts::SQRT_2;

use shapekit_core::{Transform, Vector2};
use shapekit_designer::shape::{DesignerShape, Line, Rectangle, Shape, Square};

fn assert_close(a: Vector2, b: Vector2) {
    assert!((a - b).magnitude() < 1e-9, "{} != {}", a, b);
}

fn positions(shape: &impl DesignerShape) -> Vec<Vector2> {
    shape.vertices().iter().map(|v| v.position()).collect()
}

#[test]
fn test_square_corners() {
    let unit = Square::new(Transform::origin(), 1.0);
    let expected = [(0.5, 0.5), (-0.5, 0.5), (-0.5, -0.5), (0.5, -0.5)];
    for (p, (x, y)) in positions(&unit).into_iter().zip(expected) {
        assert_close(p, Vector2::new(x, y));
    }

    let mut square = Square::new(Transform::origin(), 1.0);
    square.set_size(2.0).unwrap();
    let expected = [(1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0), (1.0, -1.0)];
    for (p, (x, y)) in positions(&square).into_iter().zip(expected) {
        assert_close(p, Vector2::new(x, y));
    }
}

#[test]
fn test_square_corner_drag_keeps_square() {
    let mut square = Square::new(Transform::origin(), 2.0);
    square.set_vertex_position(0, Vector2::new(2.0, 0.0)).unwrap();

    let expected = [(2.0, 0.0), (0.0, 2.0), (-2.0, 0.0), (0.0, -2.0)];
    for (p, (x, y)) in positions(&square).into_iter().zip(expected) {
        assert_close(p, Vector2::new(x, y));
    }
    assert!((square.size() - 2.0 * SQRT_2).abs() < 1e-9);
}

#[test]
fn test_line_endpoints_stay_symmetric() {
    let mut line = Line::new(Transform::origin(), 0.4);
    line.set_vertex_position(1, Vector2::new(0.3, 0.4)).unwrap();
    assert_close(line.vertices()[0].position(), Vector2::new(-0.3, -0.4));
    assert!((line.length() - 1.0).abs() < 1e-9);
}

#[test]
fn test_rectangle_corner_drag() {
    let mut rect = Rectangle::new(Transform::origin(), 0.6, 0.4);
    rect.set_vertex_position(2, Vector2::new(-0.5, -0.1)).unwrap();
    assert!((rect.length() - 1.0).abs() < 1e-9);
    assert!((rect.width() - 0.2).abs() < 1e-9);
    assert_close(rect.vertices()[0].position(), Vector2::new(0.5, 0.1));
}

#[test]
fn test_global_coords_follow_transform() {
    let mut shape: Shape = Square::new(Transform::origin(), 1.0).into();
    shape.set_position(Vector2::new(1.0, 0.0)).unwrap();
    shape.set_scale(2.0).unwrap();
    shape.set_rotation(std::f64::consts::FRAC_PI_2).unwrap();

    // Top-right (0.5, 0.5) scaled to (1, 1), turned to (-1, 1), moved by (1, 0).
    assert_close(shape.global_coords()[0], Vector2::new(0.0, 1.0));

    shape.set_vertex_global(0, Vector2::new(1.0, 2.0)).unwrap();
    assert_close(shape.global_coords()[0], Vector2::new(1.0, 2.0));
}

#[test]
fn test_buffer_matches_vertices() {
    let shape: Shape = Line::new(Transform::at(Vector2::new(0.25, 0.5)), 0.4).into();
    let data = shape.data();
    assert_eq!(data.len(), 2 * shapekit_core::VERTEX_SIZE);
    assert_eq!(&data[..2], &[-0.2f32, 0.0]);
    assert_eq!(
        &data[shapekit_core::layout::PARENT_POSITION_INDEX..][..2],
        &[0.25f32, 0.5]
    );
}
