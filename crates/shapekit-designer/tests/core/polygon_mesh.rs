use std::f64::consts::TAU;

use proptest::prelude::*;
use shapekit_core::{MeshError, Transform, Vector2};
use shapekit_designer::shape::{DesignerShape, Polygon};

fn regular(sides: usize, size: f64) -> Polygon {
    Polygon::regular(sides, size).unwrap()
}

#[test]
fn test_regular_polygon_geometry() {
    let polygon = regular(7, 0.5);
    let step = TAU / 7.0;
    for (i, v) in polygon.vertices().iter().enumerate() {
        let p = v.position();
        assert!((p.magnitude() - 0.5).abs() < 1e-12);
        let expected = Vector2::new(0.5 * (step * i as f64).cos(), 0.5 * (step * i as f64).sin());
        assert!((p - expected).magnitude() < 1e-12);
    }
    assert!(polygon.signed_area() > 0.0);
}

#[test]
fn test_regular_rejects_bad_input() {
    assert!(matches!(
        Polygon::regular(2, 0.5),
        Err(MeshError::InvalidParameter { .. })
    ));
    assert!(matches!(
        Polygon::regular(5, 0.0),
        Err(MeshError::InvalidParameter { .. })
    ));
}

#[test]
fn test_bevel_zero_gives_coincident_pairs() {
    let mut polygon = regular(5, 0.5);
    let before: Vec<Vector2> = polygon.vertices().iter().map(|v| v.position()).collect();
    polygon.bevel(0.0).unwrap();
    assert_eq!(polygon.vertex_count(), 10);
    for (i, p) in before.iter().enumerate() {
        assert_eq!(polygon.vertices()[2 * i].position(), *p);
        assert_eq!(polygon.vertices()[2 * i + 1].position(), *p);
    }
}

#[test]
fn test_subdivide_one_is_noop() {
    let mut polygon = regular(4, 0.5);
    let before = polygon.vertices().to_vec();
    polygon.subdivide(1).unwrap();
    assert_eq!(polygon.vertices(), before.as_slice());
}

#[test]
fn test_concave_triangulation() {
    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 0.0),
        Vector2::new(2.0, 2.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 2.0),
    ];
    let polygon = Polygon::from_points(Transform::origin(), &points, shapekit_core::color::WHITE);
    let triangles = polygon.triangulate().unwrap();
    assert_eq!(triangles.len(), 3);
    let total: f64 = triangles.iter().map(|t| t.area()).sum();
    assert!((total - polygon.area()).abs() < 1e-9);
}

#[test]
fn test_collinear_ring_is_degenerate() {
    let points = [
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.0),
        Vector2::new(2.0, 0.0),
    ];
    let polygon = Polygon::from_points(Transform::origin(), &points, shapekit_core::color::WHITE);
    assert!(matches!(
        polygon.triangulate(),
        Err(MeshError::Degenerate { .. })
    ));
}

proptest! {
    #[test]
    fn subdivide_multiplies_vertex_count(sides in 3usize..24, division in 1usize..8) {
        let mut polygon = regular(sides, 0.5);
        polygon.subdivide(division).unwrap();
        prop_assert_eq!(polygon.vertex_count(), sides * division);
    }

    #[test]
    fn subdivide_keeps_original_vertices(sides in 3usize..16, division in 1usize..6) {
        let mut polygon = regular(sides, 0.5);
        let before = polygon.vertices().to_vec();
        polygon.subdivide(division).unwrap();
        for (i, v) in before.iter().enumerate() {
            prop_assert_eq!(polygon.vertices()[i * division].position(), v.position());
        }
    }

    #[test]
    fn bevel_doubles_vertex_count(sides in 3usize..24, length in 0.0f64..=1.0) {
        let mut polygon = regular(sides, 0.5);
        polygon.bevel(length).unwrap();
        prop_assert_eq!(polygon.vertex_count(), sides * 2);
    }

    #[test]
    fn convex_triangulation_covers_area(sides in 3usize..32, size in 0.05f64..2.0) {
        let polygon = regular(sides, size);
        let triangles = polygon.triangulate().unwrap();
        prop_assert_eq!(triangles.len(), sides - 2);
        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        prop_assert!((total - polygon.area()).abs() < 1e-9 * size.max(1.0));
        for t in &triangles {
            prop_assert_eq!(t.vertex_count(), 3);
            prop_assert_eq!(t.transform(), polygon.transform());
        }
    }

    #[test]
    fn flip_normal_twice_restores_order(sides in 3usize..20) {
        let mut polygon = regular(sides, 0.5);
        let before = polygon.vertices().to_vec();
        let area = polygon.signed_area();
        polygon.flip_normal();
        prop_assert_eq!(polygon.vertices()[0], before[0]);
        prop_assert!((polygon.signed_area() + area).abs() < 1e-9);
        polygon.flip_normal();
        prop_assert_eq!(polygon.vertices(), before.as_slice());
    }

    #[test]
    fn reposition_origin_preserves_world_coords(
        x in -1.0f64..1.0,
        y in -1.0f64..1.0,
        rotation in -3.0f64..3.0,
        scale in 0.1f64..4.0,
        dx in -0.5f64..0.5,
        dy in -0.5f64..0.5,
    ) {
        let points = [
            Vector2::new(dx, dy),
            Vector2::new(dx + 0.4, dy),
            Vector2::new(dx + 0.5, dy + 0.3),
            Vector2::new(dx, dy + 0.2),
        ];
        let transform = Transform::new(Vector2::new(x, y), rotation, scale);
        let mut polygon = Polygon::from_points(transform, &points, shapekit_core::color::WHITE);
        let before = polygon.global_coords();
        polygon.reposition_origin().unwrap();

        let centroid = polygon.centroid().unwrap();
        prop_assert!(centroid.magnitude() < 1e-9);
        for (a, b) in before.iter().zip(polygon.global_coords()) {
            prop_assert!((*a - b).magnitude() < 1e-9, "{} moved to {}", a, b);
        }
    }
}
