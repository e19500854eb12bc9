use shapekit_core::{color, layout, Transform, Vector2};
use shapekit_designer::render::{point_marker, POINT_MARKER_RECORDS};
use shapekit_designer::{
    buffer_bytes, DesignerShape, DrawCommand, DrawTopology, Editor, RecordingBackend, ViewMode,
};

#[test]
fn test_frame_follows_draw_order() {
    let mut editor = Editor::default();
    editor.create_default_line(None);
    editor.create_default_polygon(Some(6), None).unwrap();
    editor.create_default_square(None);

    let mut backend = RecordingBackend::new();
    editor.render(&mut backend);
    let topologies: Vec<_> = backend.draws().map(|(t, _)| t).collect();
    assert_eq!(
        topologies,
        vec![
            DrawTopology::Lines,
            DrawTopology::TriangleFan,
            DrawTopology::TriangleFan
        ]
    );
    assert_eq!(backend.commands[2].vertex_count(), 6);
}

#[test]
fn test_wireframe_marker_count() {
    let mut editor = Editor::default();
    editor.create_default_polygon(Some(5), None).unwrap();
    editor.create_default_line(None);
    editor.set_view_mode(ViewMode::Wireframe);

    let mut backend = RecordingBackend::new();
    editor.render(&mut backend);
    let outlines = backend
        .draws()
        .filter(|(t, _)| *t == DrawTopology::LineLoop)
        .count();
    let markers = backend
        .draws()
        .filter(|(_, d)| d.len() == POINT_MARKER_RECORDS * layout::VERTEX_SIZE)
        .count();
    assert_eq!(outlines, 2);
    assert_eq!(markers, 7);
}

#[test]
fn test_point_marker_rim() {
    let mut editor = Editor::default();
    let id = editor
        .create_square(Transform::at(Vector2::new(0.2, -0.2)), 0.4)
        .unwrap();
    let shape = editor.shape(id).unwrap();
    let vertex = shape.vertex(0).unwrap();
    let marker = point_marker(&vertex, color::RED, 0.01);

    assert_eq!(marker.len(), POINT_MARKER_RECORDS * layout::VERTEX_SIZE);
    let rim = &marker[layout::VERTEX_SIZE..2 * layout::VERTEX_SIZE];
    assert_eq!(&rim[..2], &[0.01f32, 0.0]);
    assert_eq!(&rim[layout::PARENT_POSITION_INDEX..][..2], &[0.4f32, 0.0]);
    assert!(marker
        .chunks_exact(layout::VERTEX_SIZE)
        .all(|r| r[layout::R] == 1.0 && r[layout::G] == 0.0));
}

#[test]
fn test_buffer_bytes_of_recorded_draw() {
    let mut editor = Editor::default();
    editor.create_default_square(None);
    let mut backend = RecordingBackend::new();
    editor.render(&mut backend);

    match &backend.commands[1] {
        DrawCommand::Draw { data, .. } => {
            assert_eq!(buffer_bytes(data).len(), data.len() * 4);
            assert_eq!(data.len(), 4 * layout::VERTEX_SIZE);
        }
        other => panic!("expected a draw, got {:?}", other),
    }
}
