use shapekit_core::color::DEFAULT_SHAPE_COLOR;
use shapekit_core::{Color, MeshError, Transform, Vector2};
use tracing::debug;

use super::{DesignerShape, DrawTopology, ShapeBody, ShapeType};
use crate::mesh;
use crate::vertex::Vertex;

/// A closed polygon of any vertex count and the target of mesh operations.
///
/// Edge `i` joins vertex `i` to vertex `(i + 1) % n`. Every mesh operation
/// computes its result ring first and swaps it in only on success, so a failed
/// call leaves the polygon exactly as it was.
#[derive(Debug, Clone)]
pub struct Polygon {
    body: ShapeBody,
}

impl Polygon {
    /// An empty polygon placed at `transform`.
    pub fn new(transform: Transform) -> Self {
        Self::from_vertices(transform, Vec::new())
    }

    pub fn from_vertices(transform: Transform, vertices: Vec<Vertex>) -> Self {
        Self {
            body: ShapeBody::new(transform, vertices),
        }
    }

    pub fn from_points(transform: Transform, points: &[Vector2], color: Color) -> Self {
        let vertices = points.iter().map(|&p| Vertex::new(p, color)).collect();
        Self::from_vertices(transform, vertices)
    }

    /// Regular polygon at the origin; see [`Polygon::regular_at`].
    pub fn regular(sides: usize, size: f64) -> Result<Self, MeshError> {
        Self::regular_at(Transform::origin(), sides, size)
    }

    /// Regular polygon with circumradius `size`, first vertex on local +x,
    /// wound counter-clockwise.
    pub fn regular_at(transform: Transform, sides: usize, size: f64) -> Result<Self, MeshError> {
        let ring = mesh::regular_ring(sides, size, DEFAULT_SHAPE_COLOR)?;
        Ok(Self::from_vertices(transform, ring))
    }

    /// Appends a vertex in local space.
    pub fn add_vertex(&mut self, vertex: Vertex) {
        self.body.vertices_mut().push(vertex);
    }

    /// Splits every edge into `division` equal edges.
    pub fn subdivide(&mut self, division: usize) -> Result<(), MeshError> {
        let ring = mesh::subdivide(self.body.vertices(), division)?;
        self.commit("subdivide", ring);
        Ok(())
    }

    /// Replaces each vertex with two cut points along its adjacent edges.
    pub fn bevel(&mut self, length: f64) -> Result<(), MeshError> {
        let ring = mesh::bevel(self.body.vertices(), length)?;
        self.commit("bevel", ring);
        Ok(())
    }

    /// Splits the polygon into triangles sharing its transform.
    ///
    /// The polygon itself is not modified.
    pub fn triangulate(&self) -> Result<Vec<Polygon>, MeshError> {
        let vertices = self.body.vertices();
        let triangles = mesh::triangulate(vertices)?;
        debug!(
            vertices = vertices.len(),
            triangles = triangles.len(),
            "triangulated polygon"
        );
        Ok(triangles
            .into_iter()
            .map(|[a, b, c]| {
                Polygon::from_vertices(
                    *self.body.transform(),
                    vec![vertices[a], vertices[b], vertices[c]],
                )
            })
            .collect())
    }

    /// Moves the local origin to the vertex centroid without moving the
    /// polygon in world space.
    pub fn reposition_origin(&mut self) -> Result<(), MeshError> {
        let centroid = mesh::centroid(self.body.vertices()).ok_or(MeshError::TooFewVertices {
            required: 1,
            actual: 0,
        })?;
        let t = *self.body.transform();
        let shifted = t.position + centroid.scale(t.scale).rotate(t.rotation);
        let transform = Transform::new(shifted, t.rotation, t.scale);
        let ring = self
            .body
            .vertices()
            .iter()
            .map(|v| v.with_position(v.position() - centroid))
            .collect();

        self.body.set_transform(transform)?;
        self.commit("reposition origin", ring);
        Ok(())
    }

    /// Reverses the winding order, keeping vertex 0 first.
    pub fn flip_normal(&mut self) {
        let ring = mesh::flip_winding(self.body.vertices());
        self.commit("flip normal", ring);
    }

    /// Unsigned local-space area.
    pub fn area(&self) -> f64 {
        mesh::signed_area(self.body.vertices()).abs()
    }

    /// Signed local-space area; positive when wound counter-clockwise.
    pub fn signed_area(&self) -> f64 {
        mesh::signed_area(self.body.vertices())
    }

    /// Mean of the local vertex positions.
    pub fn centroid(&self) -> Option<Vector2> {
        mesh::centroid(self.body.vertices())
    }

    fn commit(&mut self, op: &str, ring: Vec<Vertex>) {
        debug!(
            op,
            before = self.body.vertices().len(),
            after = ring.len(),
            "mesh operation"
        );
        self.body.replace_vertices(ring);
    }
}

impl DesignerShape for Polygon {
    fn body(&self) -> &ShapeBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ShapeBody {
        &mut self.body
    }

    fn shape_type(&self) -> ShapeType {
        ShapeType::Polygon
    }

    fn draw_topology(&self) -> DrawTopology {
        DrawTopology::TriangleFan
    }
}
