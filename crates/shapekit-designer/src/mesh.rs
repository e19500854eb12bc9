//! Polygon mesh algorithms.
//!
//! Everything here works on vertex rings in local space and returns a new ring
//! (or index triples) without touching its input, so callers can validate the
//! result and swap it in as a whole.

use std::f64::consts::TAU;

use shapekit_core::{Color, GeometryError, MeshError, Vector2};

use crate::vertex::Vertex;

/// Minimum ring size for subdivision, beveling and triangulation.
pub const MIN_RING: usize = 3;

/// Areas below this are treated as zero.
const AREA_EPSILON: f64 = 1e-12;

fn require(ring: &[Vertex], required: usize) -> Result<(), MeshError> {
    if ring.len() < required {
        return Err(MeshError::TooFewVertices {
            required,
            actual: ring.len(),
        });
    }
    Ok(())
}

fn require_finite(ring: &[Vertex]) -> Result<(), MeshError> {
    if ring.iter().all(|v| v.position().is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFinite {
            what: "vertex position",
        }
        .into())
    }
}

/// Builds `sides` vertices on a circle of radius `size`, counter-clockwise,
/// the first one on the positive x axis.
pub fn regular_ring(sides: usize, size: f64, color: Color) -> Result<Vec<Vertex>, MeshError> {
    if sides < MIN_RING {
        return Err(MeshError::invalid(
            "sides",
            format!("a polygon needs at least {MIN_RING} sides, got {sides}"),
        ));
    }
    if !size.is_finite() || size <= 0.0 {
        return Err(MeshError::invalid(
            "size",
            format!("radius must be positive and finite, got {size}"),
        ));
    }

    let step = TAU / sides as f64;
    Ok((0..sides)
        .map(|i| {
            let angle = step * i as f64;
            Vertex::new(Vector2::new(size * angle.cos(), size * angle.sin()), color)
        })
        .collect())
}

/// Splits every edge into `division` equal parts.
///
/// New vertices interpolate position and color between the edge endpoints.
pub fn subdivide(ring: &[Vertex], division: usize) -> Result<Vec<Vertex>, MeshError> {
    if division == 0 {
        return Err(MeshError::invalid("division", "must be at least 1"));
    }
    require(ring, MIN_RING)?;

    let n = ring.len();
    let mut out = Vec::with_capacity(n * division);
    for (i, start) in ring.iter().enumerate() {
        let end = &ring[(i + 1) % n];
        out.push(*start);
        for k in 1..division {
            out.push(start.lerp(end, k as f64 / division as f64));
        }
    }
    Ok(out)
}

/// Cuts every corner: each vertex becomes two vertices placed `length` of the
/// way along its incoming and outgoing edges.
pub fn bevel(ring: &[Vertex], length: f64) -> Result<Vec<Vertex>, MeshError> {
    if !length.is_finite() || !(0.0..=1.0).contains(&length) {
        return Err(MeshError::invalid(
            "length",
            format!("must lie in [0, 1], got {length}"),
        ));
    }
    require(ring, MIN_RING)?;

    let n = ring.len();
    let mut out = Vec::with_capacity(n * 2);
    for (i, vertex) in ring.iter().enumerate() {
        let v = vertex.position();
        let prev = ring[(i + n - 1) % n].position();
        let next = ring[(i + 1) % n].position();
        out.push(vertex.with_position(v + (prev - v).scale(length)));
        out.push(vertex.with_position(v + (next - v).scale(length)));
    }
    Ok(out)
}

/// Ear-clips the ring into triangles, returned as index triples into `ring`.
pub fn triangulate(ring: &[Vertex]) -> Result<Vec<[usize; 3]>, MeshError> {
    require(ring, MIN_RING)?;
    require_finite(ring)?;
    if signed_area(ring).abs() < AREA_EPSILON {
        return Err(MeshError::Degenerate {
            reason: "ring encloses no area".to_string(),
        });
    }

    let coords: Vec<f64> = ring
        .iter()
        .flat_map(|v| {
            let p = v.position();
            [p.x, p.y]
        })
        .collect();

    let indices = earcutr::earcut(&coords, &[], 2).map_err(|e| MeshError::Degenerate {
        reason: format!("ear clipping failed: {e:?}"),
    })?;
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(MeshError::Degenerate {
            reason: "ring could not be split into triangles".to_string(),
        });
    }

    Ok(indices
        .chunks_exact(3)
        .map(|t| [t[0], t[1], t[2]])
        .collect())
}

/// Mean of the ring's local positions; `None` for an empty ring.
pub fn centroid(ring: &[Vertex]) -> Option<Vector2> {
    if ring.is_empty() {
        return None;
    }
    let sum = ring
        .iter()
        .fold(Vector2::ZERO, |acc, v| acc + v.position());
    Some(sum.scale(1.0 / ring.len() as f64))
}

/// Shoelace area; positive for counter-clockwise rings.
pub fn signed_area(ring: &[Vertex]) -> f64 {
    let n = ring.len();
    if n < MIN_RING {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| ring[i].position().cross(ring[(i + 1) % n].position()))
        .sum();
    twice / 2.0
}

/// Reverses the winding, keeping the first vertex in place.
pub fn flip_winding(ring: &[Vertex]) -> Vec<Vertex> {
    match ring.split_first() {
        Some((first, rest)) => std::iter::once(*first)
            .chain(rest.iter().rev().copied())
            .collect(),
        None => Vec::new(),
    }
}
