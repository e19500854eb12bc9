//! Pointer-driven drag sessions.
//!
//! A session captures the state it needs to undo itself when it starts, is
//! fed pointer positions while active, and ends either by committing (the
//! current state stays) or cancelling (the captured state is restored).
//! All pointer positions are in normalized device coordinates.

use std::f64::consts::{PI, TAU};
use std::fmt;

use shapekit_core::{GeometryError, Transform, Vector2};
use tracing::warn;

use crate::error::ShapeError;
use crate::shape::{DesignerShape, Shape};

/// Anchor distances below this make a scale session degenerate.
const MIN_ANCHOR_DISTANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Grab,
    GrabVertex,
    Rotate,
    Scale,
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Grab => write!(f, "Grab"),
            SessionKind::GrabVertex => write!(f, "Grab vertex"),
            SessionKind::Rotate => write!(f, "Rotate"),
            SessionKind::Scale => write!(f, "Scale"),
        }
    }
}

/// Interaction state machine. At most one session is active at a time.
#[derive(Debug, Clone, Default)]
pub enum Session {
    #[default]
    Idle,
    Grab {
        shape_id: u64,
        anchor: Vector2,
        initial: Transform,
    },
    GrabVertex {
        shape_id: u64,
        vertex: usize,
        /// Whole-shape copy, since linkage rules may move sibling vertices.
        snapshot: Box<Shape>,
    },
    Rotate {
        shape_id: u64,
        pivot: Vector2,
        anchor_angle: f64,
        initial: Transform,
    },
    Scale {
        shape_id: u64,
        pivot: Vector2,
        anchor_distance: f64,
        initial: Transform,
    },
}

impl Session {
    pub fn grab(shape_id: u64, shape: &Shape, anchor: Vector2) -> Self {
        Session::Grab {
            shape_id,
            anchor,
            initial: *shape.transform(),
        }
    }

    pub fn grab_vertex(shape_id: u64, shape: &Shape, vertex: usize) -> Self {
        Session::GrabVertex {
            shape_id,
            vertex,
            snapshot: Box::new(shape.clone()),
        }
    }

    /// Rotation about the shape's position, measured from `anchor`.
    pub fn rotate(shape_id: u64, shape: &Shape, anchor: Vector2) -> Self {
        let initial = *shape.transform();
        Session::Rotate {
            shape_id,
            pivot: initial.position,
            anchor_angle: (anchor - initial.position).arc(),
            initial,
        }
    }

    /// Scaling about the shape's position by the ratio of pointer distances.
    pub fn scale(shape_id: u64, shape: &Shape, anchor: Vector2) -> Self {
        let initial = *shape.transform();
        let anchor_distance = Vector2::distance(anchor, initial.position);
        if anchor_distance < MIN_ANCHOR_DISTANCE {
            warn!(shape_id, "Scale anchor on the pivot, pointer updates will be ignored");
        }
        Session::Scale {
            shape_id,
            pivot: initial.position,
            anchor_distance,
            initial,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Session::Idle)
    }

    pub fn kind(&self) -> Option<SessionKind> {
        match self {
            Session::Idle => None,
            Session::Grab { .. } => Some(SessionKind::Grab),
            Session::GrabVertex { .. } => Some(SessionKind::GrabVertex),
            Session::Rotate { .. } => Some(SessionKind::Rotate),
            Session::Scale { .. } => Some(SessionKind::Scale),
        }
    }

    /// The shape this session manipulates.
    pub fn shape_id(&self) -> Option<u64> {
        match self {
            Session::Idle => None,
            Session::Grab { shape_id, .. }
            | Session::GrabVertex { shape_id, .. }
            | Session::Rotate { shape_id, .. }
            | Session::Scale { shape_id, .. } => Some(*shape_id),
        }
    }

    /// Applies a pointer position to `shape`.
    ///
    /// Degenerate updates (a scale session anchored on its pivot) are ignored.
    /// On error the shape is left as it was before this update.
    pub fn update(&self, shape: &mut Shape, pointer: Vector2) -> Result<(), ShapeError> {
        if !pointer.is_finite() {
            return Err(GeometryError::NonFinite { what: "pointer" }.into());
        }
        match self {
            Session::Idle => Ok(()),
            Session::Grab {
                anchor, initial, ..
            } => {
                let position = initial.position + (pointer - *anchor);
                Ok(shape.set_position(position)?)
            }
            Session::GrabVertex { vertex, .. } => shape.set_vertex_global(*vertex, pointer),
            Session::Rotate {
                pivot,
                anchor_angle,
                initial,
                ..
            } => {
                let diff = wrap_angle((pointer - *pivot).arc() - anchor_angle);
                Ok(shape.set_rotation(initial.rotation + diff)?)
            }
            Session::Scale {
                pivot,
                anchor_distance,
                initial,
                ..
            } => {
                if *anchor_distance < MIN_ANCHOR_DISTANCE {
                    return Ok(());
                }
                let ratio = Vector2::distance(pointer, *pivot) / anchor_distance;
                Ok(shape.set_scale(initial.scale * ratio)?)
            }
        }
    }

    /// Puts `shape` back into the state captured when the session started.
    pub fn restore(&self, shape: &mut Shape) -> Result<(), ShapeError> {
        match self {
            Session::Idle => Ok(()),
            Session::GrabVertex { snapshot, .. } => {
                let highlighted = shape.is_highlighted();
                let hidden = shape.is_hidden();
                *shape = snapshot.as_ref().clone();
                shape.set_highlighted(highlighted);
                shape.set_hidden(hidden);
                Ok(())
            }
            Session::Grab { initial, .. }
            | Session::Rotate { initial, .. }
            | Session::Scale { initial, .. } => Ok(shape.set_transform(*initial)?),
        }
    }
}

/// Wraps an angle difference into `(-π, π]`.
fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}
