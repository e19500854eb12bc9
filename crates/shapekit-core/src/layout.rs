//! Vertex-buffer layout shared with the renderer.
//!
//! Every vertex is flattened into one fixed-width record of `f32`s:
//!
//! ```text
//! | 0 1 | 2 3 4 | 5 6             | 7               | 8            |
//! | x y | r g b | parent x,y      | parent rotation | parent scale |
//! ```
//!
//! The renderer's attribute bindings depend on these offsets byte for byte.

pub const FLOAT_SIZE: usize = std::mem::size_of::<f32>();

pub const POSITION_SIZE: usize = 2;
pub const COLOR_SIZE: usize = 3;
pub const FACTOR_SIZE: usize = 1;

pub const POSITION_INDEX: usize = 0;
pub const COLOR_INDEX: usize = POSITION_SIZE;
pub const PARENT_POSITION_INDEX: usize = POSITION_SIZE + COLOR_SIZE;
pub const PARENT_ROTATION_INDEX: usize = PARENT_POSITION_INDEX + POSITION_SIZE;
pub const PARENT_SCALE_INDEX: usize = PARENT_ROTATION_INDEX + FACTOR_SIZE;

/// Floats per vertex record.
pub const VERTEX_SIZE: usize = PARENT_SCALE_INDEX + FACTOR_SIZE;

/// Bytes between consecutive vertex records.
pub const VERTEX_STRIDE: usize = VERTEX_SIZE * FLOAT_SIZE;

pub const R: usize = COLOR_INDEX;
pub const G: usize = COLOR_INDEX + 1;
pub const B: usize = COLOR_INDEX + 2;

/// A single flattened vertex record.
pub type VertexRecord = [f32; VERTEX_SIZE];
