//! Named RGB colors.

use crate::vector::Vector3;

/// RGB color triple with components in `[0, 1]`.
pub type Color = Vector3;

pub const BLACK: Color = Vector3::new(0.0, 0.0, 0.0);
pub const WHITE: Color = Vector3::new(1.0, 1.0, 1.0);
pub const RED: Color = Vector3::new(1.0, 0.0, 0.0);
pub const GREEN: Color = Vector3::new(0.0, 1.0, 0.0);
pub const BLUE: Color = Vector3::new(0.0, 0.0, 1.0);
pub const ORANGE: Color = Vector3::new(1.0, 0.568, 0.0);

/// Background the renderer clears to before each frame.
pub const CLEAR_COLOR: Color = Vector3::new(0.5, 0.5, 0.5);

/// Color given to every vertex of a freshly constructed shape.
pub const DEFAULT_SHAPE_COLOR: Color = WHITE;
