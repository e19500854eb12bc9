//! Shape placement in world space.
//!
//! A `Transform` is applied as scale, then rotation, then translation:
//!
//! ```text
//! global = position + rotate(local * scale, rotation)
//! local  = rotate(global - position, -rotation) / scale
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::vector::Vector2;

/// Position, rotation (radians) and uniform scale of a shape.
///
/// Rotation is unbounded; it wraps implicitly through the trigonometric
/// functions. Scale is expected to be positive but only zero is rejected, and
/// only where the transform has to be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vector2,
    pub rotation: f64,
    pub scale: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::origin()
    }
}

impl Transform {
    /// Identity placement at the world origin.
    pub const fn origin() -> Self {
        Self {
            position: Vector2::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }

    pub const fn new(position: Vector2, rotation: f64, scale: f64) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Identity rotation and scale at `position`.
    pub const fn at(position: Vector2) -> Self {
        Self::new(position, 0.0, 1.0)
    }

    /// Maps a local-space point to world space.
    pub fn to_global(&self, local: Vector2) -> Vector2 {
        self.position + local.scale(self.scale).rotate(self.rotation)
    }

    /// Maps a world-space point back to local space.
    ///
    /// Fails with [`GeometryError::ZeroScale`] when the scale is zero, and with
    /// [`GeometryError::NonFinite`] when the point or transform is not finite.
    pub fn to_local(&self, global: Vector2) -> Result<Vector2, GeometryError> {
        if !global.is_finite() {
            return Err(GeometryError::NonFinite {
                what: "global coordinate",
            });
        }
        if !self.is_finite() {
            return Err(GeometryError::NonFinite { what: "transform" });
        }
        if self.scale == 0.0 {
            return Err(GeometryError::ZeroScale);
        }
        Ok((global - self.position)
            .rotate(-self.rotation)
            .scale(1.0 / self.scale))
    }

    pub fn translated(&self, delta: Vector2) -> Self {
        Self::new(self.position + delta, self.rotation, self.scale)
    }

    /// Rotation composes additively.
    pub fn rotated(&self, angle: f64) -> Self {
        Self::new(self.position, self.rotation + angle, self.scale)
    }

    /// Scale composes multiplicatively.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.position, self.rotation, self.scale * factor)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }
}
