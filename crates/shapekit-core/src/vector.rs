//! Vector value types.
//!
//! `Vector2` is used for positions in local and world space, `Vector3` for RGB
//! color triples. Both are `Copy` and every operation returns a new value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A 2D vector or point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Uniformly scales both components.
    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    /// Scales each component independently.
    pub fn scale_xy(self, sx: f64, sy: f64) -> Self {
        Self::new(self.x * sx, self.y * sy)
    }

    /// Rotates counter-clockwise by `angle` radians around the origin.
    pub fn rotate(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Rotates counter-clockwise by `angle` radians around `pivot`.
    pub fn rotate_about(self, angle: f64, pivot: Vector2) -> Self {
        (self - pivot).rotate(angle) + pivot
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance(a: Vector2, b: Vector2) -> f64 {
        (a - b).magnitude()
    }

    pub fn distance_to(&self, other: &Vector2) -> f64 {
        Self::distance(*self, *other)
    }

    /// Angle of the vector measured from the positive x axis, in `(-π, π]`.
    pub fn arc(self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product).
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Vector2, t: f64) -> Self {
        self + (other - self).scale(t)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Vector2 {
        self.scale(rhs)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

/// A 3D vector, used as an RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn lerp(self, other: Vector3, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.z + (other.z - self.z) * t,
        )
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3}, {:.3})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn close(a: Vector2, b: Vector2) -> bool {
        (a - b).magnitude() < 1e-9
    }

    #[test]
    fn test_distance() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(Vector2::distance(a, b), 5.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let p = Vector2::new(1.0, 0.0);
        assert!(close(p.rotate(FRAC_PI_2), Vector2::new(0.0, 1.0)));
        assert!(close(p.rotate(PI), Vector2::new(-1.0, 0.0)));
    }

    #[test]
    fn test_rotate_about_pivot() {
        let p = Vector2::new(2.0, 1.0);
        let pivot = Vector2::new(1.0, 1.0);
        assert!(close(p.rotate_about(FRAC_PI_2, pivot), Vector2::new(1.0, 2.0)));
    }

    #[test]
    fn test_arc_wraps() {
        assert!((Vector2::new(-1.0, 0.0).arc() - PI).abs() < 1e-12);
        assert!((Vector2::new(0.0, -1.0).arc() + FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_endpoints() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(5.0, -2.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vector2::new(3.0, 0.0));

        let red = Vector3::new(1.0, 0.0, 0.0);
        let blue = Vector3::new(0.0, 0.0, 1.0);
        assert_eq!(red.lerp(blue, 0.5), Vector3::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_operations_are_pure() {
        let p = Vector2::new(1.0, 1.0);
        let _ = p.scale(3.0);
        let _ = p.rotate(1.0);
        assert_eq!(p, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Vector2::new(1.0, 2.0).is_finite());
        assert!(!Vector2::new(f64::NAN, 2.0).is_finite());
        assert!(!Vector3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
