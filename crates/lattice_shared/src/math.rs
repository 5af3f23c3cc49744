//! Mathematical types for 2D simulation code.
//!
//! These are the canonical value representations used throughout the
//! workspace. All of them are plain-old-data and safe to memcpy.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - position, velocity, direction
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Unit X vector
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Converts to array
    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Creates from array
    #[must_use]
    pub const fn from_array(arr: [f32; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Length squared (avoids sqrt)
    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Distance to another point
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Distance squared (avoids sqrt)
    #[must_use]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unit vector in the same direction, or zero for the zero vector.
    #[must_use]
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len > 0.0 {
            self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    /// Clockwise perpendicular: the right vector for an up vector.
    #[must_use]
    pub const fn perp(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Rotates counter-clockwise by `radians`.
    #[must_use]
    pub fn rotated(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// 2D rotation basis: a right vector and an up vector.
///
/// Stays orthonormal under `rotate` as long as it was constructed from
/// an orthonormal basis (the constructors guarantee this for unit
/// inputs).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Mat2 {
    /// Right basis vector
    pub rvec: Vec2,
    /// Up basis vector
    pub uvec: Vec2,
}

impl Mat2 {
    /// Creates a basis from explicit right and up vectors
    #[must_use]
    pub const fn new(rvec: Vec2, uvec: Vec2) -> Self {
        Self { rvec, uvec }
    }

    /// Identity basis
    pub const IDENTITY: Self = Self::new(Vec2::X, Vec2::Y);

    /// Basis rotated counter-clockwise by `radians` from identity.
    #[must_use]
    pub fn from_angle(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(Vec2::new(cos, sin), Vec2::new(-sin, cos))
    }

    /// Basis whose up vector is `up`; the right vector is derived as
    /// the clockwise perpendicular.
    #[must_use]
    pub const fn from_up(up: Vec2) -> Self {
        Self::new(up.perp(), up)
    }

    /// Rotates both basis vectors counter-clockwise by `radians`.
    pub fn rotate(&mut self, radians: f32) {
        self.rvec = self.rvec.rotated(radians);
        self.uvec = self.uvec.rotated(radians);
    }

    /// Transforms a vector from this basis into parent space.
    #[must_use]
    pub fn transform(self, v: Vec2) -> Vec2 {
        self.rvec * v.x + self.uvec * v.y
    }
}

impl Default for Mat2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Axis-aligned bounding box.
///
/// `min` must be component-wise ≤ `max`; the constructors taking a
/// center and half extents guarantee this for non-negative extents.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec2,
    /// Maximum corner
    pub max: Vec2,
}

impl Aabb {
    /// Creates a box from explicit corners
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Creates a box from a center point and half extents
    #[must_use]
    pub fn from_center_half_extents(center: Vec2, half: Vec2) -> Self {
        Self::new(center - half, center + half)
    }

    /// Center point of the box
    #[must_use]
    pub fn center(self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Half extents of the box
    #[must_use]
    pub fn half_extents(self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Overlap test. Boxes that merely touch along an edge collide.
    #[must_use]
    pub fn collides(self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// True if `point` lies inside or on the boundary of the box.
    #[must_use]
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 5.0);

        let sum = a + b;
        assert_eq!(sum.x, 5.0);
        assert_eq!(sum.y, 7.0);

        let dot = a.dot(b);
        assert_eq!(dot, 14.0); // 1*4 + 2*5
    }

    #[test]
    fn test_vec2_rotation() {
        let up = Vec2::Y;
        let rotated = up.rotated(std::f32::consts::FRAC_PI_4);
        let inv_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(rotated, Vec2::new(-inv_sqrt2, inv_sqrt2)));
    }

    #[test]
    fn test_vec2_bytemuck() {
        let v = Vec2::new(1.0, 2.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 8); // 2 * 4 bytes
    }

    #[test]
    fn test_mat2_from_up() {
        let m = Mat2::from_up(Vec2::Y);
        assert!(approx_eq(m.rvec, Vec2::X));
        assert!(approx_eq(m.uvec, Vec2::Y));
    }

    #[test]
    fn test_mat2_rotate_45_degrees() {
        let mut m = Mat2::IDENTITY;
        m.rotate(std::f32::consts::FRAC_PI_4);

        let inv_sqrt2 = std::f32::consts::FRAC_1_SQRT_2;
        assert!(approx_eq(m.rvec, Vec2::new(inv_sqrt2, inv_sqrt2)));
        assert!(approx_eq(m.uvec, Vec2::new(-inv_sqrt2, inv_sqrt2)));
    }

    #[test]
    fn test_mat2_transform_identity() {
        let v = Vec2::new(3.0, -2.0);
        assert!(approx_eq(Mat2::IDENTITY.transform(v), v));
    }

    #[test]
    fn test_aabb_collide_and_miss() {
        // Radius-5 boxes at the origin and (2.5, 2.5) overlap.
        let a = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(5.0, 5.0));
        let b = Aabb::from_center_half_extents(Vec2::new(2.5, 2.5), Vec2::new(5.0, 5.0));
        assert!(a.collides(b));
        assert!(b.collides(a));

        // Radius-1 boxes at the same centers miss.
        let c = Aabb::from_center_half_extents(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let d = Aabb::from_center_half_extents(Vec2::new(2.5, 2.5), Vec2::new(1.0, 1.0));
        assert!(!c.collides(d));
        assert!(!d.collides(c));
    }

    #[test]
    fn test_aabb_touching_edges_collide() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Aabb::new(Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0));
        assert!(a.collides(b));
    }

    #[test]
    fn test_aabb_contains() {
        let b = Aabb::new(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0));
        assert!(b.contains(Vec2::ZERO));
        assert!(b.contains(Vec2::new(1.0, 1.0)));
        assert!(!b.contains(Vec2::new(1.1, 0.0)));
    }
}
