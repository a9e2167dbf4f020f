//! Translation / rotation / scale transform

use core::ops::{Mul, MulAssign};

use crate::matrix::{Mat3, Mat4};
use crate::quaternion::Quat;
use crate::vector::{Vec3, Vec4};

/// TRS transform
///
/// Applied to a point it scales, then rotates, then translates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    /// Identity transform
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    #[inline]
    pub const fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self { translation, rotation, scale }
    }

    #[inline]
    pub const fn from_translation(translation: Vec3) -> Self {
        Self { translation, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn from_rotation(rotation: Quat) -> Self {
        Self { rotation, ..Self::IDENTITY }
    }

    #[inline]
    pub const fn from_scale(scale: Vec3) -> Self {
        Self { scale, ..Self::IDENTITY }
    }

    /// Set translation (builder pattern)
    #[inline]
    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    /// Set rotation (builder pattern)
    #[inline]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set scale (builder pattern)
    #[inline]
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix, equal to `scale * rotation * translation` in row-vector order
    pub fn to_mat4(&self) -> Mat4 {
        let r = self.rotation.to_mat3();
        let s = self.scale;
        let t = self.translation;

        Mat4::from_rows(
            (r.row(0) * s.x).extend(0.0),
            (r.row(1) * s.y).extend(0.0),
            (r.row(2) * s.z).extend(0.0),
            Vec4::new(t.x, t.y, t.z, 1.0),
        )
    }

    /// Normal matrix: rotation rows divided by scale
    pub fn to_normal_mat3(&self) -> Mat3 {
        let r = self.rotation.to_mat3();
        let s = self.scale;
        Mat3::from_rows(r.row(0) / s.x, r.row(1) / s.y, r.row(2) / s.z)
    }

    /// Compose `parent` with `child`: the result applies `child` first, then `parent`
    ///
    /// Exact for uniform parent scale. With non-uniform parent scale and a
    /// rotated child the true result contains shear, which a TRS cannot hold.
    pub fn combine(parent: &Self, child: &Self) -> Self {
        Self {
            translation: parent.rotation.rotate(child.translation * parent.scale) + parent.translation,
            rotation: parent.rotation * child.rotation,
            scale: parent.scale * child.scale,
        }
    }

    /// Interpolate components independently: lerp translation and scale, slerp rotation
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translation: self.translation.lerp(other.translation, t),
            rotation: self.rotation.slerp(other.rotation, t),
            scale: self.scale.lerp(other.scale, t),
        }
    }

    /// Scale, rotate, then translate a point
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        (point * self.scale).rotate(self.rotation) + self.translation
    }

    /// Rotate a direction (no scale, no translation)
    #[inline]
    pub fn transform_direction(&self, direction: Vec3) -> Vec3 {
        direction.rotate(self.rotation)
    }

    /// Local `-Z` in world space
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation.forward()
    }

    /// Local `+X` in world space
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation.right()
    }

    /// Local `+Y` in world space
    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation.up()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `parent * child`, same as [`Transform::combine`]
impl Mul for Transform {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::combine(&self, &rhs)
    }
}

impl MulAssign for Transform {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
