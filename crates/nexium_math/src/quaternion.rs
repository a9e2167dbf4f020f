//! Quaternion for 3D rotations
//!
//! Unit length is the caller's job: nothing renormalizes implicitly except
//! `lerp`/`slerp`. A non-unit quaternion is still a valid value, it just does
//! not describe a pure rotation.

use core::ops::{Add, Mul, MulAssign, Neg};

use crate::matrix::{Mat3, Mat4};
use crate::vector::{Vec3, Vec4};

/// Quaternion representing a 3D rotation
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Right/up/forward basis looking along `direction`
///
/// When `direction` is parallel to `up` the up hint is replaced by world +Y,
/// or world +Z if the direction itself is (nearly) vertical.
pub(crate) fn look_basis(direction: Vec3, up: Vec3) -> (Vec3, Vec3, Vec3) {
    let forward = direction.normalize();
    let mut right = forward.cross(up);

    if right.length_squared() < 1e-8 {
        let fallback = if forward.y.abs() >= 0.999 { Vec3::Z } else { Vec3::Y };
        log::trace!(
            "look direction {:?} is parallel to up {:?}, falling back to {:?}",
            forward, up, fallback
        );
        right = forward.cross(fallback);
    }

    let right = right.normalize();
    (right, right.cross(forward), forward)
}

impl Quat {
    /// All components zero. Not a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// Identity quaternion (no rotation)
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn from_vec4(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }

    /// Create from axis and angle (radians). The axis is normalized here.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        let axis = axis.normalize();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, cos)
    }

    #[inline]
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(sin, 0.0, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, sin, 0.0, cos)
    }

    #[inline]
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, 0.0, sin, cos)
    }

    /// Create from Euler angles in radians, `euler = (pitch, yaw, roll)`
    ///
    /// Rotation about X is pitch, about Y is yaw, about Z is roll. Applied to a
    /// vector the order is roll, then pitch, then yaw (`q = yaw * pitch * roll`),
    /// which keeps the horizon level for camera style yaw/pitch input.
    pub fn from_euler(euler: Vec3) -> Self {
        let (sx, cx) = (euler.x * 0.5).sin_cos();
        let (sy, cy) = (euler.y * 0.5).sin_cos();
        let (sz, cz) = (euler.z * 0.5).sin_cos();

        Self::new(
            cy * sx * cz + sy * cx * sz,
            sy * cx * cz - cy * sx * sz,
            cy * cx * sz - sy * sx * cz,
            cy * cx * cz + sy * sx * sz,
        )
    }

    /// Inverse of [`Quat::from_euler`], returns `(pitch, yaw, roll)`
    ///
    /// Pitch is clamped to `±PI/2` at gimbal lock.
    pub fn to_euler(self) -> Vec3 {
        Vec3::new(self.pitch(), self.yaw(), self.roll())
    }

    /// Rotation about X, in `[-PI/2, PI/2]`
    pub fn pitch(self) -> f32 {
        let sinp = 2.0 * (self.w * self.x - self.y * self.z);
        if sinp.abs() >= 1.0 {
            (core::f32::consts::PI / 2.0).copysign(sinp)
        } else {
            sinp.asin()
        }
    }

    /// Rotation about Y
    pub fn yaw(self) -> f32 {
        let siny = 2.0 * (self.w * self.y + self.x * self.z);
        let cosy = 1.0 - 2.0 * (self.x * self.x + self.y * self.y);
        siny.atan2(cosy)
    }

    /// Rotation about Z
    pub fn roll(self) -> f32 {
        let sinr = 2.0 * (self.w * self.z + self.x * self.y);
        let cosr = 1.0 - 2.0 * (self.x * self.x + self.z * self.z);
        sinr.atan2(cosr)
    }

    /// Extract the rotation from an orthonormal 3x3 matrix
    pub fn from_mat3(m: &Mat3) -> Self {
        let m = &m.m;
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self::new(
                (m[1][2] - m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
                (m[0][1] - m[1][0]) / s,
                0.25 * s,
            )
        } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
            let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
            Self::new(
                0.25 * s,
                (m[0][1] + m[1][0]) / s,
                (m[2][0] + m[0][2]) / s,
                (m[1][2] - m[2][1]) / s,
            )
        } else if m[1][1] > m[2][2] {
            let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
            Self::new(
                (m[0][1] + m[1][0]) / s,
                0.25 * s,
                (m[1][2] + m[2][1]) / s,
                (m[2][0] - m[0][2]) / s,
            )
        } else {
            let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
            Self::new(
                (m[2][0] + m[0][2]) / s,
                (m[1][2] + m[2][1]) / s,
                0.25 * s,
                (m[0][1] - m[1][0]) / s,
            )
        }
    }

    /// Extract the rotation from the upper 3x3 block (no scale allowed)
    #[inline]
    pub fn from_mat4(m: &Mat4) -> Self {
        Self::from_mat3(&Mat3::from_mat4(m))
    }

    /// Rotation whose forward axis (`-Z`) points along `direction`
    pub fn look_to(direction: Vec3, up: Vec3) -> Self {
        let (right, up, forward) = look_basis(direction, up);
        Self::from_mat3(&Mat3::from_rows(right, up, -forward))
    }

    /// Rotation looking from `eye` toward `target`
    #[inline]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::look_to(target - eye, up)
    }

    /// Rotated `-Z`
    #[inline]
    pub fn forward(self) -> Vec3 {
        Vec3::FORWARD.rotate(self)
    }

    /// Rotated `+X`
    #[inline]
    pub fn right(self) -> Vec3 {
        Vec3::RIGHT.rotate(self)
    }

    /// Rotated `+Y`
    #[inline]
    pub fn up(self) -> Vec3 {
        Vec3::UP.rotate(self)
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit quaternion, or identity when the squared length is below `1e-4`
    #[inline]
    pub fn normalize(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq < 1e-4 {
            return Self::IDENTITY;
        }
        self * (1.0 / len_sq.sqrt())
    }

    /// Conjugate (inverse for unit quaternions)
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Inverse. Near-zero quaternions (squared length below `1e-4`) come back unchanged.
    #[inline]
    pub fn inverse(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq < 1e-4 {
            return self;
        }
        self.conjugate() * (1.0 / len_sq)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Multiply every component by `s`
    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s, self.w * s)
    }

    /// Normalized linear interpolation along the shorter arc
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let other = if self.dot(other) < 0.0 { -other } else { other };
        (self + (other + -self) * t).normalize()
    }

    /// Spherical linear interpolation along the shorter arc
    pub fn slerp(self, other: Self, t: f32) -> Self {
        let mut dot = self.dot(other);
        let mut other = other;

        if dot < 0.0 {
            other = -other;
            dot = -dot;
        }

        // Nearly parallel: sin(theta) is too small to divide by
        if dot > 0.9995 {
            return (self + (other + -self) * t).normalize();
        }

        let theta = dot.min(1.0).acos();
        let sin_theta = theta.sin();
        let s1 = ((1.0 - t) * theta).sin() / sin_theta;
        let s2 = (t * theta).sin() / sin_theta;

        self * s1 + other * s2
    }

    /// Rotate a vector, same as [`Vec3::rotate`]
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        v.rotate(self)
    }

    /// Convert to 3x3 rotation matrix (row-vector convention)
    pub fn to_mat3(self) -> Mat3 {
        let x2 = self.x + self.x;
        let y2 = self.y + self.y;
        let z2 = self.z + self.z;
        let xx = self.x * x2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yy = self.y * y2;
        let yz = self.y * z2;
        let zz = self.z * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Mat3::from_rows(
            Vec3::new(1.0 - (yy + zz), xy + wz, xz - wy),
            Vec3::new(xy - wz, 1.0 - (xx + zz), yz + wx),
            Vec3::new(xz + wy, yz - wx, 1.0 - (xx + yy)),
        )
    }

    #[inline]
    pub fn to_mat4(self) -> Mat4 {
        self.to_mat3().to_mat4()
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, self.w)
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Quat {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w) }
}

impl Neg for Quat {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z, -self.w) }
}

impl Mul<f32> for Quat {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { self.scale(rhs) }
}

/// Hamilton product: `(a * b)` rotates by `b` first, then by `a`
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quat {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
