//! Float vectors
//!
//! `Vec2`, `Vec3` and `Vec4` are plain `#[repr(C)]` structs so they can be
//! written straight into vertex and uniform buffers. Indexing follows field
//! order (`v[0] == v.x`).
//!
//! Matrix products treat the vector as a row vector on the left of the
//! matrix, so `v * m` is the only multiplication order that exists.

use core::ops::{Mul, MulAssign};

use crate::ivector::{IVec2, IVec3, IVec4};
use crate::matrix::{Mat3, Mat4};
use crate::quaternion::Quat;
use crate::transform::Transform;

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0);
    pub const DOWN: Self = Self::new(0.0, -1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y)
    }

    /// Every component within `epsilon` (strict)
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon && (self.y - other.y).abs() < epsilon
    }

    #[inline]
    pub fn cmpeq(self, other: Self) -> IVec2 {
        IVec2::new((self.x == other.x) as i32, (self.y == other.y) as i32)
    }

    #[inline]
    pub fn cmpgt(self, other: Self) -> IVec2 {
        IVec2::new((self.x > other.x) as i32, (self.y > other.y) as i32)
    }

    #[inline]
    pub fn offset(self, s: f32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        self * s
    }

    /// Fused `self * s + b`
    #[inline]
    pub fn mul_add(self, s: f32, b: Self) -> Self {
        Self::new(self.x.mul_add(s, b.x), self.y.mul_add(s, b.y))
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector, or zero when the length is exactly zero
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Self::ZERO }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Fused `(1 - t) * self + t * other`, `t` not clamped
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let w = 1.0 - t;
        Self::new(w.mul_add(self.x, t * other.x), w.mul_add(self.y, t * other.y))
    }

    /// Step toward `to` by at most `max_delta`
    pub fn move_toward(self, to: Self, max_delta: f32) -> Self {
        let delta = to - self;
        let dist_sq = delta.length_squared();
        if dist_sq <= max_delta * max_delta {
            return to;
        }
        delta.mul_add(max_delta / dist_sq.sqrt(), self)
    }

    /// Counter-clockwise angle from +X, in `(-PI, PI]`
    #[inline]
    pub fn angle_ccw(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn angle_cw(self) -> f32 {
        -self.y.atan2(self.x)
    }

    /// Counter-clockwise angle of the line from `self` to `other`
    #[inline]
    pub fn line_angle_ccw(self, other: Self) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    #[inline]
    pub fn line_angle_cw(self, other: Self) -> f32 {
        -(other.y - self.y).atan2(other.x - self.x)
    }

    /// Unit vector at `angle` radians counter-clockwise from +X
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, s)
    }

    /// Rotate counter-clockwise by `angle` radians
    #[inline]
    pub fn rotate(self, angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(self.x * c - self.y * s, self.x * s + self.y * c)
    }

    /// Normalized direction from `self` to `to`
    #[inline]
    pub fn direction(self, to: Self) -> Self {
        (to - self).normalize()
    }

    /// Reflect across `normal`, which must be unit length
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(normal))
    }

    /// Rotated 90 degrees counter-clockwise
    #[inline]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Transform as the point `(x, y, 1)` by a 2D affine matrix
    #[inline]
    pub fn transform_by_mat3(self, mat: &Mat3) -> Self {
        let m = &mat.m;
        Self::new(
            m[0][0].mul_add(self.x, m[1][0].mul_add(self.y, m[2][0])),
            m[0][1].mul_add(self.x, m[1][1].mul_add(self.y, m[2][1])),
        )
    }

    /// Transform as the point `(x, y, 0, 1)`, dropping z and w
    #[inline]
    pub fn transform_by_mat4(self, mat: &Mat4) -> Self {
        let m = &mat.m;
        Self::new(
            m[0][0].mul_add(self.x, m[1][0].mul_add(self.y, m[3][0])),
            m[0][1].mul_add(self.x, m[1][1].mul_add(self.y, m[3][1])),
        )
    }

    #[inline]
    pub fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

/// 3D vector - the workhorse of 3D graphics
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    pub const NEG_X: Self = Self::new(-1.0, 0.0, 0.0);
    pub const NEG_Y: Self = Self::new(0.0, -1.0, 0.0);
    pub const NEG_Z: Self = Self::new(0.0, 0.0, -1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }

    #[inline]
    pub fn cmpeq(self, other: Self) -> IVec3 {
        IVec3::new(
            (self.x == other.x) as i32,
            (self.y == other.y) as i32,
            (self.z == other.z) as i32,
        )
    }

    #[inline]
    pub fn cmpgt(self, other: Self) -> IVec3 {
        IVec3::new(
            (self.x > other.x) as i32,
            (self.y > other.y) as i32,
            (self.z > other.z) as i32,
        )
    }

    #[inline]
    pub fn offset(self, s: f32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        self * s
    }

    /// Fused `self * s + b`
    #[inline]
    pub fn mul_add(self, s: f32, b: Self) -> Self {
        Self::new(
            self.x.mul_add(s, b.x),
            self.y.mul_add(s, b.y),
            self.z.mul_add(s, b.z),
        )
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector, or zero when the length is exactly zero
    #[inline]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len > 0.0 { self * (1.0 / len) } else { Self::ZERO }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    /// Fused `(1 - t) * self + t * other`, `t` not clamped
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let w = 1.0 - t;
        Self::new(
            w.mul_add(self.x, t * other.x),
            w.mul_add(self.y, t * other.y),
            w.mul_add(self.z, t * other.z),
        )
    }

    /// Step toward `to` by at most `max_delta`
    pub fn move_toward(self, to: Self, max_delta: f32) -> Self {
        let delta = to - self;
        let dist_sq = delta.length_squared();
        if dist_sq <= max_delta * max_delta {
            return to;
        }
        delta.mul_add(max_delta / dist_sq.sqrt(), self)
    }

    /// Rotate by a unit quaternion
    ///
    /// Every other 3D rotation helper ends up here.
    #[inline]
    pub fn rotate(self, q: Quat) -> Self {
        let qv = Self::new(q.x, q.y, q.z);
        let t = qv.cross(self) * 2.0;
        self + t * q.w + qv.cross(t)
    }

    /// Rotate by Euler angles in radians, see [`Quat::from_euler`] for the order
    #[inline]
    pub fn rotate_euler(self, yaw: f32, pitch: f32, roll: f32) -> Self {
        self.rotate(Quat::from_euler(Self::new(pitch, yaw, roll)))
    }

    /// Rotate around `axis` (normalized here) by `angle` radians
    #[inline]
    pub fn rotate_axis_angle(self, axis: Self, angle: f32) -> Self {
        self.rotate(Quat::from_axis_angle(axis, angle))
    }

    /// Normalized direction from `self` to `to`
    #[inline]
    pub fn direction(self, to: Self) -> Self {
        (to - self).normalize()
    }

    /// Reflect across `normal`, which must be unit length
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        normal.mul_add(-2.0 * self.dot(normal), self)
    }

    /// Component of `self` along `onto`
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        onto * (self.dot(onto) / onto.length_squared())
    }

    /// Component of `self` perpendicular to `onto`
    #[inline]
    pub fn reject(self, onto: Self) -> Self {
        onto.mul_add(-(self.dot(onto) / onto.length_squared()), self)
    }

    /// Apply a TRS transform: scale, then rotate, then translate
    #[inline]
    pub fn transform(self, trs: &Transform) -> Self {
        trs.transform_point(self)
    }

    /// Multiply by the 3x3 matrix (rotation and scale only)
    #[inline]
    pub fn transform_by_mat3(self, mat: &Mat3) -> Self {
        let m = &mat.m;
        Self::new(
            m[0][0].mul_add(self.x, m[1][0].mul_add(self.y, m[2][0] * self.z)),
            m[0][1].mul_add(self.x, m[1][1].mul_add(self.y, m[2][1] * self.z)),
            m[0][2].mul_add(self.x, m[1][2].mul_add(self.y, m[2][2] * self.z)),
        )
    }

    /// Transform as the point `(x, y, z, 1)`, no perspective divide
    #[inline]
    pub fn transform_by_mat4(self, mat: &Mat4) -> Self {
        let m = &mat.m;
        Self::new(
            m[0][0].mul_add(self.x, m[1][0].mul_add(self.y, m[2][0].mul_add(self.z, m[3][0]))),
            m[0][1].mul_add(self.x, m[1][1].mul_add(self.y, m[2][1].mul_add(self.z, m[3][1]))),
            m[0][2].mul_add(self.x, m[1][2].mul_add(self.y, m[2][2].mul_add(self.z, m[3][2]))),
        )
    }

    #[inline]
    pub fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }

    #[inline]
    pub fn truncate(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// 4D vector - homogeneous coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Origin point `(0, 0, 0, 1)`
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    #[inline]
    pub const fn from_array(a: [f32; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
            self.w.min(other.w),
        )
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
            self.w.max(other.w),
        )
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    #[inline]
    pub fn recip(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z, 1.0 / self.w)
    }

    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
            && (self.w - other.w).abs() < epsilon
    }

    #[inline]
    pub fn cmpeq(self, other: Self) -> IVec4 {
        IVec4::new(
            (self.x == other.x) as i32,
            (self.y == other.y) as i32,
            (self.z == other.z) as i32,
            (self.w == other.w) as i32,
        )
    }

    #[inline]
    pub fn cmpgt(self, other: Self) -> IVec4 {
        IVec4::new(
            (self.x > other.x) as i32,
            (self.y > other.y) as i32,
            (self.z > other.z) as i32,
            (self.w > other.w) as i32,
        )
    }

    #[inline]
    pub fn offset(self, s: f32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        self * s
    }

    #[inline]
    pub fn mul_add(self, s: f32, b: Self) -> Self {
        Self::new(
            self.x.mul_add(s, b.x),
            self.y.mul_add(s, b.y),
            self.z.mul_add(s, b.z),
            self.w.mul_add(s, b.w),
        )
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector, or zero when the squared length is at most `1e-8`
    #[inline]
    pub fn normalize(self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > 1e-8 { self * (1.0 / len_sq.sqrt()) } else { Self::ZERO }
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (other - self).length_squared()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let w = 1.0 - t;
        Self::new(
            w.mul_add(self.x, t * other.x),
            w.mul_add(self.y, t * other.y),
            w.mul_add(self.z, t * other.z),
            w.mul_add(self.w, t * other.w),
        )
    }

    pub fn move_toward(self, to: Self, max_delta: f32) -> Self {
        let delta = to - self;
        let dist_sq = delta.length_squared();
        if dist_sq <= max_delta * max_delta {
            return to;
        }
        delta.mul_add(max_delta / dist_sq.sqrt(), self)
    }

    /// Full homogeneous product `v * M`
    #[inline]
    pub fn transform_by_mat4(self, mat: &Mat4) -> Self {
        let m = &mat.m;
        Self::new(
            m[0][0].mul_add(self.x, m[1][0].mul_add(self.y, m[2][0].mul_add(self.z, m[3][0] * self.w))),
            m[0][1].mul_add(self.x, m[1][1].mul_add(self.y, m[2][1].mul_add(self.z, m[3][1] * self.w))),
            m[0][2].mul_add(self.x, m[1][2].mul_add(self.y, m[2][2].mul_add(self.z, m[3][2] * self.w))),
            m[0][3].mul_add(self.x, m[1][3].mul_add(self.y, m[2][3].mul_add(self.z, m[3][3] * self.w))),
        )
    }

    #[inline]
    pub fn truncate(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn xyz(self) -> Vec3 {
        self.truncate()
    }
}

impl_vec_ops!(Vec2, f32, 2, 0 => x, 1 => y);
impl_vec_ops!(Vec3, f32, 3, 0 => x, 1 => y, 2 => z);
impl_vec_ops!(Vec4, f32, 4, 0 => x, 1 => y, 2 => z, 3 => w);

// Row-vector products: v * M
impl Mul<Mat3> for Vec2 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Mat3) -> Vec2 { self.transform_by_mat3(&rhs) }
}
impl Mul<Mat4> for Vec2 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Mat4) -> Vec2 { self.transform_by_mat4(&rhs) }
}
impl Mul<Mat3> for Vec3 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Mat3) -> Vec3 { self.transform_by_mat3(&rhs) }
}
impl Mul<Mat4> for Vec3 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Mat4) -> Vec3 { self.transform_by_mat4(&rhs) }
}
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;
    #[inline] fn mul(self, rhs: Mat4) -> Vec4 { self.transform_by_mat4(&rhs) }
}
impl Mul<Quat> for Vec3 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Quat) -> Vec3 { self.rotate(rhs) }
}
impl Mul<Transform> for Vec3 {
    type Output = Vec3;
    #[inline] fn mul(self, rhs: Transform) -> Vec3 { rhs.transform_point(self) }
}

impl MulAssign<Mat3> for Vec2 {
    #[inline] fn mul_assign(&mut self, rhs: Mat3) { *self = *self * rhs; }
}
impl MulAssign<Mat4> for Vec2 {
    #[inline] fn mul_assign(&mut self, rhs: Mat4) { *self = *self * rhs; }
}
impl MulAssign<Mat3> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: Mat3) { *self = *self * rhs; }
}
impl MulAssign<Mat4> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: Mat4) { *self = *self * rhs; }
}
impl MulAssign<Mat4> for Vec4 {
    #[inline] fn mul_assign(&mut self, rhs: Mat4) { *self = *self * rhs; }
}
impl MulAssign<Quat> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: Quat) { *self = *self * rhs; }
}
impl MulAssign<Transform> for Vec3 {
    #[inline] fn mul_assign(&mut self, rhs: Transform) { *self = *self * rhs; }
}
