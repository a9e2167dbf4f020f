//! Integer vectors
//!
//! Grid coordinates, texel sizes, tile indices. Arithmetic wraps the same way
//! `i32` does in the current build profile and integer division by zero
//! panics.

use crate::vector::{Vec2, Vec3, Vec4};

/// 2D integer vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct IVec2 {
    pub x: i32,
    pub y: i32,
}

impl IVec2 {
    pub const ZERO: Self = Self::new(0, 0);
    pub const ONE: Self = Self::new(1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Per-component clamp. Does not check `min <= max`.
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Float reciprocal `1 / v` per component (zero yields infinity)
    #[inline]
    pub fn recip(self) -> Vec2 {
        Vec2::new(1.0 / self.x as f32, 1.0 / self.y as f32)
    }

    /// True if any component is non-zero
    #[inline]
    pub fn any(self) -> bool {
        self.x != 0 || self.y != 0
    }

    /// True if every component is non-zero
    #[inline]
    pub fn all(self) -> bool {
        self.x != 0 && self.y != 0
    }

    /// 1 where components are equal, 0 elsewhere
    #[inline]
    pub fn cmpeq(self, other: Self) -> Self {
        Self::new((self.x == other.x) as i32, (self.y == other.y) as i32)
    }

    /// 1 where `self > other`, 0 elsewhere
    #[inline]
    pub fn cmpgt(self, other: Self) -> Self {
        Self::new((self.x > other.x) as i32, (self.y > other.y) as i32)
    }

    /// Add `s` to every component
    #[inline]
    pub fn offset(self, s: i32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: i32) -> Self {
        self * s
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    #[inline]
    pub fn to_array(self) -> [i32; 2] {
        [self.x, self.y]
    }
}

/// 3D integer vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct IVec3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl IVec3 {
    pub const ZERO: Self = Self::new(0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
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
    pub fn recip(self) -> Vec3 {
        Vec3::new(1.0 / self.x as f32, 1.0 / self.y as f32, 1.0 / self.z as f32)
    }

    #[inline]
    pub fn any(self) -> bool {
        self.x != 0 || self.y != 0 || self.z != 0
    }

    #[inline]
    pub fn all(self) -> bool {
        self.x != 0 && self.y != 0 && self.z != 0
    }

    #[inline]
    pub fn cmpeq(self, other: Self) -> Self {
        Self::new(
            (self.x == other.x) as i32,
            (self.y == other.y) as i32,
            (self.z == other.z) as i32,
        )
    }

    #[inline]
    pub fn cmpgt(self, other: Self) -> Self {
        Self::new(
            (self.x > other.x) as i32,
            (self.y > other.y) as i32,
            (self.z > other.z) as i32,
        )
    }

    #[inline]
    pub fn offset(self, s: i32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: i32) -> Self {
        self * s
    }

    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }

    #[inline]
    pub fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

/// 4D integer vector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct IVec4 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub w: i32,
}

impl IVec4 {
    pub const ZERO: Self = Self::new(0, 0, 0, 0);
    pub const ONE: Self = Self::new(1, 1, 1, 1);

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn splat(v: i32) -> Self {
        Self::new(v, v, v, v)
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
    pub fn recip(self) -> Vec4 {
        Vec4::new(
            1.0 / self.x as f32,
            1.0 / self.y as f32,
            1.0 / self.z as f32,
            1.0 / self.w as f32,
        )
    }

    #[inline]
    pub fn any(self) -> bool {
        self.x != 0 || self.y != 0 || self.z != 0 || self.w != 0
    }

    #[inline]
    pub fn all(self) -> bool {
        self.x != 0 && self.y != 0 && self.z != 0 && self.w != 0
    }

    #[inline]
    pub fn cmpeq(self, other: Self) -> Self {
        Self::new(
            (self.x == other.x) as i32,
            (self.y == other.y) as i32,
            (self.z == other.z) as i32,
            (self.w == other.w) as i32,
        )
    }

    #[inline]
    pub fn cmpgt(self, other: Self) -> Self {
        Self::new(
            (self.x > other.x) as i32,
            (self.y > other.y) as i32,
            (self.z > other.z) as i32,
            (self.w > other.w) as i32,
        )
    }

    #[inline]
    pub fn offset(self, s: i32) -> Self {
        self + s
    }

    #[inline]
    pub fn scale(self, s: i32) -> Self {
        self * s
    }

    #[inline]
    pub fn as_vec4(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.z as f32, self.w as f32)
    }

    #[inline]
    pub fn to_array(self) -> [i32; 4] {
        [self.x, self.y, self.z, self.w]
    }
}

impl_vec_ops!(IVec2, i32, 2, 0 => x, 1 => y);
impl_vec_ops!(IVec3, i32, 3, 0 => x, 1 => y, 2 => z);
impl_vec_ops!(IVec4, i32, 4, 0 => x, 1 => y, 2 => z, 3 => w);
