//! Matrix types for transformations
//!
//! Storage is row-major, `m[row][col]`, and vectors multiply from the left
//! (`v' = v * M`). Translation sits in the bottom row and `A * B` applies `A`
//! first. Uploading to a column-vector shader as-is gives the right result
//! because the memory layout equals the transposed column-major matrix.

use core::ops::{Add, Index, IndexMut, Mul, MulAssign, Sub};

use crate::quaternion::{look_basis, Quat};
use crate::transform::Transform;
use crate::vector::{Vec2, Vec3, Vec4};

/// 3x3 matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat3 {
    pub m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub const ZERO: Self = Self { m: [[0.0; 3]; 3] };

    #[inline]
    pub const fn from_rows(r0: Vec3, r1: Vec3, r2: Vec3) -> Self {
        Self {
            m: [[r0.x, r0.y, r0.z], [r1.x, r1.y, r1.z], [r2.x, r2.y, r2.z]],
        }
    }

    /// Upper-left 3x3 block
    #[inline]
    pub fn from_mat4(mat: &Mat4) -> Self {
        let m = &mat.m;
        Self {
            m: [
                [m[0][0], m[0][1], m[0][2]],
                [m[1][0], m[1][1], m[1][2]],
                [m[2][0], m[2][1], m[2][2]],
            ],
        }
    }

    /// Embed in a 4x4 matrix with no translation
    #[inline]
    pub fn to_mat4(&self) -> Mat4 {
        let m = &self.m;
        Mat4 {
            m: [
                [m[0][0], m[0][1], m[0][2], 0.0],
                [m[1][0], m[1][1], m[1][2], 0.0],
                [m[2][0], m[2][1], m[2][2], 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    /// Exact comparison against [`Mat3::IDENTITY`]
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.m[i])
    }

    #[inline]
    pub fn col(&self, j: usize) -> Vec3 {
        Vec3::new(self.m[0][j], self.m[1][j], self.m[2][j])
    }

    /// 2D affine transform: scale, then rotate (CCW), then translate
    pub fn transform_2d(translation: Vec2, rotation: f32, scale: Vec2) -> Self {
        let (s, c) = rotation.sin_cos();
        Self::from_rows(
            Vec3::new(scale.x * c, scale.x * s, 0.0),
            Vec3::new(-scale.y * s, scale.y * c, 0.0),
            Vec3::new(translation.x, translation.y, 1.0),
        )
    }

    #[inline]
    pub fn translate_2d(translation: Vec2) -> Self {
        Self::from_rows(Vec3::X, Vec3::Y, Vec3::new(translation.x, translation.y, 1.0))
    }

    /// Counter-clockwise rotation in the XY plane
    #[inline]
    pub fn rotate_2d(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows(Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::Z)
    }

    #[inline]
    pub fn scale_2d(scale: Vec2) -> Self {
        Self::from_rows(
            Vec3::new(scale.x, 0.0, 0.0),
            Vec3::new(0.0, scale.y, 0.0),
            Vec3::Z,
        )
    }

    pub fn rotate_x(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows(Vec3::X, Vec3::new(0.0, c, s), Vec3::new(0.0, -s, c))
    }

    pub fn rotate_y(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows(Vec3::new(c, 0.0, -s), Vec3::Y, Vec3::new(s, 0.0, c))
    }

    pub fn rotate_z(radians: f32) -> Self {
        let (s, c) = radians.sin_cos();
        Self::from_rows(Vec3::new(c, s, 0.0), Vec3::new(-s, c, 0.0), Vec3::Z)
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula). The axis is normalized here.
    pub fn rotate(axis: Vec3, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        let axis = axis.normalize();
        let t = 1.0 - cos;
        let (x, y, z) = (axis.x, axis.y, axis.z);

        Self::from_rows(
            Vec3::new(t * x * x + cos, t * x * y + sin * z, t * x * z - sin * y),
            Vec3::new(t * x * y - sin * z, t * y * y + cos, t * y * z + sin * x),
            Vec3::new(t * x * z + sin * y, t * y * z - sin * x, t * z * z + cos),
        )
    }

    /// Euler rotation applied X first, then Y, then Z
    pub fn rotate_xyz(radians: Vec3) -> Self {
        Self::rotate_x(radians.x) * Self::rotate_y(radians.y) * Self::rotate_z(radians.z)
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let m = &self.m;
        Self {
            m: [
                [m[0][0], m[1][0], m[2][0]],
                [m[0][1], m[1][1], m[2][1]],
                [m[0][2], m[1][2], m[2][2]],
            ],
        }
    }

    #[inline]
    pub fn determinant(&self) -> f32 {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.m[0][0] + self.m[1][1] + self.m[2][2]
    }

    /// Inverse via the adjugate. Singular input yields non-finite values.
    pub fn inverse(&self) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;

        let c00 = e * i - f * h;
        let c01 = f * g - d * i;
        let c02 = d * h - e * g;
        let inv_det = 1.0 / (a * c00 + b * c01 + c * c02);

        Self {
            m: [
                [c00 * inv_det, (c * h - b * i) * inv_det, (b * f - c * e) * inv_det],
                [c01 * inv_det, (a * i - c * g) * inv_det, (c * d - a * f) * inv_det],
                [c02 * inv_det, (b * g - a * h) * inv_det, (a * e - b * d) * inv_det],
            ],
        }
    }

    /// Normal matrix of a model matrix: inverse-transpose of its upper 3x3 block
    #[inline]
    pub fn normal(mat: &Mat4) -> Self {
        Self::from_mat4(mat).inverse().transpose()
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 9] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2],
            m[1][0], m[1][1], m[1][2],
            m[2][0], m[2][1], m[2][2],
        ]
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for (row, rhs_row) in out.m.iter_mut().zip(rhs.m.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a += *b;
            }
        }
        out
    }
}

impl Sub for Mat3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for (row, rhs_row) in out.m.iter_mut().zip(rhs.m.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a -= *b;
            }
        }
        out
    }
}

/// `self` applied first, then `rhs`
impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..3 {
            for j in 0..3 {
                out.m[i][j] = self.m[i][0] * rhs.m[0][j]
                    + self.m[i][1] * rhs.m[1][j]
                    + self.m[i][2] * rhs.m[2][j];
            }
        }
        out
    }
}

impl MulAssign for Mat3 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Index<(usize, usize)> for Mat3 {
    type Output = f32;
    #[inline] fn index(&self, (row, col): (usize, usize)) -> &f32 { &self.m[row][col] }
}

impl IndexMut<(usize, usize)> for Mat3 {
    #[inline] fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 { &mut self.m[row][col] }
}

/// 4x4 matrix (row-major)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Mat4 {
    pub m: [[f32; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    #[inline]
    pub const fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self {
            m: [
                [r0.x, r0.y, r0.z, r0.w],
                [r1.x, r1.y, r1.z, r1.w],
                [r2.x, r2.y, r2.z, r2.w],
                [r3.x, r3.y, r3.z, r3.w],
            ],
        }
    }

    /// Exact comparison against [`Mat4::IDENTITY`]
    #[inline]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::from_array(self.m[i])
    }

    #[inline]
    pub fn col(&self, j: usize) -> Vec4 {
        Vec4::new(self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j])
    }

    /// Translation stored in the bottom row
    #[inline]
    pub fn get_translation(&self) -> Vec3 {
        Vec3::new(self.m[3][0], self.m[3][1], self.m[3][2])
    }

    #[inline]
    pub fn translate(v: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[3] = [v.x, v.y, v.z, 1.0];
        out
    }

    #[inline]
    pub fn scale(scale: Vec3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[0][0] = scale.x;
        out.m[1][1] = scale.y;
        out.m[2][2] = scale.z;
        out
    }

    /// Rotation about an arbitrary axis (Rodrigues' formula)
    #[inline]
    pub fn rotate(axis: Vec3, radians: f32) -> Self {
        Mat3::rotate(axis, radians).to_mat4()
    }

    #[inline]
    pub fn rotate_x(radians: f32) -> Self {
        Mat3::rotate_x(radians).to_mat4()
    }

    #[inline]
    pub fn rotate_y(radians: f32) -> Self {
        Mat3::rotate_y(radians).to_mat4()
    }

    #[inline]
    pub fn rotate_z(radians: f32) -> Self {
        Mat3::rotate_z(radians).to_mat4()
    }

    /// Euler rotation applied X first, then Y, then Z
    #[inline]
    pub fn rotate_xyz(radians: Vec3) -> Self {
        Mat3::rotate_xyz(radians).to_mat4()
    }

    /// Euler rotation applied Z first, then Y, then X
    pub fn rotate_zyx(radians: Vec3) -> Self {
        (Mat3::rotate_z(radians.z) * Mat3::rotate_y(radians.y) * Mat3::rotate_x(radians.x)).to_mat4()
    }

    /// Split into translation, rotation and scale
    ///
    /// Scale is the length of each basis row. A reflection (negative
    /// determinant) is reported as a negative X scale; the rotation stays a
    /// proper rotation. Shear is not representable and is folded into the
    /// rotation.
    pub fn decompose(&self) -> Transform {
        let translation = self.get_translation();
        let rows = [self.row(0).xyz(), self.row(1).xyz(), self.row(2).xyz()];
        let mut scale = Vec3::new(rows[0].length(), rows[1].length(), rows[2].length());

        if Mat3::from_rows(rows[0], rows[1], rows[2]).determinant() < 0.0 {
            log::trace!("decomposing a reflection, assigning it to the X scale");
            scale.x = -scale.x;
        }

        let inv = |s: f32| if s != 0.0 { 1.0 / s } else { 0.0 };
        let basis = Mat3::from_rows(
            rows[0] * inv(scale.x),
            rows[1] * inv(scale.y),
            rows[2] * inv(scale.z),
        );

        Transform::new(translation, Quat::from_mat3(&basis).normalize(), scale)
    }

    /// Perspective projection from an off-center view volume (OpenGL clip space, depth `[-1, 1]`)
    pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_rows(
            Vec4::new(2.0 * near / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * near / tmb, 0.0, 0.0),
            Vec4::new((right + left) / rml, (top + bottom) / tmb, -(far + near) / fmn, -1.0),
            Vec4::new(0.0, 0.0, -2.0 * far * near / fmn, 0.0),
        )
    }

    /// Symmetric perspective projection, `fov_y` in radians
    pub fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (fov_y / 2.0).tan();
        let nf = 1.0 / (near - far);

        Self::from_rows(
            Vec4::new(f / aspect, 0.0, 0.0, 0.0),
            Vec4::new(0.0, f, 0.0, 0.0),
            Vec4::new(0.0, 0.0, (far + near) * nf, -1.0),
            Vec4::new(0.0, 0.0, 2.0 * far * near * nf, 0.0),
        )
    }

    /// Orthographic projection (OpenGL style, depth `[-1, 1]`)
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let rml = right - left;
        let tmb = top - bottom;
        let fmn = far - near;

        Self::from_rows(
            Vec4::new(2.0 / rml, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 / tmb, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -2.0 / fmn, 0.0),
            Vec4::new(-(right + left) / rml, -(top + bottom) / tmb, -(far + near) / fmn, 1.0),
        )
    }

    /// View matrix for a camera at `eye` looking along `direction`
    pub fn look_to(eye: Vec3, direction: Vec3, up: Vec3) -> Self {
        let (right, up, forward) = look_basis(direction, up);

        Self::from_rows(
            Vec4::new(right.x, up.x, -forward.x, 0.0),
            Vec4::new(right.y, up.y, -forward.y, 0.0),
            Vec4::new(right.z, up.z, -forward.z, 0.0),
            Vec4::new(-right.dot(eye), -up.dot(eye), forward.dot(eye), 1.0),
        )
    }

    /// View matrix for a camera at `eye` looking at `target`
    #[inline]
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self::look_to(eye, target - eye, up)
    }

    pub fn determinant(&self) -> f32 {
        let [a, b, c, d] = self.m;

        let s0 = a[0] * b[1] - b[0] * a[1];
        let s1 = a[0] * b[2] - b[0] * a[2];
        let s2 = a[0] * b[3] - b[0] * a[3];
        let s3 = a[1] * b[2] - b[1] * a[2];
        let s4 = a[1] * b[3] - b[1] * a[3];
        let s5 = a[2] * b[3] - b[2] * a[3];

        let c5 = c[2] * d[3] - d[2] * c[3];
        let c4 = c[1] * d[3] - d[1] * c[3];
        let c3 = c[1] * d[2] - d[1] * c[2];
        let c2 = c[0] * d[3] - d[0] * c[3];
        let c1 = c[0] * d[2] - d[0] * c[2];
        let c0 = c[0] * d[1] - d[0] * c[1];

        s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2), self.col(3))
    }

    #[inline]
    pub fn trace(&self) -> f32 {
        self.m[0][0] + self.m[1][1] + self.m[2][2] + self.m[3][3]
    }

    /// Compute the inverse of this matrix
    ///
    /// Singular input yields non-finite values; check [`Mat4::determinant`]
    /// first if the matrix may be degenerate.
    pub fn inverse(&self) -> Self {
        let [a, b, c, d] = self.m;

        let s0 = a[0] * b[1] - b[0] * a[1];
        let s1 = a[0] * b[2] - b[0] * a[2];
        let s2 = a[0] * b[3] - b[0] * a[3];
        let s3 = a[1] * b[2] - b[1] * a[2];
        let s4 = a[1] * b[3] - b[1] * a[3];
        let s5 = a[2] * b[3] - b[2] * a[3];

        let c5 = c[2] * d[3] - d[2] * c[3];
        let c4 = c[1] * d[3] - d[1] * c[3];
        let c3 = c[1] * d[2] - d[1] * c[2];
        let c2 = c[0] * d[3] - d[0] * c[3];
        let c1 = c[0] * d[2] - d[0] * c[2];
        let c0 = c[0] * d[1] - d[0] * c[1];

        let det = s0 * c5 - s1 * c4 + s2 * c3 + s3 * c2 - s4 * c1 + s5 * c0;
        let inv_det = 1.0 / det;

        Self {
            m: [
                [
                    (b[1] * c5 - b[2] * c4 + b[3] * c3) * inv_det,
                    (-a[1] * c5 + a[2] * c4 - a[3] * c3) * inv_det,
                    (d[1] * s5 - d[2] * s4 + d[3] * s3) * inv_det,
                    (-c[1] * s5 + c[2] * s4 - c[3] * s3) * inv_det,
                ],
                [
                    (-b[0] * c5 + b[2] * c2 - b[3] * c1) * inv_det,
                    (a[0] * c5 - a[2] * c2 + a[3] * c1) * inv_det,
                    (-d[0] * s5 + d[2] * s2 - d[3] * s1) * inv_det,
                    (c[0] * s5 - c[2] * s2 + c[3] * s1) * inv_det,
                ],
                [
                    (b[0] * c4 - b[1] * c2 + b[3] * c0) * inv_det,
                    (-a[0] * c4 + a[1] * c2 - a[3] * c0) * inv_det,
                    (d[0] * s4 - d[1] * s2 + d[3] * s0) * inv_det,
                    (-c[0] * s4 + c[1] * s2 - c[3] * s0) * inv_det,
                ],
                [
                    (-b[0] * c3 + b[1] * c1 - b[2] * c0) * inv_det,
                    (a[0] * c3 - a[1] * c1 + a[2] * c0) * inv_det,
                    (-d[0] * s3 + d[1] * s1 - d[2] * s0) * inv_det,
                    (c[0] * s3 - c[1] * s1 + c[2] * s0) * inv_det,
                ],
            ],
        }
    }

    /// Multiply matching pairs: `results[i] = left[i] * right[i]`
    ///
    /// Only the common prefix of the three slices is processed.
    pub fn mul_batch(results: &mut [Mat4], left: &[Mat4], right: &[Mat4]) {
        debug_assert!(
            results.len() == left.len() && left.len() == right.len(),
            "mul_batch slices differ in length"
        );
        for ((out, l), r) in results.iter_mut().zip(left).zip(right) {
            *out = *l * *r;
        }
    }

    /// Flat row-major array
    pub fn to_array(&self) -> [f32; 16] {
        let m = &self.m;
        [
            m[0][0], m[0][1], m[0][2], m[0][3],
            m[1][0], m[1][1], m[1][2], m[1][3],
            m[2][0], m[2][1], m[2][2], m[2][3],
            m[3][0], m[3][1], m[3][2], m[3][3],
        ]
    }

    #[inline]
    pub fn to_rows_array_2d(&self) -> [[f32; 4]; 4] {
        self.m
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Add for Mat4 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        for (row, rhs_row) in out.m.iter_mut().zip(rhs.m.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a += *b;
            }
        }
        out
    }
}

impl Sub for Mat4 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        for (row, rhs_row) in out.m.iter_mut().zip(rhs.m.iter()) {
            for (a, b) in row.iter_mut().zip(rhs_row.iter()) {
                *a -= *b;
            }
        }
        out
    }
}

/// `self` applied first, then `rhs`: `v * (a * b) == (v * a) * b`
impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_rows(
            self.row(0) * rhs,
            self.row(1) * rhs,
            self.row(2) * rhs,
            self.row(3) * rhs,
        )
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Index<(usize, usize)> for Mat4 {
    type Output = f32;
    #[inline] fn index(&self, (row, col): (usize, usize)) -> &f32 { &self.m[row][col] }
}

impl IndexMut<(usize, usize)> for Mat4 {
    #[inline] fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 { &mut self.m[row][col] }
}
