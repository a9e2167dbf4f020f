//! # nexium_math - Engine Math Library
//!
//! Value types for 3D graphics and gameplay code: integer and float vectors,
//! quaternions, row-major matrices, TRS transforms and RGBA colors, plus the
//! scalar helpers and easing curves used by animation.
//!
//! ## Conventions
//!
//! - Vectors are **row vectors**: a point is transformed as `v' = v * M`, the
//!   translation lives in the bottom row, and `a * b` applies `a` first.
//! - Right-handed coordinates, `-Z` forward, `+Y` up.
//! - Nothing here fails. Degenerate input produces IEEE special values or a
//!   documented fallback (zero vector, identity quaternion). The only
//!   fallible calls are the string parsers in [`color`] and [`ease`].

#[macro_use]
mod macros;

pub mod error;
pub mod scalar;
pub mod ease;
pub mod ivector;
pub mod vector;
pub mod quaternion;
pub mod matrix;
pub mod transform;
pub mod color;

pub use error::MathError;
pub use scalar::*;
pub use ease::Ease;
pub use ivector::*;
pub use vector::*;
pub use quaternion::*;
pub use matrix::*;
pub use transform::*;
pub use color::*;

/// Common math constants
pub mod consts {
    pub const PI: f32 = core::f32::consts::PI;
    pub const TAU: f32 = PI * 2.0;
    pub const FRAC_PI_2: f32 = PI / 2.0;
    pub const FRAC_PI_4: f32 = PI / 4.0;
    pub const DEG_TO_RAD: f32 = PI / 180.0;
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
    pub const EPSILON: f32 = 1e-6;
}

pub mod prelude {
    pub use crate::ivector::{IVec2, IVec3, IVec4};
    pub use crate::vector::{Vec2, Vec3, Vec4};
    pub use crate::quaternion::Quat;
    pub use crate::matrix::{Mat3, Mat4};
    pub use crate::transform::Transform;
    pub use crate::color::Color;
    pub use crate::ease::Ease;
    pub use crate::error::MathError;
    pub use crate::scalar::{radians, degrees, lerp, clamp, saturate, smoothstep, wrap};
    pub use crate::consts::{PI, TAU};
}
