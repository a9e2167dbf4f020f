//! RGBA color
//!
//! Four `f32` channels, nominally in `[0, 1]`. Values outside that range are
//! kept as-is (HDR) until [`Color::clamp`] or [`Color::normalize`] is called.
//!
//! Packed integers use `0xRRGGBBAA` byte order. Hue is in degrees, `[0, 360)`.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};
use core::str::FromStr;

use crate::error::MathError;
use crate::scalar::{max3, min3, saturate};
use crate::vector::{Vec3, Vec4};

/// RGBA color with `f32` channels
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLANK: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Self = Self::rgb(0.75, 0.75, 0.75);
    pub const DARK_GRAY: Self = Self::rgb(0.25, 0.25, 0.25);
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Self = Self::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Self = Self::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::rgb(1.0, 0.0, 1.0);
    pub const ORANGE: Self = Self::rgb(1.0, 0.65, 0.0);
    pub const BROWN: Self = Self::rgb(0.65, 0.16, 0.16);
    pub const PURPLE: Self = Self::rgb(0.5, 0.0, 0.5);
    pub const PINK: Self = Self::rgb(1.0, 0.75, 0.8);
    pub const GOLD: Self = Self::rgb(0.83, 0.69, 0.22);
    pub const SILVER: Self = Self::rgb(0.77, 0.77, 0.77);
    pub const COPPER: Self = Self::rgb(0.78, 0.51, 0.27);

    // Constructors

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Opaque gray with every RGB channel set to `value`
    #[inline]
    pub const fn gray(value: f32) -> Self {
        Self::rgb(value, value, value)
    }

    /// Same color with alpha replaced
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// From 8-bit channels
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    /// From a packed `0xRRGGBBAA` value
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        let [r, g, b, a] = hex.to_be_bytes();
        Self::from_rgba8(r, g, b, a)
    }

    // Conversions

    /// 8-bit channels, saturated then rounded to nearest
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let quantize = |c: f32| (saturate(c) * 255.0).round() as u8;
        [quantize(self.r), quantize(self.g), quantize(self.b), quantize(self.a)]
    }

    /// Packed `0xRRGGBBAA` value
    #[inline]
    pub fn to_hex(self) -> u32 {
        u32::from_be_bytes(self.to_rgba8())
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Range handling

    /// True if any RGB channel lies outside `[0, 1]`. Alpha is not checked.
    #[inline]
    pub fn is_out_of_range(self) -> bool {
        !(0.0..=1.0).contains(&self.r)
            || !(0.0..=1.0).contains(&self.g)
            || !(0.0..=1.0).contains(&self.b)
    }

    /// Clamp every channel, alpha included, to `[0, 1]`
    #[inline]
    pub fn clamp(self) -> Self {
        Self::new(saturate(self.r), saturate(self.g), saturate(self.b), saturate(self.a))
    }

    /// Bring the color into `[0, 1]` while keeping its hue
    ///
    /// When the brightest RGB channel exceeds 1 the RGB channels are divided by
    /// it and alpha is clamped. Otherwise this is [`Color::clamp`].
    pub fn normalize(self) -> Self {
        let max = max3(self.r, self.g, self.b);
        if max > 1.0 {
            let inv = 1.0 / max;
            Self::new(self.r * inv, self.g * inv, self.b * inv, saturate(self.a))
        } else {
            self.clamp()
        }
    }

    /// Add `offset` to RGB, alpha unchanged
    #[inline]
    pub fn offset(self, offset: f32) -> Self {
        Self::new(self.r + offset, self.g + offset, self.b + offset, self.a)
    }

    /// Multiply RGB by `factor`, alpha unchanged
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    /// True if every channel differs by less than `epsilon`
    #[inline]
    pub fn approx_eq(self, other: Self, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
    }

    /// Interpolate all four channels
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let w = 1.0 - t;
        Self::new(
            w.mul_add(self.r, t * other.r),
            w.mul_add(self.g, t * other.g),
            w.mul_add(self.b, t * other.b),
            w.mul_add(self.a, t * other.a),
        )
    }

    // Color spaces

    /// `(hue, saturation, value)`. Gray colors report hue 0.
    pub fn to_hsv(self) -> Vec3 {
        let max = max3(self.r, self.g, self.b);
        let min = min3(self.r, self.g, self.b);
        let delta = max - min;

        if max == 0.0 || delta == 0.0 {
            return Vec3::new(0.0, 0.0, max);
        }

        Vec3::new(self.hue(max, delta), delta / max, max)
    }

    /// From hue in degrees (wrapped into `[0, 360)`), saturation, value and alpha
    pub fn from_hsv(h: f32, s: f32, v: f32, a: f32) -> Self {
        if s == 0.0 {
            return Self::new(v, v, v, a);
        }

        let sector = wrap_hue(h) / 60.0;
        let i = sector.floor();
        let f = sector - i;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i as u32 % 6 {
            0 => Self::new(v, t, p, a),
            1 => Self::new(q, v, p, a),
            2 => Self::new(p, v, t, a),
            3 => Self::new(p, q, v, a),
            4 => Self::new(t, p, v, a),
            _ => Self::new(v, p, q, a),
        }
    }

    /// `(hue, saturation, lightness)`. Gray colors report hue 0.
    pub fn to_hsl(self) -> Vec3 {
        let max = max3(self.r, self.g, self.b);
        let min = min3(self.r, self.g, self.b);
        let delta = max - min;
        let l = (max + min) * 0.5;

        if delta == 0.0 {
            return Vec3::new(0.0, 0.0, l);
        }

        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Vec3::new(self.hue(max, delta), s, l)
    }

    /// From hue in degrees (wrapped into `[0, 360)`), saturation, lightness and alpha
    pub fn from_hsl(h: f32, s: f32, l: f32, a: f32) -> Self {
        if s == 0.0 {
            return Self::new(l, l, l, a);
        }

        let h = wrap_hue(h) / 360.0;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        let channel = |t: f32| {
            let t = if t < 0.0 {
                t + 1.0
            } else if t > 1.0 {
                t - 1.0
            } else {
                t
            };
            if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 0.5 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            }
        };

        Self::new(channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0), a)
    }

    // Shared hue term of HSV and HSL. `delta` must be non-zero.
    fn hue(self, max: f32, delta: f32) -> f32 {
        let h = if max == self.r {
            60.0 * ((self.g - self.b) / delta)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta) + 120.0
        } else {
            60.0 * ((self.r - self.g) / delta) + 240.0
        };
        wrap_hue(h)
    }

    // Luminance

    /// Perceived luminance with ITU-R BT.601 weights
    #[inline]
    pub fn luminance_rec601(self) -> f32 {
        0.299 * self.r + 0.587 * self.g + 0.114 * self.b
    }

    /// Perceived luminance with ITU-R BT.709 weights
    #[inline]
    pub fn luminance_rec709(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Brightest RGB channel
    #[inline]
    pub fn brightness(self) -> f32 {
        max3(self.r, self.g, self.b)
    }

    #[inline]
    pub fn grayscale_rec601(self) -> Self {
        Self::gray(self.luminance_rec601()).with_alpha(self.a)
    }

    #[inline]
    pub fn grayscale_rec709(self) -> Self {
        Self::gray(self.luminance_rec709()).with_alpha(self.a)
    }

    /// `1 - c` on RGB, alpha unchanged
    #[inline]
    pub fn invert(self) -> Self {
        Self::new(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }
}

#[inline]
fn wrap_hue(h: f32) -> f32 {
    let h = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    #[inline]
    fn from(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

impl From<Color> for [f32; 4] {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl From<Vec4> for Color {
    #[inline]
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<Color> for Vec4 {
    #[inline]
    fn from(c: Color) -> Self {
        c.to_vec4()
    }
}

macro_rules! impl_color_rgb_op {
    ($Trait:ident, $fn:ident, $op:tt) => {
        /// Applies to RGB only; alpha comes from the left operand
        impl $Trait for Color {
            type Output = Self;

            #[inline]
            fn $fn(self, rhs: Self) -> Self {
                Self::new(self.r $op rhs.r, self.g $op rhs.g, self.b $op rhs.b, self.a)
            }
        }
    };
}

impl_color_rgb_op!(Add, add, +);
impl_color_rgb_op!(Sub, sub, -);
impl_color_rgb_op!(Mul, mul, *);
impl_color_rgb_op!(Div, div, /);

impl Mul<f32> for Color {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

/// Formats as `#RRGGBBAA`
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_hex())
    }
}

/// Parses `RGB`, `RGBA`, `RRGGBB` or `RRGGBBAA` hex digits with an optional
/// `#` or `0x` prefix. Missing alpha means opaque.
impl FromStr for Color {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(MathError::InvalidHexDigit {
                input: s.to_string(),
                digit,
            });
        }

        // All digits are ASCII past this point, so byte length is digit count
        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            len => {
                return Err(MathError::InvalidHexLength {
                    input: s.to_string(),
                    len,
                })
            }
        };

        let mut value = u32::from_str_radix(&expanded, 16).map_err(|_| MathError::InvalidHexLength {
            input: s.to_string(),
            len: digits.len(),
        })?;
        if expanded.len() == 6 {
            value = (value << 8) | 0xFF;
        }

        Ok(Self::from_hex(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_named_constants() {
        assert_eq!(Color::BLANK.to_array(), [0.0, 0.0, 0.0, 0.0]);
        assert_eq!(Color::WHITE.to_array(), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::GRAY.to_array(), [0.5, 0.5, 0.5, 1.0]);
        assert_eq!(Color::LIGHT_GRAY.to_array(), [0.75, 0.75, 0.75, 1.0]);
        assert_eq!(Color::DARK_GRAY.to_array(), [0.25, 0.25, 0.25, 1.0]);
        assert_eq!(Color::RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::GREEN.to_array(), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(Color::BLUE.to_array(), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(Color::YELLOW.to_array(), [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(Color::CYAN.to_array(), [0.0, 1.0, 1.0, 1.0]);
        assert_eq!(Color::MAGENTA.to_array(), [1.0, 0.0, 1.0, 1.0]);
        assert_eq!(Color::ORANGE.to_array(), [1.0, 0.65, 0.0, 1.0]);
        assert_eq!(Color::BROWN.to_array(), [0.65, 0.16, 0.16, 1.0]);
        assert_eq!(Color::PURPLE.to_array(), [0.5, 0.0, 0.5, 1.0]);
        assert_eq!(Color::PINK.to_array(), [1.0, 0.75, 0.8, 1.0]);
        assert_eq!(Color::GOLD.to_array(), [0.83, 0.69, 0.22, 1.0]);
        assert_eq!(Color::SILVER.to_array(), [0.77, 0.77, 0.77, 1.0]);
        assert_eq!(Color::COPPER.to_array(), [0.78, 0.51, 0.27, 1.0]);
    }

    #[test]
    fn test_hex() {
        assert_eq!(Color::from_hex(0xFF0000FF), Color::RED);
        assert_eq!(Color::RED.to_hex(), 0xFF0000FF);
        assert_eq!(Color::BLANK.to_hex(), 0);
        assert_eq!(Color::GRAY.to_hex(), 0x808080FF);
        assert_eq!(Color::from_rgba8(0x12, 0x34, 0x56, 0x78).to_hex(), 0x12345678);
        // Out-of-range channels saturate
        assert_eq!(Color::new(2.0, -1.0, 0.0, 1.0).to_hex(), 0xFF0000FF);
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Color::gray(0.3), Color::new(0.3, 0.3, 0.3, 1.0));
        assert_eq!(Color::RED.with_alpha(0.5).a, 0.5);
        assert_eq!(Color::from_rgba8(255, 0, 255, 0), Color::MAGENTA.with_alpha(0.0));
        assert_eq!(Color::default(), Color::WHITE);
        assert_eq!(Color::RED.to_vec3(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Color::from(Color::CYAN.to_vec4()), Color::CYAN);
    }

    #[test]
    fn test_hsv() {
        let hsv = Color::RED.to_hsv();
        assert_eq!(hsv, Vec3::new(0.0, 1.0, 1.0));
        assert_abs_diff_eq!(Color::GREEN.to_hsv().x, 120.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Color::BLUE.to_hsv().x, 240.0, epsilon = 1e-4);
        assert_abs_diff_eq!(Color::MAGENTA.to_hsv().x, 300.0, epsilon = 1e-4);
        assert_eq!(Color::GRAY.to_hsv(), Vec3::new(0.0, 0.0, 0.5));

        assert!(Color::from_hsv(60.0, 1.0, 1.0, 1.0).approx_eq(Color::YELLOW, 1e-6));
        assert!(Color::from_hsv(0.0, 0.0, 0.25, 0.5).approx_eq(Color::DARK_GRAY.with_alpha(0.5), 1e-6));

        let c = Color::new(0.2, 0.7, 0.4, 0.9);
        let hsv = c.to_hsv();
        assert!(Color::from_hsv(hsv.x, hsv.y, hsv.z, c.a).approx_eq(c, 1e-5));
    }

    #[test]
    fn test_hue_wraps() {
        let a = Color::from_hsv(-120.0, 1.0, 1.0, 1.0);
        let b = Color::from_hsv(240.0, 1.0, 1.0, 1.0);
        assert!(a.approx_eq(b, 1e-5));
        assert!(Color::from_hsv(360.0, 1.0, 1.0, 1.0).approx_eq(Color::RED, 1e-6));
        assert!(Color::from_hsl(720.0 + 120.0, 1.0, 0.5, 1.0).approx_eq(Color::GREEN, 1e-5));

        // Slightly blue-ish red stays below 360
        let h = Color::new(1.0, 0.0, 1e-7, 1.0).to_hsv().x;
        assert!((0.0..360.0).contains(&h));
    }

    #[test]
    fn test_hsl() {
        assert_eq!(Color::WHITE.to_hsl(), Vec3::new(0.0, 0.0, 1.0));
        let hsl = Color::RED.to_hsl();
        assert_abs_diff_eq!(hsl.y, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(hsl.z, 0.5, epsilon = 1e-6);
        assert!(Color::from_hsl(240.0, 1.0, 0.5, 1.0).approx_eq(Color::BLUE, 1e-5));

        let c = Color::new(0.9, 0.35, 0.6, 1.0);
        let hsl = c.to_hsl();
        assert!(Color::from_hsl(hsl.x, hsl.y, hsl.z, c.a).approx_eq(c, 1e-5));
    }

    #[test]
    fn test_normalize_vs_clamp() {
        let hdr = Color::new(2.0, 1.0, 0.5, 1.5);
        assert!(hdr.is_out_of_range());

        let n = hdr.normalize();
        assert!(n.approx_eq(Color::new(1.0, 0.5, 0.25, 1.0), 1e-6));
        assert!(!n.is_out_of_range());

        let c = hdr.clamp();
        assert!(c.approx_eq(Color::new(1.0, 1.0, 0.5, 1.0), 1e-6));

        let low = Color::new(-0.5, 0.5, 0.2, -1.0);
        assert_eq!(low.normalize(), low.clamp());
        assert_eq!(low.normalize(), Color::new(0.0, 0.5, 0.2, 0.0));

        // Alpha alone does not make a color out of range
        assert!(!Color::WHITE.with_alpha(3.0).is_out_of_range());
    }

    #[test]
    fn test_rgb_ops_keep_left_alpha() {
        let a = Color::new(0.5, 0.25, 1.0, 0.3);
        let b = Color::new(0.25, 0.25, 0.5, 0.9);
        assert_eq!(a + b, Color::new(0.75, 0.5, 1.5, 0.3));
        assert_eq!(a - b, Color::new(0.25, 0.0, 0.5, 0.3));
        assert_eq!(a * b, Color::new(0.125, 0.0625, 0.5, 0.3));
        assert_eq!(a / b, Color::new(2.0, 1.0, 2.0, 0.3));
        assert_eq!(a * 2.0, a.scale(2.0));
        assert_eq!(a.offset(0.5), Color::new(1.0, 0.75, 1.5, 0.3));
        assert_eq!(a.invert(), Color::new(0.5, 0.75, 0.0, 0.3));
    }

    #[test]
    fn test_lerp() {
        let mid = Color::BLACK.lerp(Color::WHITE.with_alpha(0.0), 0.5);
        assert!(mid.approx_eq(Color::new(0.5, 0.5, 0.5, 0.5), 1e-6));
        assert_eq!(Color::RED.lerp(Color::BLUE, 0.0), Color::RED);
        assert_eq!(Color::RED.lerp(Color::BLUE, 1.0), Color::BLUE);
    }

    #[test]
    fn test_luminance() {
        assert_abs_diff_eq!(Color::WHITE.luminance_rec601(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Color::WHITE.luminance_rec709(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(Color::GREEN.luminance_rec601(), 0.587, epsilon = 1e-6);
        assert_abs_diff_eq!(Color::GREEN.luminance_rec709(), 0.7152, epsilon = 1e-6);
        assert_eq!(Color::new(0.2, 0.9, 0.4, 1.0).brightness(), 0.9);

        let g = Color::RED.with_alpha(0.4).grayscale_rec709();
        assert_abs_diff_eq!(g.r, 0.2126, epsilon = 1e-6);
        assert_eq!(g.r, g.g);
        assert_eq!(g.g, g.b);
        assert_eq!(g.a, 0.4);
        assert_abs_diff_eq!(Color::BLUE.grayscale_rec601().b, 0.114, epsilon = 1e-6);
    }

    #[test]
    fn test_parse() {
        assert_eq!("#FF0000".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("ff0000ff".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("0x00FF00FF".parse::<Color>().unwrap(), Color::GREEN);
        assert_eq!("#00f".parse::<Color>().unwrap(), Color::BLUE);
        assert_eq!("#fff0".parse::<Color>().unwrap(), Color::WHITE.with_alpha(0.0));
        assert_eq!(" #808080 ".parse::<Color>().unwrap().to_hex(), 0x808080FF);

        let c = Color::from_hex(0x3366CC80);
        assert_eq!(c.to_string(), "#3366CC80");
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "#12345".parse::<Color>(),
            Err(MathError::InvalidHexLength {
                input: "#12345".to_string(),
                len: 5,
            })
        );
        assert_eq!(
            "".parse::<Color>(),
            Err(MathError::InvalidHexLength {
                input: String::new(),
                len: 0,
            })
        );
        assert_eq!(
            "#12G456".parse::<Color>(),
            Err(MathError::InvalidHexDigit {
                input: "#12G456".to_string(),
                digit: 'G',
            })
        );
        assert!(matches!(
            "#-12".parse::<Color>(),
            Err(MathError::InvalidHexDigit { digit: '-', .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let c = Color::new(0.25, 0.5, 0.75, 1.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"r":0.25,"g":0.5,"b":0.75,"a":1.0}"#);
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
