//! Easing curves
//!
//! Every curve maps animation progress `t` in `[0, 1]` to an eased value with
//! `f(0) = 0` and `f(1) = 1` (up to float rounding), except [`expo_out`] and
//! [`expo_in_out`], which settle just below 1. Curves are plain
//! functions for hot loops; [`Ease`] names them so animation settings can pick
//! one from a config file.
//!
//! Shapes follow <https://easings.net>.

use core::fmt;
use core::str::FromStr;

use crate::consts::PI;
use crate::error::MathError;

/// Sine ease-in
#[inline]
pub fn sine_in(t: f32) -> f32 {
    (PI / 2.0 * t).sin()
}

/// Sine ease-out
#[inline]
pub fn sine_out(t: f32) -> f32 {
    1.0 + (PI / 2.0 * (t - 1.0)).sin()
}

/// Sine ease-in-out
#[inline]
pub fn sine_in_out(t: f32) -> f32 {
    0.5 * (1.0 + (PI * (t - 0.5)).sin())
}

#[inline]
pub fn quad_in(t: f32) -> f32 {
    t * t
}

#[inline]
pub fn quad_out(t: f32) -> f32 {
    t * (2.0 - t)
}

#[inline]
pub fn quad_in_out(t: f32) -> f32 {
    if t < 0.5 { 2.0 * t * t } else { t * (4.0 - 2.0 * t) - 1.0 }
}

#[inline]
pub fn cubic_in(t: f32) -> f32 {
    t * t * t
}

#[inline]
pub fn cubic_out(t: f32) -> f32 {
    let t = t - 1.0;
    1.0 + t * t * t
}

#[inline]
pub fn cubic_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
    }
}

#[inline]
pub fn quart_in(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2
}

#[inline]
pub fn quart_out(t: f32) -> f32 {
    let t = t - 1.0;
    let t2 = t * t;
    1.0 - t2 * t2
}

#[inline]
pub fn quart_in_out(t: f32) -> f32 {
    if t < 0.5 {
        let t2 = t * t;
        8.0 * t2 * t2
    } else {
        let t = t - 1.0;
        let t2 = t * t;
        1.0 - 8.0 * t2 * t2
    }
}

#[inline]
pub fn quint_in(t: f32) -> f32 {
    let t2 = t * t;
    t * t2 * t2
}

#[inline]
pub fn quint_out(t: f32) -> f32 {
    let t = t - 1.0;
    let t2 = t * t;
    1.0 + t * t2 * t2
}

#[inline]
pub fn quint_in_out(t: f32) -> f32 {
    if t < 0.5 {
        let t2 = t * t;
        16.0 * t * t2 * t2
    } else {
        let t = t - 1.0;
        let t2 = t * t;
        1.0 + 16.0 * t * t2 * t2
    }
}

/// Exponential ease-in, rescaled so both ends are exact (no `t == 0` special case)
#[inline]
pub fn expo_in(t: f32) -> f32 {
    (2f32.powf(8.0 * t) - 1.0) / 255.0
}

/// Exponential ease-out. Stops short of 1 at `t == 1` (`1 - 2^-8`).
#[inline]
pub fn expo_out(t: f32) -> f32 {
    1.0 - 2f32.powf(-8.0 * t)
}

/// Exponential ease-in-out. Ends at `1 - 2^-9` rather than 1.
#[inline]
pub fn expo_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (2f32.powf(16.0 * t) - 1.0) / 510.0
    } else {
        1.0 - 0.5 * 2f32.powf(-16.0 * (t - 0.5))
    }
}

#[inline]
pub fn circ_in(t: f32) -> f32 {
    1.0 - (1.0 - t).sqrt()
}

#[inline]
pub fn circ_out(t: f32) -> f32 {
    t.sqrt()
}

#[inline]
pub fn circ_in_out(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - (1.0 - 2.0 * t).sqrt()) * 0.5
    } else {
        (1.0 + (2.0 * t - 1.0).sqrt()) * 0.5
    }
}

/// Back ease-in (undershoots below 0 before accelerating)
#[inline]
pub fn back_in(t: f32) -> f32 {
    t * t * (2.70158 * t - 1.70158)
}

/// Back ease-out (overshoots past 1 before settling)
#[inline]
pub fn back_out(t: f32) -> f32 {
    let t = t - 1.0;
    1.0 + t * t * (2.70158 * t + 1.70158)
}

#[inline]
pub fn back_in_out(t: f32) -> f32 {
    if t < 0.5 {
        t * t * (7.0 * t - 2.5) * 2.0
    } else {
        let t = t - 1.0;
        1.0 + t * t * 2.0 * (7.0 * t + 2.5)
    }
}

#[inline]
pub fn elastic_in(t: f32) -> f32 {
    let t2 = t * t;
    t2 * t2 * (t * PI * 4.5).sin()
}

#[inline]
pub fn elastic_out(t: f32) -> f32 {
    let t2 = (t - 1.0) * (t - 1.0);
    1.0 - t2 * t2 * (t * PI * 4.5).cos()
}

pub fn elastic_in_out(t: f32) -> f32 {
    if t < 0.45 {
        let t2 = t * t;
        8.0 * t2 * t2 * (t * PI * 9.0).sin()
    } else if t < 0.55 {
        0.5 + 0.75 * (t * PI * 4.0).sin()
    } else {
        let t2 = (t - 1.0) * (t - 1.0);
        1.0 - 8.0 * t2 * t2 * (t * PI * 9.0).sin()
    }
}

#[inline]
pub fn bounce_in(t: f32) -> f32 {
    2f32.powf(6.0 * (t - 1.0)) * (t * PI * 3.5).sin().abs()
}

#[inline]
pub fn bounce_out(t: f32) -> f32 {
    1.0 - 2f32.powf(-6.0 * t) * (t * PI * 3.5).cos().abs()
}

pub fn bounce_in_out(t: f32) -> f32 {
    if t < 0.5 {
        8.0 * 2f32.powf(8.0 * (t - 1.0)) * (t * PI * 7.0).sin().abs()
    } else {
        1.0 - 8.0 * 2f32.powf(-8.0 * t) * (t * PI * 7.0).sin().abs()
    }
}

/// Named easing curve
///
/// Serializes as its snake_case name (`"quad_in_out"`), the same string
/// accepted by [`FromStr`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ease {
    #[default]
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Ease {
    /// Every curve, in declaration order
    pub const ALL: [Ease; 31] = [
        Ease::Linear,
        Ease::SineIn, Ease::SineOut, Ease::SineInOut,
        Ease::QuadIn, Ease::QuadOut, Ease::QuadInOut,
        Ease::CubicIn, Ease::CubicOut, Ease::CubicInOut,
        Ease::QuartIn, Ease::QuartOut, Ease::QuartInOut,
        Ease::QuintIn, Ease::QuintOut, Ease::QuintInOut,
        Ease::ExpoIn, Ease::ExpoOut, Ease::ExpoInOut,
        Ease::CircIn, Ease::CircOut, Ease::CircInOut,
        Ease::BackIn, Ease::BackOut, Ease::BackInOut,
        Ease::ElasticIn, Ease::ElasticOut, Ease::ElasticInOut,
        Ease::BounceIn, Ease::BounceOut, Ease::BounceInOut,
    ];

    /// Evaluate the curve at `t`
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Ease::Linear => t,
            Ease::SineIn => sine_in(t),
            Ease::SineOut => sine_out(t),
            Ease::SineInOut => sine_in_out(t),
            Ease::QuadIn => quad_in(t),
            Ease::QuadOut => quad_out(t),
            Ease::QuadInOut => quad_in_out(t),
            Ease::CubicIn => cubic_in(t),
            Ease::CubicOut => cubic_out(t),
            Ease::CubicInOut => cubic_in_out(t),
            Ease::QuartIn => quart_in(t),
            Ease::QuartOut => quart_out(t),
            Ease::QuartInOut => quart_in_out(t),
            Ease::QuintIn => quint_in(t),
            Ease::QuintOut => quint_out(t),
            Ease::QuintInOut => quint_in_out(t),
            Ease::ExpoIn => expo_in(t),
            Ease::ExpoOut => expo_out(t),
            Ease::ExpoInOut => expo_in_out(t),
            Ease::CircIn => circ_in(t),
            Ease::CircOut => circ_out(t),
            Ease::CircInOut => circ_in_out(t),
            Ease::BackIn => back_in(t),
            Ease::BackOut => back_out(t),
            Ease::BackInOut => back_in_out(t),
            Ease::ElasticIn => elastic_in(t),
            Ease::ElasticOut => elastic_out(t),
            Ease::ElasticInOut => elastic_in_out(t),
            Ease::BounceIn => bounce_in(t),
            Ease::BounceOut => bounce_out(t),
            Ease::BounceInOut => bounce_in_out(t),
        }
    }

    /// Snake_case name used in config files
    pub fn name(self) -> &'static str {
        match self {
            Ease::Linear => "linear",
            Ease::SineIn => "sine_in",
            Ease::SineOut => "sine_out",
            Ease::SineInOut => "sine_in_out",
            Ease::QuadIn => "quad_in",
            Ease::QuadOut => "quad_out",
            Ease::QuadInOut => "quad_in_out",
            Ease::CubicIn => "cubic_in",
            Ease::CubicOut => "cubic_out",
            Ease::CubicInOut => "cubic_in_out",
            Ease::QuartIn => "quart_in",
            Ease::QuartOut => "quart_out",
            Ease::QuartInOut => "quart_in_out",
            Ease::QuintIn => "quint_in",
            Ease::QuintOut => "quint_out",
            Ease::QuintInOut => "quint_in_out",
            Ease::ExpoIn => "expo_in",
            Ease::ExpoOut => "expo_out",
            Ease::ExpoInOut => "expo_in_out",
            Ease::CircIn => "circ_in",
            Ease::CircOut => "circ_out",
            Ease::CircInOut => "circ_in_out",
            Ease::BackIn => "back_in",
            Ease::BackOut => "back_out",
            Ease::BackInOut => "back_in_out",
            Ease::ElasticIn => "elastic_in",
            Ease::ElasticOut => "elastic_out",
            Ease::ElasticInOut => "elastic_in_out",
            Ease::BounceIn => "bounce_in",
            Ease::BounceOut => "bounce_out",
            Ease::BounceInOut => "bounce_in_out",
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = MathError;

    /// Accepts the snake_case name, case-insensitively, with `-` or `_`
    /// separators and an optional `ease_` prefix (`"ease-in-out-back"` is not
    /// accepted, the family always comes first).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let key = key.strip_prefix("ease_").unwrap_or(&key);

        Ease::ALL
            .iter()
            .copied()
            .find(|ease| ease.name() == key)
            .ok_or_else(|| MathError::UnknownEase(s.to_string()))
    }
}
