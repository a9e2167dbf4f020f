//! Scalar helpers shared by every other module
//!
//! Plain `f32 -> f32` functions: ranges, wrapping, interpolation, and a few
//! integer utilities for sizes and alignment.

use crate::consts::{DEG_TO_RAD, PI, RAD_TO_DEG};

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

/// Clamp to `[0, 1]`
#[inline]
pub fn saturate(x: f32) -> f32 {
    clamp(x, 0.0, 1.0)
}

/// Smallest of three values
#[inline]
pub fn min3(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

/// Largest of three values
#[inline]
pub fn max3(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

/// Sign of `x` as -1, 0 or 1 (zero stays zero, unlike `f32::signum`)
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 { 1.0 }
    else if x < 0.0 { -1.0 }
    else { 0.0 }
}

/// Wrap an integer into `[min, max)`. An empty range (`min == max`) yields `min`.
#[inline]
pub fn wrap_int(value: i32, min: i32, max: i32) -> i32 {
    let range = max - min;
    if range == 0 {
        return min;
    }
    let offset = (value - min) % range;
    min + offset + if offset < 0 { range } else { 0 }
}

/// Wrap a float into `[min, max)` using floored modulo
#[inline]
pub fn wrap(value: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    let offset = value - min;
    min + offset - range * (offset / range).floor()
}

/// Wrap an angle into `[-PI, PI)`
#[inline]
pub fn wrap_radians(radians: f32) -> f32 {
    wrap(radians, -PI, PI)
}

/// Map `value` from `[start, end]` to `[0, 1]` (not clamped)
#[inline]
pub fn normalize_range(value: f32, start: f32, end: f32) -> f32 {
    (value - start) / (end - start)
}

/// Map `value` from `[in_start, in_end]` to `[out_start, out_end]` (not clamped)
#[inline]
pub fn remap(value: f32, in_start: f32, in_end: f32, out_start: f32, out_end: f32) -> f32 {
    (value - in_start) / (in_end - in_start) * (out_end - out_start) + out_start
}

/// Bounce `value` back and forth between min and max
pub fn ping_pong(value: f32, min: f32, max: f32) -> f32 {
    let range = max - min;
    if range == 0.0 {
        return min;
    }

    let mut wrapped = (value - min) % (2.0 * range);
    if wrapped < 0.0 {
        wrapped += 2.0 * range;
    }

    if wrapped < range {
        min + wrapped
    } else {
        max - (wrapped - range)
    }
}

/// Fractional part, always in `[0, 1)` for finite input
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// 0 when `x < edge`, 1 otherwise
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge { 0.0 } else { 1.0 }
}

/// Approximate equality, strict `< epsilon`
#[inline]
pub fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Linear interpolation. `t` is not clamped, values outside `[0, 1]` extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Interpolate between two angles along the shortest arc
#[inline]
pub fn lerp_radians(a: f32, b: f32, t: f32) -> f32 {
    a + wrap_radians(b - a) * t
}

/// Inverse of [`lerp`]: the `t` at which `lerp(a, b, t) == value`
#[inline]
pub fn lerp_inverse(a: f32, b: f32, value: f32) -> f32 {
    (value - a) / (b - a)
}

/// Smoothstep with the quintic curve `6t^5 - 15t^4 + 10t^3`
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = saturate((x - edge0) / (edge1 - edge0));
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Exponential decay of `initial` after `time`
#[inline]
pub fn exp_decay(initial: f32, decay_rate: f32, time: f32) -> f32 {
    initial * (-decay_rate * time).exp()
}

/// Step from `from` toward `to` by at most `max_delta`, never overshooting
#[inline]
pub fn move_toward(from: f32, to: f32, max_delta: f32) -> f32 {
    let delta = to - from;
    let distance = delta.abs();
    if distance <= max_delta {
        to
    } else {
        from + (delta / distance) * max_delta
    }
}

/// Convert degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

// Integer helpers

/// True when `x` is a non-zero power of two
#[inline]
pub fn is_power_of_two(x: u64) -> bool {
    x != 0 && (x & (x - 1)) == 0
}

/// Smallest power of two `>= x` (1 for 0 and 1)
///
/// Returns 0 when the result does not fit in a `u64`, i.e. for `x > 2^63`.
#[inline]
pub fn next_power_of_two(x: u64) -> u64 {
    x.checked_next_power_of_two().unwrap_or(0)
}

/// Largest power of two `<= x` (0 for 0)
#[inline]
pub fn prev_power_of_two(x: u64) -> u64 {
    if x == 0 { 0 } else { 1u64 << (63 - x.leading_zeros()) }
}

/// Closest power of two, ties resolve upward
pub fn near_power_of_two(x: u64) -> u64 {
    if x <= 1 {
        return 1;
    }
    let prev = prev_power_of_two(x);
    let next = next_power_of_two(x);
    if next == 0 || x - prev < next - x { prev } else { next }
}

/// Multiple of `b` at or after `a`
#[inline]
pub fn next_multiple(a: i32, b: i32) -> i32 {
    b * (a as f32 / b as f32).ceil() as i32
}

/// Multiple of `b` at or before `a`
#[inline]
pub fn prev_multiple(a: i32, b: i32) -> i32 {
    b * (a as f32 / b as f32).floor() as i32
}

/// Multiple of `b` closest to `a`
#[inline]
pub fn near_multiple(a: i32, b: i32) -> i32 {
    b * (a as f32 / b as f32).round() as i32
}

/// Integer division rounding up
#[inline]
pub fn div_ceil(num: usize, denom: usize) -> usize {
    (num + denom - 1) / denom
}

/// Round up to a power-of-two alignment
#[inline]
pub fn align_up(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}

/// Round down to a power-of-two alignment
#[inline]
pub fn align_down(value: usize, alignment: usize) -> usize {
    value & !(alignment - 1)
}
