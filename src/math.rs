//! Scalar helpers shared by the color and vector types
//!
//! All functions are pure and total over their `f32` domain, except for
//! [`interpolate`], which panics when `t` lies outside `[0, 1]`.

/// Single precision approximation of π
#[allow(clippy::excessive_precision)]
pub const PI: f32 = 3.14159265358979323846;

/// Absolute tolerance used for "close enough" float comparisons
pub const FLOAT_EPSILON: f32 = 0.00001;

const DEG_TO_RAD: f32 = PI / 180.0;
const RAD_TO_DEG: f32 = 180.0 / PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(radians: f32) -> f32 {
    radians * RAD_TO_DEG
}

/// Returns `min` if `x <= min`, `max` if `x >= max`, otherwise `x`.
///
/// The bounds are not validated. With `min > max` the result is whatever
/// the comparison chain yields, which is always `min` for inputs `<= min`.
#[inline]
pub fn clamp(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        min
    } else if x >= max {
        max
    } else {
        x
    }
}

/// True when `a` and `b` differ by at most `tolerance`
#[inline]
pub fn is_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Truncates toward zero.
///
/// NaN maps to 0 and out of range values saturate at the `i32` bounds.
#[inline]
pub fn float_to_int(f: f32) -> i32 {
    f as i32
}

/// Converts a float in `[0.0, 1.0]` to a byte in `[0, 255]`.
///
/// Saturates outside the unit range. Inside it the value is scaled by 255.5
/// and truncated, which is the rounding the packed render color relies on.
#[inline]
pub fn float_to_byte(value: f32) -> u8 {
    if value >= 1.0 {
        return 255;
    }
    if value <= 0.0 {
        return 0;
    }
    // NaN falls through both checks, the saturating cast turns it into 0
    float_to_int(value * 255.5) as u8
}

/// Interpolates between `v1` and `v2`.
///
/// With `linear` set this is `v1 + t * (v2 - v1)`, otherwise the Hermite
/// smoothstep weight `3t² - 2t³` is used, which eases in and out at the ends.
///
/// # Panics
///
/// When `t` is not within `[0, 1]`.
#[inline]
pub fn interpolate(v1: f32, v2: f32, t: f32, linear: bool) -> f32 {
    assert!(
        (0.0..=1.0).contains(&t),
        "interpolation parameter must be within [0, 1], got {t}"
    );
    if linear {
        return v1 + t * (v2 - v1);
    }

    let t2 = t * t;
    let t3 = t * t2;
    let z = 3.0 * t2 - t3 - t3;
    v1 * (1.0 - z) + v2 * z
}
