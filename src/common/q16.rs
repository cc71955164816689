//! [Q16.16](https://en.wikipedia.org/wiki/Q_(number_format)) fixed-point conversion.
//!
//! A Q16.16 value is an `i32` holding a real number scaled by 2^16, i.e
//! 16 integer bits (including the sign) and 16 fractional bits. Native
//! `i16` samples fit exactly in the integer part, so converting to Q16.16
//! never loses precision.

/// The number of fractional bits.
pub const Q16_SHIFT: u32 = 16;
/// 1.0 in Q16.16.
pub const Q16_ONE: i32 = 1 << Q16_SHIFT;
/// 0.5 in Q16.16. Used as rounding bias when converting back to `i16`.
pub const Q16_HALF: i32 = 1 << (Q16_SHIFT - 1);

/// Converts a native sample to Q16.16. Exact for every `i16`.
#[inline]
pub const fn to_q16(value: i16) -> i32 {
    (value as i32) << Q16_SHIFT
}

/// Converts a Q16.16 value to the nearest `i16`, rounding half up and
/// saturating at `i16::MIN` and `i16::MAX`.
#[inline]
pub fn from_q16(value: i32) -> i16 {
    // The bias is added in 64 bits so values close to i32::MAX saturate
    // instead of wrapping.
    let rounded = (value as i64 + Q16_HALF as i64) >> Q16_SHIFT;
    if rounded > i16::MAX as i64 {
        i16::MAX
    } else if rounded < i16::MIN as i64 {
        i16::MIN
    } else {
        rounded as i16
    }
}

/// Converts a Q16.16 value to `f32`. For diagnostics only, detection
/// never goes through floating point.
#[inline]
pub fn q16_to_f32(value: i32) -> f32 {
    value as f32 / Q16_ONE as f32
}

/// Converts a real value to Q16.16, truncating toward zero. Values outside
/// the representable range saturate.
#[inline]
pub fn q16_from_f32(value: f32) -> i32 {
    (value * Q16_ONE as f32) as i32
}

/// Converts `signal` to Q16.16, writing the result to the first
/// `signal.len()` elements of `result`.
pub fn convert_signal(signal: &[i16], result: &mut [i32]) {
    for (target, sample) in result.iter_mut().zip(signal.iter()) {
        *target = to_q16(*sample);
    }
}
