//! Decoding from the packed 48-bit format back to IEEE-754 values.
//!
//! Decoding to [`f64`] is total: every 6-byte pattern maps to a finite double
//! (any zero-exponent pattern decodes to `0.0`). Decoding to [`f32`] can fail
//! because the packed dynamic range exceeds single precision on both ends.

use crate::error::{ConvertError, ConvertResult};
use crate::parts::{F32_EXP_OFFSET, F64_EXP_OFFSET};
use crate::real48::Real48;

/// Decode a packed value into an [`f64`].
///
/// The 39-bit mantissa widens exactly into the 52-bit field, so this is
/// lossless and never fails.
#[must_use]
pub fn decode_f64(value: Real48) -> f64 {
    let parts = value.parts();
    if parts.exponent == 0 {
        return 0.0;
    }

    let biased_exp = u64::from(parts.exponent) + F64_EXP_OFFSET as u64;
    let bits = (parts.sign as u64) << 63 | biased_exp << 52 | parts.mantissa << 13;
    f64::from_bits(bits)
}

/// Decode a packed value into an [`f32`].
///
/// The 39-bit mantissa is rounded half-up to 23 bits; a rounding carry out of
/// the mantissa increments the exponent.
///
/// # Errors
///
/// - [`ConvertError::Underflow`] if the value is too small for a normalized
///   float.
/// - [`ConvertError::Overflow`] if the rebiased exponent reaches the float
///   infinity/NaN exponent, including by rounding carry.
pub fn decode_f32(value: Real48) -> ConvertResult<f32> {
    let parts = value.parts();
    if parts.exponent == 0 {
        return Ok(0.0);
    }

    let mut biased_exp = i32::from(parts.exponent) - F32_EXP_OFFSET;
    if biased_exp <= 0 {
        return Err(ConvertError::Underflow);
    }
    if biased_exp >= 255 {
        return Err(ConvertError::Overflow);
    }

    // 39 -> 23 bits, round half up on the 16 discarded bits
    let mut mantissa = (parts.mantissa + (1 << 15)) >> 16;
    if mantissa == 1 << 23 {
        mantissa = 0;
        biased_exp += 1;
        if biased_exp >= 255 {
            return Err(ConvertError::Overflow);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bits = u32::from(parts.sign) << 31 | (biased_exp as u32) << 23 | mantissa as u32;
    Ok(f32::from_bits(bits))
}
