//! Encoding from IEEE-754 values into the packed 48-bit format.
//!
//! The packed exponent bias sits between the float and double biases: a
//! normalized double maps with `packed = biased_f64_exponent - 894` and a
//! normalized float with `packed = biased_f32_exponent + 2`. The 39-bit
//! mantissa field is narrower than a double's 52 bits (round half up) and
//! wider than a float's 23 bits (exact widening).

use crate::error::{ConvertError, ConvertResult};
use crate::parts::{Real48Parts, F32_EXP_OFFSET, F64_EXP_OFFSET};
use crate::real48::Real48;

/// Encode an [`f64`] into the packed format.
///
/// Zero and subnormal inputs collapse to the canonical zero word. The 52-bit
/// mantissa is rounded half-up to 39 bits; a rounding carry out of the
/// mantissa increments the exponent.
///
/// # Errors
///
/// - [`ConvertError::Unrepresentable`] if `value` is NaN or infinite.
/// - [`ConvertError::Underflow`] if the rebiased exponent is ≤ 0.
/// - [`ConvertError::Overflow`] if the rebiased exponent exceeds 255,
///   including by rounding carry.
pub fn encode_f64(value: f64) -> ConvertResult<Real48> {
    if !value.is_finite() {
        return Err(ConvertError::Unrepresentable);
    }

    let bits = value.to_bits();
    let sign = (bits >> 63) != 0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let biased_exp = ((bits >> 52) & 0x7FF) as i32;
    let mantissa52 = bits & ((1 << 52) - 1);

    if biased_exp == 0 {
        return Ok(Real48::ZERO);
    }

    let mut exponent = biased_exp - F64_EXP_OFFSET;
    if exponent <= 0 {
        return Err(ConvertError::Underflow);
    }
    if exponent > 255 {
        return Err(ConvertError::Overflow);
    }

    // 52 -> 39 bits, round half up on the 13 discarded bits
    let mut mantissa = (mantissa52 + (1 << 12)) >> 13;
    if mantissa == 1 << 39 {
        mantissa = 0;
        exponent += 1;
        if exponent > 255 {
            return Err(ConvertError::Overflow);
        }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let exponent = exponent as u8;
    Ok(Real48::from_parts(Real48Parts {
        sign,
        exponent,
        mantissa,
    }))
}

/// Encode an [`f32`] into the packed format.
///
/// Zero and subnormal inputs collapse to the canonical zero word. The 23-bit
/// mantissa widens exactly into the 39-bit field, so no rounding occurs on
/// this path.
///
/// # Errors
///
/// - [`ConvertError::Unrepresentable`] if `value` is NaN or infinite.
/// - [`ConvertError::Underflow`] if the rebiased exponent is ≤ 0.
/// - [`ConvertError::Overflow`] if the rebiased exponent exceeds 255.
pub fn encode_f32(value: f32) -> ConvertResult<Real48> {
    if !value.is_finite() {
        return Err(ConvertError::Unrepresentable);
    }

    let bits = value.to_bits();
    let sign = (bits >> 31) != 0;
    #[allow(clippy::cast_possible_wrap)]
    let biased_exp = ((bits >> 23) & 0xFF) as i32;
    let mantissa23 = bits & ((1 << 23) - 1);

    if biased_exp == 0 {
        return Ok(Real48::ZERO);
    }

    let exponent = biased_exp + F32_EXP_OFFSET;
    if exponent <= 0 {
        return Err(ConvertError::Underflow);
    }
    if exponent > 255 {
        return Err(ConvertError::Overflow);
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let exponent = exponent as u8;
    Ok(Real48::from_parts(Real48Parts {
        sign,
        exponent,
        mantissa: u64::from(mantissa23) << 16,
    }))
}
