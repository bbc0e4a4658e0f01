//! # real48
//!
//! A codec for the 48-bit packed floating-point format: a 6-byte binary
//! representation with 1 sign bit, 8 exponent bits, and 39 mantissa bits,
//! compatible with legacy numeric storage that predates IEEE double
//! precision.
//!
//! The crate provides:
//!
//! - **Exact wire format**: the 6-byte little-endian layout is bit-exact with
//!   data produced by the original format
//! - **Round-trip correct conversion** to and from `f32`/`f64`, with
//!   half-up mantissa rounding and carry propagation into the exponent
//! - **Explicit range failures**: values outside the representable domain
//!   return an error instead of clamping or saturating
//! - **Thin arithmetic layer**: `+ - * /` promote to `f64`, operate there,
//!   and re-encode
//!
//! ## Examples
//!
//! ```rust
//! use real48::{Real48, ConvertError};
//!
//! // Encode an f64 (fallible: the packed range is narrower than f64's)
//! let value = Real48::try_from(123.456_f64)?;
//!
//! // The 6-byte wire form
//! let bytes: [u8; 6] = value.to_bytes();
//! let same = Real48::from_bytes(bytes);
//!
//! // Decoding to f64 is total
//! let d: f64 = value.into();
//! assert!((d - 123.456).abs() < 1e-9);
//!
//! // NaN and infinity have no packed representation
//! assert_eq!(Real48::try_from(f64::NAN), Err(ConvertError::Unrepresentable));
//! # Ok::<(), ConvertError>(())
//! ```
//!
//! ## Format Overview
//!
//! The value is a little-endian 48-bit word with three bit-fields:
//!
//! - **exponent** (bits 0-7): biased exponent; 0 always means the value zero
//! - **mantissa** (bits 8-46): 39-bit normalized fraction, implicit leading one
//! - **sign** (bit 47): 1 for negative
//!
//! The exponent bias differs from both IEEE float (127) and double (1023):
//! the packed exponent equals the unbiased exponent plus 129. Denormals,
//! NaN, and infinities are not representable; subnormal inputs collapse to
//! zero and non-finite inputs are rejected.

pub(crate) mod decoder;
pub(crate) mod encoder;
pub(crate) mod error;
pub(crate) mod parts;
pub(crate) mod real48;

// Re-export main types and functions
pub use crate::real48::{Class, Real48};
pub use decoder::{decode_f32, decode_f64};
pub use encoder::{encode_f32, encode_f64};
pub use error::{ConvertError, ConvertResult};
pub use parts::Real48Parts;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let value = Real48::try_from(123.456_f64).unwrap();
        let bytes = value.to_bytes();
        let decoded = Real48::from_bytes(bytes);

        assert_eq!(value, decoded);
        assert_eq!(encode_f64(decode_f64(decoded)).unwrap(), value);
    }

    #[test]
    fn test_comparison_matches_f64() {
        let numbers = [-100.0, -10.0, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 10.0];

        let packed: Vec<Real48> = numbers
            .iter()
            .map(|&v| Real48::try_from(v).unwrap())
            .collect();

        for i in 1..packed.len() {
            assert!(
                packed[i - 1] < packed[i],
                "Order not preserved: {} < {} failed",
                numbers[i - 1],
                numbers[i]
            );
        }
    }

    #[test]
    fn test_free_functions_match_trait_impls() {
        let v = 42.5_f64;
        assert_eq!(encode_f64(v).unwrap(), Real48::try_from(v).unwrap());
        let packed = encode_f64(v).unwrap();
        assert_eq!(decode_f64(packed), f64::from(packed));
        assert_eq!(decode_f32(packed).unwrap(), f32::try_from(packed).unwrap());
    }

    #[test]
    fn test_wire_form_is_six_bytes() {
        assert_eq!(std::mem::size_of::<Real48>(), 6);
    }
}
