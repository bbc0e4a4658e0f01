//! Bit-level layout of the packed 48-bit word.
//!
//! The word is stored as 6 little-endian bytes:
//!
//! - bits `[0:8)`  — biased exponent (0 means the value zero)
//! - bits `[8:47)` — 39-bit mantissa (normalized, implicit leading one)
//! - bit  `47`     — sign
//!
//! This module is the only place these offsets appear; everything else works
//! on [`Real48Parts`].

/// Mask for the 39-bit mantissa field
pub(crate) const MANTISSA_MASK: u64 = (1 << 39) - 1;

/// Offset between a biased f64 exponent and the packed exponent (1023 - 129)
pub(crate) const F64_EXP_OFFSET: i32 = 894;

/// Offset between the packed exponent and a biased f32 exponent (129 - 127)
pub(crate) const F32_EXP_OFFSET: i32 = 2;

/// Semantic fields of a packed value
///
/// `mantissa` holds only the stored fraction bits; the implicit leading one is
/// not included. `exponent == 0` denotes zero and the other fields are
/// ignored on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Real48Parts {
    pub sign: bool,
    pub exponent: u8,
    pub mantissa: u64,
}

impl Real48Parts {
    /// Pack the fields into the 6-byte little-endian word
    #[must_use]
    pub const fn pack(self) -> [u8; 6] {
        let word = self.exponent as u64
            | (self.mantissa & MANTISSA_MASK) << 8
            | (self.sign as u64) << 47;
        [
            word as u8,
            (word >> 8) as u8,
            (word >> 16) as u8,
            (word >> 24) as u8,
            (word >> 32) as u8,
            (word >> 40) as u8,
        ]
    }

    /// Unpack the fields from the 6-byte little-endian word
    #[must_use]
    pub const fn unpack(bytes: [u8; 6]) -> Self {
        let word = bytes[0] as u64
            | (bytes[1] as u64) << 8
            | (bytes[2] as u64) << 16
            | (bytes[3] as u64) << 24
            | (bytes[4] as u64) << 32
            | (bytes[5] as u64) << 40;
        Self {
            sign: (word >> 47) & 1 != 0,
            exponent: word as u8,
            mantissa: (word >> 8) & MANTISSA_MASK,
        }
    }
}
