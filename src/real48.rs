use crate::decoder::{decode_f32, decode_f64};
use crate::encoder::{encode_f32, encode_f64};
use crate::error::{ConvertError, ConvertResult};
use crate::parts::{Real48Parts, MANTISSA_MASK};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Classification of a packed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Zero,
    Normal,
}

/// A 48-bit packed floating-point number
///
/// This struct stores the value as its 6-byte little-endian wire form,
/// providing:
/// - Zero-copy access via `as_bytes()`
/// - Trivial copy semantics (no identity beyond the 6 bytes)
/// - Bit-exact interchange with data produced by the original format
///
/// To access semantic fields (sign, exponent, mantissa), use `parts()`.
///
/// # Equality and ordering semantics
///
/// [`PartialEq`] and [`PartialOrd`] compare the *decoded* numeric values, not
/// the raw bytes: every pattern with a zero exponent field compares equal to
/// canonical zero. The format cannot represent NaN, so comparison is in fact
/// total, but the float-like `Partial*` traits keep the API aligned with
/// `f32`/`f64` call sites.
///
/// # Arithmetic
///
/// `+ - * /` promote both operands to `f64`, operate there, and re-encode,
/// so each returns `ConvertResult<Real48>` and surfaces any
/// overflow/underflow from re-encoding at the call site:
///
/// ```rust
/// use real48::Real48;
///
/// let a = Real48::try_from(1.5_f64)?;
/// let b = Real48::try_from(2.25_f64)?;
/// let sum = (a + b)?;
/// assert_eq!(f64::from(sum), 3.75);
/// # Ok::<(), real48::ConvertError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Real48 {
    bytes: [u8; 6],
}

impl Real48 {
    /// The canonical zero value (all six bytes zero)
    pub const ZERO: Self = Self { bytes: [0; 6] };

    /// Smallest positive normal value (exponent 1, mantissa 0), `2^-128`
    pub const MIN_POSITIVE: Self = Self::from_parts(Real48Parts {
        sign: false,
        exponent: 1,
        mantissa: 0,
    });

    /// Largest representable value (exponent 255, mantissa all ones)
    pub const MAX: Self = Self::from_parts(Real48Parts {
        sign: false,
        exponent: 255,
        mantissa: MANTISSA_MASK,
    });

    /// Relative precision constant (exponent 90, mantissa 0), `2^-39`
    pub const EPSILON: Self = Self::from_parts(Real48Parts {
        sign: false,
        exponent: 90,
        mantissa: 0,
    });

    /// Create from the 6-byte wire form
    ///
    /// Every byte pattern is accepted: patterns with a zero exponent field
    /// all decode to `0.0`, so there is nothing to validate.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self { bytes }
    }

    /// Get the 6-byte wire form
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 6] {
        self.bytes
    }

    /// Borrow the 6-byte wire form (zero-copy)
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 6] {
        &self.bytes
    }

    /// Assemble from semantic fields
    pub(crate) const fn from_parts(parts: Real48Parts) -> Self {
        Self {
            bytes: parts.pack(),
        }
    }

    /// Unpack into semantic fields (sign, exponent, mantissa)
    #[must_use]
    pub const fn parts(self) -> Real48Parts {
        Real48Parts::unpack(self.bytes)
    }

    /// Classify based on the exponent field
    #[must_use]
    pub const fn classify(self) -> Class {
        if self.parts().exponent == 0 {
            Class::Zero
        } else {
            Class::Normal
        }
    }

    /// Check if this is zero (any pattern with a zero exponent field)
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self.classify(), Class::Zero)
    }
}

impl TryFrom<f64> for Real48 {
    type Error = ConvertError;

    fn try_from(value: f64) -> ConvertResult<Self> {
        encode_f64(value)
    }
}

impl TryFrom<f32> for Real48 {
    type Error = ConvertError;

    fn try_from(value: f32) -> ConvertResult<Self> {
        encode_f32(value)
    }
}

impl From<Real48> for f64 {
    fn from(value: Real48) -> Self {
        decode_f64(value)
    }
}

impl TryFrom<Real48> for f32 {
    type Error = ConvertError;

    fn try_from(value: Real48) -> ConvertResult<Self> {
        decode_f32(value)
    }
}

impl fmt::Display for Real48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&decode_f64(*self), f)
    }
}

impl PartialEq for Real48 {
    fn eq(&self, other: &Self) -> bool {
        decode_f64(*self) == decode_f64(*other)
    }
}

impl PartialOrd for Real48 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        decode_f64(*self).partial_cmp(&decode_f64(*other))
    }
}

impl Neg for Real48 {
    type Output = Self;

    /// Flip the sign bit. Never fails; negating zero yields canonical zero
    /// rather than a sign-flipped zero-exponent pattern.
    fn neg(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let mut bytes = self.bytes;
        bytes[5] ^= 0x80;
        Self { bytes }
    }
}

// The four operators lower to f64 arithmetic plus re-encoding; the decoded
// operands are always finite, so the only failures are range failures from
// encode_f64 on the result.

impl Add for Real48 {
    type Output = ConvertResult<Self>;

    fn add(self, rhs: Self) -> ConvertResult<Self> {
        encode_f64(decode_f64(self) + decode_f64(rhs))
    }
}

impl Sub for Real48 {
    type Output = ConvertResult<Self>;

    fn sub(self, rhs: Self) -> ConvertResult<Self> {
        encode_f64(decode_f64(self) - decode_f64(rhs))
    }
}

impl Mul for Real48 {
    type Output = ConvertResult<Self>;

    fn mul(self, rhs: Self) -> ConvertResult<Self> {
        encode_f64(decode_f64(self) * decode_f64(rhs))
    }
}

impl Div for Real48 {
    type Output = ConvertResult<Self>;

    fn div(self, rhs: Self) -> ConvertResult<Self> {
        encode_f64(decode_f64(self) / decode_f64(rhs))
    }
}
