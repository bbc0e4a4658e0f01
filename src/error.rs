use thiserror::Error;

/// Errors that can occur when converting to or from the packed 48-bit format
///
/// All variants are deterministic domain-range failures: retrying the same
/// conversion always fails the same way.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    #[error("value is NaN or infinite and cannot be packed")]
    Unrepresentable,

    #[error("magnitude too small for a normalized exponent field")]
    Underflow,

    #[error("rebiased exponent exceeds the field maximum")]
    Overflow,
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
