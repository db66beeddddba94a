//! Error types for the curve crate.

use thiserror::Error;

/// Errors raised while decoding or constructing curve values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A byte string had the wrong length for the value being decoded.
    #[error("invalid encoding length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// The encoded y-coordinate is not reduced modulo the field prime.
    #[error("encoded coordinate is not a canonical field element")]
    NonCanonicalCoordinate,

    /// No x-coordinate exists for the encoded y-coordinate.
    #[error("encoded point is not on the curve")]
    NotOnCurve,

    /// The sign bit is set for x = 0, which has only one encoding.
    #[error("non-canonical sign bit for x = 0")]
    NonCanonicalSign,

    /// A string could not be parsed as an integer in the requested radix.
    #[error("invalid integer literal {literal:?} in base {radix}")]
    InvalidNumber { literal: String, radix: u32 },

    /// A value does not fit into the requested number of bytes.
    #[error("value needs {needed} bytes but only {available} are available")]
    ValueTooWide { needed: usize, available: usize },

    /// Multi-scalar multiplication was given slices of different lengths.
    #[error("points and scalars must have same length ({points} != {scalars})")]
    LengthMismatch { points: usize, scalars: usize },
}
