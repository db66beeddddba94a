//! Error types for the EdDSA scheme.

use thiserror::Error;

/// Errors that can occur while building messages, deriving keys, signing or
/// decoding signatures.
///
/// Verification does not use this type: a signature that does not check out
/// is reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EdDsaError {
    /// A secret key string is not a decimal integer.
    #[error("secret key is not a decimal integer")]
    InvalidSecretKey,

    /// A secret key does not fit into the 32 bytes hashed by the nonce
    /// derivation.
    #[error("secret key does not fit into {max} bytes")]
    SecretKeyTooWide { max: usize },

    /// A signature scalar does not fit into its 32-byte slot.
    #[error("signature scalar does not fit into 32 bytes")]
    ScalarTooWide,

    /// A packed signature carries `S >= order`.
    #[error("signature scalar is not below the curve order")]
    NonCanonicalScalar,

    /// A packed signature has the wrong length.
    #[error("invalid signature length: expected {expected} bytes, got {actual}")]
    InvalidSignatureLength { expected: usize, actual: usize },

    /// An order field holds a value wider than its slot in the layout.
    #[error("order field {field} does not fit into {width} bits")]
    FieldOverflow { field: &'static str, width: usize },

    #[error(transparent)]
    Curve(#[from] curve::CurveError),

    #[error(transparent)]
    Pedersen(#[from] pedersen::PedersenError),
}
