use thiserror::Error;

/// Errors raised by the Pedersen hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PedersenError {
    /// The input needs more segments than there are generator points.
    #[error("input of {bits} bits exceeds the {max}-bit capacity of the generator table")]
    InputTooLong { bits: usize, max: usize },

    /// A generator index past the end of the table was requested.
    #[error("generator index {index} is out of range (table holds {len})")]
    GeneratorOutOfRange { index: usize, len: usize },

    /// A domain name for generator derivation is longer than 28 bytes.
    #[error("generator domain {domain:?} is longer than {max} bytes")]
    DomainTooLong { domain: String, max: usize },

    #[error(transparent)]
    Curve(#[from] curve::CurveError),
}
