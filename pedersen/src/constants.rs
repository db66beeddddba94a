//! Parameters of the windowed Pedersen hash.
//!
//! These values, together with the generator table, define the hash; any
//! circuit verifying it is built against exactly these numbers.

/// Bits per window: two magnitude bits followed by one sign bit.
pub const WINDOW_SIZE: usize = 3;

/// Windows folded into a single scalar before moving to the next generator.
pub const WINDOWS_PER_SEGMENT: usize = 62;

/// Bits consumed by one generator point.
pub const BITS_PER_SEGMENT: usize = WINDOW_SIZE * WINDOWS_PER_SEGMENT;

/// Number of precomputed generator points.
pub const GENERATOR_COUNT: usize = 16;

/// Longest input the generator table can absorb: 16 * 186 = 2976 bits.
pub const MAX_INPUT_BITS: usize = GENERATOR_COUNT * BITS_PER_SEGMENT;

/// Domain name the generator table was derived from.
pub const GENERATOR_DOMAIN: &str = "EdDSA_Verify.RAM";

/// Longest domain name accepted by [`crate::derive_generator`].
pub const MAX_DOMAIN_LEN: usize = 28;
