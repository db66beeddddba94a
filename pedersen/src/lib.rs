//! Windowed Pedersen hash over the BabyJubJub curve.
//!
//! Maps a bit vector of up to 2976 bits to a field element using only curve
//! arithmetic, which keeps the hash cheap to check inside a SNARK circuit.
//! Window size, segment length and the 16-point generator table are fixed;
//! changing any of them changes every hash.
//!
//! # Example
//!
//! ```
//! let bits = [true, false, true];
//! let digest = pedersen::hash_bits(&bits).expect("short input");
//! assert_eq!(
//!     digest.to_string(),
//!     "21187062188745369963716405328945101183404659236128804506128958095263671921311"
//! );
//! ```

pub mod constants;
mod errors;
mod generators;
mod hash;

#[cfg(test)]
mod tests;

pub use errors::PedersenError;
pub use generators::{derive_generator, generator, generators};
pub use hash::{hash_bits, hash_to_point, segment_scalar};
