//! EdDSA over BabyJubJub with a Pedersen-hash challenge.
//!
//! This library implements the signature scheme used to authorize orders on
//! a zkSNARK-based exchange:
//! - Keys and nonces live on the BabyJubJub curve (see the `curve` crate)
//! - The Fiat-Shamir challenge is a windowed Pedersen hash (see `pedersen`)
//! - Messages are bit vectors built with [`BitArray`]
//!
//! Signing is deterministic: the nonce is derived from the secret key and the
//! message with BLAKE-512.
//!
//! # Example
//!
//! ```
//! use eddsa::{generate_key_pair, verify, BitArray};
//!
//! let key_pair = generate_key_pair("my wallet signature");
//!
//! let mut message = BitArray::new();
//! message.add_number(1, 32);
//! message.add_string("100000000000000000000", 96, 10).expect("decimal");
//! message.add_bool(true);
//!
//! let signed = key_pair.sign(message.bits()).expect("signing failed");
//! assert!(verify(message.bits(), &signed.signature, key_pair.public_key()));
//!
//! let packed = signed.signature.pack().expect("fits");
//! assert_eq!(packed.len(), 64);
//! ```

mod bitarray;
pub mod constants;
mod errors;
mod keys;
mod order;
mod signatures;

#[cfg(test)]
mod tests;

pub use bitarray::{BitArray, bits_to_le_bytes, hash_code, read_bits};
pub use errors::EdDsaError;
pub use keys::{KeyPair, generate_key_pair, prv2pub};
pub use order::OrderMessage;
pub use signatures::{Signature, SignatureWithHash, challenge, sign, verify};
