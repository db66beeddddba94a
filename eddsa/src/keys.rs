//! Key pairs for the EdDSA scheme.
//!
//! Two derivations exist and they are not interchangeable:
//! - [`generate_key_pair`] turns a wallet seed string into a key pair through
//!   a 32-bit string hash. This is how trading keys are derived from a
//!   wallet signature.
//! - [`prv2pub`] derives a public key from raw private key bytes the way
//!   classic EdDSA does: BLAKE-512, prune, shift off the cofactor.

use blake_hash::{Blake512, Digest};
use curve::{Affine, BigUint, mod_sub_order, random_scalar, scalar_from_le_bytes};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::bitarray::hash_code;
use crate::errors::EdDsaError;
use crate::signatures::{SignatureWithHash, sign_with_scalar};

/// A secret scalar and the matching public point `secret_key * Base8`.
///
/// # Example
///
/// ```
/// use eddsa::generate_key_pair;
///
/// let key_pair = generate_key_pair("0xE20cF871f1646d8651ee9dC95AAB1d93160b3467Abc!12345");
/// assert_eq!(key_pair.secret_key_decimal(), "1268930117");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    #[serde(with = "curve::serde_decimal")]
    secret_key: BigUint,
    public_key: Affine,
}

impl KeyPair {
    /// Build a key pair from a secret scalar. The scalar is used as given.
    pub fn from_secret_key(secret_key: BigUint) -> Self {
        let public_key = Affine::mul_base8(&secret_key);
        Self {
            secret_key,
            public_key,
        }
    }

    /// Sample a secret scalar uniformly from `[1, subOrder)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_secret_key(random_scalar(rng))
    }

    pub fn secret_key(&self) -> &BigUint {
        &self.secret_key
    }

    pub fn public_key(&self) -> &Affine {
        &self.public_key
    }

    pub fn secret_key_decimal(&self) -> String {
        self.secret_key.to_string()
    }

    pub fn public_key_x(&self) -> String {
        self.public_key.x.to_string()
    }

    pub fn public_key_y(&self) -> String {
        self.public_key.y.to_string()
    }

    /// Sign a bit message with this key. See [`crate::sign`].
    pub fn sign(&self, message: &[bool]) -> Result<SignatureWithHash, EdDsaError> {
        sign_with_scalar(&self.secret_key, message)
    }
}

/// Derive a key pair from a seed string.
///
/// `secret_key = hash_code(seed) mod subOrder`. The string hash only has 2^31
/// outputs, so the seed must already carry the entropy (in practice it is
/// derived from a wallet signature).
pub fn generate_key_pair(seed: &str) -> KeyPair {
    let secret_key = mod_sub_order(&hash_code(seed));
    tracing::debug!(seed_len = seed.len(), "derived key pair from seed");
    KeyPair::from_secret_key(secret_key)
}

/// Public key of raw private key bytes.
///
/// The lower half of `blake512(prv)` is pruned (low three bits of byte 0
/// cleared, bit 7 of byte 31 cleared, bit 6 set), read little-endian,
/// shifted right by three and multiplied by `Base8`.
pub fn prv2pub(prv: &[u8]) -> Affine {
    let digest = blake512(&[prv]);
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&digest[..32]);
    prune_buffer(&mut buf);

    let scalar = scalar_from_le_bytes(&buf) >> 3u32;
    Affine::mul_base8(&scalar)
}

fn prune_buffer(buf: &mut [u8; 32]) {
    buf[0] &= 0xF8;
    buf[31] &= 0x7F;
    buf[31] |= 0x40;
}

/// BLAKE-512 (the SHA-3 finalist, not BLAKE2b) over the concatenation of
/// `parts`.
pub(crate) fn blake512(parts: &[&[u8]]) -> [u8; 64] {
    let mut hasher = Blake512::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&hasher.finalize());
    out
}
