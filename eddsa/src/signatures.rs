//! Signing, verification and the packed signature format.
//!
//! The challenge is the Pedersen hash of `R8.x || A.x || message`, with both
//! coordinates written as 254 bits, least significant first. The nonce is
//! derived from the secret key and the message, so signing is deterministic.

use curve::{
    Affine, BigUint, PACKED_POINT_SIZE, mod_order, mod_sub_order, multi_scalar_mul, order,
    parse_scalar, scalar_from_le_bytes, scalar_to_le_bytes,
};
use serde::{Deserialize, Serialize};

use crate::bitarray::{BitArray, bits_to_le_bytes};
use crate::constants::{COORDINATE_BITS, SIG_SIZE, SK_SIZE};
use crate::errors::EdDsaError;
use crate::keys::blake512;

/// An EdDSA signature `(R8, S)`.
///
/// Valid signatures satisfy `S * Base8 == R8 + hash * A` where `A` is the
/// signer's public key and `hash` is the Pedersen challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// The commitment `r * Base8`.
    pub r8: Affine,
    /// The response `r + hash * secret_key mod order`.
    #[serde(with = "curve::serde_decimal")]
    pub s: BigUint,
}

/// A freshly produced signature together with the challenge it was computed
/// against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureWithHash {
    pub signature: Signature,
    #[serde(with = "curve::serde_decimal")]
    pub hash: BigUint,
}

impl Signature {
    pub fn rx(&self) -> String {
        self.r8.x.to_string()
    }

    pub fn ry(&self) -> String {
        self.r8.y.to_string()
    }

    pub fn s_decimal(&self) -> String {
        self.s.to_string()
    }

    /// Encode as 64 bytes: compressed `R8` followed by `S` little-endian.
    ///
    /// Fails only for an `S` that does not fit into 32 bytes, which signing
    /// never produces.
    pub fn pack(&self) -> Result<[u8; SIG_SIZE], EdDsaError> {
        let s = scalar_to_le_bytes(&self.s, SIG_SIZE - PACKED_POINT_SIZE)
            .map_err(|_| EdDsaError::ScalarTooWide)?;

        let mut out = [0u8; SIG_SIZE];
        out[..PACKED_POINT_SIZE].copy_from_slice(&self.r8.pack());
        out[PACKED_POINT_SIZE..].copy_from_slice(&s);
        Ok(out)
    }

    /// Decode the 64-byte form.
    ///
    /// Rejects a malformed `R8` encoding and `S >= order`. Subgroup
    /// membership of `R8` is checked by [`verify`].
    pub fn unpack(bytes: &[u8]) -> Result<Self, EdDsaError> {
        if bytes.len() != SIG_SIZE {
            return Err(EdDsaError::InvalidSignatureLength {
                expected: SIG_SIZE,
                actual: bytes.len(),
            });
        }

        let (r8, s) = bytes.split_at(PACKED_POINT_SIZE);
        let r8 = Affine::unpack(r8)?;
        let s = scalar_from_le_bytes(s);
        if s >= *order() {
            return Err(EdDsaError::NonCanonicalScalar);
        }
        Ok(Self { r8, s })
    }
}

/// Pedersen challenge over `R8.x || A.x || message`.
pub fn challenge(r8: &Affine, public_key: &Affine, message: &[bool]) -> Result<BigUint, EdDsaError> {
    let mut input = BitArray::new();
    input.add_bn(&r8.x.to_biguint(), COORDINATE_BITS);
    input.add_bn(&public_key.x.to_biguint(), COORDINATE_BITS);

    let mut bits = input.into_bits();
    bits.extend_from_slice(message);

    Ok(pedersen::hash_bits(&bits)?.into_biguint())
}

/// Sign a bit message with a secret key given as a decimal string.
///
/// # Example
///
/// ```
/// use eddsa::{sign, verify, BitArray, KeyPair};
/// use curve::BigUint;
///
/// let mut message = BitArray::new();
/// message.add_number(42, 8);
///
/// let signed = sign("1234", message.bits()).expect("sign");
/// let key_pair = KeyPair::from_secret_key(BigUint::from(1234u32));
/// assert!(verify(message.bits(), &signed.signature, key_pair.public_key()));
/// ```
pub fn sign(secret_key: &str, message: &[bool]) -> Result<SignatureWithHash, EdDsaError> {
    let secret_key = parse_scalar(secret_key, 10).map_err(|_| EdDsaError::InvalidSecretKey)?;
    sign_with_scalar(&secret_key, message)
}

pub(crate) fn sign_with_scalar(
    secret_key: &BigUint,
    message: &[bool],
) -> Result<SignatureWithHash, EdDsaError> {
    let prv = scalar_to_le_bytes(secret_key, SK_SIZE)
        .map_err(|_| EdDsaError::SecretKeyTooWide { max: SK_SIZE })?;

    let h1 = blake512(&[prv.as_slice()]);
    let nonce_digest = blake512(&[&h1[32..], bits_to_le_bytes(message).as_slice()]);
    let r = mod_sub_order(&scalar_from_le_bytes(&nonce_digest));

    let public_key = Affine::mul_base8(secret_key);
    let r8 = Affine::mul_base8(&r);

    let hash = challenge(&r8, &public_key, message)?;
    let s = mod_order(&(r + &hash * secret_key));

    tracing::debug!(message_bits = message.len(), "signed message");
    Ok(SignatureWithHash {
        signature: Signature { r8, s },
        hash,
    })
}

/// Check a signature against a bit message and a public key.
///
/// Returns `false` for anything that is not a valid signature: points off
/// the curve or outside the prime subgroup, `S >= order`, or messages the
/// challenge hash cannot absorb.
///
/// `S` is accepted anywhere below the full curve order because that is the
/// range signing reduces into: the reference order signature (`S =
/// 16970772901820232512732011461786056089500078926541109484130046165312890585770`)
/// lies above subOrder. Since `Base8` has order subOrder, `S` and
/// `S + k * subOrder` below the curve order verify alike. Callers that
/// deduplicate signatures by their bytes must compare `S mod subOrder`.
pub fn verify(message: &[bool], signature: &Signature, public_key: &Affine) -> bool {
    if !signature.r8.is_valid() {
        tracing::debug!("rejecting signature: R8 is not a valid point");
        return false;
    }
    if !public_key.is_valid() {
        tracing::debug!("rejecting signature: public key is not a valid point");
        return false;
    }
    if signature.s >= *order() {
        tracing::debug!("rejecting signature: S is not below the curve order");
        return false;
    }

    let hash = match challenge(&signature.r8, public_key, message) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::debug!(%err, "rejecting signature: challenge failed");
            return false;
        }
    };

    // S * Base8 - hash * A == R8
    let points = [Affine::base8(), public_key.negate()];
    let scalars = [signature.s.clone(), hash];
    match multi_scalar_mul(&points, &scalars) {
        Ok(lhs) => lhs == signature.r8,
        Err(err) => {
            tracing::debug!(%err, "rejecting signature");
            false
        }
    }
}
