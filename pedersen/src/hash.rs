//! Windowed Pedersen hash over BabyJubJub.
//!
//! The input is cut into segments of 186 bits, one per generator. Each
//! segment is read as 62 windows of three bits `(b0, b1, sign)` and folded
//! into a signed scalar
//!
//! ```text
//! escalar = sum_w (-1)^sign_w * (1 + b0_w + 2*b1_w) * 2^(4w)
//! ```
//!
//! which is reduced into `[0, subOrder)` and multiplies the segment's
//! generator. The hash is the x-coordinate of the sum over all segments.
//! Windows cut short at the end of the input use the bits that are present;
//! a missing sign bit counts as positive.
//!
//! The hash is not length-injective: trailing zero bits that only fill the
//! magnitude or sign slots of a final partial window do not change the
//! result, so `[1]`, `[1, 0]` and `[1, 0, 0]` collide. Callers hash messages
//! of a fixed layout.

use curve::{multi_scalar_mul, sub_order, Affine, BaseField, BigUint};
use num_bigint::{BigInt, Sign};
use num_traits::{One, Signed, Zero};

use crate::constants::{BITS_PER_SEGMENT, MAX_INPUT_BITS, WINDOW_SIZE};
use crate::errors::PedersenError;
use crate::generators::generator;

/// Hash a bit vector to a field element.
pub fn hash_bits(bits: &[bool]) -> Result<BaseField, PedersenError> {
    Ok(hash_to_point(bits)?.x)
}

/// Hash a bit vector to the accumulated curve point.
///
/// Fails with [`PedersenError::InputTooLong`] for more than 2976 bits. The
/// empty input maps to the identity.
pub fn hash_to_point(bits: &[bool]) -> Result<Affine, PedersenError> {
    if bits.len() > MAX_INPUT_BITS {
        return Err(PedersenError::InputTooLong {
            bits: bits.len(),
            max: MAX_INPUT_BITS,
        });
    }

    let _span = tracing::trace_span!("pedersen_hash", bits = bits.len()).entered();

    let mut points = Vec::with_capacity(bits.len().div_ceil(BITS_PER_SEGMENT));
    let mut scalars = Vec::with_capacity(points.capacity());
    for (index, segment) in bits.chunks(BITS_PER_SEGMENT).enumerate() {
        points.push(generator(index)?.clone());
        scalars.push(segment_scalar(segment));
    }

    Ok(multi_scalar_mul(&points, &scalars)?)
}

/// Fold one segment into its scalar, normalized into `[0, subOrder)`.
pub fn segment_scalar(segment: &[bool]) -> BigUint {
    let mut escalar = BigInt::zero();
    let mut exp = BigInt::one();

    for window in segment.chunks(WINDOW_SIZE) {
        let (magnitude, negative) = match window.split_at_checked(WINDOW_SIZE - 1) {
            Some((magnitude, [sign])) => (magnitude, *sign),
            _ => (window, false),
        };

        let mut acc: i64 = 1;
        for (b, &bit) in magnitude.iter().enumerate() {
            if bit {
                acc += 1 << b;
            }
        }
        if negative {
            acc = -acc;
        }

        escalar += BigInt::from(acc) * &exp;
        exp <<= WINDOW_SIZE + 1;
    }

    if escalar.is_negative() {
        escalar += BigInt::from_biguint(Sign::Plus, sub_order().clone());
    }

    let (_, magnitude) = escalar.into_parts();
    magnitude
}
