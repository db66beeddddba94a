//! Scalars for BabyJubJub.
//!
//! Scalars are plain `BigUint`s. Two moduli are in play: the full curve
//! order (`order = 8 * subOrder`) and the prime order of the subgroup
//! generated by `Base8`. The helpers here make the choice explicit at every
//! call site.

use std::sync::LazyLock;

use num_bigint::BigUint;
use num_traits::Num;

use crate::errors::CurveError;

static ORDER: LazyLock<BigUint> = LazyLock::new(|| {
    decimal_const("21888242871839275222246405745257275088614511777268538073601725287587578984328")
});

static SUB_ORDER: LazyLock<BigUint> = LazyLock::new(|| &*ORDER >> 3u32);

/// Cofactor of the curve: `order = COFACTOR * subOrder`.
pub const COFACTOR: u64 = 8;

/// Parse a decimal literal that is part of the curve definition.
pub(crate) fn decimal_const(literal: &str) -> BigUint {
    BigUint::parse_bytes(literal.as_bytes(), 10).expect("curve constant is a decimal literal")
}

/// Number of points on the curve.
#[inline]
pub fn order() -> &'static BigUint {
    &ORDER
}

/// Prime order of the subgroup generated by `Base8`.
#[inline]
pub fn sub_order() -> &'static BigUint {
    &SUB_ORDER
}

#[inline]
pub fn mod_order(value: &BigUint) -> BigUint {
    value % &*ORDER
}

#[inline]
pub fn mod_sub_order(value: &BigUint) -> BigUint {
    value % &*SUB_ORDER
}

/// Parse an unsigned integer in the given radix.
pub fn parse_scalar(literal: &str, radix: u32) -> Result<BigUint, CurveError> {
    let invalid = || CurveError::InvalidNumber {
        literal: literal.to_string(),
        radix,
    };
    if !(2..=36).contains(&radix) {
        return Err(invalid());
    }
    BigUint::from_str_radix(literal.trim(), radix).map_err(|_| invalid())
}

/// Interpret bytes as a little-endian unsigned integer.
#[inline]
pub fn scalar_from_le_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_le(bytes)
}

/// Encode `value` as exactly `length` little-endian bytes, zero padded.
pub fn scalar_to_le_bytes(value: &BigUint, length: usize) -> Result<Vec<u8>, CurveError> {
    let mut bytes = value.to_bytes_le();
    // to_bytes_le yields [0] for zero
    if value.bits() == 0 {
        bytes.clear();
    }
    if bytes.len() > length {
        return Err(CurveError::ValueTooWide {
            needed: bytes.len(),
            available: length,
        });
    }
    bytes.resize(length, 0);
    Ok(bytes)
}

/// The lowest `length` bits of `value`, least significant first.
pub fn scalar_to_bits_le(value: &BigUint, length: usize) -> Vec<bool> {
    (0..length as u64).map(|i| value.bit(i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_eight_times_sub_order() {
        assert_eq!(sub_order() * COFACTOR, *order());
        assert_eq!(
            sub_order().to_string(),
            "2736030358979909402780800718157159386076813972158567259200215660948447373041"
        );
    }

    #[test]
    fn test_moduli_differ() {
        let v = sub_order() + 5u32;
        assert_eq!(mod_sub_order(&v), BigUint::from(5u32));
        assert_eq!(mod_order(&v), v);
    }

    #[test]
    fn test_parse_scalar() {
        assert_eq!(parse_scalar("255", 10), Ok(BigUint::from(255u32)));
        assert_eq!(parse_scalar("ff", 16), Ok(BigUint::from(255u32)));
        assert!(parse_scalar("-1", 10).is_err());
        assert!(parse_scalar("", 10).is_err());
        assert!(parse_scalar("12", 1).is_err());
    }

    #[test]
    fn test_le_bytes_round_trip() {
        let v = BigUint::from(0x0a0b0cu32);
        let bytes = scalar_to_le_bytes(&v, 32).expect("fits");
        assert_eq!(bytes.len(), 32);
        assert_eq!(&bytes[..3], &[0x0c, 0x0b, 0x0a]);
        assert_eq!(scalar_from_le_bytes(&bytes), v);
    }

    #[test]
    fn test_le_bytes_zero_and_overflow() {
        let zero = scalar_to_le_bytes(&BigUint::from(0u32), 4).expect("fits");
        assert_eq!(zero, vec![0, 0, 0, 0]);

        let wide = BigUint::from(1u32) << 32u32;
        assert_eq!(
            scalar_to_le_bytes(&wide, 4),
            Err(CurveError::ValueTooWide {
                needed: 5,
                available: 4
            })
        );
    }

    #[test]
    fn test_bits_le() {
        let bits = scalar_to_bits_le(&BigUint::from(0b1101u32), 6);
        assert_eq!(bits, vec![true, false, true, true, false, false]);
    }
}
