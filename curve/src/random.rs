use num_bigint::BigUint;
use rand::Rng;

use crate::scalar::sub_order;
use crate::BaseField;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for BaseField {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let mut bytes: [u8; 32] = rng.random();
            // p < 2^254
            bytes[31] &= 0x3f;
            if let Some(value) = BaseField::from_canonical(BigUint::from_bytes_le(&bytes)) {
                return value;
            }
        }
    }
}

/// Uniform scalar in [1, subOrder).
pub fn random_scalar<R: Rng + ?Sized>(rng: &mut R) -> BigUint {
    let bound = sub_order();
    loop {
        let mut bytes: [u8; 32] = rng.random();
        // subOrder < 2^251
        bytes[31] &= 0x07;
        let value = BigUint::from_bytes_le(&bytes);
        if value.bits() > 0 && value < *bound {
            return value;
        }
    }
}
