use core::ops::{Add, Neg, Sub};

use num_bigint::BigUint;

/// Bit access for scalar multiplication, least significant bit first.
pub trait ScalarBits {
    fn bit_len(&self) -> u64;
    fn bit_at(&self, index: u64) -> bool;
}

impl ScalarBits for BigUint {
    #[inline]
    fn bit_len(&self) -> u64 {
        self.bits()
    }

    #[inline]
    fn bit_at(&self, index: u64) -> bool {
        self.bit(index)
    }
}

pub trait Group: Sized + Clone + PartialEq + Add<Output = Self> + Sub<Output = Self> + Neg<Output = Self> {
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Double-and-add, least significant bit first.
    #[inline]
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        let mut result = Self::identity();
        let mut temp = self.clone();

        for i in 0..scalar.bit_len() {
            if scalar.bit_at(i) {
                result = result + temp.clone();
            }
            temp = temp.double();
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        if n == 0 {
            return Self::identity();
        }
        if n == 1 {
            return self.clone();
        }

        let mut result = Self::identity();
        let mut temp = self.clone();
        let mut bits = n;

        while bits > 0 {
            if bits & 1 == 1 {
                result = result + temp.clone();
            }
            temp = temp.double();
            bits >>= 1;
        }

        result
    }
}
