//! Base field of BabyJubJub: the scalar field of BN254.
//! p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
//!
//! A thin wrapper over `ark_bn254::Fr` that adds the sign convention of the
//! point encoding and the decimal-string serde used on the wire.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::sync::LazyLock;

use ark_bn254::Fr;
use ark_ff::{BigInteger, Field, One, PrimeField, Zero};
use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CurveError;
use crate::scalar::{parse_scalar, scalar_to_bits_le};

static MODULUS: LazyLock<BigUint> = LazyLock::new(|| Fr::MODULUS.into());

/// Field element modulo the BN254 scalar field prime.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseField(Fr);

impl BaseField {
    /// The field modulus p.
    pub fn modulus() -> &'static BigUint {
        &MODULUS
    }

    /// Reduce an arbitrary integer into the field.
    pub fn new(value: BigUint) -> Self {
        BaseField(Fr::from_le_bytes_mod_order(&value.to_bytes_le()))
    }

    /// Wrap an integer that must already be below p.
    pub fn from_canonical(value: BigUint) -> Option<Self> {
        (value < *MODULUS).then(|| Self::new(value))
    }

    /// Parse a decimal literal; values >= p are rejected.
    pub fn from_decimal(literal: &str) -> Result<Self, CurveError> {
        let value = parse_scalar(literal, 10)?;
        Self::from_canonical(value).ok_or(CurveError::NonCanonicalCoordinate)
    }

    #[inline]
    pub fn from_u64(value: u64) -> Self {
        BaseField(Fr::from(value))
    }

    #[inline]
    pub fn zero() -> Self {
        BaseField(Fr::zero())
    }

    #[inline]
    pub fn one() -> Self {
        BaseField(Fr::one())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Canonical integer representative.
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.0.into_bigint().to_bytes_le())
    }

    #[inline]
    pub fn into_biguint(self) -> BigUint {
        self.to_biguint()
    }

    #[inline]
    pub fn square(&self) -> Self {
        BaseField(self.0.square())
    }

    /// `None` for zero.
    pub fn inverse(&self) -> Option<Self> {
        self.0.inverse().map(BaseField)
    }

    /// Zero counts as a square.
    pub fn is_square(&self) -> bool {
        !self.0.legendre().is_qnr()
    }

    /// Either root may be returned.
    pub fn sqrt(&self) -> Option<Self> {
        self.0.sqrt().map(BaseField)
    }

    /// Whether this element lies in the upper half of the field, (p-1)/2 < x.
    /// This is the sign convention of the compressed point encoding.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.into_bigint() > Fr::MODULUS_MINUS_ONE_DIV_TWO
    }

    /// The lowest `length` bits, least significant first.
    pub fn to_bits_le(&self, length: usize) -> Vec<bool> {
        scalar_to_bits_le(&self.to_biguint(), length)
    }

    /// 32-byte little-endian encoding.
    pub fn to_le_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.0.into_bigint().to_bytes_le());
        out
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident) => {
        impl<'a> $imp<&'a BaseField> for &BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: &'a BaseField) -> BaseField {
                BaseField($imp::$method(self.0, rhs.0))
            }
        }

        impl $imp for BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: BaseField) -> BaseField {
                BaseField($imp::$method(self.0, rhs.0))
            }
        }

        impl<'a> $imp<&'a BaseField> for BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: &'a BaseField) -> BaseField {
                BaseField($imp::$method(self.0, rhs.0))
            }
        }

        impl $imp<BaseField> for &BaseField {
            type Output = BaseField;

            #[inline]
            fn $method(self, rhs: BaseField) -> BaseField {
                BaseField($imp::$method(self.0, rhs.0))
            }
        }

        impl $assign_imp for BaseField {
            #[inline]
            fn $assign_method(&mut self, rhs: BaseField) {
                $assign_imp::$assign_method(&mut self.0, rhs.0);
            }
        }

        impl<'a> $assign_imp<&'a BaseField> for BaseField {
            #[inline]
            fn $assign_method(&mut self, rhs: &'a BaseField) {
                $assign_imp::$assign_method(&mut self.0, rhs.0);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);

impl Neg for &BaseField {
    type Output = BaseField;

    fn neg(self) -> BaseField {
        BaseField(-self.0)
    }
}

impl Neg for BaseField {
    type Output = BaseField;

    #[inline]
    fn neg(self) -> BaseField {
        BaseField(-self.0)
    }
}

impl From<u64> for BaseField {
    fn from(value: u64) -> Self {
        BaseField::from_u64(value)
    }
}

impl From<Fr> for BaseField {
    fn from(value: Fr) -> Self {
        BaseField(value)
    }
}

impl From<BaseField> for Fr {
    fn from(value: BaseField) -> Self {
        value.0
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_biguint(), f)
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({self})")
    }
}

// Field elements travel as decimal strings, the format used by the circuit
// tooling and the JSON payloads that carry keys and signatures.
impl Serialize for BaseField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::serde_decimal::serialize(&self.to_biguint(), serializer)
    }
}

impl<'de> Deserialize<'de> for BaseField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = crate::serde_decimal::deserialize(deserializer)?;
        BaseField::from_canonical(value)
            .ok_or_else(|| serde::de::Error::custom("field element is not reduced"))
    }
}
