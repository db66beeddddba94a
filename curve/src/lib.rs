//! BabyJubJub twisted Edwards curve over the BN254 scalar field.
//!
//! This crate provides affine and projective curve points, the base field,
//! scalar helpers for the two moduli in use (the curve order and the prime
//! subgroup order), compressed point encoding and helpers for random
//! sampling. The curve parameters and the `Base8` generator are fixed in the
//! `affine` module.

mod affine;
mod basefield;
mod errors;
mod group;
mod msm;
mod packing;
mod projective;
mod random;
mod scalar;
pub mod serde_decimal;

pub use affine::Affine;
pub use basefield::BaseField;
pub use errors::CurveError;
pub use group::{Group, ScalarBits};
pub use msm::multi_scalar_mul;
pub use num_bigint::BigUint;
pub use packing::PACKED_POINT_SIZE;
pub use projective::Projective;
pub use random::{random_scalar, RandomField};
pub use scalar::{
    mod_order, mod_sub_order, order, parse_scalar, scalar_from_le_bytes, scalar_to_bits_le,
    scalar_to_le_bytes, sub_order, COFACTOR,
};
