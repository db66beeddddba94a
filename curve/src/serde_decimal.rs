//! Serde adapter that writes `BigUint` values as decimal strings.
//!
//! Use with `#[serde(with = "curve::serde_decimal")]`.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer, Serializer};

use crate::scalar::parse_scalar;

pub fn serialize<S: Serializer>(value: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_str_radix(10))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigUint, D::Error> {
    let literal = String::deserialize(deserializer)?;
    parse_scalar(&literal, 10).map_err(serde::de::Error::custom)
}
