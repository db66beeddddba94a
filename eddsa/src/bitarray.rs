//! Fixed-width bit packing of message fields.
//!
//! Fields are appended least significant bit first with caller-chosen widths.
//! There are no length prefixes: the order and widths of the `add_*` calls
//! are the message format.

use curve::{parse_scalar, BigUint};

use crate::errors::EdDsaError;

/// Append-only bit vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BitArray {
    bits: Vec<bool>,
}

impl BitArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the lowest `length` bits of `value`, least significant first.
    ///
    /// Higher bits are dropped without an error, matching the circuit's
    /// fixed-width reading of the field. Callers that need a range check do
    /// it before packing.
    pub fn add_bn(&mut self, value: &BigUint, length: usize) {
        self.bits.reserve(length);
        self.bits.extend((0..length as u64).map(|i| value.bit(i)));
    }

    pub fn add_number(&mut self, value: u64, length: usize) {
        self.add_bn(&BigUint::from(value), length);
    }

    /// Parse `value` in `radix` and append it like [`BitArray::add_bn`].
    pub fn add_string(&mut self, value: &str, length: usize, radix: u32) -> Result<(), EdDsaError> {
        let parsed = parse_scalar(value, radix)?;
        self.add_bn(&parsed, length);
        Ok(())
    }

    pub fn add_bool(&mut self, value: bool) {
        self.bits.push(value);
    }

    /// The accumulated bits in append order.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn to_le_bytes(&self) -> Vec<u8> {
        bits_to_le_bytes(&self.bits)
    }
}

impl From<BitArray> for Vec<bool> {
    fn from(array: BitArray) -> Self {
        array.bits
    }
}

/// Pack bits into bytes: bit `i` goes to byte `i / 8`, position `i % 8`.
/// The last byte is zero padded.
pub fn bits_to_le_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |byte, (i, &bit)| byte | (u8::from(bit) << i))
        })
        .collect()
}

/// Read back `length` bits starting at `offset` as an integer, least
/// significant bit first. Bits past the end of the slice read as zero.
pub fn read_bits(bits: &[bool], offset: usize, length: usize) -> BigUint {
    let mut value = BigUint::default();
    for (i, &bit) in bits.iter().skip(offset).take(length).enumerate() {
        if bit {
            value.set_bit(i as u64, true);
        }
    }
    value
}

/// 32-bit string hash used to turn a wallet seed into a secret scalar.
///
/// `h = 31 * h + unit` over the UTF-16 code units of `seed`, wrapping as a
/// signed 32-bit integer; the result is `|h|`.
pub fn hash_code(seed: &str) -> BigUint {
    let h = seed
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    BigUint::from(h.unsigned_abs())
}
