//! Compressed point encoding.
//!
//! 32 bytes: the y-coordinate in little-endian order, with the top bit of
//! the last byte carrying the sign of x (set when x > (p-1)/2). y < p < 2^254
//! so the top bit is otherwise unused.

use crate::errors::CurveError;
use crate::scalar::scalar_from_le_bytes;
use crate::{Affine, BaseField};

/// Size of a compressed point in bytes.
pub const PACKED_POINT_SIZE: usize = 32;

const SIGN_MASK: u8 = 0x80;

impl Affine {
    /// Compress the point to 32 bytes.
    pub fn pack(&self) -> [u8; PACKED_POINT_SIZE] {
        let mut out = self.y.to_le_bytes();
        if self.x.is_negative() {
            out[PACKED_POINT_SIZE - 1] |= SIGN_MASK;
        }
        out
    }

    /// Decompress a point.
    ///
    /// Rejects inputs of the wrong length, y >= p, y values with no point on
    /// the curve, and the sign bit set together with x = 0. The result is on
    /// the curve; subgroup membership is left to the caller.
    pub fn unpack(bytes: &[u8]) -> Result<Self, CurveError> {
        if bytes.len() != PACKED_POINT_SIZE {
            return Err(CurveError::InvalidLength {
                expected: PACKED_POINT_SIZE,
                actual: bytes.len(),
            });
        }

        let mut buf = [0u8; PACKED_POINT_SIZE];
        buf.copy_from_slice(bytes);
        let negative = buf[PACKED_POINT_SIZE - 1] & SIGN_MASK != 0;
        buf[PACKED_POINT_SIZE - 1] &= !SIGN_MASK;

        let y = BaseField::from_canonical(scalar_from_le_bytes(&buf))
            .ok_or(CurveError::NonCanonicalCoordinate)?;
        let point = Affine::from_y(y, negative).ok_or(CurveError::NotOnCurve)?;

        // x = 0 has no negative form, so a set sign bit would alias the
        // cleared one
        if negative && point.x.is_zero() {
            return Err(CurveError::NonCanonicalSign);
        }

        tracing::trace!(x = %point.x, y = %point.y, "unpacked point");
        Ok(point)
    }
}
