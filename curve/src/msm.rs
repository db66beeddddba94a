use num_bigint::BigUint;

use crate::errors::CurveError;
use crate::{Affine, Projective};

/// Compute sum(scalars[i] * points[i]) with one shared doubling chain
/// (Straus / Shamir interleaving).
pub fn multi_scalar_mul(points: &[Affine], scalars: &[BigUint]) -> Result<Affine, CurveError> {
    if points.len() != scalars.len() {
        return Err(CurveError::LengthMismatch {
            points: points.len(),
            scalars: scalars.len(),
        });
    }

    let bases: Vec<Projective> = points.iter().map(Projective::from_affine).collect();
    let max_bits = scalars.iter().map(BigUint::bits).max().unwrap_or(0);

    let mut result = Projective::identity();
    for i in (0..max_bits).rev() {
        result = result.double();
        for (base, scalar) in bases.iter().zip(scalars) {
            if scalar.bit(i) {
                result += base;
            }
        }
    }

    Ok(result.to_affine())
}
