use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_bigint::BigUint;

use crate::affine::{curve_a, curve_d, Affine};
use crate::{BaseField, Group};

/// Projective point on the twisted Edwards curve.
/// Represents (X:Y:Z) with (x, y) = (X/Z, Y/Z). The identity is (0:1:1).
///
/// Addition needs no inversion, so scalar multiplication runs here and only
/// the final result is converted back to affine.
#[derive(Clone, Debug)]
pub struct Projective {
    pub x: BaseField,
    pub y: BaseField,
    pub z: BaseField,
}

impl Projective {
    /// Create a new projective point.
    pub fn new(x: BaseField, y: BaseField, z: BaseField) -> Self {
        Projective { x, y, z }
    }

    pub fn identity() -> Self {
        Projective::new(BaseField::zero(), BaseField::one(), BaseField::one())
    }

    /// Check if this point is the identity (0:1:1) up to scaling.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && !self.z.is_zero() && self.y == self.z
    }

    /// Convert to affine coordinates.
    ///
    /// Points built from on-curve inputs always have Z != 0. Z = 0 trips a
    /// debug assertion; release builds map it to the identity.
    pub fn to_affine(&self) -> Affine {
        debug_assert!(!self.z.is_zero(), "projective point with Z = 0");
        match self.z.inverse() {
            Some(z_inv) => Affine::new(&self.x * &z_inv, &self.y * &z_inv),
            None => Affine::identity(),
        }
    }

    /// Convert from affine coordinates.
    pub fn from_affine(point: &Affine) -> Self {
        Projective::new(point.x.clone(), point.y.clone(), BaseField::one())
    }

    /// Check the homogenized curve equation: (a*X^2 + Y^2)*Z^2 = Z^4 + d*X^2*Y^2.
    pub fn is_on_curve(&self) -> bool {
        if self.z.is_zero() {
            return false;
        }

        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();

        let lhs = (curve_a() * &x2 + &y2) * &z2;
        let rhs = z2.square() + curve_d() * x2 * y2;

        lhs == rhs
    }

    /// Doubling: dbl-2008-bbjlp.
    pub fn double(&self) -> Self {
        let b = (&self.x + &self.y).square();
        let c = self.x.square();
        let d = self.y.square();
        let e = curve_a() * &c;
        let f = &e + &d;
        let h = self.z.square();
        let j = &f - &(&h + &h);

        let x3 = (b - &c - &d) * &j;
        let y3 = &f * &(e - d);
        let z3 = f * j;

        Projective::new(x3, y3, z3)
    }

    /// Negation: (-X:Y:Z).
    pub fn negate(&self) -> Self {
        Projective::new(-&self.x, self.y.clone(), self.z.clone())
    }

    /// Scalar multiplication by a `BigUint`, double-and-add.
    pub fn mul_scalar(&self, scalar: &BigUint) -> Self {
        <Self as Group>::scalar_mul(self, scalar)
    }

    /// Montgomery ladder: one addition and one doubling per bit over a fixed
    /// number of bits, independent of the bit values.
    pub fn mul_ladder(&self, scalar: &BigUint, bits: u64) -> Self {
        let mut r0 = Projective::identity();
        let mut r1 = self.clone();

        for i in (0..bits).rev() {
            if scalar.bit(i) {
                r0 = &r0 + &r1;
                r1 = r1.double();
            } else {
                r1 = &r0 + &r1;
                r0 = r0.double();
            }
        }

        r0
    }
}

/// Complete addition: add-2008-bbjlp.
impl<'a> Add<&'a Projective> for &Projective {
    type Output = Projective;

    fn add(self, other: &'a Projective) -> Projective {
        let a = &self.z * &other.z;
        let b = a.square();
        let c = &self.x * &other.x;
        let d = &self.y * &other.y;
        let e = curve_d() * &c * &d;
        let f = &b - &e;
        let g = b + e;

        let cross = (&self.x + &self.y) * (&other.x + &other.y);
        let x3 = &a * &f * (cross - &c - &d);
        let y3 = &a * &g * (&d - &(curve_a() * &c));
        let z3 = f * g;

        Projective::new(x3, y3, z3)
    }
}

impl Add for Projective {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl AddAssign for Projective {
    fn add_assign(&mut self, other: Self) {
        *self = &*self + &other;
    }
}

impl<'a> AddAssign<&'a Projective> for Projective {
    fn add_assign(&mut self, other: &'a Projective) {
        *self = &*self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Projective {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self + &other.negate()
    }
}

impl SubAssign for Projective {
    fn sub_assign(&mut self, other: Self) {
        *self = &*self + &other.negate();
    }
}

impl Neg for Projective {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Equality is on the represented affine point: X1*Z2 = X2*Z1 and Y1*Z2 = Y2*Z1.
impl PartialEq for Projective {
    fn eq(&self, other: &Self) -> bool {
        &self.x * &other.z == &other.x * &self.z && &self.y * &other.z == &other.y * &self.z
    }
}

impl Eq for Projective {}

impl Group for Projective {
    type Scalar = BigUint;

    #[inline]
    fn identity() -> Self {
        Projective::identity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        Projective::is_identity(self)
    }

    #[inline]
    fn generator() -> Self {
        Self::from_affine(&Affine::base8())
    }

    #[inline]
    fn double(&self) -> Self {
        Projective::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Projective::negate(self)
    }
}

impl From<&Affine> for Projective {
    fn from(point: &Affine) -> Self {
        Projective::from_affine(point)
    }
}

impl From<Affine> for Projective {
    fn from(point: Affine) -> Self {
        Projective::from_affine(&point)
    }
}
