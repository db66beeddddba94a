// BabyJubJub, twisted Edwards form over F_p (p = BN254 scalar field):
//   a*x^2 + y^2 = 1 + d*x^2*y^2,   a = 168700, d = 168696
// Curve order: 21888242871839275222246405745257275088614511777268538073601725287587578984328
// Cofactor: 8
// Prime subgroup order: 2736030358979909402780800718157159386076813972158567259200215660948447373041
// Base8 (generator of the prime subgroup):
//   x = 16540640123574156134436876038791482806971768689494387082833631921987005038935
//   y = 20819045374670962167435360035096875258406992893633759881276124905556507972311
// d is a non-square, so the addition law is complete.

use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use std::sync::LazyLock;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::projective::Projective;
use crate::scalar::{decimal_const, mod_order, order, sub_order};
use crate::{BaseField, Group};

static CURVE_A: LazyLock<BaseField> = LazyLock::new(|| BaseField::from_u64(168700));
static CURVE_D: LazyLock<BaseField> = LazyLock::new(|| BaseField::from_u64(168696));

static BASE8: LazyLock<Affine> = LazyLock::new(|| {
    Affine::new(
        BaseField::new(decimal_const(
            "16540640123574156134436876038791482806971768689494387082833631921987005038935",
        )),
        BaseField::new(decimal_const(
            "20819045374670962167435360035096875258406992893633759881276124905556507972311",
        )),
    )
});

/// The 'a' coefficient: 168700
#[inline]
pub(crate) fn curve_a() -> &'static BaseField {
    &CURVE_A
}

/// The 'd' coefficient: 168696
#[inline]
pub(crate) fn curve_d() -> &'static BaseField {
    &CURVE_D
}

/// Affine point on the BabyJubJub curve.
/// The identity element is (0, 1).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
}

impl Affine {
    /// Create a new affine point. No curve check is made.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Affine { x, y }
    }

    /// The identity element (0, 1).
    pub fn identity() -> Self {
        Affine::new(BaseField::zero(), BaseField::one())
    }

    /// Generator of the prime-order subgroup.
    pub fn base8() -> Self {
        BASE8.clone()
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    /// Check if a point is on the curve: a*x^2 + y^2 = 1 + d*x^2*y^2.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        let lhs = curve_a() * &x2 + &y2;
        let rhs = BaseField::one() + curve_d() * x2 * y2;

        lhs == rhs
    }

    /// Check membership in the subgroup generated by `Base8`: subOrder * P = O.
    /// Meaningful only for points on the curve.
    pub fn is_in_subgroup(&self) -> bool {
        Projective::from_affine(self)
            .mul_scalar(sub_order())
            .is_identity()
    }

    /// On the curve and inside the prime-order subgroup.
    pub fn is_valid(&self) -> bool {
        self.is_on_curve() && self.is_in_subgroup()
    }

    /// Recover x from y. `negative` selects the root above (p-1)/2; the
    /// other root is returned otherwise. `None` when no point has this y.
    ///
    /// x^2 = (1 - y^2) / (a - d*y^2)
    pub fn from_y(y: BaseField, negative: bool) -> Option<Self> {
        let y2 = y.square();
        let numerator = BaseField::one() - &y2;
        let denominator = curve_a() - &(curve_d() * &y2);
        let x2 = numerator * denominator.inverse()?;

        let mut x = x2.sqrt()?;
        if x.is_negative() != negative {
            x = -x;
        }
        Some(Affine::new(x, y))
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        Projective::from_affine(self).double().to_affine()
    }

    /// Negate a point: (-x, y).
    pub fn negate(&self) -> Self {
        Affine::new(-&self.x, self.y.clone())
    }

    /// Scalar multiplication, double-and-add in projective coordinates.
    pub fn mul_scalar(&self, scalar: &BigUint) -> Self {
        Projective::from_affine(self).mul_scalar(scalar).to_affine()
    }

    /// Scalar multiplication with a Montgomery ladder over the full bit width
    /// of the curve order. Gives the same result as [`Affine::mul_scalar`]
    /// for points on the curve, with a schedule that does not depend on
    /// which scalar bits are set.
    pub fn mul_ladder(&self, scalar: &BigUint) -> Self {
        let reduced = mod_order(scalar);
        Projective::from_affine(self)
            .mul_ladder(&reduced, order().bits())
            .to_affine()
    }

    /// Multiply `Base8` by a scalar.
    pub fn mul_base8(scalar: &BigUint) -> Self {
        BASE8.mul_scalar(scalar)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Affine::identity()
    }
}

impl Group for Affine {
    type Scalar = BigUint;

    #[inline]
    fn identity() -> Self {
        Affine::identity()
    }

    #[inline]
    fn is_identity(&self) -> bool {
        Affine::is_identity(self)
    }

    #[inline]
    fn generator() -> Self {
        Affine::base8()
    }

    #[inline]
    fn double(&self) -> Self {
        Affine::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Affine::negate(self)
    }

    #[inline]
    fn scalar_mul(&self, scalar: &BigUint) -> Self {
        self.mul_scalar(scalar)
    }
}

impl<'a> Add<&'a Affine> for &Affine {
    type Output = Affine;

    fn add(self, other: &'a Affine) -> Affine {
        (&Projective::from_affine(self) + &Projective::from_affine(other)).to_affine()
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = &*self + &other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self + &other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = &*self + &other.negate();
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl<'a> Mul<&'a BigUint> for &Affine {
    type Output = Affine;

    fn mul(self, scalar: &'a BigUint) -> Affine {
        self.mul_scalar(scalar)
    }
}

impl Mul<BigUint> for Affine {
    type Output = Affine;

    fn mul(self, scalar: BigUint) -> Affine {
        self.mul_scalar(&scalar)
    }
}
