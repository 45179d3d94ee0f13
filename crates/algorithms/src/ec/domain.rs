//! Curve domains and group arithmetic over `y^2 = x^3 + a*x + b (mod p)`
//!
//! Arithmetic runs in Jacobian coordinates (X:Y:Z) with a single inversion
//! when converting back to affine. Field inversions use Fermat's little
//! theorem, which is total because `p` is checked to be prime when the domain
//! is built.

use log::debug;
use nhdss_params::curves::{CurveParams, P192, P192_BITS, P256, P256_BITS, TOY_97};
use num_bigint_dig::BigUint;
use num_traits::{Num, One, Zero};

use super::point::Point;
use crate::error::{Error, Result};
use crate::primality::passes_fixed_bases;

/// Jacobian coordinates; `z == 0` is the identity
#[derive(Clone, Debug)]
struct Jacobian {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl Jacobian {
    fn identity() -> Self {
        Jacobian {
            x: BigUint::one(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    fn is_identity(&self) -> bool {
        self.z.is_zero()
    }
}

/// Validated elliptic-curve domain parameters `{p, a, b, order, base}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurveDomain {
    name: String,
    p: BigUint,
    a: BigUint,
    b: BigUint,
    order: BigUint,
    base: Point,
    /// Hasse's bound rules out any cofactor above 1
    prime_order_group: bool,
}

fn parse_hex(name: &'static str, value: &str) -> Result<BigUint> {
    BigUint::from_str_radix(value, 16).map_err(|_| Error::param(name, "not a hex integer"))
}

impl CurveDomain {
    /// Build a domain, checking every structural requirement
    ///
    /// `p` prime (> 3), `a, b < p`, non-singular curve, base on the curve and
    /// not the identity, `order` prime and `order * base == Identity`.
    pub fn new(
        name: impl Into<String>,
        p: BigUint,
        a: BigUint,
        b: BigUint,
        order: BigUint,
        base: Point,
    ) -> Result<Self> {
        if p <= BigUint::from(3u32) || !passes_fixed_bases(&p) {
            return Err(Error::param("p", "field modulus must be a prime greater than 3"));
        }
        if a >= p || b >= p {
            return Err(Error::param("a, b", "coefficients must be reduced mod p"));
        }
        if order < BigUint::from(3u32) || !passes_fixed_bases(&order) {
            return Err(Error::param("order", "group order must be an odd prime"));
        }

        // #E <= p + 1 + 2*sqrt(p), so 2*order above that forces cofactor 1
        let hasse_max = &p + BigUint::one() + (p.sqrt() + BigUint::one()) * 2u32;
        let prime_order_group = &order * 2u32 > hasse_max;

        let domain = CurveDomain {
            name: name.into(),
            p,
            a,
            b,
            order,
            base,
            prime_order_group,
        };

        // 4a^3 + 27b^2 != 0 (mod p)
        let a3 = domain.fmul(&domain.fsqr(&domain.a), &domain.a);
        let disc = domain.fadd(
            &domain.fmul(&BigUint::from(4u32), &a3),
            &domain.fmul(&BigUint::from(27u32), &domain.fsqr(&domain.b)),
        );
        if disc.is_zero() {
            return Err(Error::param("a, b", "curve is singular"));
        }

        if domain.base.is_identity() || !domain.is_on_curve(&domain.base) {
            return Err(Error::param("base", "base point must be an affine point on the curve"));
        }
        if !domain.mul(&domain.order, &domain.base).is_identity() {
            return Err(Error::param("order", "order * base is not the identity"));
        }

        debug!("validated curve domain {} ({} bits)", domain.name, domain.p.bits());
        Ok(domain)
    }

    /// Parse and validate hex-encoded curve parameters
    pub fn from_params(params: &CurveParams) -> Result<Self> {
        let base = Point::affine(parse_hex("gx", params.gx)?, parse_hex("gy", params.gy)?);
        Self::new(
            params.name,
            parse_hex("p", params.p)?,
            parse_hex("a", params.a)?,
            parse_hex("b", params.b)?,
            parse_hex("order", params.order)?,
            base,
        )
    }

    /// NIST P-192
    pub fn p192() -> Result<Self> {
        Self::from_params(&P192)
    }

    /// NIST P-256
    pub fn p256() -> Result<Self> {
        Self::from_params(&P256)
    }

    /// Toy curve `y^2 = x^3 - 3x + 5 (mod 97)`, base `(6, 3)` of order 53
    pub fn toy() -> Result<Self> {
        Self::from_params(&TOY_97)
    }

    /// Smallest named curve covering `bits`
    ///
    /// `<= 192` selects P-192, `<= 256` selects P-256; larger requests are
    /// rejected.
    pub fn for_bit_length(bits: usize) -> Result<Self> {
        if bits == 0 {
            return Err(Error::param("bit_length", "must be positive"));
        }
        if bits <= P192_BITS {
            Self::p192()
        } else if bits <= P256_BITS {
            Self::p256()
        } else {
            Err(Error::param(
                "bit_length",
                format!("no named curve above {} bits", P256_BITS),
            ))
        }
    }

    /// Curve name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field modulus
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a`
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b`
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Prime order of the base point
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Base point
    pub fn base(&self) -> &Point {
        &self.base
    }

    // Field helpers; operands are already reduced mod p

    fn fadd(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x + y) % &self.p
    }

    fn fsub(&self, x: &BigUint, y: &BigUint) -> BigUint {
        ((x + &self.p) - (y % &self.p)) % &self.p
    }

    fn fmul(&self, x: &BigUint, y: &BigUint) -> BigUint {
        (x * y) % &self.p
    }

    fn fsqr(&self, x: &BigUint) -> BigUint {
        self.fmul(x, x)
    }

    fn finv(&self, x: &BigUint) -> BigUint {
        let exp = &self.p - BigUint::from(2u32);
        x.modpow(&exp, &self.p)
    }

    /// Curve-equation check; the identity is always on the curve
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }
                let lhs = self.fsqr(y);
                let rhs = self.fadd(
                    &self.fadd(&self.fmul(&self.fsqr(x), x), &self.fmul(&self.a, x)),
                    &self.b,
                );
                lhs == rhs
            }
        }
    }

    /// Whether the group of rational points has prime order
    pub fn is_prime_order_group(&self) -> bool {
        self.prime_order_group
    }

    /// Affine point of the order-`n` subgroup generated by the base
    ///
    /// Checks the curve equation, then `order * point == Identity` unless the
    /// whole group has prime order.
    pub fn is_in_subgroup(&self, point: &Point) -> bool {
        if point.is_identity() || !self.is_on_curve(point) {
            return false;
        }
        self.prime_order_group || self.mul(&self.order, point).is_identity()
    }

    /// `π(P) mod order`, the projection used as a scalar
    pub fn scalar_of(&self, point: &Point) -> BigUint {
        point.projection() % &self.order
    }

    /// Negation `-P`
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => {
                if y.is_zero() {
                    point.clone()
                } else {
                    Point::affine(x.clone(), &self.p - y)
                }
            }
        }
    }

    /// Group law `P + Q`
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Point {
        let sum = self.jacobian_add(&self.to_jacobian(lhs), &self.to_jacobian(rhs));
        self.to_affine(&sum)
    }

    /// Doubling `2P`
    pub fn double(&self, point: &Point) -> Point {
        let doubled = self.jacobian_double(&self.to_jacobian(point));
        self.to_affine(&doubled)
    }

    /// Scalar multiplication `k * P` by double-and-add over the bits of `k`
    pub fn mul(&self, k: &BigUint, point: &Point) -> Point {
        if k.is_zero() || point.is_identity() {
            return Point::Identity;
        }
        let addend = self.to_jacobian(point);
        let mut acc = Jacobian::identity();
        for i in (0..k.bits()).rev() {
            acc = self.jacobian_double(&acc);
            if ((k >> i) & BigUint::one()).is_one() {
                acc = self.jacobian_add(&acc, &addend);
            }
        }
        self.to_affine(&acc)
    }

    fn to_jacobian(&self, point: &Point) -> Jacobian {
        match point {
            Point::Identity => Jacobian::identity(),
            Point::Affine { x, y } => Jacobian {
                x: x % &self.p,
                y: y % &self.p,
                z: BigUint::one(),
            },
        }
    }

    fn to_affine(&self, point: &Jacobian) -> Point {
        if point.is_identity() {
            return Point::Identity;
        }
        let z_inv = self.finv(&point.z);
        let z_inv2 = self.fsqr(&z_inv);
        let x = self.fmul(&point.x, &z_inv2);
        let y = self.fmul(&self.fmul(&point.y, &z_inv2), &z_inv);
        Point::affine(x, y)
    }

    fn jacobian_double(&self, point: &Jacobian) -> Jacobian {
        if point.is_identity() || point.y.is_zero() {
            return Jacobian::identity();
        }
        let xx = self.fsqr(&point.x);
        let yy = self.fsqr(&point.y);
        let yyyy = self.fsqr(&yy);
        let zz = self.fsqr(&point.z);

        // S = 4*X*YY, M = 3*XX + a*ZZ^2
        let s = self.fmul(&BigUint::from(4u32), &self.fmul(&point.x, &yy));
        let m = self.fadd(
            &self.fmul(&BigUint::from(3u32), &xx),
            &self.fmul(&self.a, &self.fsqr(&zz)),
        );

        let x3 = self.fsub(&self.fsqr(&m), &self.fadd(&s, &s));
        let y3 = self.fsub(
            &self.fmul(&m, &self.fsub(&s, &x3)),
            &self.fmul(&BigUint::from(8u32), &yyyy),
        );
        let z3 = self.fmul(&BigUint::from(2u32), &self.fmul(&point.y, &point.z));
        Jacobian { x: x3, y: y3, z: z3 }
    }

    fn jacobian_add(&self, lhs: &Jacobian, rhs: &Jacobian) -> Jacobian {
        if lhs.is_identity() {
            return rhs.clone();
        }
        if rhs.is_identity() {
            return lhs.clone();
        }
        let z1z1 = self.fsqr(&lhs.z);
        let z2z2 = self.fsqr(&rhs.z);
        let u1 = self.fmul(&lhs.x, &z2z2);
        let u2 = self.fmul(&rhs.x, &z1z1);
        let s1 = self.fmul(&self.fmul(&lhs.y, &rhs.z), &z2z2);
        let s2 = self.fmul(&self.fmul(&rhs.y, &lhs.z), &z1z1);

        if u1 == u2 {
            if s1 == s2 {
                return self.jacobian_double(lhs);
            }
            return Jacobian::identity();
        }

        let h = self.fsub(&u2, &u1);
        let r = self.fsub(&s2, &s1);
        let hh = self.fsqr(&h);
        let hhh = self.fmul(&h, &hh);
        let v = self.fmul(&u1, &hh);

        let x3 = self.fsub(&self.fsub(&self.fsqr(&r), &hhh), &self.fadd(&v, &v));
        let y3 = self.fsub(
            &self.fmul(&r, &self.fsub(&v, &x3)),
            &self.fmul(&s1, &hhh),
        );
        let z3 = self.fmul(&self.fmul(&lhs.z, &rhs.z), &h);
        Jacobian { x: x3, y: y3, z: z3 }
    }
}
