//! Operation metering
//!
//! Engines route every counted primitive through a [`Meter`] so that each
//! call can report how much work it did. Counts are informational only.

use nhdss_api::types::{Metered, OpCounts};
use nhdss_common::math_common;
use num_bigint_dig::BigUint;

use crate::ec::{CurveDomain, Point};
use crate::error::Result;
use crate::hash::{hash_to_scalar, HashInput};

/// Counting wrapper around the arithmetic primitives
#[derive(Debug, Clone, Default)]
pub struct Meter {
    counts: OpCounts,
}

impl Meter {
    /// Start with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts so far
    pub fn counts(&self) -> OpCounts {
        self.counts
    }

    /// Attach the counts to a result value
    pub fn finish<T>(self, value: T) -> Metered<T> {
        Metered::new(value, self.counts)
    }

    /// `base^exp mod m`
    pub fn mod_pow(&mut self, base: &BigUint, exp: &BigUint, m: &BigUint) -> Result<BigUint> {
        self.counts.exponentiations += 1;
        Ok(math_common::mod_pow(base, exp, m)?)
    }

    /// `a * b mod m`
    pub fn mod_mul(&mut self, a: &BigUint, b: &BigUint, m: &BigUint) -> Result<BigUint> {
        self.counts.multiplications += 1;
        Ok(math_common::mod_mul(a, b, m)?)
    }

    /// `a^-1 mod m`; failures are counted too
    pub fn mod_inverse(&mut self, a: &BigUint, m: &BigUint) -> Result<BigUint> {
        self.counts.inversions += 1;
        Ok(math_common::mod_inverse(a, m)?)
    }

    /// `H(parts) mod modulus`
    pub fn hash_to_scalar(&mut self, parts: &[HashInput<'_>], modulus: &BigUint) -> Result<BigUint> {
        self.counts.hashes += 1;
        hash_to_scalar(parts, modulus)
    }

    /// `k * P`
    pub fn point_mul(&mut self, curve: &CurveDomain, k: &BigUint, point: &Point) -> Point {
        self.counts.point_multiplications += 1;
        curve.mul(k, point)
    }

    /// `P + Q`
    pub fn point_add(&mut self, curve: &CurveDomain, lhs: &Point, rhs: &Point) -> Point {
        self.counts.point_additions += 1;
        curve.add(lhs, rhs)
    }

    /// `2P`, counted as an addition
    pub fn point_double(&mut self, curve: &CurveDomain, point: &Point) -> Point {
        self.counts.point_additions += 1;
        curve.double(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_counts_each_primitive() {
        let mut meter = Meter::new();
        let p = BigUint::from(467u32);
        let q = BigUint::from(233u32);

        let x = meter.mod_pow(&BigUint::from(5u32), &BigUint::from(2u32), &p).unwrap();
        assert_eq!(x, BigUint::from(25u32));
        meter.mod_mul(&x, &x, &p).unwrap();
        assert!(meter.mod_inverse(&BigUint::from(0u32), &q).is_err());
        meter.hash_to_scalar(&[HashInput::Bytes(b"m")], &q).unwrap();

        let curve = CurveDomain::toy().unwrap();
        let g = curve.base().clone();
        let two_g = meter.point_double(&curve, &g);
        meter.point_add(&curve, &two_g, &g);
        meter.point_mul(&curve, &BigUint::from(3u32), &g);

        let metered = meter.finish(());
        assert_eq!(
            metered.op_counts,
            OpCounts {
                exponentiations: 1,
                multiplications: 1,
                inversions: 1,
                hashes: 1,
                point_multiplications: 1,
                point_additions: 2,
            }
        );
    }
}
