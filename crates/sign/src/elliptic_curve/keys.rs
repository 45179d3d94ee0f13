//! Key, signature and trace types for the elliptic-curve scheme

use core::fmt;

use nhdss_algorithms::Point;
use num_bigint_dig::BigUint;
use zeroize::Zeroize;

/// Public point `P = ((-π(G)) mod n) * G`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcPublicKey {
    point: Point,
}

impl EcPublicKey {
    pub fn new(point: Point) -> Self {
        Self { point }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }
}

/// The secret generator point `G`
#[derive(Clone, PartialEq, Eq)]
pub struct EcSecretKey {
    generator: Point,
}

impl EcSecretKey {
    pub fn new(generator: Point) -> Self {
        Self { generator }
    }

    /// Borrow the secret generator
    pub fn expose(&self) -> &Point {
        &self.generator
    }
}

impl Zeroize for EcSecretKey {
    fn zeroize(&mut self) {
        self.generator.zeroize();
    }
}

impl Drop for EcSecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for EcSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EcSecretKey([REDACTED])")
    }
}

/// Signature `{R, s, Z}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcSignature {
    pub r: Point,
    pub s: BigUint,
    pub z: Point,
}

/// Intermediate values of one successful signing attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcSigningTrace {
    /// `H(π(R), M) mod n`
    pub e: BigUint,
    /// `u*π(R) + π(G)*π(Z) mod n`
    pub numerator: BigUint,
    /// `k*(e + π(R)) mod n`
    pub denominator: BigUint,
    pub attempts: usize,
}

/// Both sides of `π(R)*Z == (s*(e + π(R)))*R + π(Z)*P`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcDiagnostics {
    pub e: BigUint,
    pub lhs: Point,
    pub rhs: Point,
}
