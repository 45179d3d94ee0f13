//! Curve points as a tagged sum type

use core::fmt;

use num_bigint_dig::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

/// A point on a short Weierstrass curve: the identity or an affine pair
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Point {
    /// Point at infinity
    Identity,
    /// Affine coordinates reduced mod `p`
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Build an affine point without checking the curve equation
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, if affine
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, if affine
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Projection `π(P)`: the x-coordinate, with `π(Identity) = 0`
    pub fn projection(&self) -> BigUint {
        match self {
            Point::Identity => BigUint::zero(),
            Point::Affine { x, .. } => x.clone(),
        }
    }
}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        if let Point::Affine { x, y } = self {
            x.zeroize();
            y.zeroize();
        }
        *self = Point::Identity;
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "Point::Identity"),
            Point::Affine { x, y } => write!(f, "Point({:#x}, {:#x})", x, y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Point::Identity => write!(f, "infinity"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
