//! Core value types shared by the engines and the service layer

use core::fmt;
use core::ops::AddAssign;
use core::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counts of the primitive operations performed by one engine call
///
/// Counters are informational only; no decision depends on them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OpCounts {
    pub exponentiations: u64,
    pub multiplications: u64,
    pub inversions: u64,
    pub hashes: u64,
    pub point_multiplications: u64,
    pub point_additions: u64,
}

impl OpCounts {
    /// Fold another set of counts into this one
    pub fn absorb(&mut self, other: &OpCounts) {
        self.exponentiations += other.exponentiations;
        self.multiplications += other.multiplications;
        self.inversions += other.inversions;
        self.hashes += other.hashes;
        self.point_multiplications += other.point_multiplications;
        self.point_additions += other.point_additions;
    }

    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.exponentiations
            + self.multiplications
            + self.inversions
            + self.hashes
            + self.point_multiplications
            + self.point_additions
    }
}

impl AddAssign for OpCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.absorb(&rhs);
    }
}

/// A value together with the operations spent computing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metered<T> {
    pub value: T,
    pub op_counts: OpCounts,
}

impl<T> Metered<T> {
    pub fn new(value: T, op_counts: OpCounts) -> Self {
        Self { value, op_counts }
    }

    /// Transform the value, keeping the counts
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Metered<U> {
        Metered {
            value: f(self.value),
            op_counts: self.op_counts,
        }
    }

    pub fn into_parts(self) -> (T, OpCounts) {
        (self.value, self.op_counts)
    }
}

/// Outcome of a verification together with the values it compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification<D> {
    pub is_valid: bool,
    pub diagnostics: D,
}

/// The algebraic setting a scheme instance lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Variant {
    FiniteField,
    EllipticCurve,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::FiniteField => "finite_field",
            Variant::EllipticCurve => "elliptic_curve",
        }
    }

    /// Prefix used when minting session tokens
    pub fn session_prefix(&self) -> &'static str {
        match self {
            Variant::FiniteField => "ff",
            Variant::EllipticCurve => "ec",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "finite_field" => Ok(Variant::FiniteField),
            "elliptic_curve" => Ok(Variant::EllipticCurve),
            other => Err(Error::invalid_input(
                "variant",
                format!("unknown variant '{}'", other),
            )),
        }
    }
}

/// Opaque session token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SessionId(String);

impl SessionId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
