//! Arithmetic primitives for the nhdss signature schemes
//!
//! This crate provides the building blocks both engines share:
//!
//! - probabilistic primality testing and random primes
//! - finite-field domain generation and validation
//! - the tagged, length-prefixed hash-to-scalar construction
//! - generic short Weierstrass curve groups with named domains
//! - an operation meter wrapping every counted primitive
//! - brute-force helpers for the underlying hard problems on tiny moduli

#![forbid(unsafe_code)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod primality;
pub use primality::{is_probable_prime, passes_fixed_bases, random_prime};

pub mod domain;
pub use domain::FiniteFieldDomain;

pub mod hash;
pub use hash::{hash_to_scalar, HashInput};

pub mod ec;
pub use ec::{CurveDomain, Point};

pub mod meter;
pub use meter::Meter;

pub mod hard_problem;
