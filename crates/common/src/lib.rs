//! Common implementations and shared functionality for the nhdss library
//!
//! This crate provides the arbitrary-precision modular arithmetic every
//! engine is built on, plus wrappers for secret values.

pub mod math_common;
pub mod security;

// Re-export core security types
pub use security::{EphemeralSecret, SecretScalar};

pub use num_bigint_dig::{BigInt, BigUint};
