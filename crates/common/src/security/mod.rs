//! Security primitives for handling secret values
//!
//! Nonces and secret exponents are wrapped so that they are zeroized when
//! dropped and never printed by `Debug`.

pub mod secret;

// Re-export core security types
pub use secret::{EphemeralSecret, SecretScalar};
