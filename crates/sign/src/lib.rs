//! Signature engines for the nhdss library
//!
//! Two experimental schemes built on new forms of the discrete logarithm
//! problem:
//!
//! - [`FiniteFieldDss`]: prime field, hardness from `x^x ≡ y (mod p)`
//! - [`EllipticCurveDss`]: short Weierstrass curve with a secret generator
//!
//! Both implement [`nhdss_api::DssScheme`]. [`Transcript`] wraps either one
//! in the ordered key-generation / sign / verify protocol.

pub mod elliptic_curve;
pub mod error;
pub mod finite_field;
pub mod transcript;

pub use elliptic_curve::{
    EcDiagnostics, EcPublicKey, EcSecretKey, EcSignature, EcSigningTrace, EllipticCurveDss,
};
pub use error::{Error, Result};
pub use finite_field::{
    FfDiagnostics, FfPublicKey, FfSecretKey, FfSignature, FfSigningTrace, FiniteFieldDss,
};
pub use transcript::{Phase, Transcript};
