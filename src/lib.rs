//! # nhdss
//!
//! Experimental digital signature schemes built on new forms of the discrete
//! logarithm problem.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! nhdss = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): the finite-field and elliptic-curve engines
//! - `service` (default): request/response contract and session store
//! - `algorithms`: arithmetic primitives only
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`nhdss-api`]: error taxonomy, scheme and session-store traits
//! - [`nhdss-algorithms`]: primality, domains, hash-to-scalar, curve groups
//! - [`nhdss-sign`]: the two signature engines and the protocol transcript
//! - [`nhdss-service`]: wire contract, session handling

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use nhdss_api as api;
pub use nhdss_common as common;
pub use nhdss_internal as internal;
pub use nhdss_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use nhdss_algorithms as algorithms;

#[cfg(feature = "sign")]
pub use nhdss_sign as sign;

#[cfg(feature = "service")]
pub use nhdss_service as service;

/// Common imports for nhdss users
pub mod prelude {
    pub use crate::api::{
        DssScheme, Error, ErrorKind, Metered, OpCounts, Result, SessionId, SessionStore,
        Variant, Verification,
    };

    pub use crate::common::{BigUint, EphemeralSecret, SecretScalar};
    pub use zeroize::Zeroize;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{CurveDomain, FiniteFieldDomain, Point};

    #[cfg(feature = "sign")]
    pub use crate::sign::{EllipticCurveDss, FiniteFieldDss, Phase, Transcript};

    #[cfg(feature = "service")]
    pub use crate::service::{DssService, InMemorySessionStore, ServiceConfig};
}
