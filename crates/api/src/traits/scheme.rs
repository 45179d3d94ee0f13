//! Signature-scheme trait for the nhdss engines
//!
//! Both engines (finite field and elliptic curve) follow the same three-phase
//! flow: key generation over fixed domain parameters, signing, verification.
//! Every phase reports the primitive operations it spent.

use crate::types::{Metered, Variant, Verification};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for the experimental signature schemes
///
/// Engines are stateless; all state lives in the values passed in and out.
/// Randomness is always injected by the caller.
pub trait DssScheme {
    /// Domain parameters the keys live over
    type Domain: Clone;

    /// Public key type for this scheme
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type Signature: Clone;

    /// Intermediate values produced while signing
    type SigningTrace: Clone;

    /// Values compared during verification
    type Diagnostics: Clone;

    /// Returns the name of this scheme
    fn name() -> &'static str;

    /// Returns the algebraic setting of this scheme
    fn variant() -> Variant;

    /// Generate a new key pair over `domain` using the provided RNG
    fn keypair<R: CryptoRng + RngCore>(
        domain: &Self::Domain,
        rng: &mut R,
    ) -> Result<Metered<(Self::PublicKey, Self::SecretKey)>>;

    /// Sign a message with the given secret key
    ///
    /// Degenerate nonces are resampled; the call fails with
    /// `Error::SigningExhausted` once the retry budget is spent.
    fn sign<R: CryptoRng + RngCore>(
        domain: &Self::Domain,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> Result<Metered<(Self::Signature, Self::SigningTrace)>>;

    /// Verify a signature against a message and public key
    ///
    /// Malformed inputs are an error; a well-formed signature that does not
    /// verify is `Ok` with `is_valid == false`.
    fn verify(
        domain: &Self::Domain,
        message: &[u8],
        signature: &Self::Signature,
        public_key: &Self::PublicKey,
    ) -> Result<Metered<Verification<Self::Diagnostics>>>;
}
