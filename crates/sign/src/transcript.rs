//! Per-session protocol state machine
//!
//! `Uninitialized -> KeysGenerated -> Signed -> Verified`, forward only.
//! Re-signing from `Signed` replaces the stored signature; verifying again
//! from `Verified` is allowed. Any other request is out of order and fails
//! with `InvalidInput`. `reset` discards every intermediate value.

use core::fmt;

use log::debug;
use nhdss_api::{DssScheme, Error as ApiError, Metered, OpCounts, Result as ApiResult, Verification};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Protocol phase of a transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Phase {
    Uninitialized,
    KeysGenerated,
    Signed,
    Verified,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::KeysGenerated => "keys_generated",
            Phase::Signed => "signed",
            Phase::Verified => "verified",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct KeyMaterial<S: DssScheme> {
    domain: S::Domain,
    public_key: S::PublicKey,
    secret_key: S::SecretKey,
}

impl<S: DssScheme> Clone for KeyMaterial<S> {
    fn clone(&self) -> Self {
        KeyMaterial {
            domain: self.domain.clone(),
            public_key: self.public_key.clone(),
            secret_key: self.secret_key.clone(),
        }
    }
}

/// Ordered record of one key-generation / sign / verify run
pub struct Transcript<S: DssScheme> {
    phase: Phase,
    keys: Option<KeyMaterial<S>>,
    signature: Option<(S::Signature, S::SigningTrace)>,
    verification: Option<Verification<S::Diagnostics>>,
    op_counts: OpCounts,
}

impl<S: DssScheme> Clone for Transcript<S> {
    fn clone(&self) -> Self {
        Transcript {
            phase: self.phase,
            keys: self.keys.clone(),
            signature: self.signature.clone(),
            verification: self.verification.clone(),
            op_counts: self.op_counts,
        }
    }
}

impl<S: DssScheme> Default for Transcript<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DssScheme> fmt::Debug for Transcript<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("scheme", &S::name())
            .field("phase", &self.phase)
            .field("op_counts", &self.op_counts)
            .finish_non_exhaustive()
    }
}

fn out_of_order(operation: &'static str, phase: Phase) -> ApiError {
    Error::OutOfOrder {
        operation,
        phase: phase.as_str(),
    }
    .into()
}

impl<S: DssScheme> Transcript<S> {
    /// Fresh transcript in `Uninitialized`
    pub fn new() -> Self {
        Transcript {
            phase: Phase::Uninitialized,
            keys: None,
            signature: None,
            verification: None,
            op_counts: OpCounts::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Counts accumulated over every phase since the last reset
    pub fn op_counts(&self) -> OpCounts {
        self.op_counts
    }

    pub fn domain(&self) -> Option<&S::Domain> {
        self.keys.as_ref().map(|k| &k.domain)
    }

    pub fn public_key(&self) -> Option<&S::PublicKey> {
        self.keys.as_ref().map(|k| &k.public_key)
    }

    pub fn secret_key(&self) -> Option<&S::SecretKey> {
        self.keys.as_ref().map(|k| &k.secret_key)
    }

    pub fn signature(&self) -> Option<&(S::Signature, S::SigningTrace)> {
        self.signature.as_ref()
    }

    pub fn verification(&self) -> Option<&Verification<S::Diagnostics>> {
        self.verification.as_ref()
    }

    /// Adopt an externally generated key pair
    pub fn install_keys(
        &mut self,
        domain: S::Domain,
        public_key: S::PublicKey,
        secret_key: S::SecretKey,
        op_counts: OpCounts,
    ) -> ApiResult<()> {
        if self.phase != Phase::Uninitialized {
            return Err(out_of_order("generate keys", self.phase));
        }
        self.keys = Some(KeyMaterial {
            domain,
            public_key,
            secret_key,
        });
        self.op_counts.absorb(&op_counts);
        self.phase = Phase::KeysGenerated;
        debug!("{} transcript: keys installed", S::name());
        Ok(())
    }

    /// Generate keys over `domain`; only valid from `Uninitialized`
    pub fn generate_keys<R: CryptoRng + RngCore>(
        &mut self,
        domain: S::Domain,
        rng: &mut R,
    ) -> ApiResult<OpCounts> {
        if self.phase != Phase::Uninitialized {
            return Err(out_of_order("generate keys", self.phase));
        }
        let (keys, counts) = S::keypair(&domain, rng)?.into_parts();
        let (public_key, secret_key) = keys;
        self.install_keys(domain, public_key, secret_key, counts)?;
        Ok(counts)
    }

    /// Sign `message`; valid from `KeysGenerated` and `Signed`
    pub fn sign<R: CryptoRng + RngCore>(
        &mut self,
        message: &[u8],
        rng: &mut R,
    ) -> ApiResult<Metered<(S::Signature, S::SigningTrace)>> {
        let keys = match (&self.keys, self.phase) {
            (Some(keys), Phase::KeysGenerated | Phase::Signed) => keys,
            _ => return Err(out_of_order("sign", self.phase)),
        };
        let signed = S::sign(&keys.domain, message, &keys.secret_key, rng)?;
        self.op_counts.absorb(&signed.op_counts);
        self.signature = Some(signed.value.clone());
        self.verification = None;
        self.phase = Phase::Signed;
        debug!("{} transcript: signed", S::name());
        Ok(signed)
    }

    /// Verify `signature` on `message`; valid from `Signed` and `Verified`
    pub fn verify(
        &mut self,
        message: &[u8],
        signature: &S::Signature,
    ) -> ApiResult<Metered<Verification<S::Diagnostics>>> {
        let keys = match (&self.keys, self.phase) {
            (Some(keys), Phase::Signed | Phase::Verified) => keys,
            _ => return Err(out_of_order("verify", self.phase)),
        };
        let verified = S::verify(&keys.domain, message, signature, &keys.public_key)?;
        self.op_counts.absorb(&verified.op_counts);
        self.verification = Some(verified.value.clone());
        self.phase = Phase::Verified;
        debug!(
            "{} transcript: verified, valid = {}",
            S::name(),
            verified.value.is_valid
        );
        Ok(verified)
    }

    /// Back to `Uninitialized`, wiping the secret key
    pub fn reset(&mut self) {
        if let Some(mut keys) = self.keys.take() {
            keys.secret_key.zeroize();
        }
        self.signature = None;
        self.verification = None;
        self.op_counts = OpCounts::default();
        self.phase = Phase::Uninitialized;
    }
}
