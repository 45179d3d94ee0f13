//! Signature scheme over a prime field built on `x^x ≡ y (mod p)`
//!
//! Keys: `x = a^((p-1)/q) mod p` has order `q`; the public key is
//! `y = x^(-x mod (p-1)) mod p`.
//!
//! Signing with nonces `k, u` in `[1, q)`:
//!
//! ```text
//! r = x^k mod p          e = H(r, M) mod q          z = x^u mod p
//! s = (u*r + x*z) * (k*(e + r))^-1 mod q
//! ```
//!
//! Verification recomputes `r̄ = (z^r * (y^z)^-1)^(t^-1) mod p` with
//! `t = s*(a + r) mod q`, `a = H(r, M)`, and accepts iff `H(r̄, M) == a`.

mod keys;

pub use keys::{FfDiagnostics, FfPublicKey, FfSecretKey, FfSignature, FfSigningTrace};

use log::{debug, warn};
use nhdss_algorithms::{FiniteFieldDomain, HashInput, Meter};
use nhdss_api::{
    DssScheme, Error as ApiError, Metered, Result as ApiResult, Variant, Verification,
};
use nhdss_common::math_common::{byte_len, mod_add, mod_pow, random_in_range, to_be_bytes};
use nhdss_common::EphemeralSecret;
use nhdss_internal::constant_time::ct_eq_padded;
use nhdss_params::limits::{MAX_KEYGEN_ATTEMPTS, MAX_SIGNING_ATTEMPTS};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

const ALGORITHM: &str = "FF-DSS";

/// Finite-field signature scheme
pub struct FiniteFieldDss;

impl FiniteFieldDss {
    /// Deterministic key derivation from a seed `a` in `[2, p-1)`
    ///
    /// Fails with `InvalidKey` when `x = a^((p-1)/q)` is 0 or 1.
    pub fn derive_keypair(
        domain: &FiniteFieldDomain,
        a: &BigUint,
    ) -> Result<Metered<(FfPublicKey, FfSecretKey)>> {
        let mut meter = Meter::new();
        let keys = Self::derive_with(domain, a, &mut meter)?;
        Ok(meter.finish(keys))
    }

    fn derive_with(
        domain: &FiniteFieldDomain,
        a: &BigUint,
        meter: &mut Meter,
    ) -> Result<(FfPublicKey, FfSecretKey)> {
        let p = domain.p();
        let two = BigUint::from(2u32);
        if a < &two || a >= &(p - BigUint::one()) {
            return Err(Error::InvalidKey("seed must lie in [2, p - 1)".into()));
        }

        let x = EphemeralSecret::new(meter.mod_pow(a, &domain.cofactor(), p)?);
        if x.is_zero() || x.is_one() {
            return Err(Error::InvalidKey("seed maps to a trivial element".into()));
        }

        // -x mod (p - 1)
        let p_minus_1 = p - BigUint::one();
        let x_mod = &*x % &p_minus_1;
        let neg_x = (&p_minus_1 - x_mod) % &p_minus_1;
        let y = meter.mod_pow(&x, &neg_x, p)?;

        Ok((FfPublicKey::new(y), FfSecretKey::new(x.as_ref().clone())))
    }

    /// Deterministic signing core for fixed nonces `k, u` in `[1, q)`
    ///
    /// Degenerate nonce pairs surface as retryable errors.
    pub fn sign_with_nonces(
        domain: &FiniteFieldDomain,
        message: &[u8],
        secret_key: &FfSecretKey,
        k: &BigUint,
        u: &BigUint,
    ) -> Result<Metered<(FfSignature, FfSigningTrace)>> {
        Self::check_secret_key(domain, secret_key)?;
        let mut meter = Meter::new();
        let signed = Self::sign_core(domain, message, secret_key, k, u, 1, &mut meter)?;
        Ok(meter.finish(signed))
    }

    fn sign_core(
        domain: &FiniteFieldDomain,
        message: &[u8],
        secret_key: &FfSecretKey,
        k: &BigUint,
        u: &BigUint,
        attempts: usize,
        meter: &mut Meter,
    ) -> Result<(FfSignature, FfSigningTrace)> {
        let (p, q) = (domain.p(), domain.q());
        if k.is_zero() || k >= q || u.is_zero() || u >= q {
            return Err(Error::InvalidParameter("nonces must lie in [1, q)".into()));
        }
        let x = secret_key.expose();

        let r = meter.mod_pow(x, k, p)?;
        let e = meter.hash_to_scalar(&[HashInput::Integer(&r), HashInput::Bytes(message)], q)?;
        let z = meter.mod_pow(x, u, p)?;

        // w = z: the binding term the verifier can recompute from the signature
        let ur = meter.mod_mul(u, &r, q)?;
        let xz = meter.mod_mul(x, &z, q)?;
        let numerator = mod_add(&ur, &xz, q)?;
        let e_plus_r = mod_add(&e, &r, q)?;
        let denominator = meter.mod_mul(k, &e_plus_r, q)?;

        let denominator_inv = meter.mod_inverse(&denominator, q)?;
        let s = meter.mod_mul(&numerator, &denominator_inv, q)?;
        if s.is_zero() {
            return Err(Error::DegenerateNonce("s == 0"));
        }

        Ok((
            FfSignature { r, s, z },
            FfSigningTrace {
                e,
                numerator,
                denominator,
                attempts,
            },
        ))
    }

    fn keypair_inner<R: CryptoRng + RngCore>(
        domain: &FiniteFieldDomain,
        rng: &mut R,
    ) -> Result<Metered<(FfPublicKey, FfSecretKey)>> {
        let low = BigUint::from(2u32);
        let high = domain.p() - BigUint::one();

        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            let a = EphemeralSecret::new(random_in_range(rng, &low, &high)?);
            let mut meter = Meter::new();
            match Self::derive_with(domain, &a, &mut meter) {
                Ok(keys) => {
                    debug!("{} key pair derived after {} seeds", ALGORITHM, attempt);
                    return Ok(meter.finish(keys));
                }
                Err(Error::InvalidKey(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        warn!("{} key sampling exhausted after {} seeds", ALGORITHM, MAX_KEYGEN_ATTEMPTS);
        Err(Error::KeyGeneration {
            algorithm: ALGORITHM,
            details: format!("every seed in {} attempts mapped to 0 or 1", MAX_KEYGEN_ATTEMPTS),
        })
    }

    fn sign_inner<R: CryptoRng + RngCore>(
        domain: &FiniteFieldDomain,
        message: &[u8],
        secret_key: &FfSecretKey,
        rng: &mut R,
    ) -> Result<Metered<(FfSignature, FfSigningTrace)>> {
        Self::check_secret_key(domain, secret_key)?;
        let mut meter = Meter::new();
        let one = BigUint::one();

        for attempt in 1..=MAX_SIGNING_ATTEMPTS {
            let k = EphemeralSecret::new(random_in_range(rng, &one, domain.q())?);
            let u = EphemeralSecret::new(random_in_range(rng, &one, domain.q())?);
            match Self::sign_core(domain, message, secret_key, &k, &u, attempt, &mut meter) {
                Ok(signed) => return Ok(meter.finish(signed)),
                Err(e) if e.is_retryable() => {
                    debug!("{} attempt {} resampling nonces: {}", ALGORITHM, attempt, e);
                }
                Err(e) => return Err(e),
            }
        }

        warn!("{} signing exhausted after {} attempts", ALGORITHM, MAX_SIGNING_ATTEMPTS);
        Err(Error::SigningExhausted {
            algorithm: ALGORITHM,
            attempts: MAX_SIGNING_ATTEMPTS,
        })
    }

    /// `x` must be a non-trivial element of the order-`q` subgroup
    fn check_secret_key(domain: &FiniteFieldDomain, secret_key: &FfSecretKey) -> Result<()> {
        let x = secret_key.expose();
        if x < &BigUint::from(2u32) || x >= domain.p() {
            return Err(Error::InvalidKey("x must lie in [2, p)".into()));
        }
        if !mod_pow(x, domain.q(), domain.p())?.is_one() {
            return Err(Error::InvalidKey("x must have order q".into()));
        }
        Ok(())
    }

    fn verify_inner(
        domain: &FiniteFieldDomain,
        message: &[u8],
        signature: &FfSignature,
        public_key: &FfPublicKey,
    ) -> Result<Metered<Verification<FfDiagnostics>>> {
        let (p, q) = (domain.p(), domain.q());
        let in_field = |v: &BigUint| !v.is_zero() && v < p;
        if !in_field(&signature.r) || !in_field(&signature.z) {
            return Err(Error::InvalidSignature("r and z must lie in [1, p)".into()));
        }
        if signature.s.is_zero() || &signature.s >= q {
            return Err(Error::InvalidSignature("s must lie in [1, q)".into()));
        }
        if !in_field(public_key.y()) {
            return Err(Error::InvalidKey("y must lie in [1, p)".into()));
        }

        let mut meter = Meter::new();
        let FfSignature { r, s, z } = signature;

        let a = meter.hash_to_scalar(&[HashInput::Integer(r), HashInput::Bytes(message)], q)?;
        let a_plus_r = mod_add(&a, r, q)?;
        let t = meter.mod_mul(s, &a_plus_r, q)?;

        let z_r = meter.mod_pow(z, r, p)?;
        let y_z = meter.mod_pow(public_key.y(), z, p)?;

        let inverses = meter
            .mod_inverse(&t, q)
            .and_then(|t_inv| meter.mod_inverse(&y_z, p).map(|y_z_inv| (t_inv, y_z_inv)));
        let (t_inv, y_z_inv) = match inverses {
            Ok(pair) => pair,
            Err(nhdss_algorithms::Error::NoInverse { context }) => {
                debug!("{} verification rejected: no inverse in {}", ALGORITHM, context);
                return Ok(meter.finish(Verification {
                    is_valid: false,
                    diagnostics: FfDiagnostics {
                        a,
                        b: None,
                        r_bar: None,
                    },
                }));
            }
            Err(e) => return Err(e.into()),
        };

        let base = meter.mod_mul(&z_r, &y_z_inv, p)?;
        let r_bar = meter.mod_pow(&base, &t_inv, p)?;
        let b = meter.hash_to_scalar(&[HashInput::Integer(&r_bar), HashInput::Bytes(message)], q)?;

        let is_valid = ct_eq_padded(&to_be_bytes(&a), &to_be_bytes(&b), byte_len(q));
        debug!("{} verification finished: valid = {}", ALGORITHM, is_valid);

        Ok(meter.finish(Verification {
            is_valid,
            diagnostics: FfDiagnostics {
                a,
                b: Some(b),
                r_bar: Some(r_bar),
            },
        }))
    }
}

impl DssScheme for FiniteFieldDss {
    type Domain = FiniteFieldDomain;
    type PublicKey = FfPublicKey;
    type SecretKey = FfSecretKey;
    type Signature = FfSignature;
    type SigningTrace = FfSigningTrace;
    type Diagnostics = FfDiagnostics;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn variant() -> Variant {
        Variant::FiniteField
    }

    fn keypair<R: CryptoRng + RngCore>(
        domain: &Self::Domain,
        rng: &mut R,
    ) -> ApiResult<Metered<(Self::PublicKey, Self::SecretKey)>> {
        Self::keypair_inner(domain, rng).map_err(ApiError::from)
    }

    fn sign<R: CryptoRng + RngCore>(
        domain: &Self::Domain,
        message: &[u8],
        secret_key: &Self::SecretKey,
        rng: &mut R,
    ) -> ApiResult<Metered<(Self::Signature, Self::SigningTrace)>> {
        Self::sign_inner(domain, message, secret_key, rng).map_err(ApiError::from)
    }

    fn verify(
        domain: &Self::Domain,
        message: &[u8],
        signature: &Self::Signature,
        public_key: &Self::PublicKey,
    ) -> ApiResult<Metered<Verification<Self::Diagnostics>>> {
        Self::verify_inner(domain, message, signature, public_key).map_err(ApiError::from)
    }
}
