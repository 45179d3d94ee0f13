//! Signature scheme over an elliptic curve with a secret generator point
//!
//! The signer's secret is a point `G = m * base` rather than a scalar. With
//! `π(P)` the x-coordinate (reduced mod the group order `n` when used as a
//! scalar):
//!
//! ```text
//! P = (-π(G) mod n) * G
//! R = k*G    e = H(π(R), M) mod n    Z = u*G
//! s = (u*π(R) + π(G)*π(Z)) * (k*(e + π(R)))^-1 mod n
//! ```
//!
//! A signature verifies iff `π(R)*Z == (s*(e + π(R)) mod n)*R + π(Z)*P`.

mod keys;

pub use keys::{EcDiagnostics, EcPublicKey, EcSecretKey, EcSignature, EcSigningTrace};

use log::{debug, warn};
use nhdss_algorithms::{CurveDomain, HashInput, Meter, Point};
use nhdss_api::{
    DssScheme, Error as ApiError, Metered, Result as ApiResult, Variant, Verification,
};
use nhdss_common::math_common::{mod_add, random_in_range};
use nhdss_common::EphemeralSecret;
use nhdss_params::limits::{MAX_KEYGEN_ATTEMPTS, MAX_SIGNING_ATTEMPTS};
use num_bigint_dig::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{Error, Result};

const ALGORITHM: &str = "EC-DSS";

/// Elliptic-curve signature scheme
pub struct EllipticCurveDss;

impl EllipticCurveDss {
    /// Deterministic key derivation from a scalar `m` in `[1, n)`
    ///
    /// Fails with `InvalidKey` when `G = m * base` has `π(G) ≡ 0 (mod n)`.
    pub fn derive_keypair(
        curve: &CurveDomain,
        m: &BigUint,
    ) -> Result<Metered<(EcPublicKey, EcSecretKey)>> {
        let mut meter = Meter::new();
        let keys = Self::derive_with(curve, m, &mut meter)?;
        Ok(meter.finish(keys))
    }

    fn derive_with(
        curve: &CurveDomain,
        m: &BigUint,
        meter: &mut Meter,
    ) -> Result<(EcPublicKey, EcSecretKey)> {
        let n = curve.order();
        if m.is_zero() || m >= n {
            return Err(Error::InvalidKey("scalar must lie in [1, n)".into()));
        }

        let generator = EcSecretKey::new(meter.point_mul(curve, m, curve.base()));
        let pi_g = curve.scalar_of(generator.expose());
        if generator.expose().is_identity() || pi_g.is_zero() {
            return Err(Error::InvalidKey("generator projects to zero".into()));
        }

        let neg_pi_g = n - &pi_g;
        let public = meter.point_mul(curve, &neg_pi_g, generator.expose());
        Ok((EcPublicKey::new(public), generator))
    }

    /// Deterministic signing core for fixed nonces `k, u` in `[1, n)`
    pub fn sign_with_nonces(
        curve: &CurveDomain,
        message: &[u8],
        secret_key: &EcSecretKey,
        k: &BigUint,
        u: &BigUint,
    ) -> Result<Metered<(EcSignature, EcSigningTrace)>> {
        Self::check_secret_key(curve, secret_key)?;
        let mut meter = Meter::new();
        let signed = Self::sign_core(curve, message, secret_key, k, u, 1, &mut meter)?;
        Ok(meter.finish(signed))
    }

    fn sign_core(
        curve: &CurveDomain,
        message: &[u8],
        secret_key: &EcSecretKey,
        k: &BigUint,
        u: &BigUint,
        attempts: usize,
        meter: &mut Meter,
    ) -> Result<(EcSignature, EcSigningTrace)> {
        let n = curve.order();
        if k.is_zero() || k >= n || u.is_zero() || u >= n {
            return Err(Error::InvalidParameter("nonces must lie in [1, n)".into()));
        }
        let generator = secret_key.expose();

        let r = meter.point_mul(curve, k, generator);
        let pi_r = curve.scalar_of(&r);
        if pi_r.is_zero() {
            return Err(Error::DegenerateNonce("π(R) ≡ 0"));
        }
        let e = meter.hash_to_scalar(
            &[HashInput::Integer(&r.projection()), HashInput::Bytes(message)],
            n,
        )?;
        let z = meter.point_mul(curve, u, generator);

        let pi_g = curve.scalar_of(generator);
        let pi_z = curve.scalar_of(&z);
        let u_pi_r = meter.mod_mul(u, &pi_r, n)?;
        let g_z = meter.mod_mul(&pi_g, &pi_z, n)?;
        let numerator = mod_add(&u_pi_r, &g_z, n)?;
        let e_plus_r = mod_add(&e, &pi_r, n)?;
        let denominator = meter.mod_mul(k, &e_plus_r, n)?;

        let denominator_inv = meter.mod_inverse(&denominator, n)?;
        let s = meter.mod_mul(&numerator, &denominator_inv, n)?;
        if s.is_zero() {
            return Err(Error::DegenerateNonce("s == 0"));
        }

        Ok((
            EcSignature { r, s, z },
            EcSigningTrace {
                e,
                numerator,
                denominator,
                attempts,
            },
        ))
    }

    fn keypair_inner<R: CryptoRng + RngCore>(
        curve: &CurveDomain,
        rng: &mut R,
    ) -> Result<Metered<(EcPublicKey, EcSecretKey)>> {
        let one = BigUint::one();

        for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
            let m = EphemeralSecret::new(random_in_range(rng, &one, curve.order())?);
            let mut meter = Meter::new();
            match Self::derive_with(curve, &m, &mut meter) {
                Ok(keys) => {
                    debug!("{} key pair on {} after {} scalars", ALGORITHM, curve.name(), attempt);
                    return Ok(meter.finish(keys));
                }
                Err(Error::InvalidKey(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        warn!("{} key sampling exhausted on {}", ALGORITHM, curve.name());
        Err(Error::KeyGeneration {
            algorithm: ALGORITHM,
            details: format!(
                "every scalar in {} attempts gave a degenerate generator",
                MAX_KEYGEN_ATTEMPTS
            ),
        })
    }

    fn sign_inner<R: CryptoRng + RngCore>(
        curve: &CurveDomain,
        message: &[u8],
        secret_key: &EcSecretKey,
        rng: &mut R,
    ) -> Result<Metered<(EcSignature, EcSigningTrace)>> {
        Self::check_secret_key(curve, secret_key)?;
        let mut meter = Meter::new();
        let one = BigUint::one();

        for attempt in 1..=MAX_SIGNING_ATTEMPTS {
            let k = EphemeralSecret::new(random_in_range(rng, &one, curve.order())?);
            let u = EphemeralSecret::new(random_in_range(rng, &one, curve.order())?);
            match Self::sign_core(curve, message, secret_key, &k, &u, attempt, &mut meter) {
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

    /// `G` must generate the order-`n` subgroup and project to a non-zero scalar
    fn check_secret_key(curve: &CurveDomain, secret_key: &EcSecretKey) -> Result<()> {
        let generator = secret_key.expose();
        if !curve.is_in_subgroup(generator) {
            return Err(Error::InvalidKey(format!(
                "G must be a point of the order-n subgroup of {}",
                curve.name()
            )));
        }
        if curve.scalar_of(generator).is_zero() {
            return Err(Error::InvalidKey("π(G) ≡ 0 (mod n)".into()));
        }
        Ok(())
    }

    fn check_point(curve: &CurveDomain, point: &Point, what: &str) -> Result<()> {
        if !curve.is_in_subgroup(point) {
            return Err(Error::InvalidSignature(format!(
                "{} must be a point of the order-n subgroup of {}",
                what,
                curve.name()
            )));
        }
        Ok(())
    }

    fn verify_inner(
        curve: &CurveDomain,
        message: &[u8],
        signature: &EcSignature,
        public_key: &EcPublicKey,
    ) -> Result<Metered<Verification<EcDiagnostics>>> {
        let n = curve.order();
        Self::check_point(curve, &signature.r, "R")?;
        Self::check_point(curve, &signature.z, "Z")?;
        if !curve.is_in_subgroup(public_key.point()) {
            return Err(Error::InvalidKey(format!(
                "P must be a point of the order-n subgroup of {}",
                curve.name()
            )));
        }
        if signature.s.is_zero() || &signature.s >= n {
            return Err(Error::InvalidSignature("s must lie in [1, n)".into()));
        }

        let mut meter = Meter::new();
        let EcSignature { r, s, z } = signature;

        let e = meter.hash_to_scalar(
            &[HashInput::Integer(&r.projection()), HashInput::Bytes(message)],
            n,
        )?;
        let pi_r = curve.scalar_of(r);
        let pi_z = curve.scalar_of(z);

        let lhs = meter.point_mul(curve, &pi_r, z);

        let e_plus_r = mod_add(&e, &pi_r, n)?;
        let c = meter.mod_mul(s, &e_plus_r, n)?;
        let c_r = meter.point_mul(curve, &c, r);
        let z_p = meter.point_mul(curve, &pi_z, public_key.point());
        let rhs = meter.point_add(curve, &c_r, &z_p);

        let is_valid = lhs == rhs;
        debug!("{} verification on {} finished: valid = {}", ALGORITHM, curve.name(), is_valid);

        Ok(meter.finish(Verification {
            is_valid,
            diagnostics: EcDiagnostics { e, lhs, rhs },
        }))
    }
}

impl DssScheme for EllipticCurveDss {
    type Domain = CurveDomain;
    type PublicKey = EcPublicKey;
    type SecretKey = EcSecretKey;
    type Signature = EcSignature;
    type SigningTrace = EcSigningTrace;
    type Diagnostics = EcDiagnostics;

    fn name() -> &'static str {
        ALGORITHM
    }

    fn variant() -> Variant {
        Variant::EllipticCurve
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
