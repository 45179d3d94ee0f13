//! Request handlers over the two engines and an injected session store

use log::{debug, info, warn};
use nhdss_algorithms::{CurveDomain, FiniteFieldDomain};
use nhdss_api::{DssScheme, Error, OpCounts, Result, SessionId, SessionStore, Variant};
use nhdss_sign::{
    EcDiagnostics, EcSignature, EcSigningTrace, EllipticCurveDss, FfDiagnostics, FfSignature,
    FfSigningTrace, FiniteFieldDss, Phase, Transcript,
};
use rand::{CryptoRng, RngCore};

use crate::config::ServiceConfig;
use crate::contract::{
    expect_variant, DomainParams, GenerateKeysRequest, GenerateKeysResponse,
    IntermediateValues, PrivateKey, PublicKey, SignRequest, SignResponse, SignatureData,
    VerifyRequest, VerifyResponse,
};
use crate::store::InMemorySessionStore;

/// Per-session state: one transcript of the session's variant
#[derive(Debug, Clone)]
pub enum SessionRecord {
    FiniteField(Transcript<FiniteFieldDss>),
    EllipticCurve(Transcript<EllipticCurveDss>),
}

impl SessionRecord {
    pub fn variant(&self) -> Variant {
        match self {
            SessionRecord::FiniteField(_) => Variant::FiniteField,
            SessionRecord::EllipticCurve(_) => Variant::EllipticCurve,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            SessionRecord::FiniteField(t) => t.phase(),
            SessionRecord::EllipticCurve(t) => t.phase(),
        }
    }

    pub fn op_counts(&self) -> OpCounts {
        match self {
            SessionRecord::FiniteField(t) => t.op_counts(),
            SessionRecord::EllipticCurve(t) => t.op_counts(),
        }
    }

    /// Wipe key material and return to `Uninitialized`
    pub fn reset(&mut self) {
        match self {
            SessionRecord::FiniteField(t) => t.reset(),
            SessionRecord::EllipticCurve(t) => t.reset(),
        }
    }
}

fn ff_sign_response(
    sig: &FfSignature,
    trace: &FfSigningTrace,
    op_counts: OpCounts,
    session_op_counts: Option<OpCounts>,
) -> SignResponse {
    SignResponse {
        signature: sig.into(),
        intermediate_values: IntermediateValues::finite_field(sig, trace),
        op_counts,
        session_op_counts,
    }
}

fn ec_sign_response(
    sig: &EcSignature,
    trace: &EcSigningTrace,
    op_counts: OpCounts,
    session_op_counts: Option<OpCounts>,
) -> SignResponse {
    SignResponse {
        signature: sig.into(),
        intermediate_values: IntermediateValues::elliptic_curve(sig, trace),
        op_counts,
        session_op_counts,
    }
}

fn ff_verify_response(
    is_valid: bool,
    diagnostics: &FfDiagnostics,
    op_counts: OpCounts,
    session_op_counts: Option<OpCounts>,
) -> VerifyResponse {
    VerifyResponse {
        is_valid,
        diagnostics: diagnostics.into(),
        op_counts,
        session_op_counts,
    }
}

fn ec_verify_response(
    is_valid: bool,
    diagnostics: &EcDiagnostics,
    op_counts: OpCounts,
    session_op_counts: Option<OpCounts>,
) -> VerifyResponse {
    VerifyResponse {
        is_valid,
        diagnostics: diagnostics.into(),
        op_counts,
        session_op_counts,
    }
}

/// Signature service
///
/// Stateless `sign`/`verify` take all key material in the request. The
/// `*_in_session` calls operate on the transcript created by
/// [`generate_keys`](Self::generate_keys) and enforce protocol order.
#[derive(Debug)]
pub struct DssService<S = InMemorySessionStore<SessionRecord>> {
    store: S,
    config: ServiceConfig,
}

impl DssService {
    /// Service over a fresh in-memory store with default bounds
    pub fn in_memory() -> Self {
        DssService {
            store: InMemorySessionStore::new(),
            config: ServiceConfig::default(),
        }
    }
}

impl<S: SessionStore<SessionRecord>> DssService<S> {
    pub fn new(store: S, config: ServiceConfig) -> Result<Self> {
        config.validate()?;
        Ok(DssService { store, config })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn mint_session_id<R: CryptoRng + RngCore>(&self, variant: Variant, rng: &mut R) -> SessionId {
        let mut token = vec![0u8; self.config.session_token_bytes];
        rng.fill_bytes(&mut token);
        SessionId::new(format!("{}_{}", variant.session_prefix(), hex::encode(token)))
    }

    /// Generate domain parameters and a key pair, opening a new session
    pub fn generate_keys<R: CryptoRng + RngCore>(
        &self,
        request: &GenerateKeysRequest,
        rng: &mut R,
    ) -> Result<GenerateKeysResponse> {
        let variant = request.variant;
        let bits = self.config.resolve_bit_length(variant, request.bit_length)?;

        let (record, private_key, public_key, domain_params, op_counts) = match variant {
            Variant::FiniteField => {
                let domain = FiniteFieldDomain::generate(bits, rng)?;
                let ((pk, sk), op_counts) = FiniteFieldDss::keypair(&domain, rng)?.into_parts();
                let private_key = PrivateKey::from(&sk);
                let public_key = PublicKey::from(&pk);
                let domain_params = DomainParams::from(&domain);
                let mut transcript = Transcript::new();
                transcript.install_keys(domain, pk, sk, op_counts)?;
                (
                    SessionRecord::FiniteField(transcript),
                    private_key,
                    public_key,
                    domain_params,
                    op_counts,
                )
            }
            Variant::EllipticCurve => {
                let curve = CurveDomain::for_bit_length(bits)?;
                let ((pk, sk), op_counts) = EllipticCurveDss::keypair(&curve, rng)?.into_parts();
                let private_key = PrivateKey::from(&sk);
                let public_key = PublicKey::from(&pk);
                let domain_params = DomainParams::from(&curve);
                let mut transcript = Transcript::new();
                transcript.install_keys(curve, pk, sk, op_counts)?;
                (
                    SessionRecord::EllipticCurve(transcript),
                    private_key,
                    public_key,
                    domain_params,
                    op_counts,
                )
            }
        };

        let session_id = self.mint_session_id(variant, rng);
        self.store.insert(session_id.clone(), record)?;
        info!("opened {} session {} at {} bits", variant, session_id, bits);

        Ok(GenerateKeysResponse {
            session_id,
            variant,
            private_key,
            public_key,
            domain_params,
            op_counts,
        })
    }

    /// Sign with the key material carried in the request
    pub fn sign<R: CryptoRng + RngCore>(
        &self,
        request: &SignRequest,
        rng: &mut R,
    ) -> Result<SignResponse> {
        expect_variant(
            request.variant,
            &[
                ("domain_params", request.domain_params.variant()),
                ("private_key", request.private_key.variant()),
            ],
        )?;
        let message = request.message.as_bytes();
        debug!("{} sign, {} byte message", request.variant, message.len());

        match request.variant {
            Variant::FiniteField => {
                let domain = request.domain_params.to_finite_field()?;
                let sk = request.private_key.to_finite_field()?;
                let ((sig, trace), op_counts) =
                    FiniteFieldDss::sign(&domain, message, &sk, rng)?.into_parts();
                Ok(ff_sign_response(&sig, &trace, op_counts, None))
            }
            Variant::EllipticCurve => {
                let curve = request.domain_params.to_curve()?;
                let sk = request.private_key.to_elliptic_curve()?;
                let ((sig, trace), op_counts) =
                    EllipticCurveDss::sign(&curve, message, &sk, rng)?.into_parts();
                Ok(ec_sign_response(&sig, &trace, op_counts, None))
            }
        }
    }

    /// Verify with the key material carried in the request
    pub fn verify(&self, request: &VerifyRequest) -> Result<VerifyResponse> {
        expect_variant(
            request.variant,
            &[
                ("domain_params", request.domain_params.variant()),
                ("public_key", request.public_key.variant()),
                ("signature", request.signature.variant()),
            ],
        )?;
        let message = request.message.as_bytes();

        let response = match request.variant {
            Variant::FiniteField => {
                let domain = request.domain_params.to_finite_field()?;
                let pk = request.public_key.to_finite_field()?;
                let sig = request.signature.to_finite_field()?;
                let (verification, op_counts) =
                    FiniteFieldDss::verify(&domain, message, &sig, &pk)?.into_parts();
                ff_verify_response(verification.is_valid, &verification.diagnostics, op_counts, None)
            }
            Variant::EllipticCurve => {
                let curve = request.domain_params.to_curve()?;
                let pk = request.public_key.to_elliptic_curve()?;
                let sig = request.signature.to_elliptic_curve()?;
                let (verification, op_counts) =
                    EllipticCurveDss::verify(&curve, message, &sig, &pk)?.into_parts();
                ec_verify_response(verification.is_valid, &verification.diagnostics, op_counts, None)
            }
        };
        debug!("{} verify: valid = {}", request.variant, response.is_valid);
        Ok(response)
    }

    /// Sign with the session's secret key
    pub fn sign_in_session<R: CryptoRng + RngCore>(
        &self,
        id: &SessionId,
        message: &str,
        rng: &mut R,
    ) -> Result<SignResponse> {
        let response = self.store.update(id, |record| match record {
            SessionRecord::FiniteField(t) => {
                let ((sig, trace), op_counts) = t.sign(message.as_bytes(), rng)?.into_parts();
                Ok(ff_sign_response(&sig, &trace, op_counts, Some(t.op_counts())))
            }
            SessionRecord::EllipticCurve(t) => {
                let ((sig, trace), op_counts) = t.sign(message.as_bytes(), rng)?.into_parts();
                Ok(ec_sign_response(&sig, &trace, op_counts, Some(t.op_counts())))
            }
        });
        if let Err(err) = &response {
            warn!("sign in session {} failed: {}", id, err.kind());
        }
        response
    }

    /// Verify against the session's public key
    pub fn verify_in_session(
        &self,
        id: &SessionId,
        message: &str,
        signature: &SignatureData,
    ) -> Result<VerifyResponse> {
        self.store.update(id, |record| {
            expect_variant(record.variant(), &[("signature", signature.variant())])?;
            match record {
                SessionRecord::FiniteField(t) => {
                    let sig = signature.to_finite_field()?;
                    let (verification, op_counts) = t.verify(message.as_bytes(), &sig)?.into_parts();
                    Ok(ff_verify_response(
                        verification.is_valid,
                        &verification.diagnostics,
                        op_counts,
                        Some(t.op_counts()),
                    ))
                }
                SessionRecord::EllipticCurve(t) => {
                    let sig = signature.to_elliptic_curve()?;
                    let (verification, op_counts) = t.verify(message.as_bytes(), &sig)?.into_parts();
                    Ok(ec_verify_response(
                        verification.is_valid,
                        &verification.diagnostics,
                        op_counts,
                        Some(t.op_counts()),
                    ))
                }
            }
        })
    }

    /// Public half of the session's key material
    pub fn session_public_key(&self, id: &SessionId) -> Result<PublicKey> {
        let record = self.store.get(id)?;
        let public_key = match &record {
            SessionRecord::FiniteField(t) => t.public_key().map(PublicKey::from),
            SessionRecord::EllipticCurve(t) => t.public_key().map(PublicKey::from),
        };
        public_key.ok_or_else(|| Error::invalid_input("session", "no keys in this session"))
    }

    pub fn session_phase(&self, id: &SessionId) -> Result<Phase> {
        Ok(self.store.get(id)?.phase())
    }

    /// Destroy the session, wiping its key material
    pub fn reset_session(&self, id: &SessionId) -> Result<()> {
        let mut record = self.store.remove(id)?;
        record.reset();
        info!("closed {} session {}", record.variant(), id);
        Ok(())
    }
}
