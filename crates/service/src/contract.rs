//! Wire types for the request/response contract
//!
//! Big integers travel as decimal strings, points as `{"x": .., "y": ..}` or
//! the string `"infinity"`. Key, parameter and signature shapes are
//! distinguished structurally; the `variant` field on each request must agree
//! with them. Every parse failure is `Error::InvalidInput`.

use core::fmt;

use nhdss_algorithms::{CurveDomain, FiniteFieldDomain, Point};
use nhdss_api::{Error, ErrorKind, OpCounts, Result, SessionId, Variant};
use nhdss_sign::{
    EcDiagnostics, EcPublicKey, EcSecretKey, EcSignature, EcSigningTrace, FfDiagnostics,
    FfPublicKey, FfSecretKey, FfSignature, FfSigningTrace,
};
use num_bigint_dig::BigUint;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

fn parse_decimal(field: &'static str, value: &str) -> Result<BigUint> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_input(field, "expected a decimal integer"));
    }
    value
        .parse::<BigUint>()
        .map_err(|_| Error::invalid_input(field, "expected a decimal integer"))
}

fn mismatch(context: &'static str, expected: Variant) -> Error {
    Error::invalid_input(context, format!("expected {} data", expected))
}

/// Marker serialized as the string `"infinity"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Infinity {
    Infinity,
}

/// Curve point on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointData {
    Affine { x: String, y: String },
    Infinity(Infinity),
}

impl PointData {
    pub fn to_point(&self, field: &'static str) -> Result<Point> {
        match self {
            PointData::Infinity(_) => Ok(Point::identity()),
            PointData::Affine { x, y } => {
                Ok(Point::affine(parse_decimal(field, x)?, parse_decimal(field, y)?))
            }
        }
    }
}

impl From<&Point> for PointData {
    fn from(point: &Point) -> Self {
        match point {
            Point::Identity => PointData::Infinity(Infinity::Infinity),
            Point::Affine { x, y } => PointData::Affine {
                x: x.to_string(),
                y: y.to_string(),
            },
        }
    }
}

impl Zeroize for PointData {
    fn zeroize(&mut self) {
        if let PointData::Affine { x, y } = self {
            x.zeroize();
            y.zeroize();
        }
    }
}

/// Domain parameters for either variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DomainParams {
    EllipticCurve {
        #[serde(default)]
        name: String,
        p: String,
        a: String,
        b: String,
        order: String,
        base_point: PointData,
    },
    FiniteField {
        p: String,
        q: String,
    },
}

impl DomainParams {
    pub fn variant(&self) -> Variant {
        match self {
            DomainParams::EllipticCurve { .. } => Variant::EllipticCurve,
            DomainParams::FiniteField { .. } => Variant::FiniteField,
        }
    }

    /// Parse and validate prime-field parameters
    pub fn to_finite_field(&self) -> Result<FiniteFieldDomain> {
        match self {
            DomainParams::FiniteField { p, q } => Ok(FiniteFieldDomain::new(
                parse_decimal("domain_params.p", p)?,
                parse_decimal("domain_params.q", q)?,
            )?),
            _ => Err(mismatch("domain_params", Variant::FiniteField)),
        }
    }

    /// Parse and validate curve parameters
    pub fn to_curve(&self) -> Result<CurveDomain> {
        match self {
            DomainParams::EllipticCurve {
                name,
                p,
                a,
                b,
                order,
                base_point,
            } => Ok(CurveDomain::new(
                name.as_str(),
                parse_decimal("domain_params.p", p)?,
                parse_decimal("domain_params.a", a)?,
                parse_decimal("domain_params.b", b)?,
                parse_decimal("domain_params.order", order)?,
                base_point.to_point("domain_params.base_point")?,
            )?),
            _ => Err(mismatch("domain_params", Variant::EllipticCurve)),
        }
    }
}

impl From<&FiniteFieldDomain> for DomainParams {
    fn from(domain: &FiniteFieldDomain) -> Self {
        DomainParams::FiniteField {
            p: domain.p().to_string(),
            q: domain.q().to_string(),
        }
    }
}

impl From<&CurveDomain> for DomainParams {
    fn from(curve: &CurveDomain) -> Self {
        DomainParams::EllipticCurve {
            name: curve.name().to_string(),
            p: curve.p().to_string(),
            a: curve.a().to_string(),
            b: curve.b().to_string(),
            order: curve.order().to_string(),
            base_point: curve.base().into(),
        }
    }
}

/// Secret key on the wire; wiped on drop and never printed
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrivateKey {
    EllipticCurve { secret_generator: PointData },
    FiniteField { x: String },
}

impl PrivateKey {
    pub fn variant(&self) -> Variant {
        match self {
            PrivateKey::EllipticCurve { .. } => Variant::EllipticCurve,
            PrivateKey::FiniteField { .. } => Variant::FiniteField,
        }
    }

    pub fn to_finite_field(&self) -> Result<FfSecretKey> {
        match self {
            PrivateKey::FiniteField { x } => Ok(FfSecretKey::new(parse_decimal("private_key.x", x)?)),
            _ => Err(mismatch("private_key", Variant::FiniteField)),
        }
    }

    pub fn to_elliptic_curve(&self) -> Result<EcSecretKey> {
        match self {
            PrivateKey::EllipticCurve { secret_generator } => Ok(EcSecretKey::new(
                secret_generator.to_point("private_key.secret_generator")?,
            )),
            _ => Err(mismatch("private_key", Variant::EllipticCurve)),
        }
    }
}

impl From<&FfSecretKey> for PrivateKey {
    fn from(key: &FfSecretKey) -> Self {
        PrivateKey::FiniteField {
            x: key.expose().to_string(),
        }
    }
}

impl From<&EcSecretKey> for PrivateKey {
    fn from(key: &EcSecretKey) -> Self {
        PrivateKey::EllipticCurve {
            secret_generator: key.expose().into(),
        }
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        match self {
            PrivateKey::EllipticCurve { secret_generator } => secret_generator.zeroize(),
            PrivateKey::FiniteField { x } => x.zeroize(),
        }
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey({}, [REDACTED])", self.variant())
    }
}

/// Public key on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PublicKey {
    EllipticCurve { public_point: PointData },
    FiniteField { y: String },
}

impl PublicKey {
    pub fn variant(&self) -> Variant {
        match self {
            PublicKey::EllipticCurve { .. } => Variant::EllipticCurve,
            PublicKey::FiniteField { .. } => Variant::FiniteField,
        }
    }

    pub fn to_finite_field(&self) -> Result<FfPublicKey> {
        match self {
            PublicKey::FiniteField { y } => Ok(FfPublicKey::new(parse_decimal("public_key.y", y)?)),
            _ => Err(mismatch("public_key", Variant::FiniteField)),
        }
    }

    pub fn to_elliptic_curve(&self) -> Result<EcPublicKey> {
        match self {
            PublicKey::EllipticCurve { public_point } => Ok(EcPublicKey::new(
                public_point.to_point("public_key.public_point")?,
            )),
            _ => Err(mismatch("public_key", Variant::EllipticCurve)),
        }
    }
}

impl From<&FfPublicKey> for PublicKey {
    fn from(key: &FfPublicKey) -> Self {
        PublicKey::FiniteField {
            y: key.y().to_string(),
        }
    }
}

impl From<&EcPublicKey> for PublicKey {
    fn from(key: &EcPublicKey) -> Self {
        PublicKey::EllipticCurve {
            public_point: key.point().into(),
        }
    }
}

/// Signature on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignatureData {
    EllipticCurve {
        r: PointData,
        s: String,
        z: PointData,
    },
    FiniteField {
        r: String,
        s: String,
        z: String,
    },
}

impl SignatureData {
    pub fn variant(&self) -> Variant {
        match self {
            SignatureData::EllipticCurve { .. } => Variant::EllipticCurve,
            SignatureData::FiniteField { .. } => Variant::FiniteField,
        }
    }

    pub fn to_finite_field(&self) -> Result<FfSignature> {
        match self {
            SignatureData::FiniteField { r, s, z } => Ok(FfSignature {
                r: parse_decimal("signature.r", r)?,
                s: parse_decimal("signature.s", s)?,
                z: parse_decimal("signature.z", z)?,
            }),
            _ => Err(mismatch("signature", Variant::FiniteField)),
        }
    }

    pub fn to_elliptic_curve(&self) -> Result<EcSignature> {
        match self {
            SignatureData::EllipticCurve { r, s, z } => Ok(EcSignature {
                r: r.to_point("signature.r")?,
                s: parse_decimal("signature.s", s)?,
                z: z.to_point("signature.z")?,
            }),
            _ => Err(mismatch("signature", Variant::EllipticCurve)),
        }
    }
}

impl From<&FfSignature> for SignatureData {
    fn from(sig: &FfSignature) -> Self {
        SignatureData::FiniteField {
            r: sig.r.to_string(),
            s: sig.s.to_string(),
            z: sig.z.to_string(),
        }
    }
}

impl From<&EcSignature> for SignatureData {
    fn from(sig: &EcSignature) -> Self {
        SignatureData::EllipticCurve {
            r: (&sig.r).into(),
            s: sig.s.to_string(),
            z: (&sig.z).into(),
        }
    }
}

/// Values computed while signing, for display by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntermediateValues {
    EllipticCurve {
        r: PointData,
        e: String,
        z: PointData,
        numerator: String,
        denominator: String,
        attempts: usize,
    },
    FiniteField {
        r: String,
        e: String,
        z: String,
        numerator: String,
        denominator: String,
        attempts: usize,
    },
}

impl IntermediateValues {
    pub fn finite_field(sig: &FfSignature, trace: &FfSigningTrace) -> Self {
        IntermediateValues::FiniteField {
            r: sig.r.to_string(),
            e: trace.e.to_string(),
            z: sig.z.to_string(),
            numerator: trace.numerator.to_string(),
            denominator: trace.denominator.to_string(),
            attempts: trace.attempts,
        }
    }

    pub fn elliptic_curve(sig: &EcSignature, trace: &EcSigningTrace) -> Self {
        IntermediateValues::EllipticCurve {
            r: (&sig.r).into(),
            e: trace.e.to_string(),
            z: (&sig.z).into(),
            numerator: trace.numerator.to_string(),
            denominator: trace.denominator.to_string(),
            attempts: trace.attempts,
        }
    }
}

/// Values compared during verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Diagnostics {
    EllipticCurve {
        e: String,
        lhs: PointData,
        rhs: PointData,
    },
    FiniteField {
        a: String,
        b: Option<String>,
        r_bar: Option<String>,
    },
}

impl From<&FfDiagnostics> for Diagnostics {
    fn from(diag: &FfDiagnostics) -> Self {
        Diagnostics::FiniteField {
            a: diag.a.to_string(),
            b: diag.b.as_ref().map(ToString::to_string),
            r_bar: diag.r_bar.as_ref().map(ToString::to_string),
        }
    }
}

impl From<&EcDiagnostics> for Diagnostics {
    fn from(diag: &EcDiagnostics) -> Self {
        Diagnostics::EllipticCurve {
            e: diag.e.to_string(),
            lhs: (&diag.lhs).into(),
            rhs: (&diag.rhs).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateKeysRequest {
    /// `0` selects the configured default
    #[serde(default)]
    pub bit_length: usize,
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateKeysResponse {
    pub session_id: SessionId,
    pub variant: Variant,
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
    pub domain_params: DomainParams,
    pub op_counts: OpCounts,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignRequest {
    pub message: String,
    pub private_key: PrivateKey,
    pub domain_params: DomainParams,
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignResponse {
    pub signature: SignatureData,
    pub intermediate_values: IntermediateValues,
    /// Counts for this operation alone
    pub op_counts: OpCounts,
    /// Running totals of the session, for session-scoped calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_op_counts: Option<OpCounts>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyRequest {
    pub message: String,
    pub signature: SignatureData,
    pub public_key: PublicKey,
    pub domain_params: DomainParams,
    pub variant: Variant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyResponse {
    pub is_valid: bool,
    pub diagnostics: Diagnostics,
    pub op_counts: OpCounts,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_op_counts: Option<OpCounts>,
}

/// Failure surfaced to a caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        ErrorResponse {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Check that every structured field agrees with the declared variant
pub(crate) fn expect_variant(declared: Variant, parts: &[(&'static str, Variant)]) -> Result<()> {
    for &(field, actual) in parts {
        if actual != declared {
            return Err(Error::invalid_input(
                field,
                format!("{} data under variant {}", actual, declared),
            ));
        }
    }
    Ok(())
}
