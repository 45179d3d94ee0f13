//! Key, signature and trace types for the finite-field scheme

use nhdss_common::SecretScalar;
use num_bigint_dig::BigUint;
use zeroize::Zeroize;

/// Public key `y = x^(-x mod (p-1)) mod p`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfPublicKey {
    y: BigUint,
}

impl FfPublicKey {
    pub fn new(y: BigUint) -> Self {
        Self { y }
    }

    pub fn y(&self) -> &BigUint {
        &self.y
    }
}

/// Secret key `x`, an element of order `q` in `Z_p^*`
///
/// Zeroized on drop through the inner [`SecretScalar`].
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct FfSecretKey(SecretScalar);

impl FfSecretKey {
    pub fn new(x: BigUint) -> Self {
        Self(SecretScalar::new(x))
    }

    /// Borrow the secret exponent
    pub fn expose(&self) -> &BigUint {
        self.0.expose()
    }
}

/// Signature `{r, s, z}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfSignature {
    pub r: BigUint,
    pub s: BigUint,
    pub z: BigUint,
}

/// Intermediate values of one successful signing attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfSigningTrace {
    /// `H(r, M) mod q`
    pub e: BigUint,
    /// `u*r + x*z mod q`
    pub numerator: BigUint,
    /// `k*(e + r) mod q`
    pub denominator: BigUint,
    /// Nonce pairs drawn, including the successful one
    pub attempts: usize,
}

/// Values compared during verification
///
/// `b` and `r_bar` are absent when a required inverse did not exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FfDiagnostics {
    pub a: BigUint,
    pub b: Option<BigUint>,
    pub r_bar: Option<BigUint>,
}
