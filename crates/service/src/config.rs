//! Runtime configuration for the service layer

use nhdss_params::curves::P256_BITS;
use nhdss_params::finite_field::{DEFAULT_FF_BIT_LENGTH, MAX_FF_BIT_LENGTH, MIN_FF_BIT_LENGTH};
use nhdss_api::error::validate;
use nhdss_api::{Result, Variant};

/// Bounds applied to incoming requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Smallest finite-field modulus accepted at key generation
    pub min_ff_bits: usize,
    /// Largest finite-field modulus accepted at key generation
    pub max_ff_bits: usize,
    /// Largest curve size accepted at key generation
    pub max_ec_bits: usize,
    /// Bit length used when a request asks for `0`
    pub default_bit_length: usize,
    /// Random bytes in a session token, before hex encoding
    pub session_token_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            min_ff_bits: MIN_FF_BIT_LENGTH,
            max_ff_bits: MAX_FF_BIT_LENGTH,
            max_ec_bits: P256_BITS,
            default_bit_length: DEFAULT_FF_BIT_LENGTH,
            session_token_bytes: 16,
        }
    }
}

impl ServiceConfig {
    /// Resolve the requested bit length, rejecting sizes outside the bounds
    pub fn resolve_bit_length(&self, variant: Variant, requested: usize) -> Result<usize> {
        let bits = if requested == 0 {
            self.default_bit_length
        } else {
            requested
        };
        let (min, max) = match variant {
            Variant::FiniteField => (self.min_ff_bits, self.max_ff_bits),
            Variant::EllipticCurve => (1, self.max_ec_bits),
        };
        validate::in_range("bit_length", bits, min, max)?;
        Ok(bits)
    }

    /// Reject inconsistent bounds
    pub fn validate(&self) -> Result<()> {
        validate::parameter(
            self.min_ff_bits <= self.max_ff_bits,
            "config",
            "min_ff_bits exceeds max_ff_bits",
        )?;
        validate::parameter(self.max_ec_bits > 0, "config", "max_ec_bits must be positive")?;
        validate::parameter(
            self.session_token_bytes >= 8,
            "config",
            "session tokens need at least 8 random bytes",
        )
    }
}
