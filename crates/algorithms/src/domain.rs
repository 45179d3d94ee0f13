//! Finite-field domain parameters `{p, q}` with `q | p - 1`

use log::{debug, info, warn};
use nhdss_params::finite_field::{MAX_FF_BIT_LENGTH, MIN_FF_BIT_LENGTH, TOY_P, TOY_Q};
use nhdss_params::limits::{MAX_DOMAIN_ATTEMPTS, MAX_PRIME_ATTEMPTS, MILLER_RABIN_ROUNDS};
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{validate, Error, Result};
use crate::primality::{is_probable_prime, passes_fixed_bases, random_prime};

/// Prime modulus `p` and the prime order `q` of the signing subgroup
///
/// Immutable once built; every constructor validates that both values are
/// prime and that `q` divides `p - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteFieldDomain {
    p: BigUint,
    q: BigUint,
}

impl FiniteFieldDomain {
    /// Validate caller-supplied parameters
    pub fn new(p: BigUint, q: BigUint) -> Result<Self> {
        validate::parameter(q >= BigUint::from(3u32), "q", "must be an odd prime")?;
        validate::parameter(p > q, "p", "must exceed q")?;
        validate::parameter(passes_fixed_bases(&p), "p", "must be prime")?;
        validate::parameter(passes_fixed_bases(&q), "q", "must be prime")?;
        let p_minus_1 = &p - BigUint::one();
        validate::parameter(
            (&p_minus_1 % &q).is_zero(),
            "q",
            "must divide p - 1",
        )?;
        Ok(FiniteFieldDomain { p, q })
    }

    /// The toy domain `p = 467`, `q = 233`
    pub fn toy() -> Result<Self> {
        Self::new(BigUint::from(TOY_P), BigUint::from(TOY_Q))
    }

    /// Generate a fresh domain whose modulus has exactly `bit_length` bits
    ///
    /// Samples a prime `q` of `bit_length / 2` bits, then searches even
    /// multipliers `k` until `p = k*q + 1` is prime. Both searches are bounded.
    pub fn generate<R: CryptoRng + RngCore>(bit_length: usize, rng: &mut R) -> Result<Self> {
        validate::bit_length("bit_length", bit_length, MIN_FF_BIT_LENGTH, MAX_FF_BIT_LENGTH)?;

        let q_bits = bit_length / 2;
        let q = random_prime(q_bits, MILLER_RABIN_ROUNDS, rng, MAX_PRIME_ATTEMPTS)?;
        debug!("subgroup prime q has {} bits", q.bits());

        // p in [2^(L-1), 2^L - 1]  =>  k in [ceil((2^(L-1) - 1) / q), floor((2^L - 2) / q)]
        let p_min = BigUint::one() << (bit_length - 1);
        let p_max = (BigUint::one() << bit_length) - BigUint::one();
        let k_min = (&p_min - BigUint::one() + &q - BigUint::one()) / &q;
        let k_max = (&p_max - BigUint::one()) / &q;

        for attempt in 1..=MAX_DOMAIN_ATTEMPTS {
            let mut k = rng.gen_biguint_range(&k_min, &(&k_max + BigUint::one()));
            if k.is_odd() {
                k = if k < k_max { k + BigUint::one() } else { k - BigUint::one() };
            }
            let p = &k * &q + BigUint::one();
            if p.bits() != bit_length {
                continue;
            }
            if is_probable_prime(&p, MILLER_RABIN_ROUNDS, rng) {
                info!(
                    "generated {}-bit finite-field domain after {} multipliers",
                    bit_length, attempt
                );
                return Ok(FiniteFieldDomain { p, q });
            }
        }

        warn!(
            "no prime p = k*q + 1 of {} bits within {} multipliers",
            bit_length, MAX_DOMAIN_ATTEMPTS
        );
        Err(Error::DomainGeneration {
            context: "FiniteFieldDomain::generate",
            details: format!(
                "no {}-bit prime p = k*q + 1 within {} attempts",
                bit_length, MAX_DOMAIN_ATTEMPTS
            ),
        })
    }

    /// Prime modulus
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Prime subgroup order
    pub fn q(&self) -> &BigUint {
        &self.q
    }

    /// `(p - 1) / q`
    pub fn cofactor(&self) -> BigUint {
        (&self.p - BigUint::one()) / &self.q
    }

    /// Bit length of `p`
    pub fn bit_length(&self) -> usize {
        self.p.bits()
    }
}
