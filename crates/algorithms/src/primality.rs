//! Probabilistic primality testing and random prime generation

use log::{debug, warn};
use num_bigint_dig::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{validate, Error, Result};

/// Primes used for trial division before Miller-Rabin
const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Result of trial division
enum Trial {
    Prime,
    Composite,
    Unknown,
}

fn trial_division(n: &BigUint) -> Trial {
    if n < &BigUint::from(2u32) {
        return Trial::Composite;
    }
    if let Some(small) = n.to_u32() {
        if SMALL_PRIMES.contains(&small) {
            return Trial::Prime;
        }
    }
    for &p in SMALL_PRIMES.iter() {
        if (n % BigUint::from(p)).is_zero() {
            return Trial::Composite;
        }
    }
    // Every composite below 257^2 has a factor in the table
    if n < &BigUint::from(257u32 * 257) {
        return Trial::Prime;
    }
    Trial::Unknown
}

/// `n - 1 = d * 2^s` with `d` odd
fn decompose(n_minus_1: &BigUint) -> (BigUint, usize) {
    let mut d = n_minus_1.clone();
    let mut s = 0usize;
    while d.is_even() {
        d >>= 1usize;
        s += 1;
    }
    (d, s)
}

/// Returns true when `a` proves `n` composite
fn is_witness(n: &BigUint, n_minus_1: &BigUint, d: &BigUint, s: usize, a: &BigUint) -> bool {
    let mut x = a.modpow(d, n);
    if x.is_one() || &x == n_minus_1 {
        return false;
    }
    for _ in 1..s {
        x = (&x * &x) % n;
        if &x == n_minus_1 {
            return false;
        }
    }
    true
}

/// Miller-Rabin with `rounds` random witnesses drawn from `[2, n - 2]`
///
/// Small and even inputs are settled by trial division. The probability that
/// a composite passes is at most `4^-rounds`.
pub fn is_probable_prime<R: CryptoRng + RngCore>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    match trial_division(n) {
        Trial::Prime => return true,
        Trial::Composite => return false,
        Trial::Unknown => {}
    }

    let n_minus_1 = n - BigUint::one();
    let (d, s) = decompose(&n_minus_1);
    let low = BigUint::from(2u32);

    for _ in 0..rounds {
        let a = rng.gen_biguint_range(&low, &n_minus_1);
        if is_witness(n, &n_minus_1, &d, s, &a) {
            return false;
        }
    }
    true
}

/// Deterministic Miller-Rabin over the first 16 prime bases
///
/// Used to validate caller-supplied parameters without an RNG. Exact for
/// every `n < 3.3 * 10^24` and a strong check beyond that.
pub fn passes_fixed_bases(n: &BigUint) -> bool {
    match trial_division(n) {
        Trial::Prime => return true,
        Trial::Composite => return false,
        Trial::Unknown => {}
    }

    let n_minus_1 = n - BigUint::one();
    let (d, s) = decompose(&n_minus_1);

    SMALL_PRIMES
        .iter()
        .take(nhdss_params::limits::FIXED_BASE_COUNT)
        .all(|&base| !is_witness(n, &n_minus_1, &d, s, &BigUint::from(base)))
}

/// Sample a random prime of exactly `bits` bits
///
/// Candidates are odd with the top bit set. Fails with
/// `Error::DomainGeneration` after `max_attempts` composites.
pub fn random_prime<R: CryptoRng + RngCore>(
    bits: usize,
    rounds: usize,
    rng: &mut R,
    max_attempts: usize,
) -> Result<BigUint> {
    validate::parameter(bits >= 2, "bits", "a prime needs at least 2 bits")?;
    let top = BigUint::one() << (bits - 1);

    for attempt in 1..=max_attempts {
        let candidate = rng.gen_biguint(bits) | &top | BigUint::one();
        if is_probable_prime(&candidate, rounds, rng) {
            debug!("found {}-bit prime after {} candidates", bits, attempt);
            return Ok(candidate);
        }
    }

    warn!("no {}-bit prime within {} candidates", bits, max_attempts);
    Err(Error::DomainGeneration {
        context: "random_prime",
        details: format!("no {}-bit prime within {} candidates", bits, max_attempts),
    })
}
