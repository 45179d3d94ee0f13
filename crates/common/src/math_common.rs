//! Arbitrary-precision modular arithmetic
//!
//! Every value is an exact big integer; nothing in the workspace uses
//! floating point or fixed-width words for scheme arithmetic. All results are
//! normalized into `[0, m)`. A zero modulus is rejected with
//! `Error::InvalidInput` instead of panicking inside the bignum crate.

use nhdss_api::{Error, Result};
use num_bigint_dig::{BigInt, BigUint, RandBigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use rand::{CryptoRng, RngCore};

#[inline]
fn check_modulus(m: &BigUint, context: &'static str) -> Result<()> {
    if m.is_zero() {
        return Err(Error::invalid_input(context, "modulus must be non-zero"));
    }
    Ok(())
}

/// Lift an unsigned value into a signed one
#[inline]
pub fn to_signed(a: &BigUint) -> BigInt {
    BigInt::from_biguint(Sign::Plus, a.clone())
}

/// Normalize any signed value into `[0, m)`
pub fn modulo(a: &BigInt, m: &BigUint) -> Result<BigUint> {
    check_modulus(m, "modulo")?;
    let reduced = a.mod_floor(&to_signed(m));
    reduced
        .to_biguint()
        .ok_or_else(|| Error::other("modulo", "floor remainder was negative"))
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> Result<BigUint> {
    check_modulus(m, "mod_add")?;
    Ok((a + b) % m)
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> Result<BigUint> {
    check_modulus(m, "mod_sub")?;
    let a = a % m;
    let b = b % m;
    Ok((a + m - b) % m)
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> Result<BigUint> {
    check_modulus(m, "mod_mul")?;
    Ok((a * b) % m)
}

/// Perform modular exponentiation (base^exp mod m)
///
/// Square-and-multiply over the bits of `exp`; `m == 1` yields 0.
pub fn mod_pow(base: &BigUint, exp: &BigUint, m: &BigUint) -> Result<BigUint> {
    check_modulus(m, "mod_pow")?;
    if m.is_one() {
        return Ok(BigUint::zero());
    }
    Ok(base.modpow(exp, m))
}

/// Modular exponentiation with a signed exponent
///
/// A negative exponent inverts the base first and raises the inverse to
/// `|exp|`; fails with `Error::NoInverse` when the base is not invertible.
pub fn mod_pow_signed(base: &BigUint, exp: &BigInt, m: &BigUint) -> Result<BigUint> {
    let magnitude = exp
        .abs()
        .to_biguint()
        .ok_or_else(|| Error::other("mod_pow_signed", "absolute value was negative"))?;
    if exp.is_negative() {
        let inverse = mod_inverse(base, m)?;
        mod_pow(&inverse, &magnitude, m)
    } else {
        mod_pow(base, &magnitude, m)
    }
}

/// Extended Euclidean algorithm to compute a^(-1) mod m
///
/// Returns the unique `x` in `[0, m)` with `a * x ≡ 1 (mod m)`. Fails with
/// `Error::NoInverse` when `m <= 1`, when `a ≡ 0` or when `gcd(a, m) != 1`.
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let no_inverse = Error::NoInverse {
        context: "mod_inverse",
    };
    if m.is_zero() || m.is_one() {
        return Err(no_inverse);
    }

    let a = a % m;
    if a.is_zero() {
        return Err(no_inverse);
    }

    // Invariant: old_r ≡ old_s * a and r ≡ s * a (mod m)
    let mut old_r = to_signed(&a);
    let mut r = to_signed(m);
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();

    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = core::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(no_inverse);
    }

    modulo(&old_s, m)
}

/// Compute the greatest common divisor of two numbers
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    a.gcd(b)
}

/// Minimal big-endian encoding; zero encodes as a single `0x00`
pub fn to_be_bytes(a: &BigUint) -> Vec<u8> {
    if a.is_zero() {
        return vec![0u8];
    }
    a.to_bytes_be()
}

/// Length in bytes of the minimal encoding of `m`
pub fn byte_len(m: &BigUint) -> usize {
    ((m.bits() + 7) / 8).max(1)
}

/// Sample uniformly from `[low, high)`
pub fn random_in_range<R: CryptoRng + RngCore>(
    rng: &mut R,
    low: &BigUint,
    high: &BigUint,
) -> Result<BigUint> {
    if low >= high {
        return Err(Error::InvalidInput {
            context: "random_in_range",
            message: format!("empty range [{}, {})", low, high),
        });
    }
    Ok(rng.gen_biguint_range(low, high))
}
