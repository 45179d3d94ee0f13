//! Attempt budgets and round counts

/// Nonce resampling budget for one signing call
pub const MAX_SIGNING_ATTEMPTS: usize = 100;

/// Resampling budget for secret key material
pub const MAX_KEYGEN_ATTEMPTS: usize = 100;

/// Candidate budget when searching for the subgroup prime `q`
pub const MAX_PRIME_ATTEMPTS: usize = 10_000;

/// Multiplier budget when searching for `p = k*q + 1`
pub const MAX_DOMAIN_ATTEMPTS: usize = 10_000;

/// Miller-Rabin rounds for generated primes (error below 4^-40)
pub const MILLER_RABIN_ROUNDS: usize = 40;

/// Number of fixed prime bases used to check supplied domains
pub const FIXED_BASE_COUNT: usize = 16;

/// Largest modulus the self-power brute force accepts
pub const MAX_SELF_POWER_MODULUS: u64 = 100;

/// Largest modulus the transcendental brute force accepts
pub const MAX_TRANSCENDENTAL_MODULUS: u64 = 50;
