//! Deterministic domains, keys and RNGs

use nhdss_algorithms::{CurveDomain, FiniteFieldDomain};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Messages used by the completeness and binding checks
pub const MESSAGES: [&[u8]; 4] = [
    b"",
    b"hello",
    b"test",
    b"a considerably longer message that spans several hash blocks, \
      so the length prefix and the padding both get exercised",
];

pub fn rng(seed: u64) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(seed)
}

/// `p = 467`, `q = 233`
pub fn ff_toy() -> FiniteFieldDomain {
    FiniteFieldDomain::toy().expect("toy domain is valid")
}

/// `y^2 = x^3 - 3x + 5 (mod 97)` with base `(6, 3)` of order 53
pub fn ec_toy() -> CurveDomain {
    CurveDomain::toy().expect("toy curve is valid")
}

/// Freshly generated prime-field domain, reproducible from `seed`
pub fn ff_generated(bits: usize, seed: u64) -> FiniteFieldDomain {
    FiniteFieldDomain::generate(bits, &mut rng(seed)).expect("domain generation")
}

/// Copy of `message` with bit `bit` inverted
pub fn flip_bit(message: &[u8], bit: usize) -> Vec<u8> {
    let mut flipped = message.to_vec();
    flipped[bit / 8] ^= 1 << (bit % 8);
    flipped
}
