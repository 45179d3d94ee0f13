//! Known-answer vectors on the toy domains
//!
//! Hash values assume the `nhdss:hash-to-scalar:v1` encoding.

/// Finite-field vector over `p = 467`, `q = 233`
#[derive(Debug, Clone, Copy)]
pub struct FfVector {
    pub message: &'static [u8],
    /// Seed `a`; the secret is `a^((p-1)/q) mod p`
    pub seed: u64,
    pub x: u64,
    pub y: u64,
    pub k: u64,
    pub u: u64,
    pub r: u64,
    pub s: u64,
    pub z: u64,
    pub e: u64,
    /// A single-bit message flip the vector rejects
    pub rejected_flip: usize,
}

/// Elliptic-curve vector on the order-53 toy curve
#[derive(Debug, Clone, Copy)]
pub struct EcVector {
    pub message: &'static [u8],
    /// Scalar `m`; the secret generator is `m * base`
    pub m: u64,
    pub generator: (u64, u64),
    pub public: (u64, u64),
    pub k: u64,
    pub u: u64,
    pub r: (u64, u64),
    pub s: u64,
    pub z: (u64, u64),
    pub e: u64,
    pub rejected_flip: usize,
}

pub const FF_VECTORS: [FfVector; 2] = [
    FfVector {
        message: b"test",
        seed: 5,
        x: 25,
        y: 147,
        k: 17,
        u: 31,
        r: 146,
        s: 175,
        z: 248,
        e: 130,
        rejected_flip: 24,
    },
    FfVector {
        message: b"test",
        seed: 5,
        x: 25,
        y: 147,
        k: 101,
        u: 58,
        r: 335,
        s: 177,
        z: 41,
        e: 99,
        rejected_flip: 0,
    },
];

pub const EC_VECTORS: [EcVector; 3] = [
    EcVector {
        message: b"hello",
        m: 7,
        generator: (35, 80),
        public: (63, 31),
        k: 19,
        u: 23,
        r: (93, 70),
        s: 44,
        z: (76, 33),
        e: 15,
        rejected_flip: 32,
    },
    EcVector {
        message: b"hello",
        m: 7,
        generator: (35, 80),
        public: (63, 31),
        k: 5,
        u: 41,
        r: (58, 78),
        s: 8,
        z: (82, 78),
        e: 52,
        rejected_flip: 0,
    },
    EcVector {
        message: b"hello",
        m: 7,
        generator: (35, 80),
        public: (63, 31),
        k: 31,
        u: 12,
        r: (91, 1),
        s: 13,
        z: (82, 19),
        e: 3,
        rejected_flip: 0,
    },
];

/// Another toy key: `m = 11` gives `G = (57, 57)`, `P = (52, 1)`
pub const EC_OTHER_PUBLIC: (u64, u64) = (52, 1);
