//! Constants for the finite-field scheme

/// Smallest accepted modulus size for generated domains
pub const MIN_FF_BIT_LENGTH: usize = 16;

/// Largest accepted modulus size for generated domains
pub const MAX_FF_BIT_LENGTH: usize = 4096;

/// Modulus size used when a caller does not ask for one
pub const DEFAULT_FF_BIT_LENGTH: usize = 256;

/// Toy domain `p = 2q + 1`
pub const TOY_P: u64 = 467;

/// Prime order of the toy subgroup
pub const TOY_Q: u64 = 233;
