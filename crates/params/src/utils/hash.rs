//! Constants for hashing into scalars

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Domain-separation tag prepended to every hash-to-scalar input
pub const HASH_TO_SCALAR_TAG: &[u8] = b"nhdss:hash-to-scalar:v1";

/// Kind byte for integer parts
pub const PART_INTEGER: u8 = 0x01;

/// Kind byte for byte-string parts
pub const PART_BYTES: u8 = 0x02;
