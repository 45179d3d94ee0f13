//! Hashing byte strings and integers into scalars
//!
//! The encoding is `TAG || part_1 || ... || part_n`, each part written as
//! `kind (1 byte) || length (4 bytes, big-endian) || payload`. Integers use
//! their minimal big-endian encoding, zero as a single `0x00`. The length
//! prefixes make the encoding injective, so reordering or re-splitting the
//! parts changes the digest.

use nhdss_common::math_common::to_be_bytes;
use nhdss_params::utils::hash::{HASH_TO_SCALAR_TAG, PART_BYTES, PART_INTEGER};
use num_bigint_dig::BigUint;
use num_traits::Zero;
use sha2::{Digest, Sha256};

use crate::error::{validate, Error, Result};

/// One input to [`hash_to_scalar`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashInput<'a> {
    Integer(&'a BigUint),
    Bytes(&'a [u8]),
}

impl<'a> From<&'a BigUint> for HashInput<'a> {
    fn from(value: &'a BigUint) -> Self {
        HashInput::Integer(value)
    }
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        HashInput::Bytes(value)
    }
}

/// Serialize the tagged, length-prefixed hash input
pub fn encode_parts(parts: &[HashInput<'_>]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(HASH_TO_SCALAR_TAG.len() + parts.len() * 40);
    out.extend_from_slice(HASH_TO_SCALAR_TAG);

    for part in parts {
        let (kind, payload) = match part {
            HashInput::Integer(value) => (PART_INTEGER, to_be_bytes(value)),
            HashInput::Bytes(bytes) => (PART_BYTES, bytes.to_vec()),
        };
        let len = validate::frame_length("hash_to_scalar", payload.len())?;
        out.push(kind);
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(&payload);
    }

    Ok(out)
}

/// SHA-256 over the encoded parts, read big-endian and reduced mod `modulus`
pub fn hash_to_scalar(parts: &[HashInput<'_>], modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::param("modulus", "must be non-zero"));
    }
    let encoded = encode_parts(parts)?;
    let digest = Sha256::digest(&encoded);
    Ok(BigUint::from_bytes_be(digest.as_slice()) % modulus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_layout() {
        let seven = BigUint::from(7u32);
        let zero = BigUint::zero();
        let encoded = encode_parts(&[
            HashInput::Integer(&seven),
            HashInput::Bytes(b"ab"),
            HashInput::Integer(&zero),
        ])
        .unwrap();

        let tag_len = HASH_TO_SCALAR_TAG.len();
        assert_eq!(&encoded[..tag_len], HASH_TO_SCALAR_TAG);
        assert_eq!(
            &encoded[tag_len..],
            &[
                0x01, 0, 0, 0, 1, 7, // integer 7
                0x02, 0, 0, 0, 2, b'a', b'b', // bytes "ab"
                0x01, 0, 0, 0, 1, 0, // integer 0
            ]
        );
    }

    #[test]
    fn test_hash_is_deterministic_and_reduced() {
        let q = BigUint::from(233u32);
        let r = BigUint::from(146u32);
        let a = hash_to_scalar(&[HashInput::Integer(&r), HashInput::Bytes(b"test")], &q).unwrap();
        let b = hash_to_scalar(&[HashInput::Integer(&r), HashInput::Bytes(b"test")], &q).unwrap();
        assert_eq!(a, b);
        assert!(a < q);
        assert_eq!(a, BigUint::from(130u32));
    }

    #[test]
    fn test_parts_are_not_concatenated() {
        let m = BigUint::from_bytes_be(&[0xff; 32]);
        let split = hash_to_scalar(&[HashInput::Bytes(b"ab"), HashInput::Bytes(b"c")], &m).unwrap();
        let joined = hash_to_scalar(&[HashInput::Bytes(b"a"), HashInput::Bytes(b"bc")], &m).unwrap();
        assert_ne!(split, joined);

        let one = BigUint::from(1u32);
        let as_int = hash_to_scalar(&[HashInput::Integer(&one)], &m).unwrap();
        let as_bytes = hash_to_scalar(&[HashInput::Bytes(&[1u8])], &m).unwrap();
        assert_ne!(as_int, as_bytes);
    }

    #[test]
    fn test_zero_modulus_rejected() {
        assert!(hash_to_scalar(&[HashInput::Bytes(b"x")], &BigUint::zero()).is_err());
    }
}
