//! Constant-time operations to prevent timing attacks

#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Runs in constant time for slices of equal length.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Left-pad a big-endian encoding with zeros to `width` bytes
///
/// Inputs already `width` bytes or longer are returned unchanged.
pub fn left_pad(bytes: &[u8], width: usize) -> Vec<u8> {
    if bytes.len() >= width {
        return bytes.to_vec();
    }
    let mut out = vec![0u8; width - bytes.len()];
    out.extend_from_slice(bytes);
    out
}

/// Compare two big-endian integers in constant time
///
/// Both encodings are padded to `width` bytes first so that minimal
/// encodings of different lengths compare by value, not by length.
pub fn ct_eq_padded(a: &[u8], b: &[u8], width: usize) -> bool {
    let width = width.max(a.len()).max(b.len());
    ct_eq(left_pad(a, width), left_pad(b, width))
}
