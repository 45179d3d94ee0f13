//! Secret data types with guaranteed zeroization
//!
//! This module provides wrappers for sensitive values that ensure they are
//! wiped when no longer needed and are never leaked through `Debug`.

use core::fmt;
use core::ops::{Deref, DerefMut};

use nhdss_internal::constant_time::ct_eq_padded;
use num_bigint_dig::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret big integer (a secret exponent or scalar)
///
/// Zeroized on drop. Equality is evaluated in constant time over the
/// big-endian encodings.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretScalar {
    value: BigUint,
}

impl SecretScalar {
    /// Wrap a secret value
    pub fn new(value: BigUint) -> Self {
        Self { value }
    }

    /// Borrow the secret value
    ///
    /// Callers must not log or persist the returned reference.
    pub fn expose(&self) -> &BigUint {
        &self.value
    }

    /// Bit length of the secret
    pub fn bits(&self) -> usize {
        self.value.bits()
    }
}

impl PartialEq for SecretScalar {
    fn eq(&self, other: &Self) -> bool {
        let a = self.value.to_bytes_be();
        let b = other.value.to_bytes_be();
        ct_eq_padded(&a, &b, a.len().max(b.len()))
    }
}

impl Eq for SecretScalar {}

impl From<BigUint> for SecretScalar {
    fn from(value: BigUint) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for SecretScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretScalar([REDACTED])")
    }
}

/// Ephemeral secret that is automatically zeroized after use
///
/// This type wraps any type T and ensures it is zeroized when dropped.
/// Signing nonces live in this wrapper for their whole lifetime.
pub struct EphemeralSecret<T: Zeroize> {
    inner: T,
}

impl<T: Zeroize> EphemeralSecret<T> {
    /// Create a new ephemeral secret
    pub fn new(value: T) -> Self {
        Self { inner: value }
    }

    /// Take the inner value out, leaving a default in its place
    ///
    /// The caller becomes responsible for zeroizing the returned value.
    pub fn into_inner(mut self) -> T
    where
        T: Default,
    {
        core::mem::take(&mut self.inner)
    }
}

impl<T: Zeroize> AsRef<T> for EphemeralSecret<T> {
    fn as_ref(&self) -> &T {
        &self.inner
    }
}

impl<T: Zeroize> Drop for EphemeralSecret<T> {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl<T: Zeroize + Clone> Clone for EphemeralSecret<T> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<T: Zeroize> Deref for EphemeralSecret<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T: Zeroize> DerefMut for EphemeralSecret<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<T: Zeroize> fmt::Debug for EphemeralSecret<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EphemeralSecret([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_scalar_redacts_debug() {
        let secret = SecretScalar::new(BigUint::from(25u32));
        let shown = format!("{:?}", secret);
        assert!(shown.contains("REDACTED"));
        assert!(!shown.contains("25"));
    }

    #[test]
    fn test_secret_scalar_equality() {
        let a = SecretScalar::new(BigUint::from(0x0102u32));
        let b = SecretScalar::new(BigUint::from(0x0102u32));
        let c = SecretScalar::new(BigUint::from(0x0103u32));
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.bits(), 9);
    }

    #[test]
    fn test_secret_scalar_zeroize() {
        let mut secret = SecretScalar::new(BigUint::from(12345u32));
        secret.zeroize();
        assert!(secret.expose().to_bytes_be().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_ephemeral_secret() {
        let secret = EphemeralSecret::new(BigUint::from(42u32));
        assert_eq!(*secret, BigUint::from(42u32));

        let cloned = secret.clone();
        assert_eq!(cloned.as_ref(), &BigUint::from(42u32));

        let inner = secret.into_inner();
        assert_eq!(inner, BigUint::from(42u32));
        assert_eq!(format!("{:?}", cloned), "EphemeralSecret([REDACTED])");
    }
}
