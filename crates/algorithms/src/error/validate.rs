//! Validation utilities for arithmetic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate that a bit length lies in `[min, max]`
#[inline(always)]
pub fn bit_length(name: &'static str, bits: usize, min: usize, max: usize) -> Result<()> {
    if bits < min || bits > max {
        return Err(Error::param(
            name,
            format!("bit length {} is outside [{}, {}]", bits, min, max),
        ));
    }
    Ok(())
}

/// Validate a length prefix fits in four bytes
#[inline(always)]
pub fn frame_length(context: &'static str, actual: usize) -> Result<u32> {
    u32::try_from(actual).map_err(|_| Error::param(context, "part longer than 2^32 - 1 bytes"))
}
