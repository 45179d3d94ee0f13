//! Validation utilities shared by all nhdss crates

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::invalid_input(context, reason));
    }
    Ok(())
}

/// Validate that `value` lies in the inclusive range `[min, max]`
#[inline(always)]
pub fn in_range<T: PartialOrd + core::fmt::Display>(
    context: &'static str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(Error::InvalidInput {
            context,
            message: format!("{} is outside [{}, {}]", value, min, max),
        });
    }
    Ok(())
}
