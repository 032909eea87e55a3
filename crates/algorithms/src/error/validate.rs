//! Validation utilities for the curve primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Copy a slice into a fixed-size array after checking its length
pub fn fixed_bytes<const N: usize>(context: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    length(context, bytes.len(), N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
