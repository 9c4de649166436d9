//! Validation utilities for the SHA-2 engine

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// View `data` as exactly one block of `N` bytes
#[inline(always)]
pub fn block<'a, const N: usize>(context: &'static str, data: &'a [u8]) -> Result<&'a [u8; N]> {
    data.try_into().map_err(|_| Error::InvalidBlockLength {
        context,
        expected: N,
        actual: data.len(),
    })
}

/// Validate that `requested` more bytes keep the message within `max` bytes
///
/// Returns the new total on success. Checked before anything is consumed,
/// so a rejected write leaves the counter untouched.
#[inline(always)]
pub fn message_length(
    algorithm: &'static str,
    processed: u64,
    requested: u64,
    max: u64,
) -> Result<u64> {
    processed
        .checked_add(requested)
        .filter(|total| *total <= max)
        .ok_or(Error::LengthOverflow {
            algorithm,
            processed,
            requested,
        })
}
