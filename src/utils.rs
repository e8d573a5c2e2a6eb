// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Row-Major Batch Helpers*
//!
//! Shape checks for the flat, row-major batches passed between simulators and kernels.

use crate::errors::{SimulatorError, log_row_mismatch};

/// Number of rows in a flat row-major batch of `width`-wide rows.
///
/// Errors if `x.len()` is not a multiple of `width`.
#[inline(always)]
pub fn row_count(fname: &str, x: &[f64], width: usize) -> Result<usize, SimulatorError> {
    if width == 0 || x.len() % width != 0 {
        return Err(SimulatorError::LengthMismatch(log_row_mismatch(
            fname,
            x.len(),
            width,
        )));
    }
    Ok(x.len() / width)
}

/// Row stride for broadcasting a batch of `rows` rows against `n` rows.
///
/// A single row broadcasts to every index (stride `0`), `n` rows map one to one
/// (stride `1`). Any other count is a `LengthMismatch`.
#[inline(always)]
pub fn broadcast_stride(fname: &str, rows: usize, n: usize) -> Result<usize, SimulatorError> {
    match rows {
        1 => Ok(0),
        r if r == n => Ok(1),
        r => Err(SimulatorError::LengthMismatch(format!(
            "{} => cannot broadcast {} parameter rows to {} samples",
            fname, r, n
        ))),
    }
}
