// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Simulator Error Handling*
//!
//! Error types for simulator construction, sampling and density evaluation.
//!
//! ## Error Categories
//! - **Configuration Errors**: Dimension and width orderings violated at construction
//! - **Parameter Errors**: Conditional parameters omitted where they are required
//! - **Dimension Errors**: Batch lengths that do not tile into rows of the expected width
//! - **Argument Errors**: Invalid distribution parameters for a kernel call
//!
//! Numerical edge cases such as coordinate singularities at the poles are not errors.
//! Those surface as `inf` or `NaN` in the output arrays.

use core::fmt;
use std::error::Error;

/// Error type for all simulator operations.
///
/// Each variant includes a contextual message string naming the failing
/// operation and the offending values.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulatorError {
    /// Construction precondition violated.
    InvalidConfig(String),

    /// Parameters were required by a conditional simulator but not supplied.
    MissingParameters(String),

    /// Batch length is not a multiple of the row width, or rows cannot broadcast.
    LengthMismatch(String),

    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SimulatorError::MissingParameters(msg) => write!(f, "Missing parameters: {}", msg),
            SimulatorError::LengthMismatch(msg) => write!(f, "Length mismatch: {}", msg),
            SimulatorError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
        }
    }
}

impl Error for SimulatorError {}

/// Creates a formatted error message for a batch whose length does not tile
/// into rows of `width` values.
///
/// # Arguments
/// * `fname` - Function name where the mismatch occurred
/// * `len` - Length of the flat batch slice
/// * `width` - Expected row width
pub fn log_row_mismatch(fname: &str, len: usize, width: usize) -> String {
    format!(
        "{} => length {} is not a multiple of row width {}",
        fname, len, width
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_category() {
        let err = SimulatorError::LengthMismatch(log_row_mismatch("sample", 7, 3));
        assert_eq!(
            err.to_string(),
            "Length mismatch: sample => length 7 is not a multiple of row width 3"
        );
    }
}
