// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Mathematical Constants Module** - *Precomputed Normalisers*
//!
//! Hard-coded constants used by the density kernels.

/// The square root of 2π: √(2π) ≈ 2.506628274631000.
///
/// Normalisation constant of the normal PDF.
pub(crate) const SQRT_2PI: f64 = 2.5066282746310002_f64;

/// Natural log of √(2π) ≈ 0.918938533204673.
///
/// Normalisation constant of the normal log-PDF.
pub(crate) const LN_SQRT_2PI: f64 = 0.9189385332046727_f64;
