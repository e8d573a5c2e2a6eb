// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Uniform Distribution Module** - *Constant Density on a Bounded Interval*
//!
//! Log-density kernels for the continuous uniform distribution on `[a, b]`,
//! used for the box prior over simulator parameters.

use minarrow::{FloatArray, Vec64};

use crate::errors::SimulatorError;

/// ln(1 / (b − a)) on `[a, b]`, `-inf` outside, `NaN` for `NaN` input.
#[inline(always)]
pub fn uniform_logpdf_scalar(x: f64, a: f64, b: f64) -> f64 {
    if x.is_nan() {
        f64::NAN
    } else if x >= a && x <= b {
        -(b - a).ln()
    } else {
        f64::NEG_INFINITY
    }
}

/// Uniform log-PDF over a batch.
///
/// # Parameters
/// - `x`: input data
/// - `a`, `b`: finite interval bounds with `a < b`
#[inline]
pub fn uniform_logpdf(x: &[f64], a: f64, b: f64) -> Result<FloatArray<f64>, SimulatorError> {
    if !(a < b) || !a.is_finite() || !b.is_finite() {
        return Err(SimulatorError::InvalidArguments(
            "uniform_logpdf: a must be < b and both finite".into(),
        ));
    }
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(uniform_logpdf_scalar(xi, a, b));
    }
    Ok(FloatArray::from_vec64(out, None))
}
