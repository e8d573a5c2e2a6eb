// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Normal Distribution Module** - *Gaussian Density and Log-Density*
//!
//! Scalar and batch normal PDF / log-PDF kernels. The scalar forms skip parameter
//! validation and are meant for inner loops whose parameters were checked upstream.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use minarrow::vec64;
//! use manifold_simulators::distributions::univariate::normal::*;
//!
//! let x = vec64![-2.0, -1.0, 0.0, 1.0, 2.0];
//! let pdf = normal_pdf(&x, 0.0, 1.0).unwrap();
//! let logpdf = normal_logpdf(&x, 0.0, 1.0).unwrap();
//! ```

use minarrow::{FloatArray, Vec64};

use crate::distributions::shared::constants::{LN_SQRT_2PI, SQRT_2PI};
use crate::errors::SimulatorError;

/// φ((x − mean) / std) / std, without parameter validation.
#[inline(always)]
pub fn normal_pdf_scalar(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * SQRT_2PI)
}

/// ln φ((x − mean) / std) − ln std, without parameter validation.
#[inline(always)]
pub fn normal_logpdf_scalar(x: f64, mean: f64, std: f64) -> f64 {
    let z = (x - mean) / std;
    -0.5 * z * z - std.ln() - LN_SQRT_2PI
}

#[inline(always)]
fn check_params(fname: &str, mean: f64, std: f64) -> Result<(), SimulatorError> {
    if std <= 0.0 || !std.is_finite() || !mean.is_finite() {
        return Err(SimulatorError::InvalidArguments(format!(
            "{}: invalid parameters mean={} std={}",
            fname, mean, std
        )));
    }
    Ok(())
}

/// Normal PDF over a batch.
///
/// # Parameters
/// - `x`: input data
/// - `mean`: normal mean
/// - `std`: normal standard deviation, finite and > 0
#[inline]
pub fn normal_pdf(x: &[f64], mean: f64, std: f64) -> Result<FloatArray<f64>, SimulatorError> {
    check_params("normal_pdf", mean, std)?;
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(normal_pdf_scalar(xi, mean, std));
    }
    Ok(FloatArray::from_vec64(out, None))
}

/// Normal log-PDF over a batch, evaluated directly in log space.
///
/// # Parameters
/// - `x`: input data
/// - `mean`: normal mean
/// - `std`: normal standard deviation, finite and > 0
#[inline]
pub fn normal_logpdf(x: &[f64], mean: f64, std: f64) -> Result<FloatArray<f64>, SimulatorError> {
    check_params("normal_logpdf", mean, std)?;
    let mut out = Vec64::with_capacity(x.len());
    for &xi in x {
        out.push(normal_logpdf_scalar(xi, mean, std));
    }
    Ok(FloatArray::from_vec64(out, None))
}

#[cfg(test)]
mod tests {
    use minarrow::vec64;

    use super::*;

    fn assert_slice_close(a: &[f64], e: &[f64], tol: f64) {
        assert_eq!(a.len(), e.len());
        for (i, (ai, ei)) in a.iter().zip(e).enumerate() {
            assert!((ai - ei).abs() <= tol * ei.abs().max(1.0), "idx {i}: got {ai}, expect {ei}");
        }
    }

    #[test]
    fn normal_pdf_standard() {
        // scipy.stats.norm.pdf([-3, -1, 0, 1, 3])
        let x = vec64![-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.0044318484119380075,
            0.24197072451914337,
            0.3989422804014327,
            0.24197072451914337,
            0.0044318484119380075,
        ];
        let got = normal_pdf(&x, 0.0, 1.0).unwrap();
        assert_slice_close(got.data.as_slice(), &expect, 1e-15);
    }

    #[test]
    fn normal_pdf_different_variance() {
        // scipy.stats.norm.pdf([-3, -1, 0, 1, 3], scale=2)
        let x = vec64![-3.0, -1.0, 0.0, 1.0, 3.0];
        let expect = [
            0.064758797832945872,
            0.17603266338214976,
            0.19947114020071635,
            0.17603266338214976,
            0.064758797832945872,
        ];
        let got = normal_pdf(&x, 0.0, 2.0).unwrap();
        assert_slice_close(got.data.as_slice(), &expect, 1e-15);
    }

    #[test]
    fn normal_logpdf_shifted_mean() {
        // scipy.stats.norm.logpdf([-3, 0, 2], loc=2)
        let x = vec64![-3.0, 0.0, 2.0];
        let expect = [-13.418938533204672, -2.9189385332046727, -0.9189385332046727];
        let got = normal_logpdf(&x, 2.0, 1.0).unwrap();
        assert_slice_close(got.data.as_slice(), &expect, 1e-15);
    }

    #[test]
    fn logpdf_does_not_underflow() {
        // pdf underflows to 0 far in the tail, the log-pdf stays finite
        let x = 60.0;
        assert_eq!(normal_pdf_scalar(x, 0.0, 1.0), 0.0);
        assert!((normal_logpdf_scalar(x, 0.0, 1.0) - (-1800.9189385332047)).abs() < 1e-9);
    }

    #[test]
    fn invalid_scale_rejected() {
        assert!(normal_pdf(&[0.5], 0.0, 0.0).is_err());
        assert!(normal_logpdf(&[0.5], 0.0, -1.0).is_err());
        assert!(normal_logpdf(&[0.5], f64::NAN, 1.0).is_err());
    }

    #[test]
    fn empty_input() {
        let got = normal_logpdf(&[], 0.0, 1.0).unwrap();
        assert_eq!(got.data.len(), 0);
    }
}
