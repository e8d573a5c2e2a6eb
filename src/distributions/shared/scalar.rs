// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Scalar Helpers** - *Log-Space Arithmetic*

/// Numerically stable `ln(exp(a) + exp(b))`.
///
/// `-inf` is the identity, so an accumulator may start at `f64::NEG_INFINITY`.
/// Any `NaN` argument propagates.
#[inline(always)]
pub fn log_add_exp(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return f64::NAN;
    }
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    if hi == f64::NEG_INFINITY || hi == f64::INFINITY {
        return hi;
    }
    hi + (lo - hi).exp().ln_1p()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_naive_sum() {
        let (a, b) = (-1.0_f64, 2.0_f64);
        let naive = (a.exp() + b.exp()).ln();
        assert!((log_add_exp(a, b) - naive).abs() < 1e-14);
        assert!((log_add_exp(b, a) - naive).abs() < 1e-14);
    }

    #[test]
    fn survives_underflow() {
        // exp(-1000) underflows to 0, the sum in log space does not
        let got = log_add_exp(-1000.0, -1000.0);
        assert!((got - (-1000.0 + 2.0_f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn neg_infinity_is_identity() {
        assert_eq!(log_add_exp(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(log_add_exp(f64::NEG_INFINITY, -3.5), -3.5);
        assert_eq!(log_add_exp(f64::INFINITY, 0.0), f64::INFINITY);
        assert!(log_add_exp(0.0, f64::NAN).is_nan());
    }
}
