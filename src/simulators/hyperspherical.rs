// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Hyperspherical Coordinates** - *Embedding a Fuzzy k-Sphere*
//!
//! Row kernels mapping `k` hyperspherical angles plus a noise vector to Cartesian
//! coordinates in `ℝᵈ`, and back.
//!
//! With angles `z₀ … z_{k-1}` and radius `r = 1 + ε₀`:
//!
//! ```text
//! x₀     = r cos z₀
//! x₁     = r sin z₀ cos z₁
//! ...
//! x_{k-1} = r sin z₀ … sin z_{k-2} cos z_{k-1}
//! x_k     = r sin z₀ … sin z_{k-2} sin z_{k-1}
//! x_{k+j} = εⱼ                                  (j ≥ 1)
//! ```
//!
//! See <https://en.wikipedia.org/wiki/N-sphere#Spherical_coordinates>.

use std::f64::consts::{PI, TAU};

/// Reduces an angle into `[0, 2π)`.
#[inline(always)]
pub fn wrap_angle(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if w >= TAU { w - TAU } else { w }
}

/// Canonical form of a latent angle row: every angle in `[0, 2π)`, polar angles
/// (all but the last) reflected into `[0, π]`.
#[inline]
pub fn canonicalise(z_phi: &[f64], out: &mut [f64]) {
    debug_assert_eq!(z_phi.len(), out.len());
    let last = z_phi.len().saturating_sub(1);
    for (i, (&z, o)) in z_phi.iter().zip(out.iter_mut()).enumerate() {
        let w = wrap_angle(z);
        *o = if i < last && w > PI { TAU - w } else { w };
    }
}

/// Embeds one latent row `(z_phi, z_eps)` into `out`.
///
/// `out.len()` must equal `z_phi.len() + z_eps.len()`, and `z_eps` must be non-empty.
#[inline]
pub fn embed_row(z_phi: &[f64], z_eps: &[f64], out: &mut [f64]) {
    let k = z_phi.len();
    debug_assert!(!z_eps.is_empty());
    debug_assert_eq!(out.len(), k + z_eps.len());

    let r = 1.0 + z_eps[0];
    let mut sin_prod = 1.0;
    for (o, &z) in out[..k].iter_mut().zip(z_phi) {
        *o = r * sin_prod * z.cos();
        sin_prod *= z.sin();
    }
    out[k] = r * sin_prod;
    out[k + 1..].copy_from_slice(&z_eps[1..]);
}

/// Angle whose cosine is `xi / norm`.
///
/// A zero `norm` has no defined angle, so `0` is returned. The ratio is
/// clamped into `[-1, 1]` against rounding.
#[inline(always)]
fn polar_angle(xi: f64, norm: f64) -> f64 {
    if norm == 0.0 {
        return 0.0;
    }
    (xi / norm).clamp(-1.0, 1.0).acos()
}

/// Inverts [`embed_row`] for one observation row.
///
/// Angles come back canonical: polar angles in `[0, π]`, the last in `[0, 2π)`.
/// `z_eps[0]` is the radial deviation `‖x[..=k]‖ − 1`.
#[inline]
pub fn project_row(x: &[f64], z_phi: &mut [f64], z_eps: &mut [f64]) {
    let k = z_phi.len();
    debug_assert!(k >= 1);
    debug_assert_eq!(x.len(), k + z_eps.len());

    // Suffix sums of squares, walked from the closing coordinate back to x₀.
    let mut tail = x[k] * x[k];
    for i in (0..k).rev() {
        tail += x[i] * x[i];
        z_phi[i] = polar_angle(x[i], tail.sqrt());
    }
    if x[k] < 0.0 {
        z_phi[k - 1] = TAU - z_phi[k - 1];
    }

    z_eps[0] = tail.sqrt() - 1.0;
    z_eps[1..].copy_from_slice(&x[k + 1..]);
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn assert_row_close(a: &[f64], e: &[f64], tol: f64) {
        assert_eq!(a.len(), e.len());
        for (i, (ai, ei)) in a.iter().zip(e).enumerate() {
            assert!((ai - ei).abs() < tol, "idx {i}: got {ai}, expect {ei}");
        }
    }

    #[test]
    fn circle_matches_polar_coordinates() {
        let phi = 2.0;
        let mut x = [0.0; 2];
        embed_row(&[phi], &[0.5], &mut x);
        assert_row_close(&x, &[1.5 * phi.cos(), 1.5 * phi.sin()], 1e-15);
    }

    #[test]
    fn two_sphere_matches_spherical_coordinates() {
        let (theta, phi) = (0.7, 4.0);
        let mut x = [0.0; 4];
        embed_row(&[theta, phi], &[0.0, 0.25], &mut x);
        let expect = [
            theta.cos(),
            theta.sin() * phi.cos(),
            theta.sin() * phi.sin(),
            0.25,
        ];
        assert_row_close(&x, &expect, 1e-15);
    }

    #[test]
    fn projects_back_canonical_angles() {
        let z = [0.7, 1.3, 4.0];
        let eps = [0.1, -0.2];
        let mut x = [0.0; 5];
        embed_row(&z, &eps, &mut x);

        let mut z_back = [0.0; 3];
        let mut eps_back = [0.0; 2];
        project_row(&x, &mut z_back, &mut eps_back);
        assert_row_close(&z_back, &z, 1e-12);
        assert_row_close(&eps_back, &eps, 1e-12);
    }

    #[test]
    fn negative_closing_coordinate_flips_last_angle() {
        // (0, 0, -1) sits at polar π/2, azimuth 3π/2
        let mut z = [0.0; 2];
        let mut eps = [0.0; 1];
        project_row(&[0.0, 0.0, -1.0], &mut z, &mut eps);
        assert_row_close(&z, &[FRAC_PI_2, 1.5 * PI], 1e-15);
        assert!(eps[0].abs() < 1e-15);
    }

    #[test]
    fn pole_has_finite_angles() {
        let mut z = [9.0; 2];
        let mut eps = [9.0; 1];
        project_row(&[1.0, 0.0, 0.0], &mut z, &mut eps);
        assert_row_close(&z, &[0.0, 0.0], 1e-15);

        project_row(&[0.0, 0.0, 0.0], &mut z, &mut eps);
        assert_row_close(&z, &[0.0, 0.0], 1e-15);
        assert_eq!(eps[0], -1.0);
    }

    #[test]
    fn canonical_form_folds_polar_angles() {
        let mut out = [0.0; 3];
        canonicalise(&[-0.5, 1.5 * PI, -0.5], &mut out);
        assert_row_close(&out, &[0.5, FRAC_PI_2, TAU - 0.5], 1e-15);
    }

    #[test]
    fn wrap_angle_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(TAU + 1.0) - 1.0).abs() < 1e-15);
        assert!((wrap_angle(-1.0) - (TAU - 1.0)).abs() < 1e-15);
        assert!(wrap_angle(-1e-18) < TAU);
    }
}
