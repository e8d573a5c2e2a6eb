// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Conditional Spherical Gaussian** - *A Fuzzy k-Sphere with Two Parameters*
//!
//! Observations lie near the unit `latent_dim`-sphere in `ℝ^data_dim`. Each angular
//! coordinate is an independent normal draw reduced modulo 2π, the radius and the
//! off-manifold directions carry `N(0, ε²)` noise.
//!
//! The two parameters `θ ∈ [-1, 1]²` act on the angular distribution only:
//! - `θ₀` interpolates the common angular width between `min_width` and `max_width`.
//! - `θ₁` interpolates the phase of the last (azimuthal) angle between π/2 and 3π/2.
//!   Every polar angle is centred on π/2.
//!
//! ## Density
//! ```text
//! ln p(x | θ) = Σᵢ ln Σ_{images a of cᵢ} N(a; phaseᵢ, width)
//!             + Σⱼ ln N(εⱼ; 0, ε)
//!             + k·|r| + Σ_{i<k-1} (k-1-i)·ln|sin zᵢ|
//! ```
//! where `(z, ε) = inverse(x)`, `c = canonical(z)`, `r = 1 + ε₀`.
//! The images are enumerated by [`EquivalentAngles`].
//!
//! Coordinate singularities (poles, zero radius) are not errors. They show up as
//! `-inf` or `NaN` log-densities.

use minarrow::{FloatArray, Vec64};
use rand::RngCore;
use tracing::{debug, trace};

use crate::config::{
    MAX_PHASE, MIN_PHASE, PARAMETER_DIM, POLAR_PHASE, PRIOR_HIGH, PRIOR_LOW, SimulatorConfig,
};
use crate::distributions::shared::sampler::{normal_vec, sample_normal, uniform_vec};
use crate::distributions::shared::scalar::log_add_exp;
use crate::distributions::univariate::normal::{
    normal_logpdf, normal_logpdf_scalar, normal_pdf_scalar,
};
use crate::distributions::univariate::uniform::uniform_logpdf;
use crate::errors::SimulatorError;
use crate::simulators::Simulator;
use crate::simulators::equivalent::EquivalentAngles;
use crate::simulators::hyperspherical::{canonicalise, embed_row, project_row, wrap_angle};
use crate::utils::{broadcast_stride, row_count};

/// Per-sample angular distribution derived from one parameter row.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AngularParameters {
    width: f64,
    azimuth_phase: f64,
}

impl AngularParameters {
    #[inline(always)]
    fn phase(&self, dim: usize, latent_dim: usize) -> f64 {
        if dim + 1 == latent_dim {
            self.azimuth_phase
        } else {
            POLAR_PHASE
        }
    }
}

/// Conditional spherical Gaussian simulator.
///
/// Immutable once constructed; every operation is a pure function of its
/// arguments and the caller's random generator.
#[derive(Debug, Clone)]
pub struct ConditionalSphericalGaussian {
    config: SimulatorConfig,
}

impl ConditionalSphericalGaussian {
    /// Validates `config` and builds the simulator.
    pub fn new(config: SimulatorConfig) -> Result<Self, SimulatorError> {
        config.validate()?;
        debug!(
            latent_dim = config.latent_dim,
            data_dim = config.data_dim,
            min_width = config.min_width,
            max_width = config.max_width,
            epsilon = config.epsilon,
            "conditional spherical gaussian simulator ready"
        );
        Ok(Self { config })
    }

    /// Simulator with zero noise, for samples exactly on the unit sphere.
    ///
    /// Widths take their defaults. The density of a noiseless model is undefined,
    /// so `log_density` returns `InvalidArguments`.
    pub fn noiseless(latent_dim: usize, data_dim: usize) -> Result<Self, SimulatorError> {
        let mut sim = Self::new(SimulatorConfig::with_dims(latent_dim, data_dim))?;
        sim.config.epsilon = 0.0;
        debug!(latent_dim, data_dim, "noise disabled");
        Ok(sim)
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn epsilon(&self) -> f64 {
        self.config.epsilon
    }

    #[inline(always)]
    fn noise_dim(&self) -> usize {
        self.config.data_dim - self.config.latent_dim
    }

    /// Maps parameter rows to `n` per-sample angular distributions.
    fn parse_parameters(
        &self,
        fname: &str,
        n: usize,
        parameters: Option<&[f64]>,
    ) -> Result<Vec<AngularParameters>, SimulatorError> {
        let parameters = parameters.ok_or_else(|| {
            SimulatorError::MissingParameters(format!(
                "{}: conditional simulator requires parameters",
                fname
            ))
        })?;
        let rows = row_count(fname, parameters, PARAMETER_DIM)?;
        let stride = broadcast_stride(fname, rows, n)?;

        let c = &self.config;
        let mut out = Vec::with_capacity(n);
        for i in 0..n {
            let start = i * stride * PARAMETER_DIM;
            let row = &parameters[start..start + PARAMETER_DIM];
            let width = c.min_width + (0.5 + 0.5 * row[0]) * (c.max_width - c.min_width);
            let azimuth_phase = MIN_PHASE + (0.5 + 0.5 * row[1]) * (MAX_PHASE - MIN_PHASE);
            if !(width > 0.0) || !width.is_finite() || !azimuth_phase.is_finite() {
                return Err(SimulatorError::InvalidArguments(format!(
                    "{}: parameters ({}, {}) give angular width {}",
                    fname, row[0], row[1], width
                )));
            }
            out.push(AngularParameters {
                width,
                azimuth_phase,
            });
        }
        Ok(out)
    }

    /// Inverse embedding of a batch: returns `(z_phi, z_eps)`, row-major
    /// `n × latent_dim` and `n × (data_dim − latent_dim)`.
    ///
    /// Angles come back canonical, polar angles in `[0, π]`, the last in `[0, 2π)`.
    pub fn latent_from_observation(
        &self,
        x: &[f64],
    ) -> Result<(Vec64<f64>, Vec64<f64>), SimulatorError> {
        let (k, d, nd) = (self.config.latent_dim, self.config.data_dim, self.noise_dim());
        let n = row_count("latent_from_observation", x, d)?;

        let mut z_phi = Vec64::with_capacity(n * k);
        z_phi.resize(n * k, 0.0);
        let mut z_eps = Vec64::with_capacity(n * nd);
        z_eps.resize(n * nd, 0.0);

        for ((x_row, phi_row), eps_row) in x
            .chunks_exact(d)
            .zip(z_phi.chunks_exact_mut(k))
            .zip(z_eps.chunks_exact_mut(nd))
        {
            project_row(x_row, phi_row, eps_row);
        }
        Ok((z_phi, z_eps))
    }

    /// Forward embedding of a batch of latent rows, row-major `n × data_dim`.
    pub fn observation_from_latent(
        &self,
        z_phi: &[f64],
        z_eps: &[f64],
    ) -> Result<Vec64<f64>, SimulatorError> {
        let fname = "observation_from_latent";
        let (k, d, nd) = (self.config.latent_dim, self.config.data_dim, self.noise_dim());
        let n = self.latent_rows(fname, z_phi, z_eps)?;

        let mut x = Vec64::with_capacity(n * d);
        x.resize(n * d, 0.0);
        for ((phi_row, eps_row), x_row) in z_phi
            .chunks_exact(k)
            .zip(z_eps.chunks_exact(nd))
            .zip(x.chunks_exact_mut(d))
        {
            embed_row(phi_row, eps_row, x_row);
        }
        Ok(x)
    }

    /// Row count shared by a pair of latent batches.
    fn latent_rows(
        &self,
        fname: &str,
        z_phi: &[f64],
        z_eps: &[f64],
    ) -> Result<usize, SimulatorError> {
        let n = row_count(fname, z_phi, self.config.latent_dim)?;
        let m = row_count(fname, z_eps, self.noise_dim())?;
        if n != m {
            return Err(SimulatorError::LengthMismatch(format!(
                "{} => {} angle rows but {} noise rows",
                fname, n, m
            )));
        }
        Ok(n)
    }

    /// Draws latent angles and noise for every sample.
    fn draw_latent(
        &self,
        rng: &mut dyn RngCore,
        params: &[AngularParameters],
    ) -> (Vec64<f64>, Vec64<f64>) {
        let (k, nd) = (self.config.latent_dim, self.noise_dim());
        let n = params.len();

        let mut z_phi = Vec64::with_capacity(n * k);
        for p in params {
            for dim in 0..k {
                z_phi.push(wrap_angle(sample_normal(rng, p.phase(dim, k), p.width)));
            }
        }

        let z_eps = normal_vec(rng, n * nd, 0.0, self.config.epsilon);
        (z_phi, z_eps)
    }

    /// Log-density evaluated directly on latent coordinates.
    ///
    /// Angles may be raw, i.e. any pre-image of the canonical angle. The result
    /// matches `log_density` on the embedded observation.
    ///
    /// With `precise`, each coordinate's wrapped sum is accumulated in log space, so
    /// images whose density underflows still contribute.
    pub fn log_density_latent(
        &self,
        z_phi: &[f64],
        z_eps: &[f64],
        parameters: Option<&[f64]>,
        precise: bool,
    ) -> Result<FloatArray<f64>, SimulatorError> {
        let fname = "log_density";
        let (k, nd) = (self.config.latent_dim, self.noise_dim());
        let n = self.latent_rows(fname, z_phi, z_eps)?;
        let params = self.parse_parameters(fname, n, parameters)?;
        trace!(n, precise, "evaluating log density");

        let noise = normal_logpdf(z_eps, 0.0, self.config.epsilon)?;
        let noise = noise.data.as_slice();

        let mut canonical = vec![0.0; k];
        let mut acc = vec![0.0; k];
        let mut out = Vec64::with_capacity(n);
        for (i, (phi_row, eps_row)) in z_phi
            .chunks_exact(k)
            .zip(z_eps.chunks_exact(nd))
            .enumerate()
        {
            let angular =
                self.angular_log_density(phi_row, &params[i], precise, &mut canonical, &mut acc);
            let noise_term: f64 = noise[i * nd..(i + 1) * nd].iter().sum();
            let log_det = self.log_jacobian(phi_row, 1.0 + eps_row[0]);
            out.push(angular + noise_term + log_det);
        }
        Ok(FloatArray::from_vec64(out, None))
    }

    /// Σ over coordinates of the log wrapped-normal density of one angle row.
    ///
    /// `canonical` and `acc` are `latent_dim`-long scratch buffers.
    fn angular_log_density(
        &self,
        z_phi: &[f64],
        params: &AngularParameters,
        precise: bool,
        canonical: &mut [f64],
        acc: &mut [f64],
    ) -> f64 {
        let k = self.config.latent_dim;
        canonicalise(z_phi, canonical);

        if precise {
            acc.fill(f64::NEG_INFINITY);
            for image in EquivalentAngles::new(canonical) {
                let phase = params.phase(image.dim, k);
                let lp = normal_logpdf_scalar(image.angle, phase, params.width);
                acc[image.dim] = log_add_exp(acc[image.dim], lp);
            }
            acc.iter().sum()
        } else {
            acc.fill(0.0);
            for image in EquivalentAngles::new(canonical) {
                acc[image.dim] +=
                    normal_pdf_scalar(image.angle, params.phase(image.dim, k), params.width);
            }
            acc.iter().map(|p| p.ln()).sum()
        }
    }

    /// `k·|r| + Σ_{i<k-1} (k-1-i)·ln|sin zᵢ|` for one row.
    ///
    /// The last angle has weight zero and is skipped.
    #[inline]
    fn log_jacobian(&self, z_phi: &[f64], r: f64) -> f64 {
        let k = z_phi.len();
        let mut log_det = k as f64 * r.abs();
        for (i, z) in z_phi[..k - 1].iter().enumerate() {
            log_det += (k - 1 - i) as f64 * z.sin().abs().ln();
        }
        log_det
    }
}

impl Simulator for ConditionalSphericalGaussian {
    fn is_image(&self) -> bool {
        false
    }

    fn data_dim(&self) -> usize {
        self.config.data_dim
    }

    fn latent_dim(&self) -> usize {
        self.config.latent_dim
    }

    fn parameter_dim(&self) -> usize {
        PARAMETER_DIM
    }

    fn sample(
        &self,
        rng: &mut dyn RngCore,
        n: usize,
        parameters: Option<&[f64]>,
    ) -> Result<Vec64<f64>, SimulatorError> {
        let params = self.parse_parameters("sample", n, parameters)?;
        trace!(n, "sampling");
        let (z_phi, z_eps) = self.draw_latent(rng, &params);
        self.observation_from_latent(&z_phi, &z_eps)
    }

    fn sample_from_prior(
        &self,
        rng: &mut dyn RngCore,
        n: usize,
    ) -> Result<Vec64<f64>, SimulatorError> {
        Ok(uniform_vec(rng, n * PARAMETER_DIM, PRIOR_LOW, PRIOR_HIGH))
    }

    fn evaluate_log_prior(&self, parameters: &[f64]) -> Result<FloatArray<f64>, SimulatorError> {
        let n = row_count("evaluate_log_prior", parameters, PARAMETER_DIM)?;
        let lp = uniform_logpdf(parameters, PRIOR_LOW, PRIOR_HIGH)?;

        let mut out = Vec64::with_capacity(n);
        for row in lp.data.as_slice().chunks_exact(PARAMETER_DIM) {
            out.push(row.iter().sum());
        }
        Ok(FloatArray::from_vec64(out, None))
    }

    fn log_density(
        &self,
        x: &[f64],
        parameters: Option<&[f64]>,
        precise: bool,
    ) -> Result<FloatArray<f64>, SimulatorError> {
        if parameters.is_none() {
            return Err(SimulatorError::MissingParameters(
                "log_density: conditional simulator requires parameters".into(),
            ));
        }
        let (z_phi, z_eps) = self.latent_from_observation(x)?;
        self.log_density_latent(&z_phi, &z_eps, parameters, precise)
    }

    fn distance_from_manifold(&self, x: &[f64]) -> Result<FloatArray<f64>, SimulatorError> {
        let (_, z_eps) = self.latent_from_observation(x)?;
        let mut out = Vec64::with_capacity(z_eps.len() / self.noise_dim());
        for row in z_eps.chunks_exact(self.noise_dim()) {
            out.push(row.iter().map(|e| e * e).sum::<f64>().sqrt());
        }
        Ok(FloatArray::from_vec64(out, None))
    }
}
