// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Simulators** - *Generative Models with Tractable Densities*
//!
//! The [`Simulator`] capability consumed by data-generation drivers, and its
//! implementations.
//!
//! ## Batch Layout
//! Batches are flat, row-major slices: `n` observations in `ℝᵈ` are `n * d` values.
//! Two-dimensional outputs come back in the same layout as `Vec64<f64>`, one value per
//! row as `FloatArray<f64>`.

use minarrow::{FloatArray, Vec64};
use rand::RngCore;

use crate::errors::SimulatorError;

pub mod conditional_spherical;
pub mod equivalent;
pub mod hyperspherical;

pub use conditional_spherical::ConditionalSphericalGaussian;

/// A generative model over `ℝ^data_dim`, optionally conditioned on a parameter vector.
///
/// Randomness comes from the caller's generator so that runs are reproducible
/// from a seed.
pub trait Simulator {
    /// Whether observations are images.
    fn is_image(&self) -> bool;

    /// Dimension of the ambient space observations live in.
    fn data_dim(&self) -> usize;

    /// Intrinsic dimension of the manifold observations concentrate on.
    fn latent_dim(&self) -> usize;

    /// Length of one conditional parameter vector.
    fn parameter_dim(&self) -> usize;

    /// Reference parameter point used for evaluation splits.
    fn default_parameters(&self) -> Vec64<f64> {
        let mut v = Vec64::with_capacity(self.parameter_dim());
        v.resize(self.parameter_dim(), 0.0);
        v
    }

    /// Draws `n` observations, row-major `n × data_dim`.
    ///
    /// `parameters` holds one row (broadcast to every sample) or `n` rows.
    fn sample(
        &self,
        rng: &mut dyn RngCore,
        n: usize,
        parameters: Option<&[f64]>,
    ) -> Result<Vec64<f64>, SimulatorError>;

    /// Draws `n` parameter vectors from the prior, row-major `n × parameter_dim`.
    fn sample_from_prior(&self, rng: &mut dyn RngCore, n: usize)
    -> Result<Vec64<f64>, SimulatorError>;

    /// Log prior density for each parameter row.
    fn evaluate_log_prior(&self, parameters: &[f64]) -> Result<FloatArray<f64>, SimulatorError>;

    /// Log density of each observation row under the model at `parameters`.
    fn log_density(
        &self,
        x: &[f64],
        parameters: Option<&[f64]>,
        precise: bool,
    ) -> Result<FloatArray<f64>, SimulatorError>;

    /// Distance of each observation row from the noise-free manifold.
    fn distance_from_manifold(&self, x: &[f64]) -> Result<FloatArray<f64>, SimulatorError>;
}
