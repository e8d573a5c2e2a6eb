// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Configuration** - *Simulator Constants and Construction Parameters*
//!
//! Compile-time constants fixing the parameterisation of the conditional spherical
//! Gaussian family, and the serde-backed [`SimulatorConfig`] used to construct it.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::errors::SimulatorError;

/// Number of conditional parameters: one selects the width, one the phase.
pub const PARAMETER_DIM: usize = 2;

/// Lower edge of the uniform prior box, per parameter component.
pub const PRIOR_LOW: f64 = -1.0;

/// Upper edge of the uniform prior box, per parameter component.
pub const PRIOR_HIGH: f64 = 1.0;

/// Mean phase of every polar (non-final) angular coordinate.
pub const POLAR_PHASE: f64 = FRAC_PI_2;

/// Phase of the azimuthal (final) coordinate at parameter value `-1`.
pub const MIN_PHASE: f64 = FRAC_PI_2;

/// Phase of the azimuthal (final) coordinate at parameter value `+1`.
pub const MAX_PHASE: f64 = 1.5 * PI;

/// Construction parameters for the conditional spherical Gaussian simulator.
///
/// Missing fields fall back to [`SimulatorConfig::default`] when deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Intrinsic dimension of the sphere, i.e. the number of angular coordinates.
    pub latent_dim: usize,

    /// Dimension of the ambient Euclidean space.
    pub data_dim: usize,

    /// Angular standard deviation at parameter value `-1`.
    pub min_width: f64,

    /// Angular standard deviation at parameter value `+1`.
    pub max_width: f64,

    /// Standard deviation of the radial and off-manifold noise.
    pub epsilon: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            latent_dim: 8,
            data_dim: 9,
            min_width: 0.1 * PI,
            max_width: 0.4 * PI,
            epsilon: 0.01,
        }
    }
}

impl SimulatorConfig {
    /// Config with the given dimensions and default widths and noise.
    pub fn with_dims(latent_dim: usize, data_dim: usize) -> Self {
        Self {
            latent_dim,
            data_dim,
            ..Self::default()
        }
    }

    /// Checks `data_dim > latent_dim >= 1`, `epsilon > 0` and
    /// `0 < min_width < max_width <= 2π`.
    pub fn validate(&self) -> Result<(), SimulatorError> {
        if self.latent_dim < 1 {
            return Err(SimulatorError::InvalidConfig(
                "latent_dim must be at least 1".into(),
            ));
        }
        if self.data_dim <= self.latent_dim {
            return Err(SimulatorError::InvalidConfig(format!(
                "data_dim ({}) must exceed latent_dim ({})",
                self.data_dim, self.latent_dim
            )));
        }
        if !(self.epsilon > 0.0) || !self.epsilon.is_finite() {
            return Err(SimulatorError::InvalidConfig(format!(
                "epsilon must be finite and > 0, got {}",
                self.epsilon
            )));
        }
        if !(0.0 < self.min_width && self.min_width < self.max_width && self.max_width <= TAU) {
            return Err(SimulatorError::InvalidConfig(format!(
                "widths must satisfy 0 < min_width < max_width <= 2π, got {} and {}",
                self.min_width, self.max_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(SimulatorConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_data_dim_not_above_latent_dim() {
        let cfg = SimulatorConfig::with_dims(3, 3);
        assert!(matches!(cfg.validate(), Err(SimulatorError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_latent_dim() {
        let cfg = SimulatorConfig::with_dims(0, 2);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let mut cfg = SimulatorConfig::with_dims(2, 3);
        cfg.epsilon = 0.0;
        assert!(cfg.validate().is_err());
        cfg.epsilon = -0.1;
        assert!(cfg.validate().is_err());
        cfg.epsilon = f64::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_width_ordering() {
        let mut cfg = SimulatorConfig::with_dims(2, 3);
        cfg.min_width = 0.5;
        cfg.max_width = 0.5;
        assert!(cfg.validate().is_err());

        cfg.min_width = 0.0;
        cfg.max_width = 1.0;
        assert!(cfg.validate().is_err());

        cfg.min_width = 0.1;
        cfg.max_width = TAU + 1e-9;
        assert!(cfg.validate().is_err());

        cfg.max_width = TAU;
        assert!(cfg.validate().is_ok());
    }
}
