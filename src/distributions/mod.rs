// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Statistical Distributions Module** - *Kernels Behind the Simulators*
//!
//! Probability density, log-density and sampling kernels for the univariate distributions
//! the manifold simulators are assembled from.
//!
//! ### Null Value Philosophy
//! `inf` and `NaN` are treated as valid float values and kept verbatim in outputs.
//! A log-density of `-inf` for a point outside the support is information, not an error.
//! Only invalid distribution *parameters* are rejected with an error.

/// Constants, scalar helpers and random sampling shared across distributions.
pub mod shared {
    pub mod constants;
    pub mod sampler;
    pub mod scalar;
}

/// Univariate continuous distributions: normal and uniform.
pub mod univariate {
    pub mod normal;
    pub mod uniform;
}
