// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under the Mozilla Public License (MPL) 2.0.
// See LICENSE for details.

//! # **Manifold Simulators** - *Synthetic Data on Embedded Spheres*
//!
//! Simulators that draw samples from parametric families of distributions supported on,
//! or near, a low-dimensional manifold embedded in a higher-dimensional Euclidean space,
//! together with the exact log-density of each sample under the generating model.
//!
//! ## Usage Examples
//! ```rust,ignore
//! use manifold_simulators::config::SimulatorConfig;
//! use manifold_simulators::simulators::{ConditionalSphericalGaussian, Simulator};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let sim = ConditionalSphericalGaussian::new(SimulatorConfig::default()).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//!
//! let theta = sim.sample_from_prior(&mut rng, 100).unwrap();
//! let x = sim.sample(&mut rng, 100, Some(&theta[..])).unwrap();
//! let logp = sim.log_density(&x, Some(&theta[..]), false).unwrap();
//! ```

pub mod distributions;

pub mod simulators;

pub mod config;

pub mod errors;

pub mod utils;
