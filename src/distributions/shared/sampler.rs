// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # Statistical Sampling Module: Pseudorandom Distribution Sampling
//!
//! Sampling kernels generic over any `rand::Rng`, including `dyn RngCore`.
//! The caller owns and seeds the generator.

use std::f64::consts::TAU;

use minarrow::Vec64;
use rand::Rng;

// Box–Muller to get one N(0,1)
/// Generates a single sample from the standard normal distribution N(0,1).
#[inline]
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // U1 ∈ (0,1], U2 ∈ [0,1)
    let u1: f64 = rng.random::<f64>().max(f64::MIN_POSITIVE); // avoid log(0)
    let u2: f64 = rng.random::<f64>();
    let r = (-2.0 * u1.ln()).sqrt();
    r * (TAU * u2).cos()
}

/// Generates a single sample from N(mean, std²).
///
/// `std == 0` returns `mean` exactly.
#[inline]
pub fn sample_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std: f64) -> f64 {
    mean + std * sample_standard_normal(rng)
}

/// Generates a single sample from Uniform[low, high).
#[inline]
pub fn sample_uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    low + (high - low) * rng.random::<f64>()
}

/// Vector of `len` iid N(mean, std²) samples.
#[inline]
pub fn normal_vec<R: Rng + ?Sized>(rng: &mut R, len: usize, mean: f64, std: f64) -> Vec64<f64> {
    let mut v = Vec64::with_capacity(len);
    for _ in 0..len {
        v.push(sample_normal(rng, mean, std));
    }
    v
}

/// Vector of `len` iid Uniform[low, high) samples.
#[inline]
pub fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, len: usize, low: f64, high: f64) -> Vec64<f64> {
    let mut v = Vec64::with_capacity(len);
    for _ in 0..len {
        v.push(sample_uniform(rng, low, high));
    }
    v
}
