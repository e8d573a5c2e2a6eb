// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Equivalent Angles** - *Pre-Images of a Wrapped Angle*
//!
//! Sampling reduces angles modulo 2π, and the inverse embedding folds polar angles into
//! `[0, π]`. A canonical angle therefore stands for several raw Gaussian draws, and its
//! density is the sum of the Gaussian density over those pre-images.
//!
//! For a canonical row `c` of `k` angles the enumeration is, per coordinate:
//!
//! | coordinate      | images                    |
//! |-----------------|---------------------------|
//! | polar, `i < k-1` | `cᵢ`, `-cᵢ`, `2π - cᵢ`    |
//! | azimuthal, `k-1` | `cᵢ`, `cᵢ - 2π`, `cᵢ + 2π` |
//!
//! That is the canonical point plus `2(k-1) + 2` shifted images.

use std::f64::consts::TAU;

/// Number of angles yielded per coordinate: the canonical angle and two images.
pub const ANGLES_PER_COORDINATE: usize = 3;

/// One candidate raw value `angle` for latent coordinate `dim`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleImage {
    pub dim: usize,
    pub angle: f64,
}

/// Finite iterator over the canonical angles of a row and their images,
/// coordinate by coordinate.
#[derive(Debug, Clone)]
pub struct EquivalentAngles<'a> {
    canonical: &'a [f64],
    pos: usize,
}

impl<'a> EquivalentAngles<'a> {
    /// `canonical` must already be in canonical form (see `hyperspherical::canonicalise`).
    #[inline]
    pub fn new(canonical: &'a [f64]) -> Self {
        Self { canonical, pos: 0 }
    }

    #[inline(always)]
    fn total(&self) -> usize {
        self.canonical.len() * ANGLES_PER_COORDINATE
    }
}

impl Iterator for EquivalentAngles<'_> {
    type Item = AngleImage;

    #[inline]
    fn next(&mut self) -> Option<AngleImage> {
        if self.pos >= self.total() {
            return None;
        }
        let dim = self.pos / ANGLES_PER_COORDINATE;
        let variant = self.pos % ANGLES_PER_COORDINATE;
        self.pos += 1;

        let c = self.canonical[dim];
        let azimuthal = dim + 1 == self.canonical.len();
        let angle = match (azimuthal, variant) {
            (_, 0) => c,
            (false, 1) => -c,
            (false, _) => TAU - c,
            (true, 1) => c - TAU,
            (true, _) => c + TAU,
        };
        Some(AngleImage { dim, angle })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.total() - self.pos;
        (left, Some(left))
    }
}

impl ExactSizeIterator for EquivalentAngles<'_> {}
