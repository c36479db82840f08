//! Bootstrap and sub-sample dataset generation.
//!
//! ## Purpose
//!
//! This module produces resampled datasets for bootstrap aggregation:
//! sampling with replacement (bagging) keeps the original set size, while
//! sampling without replacement (sub-bagging) draws a smaller set of
//! distinct source points. Both come in 1D and paired 2D variants.
//!
//! ## Design notes
//!
//! * **Owned randomness**: Each resampler owns its [`DeviateEngine`], built
//!   from an explicit seed. Two resamplers with the same seed produce
//!   identical sample sets; `Default` uses [`DEFAULT_SEED`].
//! * **Index mapping**: A uniform deviate is stretched slightly past both
//!   ends of the index range and rounded, giving the boundary indices the
//!   same selection weight as interior ones. The result is clamped into
//!   range, so selection can never go out of bounds or produce a negative
//!   zero.
//! * **Scratch reuse**: The without-replacement variants reuse one
//!   collision-tracking buffer across output sets.
//!
//! ## Key concepts
//!
//! * **Defaults**: A `num_sets` of 0 means "one set per source point"; a
//!   `sample_size` of 0 (or one exceeding the source size) means half the
//!   source, with a floor of one point.
//! * **Degenerate input**: Empty or length-mismatched sources return an
//!   empty collection rather than failing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::deviates::DeviateEngine;

// ============================================================================
// Constants
// ============================================================================

/// Seed used by the `Default` constructions of [`Resampler`] and the
/// bagged estimator built on it.
pub const DEFAULT_SEED: u64 = 1001;

// ============================================================================
// Paired Sample Set
// ============================================================================

/// A resampled dataset of paired x/y observations.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSet<T> {
    /// Predictor values.
    pub x: Vec<T>,

    /// Response values.
    pub y: Vec<T>,
}

impl<T> PairedSet<T> {
    /// Number of pairs in the set.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Resampler
// ============================================================================

/// Bootstrap/sub-sample generator over caller-owned data.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let mut resampler = Resampler::new(7);
///
/// let sets = resampler.resample_1d(&data, 3);
/// assert_eq!(sets.len(), 3);
/// assert!(sets.iter().all(|set| set.len() == data.len()));
/// ```
#[derive(Debug, Clone)]
pub struct Resampler {
    engine: DeviateEngine,
}

impl Default for Resampler {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Resampler {
    /// Create a resampler seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            engine: DeviateEngine::new(seed),
        }
    }

    /// Create a resampler over an existing engine, continuing its stream.
    pub fn with_engine(engine: DeviateEngine) -> Self {
        Self { engine }
    }

    /// Restart the underlying deviate stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.engine.reseed(seed);
    }

    // ========================================================================
    // With Replacement
    // ========================================================================

    /// Draw `num_sets` bootstrap sets from `data`, each of the source size.
    ///
    /// Repeats are allowed; every output element is a copy of some input
    /// element. `num_sets` of 0 defaults to `data.len()`. Empty input
    /// returns an empty collection.
    pub fn resample_1d<T: Float>(&mut self, data: &[T], num_sets: usize) -> Vec<Vec<T>> {
        let n = data.len();
        if n == 0 {
            return Vec::new();
        }
        let num_sets = if num_sets == 0 { n } else { num_sets };

        let mut sets = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            let mut set = Vec::with_capacity(n);
            for _ in 0..n {
                set.push(data[self.draw_index(n)]);
            }
            sets.push(set);
        }
        sets
    }

    /// Draw `num_sets` paired bootstrap sets from `x`/`y`.
    ///
    /// Each drawn index selects the same position in both sequences, so
    /// pairs stay intact. Mismatched or empty input returns an empty
    /// collection.
    pub fn resample_2d<T: Float>(
        &mut self,
        x: &[T],
        y: &[T],
        num_sets: usize,
    ) -> Vec<PairedSet<T>> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Vec::new();
        }
        let num_sets = if num_sets == 0 { n } else { num_sets };

        let mut sets = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            let mut set = PairedSet {
                x: Vec::with_capacity(n),
                y: Vec::with_capacity(n),
            };
            for _ in 0..n {
                let idx = self.draw_index(n);
                set.x.push(x[idx]);
                set.y.push(y[idx]);
            }
            sets.push(set);
        }
        sets
    }

    // ========================================================================
    // Without Replacement
    // ========================================================================

    /// Draw `num_sets` sub-sample sets of `sample_size` distinct points.
    ///
    /// Collisions are redrawn until each output set holds `sample_size`
    /// distinct source indices. A `sample_size` of 0 or larger than the
    /// source defaults to half the source size, with a floor of one.
    pub fn subsample_1d<T: Float>(
        &mut self,
        data: &[T],
        sample_size: usize,
        num_sets: usize,
    ) -> Vec<Vec<T>> {
        let n = data.len();
        if n == 0 {
            return Vec::new();
        }
        let sample_size = Self::effective_sample_size(sample_size, n);
        let num_sets = if num_sets == 0 { n } else { num_sets };

        let mut used = vec![false; n];
        let mut sets = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            used.fill(false);
            let mut set = Vec::with_capacity(sample_size);
            while set.len() < sample_size {
                let idx = self.draw_index(n);
                if !used[idx] {
                    used[idx] = true;
                    set.push(data[idx]);
                }
            }
            sets.push(set);
        }
        sets
    }

    /// Draw `num_sets` paired sub-sample sets of `sample_size` distinct
    /// points.
    ///
    /// Same index discipline as [`subsample_1d`]; mismatched or empty input
    /// returns an empty collection.
    ///
    /// [`subsample_1d`]: Resampler::subsample_1d
    pub fn subsample_2d<T: Float>(
        &mut self,
        x: &[T],
        y: &[T],
        sample_size: usize,
        num_sets: usize,
    ) -> Vec<PairedSet<T>> {
        let n = x.len();
        if n == 0 || n != y.len() {
            return Vec::new();
        }
        let sample_size = Self::effective_sample_size(sample_size, n);
        let num_sets = if num_sets == 0 { n } else { num_sets };

        let mut used = vec![false; n];
        let mut sets = Vec::with_capacity(num_sets);
        for _ in 0..num_sets {
            used.fill(false);
            let mut set = PairedSet {
                x: Vec::with_capacity(sample_size),
                y: Vec::with_capacity(sample_size),
            };
            while set.len() < sample_size {
                let idx = self.draw_index(n);
                if !used[idx] {
                    used[idx] = true;
                    set.x.push(x[idx]);
                    set.y.push(y[idx]);
                }
            }
            sets.push(set);
        }
        sets
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Map one uniform deviate onto a source index in `0..n`.
    ///
    /// The deviate is stretched 0.499 past each end of `[0, n - 1]` before
    /// rounding, so the first and last indices are not selected at half the
    /// interior rate. Rounding a small negative value would yield -0.0;
    /// the max with 0.0 removes it before the cast.
    #[inline]
    fn draw_index(&mut self, n: usize) -> usize {
        let span = (n - 1) as f64 + 0.998;
        let raw = (-0.499 + self.engine.uniform() * span).round().max(0.0);
        (raw as usize).min(n - 1)
    }

    /// Resolve the requested sub-sample size against the source size.
    #[inline]
    fn effective_sample_size(sample_size: usize, n: usize) -> usize {
        if sample_size == 0 || sample_size > n {
            (n / 2).max(1)
        } else {
            sample_size
        }
    }
}
