//! Bagged simple linear regression.
//!
//! ## Purpose
//!
//! This module aggregates an ensemble of simple linear fits over resampled
//! datasets: bagging fits every bootstrap set, sub-bagging fits reduced
//! sets drawn without replacement, and both average the per-set slopes and
//! intercepts to cut estimator variance.
//!
//! ## Design notes
//!
//! * **Composition**: Built from [`Resampler`] and [`SimpleLinear`]; this
//!   module adds only orchestration and averaging.
//! * **Inspectable ensemble**: The individual per-set fits are returned in
//!   order alongside the averages so callers can study the spread.
//! * **Degenerate input**: Fewer than three points or mismatched lengths
//!   yields the zeroed result with an empty fit list.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::linear::{LinearFit, SimpleLinear};
use crate::evaluation::resample::{PairedSet, Resampler, DEFAULT_SEED};
use crate::math::deviates::DeviateEngine;

// ============================================================================
// Bagged Fit Result
// ============================================================================

/// Result of a bagged or sub-bagged linear regression.
#[derive(Debug, Clone, PartialEq)]
pub struct BaggedFit<T> {
    /// Arithmetic mean of the per-set slopes.
    pub slope: T,

    /// Arithmetic mean of the per-set intercepts.
    pub intercept: T,

    /// Individual per-set fits, in resampling order.
    pub fits: Vec<LinearFit<T>>,
}

impl<T: Float> BaggedFit<T> {
    /// The zeroed degenerate result returned for malformed input.
    pub fn degenerate() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            fits: Vec::new(),
        }
    }
}

// ============================================================================
// Bagged Linear Estimator
// ============================================================================

/// Ensemble estimator averaging simple linear fits over resampled data.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [1.0, 3.1, 4.9, 7.2, 8.8, 11.1];
///
/// let mut estimator = BaggedLinear::new(42);
/// let bagged = estimator.bag_fit(&x, &y, 20);
/// assert_eq!(bagged.fits.len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct BaggedLinear {
    resampler: Resampler,
}

impl Default for BaggedLinear {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl BaggedLinear {
    /// Create an estimator whose resampling stream starts from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            resampler: Resampler::new(seed),
        }
    }

    /// Create an estimator over an existing engine, continuing its stream.
    pub fn with_engine(engine: DeviateEngine) -> Self {
        Self {
            resampler: Resampler::with_engine(engine),
        }
    }

    /// Bagged fit: `num_sets` bootstrap sets drawn with replacement, one
    /// simple linear fit per set, slopes and intercepts averaged.
    ///
    /// A `num_sets` of 0 defaults to one set per source point. Fewer than
    /// three points or mismatched lengths yields
    /// [`BaggedFit::degenerate`].
    pub fn bag_fit<T: Float>(&mut self, x: &[T], y: &[T], num_sets: usize) -> BaggedFit<T> {
        if x.len() < SimpleLinear::MIN_POINTS || x.len() != y.len() {
            return BaggedFit::degenerate();
        }
        let sets = self.resampler.resample_2d(x, y, num_sets);
        Self::aggregate(&sets)
    }

    /// Sub-bagged fit: `num_sets` reduced sets of `sample_size` distinct
    /// points drawn without replacement, fitted and averaged like
    /// [`bag_fit`].
    ///
    /// A `sample_size` of 0 defaults to half the source size. Sets smaller
    /// than three points produce degenerate member fits, which still enter
    /// the average.
    ///
    /// [`bag_fit`]: BaggedLinear::bag_fit
    pub fn subbag_fit<T: Float>(
        &mut self,
        x: &[T],
        y: &[T],
        sample_size: usize,
        num_sets: usize,
    ) -> BaggedFit<T> {
        if x.len() < SimpleLinear::MIN_POINTS || x.len() != y.len() {
            return BaggedFit::degenerate();
        }
        let sets = self.resampler.subsample_2d(x, y, sample_size, num_sets);
        Self::aggregate(&sets)
    }

    /// Fit every set and average the slopes and intercepts.
    fn aggregate<T: Float>(sets: &[PairedSet<T>]) -> BaggedFit<T> {
        if sets.is_empty() {
            return BaggedFit::degenerate();
        }

        let mut fits = Vec::with_capacity(sets.len());
        let mut slope_sum = T::zero();
        let mut intercept_sum = T::zero();
        for set in sets {
            let fit = SimpleLinear::fit(&set.x, &set.y);
            slope_sum = slope_sum + fit.slope;
            intercept_sum = intercept_sum + fit.intercept;
            fits.push(fit);
        }

        let count = T::from(fits.len()).unwrap();
        BaggedFit {
            slope: slope_sum / count,
            intercept: intercept_sum / count,
            fits,
        }
    }
}
