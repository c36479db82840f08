//! High-level API for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for selecting a fit mode (linear, polynomial, bagged, or
//! sub-bagged) and a tagged [`FitOutcome`] carrying the matching result
//! variant.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; the plain linear fit is the default.
//! * **Tagged results**: The fit mode is decided at the call site and the
//!   outcome is a sum type, so consumers match on a variant instead of
//!   probing result shapes at runtime.
//! * **Validated**: Double-set parameters are tracked while chaining and
//!   reported when the fit is executed.
//!
//! ## Configuration flow
//!
//! 1. Create a builder via `Fit::new()`.
//! 2. Pick a mode (`.linear()`, `.polynomial(order)`, `.bagged(sets)`,
//!    `.subbagged(size, sets)`) and optionally `.seed(...)`.
//! 3. Call `.fit(&x, &y)` and match on the returned [`FitOutcome`].

// Publicly re-exported types
pub use crate::algorithms::linear::{LinearFit, SimpleLinear};
pub use crate::algorithms::polynomial::{
    horner, sum_squared_residuals, PolynomialEstimator, PolynomialFit,
};
pub use crate::evaluation::bagging::{BaggedFit, BaggedLinear};
pub use crate::evaluation::resample::{PairedSet, Resampler, DEFAULT_SEED};
pub use crate::math::deviates::DeviateEngine;
pub use crate::math::linalg::FloatSolve;
pub use crate::primitives::errors::FitError;

// ============================================================================
// Fit Outcome
// ============================================================================

/// Tagged result of a [`FitBuilder`] run, one variant per fit mode.
#[derive(Debug, Clone, PartialEq)]
pub enum FitOutcome<T> {
    /// Simple linear regression result.
    Linear(LinearFit<T>),

    /// Polynomial regression result.
    Polynomial(PolynomialFit<T>),

    /// Bagged or sub-bagged regression result.
    Bagged(BaggedFit<T>),
}

impl<T> FitOutcome<T> {
    /// The linear result, if this outcome holds one.
    pub fn as_linear(&self) -> Option<&LinearFit<T>> {
        match self {
            FitOutcome::Linear(fit) => Some(fit),
            _ => None,
        }
    }

    /// The polynomial result, if this outcome holds one.
    pub fn as_polynomial(&self) -> Option<&PolynomialFit<T>> {
        match self {
            FitOutcome::Polynomial(fit) => Some(fit),
            _ => None,
        }
    }

    /// The bagged result, if this outcome holds one.
    pub fn as_bagged(&self) -> Option<&BaggedFit<T>> {
        match self {
            FitOutcome::Bagged(fit) => Some(fit),
            _ => None,
        }
    }
}

// ============================================================================
// Fit Builder
// ============================================================================

/// Fit mode selected on the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Linear,
    Polynomial { order: usize },
    Bagged { num_sets: usize },
    Subbagged { sample_size: usize, num_sets: usize },
}

/// Fluent builder for configuring and running a fit.
///
/// Exported from the prelude as `Fit`.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [1.0, 4.0, 9.0, 16.0, 25.0];
///
/// let outcome = Fit::new().polynomial(2).fit(&x, &y)?;
/// let fit = outcome.as_polynomial().unwrap();
/// assert_eq!(fit.coefficients.len(), 3);
/// # Ok::<(), FitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FitBuilder {
    /// Selected fit mode; plain linear when unset.
    mode: Option<Mode>,

    /// Seed for the resampling stream of the bagged modes.
    seed: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl Default for FitBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FitBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            seed: None,
            duplicate_param: None,
        }
    }

    /// Select the plain simple linear fit (the default mode).
    pub fn linear(mut self) -> Self {
        self.set_mode(Mode::Linear);
        self
    }

    /// Select a polynomial fit of the given order.
    pub fn polynomial(mut self, order: usize) -> Self {
        self.set_mode(Mode::Polynomial { order });
        self
    }

    /// Select a bagged linear fit over `num_sets` bootstrap sets.
    pub fn bagged(mut self, num_sets: usize) -> Self {
        self.set_mode(Mode::Bagged { num_sets });
        self
    }

    /// Select a sub-bagged linear fit over `num_sets` reduced sets of
    /// `sample_size` distinct points.
    pub fn subbagged(mut self, sample_size: usize, num_sets: usize) -> Self {
        self.set_mode(Mode::Subbagged {
            sample_size,
            num_sets,
        });
        self
    }

    /// Set the resampling seed used by the bagged modes.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Execute the configured fit over the paired samples.
    ///
    /// Input data policy follows the underlying estimator: malformed data
    /// yields that estimator's degenerate result inside the outcome. Errors
    /// are reserved for builder misuse and singular polynomial systems.
    pub fn fit<T: FloatSolve>(&self, x: &[T], y: &[T]) -> Result<FitOutcome<T>, FitError> {
        if let Some(parameter) = self.duplicate_param {
            return Err(FitError::DuplicateParameter { parameter });
        }

        match self.mode.unwrap_or(Mode::Linear) {
            Mode::Linear => Ok(FitOutcome::Linear(SimpleLinear::fit(x, y))),
            Mode::Polynomial { order } => {
                let mut estimator = PolynomialEstimator::new();
                Ok(FitOutcome::Polynomial(estimator.fit(x, y, order)?))
            }
            Mode::Bagged { num_sets } => {
                let mut estimator = BaggedLinear::new(self.seed.unwrap_or(DEFAULT_SEED));
                Ok(FitOutcome::Bagged(estimator.bag_fit(x, y, num_sets)))
            }
            Mode::Subbagged {
                sample_size,
                num_sets,
            } => {
                let mut estimator = BaggedLinear::new(self.seed.unwrap_or(DEFAULT_SEED));
                Ok(FitOutcome::Bagged(estimator.subbag_fit(
                    x,
                    y,
                    sample_size,
                    num_sets,
                )))
            }
        }
    }

    /// Record the mode, flagging a duplicate selection.
    fn set_mode(&mut self, mode: Mode) {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
    }
}
