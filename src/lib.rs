//! # bagfit — Least-Squares Fitting with Bootstrap Aggregation
//!
//! A small, `no_std`-capable library for fitting lines and polynomials to
//! paired 2D samples, with a bagging layer that averages ensembles of fits
//! over resampled datasets.
//!
//! ## What it provides
//!
//! * **Simple linear regression** with slope/intercept standard errors,
//!   chi-squared, and the coefficient of determination.
//! * **Polynomial regression** of arbitrary order via a normal-equations
//!   solve, with cached coefficients and Horner evaluation.
//! * **Bagging and sub-bagging**: bootstrap resampling (with replacement)
//!   and reduced-size resampling (without replacement), each feeding an
//!   ensemble of linear fits whose averaged parameters cut estimator
//!   variance.
//! * **A seeded deviate engine** producing reproducible uniform,
//!   exponential, normal, gamma, and logistic deviates, on which the
//!   resampling layer is built.
//!
//! **Common applications:**
//! - Baseline fits to compare against iteratively trained models
//! - Uncertainty inspection through per-set ensemble spread
//! - Reproducible resampling experiments on small datasets
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use bagfit_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0];
//! let y = vec![1.0, 3.0, 5.0, 7.0];
//!
//! // Plain linear fit is the default mode.
//! let outcome = Fit::new().fit(&x, &y)?;
//!
//! let fit = outcome.as_linear().unwrap();
//! assert_eq!(fit.slope, 2.0);
//! assert_eq!(fit.intercept, 1.0);
//! assert_eq!(fit.r_squared, 1.0);
//! # Ok::<(), FitError>(())
//! ```
//!
//! ### Fit Modes
//!
//! ```rust
//! use bagfit_rs::prelude::*;
//!
//! let x = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = vec![1.2, 2.9, 5.1, 6.8, 9.2, 10.9];
//!
//! // Polynomial of order 2.
//! let poly = Fit::new().polynomial(2).fit(&x, &y)?;
//!
//! // Bagged linear fit over 25 bootstrap sets, explicit seed.
//! let bagged = Fit::new().bagged(25).seed(42).fit(&x, &y)?;
//!
//! // Sub-bagged: 25 sets of 4 distinct points each.
//! let subbagged = Fit::new().subbagged(4, 25).seed(42).fit(&x, &y)?;
//!
//! if let Some(ensemble) = bagged.as_bagged() {
//!     assert_eq!(ensemble.fits.len(), 25);
//! }
//! # let _ = (poly, subbagged);
//! # Ok::<(), FitError>(())
//! ```
//!
//! ### Estimators Directly
//!
//! The builder is a convenience; every estimator is usable on its own:
//!
//! ```rust
//! use bagfit_rs::prelude::*;
//!
//! let x = [0.0f64, 1.0, 2.0, 3.0, 4.0];
//! let y = [1.0, 4.0, 9.0, 16.0, 25.0];
//!
//! let mut estimator = PolynomialEstimator::new();
//! let fit = estimator.fit(&x, &y, 2)?;
//! assert!(fit.rms < 1e-6);
//!
//! // The estimator keeps the coefficients for later evaluation.
//! assert!((estimator.evaluate(5.0) - 36.0).abs() < 1e-6);
//! # Ok::<(), FitError>(())
//! ```
//!
//! ### Reproducible Deviates
//!
//! ```rust
//! use bagfit_rs::prelude::*;
//!
//! let mut engine = DeviateEngine::new(1001);
//! let gaussian = engine.normal(0.0, 1.0);
//! assert!(gaussian.is_finite());
//!
//! // Reseeding restarts the stream exactly.
//! let mut replay = DeviateEngine::new(1001);
//! assert_eq!(replay.normal(0.0, 1.0), gaussian);
//! ```
//!
//! ## Input policy
//!
//! The estimators are designed to be embedded in interactive hosts, so
//! malformed input never raises: mismatched lengths, too few points, or a
//! zero x-spread return documented degenerate results (zeroed statistics,
//! empty coefficient vectors, empty collections). The two conditions a
//! caller must handle as errors are a singular normal-equations system and
//! builder misuse; see [`prelude::FitError`].
//!
//! ## Feature flags
//!
//! * `std` (default): standard library support. Disable for `no_std`
//!   operation on top of `alloc`.
//! * `dev`: re-exports internal modules through `internals` for testing.
//!
//! ## References
//!
//! - Press, W. H. et al. "Numerical Recipes in C", 2nd ed., ch. 7 (uniform
//!   and normal deviates) and ch. 15 (straight-line fits).
//! - Marsaglia, G. & Tsang, W. W. (2000). "A Simple Method for Generating
//!   Gamma Variables"
//! - Breiman, L. (1996). "Bagging Predictors"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - shared fundamental types.
//
// Contains the crate error type.
mod primitives;

// Layer 2: Math - numerical building blocks.
//
// Contains the seeded deviate engine and the dense linear solve
// backend for the normal equations.
mod math;

// Layer 3: Algorithms - closed-form estimators.
//
// Contains simple linear regression with uncertainty statistics and
// polynomial regression via the normal equations.
mod algorithms;

// Layer 4: Evaluation - ensemble machinery.
//
// Contains bootstrap/sub-sample generation and the bagged linear
// estimator.
mod evaluation;

// High-level fluent API.
//
// Provides the `Fit` builder and the tagged `FitOutcome` sum type.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use bagfit_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        horner, sum_squared_residuals, BaggedFit, BaggedLinear, DeviateEngine, FitBuilder as Fit,
        FitError, FitOutcome, FloatSolve, LinearFit, PairedSet, PolynomialEstimator,
        PolynomialFit, Resampler, SimpleLinear, DEFAULT_SEED,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math components.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal estimators.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal ensemble machinery.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
