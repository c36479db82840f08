//! Least-squares polynomial regression via the normal equations.
//!
//! ## Purpose
//!
//! This module fits an arbitrary-order polynomial to paired samples by
//! solving the normal equations `A^T A c = A^T y`, where the system is
//! assembled directly from power sums rather than from the full design
//! matrix. The estimator caches its last coefficient vector so fitted
//! curves can be evaluated after the fit.
//!
//! ## Design notes
//!
//! * **Assembly**: Entry (i, j) of the normal matrix is the power sum
//!   `sum(x^(i+j))`, and the right-hand side is the moment sum
//!   `sum(x^i * y)`. One pass over the data fills both.
//! * **Solve**: Delegated to [`FloatSolve`], which reports singular systems
//!   as `None`. That condition is surfaced as
//!   [`FitError::SingularSystem`] and never replaced with garbage
//!   coefficients.
//! * **Input policy**: Malformed input (mismatched lengths or too few
//!   points for the requested order) returns an empty-coefficient result
//!   with zero RMS rather than an error.
//!
//! ## Key concepts
//!
//! * **Coefficient ordering**: Index i holds the coefficient of `x^i`.
//! * **Horner evaluation**: [`horner`] is also the predictor contract for
//!   external optimizers that train against the same squared-residual loss.
//!
//! ## Invariants
//!
//! * A successful fit of order m returns exactly m + 1 coefficients.
//! * `evaluate` before the first successful fit returns 0 for every x.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::FloatSolve;
use crate::primitives::errors::FitError;

// ============================================================================
// Predictor Contract
// ============================================================================

/// Evaluate a polynomial with the given coefficients at `x`.
///
/// Coefficient index i is the coefficient of `x^i`; evaluation uses
/// Horner's method. An empty coefficient slice evaluates to 0.
#[inline]
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Sum of squared residuals of a polynomial over paired samples.
///
/// This is the loss an external optimizer minimizes when training a
/// polynomial predictor against the same data.
pub fn sum_squared_residuals<T: Float>(coefficients: &[T], x: &[T], y: &[T]) -> T {
    x.iter().zip(y.iter()).fold(T::zero(), |acc, (&xi, &yi)| {
        let r = horner(coefficients, xi) - yi;
        acc + r * r
    })
}

// ============================================================================
// Polynomial Fit Result
// ============================================================================

/// Result of a polynomial least-squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit<T> {
    /// Fitted coefficients; index i is the coefficient of `x^i`. Empty when
    /// the input was malformed.
    pub coefficients: Vec<T>,

    /// Root-mean-square residual over the input samples.
    pub rms: T,
}

impl<T: Float> PolynomialFit<T> {
    /// The empty degenerate result returned for malformed input.
    pub fn degenerate() -> Self {
        Self {
            coefficients: Vec::new(),
            rms: T::zero(),
        }
    }
}

// ============================================================================
// Polynomial Estimator
// ============================================================================

/// Least-squares polynomial estimator with cached coefficients.
///
/// The estimator owns the coefficients of its most recent successful fit,
/// so [`evaluate`] works after `fit` without carrying the result around.
/// Each instance is independent; no state is shared between estimators.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let x = [0.0f64, 1.0, 2.0, 3.0, 4.0];
/// let y = [1.0, 4.0, 9.0, 16.0, 25.0];
///
/// let mut estimator = PolynomialEstimator::new();
/// let fit = estimator.fit(&x, &y, 2)?;
/// assert!((fit.coefficients[2] - 1.0).abs() < 1e-9);
/// assert!((estimator.evaluate(5.0) - 36.0).abs() < 1e-6);
/// # Ok::<(), FitError>(())
/// ```
///
/// [`evaluate`]: PolynomialEstimator::evaluate
#[derive(Debug, Clone, Default)]
pub struct PolynomialEstimator<T> {
    /// Coefficients of the last successful fit, lowest power first.
    coefficients: Vec<T>,

    /// Order of the last successful fit.
    order: usize,
}

impl<T: FloatSolve> PolynomialEstimator<T> {
    /// Create an estimator with no fit history.
    pub fn new() -> Self {
        Self {
            coefficients: Vec::new(),
            order: 0,
        }
    }

    /// Fit a polynomial of the given order to the paired samples.
    ///
    /// Requires `x.len() == y.len()` and strictly more than `order + 1`
    /// points; anything else returns [`PolynomialFit::degenerate`] without
    /// touching the cached state. A singular normal system returns
    /// [`FitError::SingularSystem`].
    pub fn fit(&mut self, x: &[T], y: &[T], order: usize) -> Result<PolynomialFit<T>, FitError> {
        let n = x.len();
        if n == 0 || n != y.len() || n <= order + 1 {
            return Ok(PolynomialFit::degenerate());
        }

        let size = order + 1;

        // One pass accumulates the power sums sum(x^k) for k <= 2*order and
        // the moment sums sum(x^k * y) for k <= order.
        let mut power_sums = vec![T::zero(); 2 * order + 1];
        let mut moments = vec![T::zero(); size];
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let mut power = T::one();
            for (k, sum) in power_sums.iter_mut().enumerate() {
                *sum = *sum + power;
                if k < size {
                    moments[k] = moments[k] + power * yi;
                }
                power = power * xi;
            }
        }

        // Column-major normal matrix; symmetric, so the layout order is
        // immaterial.
        let mut matrix = vec![T::zero(); size * size];
        for j in 0..size {
            for i in 0..size {
                matrix[j * size + i] = power_sums[i + j];
            }
        }

        let coefficients = T::solve_dense(&matrix, &moments, size)
            .ok_or(FitError::SingularSystem { size })?;

        self.coefficients.clear();
        self.coefficients.extend_from_slice(&coefficients);
        self.order = order;

        let rms = (sum_squared_residuals(&coefficients, x, y) / T::from(n).unwrap()).sqrt();

        Ok(PolynomialFit { coefficients, rms })
    }

    /// Evaluate the cached polynomial at `x`.
    ///
    /// Returns 0 for every x until the first successful [`fit`].
    ///
    /// [`fit`]: PolynomialEstimator::fit
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    /// Coefficients of the last successful fit; empty before the first fit.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Order of the last successful fit; 0 before the first fit.
    pub fn order(&self) -> usize {
        self.order
    }
}
