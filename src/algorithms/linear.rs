//! Closed-form simple linear regression with uncertainty statistics.
//!
//! ## Purpose
//!
//! This module fits `y = intercept + slope * x` by ordinary least squares
//! and reports standard errors for both parameters, the chi-squared
//! statistic, and the coefficient of determination.
//!
//! ## Design notes
//!
//! * **Never-throw contract**: Malformed input (mismatched lengths, fewer
//!   than three points, zero spread in x) yields the zeroed degenerate
//!   result instead of an error. The estimator is meant to sit behind
//!   interactive hosts that must always receive a value.
//! * **Unit weights**: Standard errors assume unit measurement variance and
//!   are scaled by `sqrt(chi^2 / (n - 2))`. There is no per-point variance
//!   input.
//! * **Pure**: The fit is a pure function of its inputs; identical inputs
//!   produce bitwise-identical results.
//!
//! ## Invariants
//!
//! * A returned fit is fully populated or fully zeroed, never partial.
//! * `r_squared` lies in (-inf, 1] and equals 1 for an exact fit.

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear Fit Result
// ============================================================================

/// Result of a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Fitted slope.
    pub slope: T,

    /// Fitted intercept.
    pub intercept: T,

    /// Standard error of the slope.
    pub slope_se: T,

    /// Standard error of the intercept.
    pub intercept_se: T,

    /// Sum of squared residuals.
    pub chi_square: T,

    /// Coefficient of determination.
    pub r_squared: T,
}

impl<T: Float> LinearFit<T> {
    /// The zeroed degenerate fit returned for malformed input.
    pub fn degenerate() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            slope_se: T::zero(),
            intercept_se: T::zero(),
            chi_square: T::zero(),
            r_squared: T::zero(),
        }
    }

    /// Evaluate the fitted line at `x`.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }
}

// ============================================================================
// Simple Linear Estimator
// ============================================================================

/// Closed-form simple least-squares estimator.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let fit = SimpleLinear::fit(&[0.0, 1.0, 2.0, 3.0], &[1.0, 3.0, 5.0, 7.0]);
/// assert_eq!(fit.slope, 2.0);
/// assert_eq!(fit.intercept, 1.0);
/// ```
pub struct SimpleLinear;

impl SimpleLinear {
    /// Minimum number of points for a non-degenerate fit.
    pub const MIN_POINTS: usize = 3;

    /// Fit a line through the paired samples.
    ///
    /// Requires `x.len() == y.len()` and at least [`MIN_POINTS`] samples;
    /// anything else returns [`LinearFit::degenerate`]. A dataset with zero
    /// spread in x has no defined slope and is degenerate as well.
    ///
    /// [`MIN_POINTS`]: SimpleLinear::MIN_POINTS
    pub fn fit<T: Float>(x: &[T], y: &[T]) -> LinearFit<T> {
        let n = x.len();
        if n < Self::MIN_POINTS || n != y.len() {
            return LinearFit::degenerate();
        }

        let count = T::from(n).unwrap();
        let mean_x = x.iter().fold(T::zero(), |acc, &v| acc + v) / count;
        let mean_y = y.iter().fold(T::zero(), |acc, &v| acc + v) / count;

        // Centered sums: slope = Sxy / Sxx.
        let mut s_xx = T::zero();
        let mut s_xy = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let dx = xi - mean_x;
            s_xx = s_xx + dx * dx;
            s_xy = s_xy + dx * (yi - mean_y);
        }
        if s_xx <= T::zero() {
            return LinearFit::degenerate();
        }

        let slope = s_xy / s_xx;
        let intercept = mean_y - slope * mean_x;

        let mut chi_square = T::zero();
        let mut variance = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let residual = yi - (intercept + slope * xi);
            chi_square = chi_square + residual * residual;
            let dy = yi - mean_y;
            variance = variance + dy * dy;
        }

        // Zero total variance means y is constant; the regression then
        // reproduces it exactly.
        let r_squared = if variance > T::zero() {
            T::one() - chi_square / variance
        } else {
            T::one()
        };

        // Unit-weight scale estimate, n >= 3 guarantees the denominator.
        let sigma = (chi_square / (count - T::from(2).unwrap())).sqrt();
        let slope_se = sigma / s_xx.sqrt();
        let intercept_se = sigma * (T::one() / count + mean_x * mean_x / s_xx).sqrt();

        LinearFit {
            slope,
            intercept,
            slope_se,
            intercept_se,
            chi_square,
            r_squared,
        }
    }
}
