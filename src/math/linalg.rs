//! Dense linear solve backend for the normal equations.
//!
//! ## Purpose
//!
//! This module provides a trait-based bridge between the generic `Float`
//! estimators and the nalgebra solver that backs them. The polynomial
//! estimator assembles its normal-equations system as flat column-major
//! slices and hands them to [`FloatSolve::solve_dense`].
//!
//! ## Design notes
//!
//! * A well-posed normal matrix is symmetric positive definite, so Cholesky
//!   is tried first. Numerically indefinite systems fall back to QR
//!   (Householder reflections).
//! * A system neither decomposition can solve is reported as `None`; the
//!   caller decides how to surface the singularity.
//! * Implemented for `f32` and `f64`, which delegate to the concrete
//!   nalgebra backend.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatSolve Trait
// ============================================================================

/// Helper trait to bridge generic `Float` types to the nalgebra backend.
pub trait FloatSolve: Float + 'static {
    /// Solve the dense n-by-n system `a * x = b`.
    ///
    /// `a` is column-major with `n * n` entries and `b` has length `n`.
    /// Returns `None` when the system is singular.
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>>;
}

impl FloatSolve for f64 {
    #[inline]
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_dense_f64(a, b, n)
    }
}

impl FloatSolve for f32 {
    #[inline]
    fn solve_dense(a: &[Self], b: &[Self], n: usize) -> Option<Vec<Self>> {
        nalgebra_backend::solve_dense_f32(a, b, n)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based dense solver.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve a dense system in f64 precision, Cholesky first, QR fallback.
    pub fn solve_dense_f64(a: &[f64], b: &[f64], n: usize) -> Option<Vec<f64>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        if let Some(cholesky) = matrix.clone().cholesky() {
            return Some(cholesky.solve(&rhs).as_slice().to_vec());
        }

        matrix
            .qr()
            .solve(&rhs)
            .map(|solution: DVector<f64>| solution.as_slice().to_vec())
    }

    /// Solve a dense system in f32 precision, Cholesky first, QR fallback.
    pub fn solve_dense_f32(a: &[f32], b: &[f32], n: usize) -> Option<Vec<f32>> {
        let matrix = DMatrix::from_column_slice(n, n, a);
        let rhs = DVector::from_column_slice(b);

        if let Some(cholesky) = matrix.clone().cholesky() {
            return Some(cholesky.solve(&rhs).as_slice().to_vec());
        }

        matrix
            .qr()
            .solve(&rhs)
            .map(|solution: DVector<f32>| solution.as_slice().to_vec())
    }
}
