//! Error types for fitting operations.
//!
//! ## Purpose
//!
//! This module defines [`FitError`], the single error enum surfaced by the
//! crate. The error surface is deliberately small: malformed input data is
//! answered with documented degenerate results (see the estimator modules),
//! so only conditions the caller genuinely must react to become errors.
//!
//! ## Design notes
//!
//! * **No panics**: Every fallible path returns `Result<_, FitError>`.
//! * **`no_std` friendly**: `Display` is hand-written; `std::error::Error`
//!   is implemented only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! * **Numerical failure**: A singular normal-equations system has no unique
//!   least-squares solution and must be reported, never papered over with a
//!   garbage coefficient vector.
//! * **Builder misuse**: Setting the same fluent-builder parameter twice is
//!   rejected when the fit is executed.

use core::fmt;

// ============================================================================
// FitError
// ============================================================================

/// Errors produced by fitting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FitError {
    /// The normal-equations matrix is singular (or numerically so) and the
    /// polynomial coefficients cannot be determined.
    SingularSystem {
        /// Dimension of the square system that failed to solve.
        size: usize,
    },

    /// A fluent-builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::SingularSystem { size } => {
                write!(
                    f,
                    "Singular system: {}x{} normal equations have no unique solution",
                    size, size
                )
            }
            FitError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FitError {}
