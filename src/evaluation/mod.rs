//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer builds ensemble machinery on top of the algorithms:
//! - Bootstrap and sub-sample dataset generation
//! - Bagged linear regression averaging per-set fits

/// Bootstrap and sub-sample dataset generation.
pub mod resample;

/// Bagged simple linear regression.
pub mod bagging;
