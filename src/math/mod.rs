//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the numerical building blocks the estimators are
//! assembled from:
//! - Seeded pseudo-random deviate generation
//! - The dense linear solve backend for the normal equations
//!
//! These are reusable components with no estimator-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Seeded uniform, exponential, normal, gamma, and logistic deviates.
pub mod deviates;

/// Dense linear solve backend (nalgebra).
pub mod linalg;
