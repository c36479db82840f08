//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer holds the fundamental types shared by every other layer.
//! Currently that is the crate error type.

/// Error types for fitting operations.
pub mod errors;
