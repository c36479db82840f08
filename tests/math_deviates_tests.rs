//! Tests for the seeded deviate engine.
//!
//! These tests verify:
//! - Determinism and reseeding of the uniform stream
//! - Open-interval bounds on uniform deviates
//! - Finiteness of every derived distribution
//! - Sample moments of the standard normal stream
//! - The Box-Muller spare-deviate pairing contract
//! - Parameter coercion for out-of-domain arguments

use bagfit_rs::prelude::*;

// ============================================================================
// Uniform Stream
// ============================================================================

#[test]
fn test_uniform_deterministic_sequence() {
    let mut a = DeviateEngine::new(1001);
    let mut b = DeviateEngine::new(1001);
    for _ in 0..100 {
        assert_eq!(a.uniform(), b.uniform());
    }
}

#[test]
fn test_uniform_open_interval() {
    let mut engine = DeviateEngine::new(7);
    for _ in 0..10_000 {
        let u = engine.uniform();
        assert!(u > 0.0, "uniform deviate not above 0: {}", u);
        assert!(u < 1.0, "uniform deviate not below 1: {}", u);
    }
}

#[test]
fn test_reseed_restarts_sequence() {
    let mut engine = DeviateEngine::new(42);
    let first: Vec<f64> = (0..10).map(|_| engine.uniform()).collect();

    engine.reseed(42);
    let replay: Vec<f64> = (0..10).map(|_| engine.uniform()).collect();

    assert_eq!(first, replay);
}

#[test]
fn test_different_seeds_differ() {
    let mut a = DeviateEngine::new(1);
    let mut b = DeviateEngine::new(2);
    let draws_a: Vec<f64> = (0..10).map(|_| a.uniform()).collect();
    let draws_b: Vec<f64> = (0..10).map(|_| b.uniform()).collect();
    assert_ne!(draws_a, draws_b);
}

#[test]
fn test_seed_below_one_coerced() {
    let mut zero = DeviateEngine::new(0);
    let mut one = DeviateEngine::new(1);
    assert_eq!(zero.uniform(), one.uniform());
}

// ============================================================================
// Exponential Deviates
// ============================================================================

#[test]
fn test_exponential_positive_and_finite() {
    let mut engine = DeviateEngine::new(11);
    for _ in 0..1000 {
        let e = engine.exponential();
        assert!(e.is_finite());
        assert!(e > 0.0);
    }
}

#[test]
fn test_exponential_unit_mean() {
    let mut engine = DeviateEngine::new(13);
    let n = 10_000;
    let sum: f64 = (0..n).map(|_| engine.exponential()).sum();
    let mean = sum / n as f64;
    assert!((mean - 1.0).abs() < 0.05, "sample mean {}", mean);
}

// ============================================================================
// Normal Deviates
// ============================================================================

#[test]
fn test_normal_standard_moments() {
    let mut engine = DeviateEngine::new(17);
    let n = 10_000;
    let draws: Vec<f64> = (0..n).map(|_| engine.normal(0.0, 1.0)).collect();

    let mean = draws.iter().sum::<f64>() / n as f64;
    let variance = draws.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>() / n as f64;

    assert!(mean.abs() < 0.05, "sample mean {}", mean);
    assert!((variance - 1.0).abs() < 0.1, "sample variance {}", variance);
}

#[test]
fn test_normal_spare_pairing_contract() {
    // The second deviate of each pair is cached as a standard deviate and
    // scaled by the parameters of the call that drains it.
    let mut reference = DeviateEngine::new(23);
    let _first = reference.normal(0.0, 1.0);
    let spare = reference.normal(0.0, 1.0);

    let mut engine = DeviateEngine::new(23);
    let _first = engine.normal(0.0, 1.0);
    let scaled = engine.normal(5.0, 2.0);

    approx::assert_relative_eq!(scaled, 5.0 + 2.0 * spare, max_relative = 1e-12);
}

#[test]
fn test_normal_invalid_parameters_coerced() {
    let mut reference = DeviateEngine::new(29);
    let standard = reference.normal(0.0, 1.0);

    let mut engine = DeviateEngine::new(29);
    let coerced = engine.normal(f64::NAN, -3.0);

    assert_eq!(coerced, standard);
}

#[test]
fn test_normal_all_finite() {
    let mut engine = DeviateEngine::new(31);
    for _ in 0..1000 {
        assert!(engine.normal(2.0, 0.5).is_finite());
    }
}

// ============================================================================
// Gamma Deviates
// ============================================================================

#[test]
fn test_gamma_positive_and_finite() {
    let mut engine = DeviateEngine::new(37);
    for _ in 0..1000 {
        let g = engine.gamma(3.0, 2.0);
        assert!(g.is_finite());
        assert!(g > 0.0);
    }
}

#[test]
fn test_gamma_sample_mean() {
    // Gamma(alpha, beta) has mean alpha * beta.
    let mut engine = DeviateEngine::new(41);
    let n = 10_000;
    let sum: f64 = (0..n).map(|_| engine.gamma(3.0, 2.0)).sum();
    let mean = sum / n as f64;
    assert!((mean - 6.0).abs() < 0.2, "sample mean {}", mean);
}

#[test]
fn test_gamma_shape_below_one_boosted() {
    // Shapes below 1 use the boosted path and must still match the
    // requested mean.
    let mut engine = DeviateEngine::new(43);
    let n = 10_000;
    let sum: f64 = (0..n).map(|_| engine.gamma(0.5, 1.0)).sum();
    let mean = sum / n as f64;
    assert!((mean - 0.5).abs() < 0.1, "sample mean {}", mean);
    for _ in 0..100 {
        assert!(engine.gamma(0.5, 1.0) > 0.0);
    }
}

#[test]
fn test_gamma_scale_floor() {
    let mut engine = DeviateEngine::new(47);
    for _ in 0..100 {
        let g = engine.gamma(2.0, 0.0);
        assert!(g.is_finite());
        assert!(g >= 0.0);
    }
}

// ============================================================================
// Logistic Deviates
// ============================================================================

#[test]
fn test_logistic_finite() {
    let mut engine = DeviateEngine::new(53);
    for _ in 0..1000 {
        assert!(engine.logistic(0.0, 1.0).is_finite());
    }
}

#[test]
fn test_logistic_sample_mean() {
    let mut engine = DeviateEngine::new(59);
    let n = 10_000;
    let sum: f64 = (0..n).map(|_| engine.logistic(2.0, 1.0)).sum();
    let mean = sum / n as f64;
    assert!((mean - 2.0).abs() < 0.1, "sample mean {}", mean);
}

// ============================================================================
// Cross-Distribution State
// ============================================================================

#[test]
fn test_reseed_discards_cached_spare() {
    let mut engine = DeviateEngine::new(61);
    let first = engine.normal(0.0, 1.0);

    // A cached spare exists here; reseeding must drop it.
    engine.reseed(61);
    assert_eq!(engine.normal(0.0, 1.0), first);
}

#[test]
fn test_clone_forks_stream() {
    let mut engine = DeviateEngine::new(67);
    engine.uniform();

    let mut fork = engine.clone();
    assert_eq!(engine.uniform(), fork.uniform());
}
