//! Seeded pseudo-random deviate generation.
//!
//! ## Purpose
//!
//! This module provides [`DeviateEngine`], a seedable pseudo-random number
//! generator producing uniform deviates in the open interval (0, 1) together
//! with derived exponential, normal, gamma, and logistic deviates. The
//! resampling layer is built on top of it, and it is exposed publicly so
//! callers can drive reproducible simulations with the same streams.
//!
//! ## Design notes
//!
//! * **Core generator**: MINSTD multiplicative congruential generator
//!   (modulus 2^31 - 1, multiplier 16807) stepped with Schrage's
//!   decomposition so the product never overflows.
//! * **Decorrelation**: A 32-entry Bays-Durham shuffle table breaks the
//!   short-range serial correlation of the raw congruential stream.
//! * **Owned state**: The engine is an explicit value seeded at
//!   construction. There is no process-wide generator; two engines with the
//!   same seed produce identical streams independently.
//! * **Never-throw contract**: Distribution parameters that are non-finite
//!   or out of domain are coerced to documented defaults instead of
//!   returning errors. The engine is intended to be embedded in interactive
//!   hosts where a deviate request must always produce a number.
//!
//! ## Key concepts
//!
//! * **Uniform stream**: `uniform()` is the primitive every other deviate is
//!   composed from. Values are strictly inside (0, 1); the top of the range
//!   is clamped just below 1.
//! * **Spare-deviate pairing**: The polar Box-Muller transform produces
//!   normals in pairs. The second member of each pair is cached and consumed
//!   by the next `normal` call, so consecutive calls alternate between
//!   drawing fresh uniforms and draining the cache.
//!
//! ## Invariants
//!
//! * Every returned deviate is a finite `f64` for in-domain parameters.
//! * Reseeding with the same seed reproduces the sequence exactly, including
//!   discarding any cached spare normal deviate.
//!
//! ## Non-goals
//!
//! * This module is not a cryptographic generator.
//! * This module does not provide discrete distributions; index selection
//!   for resampling lives in the evaluation layer.

#[allow(unused_imports)]
use num_traits::Float;

// ============================================================================
// Generator Constants
// ============================================================================

/// MINSTD multiplier.
const IA: i64 = 16807;

/// Modulus 2^31 - 1 (a Mersenne prime).
const IM: i64 = 2_147_483_647;

/// Scale factor mapping the integer state into (0, 1).
const AM: f64 = 1.0 / IM as f64;

/// Schrage decomposition quotient: IM / IA.
const IQ: i64 = 127_773;

/// Schrage decomposition remainder: IM % IA.
const IR: i64 = 2836;

/// Size of the Bays-Durham shuffle table.
const NTAB: usize = 32;

/// Divisor mapping a state value onto a shuffle-table slot.
const NDIV: i64 = 1 + (IM - 1) / NTAB as i64;

/// Largest value `uniform` may return; keeps the output strictly below 1.
const RNMX: f64 = 1.0 - 1.2e-7;

/// Number of warm-up steps discarded before the table is filled.
const WARMUP: usize = 8;

/// Smallest admissible gamma scale parameter.
const MIN_GAMMA_SCALE: f64 = 1e-4;

// ============================================================================
// Deviate Engine
// ============================================================================

/// Seedable pseudo-random deviate generator.
///
/// Construct with [`DeviateEngine::new`] and draw deviates with the
/// distribution methods. The engine owns all of its state; cloning it forks
/// the stream at the current position.
///
/// # Examples
///
/// ```
/// use bagfit_rs::prelude::*;
///
/// let mut engine = DeviateEngine::new(42);
/// let u = engine.uniform();
/// assert!(u > 0.0 && u < 1.0);
///
/// // Same seed, same stream.
/// let mut replay = DeviateEngine::new(42);
/// assert_eq!(replay.uniform(), u);
/// ```
#[derive(Debug, Clone)]
pub struct DeviateEngine {
    /// Current MINSTD register.
    state: i64,

    /// Bays-Durham shuffle table.
    table: [i64; NTAB],

    /// Most recent table output, used to pick the next slot.
    carry: i64,

    /// Cached second deviate of the last Box-Muller pair.
    spare: Option<f64>,
}

impl DeviateEngine {
    /// Create an engine seeded with `seed`.
    ///
    /// Seeds below 1 are coerced to 1 and seeds above the generator modulus
    /// are clamped to it, so every `u64` is an acceptable seed.
    pub fn new(seed: u64) -> Self {
        let mut engine = Self {
            state: 1,
            table: [0; NTAB],
            carry: 0,
            spare: None,
        };
        engine.reseed(seed);
        engine
    }

    /// Discard all state and restart the stream from `seed`.
    ///
    /// After reseeding, the engine behaves exactly like a freshly
    /// constructed one: the shuffle table is refilled and any cached spare
    /// normal deviate is dropped.
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed.clamp(1, (IM - 1) as u64) as i64;
        self.spare = None;

        // Warm up the generator, then load the shuffle table back to front.
        for j in (0..NTAB + WARMUP).rev() {
            self.step();
            if j < NTAB {
                self.table[j] = self.state;
            }
        }
        self.carry = self.table[0];
    }

    /// Advance the MINSTD register one step without overflow.
    #[inline]
    fn step(&mut self) {
        let k = self.state / IQ;
        self.state = IA * (self.state - k * IQ) - IR * k;
        if self.state < 0 {
            self.state += IM;
        }
    }

    // ========================================================================
    // Uniform Deviates
    // ========================================================================

    /// Draw a uniform deviate in the open interval (0, 1).
    ///
    /// The raw congruential output is routed through the shuffle table, and
    /// the result is clamped a rounding margin below 1 so exactly 1.0 is
    /// never returned. The low end is safe by construction since the integer state
    /// never reaches zero.
    pub fn uniform(&mut self) -> f64 {
        self.step();

        // Bays-Durham: pick a slot from the previous output, emit its
        // content, refill it with the fresh state.
        let slot = (self.carry / NDIV) as usize;
        self.carry = self.table[slot];
        self.table[slot] = self.state;

        (AM * self.carry as f64).min(RNMX)
    }

    // ========================================================================
    // Derived Deviates
    // ========================================================================

    /// Draw an exponential deviate with unit mean.
    ///
    /// Rejects zero uniforms before applying the -ln(u) transform, so the
    /// result is always finite and positive.
    pub fn exponential(&mut self) -> f64 {
        loop {
            let u = self.uniform();
            if u > 0.0 {
                return -u.ln();
            }
        }
    }

    /// Draw a normal deviate with the given mean and standard deviation.
    ///
    /// Uses the polar Box-Muller method: pairs of uniforms are rejected
    /// until they land strictly inside the unit circle, then transformed
    /// into two independent standard normal deviates.
    ///
    /// # Pairing contract
    ///
    /// Deviates are produced two at a time. The second member of each pair
    /// is cached and returned by the *next* call, scaled by that call's
    /// `mean` and `std_dev`, without drawing new uniforms. Consecutive calls
    /// therefore consume uniforms on every other invocation; [`reseed`]
    /// clears the cache.
    ///
    /// Non-finite `mean` is coerced to 0; non-finite or non-positive
    /// `std_dev` is coerced to 1.
    ///
    /// [`reseed`]: DeviateEngine::reseed
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        let mean = if mean.is_finite() { mean } else { 0.0 };
        let std_dev = if std_dev.is_finite() && std_dev > 0.0 {
            std_dev
        } else {
            1.0
        };

        if let Some(z) = self.spare.take() {
            return mean + std_dev * z;
        }

        loop {
            let v1 = 2.0 * self.uniform() - 1.0;
            let v2 = 2.0 * self.uniform() - 1.0;
            let r_sq = v1 * v1 + v2 * v2;
            if r_sq >= 1.0 || r_sq == 0.0 {
                continue;
            }

            let factor = (-2.0 * r_sq.ln() / r_sq).sqrt();
            self.spare = Some(v1 * factor);
            return mean + std_dev * v2 * factor;
        }
    }

    /// Draw a gamma deviate with shape `alpha` and scale `beta`.
    ///
    /// Implements the Marsaglia-Tsang squeeze/accept method. Shapes below 1
    /// are boosted to `alpha + 1` and the accepted deviate is multiplied by
    /// `u^(1/alpha)` to restore the requested distribution.
    ///
    /// Non-finite or non-positive `alpha` is coerced to 1; `beta` is floored
    /// at 1e-4 (non-finite `beta` becomes 1).
    pub fn gamma(&mut self, alpha: f64, beta: f64) -> f64 {
        let alpha = if alpha.is_finite() && alpha > 0.0 {
            alpha
        } else {
            1.0
        };
        let beta = if beta.is_finite() {
            beta.max(MIN_GAMMA_SCALE)
        } else {
            1.0
        };

        let boosted = alpha < 1.0;
        let shape = if boosted { alpha + 1.0 } else { alpha };

        let d = shape - 1.0 / 3.0;
        let c = 1.0 / (9.0 * d).sqrt();

        loop {
            let x = self.normal(0.0, 1.0);
            let t = 1.0 + c * x;
            if t <= 0.0 {
                continue;
            }
            let v = t * t * t;
            let u = self.uniform();

            // Squeeze test first, logarithmic test only when it fails.
            let accept = u < 1.0 - 0.0331 * (x * x) * (x * x)
                || u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln());
            if !accept {
                continue;
            }

            let mut deviate = d * v;
            if boosted {
                let w = self.uniform();
                deviate *= w.powf(1.0 / alpha);
            }
            return beta * deviate;
        }
    }

    /// Draw a logistic deviate with the given mean and scale.
    ///
    /// Applies the inverse logistic CDF to a uniform deviate excluded from
    /// {0, 1}. Non-finite `mean` is coerced to 0; non-finite or
    /// non-positive `scale` is coerced to 1.
    pub fn logistic(&mut self, mean: f64, scale: f64) -> f64 {
        let mean = if mean.is_finite() { mean } else { 0.0 };
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };

        loop {
            let u = self.uniform();
            if u > 0.0 && u < 1.0 {
                return mean + scale * (u / (1.0 - u)).ln();
            }
        }
    }
}
