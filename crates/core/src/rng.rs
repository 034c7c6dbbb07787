//! RNG module - the randomness port every engine draws from
//!
//! Engines never reach for a global generator. They take a [`RandomSource`]
//! at construction and call it for target selection, food placement and
//! piece selection. Two sources ship with the crate:
//!
//! - [`SimpleRng`]: small LCG, seeded explicitly or from the clock
//! - [`ScriptedRng`]: replays fixed samples, for reproducible scenarios

use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform sample source.
pub trait RandomSource {
    /// Next sample, uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Map one sample onto `0..len`.
///
/// `len` must be non-zero.
pub fn pick_index<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0, "pick_index over an empty range");
    let idx = (rng.next_f64() * len as f64) as usize;
    idx.min(len.saturating_sub(1))
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the system clock (the "unseeded" source used by hosts).
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Current internal state (restarting from it replays the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / 4_294_967_296.0
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// An empty script always yields `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        let samples = samples
            .into()
            .into_iter()
            .map(|s| s.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { samples, cursor: 0 }
    }

    /// Sample that makes [`pick_index`] return `index` over `len` items.
    pub fn sample_for(index: usize, len: usize) -> f64 {
        (index as f64 + 0.5) / len.max(1) as f64
    }

    /// Script that picks the given indices, in order, each over `len` items.
    pub fn picking(indices: &[usize], len: usize) -> Self {
        Self::new(
            indices
                .iter()
                .map(|&i| Self::sample_for(i, len))
                .collect::<Vec<_>>(),
        )
    }
}

impl RandomSource for ScriptedRng {
    fn next_f64(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor = self.cursor.wrapping_add(1);
        sample
    }
}
