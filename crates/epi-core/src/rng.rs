//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! A run owns exactly one root `SimRng` seeded from `EpiConfig::seed`.
//! Independent streams (topology generation, one per batch run) are derived
//! with [`SimRng::child`], which mixes a draw from the parent with an offset
//! multiplied by the 64-bit fractional golden-ratio constant.  This means:
//!
//! - The same seed always reproduces the same topology and the same epidemic.
//! - Batch runs never share RNG state, so they can execute on any thread in
//!   any order and still produce identical results.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts: the day loop is sequential.  For
/// parallel batch runs, give each run its own `SimRng` derived from the root.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.0)
    }

    /// `amount` distinct indices drawn uniformly from `0..length`.
    ///
    /// `amount` is clamped to `length`, so an empty or short range yields
    /// fewer indices instead of panicking.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(length);
        if amount == 0 {
            return Vec::new();
        }
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }
}
