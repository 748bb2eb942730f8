//! Random sources injected into the damage resolver

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform rolls in `[0, 1)`
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`
    fn next_roll(&mut self) -> f64;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_roll(&mut self) -> f64 {
        (**self).next_roll()
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn next_roll(&mut self) -> f64 {
        (**self).next_roll()
    }
}

/// Adapter turning any `rand` generator into a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_roll(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Production source backed by the thread-local RNG
pub fn thread_source() -> RngSource<ThreadRng> {
    RngSource(rand::thread_rng())
}

/// Reproducible source seeded from a `u64`
pub fn seeded_source(seed: u64) -> RngSource<ChaCha8Rng> {
    RngSource(ChaCha8Rng::seed_from_u64(seed))
}

/// Replays a fixed list of rolls, cycling when exhausted
///
/// Values are clamped into `[0, 1)`.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    rolls: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(rolls: Vec<f64>) -> Self {
        let rolls = if rolls.is_empty() { vec![0.0] } else { rolls };
        SequenceRandom {
            rolls: rolls
                .into_iter()
                .map(|r| r.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: 0,
        }
    }

    /// Always return the same roll
    pub fn constant(roll: f64) -> Self {
        Self::new(vec![roll])
    }

    /// Number of rolls drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn next_roll(&mut self) -> f64 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}
