//! Uniform random index providers.
//!
//! Every random choice the planners make goes through [`IndexSource`], so a
//! generation run can be made reproducible by injecting a seeded or
//! fixed-sequence source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices
pub trait IndexSource {
    /// Return an index in `0..len`. Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`IndexSource`] backed by a `rand` generator
#[derive(Clone, Debug)]
pub struct RngSource<R: Rng = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// Non-deterministic source for production use
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible source: the same seed yields the same picks
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IndexSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with empty range");
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of values, each reduced modulo the requested
/// length. The sequence wraps around when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Always picks the first candidate
    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    /// Number of picks made so far
    pub fn picks(&self) -> usize {
        self.pos
    }
}

impl IndexSource for SequenceSource {
    fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "pick called with empty range");
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.pos % self.values.len()]
        };
        self.pos += 1;
        value % len
    }
}
