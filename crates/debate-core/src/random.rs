//! Random sources for rebuttal and hint selection
//!
//! Sessions never reach for ambient randomness; they are handed a
//! [`RandomSource`] so hosts can seed it and tests can script it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks an index in `0..len`
pub trait RandomSource: Send + std::fmt::Debug {
    /// Return an index strictly below `len`. Callers never pass 0.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform source backed by [`StdRng`]
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for StdRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of indices, wrapping around and clamping to `len`
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, cursor: 0 }
    }

    /// Always pick the first element
    pub fn first() -> Self {
        Self::new(vec![0])
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let raw = self.picks.get(self.cursor).copied().unwrap_or(0);
        if !self.picks.is_empty() {
            self.cursor = (self.cursor + 1) % self.picks.len();
        }
        raw.min(len.saturating_sub(1))
    }
}
