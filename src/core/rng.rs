//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Injectable**: match logic draws through the `RandomSource` trait, so
//!   tests can supply fixed sequences with `ScriptedRng`
//! - **Deterministic**: same seed produces an identical match
//!
//! ```
//! use elemental_clash::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.next_below(10), b.next_below(10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of randomness for dealing cards and opponent decisions.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Deterministic seeded RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the thread-local entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Replays fixed sequences of draws.
///
/// Each sequence cycles once exhausted. Integer picks are reduced modulo
/// the requested bound. An empty sequence yields `0` / `0.5`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    picks: Vec<usize>,
    units: Vec<f64>,
    pick_pos: usize,
    unit_pos: usize,
}

impl ScriptedRng {
    /// Create a scripted source from integer picks and unit floats.
    #[must_use]
    pub fn new(picks: Vec<usize>, units: Vec<f64>) -> Self {
        Self {
            picks,
            units,
            pick_pos: 0,
            unit_pos: 0,
        }
    }

    /// Script only integer picks; every unit draw returns `0.5`.
    #[must_use]
    pub fn picks(picks: Vec<usize>) -> Self {
        Self::new(picks, Vec::new())
    }
}

impl RandomSource for ScriptedRng {
    fn next_below(&mut self, bound: usize) -> usize {
        if self.picks.is_empty() {
            return 0;
        }
        let value = self.picks[self.pick_pos % self.picks.len()];
        self.pick_pos += 1;
        value % bound
    }

    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 0.5;
        }
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value
    }
}
