//! Deterministic random streams for procedural placement.
//!
//! [`SeededRandom`] is a mulberry32 generator: a 32-bit counter advanced by a
//! fixed odd increment, followed by a multiply-xor-shift avalanche. It is fast
//! and reproducible, and good enough for visual variation. It is not suitable
//! for anything security sensitive.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Increment added to the state on every draw.
const MULBERRY_INCREMENT: u32 = 0x6D2B79F5;

/// Deterministic PRNG seeded from a 32-bit integer.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance state and return next u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(MULBERRY_INCREMENT);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(1 | t);
        r = r.wrapping_add((r ^ (r >> 7)).wrapping_mul(61 | r)) ^ r;
        r ^ (r >> 14)
    }

    /// Generate f32 in range [0, 1)
    ///
    /// Only the top 24 bits are used so the result is exactly representable
    /// and never rounds up to 1.0.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * (1.0 / 16_777_216.0)
    }
}

/// How a generation pass obtains its randomness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeedMode {
    /// Reproducible: same seed and parameters give identical output.
    Seeded(u32),
    /// Fresh entropy on every pass. Output is not reproducible.
    NonDeterministic,
}

impl Default for SeedMode {
    fn default() -> Self {
        SeedMode::Seeded(12345)
    }
}

impl SeedMode {
    /// The seed, if reproducibility was requested.
    pub fn seed(self) -> Option<u32> {
        match self {
            SeedMode::Seeded(seed) => Some(seed),
            SeedMode::NonDeterministic => None,
        }
    }

    pub fn is_deterministic(self) -> bool {
        matches!(self, SeedMode::Seeded(_))
    }

    /// Build the random source for this mode.
    pub fn source(self) -> RandomSource {
        match self {
            SeedMode::Seeded(seed) => RandomSource::Seeded(SeededRandom::new(seed)),
            SeedMode::NonDeterministic => RandomSource::Entropy(StdRng::from_entropy()),
        }
    }
}

/// A stream of floats in [0, 1), either seeded or entropy-backed.
#[derive(Clone, Debug)]
pub enum RandomSource {
    Seeded(SeededRandom),
    Entropy(StdRng),
}

impl RandomSource {
    pub fn seeded(seed: u32) -> Self {
        RandomSource::Seeded(SeededRandom::new(seed))
    }

    pub fn from_entropy() -> Self {
        RandomSource::Entropy(StdRng::from_entropy())
    }

    /// Generate f32 in range [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        match self {
            RandomSource::Seeded(rng) => rng.next_f32(),
            RandomSource::Entropy(rng) => rng.r#gen::<f32>(),
        }
    }
}
