//! Uniform random cell policy.

use super::Policy;
use crate::games::tictactoe::{Coord, SIZE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Samples cells uniformly with replacement. Never runs dry.
///
/// The generator is injectable so tests can replay a match exactly.
#[derive(Debug, Clone)]
pub struct RandomCells<R = StdRng> {
    rng: R,
}

impl RandomCells<StdRng> {
    /// Reproducible sequence from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Sequence seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomCells<R> {
    /// Uses the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Policy for RandomCells<R> {
    fn next_proposal(&mut self) -> Option<Coord> {
        let row = self.rng.gen_range(0..SIZE);
        let col = self.rng.gen_range(0..SIZE);
        Coord::new(row, col).ok()
    }

    fn name(&self) -> &str {
        "random"
    }
}
