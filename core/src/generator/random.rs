use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Picks cells uniformly with any `rand` generator.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<SmallRng> {
    /// Reproducible picker, the same seed always yields the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> CellPicker for RandomPicker<R> {
    fn pick(&mut self, bound: CellCount) -> CellCount {
        self.rng.random_range(0..bound)
    }
}
