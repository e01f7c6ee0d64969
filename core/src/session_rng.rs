use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::GridModel;
use crate::types::Point;

/// Seed-tracking random source for one simulation. Constructing from a fixed
/// seed makes a whole game reproducible; `reseed` decorrelates successive
/// games while staying derivable from the original seed.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Replaces the generator with one seeded from its own next draw.
    pub fn reseed(&mut self) {
        let seed: u64 = self.rng.random();
        *self = Self::new(seed);
    }

    /// Uniformly random cell of the grid.
    pub fn random_point(&mut self, grid: &GridModel) -> Point {
        let x = self.rng.random_range(0..grid.size());
        let y = self.rng.random_range(0..grid.size());
        Point::new(x, y)
    }
}
