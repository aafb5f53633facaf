use std::collections::HashSet;

use macroquad::miniquad::date;
use macroquad::rand::RandGenerator;

use crate::geometry::{Cell, Grid};

// Random draws tried before falling back to enumerating free cells
const MAX_SPAWN_ATTEMPTS: usize = 64;

/// Seed derived from the wall clock, so each launch places food differently
pub fn clock_seed() -> u64 {
    (date::now() * 1_000_000.0) as u64
}

/// Picks food cells that the snake does not occupy
pub struct FoodSpawner {
    rng: RandGenerator,
}

impl FoodSpawner {
    /// Spawner seeded from the clock
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Spawner with a fixed seed; equal seeds give equal placements
    pub fn with_seed(seed: u64) -> Self {
        let rng = RandGenerator::new();
        rng.srand(seed);
        Self { rng }
    }

    pub fn reseed(&self, seed: u64) {
        self.rng.srand(seed);
    }

    /// Uniformly random free cell of `grid`, or `None` when the board is full.
    ///
    /// Rejection sampling is only used while at most half of the board is
    /// occupied; past that, or when the draws keep hitting the snake, the
    /// free cells are listed and one is picked directly.
    pub fn spawn(&self, occupied: &HashSet<Cell>, grid: Grid) -> Option<Cell> {
        let area = grid.area();
        let taken = occupied.iter().filter(|c| grid.contains(**c)).count();
        if taken >= area {
            return None;
        }

        if taken * 2 <= area {
            for _ in 0..MAX_SPAWN_ATTEMPTS {
                let cell = Cell::new(
                    self.rng.gen_range(0, grid.width),
                    self.rng.gen_range(0, grid.height),
                );
                if !occupied.contains(&cell) {
                    return Some(cell);
                }
            }
        }

        let free: Vec<Cell> = grid.cells().filter(|c| !occupied.contains(c)).collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0, free.len())])
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}

/// Cosmetic triangle-wave size of the food block, in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct FoodPulse {
    size: f32,
    growing: bool,
    min_size: f32,
    max_size: f32,
    step: f32,
}

impl FoodPulse {
    pub fn new(min_size: f32, max_size: f32, step: f32) -> Self {
        Self {
            size: min_size,
            growing: true,
            min_size,
            max_size,
            step,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn reset(&mut self) {
        self.size = self.min_size;
        self.growing = true;
    }

    /// One tick of animation; flips direction at either bound
    pub fn advance(&mut self) {
        if self.growing {
            self.size = (self.size + self.step).min(self.max_size);
            if self.size >= self.max_size {
                self.growing = false;
            }
        } else {
            self.size = (self.size - self.step).max(self.min_size);
            if self.size <= self.min_size {
                self.growing = true;
            }
        }
    }
}
