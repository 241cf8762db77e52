// Tue Jan 13 2026 - Alex

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub const READING_MIN: f64 = 0.0;
pub const READING_MAX: f64 = 100.0;

/// Source of raw values behind a sensor. `None` means the stream ran dry.
pub trait ReadingGenerator: Send {
    fn next_value(&mut self) -> Option<f64>;
}

pub struct UniformGenerator {
    rng: StdRng,
}

impl UniformGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadingGenerator for UniformGenerator {
    fn next_value(&mut self) -> Option<f64> {
        Some(self.rng.gen_range(READING_MIN..READING_MAX))
    }
}

/// Replays a fixed sequence of values, optionally looping over it.
pub struct ReplayGenerator {
    values: VecDeque<f64>,
    cycle: bool,
}

impl ReplayGenerator {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cycle: false,
        }
    }

    pub fn cycled(mut self) -> Self {
        self.cycle = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl ReadingGenerator for ReplayGenerator {
    fn next_value(&mut self) -> Option<f64> {
        let value = self.values.pop_front()?;
        if self.cycle {
            self.values.push_back(value);
        }
        Some(value)
    }
}
