//! Construction-time configuration for the intersection

use anyhow::{ensure, Result};

/// Probability that a vehicle arrives on an approach in a given tick
pub const DEFAULT_SPAWN_PROBABILITY: f64 = 0.1;

/// Vehicles released from the green queue per tick
pub const DEFAULT_MAX_PASS: usize = 1;

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Ticks the fixed-cycle controller keeps each direction green
pub const DEFAULT_PERIOD_TICKS: u32 = 50;

/// Reserved adaptive-controller setting
pub const DEFAULT_THRESHOLD: u32 = 2;

/// Settings for one [`SimIntersection`](super::SimIntersection)
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub spawn_probability: f64,
    pub max_pass: usize,
    /// `None` draws the seed from the operating system
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_probability: DEFAULT_SPAWN_PROBABILITY,
            max_pass: DEFAULT_MAX_PASS,
            seed: Some(DEFAULT_SEED),
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.spawn_probability.is_finite()
                && (0.0..=1.0).contains(&self.spawn_probability),
            "spawn probability must be within [0, 1], got {}",
            self.spawn_probability
        );
        Ok(())
    }
}
