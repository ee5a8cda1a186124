//! Intersection logic for the traffic simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use anyhow::{Context, Result};
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

use super::config::SimConfig;
use super::types::{Direction, QueueLengths, SimulationState, StepReport};
use super::vehicle::Vehicle;

/// A four-way intersection with one FIFO queue per approach
///
/// Exactly one approach is green at any time. Each call to [`step`](Self::step)
/// runs the spawn, release and aging phases in that order.
#[derive(Debug, Clone)]
pub struct SimIntersection {
    config: SimConfig,
    /// Queues indexed by `Direction::index`, head at the front
    queues: [VecDeque<Vehicle>; 4],
    green: Direction,
    /// Random stream owned by this intersection only
    rng: StdRng,
    ticks: u64,
}

impl SimIntersection {
    pub fn new(config: SimConfig) -> Result<Self> {
        config
            .validate()
            .context("Invalid intersection configuration")?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            config,
            queues: Default::default(),
            green: Direction::North,
            rng,
            ticks: 0,
        })
    }

    /// Advance the intersection by one tick
    pub fn step(&mut self) -> StepReport {
        let mut report = StepReport::default();

        // Spawn: one independent draw per approach
        for direction in Direction::ALL {
            if self.rng.random_bool(self.config.spawn_probability) {
                self.queues[direction.index()].push_back(Vehicle::new(direction));
                report.spawned.push(direction);
            }
        }

        // Release from the head of the green queue only
        let queue = &mut self.queues[self.green.index()];
        let released = self.config.max_pass.min(queue.len());
        queue.drain(..released);
        report.released = released;

        // Age everything still waiting
        for vehicle in self.queues.iter_mut().flatten() {
            vehicle.age();
        }

        self.ticks += 1;
        trace!(
            "Tick {}: spawned {:?}, released {} from {}",
            self.ticks,
            report.spawned,
            report.released,
            self.green
        );
        report
    }

    /// Give the green signal to `direction`; any direction may follow any other
    pub fn set_green(&mut self, direction: Direction) {
        self.green = direction;
    }

    pub fn green(&self) -> Direction {
        self.green
    }

    /// Snapshot of queue lengths and the green approach
    pub fn state(&self) -> SimulationState {
        SimulationState {
            queue_lengths: self.queue_lengths(),
            green: self.green,
        }
    }

    pub fn queue_lengths(&self) -> QueueLengths {
        let mut lengths = QueueLengths::default();
        for direction in Direction::ALL {
            lengths.set(direction, self.queue_len(direction));
        }
        lengths
    }

    pub fn queue_len(&self, direction: Direction) -> usize {
        self.queues[direction.index()].len()
    }

    /// Vehicles waiting on one approach, head first
    pub fn vehicles(&self, direction: Direction) -> impl Iterator<Item = &Vehicle> + '_ {
        self.queues[direction.index()].iter()
    }

    /// Every queued vehicle, approach by approach in canonical order
    pub fn all_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.queues.iter().flatten()
    }

    /// Number of completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}
