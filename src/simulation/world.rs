//! Main simulation world that ties everything together
//!
//! `SimWorld` is the driver: each tick it asks the active controller for a
//! green direction, applies it, steps the intersection and feeds the result
//! to the metrics collector. It runs without any Bevy dependencies.

use anyhow::Result;
use log::{debug, info};

use super::config::{SimConfig, DEFAULT_PERIOD_TICKS, DEFAULT_THRESHOLD};
use super::controller::{AdaptiveController, ControlMode, Controller, FixedController};
use super::intersection::SimIntersection;
use super::metrics::Metrics;
use super::types::{Direction, SimulationState, StepReport};

/// Vehicles drawn per approach on the terminal map
const MAP_QUEUE_CELLS: usize = 8;

/// The main simulation world
pub struct SimWorld {
    /// Kept so `reset` can rebuild the intersection identically
    config: SimConfig,

    /// The intersection being simulated
    intersection: SimIntersection,

    /// Fixed-cycle policy, consulted in `ControlMode::Fixed`
    fixed: Controller,

    /// Queue-length policy, consulted in `ControlMode::Adaptive`
    adaptive: Controller,

    /// Which controller decides the next tick
    mode: ControlMode,

    /// Mean-wait history
    metrics: Metrics,
}

impl SimWorld {
    pub fn new(
        config: SimConfig,
        period_ticks: u32,
        threshold: u32,
        mode: ControlMode,
    ) -> Result<Self> {
        let fixed = FixedController::new(period_ticks)?;
        let intersection = SimIntersection::new(config.clone())?;

        Ok(Self {
            config,
            intersection,
            fixed: fixed.into(),
            adaptive: AdaptiveController::new(threshold).into(),
            mode,
            metrics: Metrics::new(),
        })
    }

    /// World with every setting at its default
    pub fn create_default() -> Result<Self> {
        Self::new(
            SimConfig::default(),
            DEFAULT_PERIOD_TICKS,
            DEFAULT_THRESHOLD,
            ControlMode::Fixed,
        )
    }

    /// Main simulation tick: decide, apply, step, measure
    pub fn tick(&mut self) -> StepReport {
        let state = self.intersection.state();
        let mode = self.mode;
        let decision = self.controller_mut(mode).decide(&state);

        if decision != state.green {
            debug!(
                "Tick {}: {} controller switches green {} -> {}",
                self.intersection.ticks() + 1,
                mode,
                state.green,
                decision
            );
        }

        self.intersection.set_green(decision);
        let report = self.intersection.step();
        self.metrics.update(&self.intersection);
        report
    }

    /// Replace the intersection with a fresh one and clear the metrics.
    /// Controllers and the active mode carry over untouched.
    pub fn reset(&mut self) -> Result<()> {
        let intersection = SimIntersection::new(self.config.clone())?;
        self.intersection = intersection;
        self.metrics.reset();
        info!("Simulation reset (mode stays {})", self.mode);
        Ok(())
    }

    /// Switch between the fixed and adaptive controllers
    pub fn toggle_mode(&mut self) -> ControlMode {
        self.set_mode(self.mode.toggle());
        self.mode
    }

    pub fn set_mode(&mut self, mode: ControlMode) {
        if mode != self.mode {
            info!("Control mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn controller(&self, mode: ControlMode) -> &Controller {
        match mode {
            ControlMode::Fixed => &self.fixed,
            ControlMode::Adaptive => &self.adaptive,
        }
    }

    fn controller_mut(&mut self, mode: ControlMode) -> &mut Controller {
        match mode {
            ControlMode::Fixed => &mut self.fixed,
            ControlMode::Adaptive => &mut self.adaptive,
        }
    }

    pub fn state(&self) -> SimulationState {
        self.intersection.state()
    }

    pub fn intersection(&self) -> &SimIntersection {
        &self.intersection
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn ticks(&self) -> u64 {
        self.intersection.ticks()
    }

    /// Print a summary of the world state
    pub fn print_summary(&self) {
        let state = self.state();
        let summary = self.metrics.summary();

        println!("=== Intersection Summary ===");
        println!("Tick: {}", self.ticks());
        println!("Mode: {}", self.mode);
        println!("Green: {}", state.green);
        println!("Vehicles queued: {}", state.queue_lengths.total());

        println!("--- Queues ---");
        for (direction, length) in state.queue_lengths.iter() {
            let oldest = self
                .intersection
                .vehicles(direction)
                .next()
                .map(|vehicle| vehicle.wait_time)
                .unwrap_or(0);
            println!(
                "  {:<5}: {:>3} waiting, head waited {} ticks",
                direction.to_string(),
                length,
                oldest
            );
        }

        println!("--- Waiting Time ---");
        println!("  Samples: {}", summary.samples);
        match (summary.latest, summary.average, summary.peak) {
            (Some(latest), Some(average), Some(peak)) => {
                println!("  Latest mean wait: {:.2}", latest);
                println!("  Average mean wait: {:.2}", average);
                println!("  Peak mean wait: {:.2}", peak);
            }
            _ => println!("  No vehicles have waited yet"),
        }
    }

    /// Build an ASCII picture of the crossing: `o` queued vehicles,
    /// `G`/`R` signals, roads as `|` and `-`
    pub fn render_map(&self) -> String {
        let center = MAP_QUEUE_CELLS + 1;
        let size = 2 * center + 1;
        let mut grid = vec![vec![' '; size]; size];

        for i in 0..size {
            grid[i][center] = '|';
            grid[center][i] = '-';
        }
        grid[center][center] = '+';

        let green = self.intersection.green();
        for direction in Direction::ALL {
            // Cell `k` steps out from the centre along this approach
            let cell = |k: usize| -> (usize, usize) {
                match direction {
                    Direction::North => (center - k, center),
                    Direction::South => (center + k, center),
                    Direction::West => (center, center - k),
                    Direction::East => (center, center + k),
                }
            };

            let (row, col) = cell(1);
            grid[row][col] = if direction == green { 'G' } else { 'R' };

            let shown = self.intersection.queue_len(direction).min(MAP_QUEUE_CELLS);
            for slot in 0..shown {
                let (row, col) = cell(slot + 2);
                grid[row][col] = 'o';
            }
        }

        let mut out = String::new();
        out.push_str(&format!("Mode: {}  Green: {}\n", self.mode, green));
        for row in &grid {
            let line: String = row.iter().collect();
            out.push_str(line.trim_end());
            out.push('\n');
        }
        let counts: Vec<String> = self
            .state()
            .queue_lengths
            .iter()
            .map(|(direction, length)| format!("{}={}", direction.symbol(), length))
            .collect();
        out.push_str(&counts.join(" "));
        out.push('\n');
        out
    }

    /// Draw a visual map of the intersection in the terminal
    pub fn draw_map(&self) {
        println!("\n=== Intersection Map ===");
        println!("Legend: o=Vehicle, G=Green signal, R=Red signal");
        println!();
        print!("{}", self.render_map());
        println!();
    }
}
