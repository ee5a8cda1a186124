//! Signal-control policies
//!
//! A controller looks at a [`SimulationState`] snapshot and picks which
//! approach should be green for the upcoming tick.

use anyhow::{ensure, Result};
use std::fmt;

use super::config::{DEFAULT_PERIOD_TICKS, DEFAULT_THRESHOLD};
use super::types::{Direction, SimulationState};

/// Round-robin controller that holds each direction green for a fixed number of decisions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedController {
    period_ticks: u32,
    elapsed_ticks: u32,
    current_index: usize,
}

impl Default for FixedController {
    fn default() -> Self {
        Self {
            period_ticks: DEFAULT_PERIOD_TICKS,
            elapsed_ticks: 0,
            current_index: 0,
        }
    }
}

impl FixedController {
    pub fn new(period_ticks: u32) -> Result<Self> {
        ensure!(period_ticks > 0, "fixed controller period must be at least one tick");
        Ok(Self {
            period_ticks,
            ..Self::default()
        })
    }

    /// Returns the currently selected direction, then counts this call.
    /// After `period_ticks` calls the selection moves to the next direction.
    pub fn decide(&mut self, _state: &SimulationState) -> Direction {
        let decision = Direction::from_index(self.current_index);

        self.elapsed_ticks += 1;
        if self.elapsed_ticks >= self.period_ticks {
            self.elapsed_ticks = 0;
            self.current_index = (self.current_index + 1) % Direction::ALL.len();
        }

        decision
    }

    pub fn period_ticks(&self) -> u32 {
        self.period_ticks
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    /// Direction the next call to `decide` will return
    pub fn current(&self) -> Direction {
        Direction::from_index(self.current_index)
    }
}

/// Gives green to whichever approach has the longest queue
///
/// `threshold` is accepted and kept but does not influence the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveController {
    threshold: u32,
}

impl Default for AdaptiveController {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl AdaptiveController {
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Longest queue wins, ties resolved in N, S, W, E order
    pub fn decide(&self, state: &SimulationState) -> Direction {
        state.queue_lengths.longest()
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

/// Any of the available signal-control policies
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Controller {
    Fixed(FixedController),
    Adaptive(AdaptiveController),
}

impl Controller {
    pub fn decide(&mut self, state: &SimulationState) -> Direction {
        match self {
            Controller::Fixed(controller) => controller.decide(state),
            Controller::Adaptive(controller) => controller.decide(state),
        }
    }

    pub fn mode(&self) -> ControlMode {
        match self {
            Controller::Fixed(_) => ControlMode::Fixed,
            Controller::Adaptive(_) => ControlMode::Adaptive,
        }
    }
}

impl From<FixedController> for Controller {
    fn from(controller: FixedController) -> Self {
        Controller::Fixed(controller)
    }
}

impl From<AdaptiveController> for Controller {
    fn from(controller: AdaptiveController) -> Self {
        Controller::Adaptive(controller)
    }
}

/// Which controller the driver consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Fixed,
    Adaptive,
}

impl ControlMode {
    pub fn toggle(self) -> ControlMode {
        match self {
            ControlMode::Fixed => ControlMode::Adaptive,
            ControlMode::Adaptive => ControlMode::Fixed,
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Fixed => f.write_str("fixed"),
            ControlMode::Adaptive => f.write_str("adaptive"),
        }
    }
}
