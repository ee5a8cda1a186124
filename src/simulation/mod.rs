//! Standalone intersection simulation module
//!
//! This module contains all the core simulation logic (queues, signal
//! controllers and waiting-time metrics) and runs independently of the
//! Bevy game engine. It can be driven from the console without booting
//! up the full UI.

mod config;
mod controller;
mod intersection;
mod metrics;
mod types;
mod vehicle;
mod world;

// Re-export public types for external use
// These may not be used within this crate but are part of the public API
#[allow(unused_imports)]
pub use config::{
    SimConfig, DEFAULT_MAX_PASS, DEFAULT_PERIOD_TICKS, DEFAULT_SEED, DEFAULT_SPAWN_PROBABILITY,
    DEFAULT_THRESHOLD,
};
#[allow(unused_imports)]
pub use controller::{AdaptiveController, ControlMode, Controller, FixedController};
#[allow(unused_imports)]
pub use intersection::SimIntersection;
#[allow(unused_imports)]
pub use metrics::{Metrics, MetricsSummary};
#[allow(unused_imports)]
pub use types::{Direction, QueueLengths, SimulationState, StepReport};
#[allow(unused_imports)]
pub use vehicle::Vehicle;
pub use world::SimWorld;
