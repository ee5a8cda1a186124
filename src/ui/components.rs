//! UI components and resources for linking Bevy entities to simulation state

use bevy::prelude::*;

use crate::simulation::{Direction, SimWorld};

/// Resource wrapper for the simulation world
///
/// Inserted by the binary so command-line settings reach the UI.
#[derive(Resource)]
pub struct SimWorldResource(pub SimWorld);

/// Marker component for ground plane
#[derive(Component)]
pub struct Ground;

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the road surfaces
#[derive(Component)]
pub struct RoadSurface;

/// A queued vehicle visual at `slot` places behind the stop line
#[derive(Component)]
pub struct QueuedVehicle {
    pub direction: Direction,
    pub slot: usize,
}

/// The signal head for one approach
#[derive(Component)]
pub struct SignalLight(pub Direction);

/// Marker for HUD text lines
#[derive(Component)]
pub enum HudText {
    /// Active controller
    Mode,
    /// Completed ticks
    Tick,
    /// Per-approach queue lengths
    Queues,
    /// Mean waiting time
    MeanWait,
}
