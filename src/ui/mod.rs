//! UI module that visualizes the simulation state using Bevy
//!
//! This module is purely for visualization - all simulation logic is in the `simulation` module.
//! The UI reads snapshots from `SimWorld`, renders them, and forwards keyboard commands.

mod components;
mod input;
pub mod spawner;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::SimWorldResource;

use input::handle_input;
use spawner::{setup_hud, spawn_signals};
use sync::{sync_vehicles, tick_simulation, update_hud_text, update_signal_lights};
use world::setup_world;

/// Half the length of each drawn carriageway
pub(crate) const ROAD_HALF_LENGTH: f32 = 60.0;

/// Simulation ticks per second of wall-clock time
pub const TICK_RATE_HZ: f64 = 5.0;

/// Plugin to register all UI systems
///
/// The app must insert a [`SimWorldResource`] before adding this plugin.
pub struct IntersectionUIPlugin;

impl Plugin for IntersectionUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_systems(Startup, (setup_world, spawn_signals, setup_hud))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_input,
                    sync_vehicles,
                    update_signal_lights,
                    update_hud_text,
                ),
            );
    }
}
