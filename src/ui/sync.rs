//! Systems for syncing Bevy entities with simulation state

use bevy::prelude::*;

use super::components::{HudText, QueuedVehicle, SignalLight, SimWorldResource};
use super::spawner::{spawn_vehicle_visual, SIGNAL_GREEN, SIGNAL_RED};
use crate::simulation::Direction;

/// System to run simulation tick
pub fn tick_simulation(mut sim_world: ResMut<SimWorldResource>) {
    sim_world.0.tick();
}

/// System to keep one vehicle visual per queued vehicle
///
/// Slots are contiguous from the stop line, so a shorter queue drops the
/// outermost visuals and a longer one adds new visuals behind them.
pub fn sync_vehicles(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
    vehicle_query: Query<(Entity, &QueuedVehicle)>,
) {
    let lengths = sim_world.0.state().queue_lengths;
    let mut shown = [0usize; 4];

    for (entity, vehicle) in vehicle_query.iter() {
        if vehicle.slot >= lengths.get(vehicle.direction) {
            commands.entity(entity).despawn();
        } else {
            shown[vehicle.direction.index()] += 1;
        }
    }

    for direction in Direction::ALL {
        for slot in shown[direction.index()]..lengths.get(direction) {
            spawn_vehicle_visual(&mut commands, &mut meshes, &mut materials, direction, slot);
        }
    }
}

/// System to colour each signal head green or red
pub fn update_signal_lights(
    sim_world: Res<SimWorldResource>,
    signal_query: Query<(&SignalLight, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let green = sim_world.0.state().green;

    for (signal, material_handle) in signal_query.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = if signal.0 == green {
                SIGNAL_GREEN
            } else {
                SIGNAL_RED
            };
        }
    }
}

/// System to refresh the heads-up display
pub fn update_hud_text(
    sim_world: Res<SimWorldResource>,
    mut text_query: Query<(&mut Text, &HudText)>,
) {
    let world = &sim_world.0;
    let state = world.state();

    for (mut text, line) in text_query.iter_mut() {
        match line {
            HudText::Mode => {
                **text = format!("Mode: {}", world.mode());
            }
            HudText::Tick => {
                **text = format!("Tick: {}  Green: {}", world.ticks(), state.green);
            }
            HudText::Queues => {
                let parts: Vec<String> = state
                    .queue_lengths
                    .iter()
                    .map(|(direction, length)| format!("{}: {}", direction.symbol(), length))
                    .collect();
                **text = parts.join("  ");
            }
            HudText::MeanWait => {
                let summary = world.metrics().summary();
                **text = match (summary.latest, summary.average) {
                    (Some(latest), Some(average)) => {
                        format!("Mean wait: {:.2} (avg {:.2})", latest, average)
                    }
                    _ => "Mean wait: n/a".to_string(),
                };
            }
        }
    }
}
