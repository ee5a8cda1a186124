//! Systems for spawning visual entities from simulation state

use bevy::prelude::*;

use super::components::{HudText, QueuedVehicle, SignalLight, SimWorldResource};
use crate::simulation::Direction;

/// Distance from the centre of the crossing to the stop line
pub const STOP_LINE_DISTANCE: f32 = 5.0;

/// Gap between consecutive queued vehicles
pub const VEHICLE_SPACING: f32 = 2.2;

/// Sideways offset of the approach lane from the road centre line
const LANE_OFFSET: f32 = 1.5;

const VEHICLE_COLOR: Color = Color::srgb(0.2, 0.6, 1.0);
pub const SIGNAL_GREEN: Color = Color::srgb(0.2, 0.9, 0.2);
pub const SIGNAL_RED: Color = Color::srgb(0.9, 0.2, 0.2);

/// World position `distance` units out along the approach lane of `direction`
pub fn approach_position(direction: Direction, distance: f32, height: f32) -> Vec3 {
    match direction {
        Direction::North => Vec3::new(-LANE_OFFSET, height, distance),
        Direction::South => Vec3::new(LANE_OFFSET, height, -distance),
        Direction::West => Vec3::new(-distance, height, -LANE_OFFSET),
        Direction::East => Vec3::new(distance, height, LANE_OFFSET),
    }
}

/// System to create one signal head per approach
pub fn spawn_signals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim_world: Res<SimWorldResource>,
) {
    let green = sim_world.0.state().green;
    let mesh = meshes.add(Sphere::new(0.8));

    for direction in Direction::ALL {
        let color = if direction == green {
            SIGNAL_GREEN
        } else {
            SIGNAL_RED
        };
        commands.spawn((
            SignalLight(direction),
            Mesh3d(mesh.clone()),
            // Each signal gets its own material so it can change colour alone
            MeshMaterial3d(materials.add(color)),
            Transform::from_translation(approach_position(
                direction,
                STOP_LINE_DISTANCE - 1.5,
                1.0,
            )),
        ));
    }
}

/// Spawn the visual for one queued vehicle
pub fn spawn_vehicle_visual(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    direction: Direction,
    slot: usize,
) -> Entity {
    let distance = STOP_LINE_DISTANCE + slot as f32 * VEHICLE_SPACING;
    let rotation = match direction {
        Direction::North | Direction::South => Quat::IDENTITY,
        Direction::West | Direction::East => Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
    };

    commands
        .spawn((
            QueuedVehicle { direction, slot },
            Mesh3d(meshes.add(Cuboid::new(1.0, 0.6, 1.6))),
            MeshMaterial3d(materials.add(VEHICLE_COLOR)),
            Transform::from_translation(approach_position(direction, distance, 0.3))
                .with_rotation(rotation),
        ))
        .id()
}

/// System to setup the heads-up display
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Auto,
                height: Val::Auto,
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(5.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Mode: fixed"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 0.5)),
                HudText::Mode,
            ));

            for (initial, line) in [
                ("Tick: 0", HudText::Tick),
                ("N: 0  S: 0  W: 0  E: 0", HudText::Queues),
                ("Mean wait: n/a", HudText::MeanWait),
            ] {
                parent.spawn((
                    Text::new(initial),
                    TextFont {
                        font_size: 14.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    line,
                ));
            }

            parent.spawn((
                Text::new("SPACE: toggle mode   R: reset   ESC: exit"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.6, 0.6, 0.6)),
            ));
        });
}
