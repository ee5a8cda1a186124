//! Input handling systems

use bevy::prelude::*;

use super::components::SimWorldResource;

/// Handle keyboard commands: mode toggle, reset and exit
pub fn handle_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut sim_world: ResMut<SimWorldResource>,
    mut exit: MessageWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Space) {
        sim_world.0.toggle_mode();
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        if let Err(e) = sim_world.0.reset() {
            bevy::log::error!("Failed to reset simulation: {:#}", e);
        }
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
