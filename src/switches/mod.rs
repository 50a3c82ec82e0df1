//! Switches domain: pressure buttons held down by actors, and the doors they drive.

mod bootstrap;
mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{ButtonTransition, Door, DoorTarget, PressureButton};
pub use events::{ButtonPressed, ButtonReleased};

use bevy::prelude::*;

use crate::core::GameState;
use crate::switches::bootstrap::spawn_switches;
use crate::switches::systems::{detect_presses, drive_doors, move_doors, tint_buttons};

pub struct SwitchesPlugin;

impl Plugin for SwitchesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ButtonPressed>()
            .add_message::<ButtonReleased>()
            .add_systems(OnEnter(GameState::Playing), spawn_switches)
            .add_systems(
                Update,
                (detect_presses, drive_doors, move_doors, tint_buttons)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
