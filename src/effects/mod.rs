//! Effects domain: ghost trails behind recording actors and clones.

mod components;
mod systems;


pub use components::{Afterimage, GhostTrail};

use bevy::prelude::*;

use crate::core::GameState;
use crate::effects::systems::{
    draw_recording_meter, emit_afterimages, fade_afterimages, toggle_recording_trail,
};

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                toggle_recording_trail,
                emit_afterimages,
                fade_afterimages,
                draw_recording_meter,
            )
                .chain()
                .run_if(in_state(GameState::Playing)),
        );
    }
}
