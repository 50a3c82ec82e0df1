//! Sprites module for actor animation and render ordering.
//!
//! This module handles:
//! - Animation tags and frame playback (paused while a clone is stunned)
//! - Squash and stretch of the actor quads per animation state
//! - Render layers and horizontal facing

pub mod animation;
pub mod layers;


use bevy::prelude::*;

pub use animation::*;
pub use layers::*;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                animation_state_machine,
                update_animation_frames,
                apply_animation_squash,
                sync_player_facing,
            )
                .chain(),
        );
    }
}
