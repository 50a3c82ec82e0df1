//! Movement domain: player locomotion, level geometry and respawning.

mod bootstrap;
mod components;
mod resources;
mod systems;


pub use components::{
    DashPhase, DashTransition, Facing, GameLayer, Ground, MovementState, Player, RespawnPoint,
    Respawning,
};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{spawn_level, spawn_player};
use crate::movement::systems::{
    apply_gravity, apply_jump, apply_locomotion, detect_ground, hide_respawning_player,
    read_input, start_dash, tick_dash, tick_respawn, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<RespawnPoint>()
            .add_systems(OnEnter(GameState::Playing), (spawn_level, spawn_player))
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    update_facing,
                    tick_dash,
                    start_dash,
                    apply_jump,
                    apply_locomotion,
                    apply_gravity,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (hide_respawning_player, tick_respawn)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
