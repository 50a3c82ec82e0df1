//! Movement domain: player systems, in the order they run each frame.

mod collisions;
mod input;
mod movement;
mod respawn;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_gravity, apply_jump, apply_locomotion, start_dash, tick_dash, update_facing,
};
pub(crate) use respawn::{hide_respawning_player, tick_respawn};
