//! Core domain: game state, camera and level restart.

mod events;
mod resources;
mod state;
mod systems;


pub use events::RestartRequested;
pub use resources::{PendingRestart, SessionEntity};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    begin_restart, despawn_session, request_restart_on_key, setup_camera, tick_restart,
    transition_to_playing,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
        add_level_flow(app);
    }
}

/// States, restart handling and session teardown, without any rendering.
pub(crate) fn add_level_flow(app: &mut App) {
    app.init_state::<GameState>()
        .add_message::<RestartRequested>()
        .add_systems(
            Update,
            transition_to_playing.run_if(in_state(GameState::Boot)),
        )
        .add_systems(
            Update,
            (request_restart_on_key, begin_restart, tick_restart)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(OnExit(GameState::Playing), despawn_session)
        .add_systems(OnEnter(GameState::Restarting), transition_to_playing);
}
