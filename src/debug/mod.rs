//! Debug tools for clone playback, compiled with the `dev-tools` feature.
//!
//! - F3 draws recorded paths, playback cursors and replayed velocities
//! - F4 restarts every clone from its first snapshot
//! - `[` / `]` slow down or speed up clone playback

mod state;
mod systems;

pub use state::{DebugState, stepped_speed};

use bevy::prelude::*;

use crate::core::GameState;
use crate::debug::systems::{
    draw_clone_paths, handle_clone_hotkeys, toggle_path_gizmos, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_path_gizmos, handle_clone_hotkeys, update_status_message)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                draw_clone_paths.run_if(|state: Res<DebugState>| state.draw_paths),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_steps_stay_in_range() {
        assert_eq!(stepped_speed(0.75, 1), 1.0);
        assert_eq!(stepped_speed(0.75, -1), 0.5);
        assert_eq!(stepped_speed(0.25, -1), 0.25);
        assert_eq!(stepped_speed(3.0, 2), 3.0);
    }

    #[test]
    fn test_status_message_is_replaced() {
        let mut state = DebugState::default();
        state.set_message("first", 1.0);
        state.set_message("second", 2.0);
        assert_eq!(state.status_message, Some(("second".to_string(), 2.0)));
    }
}
