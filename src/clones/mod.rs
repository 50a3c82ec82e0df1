//! Clones domain: recording the player and replaying recordings as looping clones.
//!
//! The recorder, playback engine and stun schedule are plain state machines
//! driven by the host; the systems in this module are the host.

mod components;
mod error;
mod events;
mod playback;
mod recorder;
mod registry;
mod snapshot;
mod stun;
mod systems;


pub use components::{CloneActor, ClonePoseSink, CloneRecorder, ReplayVelocity};
pub use error::CloneError;
pub use events::{RecordingFinished, RecordingStarted};
pub use playback::{PlaybackEngine, PlaybackState, PoseSink, total_duration_of};
pub use recorder::{
    DEFAULT_SAMPLING_INTERVAL, FinishedRecording, Recorder, RecorderSettings, RecordingOutcome,
    StopReason,
};
pub use registry::CloneRegistry;
pub use snapshot::{ActorState, Pose, Snapshot};
pub use stun::StunSchedule;

use bevy::prelude::*;

use crate::clones::systems::{
    advance_clones, begin_clone_session, end_clone_session, forget_despawned_clones,
    record_player, spawn_clones, stun_clones, sync_fixed_timestep, tick_stuns, tint_frozen_clones,
    toggle_recording,
};
use crate::core::GameState;

pub struct ClonesPlugin;

impl Plugin for ClonesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RecordingStarted>()
            .add_message::<RecordingFinished>()
            .add_systems(Startup, sync_fixed_timestep)
            .add_systems(OnEnter(GameState::Playing), begin_clone_session)
            .add_systems(OnExit(GameState::Playing), end_clone_session)
            .add_systems(
                FixedUpdate,
                record_player.run_if(in_state(GameState::Playing)),
            )
            .add_systems(
                Update,
                (
                    spawn_clones,
                    toggle_recording,
                    tick_stuns,
                    stun_clones,
                    advance_clones,
                    tint_frozen_clones,
                    forget_despawned_clones,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
