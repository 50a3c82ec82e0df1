//! Core domain: level flow systems and setup.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::content::CloneTuning;
use crate::core::events::RestartRequested;
use crate::core::resources::{PendingRestart, SessionEntity};
use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn transition_to_playing(mut game_state: ResMut<NextState<GameState>>) {
    game_state.set(GameState::Playing);
}

/// `O` restarts the level after the configured delay
pub(crate) fn request_restart_on_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut restarts: MessageWriter<RestartRequested>,
) {
    if keyboard.just_pressed(KeyCode::KeyO) {
        restarts.write(RestartRequested::default());
    }
}

/// Start the countdown for the first restart request; later requests are
/// ignored until it fires.
pub(crate) fn begin_restart(
    mut commands: Commands,
    mut requests: MessageReader<RestartRequested>,
    pending: Option<Res<PendingRestart>>,
    tuning: Res<CloneTuning>,
) {
    let Some(request) = requests.read().copied().reduce(|first, _| first) else {
        return;
    };
    if pending.is_some() {
        debug!("Restart already pending, ignoring request");
        return;
    }

    let delay = request.delay.unwrap_or(tuning.restart_delay);
    info!("Restarting level in {} seconds", delay);
    commands.insert_resource(PendingRestart::new(delay));
}

pub(crate) fn tick_restart(
    mut commands: Commands,
    time: Res<Time>,
    pending: Option<ResMut<PendingRestart>>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    if pending.tick(time.delta_secs()) {
        commands.remove_resource::<PendingRestart>();
        game_state.set(GameState::Restarting);
    }
}

/// Tear down everything the session spawned.
pub(crate) fn despawn_session(
    mut commands: Commands,
    entities: Query<Entity, With<SessionEntity>>,
) {
    let mut count = 0;
    for entity in &entities {
        commands.entity(entity).despawn();
        count += 1;
    }
    commands.remove_resource::<PendingRestart>();
    info!("Level torn down ({} entities)", count);
}
