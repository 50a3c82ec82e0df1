//! Debug domain: hotkeys and gizmos for inspecting clones.

use bevy::prelude::*;

use crate::clones::{CloneActor, ClonePoseSink, PlaybackState, ReplayVelocity};
use crate::debug::state::{DebugState, stepped_speed};
use crate::effects::GhostTrail;
use crate::sprites::AnimationController;

/// Toggle clone path drawing with F3
pub(crate) fn toggle_path_gizmos(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.draw_paths = !debug_state.draw_paths;
        let label = if debug_state.draw_paths { "on" } else { "off" };
        debug_state.set_message(format!("Clone paths {}", label), 2.0);
    }
}

/// F4 sends every clone back to its first snapshot; `[` and `]` change
/// playback speed.
pub(crate) fn handle_clone_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    mut clones: Query<(
        &mut CloneActor,
        &mut Transform,
        &mut ReplayVelocity,
        &mut AnimationController,
        &mut Sprite,
        &mut GhostTrail,
    )>,
) {
    let restart = keyboard.just_pressed(KeyCode::F4);
    let steps = match (
        keyboard.just_pressed(KeyCode::BracketLeft),
        keyboard.just_pressed(KeyCode::BracketRight),
    ) {
        (true, false) => -1,
        (false, true) => 1,
        _ => 0,
    };
    if !restart && steps == 0 {
        return;
    }

    let mut count = 0;
    let mut speed = None;
    for (mut actor, mut transform, mut velocity, mut animation, mut sprite, mut ghost) in
        &mut clones
    {
        if restart {
            let mut sink = ClonePoseSink {
                transform: &mut *transform,
                velocity: &mut *velocity,
                animation: &mut *animation,
                sprite: &mut *sprite,
                ghost: &mut *ghost,
            };
            actor.engine.restart(&mut sink);
        }
        if steps != 0 {
            let next = stepped_speed(actor.engine.speed(), steps);
            actor.engine.set_speed(next);
            speed = Some(next);
        }
        count += 1;
    }

    if restart {
        debug_state.set_message(format!("Restarted {} clones", count), 2.0);
    }
    if let Some(speed) = speed {
        debug_state.set_message(format!("Clone speed {:.2}", speed), 2.0);
    }
}

/// Update status message timer and let it expire
pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if let Some((_, ref mut duration)) = debug_state.status_message {
        *duration -= time.delta_secs();
        if *duration <= 0.0 {
            debug_state.status_message = None;
        }
    }
}

/// Draw each clone's recorded path, its cursor and its replayed velocity
pub(crate) fn draw_clone_paths(
    mut gizmos: Gizmos,
    clones: Query<(&CloneActor, &Transform, &ReplayVelocity)>,
) {
    for (actor, transform, velocity) in &clones {
        let path = actor.engine.snapshots().iter().map(|snapshot| snapshot.position());
        gizmos.linestrip_2d(path, Color::srgba(0.6, 0.8, 1.0, 0.4));

        let color = match actor.engine.state() {
            PlaybackState::PlayingForward => Color::srgb(0.2, 0.9, 0.3),
            PlaybackState::PlayingBackward => Color::srgb(0.9, 0.6, 0.2),
            PlaybackState::Frozen => Color::srgb(0.6, 0.6, 0.6),
            PlaybackState::Idle => Color::srgb(0.9, 0.2, 0.2),
        };
        let position = transform.translation.truncate();
        gizmos.circle_2d(position, 6.0, color);
        gizmos.arrow_2d(position, position + velocity.0 * 0.1, color);
    }
}
