//! Movement domain: facing, dash, jump and gravity for the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::clones::CloneRecorder;
use crate::effects::GhostTrail;
use crate::movement::{DashTransition, MovementInput, MovementState, MovementTuning, Player, Respawning};

type ActivePlayer = (With<Player>, Without<Respawning>);

pub(crate) fn update_facing(
    input: Res<MovementInput>,
    mut query: Query<&mut MovementState, ActivePlayer>,
) {
    for mut state in &mut query {
        state.face_towards(input.axis);
    }
}

/// Ends finished dashes (stopping dead) and finished cooldowns.
pub(crate) fn tick_dash(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut MovementState,
            &mut LinearVelocity,
            &mut GhostTrail,
            Option<&CloneRecorder>,
        ),
        ActivePlayer,
    >,
) {
    let dt = time.delta_secs();

    for (mut state, mut velocity, mut trail, recorder) in &mut query {
        match state.tick_dash(dt, tuning.dash_cooldown) {
            Some(DashTransition::Ended) => {
                velocity.0 = Vec2::ZERO;
                // A running recording owns the trail
                let recording = recorder.is_some_and(|recorder| recorder.recorder.is_recording());
                if !recording {
                    trail.stop();
                }
                debug!("Dash ended");
            }
            Some(DashTransition::Ready) => debug!("Dash ready"),
            None => {}
        }
    }
}

pub(crate) fn start_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity, &mut GhostTrail), ActivePlayer>,
) {
    if !input.dash {
        return;
    }

    for (mut state, mut velocity, mut trail) in &mut query {
        if state.try_start_dash(tuning.dash_duration) {
            velocity.0 = Vec2::ZERO;
            trail.start();
            debug!("Dash: facing={:?}", state.facing);
        }
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), ActivePlayer>,
) {
    if !input.jump {
        return;
    }

    for (state, mut velocity) in &mut query {
        if state.can_jump() {
            velocity.y = tuning.jump_velocity;
            debug!("Jump");
        }
    }
}

pub(crate) fn apply_locomotion(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), ActivePlayer>,
) {
    for (state, mut velocity) in &mut query {
        velocity.0 = tuning.locomotion_velocity(state, input.axis, velocity.0);
    }
}

/// Gravity is integrated by hand; the body's own gravity scale is zero.
pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), ActivePlayer>,
) {
    let dt = time.delta_secs();

    for (state, mut velocity) in &mut query {
        if !state.is_dashing() {
            velocity.y -= tuning.gravity * dt;
        }
    }
}
