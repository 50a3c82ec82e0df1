//! Effects domain: afterimage emission, fading and the recording meter.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::clones::{CloneRecorder, RecordingFinished, RecordingStarted};
use crate::core::SessionEntity;
use crate::effects::{Afterimage, GhostTrail};
use crate::movement::MovementState;
use crate::sprites::SpriteLayer;

pub(crate) fn emit_afterimages(
    mut commands: Commands,
    time: Res<Time>,
    mut trails: Query<(&mut GhostTrail, &Transform, &Sprite)>,
) {
    let dt = time.delta_secs();

    for (mut trail, transform, sprite) in &mut trails {
        if !trail.tick(dt) {
            continue;
        }

        commands.spawn((
            Afterimage::new(trail.lifetime, trail.alpha),
            SessionEntity,
            Sprite {
                color: Color::srgba(1.0, 1.0, 1.0, trail.alpha),
                custom_size: sprite.custom_size,
                flip_x: sprite.flip_x,
                ..default()
            },
            Transform {
                translation: transform
                    .translation
                    .truncate()
                    .extend(SpriteLayer::Afterimage.z_index()),
                ..*transform
            },
        ));
    }
}

pub(crate) fn fade_afterimages(
    mut commands: Commands,
    time: Res<Time>,
    mut afterimages: Query<(Entity, &mut Afterimage, &mut Sprite)>,
) {
    let dt = time.delta_secs();

    for (entity, mut afterimage, mut sprite) in &mut afterimages {
        afterimage.age += dt;
        if afterimage.expired() {
            commands.entity(entity).despawn();
            continue;
        }
        sprite.color = Color::srgba(1.0, 1.0, 1.0, afterimage.current_alpha());
    }
}

/// The recording actor trails ghosts for as long as the recording runs.
pub(crate) fn toggle_recording_trail(
    mut started: MessageReader<RecordingStarted>,
    mut finished: MessageReader<RecordingFinished>,
    mut trails: Query<(&mut GhostTrail, Option<&MovementState>)>,
) {
    for event in started.read() {
        if let Ok((mut trail, _)) = trails.get_mut(event.actor) {
            trail.start();
        }
    }
    for event in finished.read() {
        if let Ok((mut trail, movement)) = trails.get_mut(event.actor) {
            // A dash in progress keeps the trail until it ends
            if movement.is_some_and(MovementState::is_dashing) {
                continue;
            }
            trail.stop();
        }
    }
}

/// Bar above the recording actor showing how much recording time is used.
pub(crate) fn draw_recording_meter(mut gizmos: Gizmos, recorders: Query<(&Transform, &CloneRecorder)>) {
    const WIDTH: f32 = 40.0;

    for (transform, recorder) in &recorders {
        if !recorder.recorder.is_recording() {
            continue;
        }

        let left = transform.translation.truncate() + Vec2::new(-WIDTH / 2.0, 40.0);
        let filled = WIDTH * recorder.recorder.progress();
        gizmos.line_2d(left, left + Vec2::new(WIDTH, 0.0), Color::srgb(0.3, 0.3, 0.3));
        gizmos.line_2d(left, left + Vec2::new(filled, 0.0), Color::srgb(0.9, 0.2, 0.2));
    }
}
