//! Clones domain: systems wiring the recorder and playback engines into the app.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::clones::components::{CloneActor, ClonePoseSink, CloneRecorder, ReplayVelocity};
use crate::clones::events::{RecordingFinished, RecordingStarted};
use crate::clones::playback::PlaybackEngine;
use crate::clones::registry::CloneRegistry;
use crate::clones::snapshot::{ActorState, Snapshot};
use crate::content::CloneTuning;
use crate::core::SessionEntity;
use crate::effects::GhostTrail;
use crate::movement::{GameLayer, MovementState, Player, Respawning};
use crate::sprites::{ACTOR_SIZE, AnimationController, SpriteLayer};

pub(crate) const CLONE_COLOR: Color = Color::srgba(0.6, 0.8, 1.0, 0.85);
pub(crate) const STUNNED_COLOR: Color = Color::srgba(0.55, 0.55, 0.6, 0.85);

/// Mutable parts of a clone the pose sink writes into.
type ClonePoseParts = (
    &'static mut Transform,
    &'static mut ReplayVelocity,
    &'static mut AnimationController,
    &'static mut Sprite,
    &'static mut GhostTrail,
);

pub(crate) fn begin_clone_session(mut commands: Commands, tuning: Res<CloneTuning>) {
    commands.insert_resource(CloneRegistry::new(tuning.max_active_clones));
    info!(
        "Clone session started (max {} active clones)",
        tuning.max_active_clones
    );
}

/// Runs the fixed step at the sampling interval, so every `record_player` tick
/// lands on a sample slot.
pub(crate) fn sync_fixed_timestep(tuning: Res<CloneTuning>, mut fixed: ResMut<Time<Fixed>>) {
    if tuning.sampling_interval <= 0.0 {
        warn!(
            "Sampling interval {} is not positive, keeping the fixed timestep",
            tuning.sampling_interval
        );
        return;
    }
    fixed.set_timestep_seconds(f64::from(tuning.sampling_interval));
    info!(
        "Fixed timestep set to {:.3}s for clone recording",
        tuning.sampling_interval
    );
}

/// Forget all clones and drop the registry. The clone entities themselves go
/// with the rest of the session.
pub(crate) fn end_clone_session(mut commands: Commands, registry: Option<ResMut<CloneRegistry>>) {
    if let Some(mut registry) = registry {
        let forgotten = registry.drain();
        info!("Clone session ended with {} active clones", forgotten.len());
    }
    commands.remove_resource::<CloneRegistry>();
}

/// `E` starts a recording, or ends the one in progress.
pub(crate) fn toggle_recording(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut players: Query<(Entity, &mut CloneRecorder), (With<Player>, Without<Respawning>)>,
    mut started: MessageWriter<RecordingStarted>,
    mut finished: MessageWriter<RecordingFinished>,
) {
    if !keyboard.just_pressed(KeyCode::KeyE) {
        return;
    }

    for (actor, mut recorder) in &mut players {
        if recorder.recorder.is_recording() {
            let done = recorder.recorder.stop();
            finished.write(RecordingFinished {
                actor,
                reason: done.reason,
                outcome: done.outcome,
            });
            continue;
        }

        match recorder.recorder.start() {
            Ok(()) => {
                info!("Clone recording started");
                started.write(RecordingStarted { actor });
            }
            Err(err) => debug!("Ignoring record toggle: {}", err),
        }
    }
}

/// Samples the player once per fixed step while a recording is armed.
pub(crate) fn record_player(
    time: Res<Time>,
    mut players: Query<
        (
            Entity,
            &Transform,
            &LinearVelocity,
            &MovementState,
            &AnimationController,
            &mut CloneRecorder,
        ),
        With<Player>,
    >,
    mut finished: MessageWriter<RecordingFinished>,
) {
    let now = time.elapsed_secs();

    for (actor, transform, velocity, movement, animation, mut recorder) in &mut players {
        if !recorder.recorder.is_recording() {
            continue;
        }

        let state = ActorState {
            position: transform.translation.truncate(),
            rotation: transform.rotation,
            velocity: velocity.0,
            animation: animation.state,
            facing: movement.facing,
        };

        if let Some(done) = recorder.recorder.tick(&state, now) {
            finished.write(RecordingFinished {
                actor,
                reason: done.reason,
                outcome: done.outcome,
            });
        }
    }
}

/// Turns finished recordings into clones and sends the recording actor back
/// to the respawn point.
pub(crate) fn spawn_clones(
    mut commands: Commands,
    mut finished: MessageReader<RecordingFinished>,
    tuning: Res<CloneTuning>,
    registry: Option<ResMut<CloneRegistry>>,
) {
    let Some(mut registry) = registry else {
        return;
    };

    for event in finished.read() {
        info!(
            "Clone recording ended ({:?}) with {} snapshots",
            event.reason,
            event.outcome.len()
        );
        commands
            .entity(event.actor)
            .try_insert(Respawning::new(tuning.respawn_delay));

        let Some(snapshots) = event.outcome.clone().into_snapshots() else {
            warn!("No recording produced, no clone spawned");
            continue;
        };

        for evicted in registry.make_room() {
            commands.entity(evicted).despawn();
            info!("Destroyed oldest clone {:?} to make space", evicted);
        }

        spawn_clone(&mut commands, &mut registry, snapshots, &tuning);
    }
}

fn spawn_clone(
    commands: &mut Commands,
    registry: &mut CloneRegistry,
    snapshots: Vec<Snapshot>,
    tuning: &CloneTuning,
) -> Option<Entity> {
    let start = snapshots.first()?.position();

    let mut engine = PlaybackEngine::new(tuning.sampling_interval);
    let mut transform = Transform::from_translation(start.extend(SpriteLayer::Clone.z_index()))
        .with_scale(Vec3::splat(tuning.clone_scale));
    let mut velocity = ReplayVelocity::default();
    let mut animation = AnimationController::default();
    let mut sprite = Sprite {
        color: CLONE_COLOR,
        custom_size: Some(ACTOR_SIZE),
        ..default()
    };
    let mut ghost = GhostTrail::new(&tuning.ghost);
    ghost.start();

    let mut sink = ClonePoseSink {
        transform: &mut transform,
        velocity: &mut velocity,
        animation: &mut animation,
        sprite: &mut sprite,
        ghost: &mut ghost,
    };
    if let Err(err) = engine.initialize(snapshots, tuning.playback_speed, &mut sink) {
        warn!("Clone not spawned: {}", err);
        return None;
    }

    let snapshot_count = engine.snapshot_count();
    let clone = commands
        .spawn((
            (CloneActor { engine }, SessionEntity, velocity),
            (sprite, transform, animation, ghost),
            (
                RigidBody::Kinematic,
                Collider::rectangle(ACTOR_SIZE.x, ACTOR_SIZE.y),
                CollisionLayers::new(GameLayer::Clone, [GameLayer::Player]),
            ),
        ))
        .id();

    let ordinal = registry.register(clone);
    commands
        .entity(clone)
        .insert(Name::new(format!("Clone {}", ordinal)));
    info!(
        "Clone {} created with {} snapshots, {} active",
        ordinal,
        snapshot_count,
        registry.len()
    );
    Some(clone)
}

/// `F` stuns every live clone for the configured duration.
pub(crate) fn stun_clones(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<CloneTuning>,
    registry: Option<ResMut<CloneRegistry>>,
    mut clones: Query<(Entity, &mut CloneActor, ClonePoseParts)>,
) {
    if !keyboard.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Some(mut registry) = registry else {
        return;
    };

    let mut stunned = 0;
    for (entity, mut actor, (mut transform, mut velocity, mut animation, mut sprite, mut ghost)) in
        &mut clones
    {
        let mut sink = ClonePoseSink {
            transform: &mut *transform,
            velocity: &mut *velocity,
            animation: &mut *animation,
            sprite: &mut *sprite,
            ghost: &mut *ghost,
        };
        if registry.stun(entity, &mut actor.engine, tuning.stun_duration, &mut sink) {
            stunned += 1;
        }
    }

    info!(
        "Stunned {} clones for {} seconds",
        stunned, tuning.stun_duration
    );
}

/// Ends stuns whose delay ran out.
pub(crate) fn tick_stuns(
    time: Res<Time>,
    registry: Option<ResMut<CloneRegistry>>,
    mut clones: Query<(&mut CloneActor, ClonePoseParts)>,
) {
    let Some(mut registry) = registry else {
        return;
    };

    for entity in registry.advance_stuns(time.delta_secs()) {
        let Ok((mut actor, (mut transform, mut velocity, mut animation, mut sprite, mut ghost))) =
            clones.get_mut(entity)
        else {
            continue;
        };

        let mut sink = ClonePoseSink {
            transform: &mut *transform,
            velocity: &mut *velocity,
            animation: &mut *animation,
            sprite: &mut *sprite,
            ghost: &mut *ghost,
        };
        if actor.engine.thaw(&mut sink) {
            debug!("Clone {:?} stun ended, resuming playback", entity);
        }
    }
}

/// Drives every clone's playback by the frame delta.
pub(crate) fn advance_clones(
    time: Res<Time>,
    mut clones: Query<(&mut CloneActor, ClonePoseParts)>,
) {
    let dt = time.delta_secs();

    for (mut actor, (mut transform, mut velocity, mut animation, mut sprite, mut ghost)) in
        &mut clones
    {
        let mut sink = ClonePoseSink {
            transform: &mut *transform,
            velocity: &mut *velocity,
            animation: &mut *animation,
            sprite: &mut *sprite,
            ghost: &mut *ghost,
        };
        actor.engine.advance(dt, &mut sink);
    }
}

/// Greys out clones while they are stunned.
pub(crate) fn tint_frozen_clones(mut clones: Query<(&CloneActor, &mut Sprite)>) {
    for (actor, mut sprite) in &mut clones {
        let color = if actor.engine.is_frozen() {
            STUNNED_COLOR
        } else {
            CLONE_COLOR
        };
        if sprite.color != color {
            sprite.color = color;
        }
    }
}

/// Clones despawned by anything other than the registry still need their
/// pending stun resume cancelled.
pub(crate) fn forget_despawned_clones(
    mut removed: RemovedComponents<CloneActor>,
    registry: Option<ResMut<CloneRegistry>>,
) {
    let Some(mut registry) = registry else {
        return;
    };

    for entity in removed.read() {
        if registry.forget(entity) {
            debug!("Forgot despawned clone {:?}", entity);
        }
    }
}
