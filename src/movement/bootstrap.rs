//! Movement domain: player and level spawning for a play session.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::clones::CloneRecorder;
use crate::content::CloneTuning;
use crate::core::SessionEntity;
use crate::effects::GhostTrail;
use crate::movement::{GameLayer, Ground, MovementState, MovementTuning, Player, RespawnPoint};
use crate::sprites::{ACTOR_SIZE, AnimationController, SpriteLayer};

/// Spawn the player at the respawn point with a recorder configured from tuning.
pub(crate) fn spawn_player(
    mut commands: Commands,
    respawn_point: Res<RespawnPoint>,
    clone_tuning: Res<CloneTuning>,
) {
    info!("Spawning player at {:?}", respawn_point.0);

    commands.spawn((
        // Identity & Movement
        (
            Name::new("Player"),
            Player,
            SessionEntity,
            MovementState::default(),
            CloneRecorder::new(clone_tuning.recorder_settings()),
        ),
        // Rendering
        (
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(ACTOR_SIZE),
                ..default()
            },
            AnimationController::default(),
            GhostTrail::new(&clone_tuning.ghost),
            Transform::from_translation(respawn_point.0.extend(SpriteLayer::Player.z_index())),
        ),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(ACTOR_SIZE.x, ACTOR_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // We handle gravity manually for more control
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Clone]),
        ),
    ));
}

/// Spawn the test level: a floor, two side walls and a ladder of platforms
/// spaced so that the top one needs a clone to stand on.
pub(crate) fn spawn_level(mut commands: Commands, tuning: Res<MovementTuning>) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let z = SpriteLayer::Level.z_index();

    // Comfortable single-jump step between platforms
    let step = tuning.single_jump_height() * 0.8;
    let floor_top = -180.0;

    let blocks = [
        // Floor and walls
        (Vec2::new(0.0, -200.0), Vec2::new(900.0, 40.0), ground_color),
        (Vec2::new(-470.0, 50.0), Vec2::new(40.0, 540.0), ground_color),
        (Vec2::new(470.0, 50.0), Vec2::new(40.0, 540.0), ground_color),
        // First step
        (
            Vec2::new(-100.0, floor_top + step),
            Vec2::new(160.0, 20.0),
            platform_color,
        ),
        // Ledge out of reach without a clone boost
        (
            Vec2::new(250.0, floor_top + step * 2.2),
            Vec2::new(160.0, 20.0),
            platform_color,
        ),
    ];

    for (center, size, color) in blocks {
        commands.spawn((
            Ground,
            SessionEntity,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(z)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            ground_layers,
        ));
    }
}
