//! Movement domain: hiding the player and bringing it back at the respawn point.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, Player, RespawnPoint, Respawning};

/// Hides the player and takes it out of the simulation as soon as a respawn starts.
pub(crate) fn hide_respawning_player(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Visibility), (With<Player>, Added<Respawning>)>,
) {
    for (entity, mut visibility) in &mut query {
        *visibility = Visibility::Hidden;
        commands
            .entity(entity)
            .insert((RigidBodyDisabled, ColliderDisabled));
        info!("Player despawned for respawn");
    }
}

/// Counts down the respawn delay, then restores the player at the respawn point.
pub(crate) fn tick_respawn(
    mut commands: Commands,
    time: Res<Time>,
    respawn_point: Res<RespawnPoint>,
    mut query: Query<
        (
            Entity,
            &mut Respawning,
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Visibility,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut respawning, mut transform, mut velocity, mut state, mut visibility) in
        &mut query
    {
        if !respawning.tick(dt) {
            continue;
        }

        transform.translation = respawn_point.0.extend(transform.translation.z);
        transform.rotation = Quat::IDENTITY;
        velocity.0 = Vec2::ZERO;
        state.reset();
        *visibility = Visibility::Inherited;

        commands
            .entity(entity)
            .remove::<(Respawning, RigidBodyDisabled, ColliderDisabled)>();
        info!("Player respawned at {:?}", respawn_point.0);
    }
}
