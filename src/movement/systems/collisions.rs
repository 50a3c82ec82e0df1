//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, MovementState, Player, Respawning};
use crate::sprites::ACTOR_SIZE;

/// How far below the feet a surface still counts as ground.
const GROUND_REACH: f32 = 4.0;

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &mut MovementState), (With<Player>, Without<Respawning>)>,
) {
    // Clones count as ground so the player can ride them
    let filter = SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Clone]);

    for (transform, mut state) in &mut query {
        let feet = transform.translation.truncate()
            - Vec2::new(0.0, ACTOR_SIZE.y * 0.5 * transform.scale.y);
        let grounded = spatial_query
            .cast_ray(feet, Dir2::NEG_Y, GROUND_REACH, true, &filter)
            .is_some();

        if grounded != state.on_ground {
            debug!("Ground contact: {}", grounded);
        }
        state.on_ground = grounded;
    }
}
