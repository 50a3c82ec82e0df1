//! Render ordering and facing for actor sprites.

use bevy::prelude::*;

use crate::movement::{Facing, MovementState, Player};

/// Defines the render order for 2D sprites.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteLayer {
    /// Level geometry.
    Level = 0,
    /// Fading ghost afterimages.
    Afterimage = 10,
    /// Replaying clones.
    Clone = 20,
    /// The live player.
    Player = 30,
}

impl SpriteLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}

/// Mirrors a sprite horizontally for the given facing.
pub fn apply_facing(sprite: &mut Sprite, facing: Facing) {
    sprite.flip_x = facing == Facing::Left;
}

/// Keeps the player's sprite pointing the way it moves.
pub fn sync_player_facing(
    mut query: Query<(&MovementState, &mut Sprite), (With<Player>, Changed<MovementState>)>,
) {
    for (state, mut sprite) in &mut query {
        apply_facing(&mut sprite, state.facing);
    }
}
