//! Core domain: game state definitions for the level flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    Boot,
    /// The level is live; everything spawned here carries [`SessionEntity`].
    ///
    /// [`SessionEntity`]: crate::core::SessionEntity
    Playing,
    /// One-frame pass between tearing the level down and spawning it again.
    Restarting,
}
