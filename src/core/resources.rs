//! Core domain: components and resources shared by every play session.

use bevy::prelude::*;

/// Marks an entity owned by the current play session. Everything marked is
/// despawned when the session ends.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SessionEntity;

/// A level restart counting down. Present at most once.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PendingRestart {
    remaining: f32,
}

impl PendingRestart {
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
        }
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Count down; true once the delay has run out.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
