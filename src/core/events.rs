//! Core domain: events for the level flow.

use bevy::ecs::message::Message;

/// Event asking for the level to restart
#[derive(Debug, Clone, Copy, Default)]
pub struct RestartRequested {
    /// Overrides the configured restart delay when set
    pub delay: Option<f32>,
}

impl Message for RestartRequested {}
