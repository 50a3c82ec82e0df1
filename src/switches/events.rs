//! Switches domain: button messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the first actor steps onto a button
#[derive(Debug, Clone, Copy)]
pub struct ButtonPressed {
    pub button: Entity,
    pub pressers: usize,
}

impl Message for ButtonPressed {}

/// Fired when the last actor steps off a button
#[derive(Debug, Clone, Copy)]
pub struct ButtonReleased {
    pub button: Entity,
}

impl Message for ButtonReleased {}
