//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::movement::{DashPhase, MovementState};

/// Player locomotion numbers, in pixels and seconds.
#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    /// Horizontal speed; there is no acceleration ramp.
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub gravity: f32,
    pub dash_speed: f32,
    pub dash_duration: f32,
    /// Wait after a dash ends before the next one.
    pub dash_cooldown: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_velocity: 680.0,
            gravity: 1800.0,
            dash_speed: 900.0,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
        }
    }
}

impl MovementTuning {
    /// Apex height of a standing jump, v² / 2g.
    pub fn single_jump_height(&self) -> f32 {
        self.jump_velocity.powi(2) / (2.0 * self.gravity)
    }

    /// Velocity for this step. A dash overrides everything and holds the
    /// player level; otherwise input sets the horizontal speed outright.
    pub fn locomotion_velocity(&self, state: &MovementState, axis: f32, current: Vec2) -> Vec2 {
        match state.dash {
            DashPhase::Dashing { direction, .. } => {
                Vec2::new(direction.sign() * self.dash_speed, 0.0)
            }
            _ => Vec2::new(axis.clamp(-1.0, 1.0) * self.move_speed, current.y),
        }
    }
}

/// Keyboard state sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// -1 left, +1 right, 0 when neither or both are held.
    pub axis: f32,
    pub jump: bool,
    pub dash: bool,
}
