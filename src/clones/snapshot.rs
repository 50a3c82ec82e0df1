//! Clones domain: sampled actor state and the poses built from it.

use bevy::prelude::*;

use crate::movement::Facing;
use crate::sprites::AnimationTag;

/// Live actor state handed to the recorder every fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    pub position: Vec2,
    pub rotation: Quat,
    pub velocity: Vec2,
    pub animation: AnimationTag,
    pub facing: Facing,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            rotation: Quat::IDENTITY,
            velocity: Vec2::ZERO,
            animation: AnimationTag::Idle,
            facing: Facing::Right,
        }
    }
}

/// One sampled instant of a recorded actor. Read-only once captured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    state: ActorState,
    timestamp: f32,
}

impl Snapshot {
    pub fn capture(state: &ActorState, timestamp: f32) -> Self {
        Self {
            state: *state,
            timestamp,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn rotation(&self) -> Quat {
        self.state.rotation
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn animation(&self) -> AnimationTag {
        self.state.animation
    }

    pub fn facing(&self) -> Facing {
        self.state.facing
    }

    /// Seconds on the host clock when this sample was taken.
    pub fn timestamp(&self) -> f32 {
        self.timestamp
    }

    /// The exact pose this snapshot describes.
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.state.position,
            rotation: self.state.rotation,
            velocity: self.state.velocity,
            animation: self.state.animation,
            facing: self.state.facing,
        }
    }
}

/// Pose applied to a driven actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec2,
    pub rotation: Quat,
    pub velocity: Vec2,
    pub animation: AnimationTag,
    pub facing: Facing,
}

impl Pose {
    /// Blend between two snapshots. Position and velocity are lerped and
    /// rotation slerped; facing and animation stay on `from`.
    pub fn between(from: &Snapshot, to: &Snapshot, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return from.pose();
        }

        Self {
            position: from.position().lerp(to.position(), t),
            rotation: from.rotation().slerp(to.rotation(), t),
            velocity: from.velocity().lerp(to.velocity(), t),
            animation: from.animation(),
            facing: from.facing(),
        }
    }
}
