//! Clones domain: components for recording actors and replaying clones.

use bevy::prelude::*;

use crate::clones::playback::{PlaybackEngine, PoseSink};
use crate::clones::recorder::{Recorder, RecorderSettings};
use crate::effects::GhostTrail;
use crate::movement::Facing;
use crate::sprites::{AnimationController, AnimationTag, apply_facing};

/// Recorder attached to the actor that can be cloned (the player).
#[derive(Component, Debug, Default)]
pub struct CloneRecorder {
    pub recorder: Recorder,
}

impl CloneRecorder {
    pub fn new(settings: RecorderSettings) -> Self {
        Self {
            recorder: Recorder::new(settings),
        }
    }
}

/// A clone replaying a recording. Owns its engine exclusively.
#[derive(Component, Debug)]
pub struct CloneActor {
    pub engine: PlaybackEngine,
}

/// Velocity replayed from the recording. Clones are moved by pose, so this
/// is kept out of the physics body.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ReplayVelocity(pub Vec2);

/// Writes engine poses into a clone's components.
pub struct ClonePoseSink<'a> {
    pub transform: &'a mut Transform,
    pub velocity: &'a mut ReplayVelocity,
    pub animation: &'a mut AnimationController,
    pub sprite: &'a mut Sprite,
    pub ghost: &'a mut GhostTrail,
}

impl PoseSink for ClonePoseSink<'_> {
    fn set_transform(&mut self, position: Vec2, rotation: Quat) {
        self.transform.translation = position.extend(self.transform.translation.z);
        self.transform.rotation = rotation;
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn set_animation(&mut self, tag: AnimationTag) {
        self.animation.set_state(tag);
    }

    fn set_facing(&mut self, facing: Facing) {
        apply_facing(self.sprite, facing);
    }

    fn set_suspended(&mut self, suspended: bool) {
        self.animation.paused = suspended;
        self.ghost.set_suspended(suspended);
    }
}
