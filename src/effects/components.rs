//! Effects domain: ghost trail emitter and the afterimages it leaves.

use bevy::prelude::*;

use crate::content::GhostTuning;

/// Leaves fading copies of an actor's sprite behind it while emitting.
#[derive(Component, Debug, Clone)]
pub struct GhostTrail {
    pub spawn_interval: f32,
    pub lifetime: f32,
    pub alpha: f32,
    active: bool,
    suspended: bool,
    timer: f32,
}

impl GhostTrail {
    pub fn new(tuning: &GhostTuning) -> Self {
        Self {
            spawn_interval: tuning.spawn_interval,
            lifetime: tuning.lifetime,
            alpha: tuning.alpha,
            active: false,
            suspended: false,
            timer: 0.0,
        }
    }

    /// Begin emitting; the first afterimage appears on the next tick.
    pub fn start(&mut self) {
        self.active = true;
        self.timer = 0.0;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    /// A suspended trail keeps its on/off state and picks up where it left.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_emitting(&self) -> bool {
        self.active && !self.suspended
    }

    /// Advance the emitter; true when an afterimage should be spawned now.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_emitting() {
            return false;
        }

        if self.timer <= 0.0 {
            self.timer = self.spawn_interval;
            true
        } else {
            self.timer -= dt;
            false
        }
    }
}

/// A single fading copy of an actor sprite.
#[derive(Component, Debug, Clone, Copy)]
pub struct Afterimage {
    pub age: f32,
    pub lifetime: f32,
    pub alpha: f32,
}

impl Afterimage {
    pub fn new(lifetime: f32, alpha: f32) -> Self {
        Self {
            age: 0.0,
            lifetime,
            alpha,
        }
    }

    /// Opacity fading linearly from `alpha` to zero over the lifetime.
    pub fn current_alpha(&self) -> f32 {
        if self.lifetime <= 0.0 {
            return 0.0;
        }
        let remaining = 1.0 - (self.age / self.lifetime).clamp(0.0, 1.0);
        remaining * self.alpha
    }

    pub fn expired(&self) -> bool {
        self.age >= self.lifetime
    }
}
