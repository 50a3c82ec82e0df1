//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Replaying clones, solid for the player to stand on
    Clone,
}

#[derive(Component, Debug)]
pub struct Player;

/// Dash lifecycle: a dash runs for its duration, then cools down before the
/// next one is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Dashing { remaining: f32, direction: Facing },
    Cooldown { remaining: f32 },
}

/// What changed when the dash timers were advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    /// The dash finished and the cooldown started.
    Ended,
    /// The cooldown finished.
    Ready,
}

#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    pub facing: Facing,
    pub dash: DashPhase,
}

impl MovementState {
    pub fn is_dashing(&self) -> bool {
        matches!(self.dash, DashPhase::Dashing { .. })
    }

    /// Jumps only leave the ground, never the air or a dash.
    pub fn can_jump(&self) -> bool {
        self.on_ground && !self.is_dashing()
    }

    /// Dash the way the player faces. False while dashing or cooling down.
    pub fn try_start_dash(&mut self, duration: f32) -> bool {
        if self.dash != DashPhase::Ready {
            return false;
        }
        self.dash = DashPhase::Dashing {
            remaining: duration,
            direction: self.facing,
        };
        true
    }

    pub fn tick_dash(&mut self, dt: f32, cooldown: f32) -> Option<DashTransition> {
        match &mut self.dash {
            DashPhase::Ready => None,
            DashPhase::Dashing { remaining, .. } => {
                *remaining -= dt;
                if *remaining > 0.0 {
                    return None;
                }
                self.dash = DashPhase::Cooldown {
                    remaining: cooldown,
                };
                Some(DashTransition::Ended)
            }
            DashPhase::Cooldown { remaining } => {
                *remaining -= dt;
                if *remaining > 0.0 {
                    return None;
                }
                self.dash = DashPhase::Ready;
                Some(DashTransition::Ready)
            }
        }
    }

    /// Turn toward a horizontal input. Direction is locked during a dash.
    pub fn face_towards(&mut self, axis: f32) -> bool {
        if self.is_dashing() {
            return false;
        }
        let facing = if axis > 0.0 {
            Facing::Right
        } else if axis < 0.0 {
            Facing::Left
        } else {
            return false;
        };
        let changed = self.facing != facing;
        self.facing = facing;
        changed
    }

    /// Back to a fresh, right-facing player; ground contact is kept.
    pub fn reset(&mut self) {
        *self = Self {
            on_ground: self.on_ground,
            ..default()
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    /// +1 for right, -1 for left.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Where the player reappears after a recording ends.
#[derive(Resource, Debug, Clone, Copy)]
pub struct RespawnPoint(pub Vec2);

impl Default for RespawnPoint {
    fn default() -> Self {
        Self(Vec2::new(-300.0, -120.0))
    }
}

/// Player is hidden and non-colliding until the timer runs out.
#[derive(Component, Debug)]
pub struct Respawning {
    pub remaining: f32,
}

impl Respawning {
    pub fn new(delay: f32) -> Self {
        Self {
            remaining: delay.max(0.0),
        }
    }

    /// Counts the delay down; true once the player should reappear.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}
