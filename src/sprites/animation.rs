//! Animation state machine and playback.
//!
//! Actors are plain colored quads, so an animation is a frame counter plus a
//! per-state squash and stretch applied to the sprite size.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementState, Player};

/// Animation states shared by the player and its recorded clones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationTag {
    #[default]
    Idle,
    Run,
    Jump,
    Dash,
}

impl AnimationTag {
    /// Picks the tag that matches the current locomotion state.
    pub fn from_motion(state: &MovementState, velocity: Vec2) -> Self {
        if state.is_dashing() {
            AnimationTag::Dash
        } else if !state.on_ground {
            AnimationTag::Jump
        } else if velocity.x.abs() > RUN_THRESHOLD {
            AnimationTag::Run
        } else {
            AnimationTag::Idle
        }
    }
}

/// Horizontal speed above which a grounded actor counts as running.
const RUN_THRESHOLD: f32 = 10.0;

/// Component for animation playback on an actor sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationTag,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationTag,
    /// Unscaled sprite size the squash is applied to.
    pub base_size: Vec2,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    /// Whether the animation should loop.
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
    /// Frozen actors keep their current frame.
    pub paused: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationTag::Idle,
            previous_state: AnimationTag::Idle,
            base_size: ACTOR_SIZE,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
            paused: false,
        }
    }
}

/// Sprite size of the player and, before scaling, its clones.
pub const ACTOR_SIZE: Vec2 = Vec2::new(24.0, 48.0);

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    pub fn set_state(&mut self, state: AnimationTag) {
        if self.state == state {
            return;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        // Dash is a one-shot, everything else loops
        self.looping = !matches!(state, AnimationTag::Dash);

        self.total_frames = match state {
            AnimationTag::Idle => 4,
            AnimationTag::Run => 6,
            AnimationTag::Jump => 2,
            AnimationTag::Dash => 3,
        };

        self.frame_duration = match state {
            AnimationTag::Dash => 0.06,
            AnimationTag::Run => 0.1,
            _ => 0.15,
        };
    }

    /// Advance frame timing by `dt` seconds. Returns true when a one-shot
    /// animation completes during this step.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.paused || self.finished {
            return false;
        }

        self.frame_timer += dt;
        if self.frame_timer < self.frame_duration {
            return false;
        }

        self.frame_timer -= self.frame_duration;
        self.current_frame += 1;

        if self.current_frame >= self.total_frames {
            if self.looping {
                self.current_frame = 0;
            } else {
                self.current_frame = self.total_frames - 1;
                self.finished = true;
                return true;
            }
        }
        false
    }

    /// Sprite size for the current state and frame.
    pub fn squashed_size(&self) -> Vec2 {
        let scale = match self.state {
            AnimationTag::Idle => {
                // Slow breathing on the second half of the cycle
                if self.current_frame >= self.total_frames / 2 {
                    Vec2::new(1.0, 0.97)
                } else {
                    Vec2::ONE
                }
            }
            AnimationTag::Run => {
                if self.current_frame % 2 == 1 {
                    Vec2::new(1.04, 0.94)
                } else {
                    Vec2::ONE
                }
            }
            AnimationTag::Jump => Vec2::new(0.9, 1.1),
            AnimationTag::Dash => Vec2::new(1.3, 0.8),
        };
        self.base_size * scale
    }
}

/// Derives the player's animation tag from its movement state.
pub fn animation_state_machine(
    mut query: Query<(&MovementState, &LinearVelocity, &mut AnimationController), With<Player>>,
) {
    for (state, velocity, mut controller) in &mut query {
        let tag = AnimationTag::from_motion(state, velocity.0);
        if controller.state != tag {
            debug!("Player animation {:?} -> {:?}", controller.state, tag);
        }
        controller.set_state(tag);
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(time: Res<Time>, mut query: Query<&mut AnimationController>) {
    let dt = time.delta_secs();
    for mut controller in &mut query {
        controller.tick(dt);
    }
}

/// Writes the current squash and stretch into the sprite size.
pub fn apply_animation_squash(mut query: Query<(&AnimationController, &mut Sprite)>) {
    for (controller, mut sprite) in &mut query {
        sprite.custom_size = Some(controller.squashed_size());
    }
}
