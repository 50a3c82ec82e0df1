//! Switches domain: button and door state.

use bevy::prelude::*;

/// Edge a button crossed this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTransition {
    Pressed,
    Released,
}

/// A floor plate that stays down while at least one actor stands on it.
#[derive(Component, Debug)]
pub struct PressureButton {
    /// Area above the plate where actors count as pressing it.
    pub detection_size: Vec2,
    pressers: usize,
    pressed: bool,
}

impl PressureButton {
    pub fn new(detection_size: Vec2) -> Self {
        Self {
            detection_size,
            pressers: 0,
            pressed: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Actors counted on the plate at the last update.
    pub fn pressers(&self) -> usize {
        self.pressers
    }

    /// Record how many actors are on the plate now. Only the first actor to
    /// arrive and the last to leave produce a transition.
    pub fn update(&mut self, pressers: usize) -> Option<ButtonTransition> {
        self.pressers = pressers;
        match (pressers > 0, self.pressed) {
            (true, false) => {
                self.pressed = true;
                Some(ButtonTransition::Pressed)
            }
            (false, true) => {
                self.pressed = false;
                Some(ButtonTransition::Released)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoorTarget {
    #[default]
    Closed,
    Open,
}

/// A door that slides up while its button is held and back down once released.
#[derive(Component, Debug)]
pub struct Door {
    pub button: Entity,
    pub closed_y: f32,
    pub open_height: f32,
    pub open_speed: f32,
    pub close_speed: f32,
    pub target: DoorTarget,
}

impl Door {
    pub fn new(button: Entity, closed_y: f32) -> Self {
        Self {
            button,
            closed_y,
            open_height: 180.0,
            open_speed: 120.0,
            close_speed: 60.0,
            target: DoorTarget::Closed,
        }
    }

    pub fn target_y(&self) -> f32 {
        match self.target {
            DoorTarget::Open => self.closed_y + self.open_height,
            DoorTarget::Closed => self.closed_y,
        }
    }

    /// Height after moving towards the target for `dt` seconds. Never overshoots.
    pub fn step(&self, current_y: f32, dt: f32) -> f32 {
        let speed = match self.target {
            DoorTarget::Open => self.open_speed,
            DoorTarget::Closed => self.close_speed,
        };
        let target = self.target_y();
        let max_step = speed.max(0.0) * dt.max(0.0);
        let remaining = target - current_y;

        if remaining.abs() <= max_step {
            target
        } else {
            current_y + remaining.signum() * max_step
        }
    }
}
