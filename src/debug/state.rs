//! Debug domain: state for clone debugging tools.

use bevy::prelude::*;

/// Smallest playback speed the speed hotkeys will set.
pub const MIN_DEBUG_SPEED: f32 = 0.25;
pub const MAX_DEBUG_SPEED: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.25;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether recorded clone paths are drawn
    pub draw_paths: bool,
    /// Last status message and the seconds it stays current
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Log a status message and keep it current for a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        let message = message.into();
        info!("[debug] {}", message);
        self.status_message = Some((message, duration));
    }
}

/// Step a playback speed up or down, staying inside the debug range.
pub fn stepped_speed(current: f32, steps: i32) -> f32 {
    (current + steps as f32 * SPEED_STEP).clamp(MIN_DEBUG_SPEED, MAX_DEBUG_SPEED)
}
