//! Data definitions for RON content files.
//!
//! These structs mirror assets/data/*.ron. Every field has a default so a
//! file only needs to name what it overrides.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::clones::RecorderSettings;

// ============================================================================
// Clone tuning (clone_tuning.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct CloneTuning {
    /// Longest a single recording may run, in seconds.
    pub record_duration: f32,
    /// Seconds between recorded samples.
    pub sampling_interval: f32,
    /// Playback rate multiplier applied to every new clone.
    pub playback_speed: f32,
    pub max_active_clones: usize,
    pub stun_duration: f32,
    /// Uniform scale of clone sprites and colliders.
    pub clone_scale: f32,
    /// Time the player stays hidden after a recording ends.
    pub respawn_delay: f32,
    /// Delay between pressing restart and the level reloading.
    pub restart_delay: f32,
    pub ghost: GhostTuning,
}

impl Default for CloneTuning {
    fn default() -> Self {
        Self {
            record_duration: 3.0,
            sampling_interval: 0.02,
            playback_speed: 0.75,
            max_active_clones: 2,
            stun_duration: 2.0,
            clone_scale: 1.5,
            respawn_delay: 0.1,
            restart_delay: 1.0,
            ghost: GhostTuning::default(),
        }
    }
}

impl CloneTuning {
    pub fn recorder_settings(&self) -> RecorderSettings {
        RecorderSettings {
            sampling_interval: self.sampling_interval,
            max_duration: self.record_duration,
        }
    }
}

// ============================================================================
// Ghost trail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct GhostTuning {
    /// Seconds between afterimages.
    pub spawn_interval: f32,
    /// Seconds an afterimage takes to fade out.
    pub lifetime: f32,
    /// Starting opacity of each afterimage.
    pub alpha: f32,
}

impl Default for GhostTuning {
    fn default() -> Self {
        Self {
            spawn_interval: 0.05,
            lifetime: 0.5,
            alpha: 0.5,
        }
    }
}
