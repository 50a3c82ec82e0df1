//! Content domain: tuning loaded from RON data files.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{CloneTuning, GhostTuning};
pub use loader::{
    CLONE_TUNING_FILE, CONTENT_DIR, ContentLoadError, load_clone_tuning, parse_single,
};
pub use validation::{ValidationError, validate_tuning};

use std::path::Path;

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CloneTuning>()
            .register_type::<GhostTuning>()
            .init_resource::<CloneTuning>()
            .add_systems(PreStartup, load_content);
    }
}

/// Replace the default tuning with the data file, keeping defaults when the
/// file is missing, malformed or out of range.
fn load_content(mut commands: Commands) {
    let tuning = match load_clone_tuning(Path::new(CONTENT_DIR)) {
        Ok(tuning) => tuning,
        Err(err) => {
            warn!("{}; using default clone tuning", err);
            return;
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            warn!("Clone tuning: {}", error);
        }
        warn!(
            "Clone tuning has {} invalid values; using defaults",
            errors.len()
        );
        return;
    }

    info!(
        "Loaded clone tuning: record {}s, speed {}, {} clones max",
        tuning.record_duration, tuning.playback_speed, tuning.max_active_clones
    );
    commands.insert_resource(tuning);
}
