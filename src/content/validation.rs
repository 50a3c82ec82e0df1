//! Validation for tuning values that parse but cannot be played.

use std::fmt;

use super::data::CloneTuning;

/// A tuning field whose value is out of range.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $field:expr, $value:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                field: $field,
                value: $value,
                expected: "greater than zero",
            });
        }
    };
}

/// Helper macro for checking a value is zero or more
macro_rules! check_non_negative {
    ($errors:expr, $field:expr, $value:expr) => {
        if !($value >= 0.0) {
            $errors.push(ValidationError {
                field: $field,
                value: $value,
                expected: "zero or more",
            });
        }
    };
}

/// Validate loaded tuning. Returns a list of errors, empty if all values are usable.
pub fn validate_tuning(tuning: &CloneTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_positive!(errors, "record_duration", tuning.record_duration);
    check_positive!(errors, "sampling_interval", tuning.sampling_interval);
    check_positive!(errors, "playback_speed", tuning.playback_speed);
    check_positive!(errors, "clone_scale", tuning.clone_scale);
    check_non_negative!(errors, "stun_duration", tuning.stun_duration);
    check_non_negative!(errors, "respawn_delay", tuning.respawn_delay);
    check_non_negative!(errors, "restart_delay", tuning.restart_delay);

    if tuning.max_active_clones == 0 {
        errors.push(ValidationError {
            field: "max_active_clones",
            value: 0.0,
            expected: "at least one",
        });
    }

    if tuning.sampling_interval > tuning.record_duration {
        errors.push(ValidationError {
            field: "sampling_interval",
            value: tuning.sampling_interval,
            expected: "no longer than record_duration",
        });
    }

    check_positive!(errors, "ghost.spawn_interval", tuning.ghost.spawn_interval);
    check_non_negative!(errors, "ghost.lifetime", tuning.ghost.lifetime);
    if !(0.0..=1.0).contains(&tuning.ghost.alpha) {
        errors.push(ValidationError {
            field: "ghost.alpha",
            value: tuning.ghost.alpha,
            expected: "between 0 and 1",
        });
    }

    errors
}
