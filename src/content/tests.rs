//! Content domain: tests for tuning parsing and validation.

use std::path::Path;

use super::*;

fn parse(contents: &str) -> Result<CloneTuning, ContentLoadError> {
    parse_single(contents, Path::new("clone_tuning.ron"))
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_empty_struct_uses_defaults() {
    let tuning = parse("()").expect("empty struct parses");
    assert_eq!(tuning, CloneTuning::default());
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let tuning = parse(
        "(
            record_duration: 5.0,
            max_active_clones: 3,
            ghost: (alpha: 0.25),
        )",
    )
    .expect("partial tuning parses");

    assert_eq!(tuning.record_duration, 5.0);
    assert_eq!(tuning.max_active_clones, 3);
    assert_eq!(tuning.ghost.alpha, 0.25);
    assert_eq!(tuning.ghost.lifetime, GhostTuning::default().lifetime);
    assert_eq!(tuning.playback_speed, 0.75);
}

#[test]
fn test_malformed_file_reports_parse_error_with_path() {
    let err = parse("(record_duration: \"long\")").expect_err("string is not a float");
    assert!(matches!(err, ContentLoadError::Parse { .. }));
    assert_eq!(err.file(), Path::new("clone_tuning.ron"));
    assert!(err.to_string().contains("clone_tuning.ron"));
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = load_clone_tuning(Path::new("does/not/exist")).expect_err("no such directory");
    assert!(matches!(err, ContentLoadError::Io { .. }));
    assert!(err.file().ends_with(CLONE_TUNING_FILE));
}

#[test]
fn test_recorder_settings_follow_tuning() {
    let tuning = CloneTuning {
        record_duration: 4.0,
        sampling_interval: 0.05,
        ..Default::default()
    };
    let settings = tuning.recorder_settings();
    assert_eq!(settings.max_duration, 4.0);
    assert_eq!(settings.sampling_interval, 0.05);
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONTENT_DIR);
    let tuning = load_clone_tuning(&path).expect("shipped tuning loads");
    assert!(validate_tuning(&tuning).is_empty());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_default_tuning_is_valid() {
    assert!(validate_tuning(&CloneTuning::default()).is_empty());
}

#[test]
fn test_validation_flags_each_bad_field() {
    let tuning = CloneTuning {
        sampling_interval: 0.0,
        max_active_clones: 0,
        stun_duration: -1.0,
        ghost: GhostTuning {
            alpha: 1.5,
            ..Default::default()
        },
        ..Default::default()
    };

    let fields: Vec<_> = validate_tuning(&tuning)
        .into_iter()
        .map(|error| error.field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "sampling_interval",
            "stun_duration",
            "max_active_clones",
            "ghost.alpha"
        ]
    );
}

#[test]
fn test_nan_is_rejected() {
    let tuning = CloneTuning {
        playback_speed: f32::NAN,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "playback_speed");
}

#[test]
fn test_sampling_longer_than_recording_is_rejected() {
    let tuning = CloneTuning {
        record_duration: 0.01,
        sampling_interval: 0.02,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].expected, "no longer than record_duration");
}
