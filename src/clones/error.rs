//! Clones domain: recoverable misuse errors.

use thiserror::Error;

/// Misuse of the recorder or playback engine. Never fatal to the frame loop.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CloneError {
    #[error("a recording is already in progress")]
    AlreadyRecording,
    #[error("cannot play back a recording with no snapshots")]
    EmptyRecording,
}
