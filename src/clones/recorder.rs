//! Clones domain: fixed-cadence sampling of an actor into a recording.

use std::mem;

use bevy::prelude::*;

use crate::clones::error::CloneError;
use crate::clones::snapshot::{ActorState, Snapshot};

/// 50 samples per second.
pub const DEFAULT_SAMPLING_INTERVAL: f32 = 0.02;

/// Slack for ticks that land on the sampling cadence but drift by float rounding.
const SAMPLE_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecorderSettings {
    pub sampling_interval: f32,
    pub max_duration: f32,
}

impl Default for RecorderSettings {
    fn default() -> Self {
        Self {
            sampling_interval: DEFAULT_SAMPLING_INTERVAL,
            max_duration: 3.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The host toggled recording off.
    Manual,
    /// The session reached its maximum duration.
    DurationElapsed,
}

/// What a finished session produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingOutcome {
    /// Stopped before the first sample; nothing to play back.
    Empty,
    Captured(Vec<Snapshot>),
}

impl RecordingOutcome {
    fn from_snapshots(snapshots: Vec<Snapshot>) -> Self {
        if snapshots.is_empty() {
            RecordingOutcome::Empty
        } else {
            RecordingOutcome::Captured(snapshots)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            RecordingOutcome::Empty => 0,
            RecordingOutcome::Captured(snapshots) => snapshots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RecordingOutcome::Empty)
    }

    pub fn into_snapshots(self) -> Option<Vec<Snapshot>> {
        match self {
            RecordingOutcome::Empty => None,
            RecordingOutcome::Captured(snapshots) => Some(snapshots),
        }
    }
}

/// A session that ended, by timeout or by hand.
#[derive(Debug, Clone, PartialEq)]
pub struct FinishedRecording {
    pub reason: StopReason,
    pub outcome: RecordingOutcome,
}

/// Samples actor state into an append-only snapshot sequence while armed.
///
/// Samples are due on a grid of `sampling_interval` steps anchored at the
/// first sample, and each is taken on the first tick at or past its slot.
/// Host ticks that do not divide the interval still yield one sample per slot.
#[derive(Debug, Default)]
pub struct Recorder {
    settings: RecorderSettings,
    armed: bool,
    elapsed: f32,
    last_tick: Option<f32>,
    /// Timestamp of the first sample and the index of the next due slot.
    grid: Option<(f32, u32)>,
    snapshots: Vec<Snapshot>,
}

impl Recorder {
    pub fn new(settings: RecorderSettings) -> Self {
        Self {
            settings,
            ..default()
        }
    }

    pub fn settings(&self) -> RecorderSettings {
        self.settings
    }

    pub fn is_recording(&self) -> bool {
        self.armed
    }

    /// Seconds of host time accumulated since `start`.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn sample_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Fraction of the maximum duration already recorded.
    pub fn progress(&self) -> f32 {
        if self.settings.max_duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.settings.max_duration).clamp(0.0, 1.0)
    }

    /// Arm a new session, discarding whatever the last one left behind.
    pub fn start(&mut self) -> Result<(), CloneError> {
        if self.armed {
            return Err(CloneError::AlreadyRecording);
        }

        self.snapshots.clear();
        self.elapsed = 0.0;
        self.last_tick = None;
        self.grid = None;
        self.armed = true;
        Ok(())
    }

    /// Drive the session for one fixed step. Returns the finished recording
    /// once the maximum duration has been reached.
    pub fn tick(&mut self, state: &ActorState, now: f32) -> Option<FinishedRecording> {
        if !self.armed {
            return None;
        }

        if let Some(last) = self.last_tick {
            self.elapsed += (now - last).max(0.0);
        }
        self.last_tick = Some(now);

        if self.elapsed >= self.settings.max_duration {
            debug!(
                "Recording reached {:.2}s with {} samples",
                self.elapsed,
                self.snapshots.len()
            );
            return Some(FinishedRecording {
                reason: StopReason::DurationElapsed,
                outcome: self.finish(),
            });
        }

        let interval = self.settings.sampling_interval;
        let due = match self.grid {
            None => true,
            Some((origin, next)) => now + SAMPLE_TOLERANCE >= origin + next as f32 * interval,
        };
        if due {
            let origin = self.grid.map_or(now, |(origin, _)| origin);
            // Slots missed during a long tick are skipped, not replayed
            let slot = if interval > 0.0 {
                ((now + SAMPLE_TOLERANCE - origin) / interval).floor().max(0.0) as u32
            } else {
                0
            };
            self.grid = Some((origin, slot + 1));
            self.snapshots.push(Snapshot::capture(state, now));
        }

        None
    }

    /// Disarm and hand over whatever was captured.
    pub fn stop(&mut self) -> FinishedRecording {
        FinishedRecording {
            reason: StopReason::Manual,
            outcome: self.finish(),
        }
    }

    fn finish(&mut self) -> RecordingOutcome {
        self.armed = false;
        self.elapsed = 0.0;
        self.last_tick = None;
        self.grid = None;
        RecordingOutcome::from_snapshots(mem::take(&mut self.snapshots))
    }
}
