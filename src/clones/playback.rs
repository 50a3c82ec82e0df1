//! Clones domain: ping-pong playback of a finished recording.
//!
//! A [`PlaybackEngine`] owns one recording and walks a cursor through it,
//! forward to the end and back to the start, forever. Each driven frame the
//! pose at the cursor is interpolated from the two bracketing snapshots and
//! pushed into a [`PoseSink`] supplied by the host.

use bevy::prelude::*;

use crate::clones::error::CloneError;
use crate::clones::recorder::DEFAULT_SAMPLING_INTERVAL;
use crate::clones::snapshot::{Pose, Snapshot};
use crate::movement::Facing;
use crate::sprites::AnimationTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No recording loaded.
    #[default]
    Idle,
    PlayingForward,
    PlayingBackward,
    /// Stunned: pose held, cursor untouched.
    Frozen,
}

/// Where the engine writes the pose of the actor it drives.
pub trait PoseSink {
    fn set_transform(&mut self, position: Vec2, rotation: Quat);
    fn set_velocity(&mut self, velocity: Vec2);
    fn set_animation(&mut self, tag: AnimationTag);
    fn set_facing(&mut self, facing: Facing);
    /// Pause or resume animation and visual effects tied to playback.
    fn set_suspended(&mut self, suspended: bool);

    fn apply_pose(&mut self, pose: &Pose) {
        self.set_transform(pose.position, pose.rotation);
        self.set_facing(pose.facing);
        self.set_animation(pose.animation);
        self.set_velocity(pose.velocity);
    }
}

#[derive(Debug, Clone, Copy)]
struct FrozenPlayback {
    resume: PlaybackState,
    pose: Pose,
    duration: f32,
}

#[derive(Debug)]
pub struct PlaybackEngine {
    snapshots: Vec<Snapshot>,
    state: PlaybackState,
    cursor: f32,
    speed: f32,
    total_duration: f32,
    sampling_interval: f32,
    current_pose: Option<Pose>,
    frozen: Option<FrozenPlayback>,
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLING_INTERVAL)
    }
}

impl PlaybackEngine {
    /// `sampling_interval` must match the recorder's; it backs the duration
    /// fallback for degenerate recordings.
    pub fn new(sampling_interval: f32) -> Self {
        Self {
            snapshots: Vec::new(),
            state: PlaybackState::Idle,
            cursor: 0.0,
            speed: 1.0,
            total_duration: 0.0,
            sampling_interval,
            current_pose: None,
            frozen: None,
        }
    }

    /// Load a recording and show its first pose right away.
    pub fn initialize(
        &mut self,
        snapshots: Vec<Snapshot>,
        speed: f32,
        sink: &mut impl PoseSink,
    ) -> Result<(), CloneError> {
        let Some(first) = snapshots.first().copied() else {
            return Err(CloneError::EmptyRecording);
        };

        self.total_duration = total_duration_of(&snapshots, self.sampling_interval);
        self.snapshots = snapshots;
        self.speed = speed.max(0.0);
        self.cursor = 0.0;
        self.frozen = None;
        self.state = PlaybackState::PlayingForward;

        let pose = first.pose();
        sink.apply_pose(&pose);
        self.current_pose = Some(pose);

        debug!(
            "Playback loaded {} snapshots at speed {}, total duration {:.3}s",
            self.snapshots.len(),
            self.speed,
            self.total_duration
        );
        Ok(())
    }

    /// Drive one frame. No-op while idle or frozen.
    pub fn advance(&mut self, dt: f32, sink: &mut impl PoseSink) {
        let step = dt * self.speed;
        match self.state {
            PlaybackState::Idle | PlaybackState::Frozen => return,
            _ if self.snapshots.len() == 1 => {
                let pose = self.snapshots[0].pose();
                sink.apply_pose(&pose);
                self.current_pose = Some(pose);
                return;
            }
            PlaybackState::PlayingForward => {
                self.cursor += step;
                if self.cursor >= self.total_duration {
                    self.cursor = self.total_duration;
                    self.state = PlaybackState::PlayingBackward;
                    debug!("Playback reached end, switching to backward");
                }
            }
            PlaybackState::PlayingBackward => {
                self.cursor -= step;
                if self.cursor <= 0.0 {
                    self.cursor = 0.0;
                    self.state = PlaybackState::PlayingForward;
                    debug!("Playback reached start, switching to forward");
                }
            }
        }

        let Some(pose) = self.pose_at(self.cursor) else {
            return;
        };
        sink.apply_pose(&pose);
        self.current_pose = Some(pose);
    }

    /// Interpolated pose at `cursor` seconds into the recording, `None` while
    /// no recording is loaded.
    pub fn pose_at(&self, cursor: f32) -> Option<Pose> {
        let first = self.snapshots.first()?;
        if self.snapshots.len() == 1 {
            return Some(first.pose());
        }

        let start = first.timestamp();
        let relative = |snapshot: &Snapshot| snapshot.timestamp() - start;

        // Last snapshot whose time is at or before the cursor, kept inside a valid pair
        let at_or_before = self
            .snapshots
            .partition_point(|snapshot| relative(snapshot) <= cursor);
        let index = at_or_before
            .saturating_sub(1)
            .min(self.snapshots.len() - 2);

        let from = &self.snapshots[index];
        let to = &self.snapshots[index + 1];
        let span = relative(to) - relative(from);
        let t = if span > 0.0 {
            ((cursor - relative(from)) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };

        Some(Pose::between(from, to, t))
    }

    /// Stun: hold the current pose until [`thaw`](Self::thaw). Returns false
    /// when already frozen or idle; a second freeze never changes the held pose.
    pub fn freeze(&mut self, duration: f32, sink: &mut impl PoseSink) -> bool {
        let resume = match self.state {
            PlaybackState::PlayingForward | PlaybackState::PlayingBackward => self.state,
            PlaybackState::Idle | PlaybackState::Frozen => return false,
        };

        let Some(pose) = self.current_pose.or_else(|| self.pose_at(self.cursor)) else {
            return false;
        };
        self.frozen = Some(FrozenPlayback {
            resume,
            pose,
            duration,
        });
        self.state = PlaybackState::Frozen;

        let held = Pose {
            velocity: Vec2::ZERO,
            ..pose
        };
        sink.apply_pose(&held);
        sink.set_suspended(true);
        true
    }

    /// End a stun, resuming the direction that was active before it.
    pub fn thaw(&mut self, sink: &mut impl PoseSink) -> bool {
        let Some(frozen) = self.frozen.take() else {
            return false;
        };

        self.state = frozen.resume;
        sink.set_suspended(false);
        true
    }

    /// Jump back to the first snapshot, playing forward. A frozen engine stays
    /// frozen and resumes from the start.
    pub fn restart(&mut self, sink: &mut impl PoseSink) {
        let Some(first) = self.snapshots.first().copied() else {
            return;
        };

        self.cursor = 0.0;
        let pose = first.pose();
        match self.frozen.as_mut() {
            Some(frozen) => {
                frozen.resume = PlaybackState::PlayingForward;
                frozen.pose = pose;
                sink.apply_pose(&Pose {
                    velocity: Vec2::ZERO,
                    ..pose
                });
            }
            None => {
                self.state = PlaybackState::PlayingForward;
                sink.apply_pose(&pose);
            }
        }
        self.current_pose = Some(pose);
    }

    /// Negative speeds clamp to zero.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.max(0.0);
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_frozen(&self) -> bool {
        self.state == PlaybackState::Frozen
    }

    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn total_duration(&self) -> f32 {
        self.total_duration
    }

    /// Cursor as a fraction of the recording, 0 when idle.
    pub fn progress(&self) -> f32 {
        if self.total_duration <= 0.0 {
            return 0.0;
        }
        self.cursor / self.total_duration
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Last pose pushed to the sink.
    pub fn current_pose(&self) -> Option<Pose> {
        self.current_pose
    }

    /// Pose captured when the current stun began.
    pub fn frozen_pose(&self) -> Option<Pose> {
        self.frozen.map(|frozen| frozen.pose)
    }

    /// Length of the current stun, if any.
    pub fn stun_duration(&self) -> Option<f32> {
        self.frozen.map(|frozen| frozen.duration)
    }
}

/// Span between first and last timestamps, never zero.
pub fn total_duration_of(snapshots: &[Snapshot], sampling_interval: f32) -> f32 {
    let (Some(first), Some(last)) = (snapshots.first(), snapshots.last()) else {
        return sampling_interval;
    };

    let mut total = last.timestamp() - first.timestamp();
    if total <= 0.0 {
        total = snapshots.len().saturating_sub(1) as f32 * sampling_interval;
    }
    if total <= 0.0 {
        total = sampling_interval;
    }
    total
}
