//! Clones domain: messages for recording and clone lifecycle.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::clones::recorder::{RecordingOutcome, StopReason};

/// Fired when an actor starts recording
#[derive(Debug)]
pub struct RecordingStarted {
    pub actor: Entity,
}

impl Message for RecordingStarted {}

/// Fired when a recording ends, by timeout or by toggling it off
#[derive(Debug)]
pub struct RecordingFinished {
    pub actor: Entity,
    pub reason: StopReason,
    pub outcome: RecordingOutcome,
}

impl Message for RecordingFinished {}
