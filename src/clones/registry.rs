//! Clones domain: the per-session registry of live clones.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::clones::playback::{PlaybackEngine, PoseSink};
use crate::clones::stun::StunSchedule;

/// Live clones of one play session, oldest first, plus their pending stun
/// resumes. Inserted when a session starts and removed when it ends; systems
/// receive it as a resource instead of looking it up globally.
#[derive(Resource, Debug)]
pub struct CloneRegistry {
    max_active: usize,
    active: VecDeque<Entity>,
    stuns: StunSchedule,
    spawned_total: u32,
}

impl CloneRegistry {
    pub fn new(max_active: usize) -> Self {
        Self {
            max_active: max_active.max(1),
            active: VecDeque::new(),
            stuns: StunSchedule::default(),
            spawned_total: 0,
        }
    }

    pub fn max_active(&self) -> usize {
        self.max_active
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn contains(&self, clone: Entity) -> bool {
        self.active.contains(&clone)
    }

    /// Live clones, oldest first.
    pub fn active(&self) -> impl Iterator<Item = Entity> + '_ {
        self.active.iter().copied()
    }

    pub fn spawned_total(&self) -> u32 {
        self.spawned_total
    }

    pub fn stuns(&self) -> &StunSchedule {
        &self.stuns
    }

    /// Evict the oldest clones until one more fits. The caller despawns the
    /// returned entities; their pending resumes are already cancelled.
    pub fn make_room(&mut self) -> Vec<Entity> {
        let mut evicted = Vec::new();
        while self.active.len() >= self.max_active {
            let Some(oldest) = self.active.pop_front() else {
                break;
            };
            self.stuns.cancel(oldest);
            evicted.push(oldest);
        }
        evicted
    }

    /// Track a newly spawned clone. Returns its 1-based spawn ordinal.
    pub fn register(&mut self, clone: Entity) -> u32 {
        if !self.contains(clone) {
            self.active.push_back(clone);
        }
        self.spawned_total += 1;
        self.spawned_total
    }

    /// Drop a clone that is gone, cancelling any resume still pending for it.
    pub fn forget(&mut self, clone: Entity) -> bool {
        self.stuns.cancel(clone);
        let before = self.active.len();
        self.active.retain(|&entity| entity != clone);
        self.active.len() != before
    }

    /// Forget every clone at session teardown.
    pub fn drain(&mut self) -> Vec<Entity> {
        self.stuns.clear();
        self.active.drain(..).collect()
    }

    /// Freeze a registered clone and schedule its resume. Ignored for unknown
    /// clones and for clones that are already stunned.
    pub fn stun(
        &mut self,
        clone: Entity,
        engine: &mut PlaybackEngine,
        duration: f32,
        sink: &mut impl PoseSink,
    ) -> bool {
        if !self.contains(clone) || self.stuns.is_pending(clone) {
            return false;
        }
        if !engine.freeze(duration, sink) {
            return false;
        }
        self.stuns.schedule(clone, duration)
    }

    /// Advance stun timers; returns clones whose stun just ended.
    pub fn advance_stuns(&mut self, dt: f32) -> Vec<Entity> {
        self.stuns.advance(dt)
    }
}
