//! Clones domain: cancellable one-shot delays for ending stuns.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy)]
struct PendingResume {
    entity: Entity,
    remaining: f32,
}

/// Host-driven timers that fire once per clone. At most one entry per clone.
#[derive(Debug, Default)]
pub struct StunSchedule {
    pending: Vec<PendingResume>,
}

impl StunSchedule {
    /// Returns false, leaving the existing entry untouched, if `clone` already
    /// has a resume pending.
    pub fn schedule(&mut self, clone: Entity, duration: f32) -> bool {
        if self.is_pending(clone) {
            return false;
        }
        self.pending.push(PendingResume {
            entity: clone,
            remaining: duration.max(0.0),
        });
        true
    }

    pub fn cancel(&mut self, clone: Entity) -> bool {
        let before = self.pending.len();
        self.pending.retain(|entry| entry.entity != clone);
        self.pending.len() != before
    }

    pub fn is_pending(&self, clone: Entity) -> bool {
        self.pending.iter().any(|entry| entry.entity == clone)
    }

    pub fn remaining(&self, clone: Entity) -> Option<f32> {
        self.pending
            .iter()
            .find(|entry| entry.entity == clone)
            .map(|entry| entry.remaining)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance every timer by `dt`; returns the clones whose delay ran out,
    /// in the order they were scheduled. Fired entries are removed.
    pub fn advance(&mut self, dt: f32) -> Vec<Entity> {
        let mut fired = Vec::new();
        self.pending.retain_mut(|entry| {
            entry.remaining -= dt;
            if entry.remaining <= 0.0 {
                fired.push(entry.entity);
                false
            } else {
                true
            }
        });
        fired
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
