// SPDX-License-Identifier: MPL-2.0
//! Cancellable deadlines keyed by view identity.

use std::collections::HashMap;
use std::time::Instant;

use crate::domain::container::ViewId;

/// Pending deadlines, at most one per view.
///
/// Deadlines never fire on their own: the owner polls
/// [`take_due`](Self::take_due) from its tick and uses
/// [`next_deadline`](Self::next_deadline) to decide when to wake up.
#[derive(Debug, Default, Clone)]
pub struct DismissScheduler {
    deadlines: HashMap<ViewId, Instant>,
}

impl DismissScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` at `at`, replacing any earlier deadline for it.
    pub fn schedule(&mut self, id: ViewId, at: Instant) {
        self.deadlines.insert(id, at);
    }

    /// Cancels the deadline for `id`. Returns `true` if one was pending.
    pub fn cancel(&mut self, id: ViewId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    #[must_use]
    pub fn contains(&self, id: ViewId) -> bool {
        self.deadlines.contains_key(&id)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Removes and returns every id due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ViewId> {
        let mut due: Vec<(Instant, ViewId)> = self
            .deadlines
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(id, at)| (*at, *id))
            .collect();
        due.sort();
        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }

    pub fn clear(&mut self) {
        self.deadlines.clear();
    }
}
