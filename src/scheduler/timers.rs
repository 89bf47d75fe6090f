// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed tasks ordered by deadline.

use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Pending tasks keyed by deadline.
///
/// Tasks with equal deadlines fire in the order they were scheduled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    by_deadline: BTreeMap<(Instant, TimerId), T>,
    deadlines: HashMap<TimerId, Instant>,
    next_id: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            by_deadline: BTreeMap::new(),
            deadlines: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parks `task` until `deadline`.
    pub fn schedule(&mut self, deadline: Instant, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.by_deadline.insert((deadline, id), task);
        self.deadlines.insert(id, deadline);
        id
    }

    /// Drops a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.deadlines.remove(&id) {
            Some(deadline) => self.by_deadline.remove(&(deadline, id)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest task whose deadline is at or before `now`,
    /// together with the deadline it was scheduled for.
    pub fn pop_due(&mut self, now: Instant) -> Option<(TimerId, Instant, T)> {
        let (&(deadline, id), _) = self.by_deadline.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&id);
        self.by_deadline
            .remove(&(deadline, id))
            .map(|task| (id, deadline, task))
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.by_deadline.keys().next().map(|(deadline, _)| *deadline)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
