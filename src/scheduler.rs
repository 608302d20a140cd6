// ⏱️ One-shot deferred callbacks
//
// Each timer kind has at most one pending deadline. Scheduling a kind that is
// already pending replaces the old deadline, so an earlier request can never
// fire after a newer one. Time is always passed in by the caller.

use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimerKind {
    /// Moves the progress bar from its initial to its target value
    ProgressReveal,

    /// Hides the naming alert
    AlertHide,
}

impl TimerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerKind::ProgressReveal => "progress-reveal",
            TimerKind::AlertHide => "alert-hide",
        }
    }
}

#[derive(Debug, Default)]
pub struct Scheduler {
    pending: HashMap<TimerKind, Instant>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `kind` to fire at `at`, replacing any pending deadline.
    /// Returns true if a pending timer was replaced.
    pub fn schedule(&mut self, kind: TimerKind, at: Instant) -> bool {
        let replaced = self.pending.insert(kind, at).is_some();
        tracing::trace!(timer = kind.as_str(), replaced, "timer scheduled");
        replaced
    }

    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.pending.remove(&kind).is_some()
    }

    /// Drop every pending timer, returning how many were cancelled
    pub fn cancel_all(&mut self) -> usize {
        let count = self.pending.len();
        self.pending.clear();
        count
    }

    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.pending.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().min().copied()
    }

    /// Remove and return every timer due at `now`, earliest deadline first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerKind> {
        let mut due: Vec<(Instant, TimerKind)> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(kind, at)| (*at, *kind))
            .collect();

        due.sort_by_key(|(at, _)| *at);

        for (_, kind) in &due {
            self.pending.remove(kind);
        }

        due.into_iter().map(|(_, kind)| kind).collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
