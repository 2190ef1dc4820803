//! L3 Molecular Layer: Snap debounce timer
//!
//! Holds the single pending "evaluate snap after drag end" action.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
    delay: Duration,
}

impl DebounceTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            deadline: None,
            delay,
        }
    }

    /// Arm the timer to fire `delay` after `now`, replacing any pending one.
    pub fn arm(&mut self, now: Instant) -> Instant {
        let deadline = now + self.delay;
        if self.deadline.replace(deadline).is_some() {
            tracing::trace!("Re-armed pending snap timer");
        }
        deadline
    }

    /// Drop the pending action. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// If the timer is due at `now`, disarm it and return its deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<Instant> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.deadline.take(),
            _ => None,
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }
}
