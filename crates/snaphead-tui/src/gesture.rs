//! Synthetic drag/momentum lifecycle for terminal input
//!
//! Terminals deliver wheel notches and key presses, not touches. This module
//! groups bursts of scroll input into a drag: the first input begins it, a
//! quiet period of `release_ms` ends it, and if the burst was fast enough the
//! content keeps coasting with a per-tick decaying velocity until it settles.

use std::time::{Duration, Instant};

use snaphead_core::{ScrollEvent, UiConfig};

/// Velocity (rows per tick) below which coasting stops
const COAST_STOP_VELOCITY: f64 = 0.05;

/// Output of the synthesizer, in the order the host must apply it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureStep {
    /// Lifecycle event to forward to the header
    Lifecycle(ScrollEvent),
    /// Move the content by this many rows, then report the new position
    Coast(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GestureState {
    Idle,
    Dragging,
    Coasting,
}

#[derive(Debug, Clone)]
pub struct GestureSynth {
    state: GestureState,
    last_input: Option<Instant>,
    /// Smoothed rows per input while dragging, rows per tick while coasting
    velocity: f64,
    release_after: Duration,
    decay: f64,
    min_velocity: f64,
}

impl GestureSynth {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            state: GestureState::Idle,
            last_input: None,
            velocity: 0.0,
            release_after: Duration::from_millis(config.release_ms),
            decay: config.momentum_decay,
            min_velocity: config.momentum_min_velocity,
        }
    }

    /// Register user scroll input of `delta` rows.
    ///
    /// Returns the lifecycle events to forward before the host moves the
    /// content and reports the new position.
    pub fn input(&mut self, delta: f64, now: Instant) -> Vec<ScrollEvent> {
        let mut events = Vec::new();
        match self.state {
            GestureState::Dragging => {
                self.velocity = 0.5 * self.velocity + 0.5 * delta;
            }
            GestureState::Coasting => {
                // Catching the content mid-coast
                events.push(ScrollEvent::MomentumEnd);
                events.push(ScrollEvent::DragBegin);
                self.velocity = delta;
            }
            GestureState::Idle => {
                events.push(ScrollEvent::DragBegin);
                self.velocity = delta;
            }
        }
        self.state = GestureState::Dragging;
        self.last_input = Some(now);
        events
    }

    /// Advance the gesture by one frame.
    pub fn tick(&mut self, now: Instant) -> Vec<GestureStep> {
        match self.state {
            GestureState::Idle => Vec::new(),
            GestureState::Dragging => {
                let released = self
                    .last_input
                    .map_or(true, |at| now.saturating_duration_since(at) >= self.release_after);
                if !released {
                    return Vec::new();
                }
                let mut steps = vec![GestureStep::Lifecycle(ScrollEvent::DragEnd)];
                if self.velocity.abs() >= self.min_velocity {
                    tracing::trace!(velocity = self.velocity, "Drag released with momentum");
                    steps.push(GestureStep::Lifecycle(ScrollEvent::MomentumBegin));
                    self.state = GestureState::Coasting;
                } else {
                    self.state = GestureState::Idle;
                    self.velocity = 0.0;
                }
                steps
            }
            GestureState::Coasting => {
                self.velocity *= self.decay;
                if self.velocity.abs() < COAST_STOP_VELOCITY {
                    self.state = GestureState::Idle;
                    self.velocity = 0.0;
                    vec![GestureStep::Lifecycle(ScrollEvent::MomentumEnd)]
                } else {
                    vec![GestureStep::Coast(self.velocity)]
                }
            }
        }
    }

    /// Stop coasting immediately (the content hit an edge).
    pub fn halt(&mut self) -> Option<ScrollEvent> {
        if self.state == GestureState::Coasting {
            self.state = GestureState::Idle;
            self.velocity = 0.0;
            Some(ScrollEvent::MomentumEnd)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state != GestureState::Idle
    }
}
