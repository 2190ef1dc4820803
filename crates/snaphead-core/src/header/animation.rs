//! L3 Molecular Layer: Base offset animator
//!
//! Owns at most one live animation. Starting a new one always cancels the
//! previous handle first, so the base offset never has two writers.

use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// A running base offset animation
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    /// Animation start time
    start: Instant,
    /// Base offset at start
    from: f64,
    /// Base offset to finish on
    to: f64,
    duration: Duration,
    easing: EasingType,
}

impl AnimationHandle {
    #[inline]
    pub fn from(&self) -> f64 {
        self.from
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.to
    }

    #[inline]
    pub fn start(&self) -> Instant {
        self.start
    }

    /// Interpolated base offset at `now`; exactly `to` once complete.
    pub fn sample(&self, now: Instant) -> f64 {
        if is_complete(self.start, now, self.duration) {
            self.to
        } else {
            let t = self.easing.apply(progress(self.start, now, self.duration));
            lerp(self.from, self.to, t)
        }
    }

    pub fn is_complete(&self, now: Instant) -> bool {
        is_complete(self.start, now, self.duration)
    }
}

#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    handle: Option<AnimationHandle>,
    duration: Duration,
    easing: EasingType,
}

impl OffsetAnimator {
    pub fn new(duration: Duration, easing: EasingType) -> Self {
        Self {
            handle: None,
            duration,
            easing,
        }
    }

    /// Start animating from `from` to `target`, replacing any live animation.
    pub fn animate_to(&mut self, from: f64, target: f64, now: Instant) -> &AnimationHandle {
        self.cancel();
        tracing::debug!(
            from,
            to = target,
            duration_ms = self.duration.as_millis() as u64,
            "Starting header animation"
        );
        self.handle.insert(AnimationHandle {
            start: now,
            from,
            to: target,
            duration: self.duration,
            easing: self.easing,
        })
    }

    /// Stop the live animation where it is. Returns whether one was running.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                tracing::debug!(to = handle.to, "Cancelled header animation");
                true
            }
            None => false,
        }
    }

    /// Advance to `now` and return the base offset the animation has reached.
    ///
    /// The handle is released on the sample that reaches the target.
    pub fn advance(&mut self, now: Instant) -> Option<f64> {
        let handle = self.handle.as_ref()?;
        let value = handle.sample(now);
        if handle.is_complete(now) {
            self.handle = None;
        }
        Some(value)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn handle(&self) -> Option<&AnimationHandle> {
        self.handle.as_ref()
    }

    pub fn set_timing(&mut self, duration: Duration, easing: EasingType) {
        self.duration = duration;
        self.easing = easing;
    }
}
