//! L4 Atomic Layer: Bounded collapse accumulator
//!
//! Integrates scroll deltas (and base offset changes) into a single value
//! that is re-clamped to `[0, header height]` after every update, so the
//! header starts sliding back in the moment the user reverses direction.

use super::height::HeaderHeight;

/// Last observed absolute scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub last_scroll_y: f64,
}

#[derive(Debug, Clone)]
pub struct ClampAccumulator {
    scroll: ScrollState,
    progress: f64,
    upper: f64,
}

impl ClampAccumulator {
    pub fn new(height: HeaderHeight) -> Self {
        Self {
            scroll: ScrollState::default(),
            progress: 0.0,
            upper: height.get(),
        }
    }

    /// Feed a new absolute scroll position and return the updated progress.
    ///
    /// Positions above the top of the content (overscroll bounce) count as
    /// zero, so bouncing back from a pull at the top never hides the header.
    pub fn update(&mut self, new_scroll_y: f64) -> f64 {
        if !new_scroll_y.is_finite() {
            tracing::trace!(new_scroll_y, "Ignoring non-finite scroll position");
            return self.progress;
        }
        let delta = new_scroll_y.max(0.0) - self.scroll.last_scroll_y.max(0.0);
        self.scroll.last_scroll_y = new_scroll_y;
        self.shift(delta)
    }

    /// Apply a change of the animated base offset.
    pub fn shift(&mut self, delta: f64) -> f64 {
        if delta.is_finite() {
            self.progress = (self.progress + delta).clamp(0.0, self.upper);
        }
        self.progress
    }

    /// Recompute the range for a new header height, keeping the scroll state.
    pub fn set_upper(&mut self, height: HeaderHeight) {
        self.upper = height.get();
        self.progress = self.progress.clamp(0.0, self.upper);
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.scroll.last_scroll_y
    }
}
