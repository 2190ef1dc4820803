//! L4 Atomic Layer: Cached base offset
//!
//! Snap targets are computed relative to this value (`base ± height`), so
//! repeated collapse/expand cycles compose instead of resetting to zero.

#[derive(Debug, Clone, Copy, Default)]
pub struct OffsetTracker {
    current: f64,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new base offset and return the change since the last one.
    pub fn observe(&mut self, new_offset: f64) -> f64 {
        let delta = new_offset - self.current;
        self.current = new_offset;
        delta
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }
}
