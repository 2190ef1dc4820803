//! L2 Organism Layer: Collapsible header state machine
//!
//! `CollapsibleHeader` is the single owner of all header state. Hosts feed it
//! scroll events through [`CollapsibleHeader::handle`] and call
//! [`CollapsibleHeader::tick`] every frame; both return the [`HeaderFrame`]
//! to apply to the header view.
//!
//! Event handling:
//! - `DragBegin` / `MomentumBegin` cancel the running animation and any
//!   pending snap, so a new gesture never fights a stale writer.
//! - `Scroll` always feeds the clamp accumulator, whatever the phase.
//! - `DragEnd` arms the debounce timer; when it fires the snap is decided
//!   and animated.
//! - `MomentumEnd` decides and animates immediately.
//!
//! Every call first advances timers and the animation up to `now`, so
//! time-based work is observed in chronological order relative to events.

use std::time::Instant;

use super::animation::{AnimationHandle, OffsetAnimator};
use super::clamp::ClampAccumulator;
use super::debounce::DebounceTimer;
use super::height::HeaderHeight;
use super::offset::OffsetTracker;
use super::snap::decide_with_threshold;
use super::style::{project, HeaderStyle};
use crate::config::{AppConfig, SnapConfig};

/// Input from the scrollable view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollEvent {
    /// Absolute content offset
    Scroll { y: f64 },
    DragBegin,
    /// The finger lifted; momentum may or may not follow
    DragEnd,
    MomentumBegin,
    MomentumEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionPhase {
    #[default]
    Idle,
    Dragging,
    Momentum,
    Animating,
}

/// Everything the host needs to draw the header for one update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame {
    pub style: HeaderStyle,
    /// Space to reserve above the body so it starts below the resting header
    pub content_inset: f64,
    pub phase: InteractionPhase,
}

#[derive(Debug)]
pub struct CollapsibleHeader {
    height: HeaderHeight,
    collapse_threshold: f64,
    clamp: ClampAccumulator,
    offset: OffsetTracker,
    animator: OffsetAnimator,
    debounce: DebounceTimer,
    phase: InteractionPhase,
    disposed: bool,
}

impl CollapsibleHeader {
    pub fn new(height: HeaderHeight, snap: &SnapConfig) -> Self {
        Self {
            height,
            collapse_threshold: snap.collapse_threshold,
            clamp: ClampAccumulator::new(height),
            offset: OffsetTracker::new(),
            animator: OffsetAnimator::new(snap.animation_duration(), snap.easing),
            debounce: DebounceTimer::new(snap.debounce()),
            phase: InteractionPhase::Idle,
            disposed: false,
        }
    }

    pub fn from_config(config: &AppConfig) -> crate::Result<Self> {
        Ok(Self::new(config.header.height()?, &config.snap))
    }

    /// Apply one scroll event and return the resulting frame.
    pub fn handle(&mut self, event: ScrollEvent, now: Instant) -> HeaderFrame {
        if self.disposed {
            tracing::trace!(?event, "Ignoring event on disposed header");
            return self.frame();
        }
        self.advance(now);

        match event {
            ScrollEvent::Scroll { y } => {
                self.clamp.update(y);
            }
            ScrollEvent::DragBegin => {
                self.interrupt();
                self.phase = InteractionPhase::Dragging;
            }
            ScrollEvent::MomentumBegin => {
                if self.debounce.is_pending() {
                    tracing::debug!("Momentum superseded pending snap");
                }
                self.interrupt();
                self.phase = InteractionPhase::Momentum;
            }
            ScrollEvent::DragEnd => {
                self.debounce.arm(now);
                if self.phase == InteractionPhase::Dragging {
                    self.phase = InteractionPhase::Idle;
                }
            }
            ScrollEvent::MomentumEnd => {
                self.snap(now);
            }
        }

        self.frame()
    }

    /// Advance the debounce timer and the snap animation to `now`.
    pub fn tick(&mut self, now: Instant) -> HeaderFrame {
        if !self.disposed {
            self.advance(now);
        }
        self.frame()
    }

    /// Recompute the collapse range for a new header height.
    ///
    /// Scroll position and base offset are kept; progress is re-clamped into
    /// the new range. A running animation keeps its original target.
    pub fn set_header_height(&mut self, height: HeaderHeight) {
        if height == self.height {
            return;
        }
        tracing::debug!(
            from = self.height.get(),
            to = height.get(),
            "Header height changed"
        );
        self.height = height;
        self.clamp.set_upper(height);
    }

    /// Apply new snap timing. Affects the next timer and animation started.
    pub fn set_snap_config(&mut self, snap: &SnapConfig) {
        self.collapse_threshold = snap.collapse_threshold;
        self.debounce.set_delay(snap.debounce());
        self.animator.set_timing(snap.animation_duration(), snap.easing);
    }

    /// Release the timer and animation; later events are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        let had_timer = self.debounce.cancel();
        let had_animation = self.animator.cancel();
        self.disposed = true;
        self.phase = InteractionPhase::Idle;
        tracing::debug!(had_timer, had_animation, "Collapsible header disposed");
    }

    pub fn frame(&self) -> HeaderFrame {
        HeaderFrame {
            style: project(self.clamp.progress(), self.height),
            content_inset: self.height.get(),
            phase: self.phase,
        }
    }

    /// Whether the host should keep ticking at frame rate.
    pub fn needs_tick(&self) -> bool {
        !self.disposed && (self.animator.is_animating() || self.debounce.is_pending())
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.clamp.progress()
    }

    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.clamp.scroll_y()
    }

    #[inline]
    pub fn base_offset(&self) -> f64 {
        self.offset.current()
    }

    #[inline]
    pub fn height(&self) -> HeaderHeight {
        self.height
    }

    #[inline]
    pub fn phase(&self) -> InteractionPhase {
        self.phase
    }

    #[inline]
    pub fn animation(&self) -> Option<&AnimationHandle> {
        self.animator.handle()
    }

    #[inline]
    pub fn has_pending_snap(&self) -> bool {
        self.debounce.is_pending()
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn interrupt(&mut self) {
        self.animator.cancel();
        if self.debounce.cancel() {
            tracing::trace!("Cancelled pending snap");
        }
    }

    fn advance(&mut self, now: Instant) {
        // Start the debounced snap at its own deadline, then catch the
        // animation up to `now`.
        if let Some(deadline) = self.debounce.fire_if_due(now) {
            tracing::trace!("Snap debounce elapsed");
            self.snap(deadline);
        }

        if let Some(value) = self.animator.advance(now) {
            let delta = self.offset.observe(value);
            self.clamp.shift(delta);
        }

        if self.phase == InteractionPhase::Animating && !self.animator.is_animating() {
            self.phase = InteractionPhase::Idle;
        }
    }

    fn snap(&mut self, at: Instant) {
        self.debounce.cancel();
        let decision = decide_with_threshold(
            self.clamp.scroll_y(),
            self.clamp.progress(),
            self.offset.current(),
            self.height,
            self.collapse_threshold,
        );
        tracing::debug!(
            direction = ?decision.direction,
            scroll_y = self.clamp.scroll_y(),
            progress = self.clamp.progress(),
            "Snapping header"
        );
        self.animator.animate_to(self.offset.current(), decision.target, at);
        self.phase = InteractionPhase::Animating;
    }
}

impl Drop for CollapsibleHeader {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EasingType;
    use std::time::Duration;

    const H: f64 = 50.0;

    fn linear_snap() -> SnapConfig {
        SnapConfig {
            easing: EasingType::Linear,
            ..SnapConfig::default()
        }
    }

    fn header() -> CollapsibleHeader {
        CollapsibleHeader::new(HeaderHeight::new(H).unwrap(), &linear_snap())
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drag from 0 down to `to` in steps of 10, one frame apart.
    fn drag_to(header: &mut CollapsibleHeader, t0: Instant, to: f64) -> Instant {
        header.handle(ScrollEvent::DragBegin, t0);
        let mut t = t0;
        let mut y = header.scroll_y();
        let step = if to >= y { 10.0 } else { -10.0 };
        while (to - y).abs() > f64::EPSILON {
            y = if (to - y).abs() < 10.0 { to } else { y + step };
            t += ms(16);
            header.handle(ScrollEvent::Scroll { y }, t);
        }
        t
    }

    #[test]
    fn test_initial_state() {
        let h = header();
        let frame = h.frame();
        assert_eq!(frame.style, HeaderStyle::default());
        assert!((frame.content_inset - H).abs() < f64::EPSILON);
        assert_eq!(frame.phase, InteractionPhase::Idle);
        assert!(!h.needs_tick());
    }

    #[test]
    fn test_scroll_updates_style_every_event() {
        let mut h = header();
        let t0 = Instant::now();
        h.handle(ScrollEvent::DragBegin, t0);
        let frame = h.handle(ScrollEvent::Scroll { y: 20.0 }, t0);
        assert!((frame.style.translate_y + 20.0).abs() < 1e-9);
        assert!((frame.style.opacity - 0.6).abs() < 1e-9);
        assert_eq!(frame.phase, InteractionPhase::Dragging);
    }

    #[test]
    fn test_drag_end_snaps_after_debounce() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::DragEnd, t);
        assert!(h.has_pending_snap());

        h.tick(t + ms(249));
        assert!(h.animation().is_none());

        let frame = h.tick(t + ms(250));
        assert_eq!(frame.phase, InteractionPhase::Animating);
        assert!((h.animation().unwrap().target() - H).abs() < 1e-9);

        let frame = h.tick(t + ms(250 + 350));
        assert_eq!(frame.phase, InteractionPhase::Idle);
        assert!((h.base_offset() - H).abs() < f64::EPSILON);
        assert!((frame.style.translate_y + H).abs() < 1e-9);
        assert!(frame.style.opacity.abs() < 1e-9);
    }

    #[test]
    fn test_momentum_begin_cancels_pending_snap() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::DragEnd, t);
        h.handle(ScrollEvent::MomentumBegin, t + ms(100));
        assert!(!h.has_pending_snap());

        // Well past the original deadline: nothing fires
        h.handle(ScrollEvent::Scroll { y: 260.0 }, t + ms(300));
        let frame = h.tick(t + ms(1000));
        assert!(h.animation().is_none());
        assert_eq!(frame.phase, InteractionPhase::Momentum);
        assert!(h.base_offset().abs() < f64::EPSILON);
    }

    #[test]
    fn test_momentum_end_snaps_synchronously() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 30.0);
        h.handle(ScrollEvent::DragEnd, t);
        h.handle(ScrollEvent::MomentumBegin, t);
        let frame = h.handle(ScrollEvent::MomentumEnd, t + ms(5));

        assert_eq!(frame.phase, InteractionPhase::Animating);
        let anim = h.animation().unwrap();
        // Near the top: expand relative to the current base
        assert!((anim.target() + H).abs() < 1e-9);
        assert_eq!(anim.start(), t + ms(5));
    }

    #[test]
    fn test_expand_snap_reveals_header() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        let t = drag_to(&mut h, t, 180.0);
        assert!((h.progress() - 30.0).abs() < 1e-9);

        // 30 > 25 and scrolled past: collapse
        h.handle(ScrollEvent::MomentumEnd, t);
        h.tick(t + ms(400));
        assert!((h.progress() - H).abs() < 1e-9);

        let t = t + ms(400);
        let t = drag_to(&mut h, t, 170.0);
        assert!((h.progress() - 40.0).abs() < 1e-9);
        let t = drag_to(&mut h, t, 150.0);
        assert!((h.progress() - 20.0).abs() < 1e-9);
        h.handle(ScrollEvent::MomentumEnd, t);
        let frame = h.tick(t + ms(400));
        assert!(h.progress().abs() < 1e-9);
        assert_eq!(frame.style, HeaderStyle { translate_y: 0.0, opacity: 1.0 });
        // Cycles compose on the base offset
        assert!(h.base_offset().abs() < 1e-9);
    }

    #[test]
    fn test_second_snap_starts_from_in_flight_offset() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::MomentumEnd, t);

        let t1 = t + ms(175);
        h.handle(ScrollEvent::MomentumEnd, t1);

        let anim = h.animation().unwrap();
        assert!((anim.from() - H / 2.0).abs() < 1e-6);
        assert!((anim.from() - h.base_offset()).abs() < f64::EPSILON);
        assert!((anim.target() - (H / 2.0 + H)).abs() < 1e-6);
        assert_eq!(anim.start(), t1);
    }

    #[test]
    fn test_drag_begin_stops_animation_in_place() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::MomentumEnd, t);
        h.handle(ScrollEvent::DragBegin, t + ms(100));
        let base = h.base_offset();
        assert!(h.animation().is_none());
        assert_eq!(h.phase(), InteractionPhase::Dragging);

        h.tick(t + ms(1000));
        assert!((h.base_offset() - base).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_begin_cancels_pending_snap() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::DragEnd, t);
        assert!(h.has_pending_snap());

        let frame = h.handle(ScrollEvent::DragBegin, t + ms(100));
        assert!(!h.has_pending_snap());
        assert_eq!(frame.phase, InteractionPhase::Dragging);

        h.tick(t + ms(1000));
        assert!(!h.has_pending_snap());
        assert!(h.animation().is_none());
        assert!(!h.needs_tick());
        assert!(h.base_offset().abs() < f64::EPSILON);
    }

    #[test]
    fn test_late_event_fires_overdue_debounce_first() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::DragEnd, t);

        // No ticks at all: the next event still observes the expired timer
        // and the animation it started at the deadline.
        h.handle(ScrollEvent::Scroll { y: 200.0 }, t + ms(250 + 175));
        let anim = h.animation().unwrap();
        assert_eq!(anim.start(), t + ms(250));
        assert!((h.base_offset() - H / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_progress_bounded_through_gestures() {
        let mut h = header();
        let mut t = Instant::now();
        for target in [300.0, 10.0, 900.0, 870.0, 0.0, 45.0, 1200.0] {
            t = drag_to(&mut h, t, target);
            h.handle(ScrollEvent::DragEnd, t);
            for _ in 0..40 {
                t += ms(16);
                let frame = h.tick(t);
                assert!((0.0..=H).contains(&h.progress()));
                assert!((-H..=0.0).contains(&frame.style.translate_y));
                assert!((0.0..=1.0).contains(&frame.style.opacity));
            }
        }
    }

    #[test]
    fn test_height_change_keeps_scroll_and_offset() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 20.0);
        let before = h.frame().style;

        h.set_header_height(HeaderHeight::new(100.0).unwrap());
        let after = h.frame();
        assert!((after.style.translate_y - before.translate_y).abs() < 1e-9);
        assert!((after.style.opacity - 0.8).abs() < 1e-9);
        assert!((after.content_inset - 100.0).abs() < f64::EPSILON);
        assert!((h.scroll_y() - 20.0).abs() < f64::EPSILON);

        h.set_header_height(HeaderHeight::new(10.0).unwrap());
        let shrunk = h.frame().style;
        assert!((shrunk.translate_y + 10.0).abs() < 1e-9);
        assert!(shrunk.opacity.abs() < 1e-9);

        // Accumulation continues from the kept scroll position
        h.handle(ScrollEvent::Scroll { y: 15.0 }, t + ms(16));
        assert!((h.progress() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_dispose_releases_handles_and_ignores_events() {
        let mut h = header();
        let t0 = Instant::now();
        let t = drag_to(&mut h, t0, 200.0);
        h.handle(ScrollEvent::DragEnd, t);
        assert!(h.needs_tick());

        h.dispose();
        assert!(h.is_disposed());
        assert!(!h.has_pending_snap());
        assert!(h.animation().is_none());
        assert!(!h.needs_tick());

        let before = h.progress();
        h.handle(ScrollEvent::Scroll { y: 0.0 }, t + ms(10));
        h.handle(ScrollEvent::MomentumEnd, t + ms(20));
        h.tick(t + ms(1000));
        assert!((h.progress() - before).abs() < f64::EPSILON);
        assert!(h.animation().is_none());
    }

    #[test]
    fn test_from_config() {
        let mut config = AppConfig::default();
        config.header.bar_height = 4.0;
        config.header.safe_area_top = 2.0;
        let h = CollapsibleHeader::from_config(&config).unwrap();
        assert!((h.height().get() - 6.0).abs() < f64::EPSILON);

        config.header.bar_height = -10.0;
        assert!(CollapsibleHeader::from_config(&config).is_err());
    }
}
