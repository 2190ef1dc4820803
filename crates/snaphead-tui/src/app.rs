use std::time::Instant;

use anyhow::Result;
use snaphead_core::{AppConfig, CollapsibleHeader, HeaderFrame, ScrollEvent};

use crate::content::sample_paragraphs;
use crate::gesture::{GestureStep, GestureSynth};
use crate::input::Action;
use crate::theme::Theme;
use crate::widgets::BodyWidget;

/// Smallest bar height reachable with the shrink key
const MIN_BAR_HEIGHT: f64 = 1.0;

pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub header: CollapsibleHeader,
    pub gesture: GestureSynth,
    /// Last frame produced by the header engine
    pub frame: HeaderFrame,
    pub paragraphs: Vec<String>,
    pub should_quit: bool,
    scroll_y: f64,
    /// Wrapped body rows, including the header reservation
    content_rows: u16,
    viewport_width: u16,
    viewport_height: u16,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let header = CollapsibleHeader::from_config(&config)?;
        let frame = header.frame();
        Ok(Self {
            gesture: GestureSynth::new(&config.ui),
            config,
            theme: Theme::default(),
            header,
            frame,
            paragraphs: sample_paragraphs(2),
            should_quit: false,
            scroll_y: 0.0,
            content_rows: 0,
            viewport_width: 0,
            viewport_height: 0,
        })
    }

    /// Current content offset in rows
    #[inline]
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    /// Rows reserved for the header at rest
    pub fn header_rows(&self) -> u16 {
        self.frame.content_inset.ceil().max(0.0) as u16
    }

    pub fn max_scroll(&self) -> f64 {
        f64::from(self.content_rows.saturating_sub(self.viewport_height))
    }

    /// Record the size of the scrollable area and re-wrap the body.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.relayout();
    }

    pub fn apply(&mut self, action: Action, now: Instant) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Scroll(steps) => self.scroll_by(steps * self.config.ui.wheel_step, now),
            Action::ScrollPage(fraction) => {
                let rows = (f64::from(self.viewport_height) * fraction).round();
                self.scroll_by(rows, now);
            }
            Action::GrowHeader => self.set_bar_height(self.config.header.bar_height + 1.0)?,
            Action::ShrinkHeader => {
                let bar = (self.config.header.bar_height - 1.0).max(MIN_BAR_HEIGHT);
                self.set_bar_height(bar)?;
            }
            Action::None => {}
        }
        Ok(())
    }

    /// User-driven scroll of `rows` (positive = down).
    pub fn scroll_by(&mut self, rows: f64, now: Instant) {
        for event in self.gesture.input(rows, now) {
            self.frame = self.header.handle(event, now);
        }
        self.move_content(rows, now);
    }

    /// Advance gesture, debounce and animation state by one frame.
    pub fn tick(&mut self, now: Instant) {
        for step in self.gesture.tick(now) {
            match step {
                GestureStep::Lifecycle(event) => {
                    self.frame = self.header.handle(event, now);
                }
                GestureStep::Coast(rows) => {
                    if !self.move_content(rows, now) {
                        if let Some(event) = self.gesture.halt() {
                            self.frame = self.header.handle(event, now);
                        }
                    }
                }
            }
        }
        self.frame = self.header.tick(now);
    }

    /// Whether frames must keep coming even without input
    pub fn is_animating(&self) -> bool {
        self.gesture.is_active() || self.header.needs_tick()
    }

    /// Change the header bar height at runtime
    pub fn set_bar_height(&mut self, bar_height: f64) -> Result<()> {
        self.config.header.bar_height = bar_height;
        let height = self.config.header.height()?;
        self.header.set_header_height(height);
        self.frame = self.header.frame();
        self.relayout();
        Ok(())
    }

    pub fn status_line(&self) -> String {
        format!(
            " {:?} | progress {:.1}/{:.0} | base {:.1} | scroll {:.1}/{:.0}",
            self.frame.phase,
            self.header.progress(),
            self.header.height().get(),
            self.header.base_offset(),
            self.scroll_y,
            self.max_scroll(),
        )
    }

    /// Move content, clamped to its extent, and report the position to the
    /// header. Returns whether the content actually moved.
    fn move_content(&mut self, rows: f64, now: Instant) -> bool {
        let next = (self.scroll_y + rows).clamp(0.0, self.max_scroll());
        let moved = (next - self.scroll_y).abs() > f64::EPSILON;
        self.scroll_y = next;
        self.frame = self.header.handle(ScrollEvent::Scroll { y: next }, now);
        moved
    }

    fn relayout(&mut self) {
        let rows = BodyWidget::paragraph(self).line_count(self.viewport_width);
        self.content_rows = u16::try_from(rows).unwrap_or(u16::MAX);
        if self.scroll_y > self.max_scroll() {
            tracing::debug!(
                scroll_y = self.scroll_y,
                max = self.max_scroll(),
                "Content shrank below scroll position"
            );
            self.scroll_y = self.max_scroll();
        }
    }
}
