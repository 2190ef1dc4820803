//! Collapsible header engine
//!
//! Turns a stream of scroll positions and drag/momentum lifecycle events into
//! a bounded collapse value, and snaps the header fully open or fully closed
//! once scrolling settles.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `height` - Validated header height
//! - `easing` - Pure easing curves for the snap animation
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `clamp` - Bounded collapse accumulator fed by scroll deltas
//! - `offset` - Cached animated base offset
//! - `snap` - Collapse/expand decision
//! - `style` - Projection of collapse progress to translate/opacity
//!
//! ## L3 Molecular Layer
//! - `animation` - Single-slot base offset animator
//! - `debounce` - Single-slot "snap after drag end" timer
//!
//! ## L2 Organism Layer
//! - `machine` - `CollapsibleHeader`, the event reducer tying it together
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use snaphead_core::{CollapsibleHeader, HeaderHeight, ScrollEvent, SnapConfig};
//!
//! let mut header = CollapsibleHeader::new(HeaderHeight::new(50.0)?, &SnapConfig::default());
//!
//! header.handle(ScrollEvent::DragBegin, Instant::now());
//! let frame = header.handle(ScrollEvent::Scroll { y: 30.0 }, Instant::now());
//! // apply frame.style.translate_y / frame.style.opacity to the header view
//!
//! // In the frame loop, advance timers and the snap animation
//! let frame = header.tick(Instant::now());
//! ```

// L4 Atomic Layer
pub mod clamp;
pub mod easing;
pub mod height;
pub mod offset;
pub mod snap;
pub mod style;
pub mod timing;

// L3 Molecular Layer
pub mod animation;
pub mod debounce;

// L2 Organism Layer
pub mod machine;

// Re-exports for convenient access
pub use animation::{AnimationHandle, OffsetAnimator};
pub use clamp::ClampAccumulator;
pub use debounce::DebounceTimer;
pub use easing::EasingTypeExt;
pub use height::HeaderHeight;
pub use machine::{CollapsibleHeader, HeaderFrame, InteractionPhase, ScrollEvent};
pub use offset::OffsetTracker;
pub use snap::{decide, decide_with_threshold, SnapDecision, SnapDirection};
pub use style::{project, HeaderStyle};
