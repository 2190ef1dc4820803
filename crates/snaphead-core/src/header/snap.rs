//! L4 Atomic Layer: Snap decision
//!
//! Binary choice between fully collapsed and fully expanded. Collapsing
//! requires both that the content has scrolled past the header and that
//! more than `threshold` of the header is already hidden, so a short flick
//! near the top of the content always reopens the header.

use super::height::HeaderHeight;

pub const DEFAULT_COLLAPSE_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapDirection {
    Collapse,
    Expand,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapDecision {
    pub direction: SnapDirection,
    /// Base offset to animate to
    pub target: f64,
}

pub fn decide(
    scroll_y: f64,
    progress: f64,
    base_offset: f64,
    height: HeaderHeight,
) -> SnapDecision {
    decide_with_threshold(
        scroll_y,
        progress,
        base_offset,
        height,
        DEFAULT_COLLAPSE_THRESHOLD,
    )
}

pub fn decide_with_threshold(
    scroll_y: f64,
    progress: f64,
    base_offset: f64,
    height: HeaderHeight,
    threshold: f64,
) -> SnapDecision {
    let h = height.get();
    if scroll_y > h && progress > h * threshold {
        SnapDecision {
            direction: SnapDirection::Collapse,
            target: base_offset + h,
        }
    } else {
        SnapDecision {
            direction: SnapDirection::Expand,
            target: base_offset - h,
        }
    }
}
