//! L4 Atomic Layer: Header style projection
//!
//! Pure mapping from collapse progress to the transform the host applies.

use super::height::HeaderHeight;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderStyle {
    /// Vertical translation, in `[-height, 0]`
    pub translate_y: f64,
    /// Opacity, in `[0, 1]`
    pub opacity: f64,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            opacity: 1.0,
        }
    }
}

pub fn project(progress: f64, height: HeaderHeight) -> HeaderStyle {
    let h = height.get();
    HeaderStyle {
        translate_y: (-progress).clamp(-h, 0.0),
        opacity: (1.0 - progress / h).clamp(0.0, 1.0),
    }
}
