//! L4 Atomic Layer: Pure easing functions for the snap animation
//!
//! Maps input [0, 1] to output [0, 1] with various acceleration curves.

pub use crate::config::EasingType;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value in range [0, 1]
    ///
    /// # Returns
    /// Eased value in range [0, 1]
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::EaseInOut => cubic_ease_in_out(t),
        }
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: 4t³ on the first half, mirrored on the second
#[inline]
fn cubic_ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 3] = [EasingType::Linear, EasingType::Cubic, EasingType::EaseInOut];

    #[test]
    fn test_easing_boundaries() {
        for easing in ALL {
            assert!((easing.apply(0.0) - 0.0).abs() < 0.001, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let v = easing.apply(t);
                assert!(v >= prev, "{:?} not monotonic at t={}", easing, t);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let e = EasingType::EaseInOut;
        assert!((e.apply(0.5) - 0.5).abs() < 0.001);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert!((EasingType::Cubic.apply(-1.0)).abs() < 0.001);
        assert!((EasingType::Cubic.apply(2.0) - 1.0).abs() < 0.001);
    }
}
