//! L4 Atomic Layer: Time calculation utilities for the snap animation
//!
//! All functions take the current instant explicitly so the engine can be
//! driven by any clock, including a simulated one.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) from start time and duration
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Instant being sampled
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, -100.0, 1.0) + 100.0).abs() < 0.001);
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, start, d) - 0.0).abs() < 0.001);
        assert!((progress(start, start + Duration::from_millis(50), d) - 0.25).abs() < 0.001);
        assert!((progress(start, start + Duration::from_secs(5), d) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
        assert!(is_complete(start, start, Duration::ZERO));
    }

    #[test]
    fn test_now_before_start_is_zero() {
        let now = Instant::now();
        let start = now + Duration::from_millis(10);
        assert!((progress(start, now, Duration::from_millis(100))).abs() < 0.001);
        assert!(!is_complete(start, now, Duration::from_millis(100)));
    }
}
