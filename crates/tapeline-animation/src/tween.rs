//! Fixed-duration tween, polled by timestamp.

use crate::Easing;

/// A fixed-duration interpolation between two values.
///
/// The ruler's settle phase animates the scroll offset onto an exact tick
/// coordinate with one of these. Polling is pull-based: the frame driver
/// asks for `value_at(now)` and the tween never schedules anything itself.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start_value: f32,
    end_value: f32,
    start_time_ms: i64,
    duration_ms: i64,
    easing: Easing,
}

impl Tween {
    pub fn new(
        start_value: f32,
        end_value: f32,
        start_time_ms: i64,
        duration_ms: i64,
        easing: Easing,
    ) -> Self {
        Self {
            start_value,
            end_value,
            start_time_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn value_at(&self, now_ms: i64) -> f32 {
        let elapsed = (now_ms - self.start_time_ms).max(0);
        let linear = (elapsed as f32 / self.duration_ms as f32).clamp(0.0, 1.0);
        let progress = self.easing.transform(linear);
        self.start_value + (self.end_value - self.start_value) * progress
    }

    pub fn is_finished(&self, now_ms: i64) -> bool {
        now_ms - self.start_time_ms >= self.duration_ms
    }

    pub fn end_value(&self) -> f32 {
        self.end_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_start_and_lands_on_end() {
        let tween = Tween::new(100.0, 600.0, 1_000, 500, Easing::Linear);
        assert_eq!(tween.value_at(1_000), 100.0);
        assert_eq!(tween.value_at(1_500), 600.0);
        assert!(tween.is_finished(1_500));
        assert!(!tween.is_finished(1_499));
    }

    #[test]
    fn clamps_before_start_and_after_end() {
        let tween = Tween::new(0.0, 10.0, 0, 100, Easing::FastOutSlowIn);
        assert_eq!(tween.value_at(-50), 0.0);
        assert_eq!(tween.value_at(10_000), 10.0);
    }

    #[test]
    fn linear_midpoint() {
        let tween = Tween::new(0.0, 200.0, 0, 500, Easing::Linear);
        assert!((tween.value_at(250) - 100.0).abs() < 1e-3);
    }
}
