//! Release-velocity tracking for fling gestures.
//!
//! Impulse-strategy 1D tracker: velocity is derived from the kinetic
//! energy the finger imparted over the most recent samples, which is far
//! more robust against jittery touch input than a two-point slope.

use smallvec::SmallVec;

/// Ring buffer size for velocity samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms participate.
const HORIZON_MS: i64 = 100;

/// A gap this long between samples means the pointer stopped.
const ASSUME_STOPPED_MS: i64 = 40;

/// Minimum release velocity that triggers a fling instead of a settle.
/// Matches the Android baseline minimum fling velocity.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Cap on the computed release velocity.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    x: f32,
}

/// Tracks horizontal touch positions for one touch sequence.
///
/// Reset on touch-down, sampled on every event, queried once on release.
#[derive(Default)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sample(&mut self, time_ms: i64, x: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, x });
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Velocity in px/sec, 0.0 when there is not enough recent movement.
    pub fn velocity_px_per_sec(&self) -> f32 {
        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Walk backwards from the newest sample, oldest ends up first.
        let mut recent: SmallVec<[Sample; HISTORY_SIZE]> = SmallVec::new();
        let mut cursor = self.index;
        let mut previous_time = newest.time_ms;
        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms - sample.time_ms;
            let gap = previous_time - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            recent.insert(0, sample);
            previous_time = sample.time_ms;

            cursor = if cursor == 0 { HISTORY_SIZE - 1 } else { cursor - 1 };
            if recent.len() >= HISTORY_SIZE {
                break;
            }
        }

        if recent.len() < 2 {
            return 0.0;
        }

        // Accumulate the work each segment contributes, then convert the
        // kinetic energy back to a signed velocity (E = v²/2 with m = 1).
        let mut work = 0.0f32;
        for (i, pair) in recent.windows(2).enumerate() {
            let dt_ms = (pair[1].time_ms - pair[0].time_ms) as f32;
            if dt_ms == 0.0 {
                continue;
            }
            let v_curr = (pair[1].x - pair[0].x) / dt_ms;
            let v_prev = kinetic_energy_to_velocity(work);
            work += (v_curr - v_prev) * v_curr.abs();
            if i == 0 {
                work *= 0.5;
            }
        }

        kinetic_energy_to_velocity(work) * 1000.0
    }

    /// Velocity expressed in pixels per `window_ms`, capped to
    /// `max_velocity` in the same units. This mirrors the platform
    /// `computeCurrentVelocity(units, max)` the ruler's feel is tuned to.
    pub fn velocity_over_window(&self, window_ms: i32, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let scaled = self.velocity_px_per_sec() * window_ms as f32 / 1000.0;
        if scaled.is_nan() {
            return 0.0;
        }
        scaled.clamp(-max_velocity, max_velocity)
    }
}

#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
