//! Fling deceleration physics.
//!
//! Port of the Android `Scroller` fling spline: a precomputed tension curve
//! sampled over normalized time, with total distance and duration derived
//! from the initial velocity, friction, and screen density. This is what
//! makes a flicked ruler coast and slow the way a platform scroll view does.

use std::sync::LazyLock;

/// Tension curve inflection point
const INFLECTION: f32 = 0.35;
const START_TENSION: f32 = 0.5;
const END_TENSION: f32 = 1.0;
const P1: f32 = START_TENSION * INFLECTION;
const P2: f32 = 1.0 - END_TENSION * (1.0 - INFLECTION);

/// Number of samples in the spline lookup table
const NB_SAMPLES: usize = 100;

/// Earth's gravity in SI units (m/s²)
const GRAVITY_EARTH: f32 = 9.80665;
/// Inches per meter (for density conversion)
const INCHES_PER_METER: f32 = 39.37;
/// Deceleration rate constant, (ln(0.78) / ln(0.9)).abs()
const DECELERATION_RATE: f32 = 2.358_201_6;

/// Precomputed distance coefficients, indexed by normalized time.
static SPLINE_POSITIONS: LazyLock<[f32; NB_SAMPLES + 1]> = LazyLock::new(|| {
    let mut positions = [0.0f32; NB_SAMPLES + 1];
    let mut x_min = 0.0f32;

    for (i, slot) in positions.iter_mut().enumerate().take(NB_SAMPLES) {
        let alpha = i as f32 / NB_SAMPLES as f32;

        // Bisect for x such that bezier(x) == alpha.
        let mut x_max = 1.0f32;
        let x;
        let coef;
        loop {
            let x_mid = x_min + (x_max - x_min) / 2.0;
            let c = 3.0 * x_mid * (1.0 - x_mid);
            let tx = c * ((1.0 - x_mid) * P1 + x_mid * P2) + x_mid * x_mid * x_mid;
            if (tx - alpha).abs() < 1e-5 {
                x = x_mid;
                coef = c;
                break;
            }
            if tx > alpha {
                x_max = x_mid;
            } else {
                x_min = x_mid;
            }
        }
        *slot = coef * ((1.0 - x) * START_TENSION + x) + x * x * x;
    }

    positions[NB_SAMPLES] = 1.0;
    positions
});

/// The Android fling deceleration spline.
pub struct FlingSpline;

impl FlingSpline {
    /// Fraction of total fling distance covered at normalized time [0, 1].
    pub fn distance_coefficient(time: f32) -> f32 {
        let clamped = time.clamp(0.0, 1.0);
        let index = (NB_SAMPLES as f32 * clamped) as usize;
        if index >= NB_SAMPLES {
            return 1.0;
        }

        let t_inf = index as f32 / NB_SAMPLES as f32;
        let t_sup = (index + 1) as f32 / NB_SAMPLES as f32;
        let d_inf = SPLINE_POSITIONS[index];
        let d_sup = SPLINE_POSITIONS[index + 1];
        let velocity = (d_sup - d_inf) / (t_sup - t_inf);
        d_inf + (clamped - t_inf) * velocity
    }

    /// Deceleration term for a given velocity and friction product.
    pub fn deceleration(velocity: f32, friction: f32) -> f64 {
        (INFLECTION as f64 * velocity.abs() as f64 / friction as f64).ln()
    }
}

/// Physical deceleration for the given friction at a screen density.
fn compute_deceleration(friction: f32, density: f32) -> f32 {
    GRAVITY_EARTH * INCHES_PER_METER * density * 160.0 * friction
}

/// Derives fling duration and distance from an initial velocity.
#[derive(Debug, Clone, Copy)]
pub struct FlingCalculator {
    friction: f32,
    physical_coefficient: f32,
}

impl FlingCalculator {
    /// Default scroll friction (matches Android ViewConfiguration).
    pub const DEFAULT_FRICTION: f32 = 0.015;

    pub fn new(friction: f32, density: f32) -> Self {
        Self {
            friction,
            physical_coefficient: compute_deceleration(0.84, density),
        }
    }

    pub fn with_density(density: f32) -> Self {
        Self::new(Self::DEFAULT_FRICTION, density)
    }

    fn spline_deceleration(&self, velocity: f32) -> f64 {
        FlingSpline::deceleration(velocity, self.friction * self.physical_coefficient)
    }

    /// Total fling duration in milliseconds for `velocity` px/sec.
    pub fn fling_duration_ms(&self, velocity: f32) -> i64 {
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        (1000.0 * (l / decel_minus_one).exp()) as i64
    }

    /// Total distance in pixels the fling will travel (unsigned).
    pub fn fling_distance(&self, velocity: f32) -> f32 {
        let l = self.spline_deceleration(velocity);
        let decel_minus_one = DECELERATION_RATE as f64 - 1.0;
        self.friction
            * self.physical_coefficient
            * (DECELERATION_RATE as f64 / decel_minus_one * l).exp() as f32
    }

    /// Build a pollable trajectory starting from `start_value` at
    /// `start_time_ms` with the given signed velocity in px/sec.
    pub fn trajectory(&self, start_value: f32, velocity: f32, start_time_ms: i64) -> FlingTrajectory {
        FlingTrajectory {
            start_value,
            signed_distance: self.fling_distance(velocity) * velocity.signum(),
            duration_ms: self.fling_duration_ms(velocity).max(1),
            start_time_ms,
        }
    }
}

/// A fling in progress, polled by timestamp like [`crate::Tween`].
#[derive(Debug, Clone, Copy)]
pub struct FlingTrajectory {
    start_value: f32,
    signed_distance: f32,
    duration_ms: i64,
    start_time_ms: i64,
}

impl FlingTrajectory {
    pub fn value_at(&self, now_ms: i64) -> f32 {
        let elapsed = (now_ms - self.start_time_ms).max(0);
        let normalized = elapsed as f32 / self.duration_ms as f32;
        self.start_value + self.signed_distance * FlingSpline::distance_coefficient(normalized)
    }

    pub fn is_finished(&self, now_ms: i64) -> bool {
        now_ms - self.start_time_ms >= self.duration_ms
    }

    /// Where the fling would come to rest with no boundary in the way.
    pub fn target_value(&self) -> f32 {
        self.start_value + self.signed_distance
    }

    pub fn duration_ms(&self) -> i64 {
        self.duration_ms
    }
}
