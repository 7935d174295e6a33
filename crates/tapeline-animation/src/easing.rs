//! Easing curves for tween animations.

/// Easing functions applied to a linear progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Decelerating cubic curve.
    EaseOut,
    /// Material-style fast-out-slow-in. The ruler's settle animation uses
    /// this: quick departure, soft landing on the target tick.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, fraction),
            Easing::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, fraction),
        }
    }
}

/// Cubic bezier curve evaluation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric t matching the x fraction, with a
    // bisection fallback when the derivative flattens out.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let x = sample_curve(ax, bx, cx, t);
            let delta = x - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::FastOutSlowIn] {
            assert_eq!(easing.transform(0.0), 0.0);
            assert_eq!(easing.transform(1.0), 1.0);
        }
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::EaseOut, Easing::FastOutSlowIn] {
            let mut prev = 0.0;
            for i in 0..=50 {
                let v = easing.transform(i as f32 / 50.0);
                assert!(v >= prev - 1e-4, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn fast_out_slow_in_front_loads_progress() {
        // Faster than linear in the middle of the curve.
        assert!(Easing::FastOutSlowIn.transform(0.5) > 0.5);
    }
}
