//! Animation support for the tapeline ruler widget.
//!
//! Two drivers live here: a fixed-duration [`Tween`] used for the settle
//! animation that snaps the ruler onto a tick, and the spline-based fling
//! deceleration ([`FlingCalculator`] / [`FlingTrajectory`]) that gives
//! velocity-driven scrolls their Android-feel physics.
//!
//! Both are polled with plain millisecond timestamps supplied by whoever
//! drives the frame loop; nothing here owns a clock.

mod decay;
mod easing;
mod tween;

pub use decay::{FlingCalculator, FlingSpline, FlingTrajectory};
pub use easing::Easing;
pub use tween::Tween;
