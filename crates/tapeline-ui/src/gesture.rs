//! Touch state machine and scroll physics.
//!
//! Phases: Idle → Dragging → (Flinging | Settling) → Idle. Drags commit
//! damped deltas directly; releases either fling (spline decay, then a
//! corrective settle) or settle straight onto the selected tick. The
//! controller only proposes offsets — the widget commits them, which is
//! what feeds the selection/audio pipeline.

use log::debug;
use tapeline_animation::{Easing, FlingCalculator, FlingTrajectory, Tween};

use crate::coords::CoordinateTable;
use crate::velocity::{VelocityTracker, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};

/// Scroll-to-finger ratio while dragging. Less than 1 for finer control.
const DRAG_DAMPING: f64 = 0.45;

/// Divisor applied to the release velocity before it seeds a fling.
const FLING_VELOCITY_DIVISOR: f32 = 1.7;

/// A single fling never moves the selection further than this many ticks
/// from the tick under the indicator at touch-down.
const MAX_FLING_TICKS: i32 = 34;

/// Duration of the settle animation onto an exact tick coordinate.
const SETTLE_DURATION_MS: i64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Flinging,
    Settling,
}

/// Scroll position and per-gesture bookkeeping.
///
/// Mutated only by the gesture controller and the widget's commit path;
/// the renderer and feedback pipeline read it.
#[derive(Debug, Clone, Copy)]
pub struct ScrollState {
    /// Committed scroll offset in pixels.
    pub offset: i32,
    /// Tick currently under the indicator (updated by the feedback
    /// pipeline after clamping).
    pub selected_tick: i32,
    /// True between fling start and its terminal correction.
    pub is_fast_scroll: bool,
    /// Tick selected at touch-down; anchor for the fling displacement cap.
    pub fling_origin_tick: i32,
    /// Last raw finger delta; its sign decides the cap direction.
    pub pending_delta: i32,
}

impl ScrollState {
    pub fn new() -> Self {
        Self {
            offset: 0,
            selected_tick: 0,
            is_fast_scroll: false,
            fling_origin_tick: 0,
            pending_delta: 0,
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) struct GestureController {
    phase: GesturePhase,
    last_x: f32,
    tracker: VelocityTracker,
    calculator: FlingCalculator,
    fling: Option<FlingTrajectory>,
    settle: Option<Tween>,
}

impl GestureController {
    pub fn new(density: f32) -> Self {
        Self {
            phase: GesturePhase::Idle,
            last_x: 0.0,
            tracker: VelocityTracker::new(),
            calculator: FlingCalculator::with_density(density),
            fling: None,
            settle: None,
        }
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    fn cancel_animations(&mut self) {
        self.fling = None;
        self.settle = None;
    }

    pub fn on_touch_down(
        &mut self,
        state: &mut ScrollState,
        table: &CoordinateTable,
        x: f32,
        now_ms: i64,
    ) {
        self.cancel_animations();
        self.phase = GesturePhase::Dragging;
        self.last_x = x;
        state.is_fast_scroll = false;
        state.pending_delta = 0;
        state.fling_origin_tick = table.offset_to_tick(state.offset);
        self.tracker.reset();
        self.tracker.add_sample(now_ms, x);
    }

    /// Returns the offset to commit, or `None` when the move is rejected
    /// at a range boundary.
    pub fn on_touch_move(
        &mut self,
        state: &mut ScrollState,
        table: &CoordinateTable,
        x: f32,
        now_ms: i64,
    ) -> Option<i32> {
        if self.phase != GesturePhase::Dragging {
            return None;
        }
        self.tracker.add_sample(now_ms, x);
        state.is_fast_scroll = false;

        let delta = x - self.last_x;
        state.pending_delta = delta as i32;
        let proposed = (state.offset as f64 - delta as f64 * DRAG_DAMPING) as i32;
        if proposed >= table.min_offset() && proposed <= table.max_offset() {
            self.last_x = x;
            Some(proposed)
        } else {
            // Finger ran past the range: hold position, stop any
            // leftover deceleration.
            self.cancel_animations();
            None
        }
    }

    /// Release: fling if the gesture was fast enough, otherwise settle
    /// back onto the currently selected tick.
    pub fn on_touch_up(
        &mut self,
        state: &mut ScrollState,
        table: &CoordinateTable,
        velocity_window_ms: i32,
        now_ms: i64,
    ) {
        let velocity = self
            .tracker
            .velocity_over_window(velocity_window_ms, MAX_FLING_VELOCITY);
        self.tracker.reset();

        if velocity.abs() > MIN_FLING_VELOCITY {
            state.is_fast_scroll = true;
            self.phase = GesturePhase::Flinging;
            self.fling = Some(self.calculator.trajectory(
                state.offset as f32,
                -(velocity / FLING_VELOCITY_DIVISOR),
                now_ms,
            ));
        } else {
            match table.lookup(state.selected_tick) {
                Some(target) => {
                    self.phase = GesturePhase::Settling;
                    self.settle = Some(Tween::new(
                        state.offset as f32,
                        target as f32,
                        now_ms,
                        SETTLE_DURATION_MS,
                        Easing::FastOutSlowIn,
                    ));
                }
                None => {
                    debug!(
                        "settle target {} outside table, staying put",
                        state.selected_tick
                    );
                    self.phase = GesturePhase::Idle;
                }
            }
        }
    }

    /// Advance whichever animation is active. Returns the offset to commit
    /// for this frame, or `None` when nothing is animating.
    pub fn step(
        &mut self,
        state: &mut ScrollState,
        table: &CoordinateTable,
        now_ms: i64,
    ) -> Option<i32> {
        match self.phase {
            GesturePhase::Flinging => {
                let fling = self.fling?;
                let position = (fling.value_at(now_ms) as i32)
                    .clamp(table.min_offset(), table.max_offset());
                if fling.is_finished(now_ms) {
                    self.finish_fling(state, table, position, now_ms);
                }
                Some(position)
            }
            GesturePhase::Settling => {
                let settle = self.settle?;
                if settle.is_finished(now_ms) {
                    self.phase = GesturePhase::Idle;
                    self.settle = None;
                    Some(settle.end_value() as i32)
                } else {
                    Some(settle.value_at(now_ms).round() as i32)
                }
            }
            GesturePhase::Idle | GesturePhase::Dragging => None,
        }
    }

    /// Terminal fling step: resolve the landing tick, cap its displacement
    /// from the touch-down tick, and settle onto the corrected coordinate.
    fn finish_fling(
        &mut self,
        state: &mut ScrollState,
        table: &CoordinateTable,
        final_offset: i32,
        now_ms: i64,
    ) {
        state.is_fast_scroll = false;
        self.fling = None;

        let mut target = table.offset_to_tick(final_offset);
        if (target - state.fling_origin_tick).abs() > MAX_FLING_TICKS {
            target = if state.pending_delta > 0 {
                state.fling_origin_tick - MAX_FLING_TICKS
            } else {
                state.fling_origin_tick + MAX_FLING_TICKS
            };
        }
        target = target.clamp(table.tick_start(), table.tick_end());

        match table.lookup(target) {
            Some(offset) => {
                self.phase = GesturePhase::Settling;
                self.settle = Some(Tween::new(
                    final_offset as f32,
                    offset as f32,
                    now_ms,
                    SETTLE_DURATION_MS,
                    Easing::FastOutSlowIn,
                ));
            }
            None => {
                // Unreachable after clamping, but a lookup miss only
                // costs this frame.
                debug!("fling target {target} missing from table");
                self.phase = GesturePhase::Idle;
            }
        }
    }
}
