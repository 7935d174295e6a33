//! The public ruler widget.
//!
//! Hosts construct a [`RulerView`], call `initialize`, then forward
//! platform events: size changes, touch down/move/up, and a per-frame
//! `step`. Drawing is pull-based via `render`. Timestamps are plain
//! millisecond values; the parameterless touch entry points sample the
//! widget's own monotonic clock, while the `_at` variants exist for hosts
//! (and tests) that already have a frame timestamp in hand.

use std::sync::Arc;

use log::debug;
use tapeline_audio::{AudioPipeline, CuePlayer};
use tapeline_graphics::{DrawPrimitive, Size};
use web_time::Instant;

use crate::config::RulerConfig;
use crate::coords::CoordinateTable;
use crate::feedback::FeedbackPipeline;
use crate::gesture::{GestureController, GesturePhase, ScrollState};
use crate::render;
use crate::style::RulerStyle;

/// Capacity of the audio cue queue.
const CUE_QUEUE_CAPACITY: usize = 100;

/// Entries the cue queue is trimmed down to on touch-release, bounding
/// perceived audio lag after a fast back-and-forth gesture.
const CUE_QUEUE_RELEASE_LIMIT: usize = 5;

/// A horizontally-scrollable tick-ruler value picker.
pub struct RulerView {
    density: f32,
    config: Option<RulerConfig>,
    table: Option<CoordinateTable>,
    width: i32,
    height: i32,
    state: ScrollState,
    gesture: GestureController,
    feedback: FeedbackPipeline,
    audio: AudioPipeline,
    player: Arc<dyn CuePlayer>,
    callback: Option<Box<dyn FnMut(i32)>>,
    epoch: Instant,
}

impl RulerView {
    /// `density` is the display's dp-to-px scale factor; `player` is the
    /// host's sound playback primitive, invoked only on the widget's
    /// background audio worker.
    pub fn new(density: f32, player: Arc<dyn CuePlayer>) -> Self {
        Self {
            density,
            config: None,
            table: None,
            width: 0,
            height: 0,
            state: ScrollState::new(),
            gesture: GestureController::new(density),
            feedback: FeedbackPipeline::new(),
            audio: AudioPipeline::new(CUE_QUEUE_CAPACITY),
            player,
            callback: None,
            epoch: Instant::now(),
        }
    }

    /// Configure the ruler. Calling this twice silently overwrites the
    /// previous geometry.
    pub fn initialize(
        &mut self,
        style: RulerStyle,
        start_value: i32,
        end_value: i32,
        default_selected_value: i32,
    ) {
        let config = RulerConfig::configure(
            style,
            start_value,
            end_value,
            default_selected_value,
            self.density,
        );
        self.state.selected_tick = config.default_tick;
        self.config = Some(config);
        self.table = None;
        if self.width > 0 {
            self.rebuild_table();
        }
    }

    /// Register the selection callback. Invoked synchronously on the UI
    /// thread for every settled or intermediate selection change,
    /// post-clamping, in raw external units.
    pub fn set_on_value_changed(&mut self, callback: impl FnMut(i32) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    /// Viewport size change: rebuilds the coordinate table and scrolls to
    /// the selected tick. The resulting scroll event is what lazily
    /// attaches the audio worker and fires the initial callback.
    pub fn on_size_changed(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
        if self.config.is_some() {
            self.rebuild_table();
        }
    }

    fn rebuild_table(&mut self) {
        let Some(config) = self.config else {
            return;
        };
        let table = CoordinateTable::build(
            config.tick_start,
            config.tick_end,
            self.width / 2,
            config.spacing_px,
        );
        let initial = table.lookup(self.state.selected_tick);
        self.table = Some(table);
        if let Some(offset) = initial {
            let now_ms = self.now_ms();
            self.commit_offset(offset, now_ms);
        }
    }

    pub fn on_touch_down(&mut self, x: f32) {
        let now_ms = self.now_ms();
        self.on_touch_down_at(x, now_ms);
    }

    pub fn on_touch_down_at(&mut self, x: f32, now_ms: i64) {
        let (Some(table), Some(_)) = (&self.table, &self.config) else {
            debug!("touch before geometry is ready, ignoring");
            return;
        };
        self.gesture.on_touch_down(&mut self.state, table, x, now_ms);
    }

    pub fn on_touch_move(&mut self, x: f32) {
        let now_ms = self.now_ms();
        self.on_touch_move_at(x, now_ms);
    }

    pub fn on_touch_move_at(&mut self, x: f32, now_ms: i64) {
        let Some(table) = &self.table else {
            return;
        };
        if let Some(offset) = self.gesture.on_touch_move(&mut self.state, table, x, now_ms) {
            self.commit_offset(offset, now_ms);
        }
    }

    /// Touch release (or cancel): trims the pending cue backlog, then
    /// either flings or settles.
    pub fn on_touch_up(&mut self, x: f32) {
        let now_ms = self.now_ms();
        self.on_touch_up_at(x, now_ms);
    }

    pub fn on_touch_up_at(&mut self, _x: f32, now_ms: i64) {
        let (Some(table), Some(config)) = (&self.table, &self.config) else {
            return;
        };
        // Bound audio lag before the settle cue is computed.
        self.audio.queue().trim_to(CUE_QUEUE_RELEASE_LIMIT);
        self.gesture
            .on_touch_up(&mut self.state, table, config.velocity_window_ms, now_ms);
    }

    /// Advance any active fling/settle animation. Hosts call this once
    /// per frame with their frame clock's timestamp; it is non-blocking.
    pub fn step(&mut self, now_ms: i64) {
        let Some(table) = &self.table else {
            return;
        };
        if let Some(offset) = self.gesture.step(&mut self.state, table, now_ms) {
            self.commit_offset(offset, now_ms);
        }
    }

    /// Produce this frame's draw commands for the current scroll offset.
    pub fn render(&self) -> Vec<DrawPrimitive> {
        let Some(config) = &self.config else {
            return Vec::new();
        };
        if self.table.is_none() {
            return Vec::new();
        }
        render::render(
            config,
            self.state.offset,
            Size::new(self.width as f32, self.height as f32),
        )
    }

    /// Detach from the host window: stops the audio worker and releases
    /// the queue. The next scroll event re-attaches with a fresh worker
    /// and an empty queue.
    pub fn detach(&mut self) {
        self.audio.detach();
    }

    /// Currently selected value in raw external units, once configured.
    pub fn selected_value(&self) -> Option<i32> {
        self.config.map(|config| config.value_of(self.state.selected_tick))
    }

    pub fn scroll_offset(&self) -> i32 {
        self.state.offset
    }

    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Route a committed offset change through the feedback pipeline.
    /// Every offset mutation outside a plain state reset flows through
    /// here, so no boundary crossing can bypass the callback or its cue.
    fn commit_offset(&mut self, new_offset: i32, now_ms: i64) {
        let (Some(config), Some(table)) = (&self.config, &self.table) else {
            debug!("commit before geometry is ready, ignoring");
            return;
        };
        // First scroll event attaches the audio worker (and re-attaches
        // after a detach).
        self.audio.ensure_started(self.player.clone());

        let old = self.state.offset;
        self.state.offset = new_offset;
        let committed = self.feedback.offset_changed(
            old,
            new_offset,
            &mut self.state,
            config,
            table,
            self.audio.queue(),
            now_ms,
            &mut self.callback,
        );
        self.state.offset = committed;
    }

    fn now_ms(&self) -> i64 {
        self.epoch.elapsed().as_millis() as i64
    }

    #[cfg(test)]
    pub(crate) fn cue_queue(&self) -> &Arc<tapeline_audio::CueQueue> {
        self.audio.queue()
    }

    #[cfg(test)]
    pub(crate) fn audio_running(&self) -> bool {
        self.audio.is_running()
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
