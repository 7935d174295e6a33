//! Selection change + audio cue pipeline.
//!
//! Every committed scroll-offset change is replayed one tick-spacing at a
//! time, so a large animated jump fires the callback once per crossed
//! boundary, in order, and no tick's cue is skipped.

use log::trace;
use smallvec::SmallVec;
use tapeline_audio::CueQueue;

use crate::config::RulerConfig;
use crate::coords::CoordinateTable;
use crate::gesture::ScrollState;
use crate::style::{piece_cue, temperature_cue, RulerStyle, KNOB_TURN_CUE};

/// Minimum wall-clock spacing between generic knob-turn cues. Excess
/// turns are dropped outright, never queued.
const TURN_CUE_MIN_INTERVAL_MS: i64 = 50;

pub(crate) struct FeedbackPipeline {
    /// Last tick a cue decision was made for; dedupes repeat selections.
    last_selected_tick: i32,
    /// The first invocation after attachment fires the callback but stays
    /// silent, suppressing a spurious startup sound.
    primed: bool,
    last_turn_cue_ms: i64,
}

impl FeedbackPipeline {
    pub fn new() -> Self {
        Self {
            last_selected_tick: 0,
            primed: false,
            // Far enough in the past that the first turn cue always plays.
            last_turn_cue_ms: i64::MIN / 2,
        }
    }

    /// Process a committed offset change from `old` to `new`, stepping
    /// through every crossed tick boundary. Returns the final offset,
    /// which differs from `new` only when clamping forced a corrective
    /// scroll.
    #[allow(clippy::too_many_arguments)]
    pub fn offset_changed(
        &mut self,
        old: i32,
        new: i32,
        state: &mut ScrollState,
        config: &RulerConfig,
        table: &CoordinateTable,
        queue: &CueQueue,
        now_ms: i64,
        callback: &mut Option<Box<dyn FnMut(i32)>>,
    ) -> i32 {
        if !self.primed {
            // Attachment path: a single selection, no boundary replay.
            return self.select_at(new, state, config, table, queue, now_ms, callback);
        }

        let spacing = table.spacing();
        let mut steps: SmallVec<[i32; 8]> = SmallVec::new();
        let mut cursor = old;
        while cursor != new {
            if (cursor - new).abs() <= spacing {
                cursor = new;
            } else if cursor < new {
                cursor += spacing;
            } else {
                cursor -= spacing;
            }
            steps.push(cursor);
        }

        let mut committed = new;
        for offset in steps {
            committed = self.select_at(offset, state, config, table, queue, now_ms, callback);
        }
        committed
    }

    /// Resolve the tick at `offset`, clamp, fire the callback, and decide
    /// the cue. Returns the (possibly corrected) offset.
    #[allow(clippy::too_many_arguments)]
    fn select_at(
        &mut self,
        offset: i32,
        state: &mut ScrollState,
        config: &RulerConfig,
        table: &CoordinateTable,
        queue: &CueQueue,
        now_ms: i64,
        callback: &mut Option<Box<dyn FnMut(i32)>>,
    ) -> i32 {
        let raw_tick = table.offset_to_tick(offset);
        let tick = config.clamp_tick(raw_tick);
        // Clamping forces the scroll onto the boundary tick's coordinate.
        let committed = if tick != raw_tick {
            table.lookup(tick).unwrap_or(offset)
        } else {
            offset
        };
        state.selected_tick = tick;

        if let Some(callback) = callback {
            callback(config.value_of(tick));
        }

        if !self.primed {
            self.primed = true;
            self.last_selected_tick = tick;
        } else if tick != self.last_selected_tick {
            self.enqueue_cue(tick, config, queue, now_ms);
            self.last_selected_tick = tick;
        }

        committed
    }

    fn enqueue_cue(&mut self, tick: i32, config: &RulerConfig, queue: &CueQueue, now_ms: i64) {
        match config.style {
            RulerStyle::PieceCount => {
                if let Some(cue) = piece_cue(tick) {
                    queue.offer(cue);
                }
            }
            RulerStyle::Temperature => {
                let value = config.value_of(tick);
                if value % config.bold_interval == 0 {
                    if let Some(cue) = temperature_cue(value) {
                        queue.offer(cue);
                    }
                }
            }
            _ => {
                if now_ms - self.last_turn_cue_ms >= TURN_CUE_MIN_INTERVAL_MS {
                    queue.offer(KNOB_TURN_CUE);
                    self.last_turn_cue_ms = now_ms;
                } else {
                    trace!("turn cue rate-limited at tick {tick}");
                }
            }
        }
    }
}
