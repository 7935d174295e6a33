//! A horizontally-scrollable "ruler" picker widget.
//!
//! The ruler renders a tick-marked strip (like a tape measure) that the
//! user drags or flicks to choose a numeric value. Releases snap to the
//! nearest valid graduation, every crossed tick fires the selection
//! callback, and each tick enqueues an audio cue drained by a background
//! worker.
//!
//! The widget is host-agnostic: the host wires platform touch events into
//! [`RulerView::on_touch_down`]/[`on_touch_move`](RulerView::on_touch_move)/
//! [`on_touch_up`](RulerView::on_touch_up), drives
//! [`RulerView::step`] from its frame clock, draws the
//! [`DrawPrimitive`](tapeline_graphics::DrawPrimitive)s returned by
//! [`RulerView::render`], and supplies the sound playback primitive via
//! [`CuePlayer`](tapeline_audio::CuePlayer).

mod config;
mod coords;
mod feedback;
mod gesture;
mod render;
mod style;
mod velocity;
mod widget;

pub use config::RulerConfig;
pub use coords::CoordinateTable;
pub use gesture::{GesturePhase, ScrollState};
pub use style::RulerStyle;
pub use widget::RulerView;

pub use tapeline_audio::CuePlayer;
pub use tapeline_graphics::{Color, DrawPrimitive, Point, Size};
