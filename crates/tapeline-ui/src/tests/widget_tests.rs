//! End-to-end widget tests driving the public RulerView surface with
//! deterministic timestamps.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use tapeline_audio::CuePlayer;
use tapeline_graphics::DrawPrimitive;

use crate::coords::CoordinateTable;
use crate::gesture::GesturePhase;
use crate::style::RulerStyle;
use crate::widget::RulerView;

/// Discards every cue.
struct NullPlayer;

impl CuePlayer for NullPlayer {
    fn play(&self, _cue: &str) {}
}

/// Records the first cue, then blocks long enough that the rest of the
/// queue stays observable from the test thread.
struct StallingPlayer {
    played: Mutex<Vec<String>>,
}

impl StallingPlayer {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            played: Mutex::new(Vec::new()),
        })
    }
}

impl CuePlayer for StallingPlayer {
    fn play(&self, cue: &str) {
        self.played.lock().unwrap().push(cue.to_string());
        thread::sleep(Duration::from_secs(10));
    }
}

fn half_hour_view() -> (RulerView, Rc<RefCell<Vec<i32>>>) {
    let mut view = RulerView::new(1.0, Arc::new(NullPlayer));
    view.initialize(RulerStyle::HalfHour, 60, 1440, 120);
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();
    view.set_on_value_changed(move |value| sink.borrow_mut().push(value));
    view.on_size_changed(1080, 400);
    (view, values)
}

#[test]
fn initialization_scenario_half_hour() {
    let (view, values) = half_hour_view();

    // 60..1440 at granularity 30 -> internal [2, 48], selected 4.
    assert_eq!(*values.borrow(), vec![120]);
    assert_eq!(view.selected_value(), Some(120));

    let table = CoordinateTable::build(2, 48, 540, 50);
    assert_eq!(view.scroll_offset(), table.lookup(4).unwrap());

    // The initial scroll event attached the audio worker without a cue.
    assert!(view.audio_running());
    assert!(view.cue_queue().is_empty());
}

#[test]
fn events_before_geometry_are_no_ops() {
    let mut view = RulerView::new(1.0, Arc::new(NullPlayer));
    view.on_touch_down_at(100.0, 0);
    view.on_touch_move_at(50.0, 16);
    view.on_touch_up_at(50.0, 32);
    view.step(48);
    assert!(view.render().is_empty());
    assert_eq!(view.selected_value(), None);
}

#[test]
fn drag_fires_callbacks_for_each_boundary_within_range() {
    let (mut view, values) = half_hour_view();
    values.borrow_mut().clear();

    view.on_touch_down_at(800.0, 0);
    // Finger left in 4 strokes: content scrolls toward higher values.
    for (i, now) in [16_i64, 32, 48, 64].into_iter().enumerate() {
        view.on_touch_move_at(800.0 - (i as f32 + 1.0) * 200.0, now);
    }

    let mut seen = values.borrow().clone();
    assert!(!seen.is_empty());
    for value in &seen {
        assert!((60..=1440).contains(value));
        assert_eq!(value % 30, 0);
    }
    // A partial-spacing step can re-report the current tick; collapsing
    // those repeats must leave consecutive boundaries with nothing skipped.
    seen.dedup();
    for pair in seen.windows(2) {
        assert_eq!(pair[1] - pair[0], 30);
    }
}

#[test]
fn slow_release_settles_exactly_on_a_tick() {
    let (mut view, values) = half_hour_view();

    view.on_touch_down_at(800.0, 0);
    view.on_touch_move_at(770.0, 200); // slow: ~150 px/s
    view.on_touch_up_at(770.0, 400);
    assert_eq!(view.phase(), GesturePhase::Settling);

    for now in (400..1000).step_by(16) {
        view.step(now);
    }
    assert_eq!(view.phase(), GesturePhase::Idle);

    let table = CoordinateTable::build(2, 48, 540, 50);
    let tick = table.offset_to_tick(view.scroll_offset());
    assert_eq!(table.lookup(tick), Some(view.scroll_offset()));
    assert_eq!(view.selected_value(), Some(*values.borrow().last().unwrap()));
}

#[test]
fn fling_never_jumps_more_than_34_ticks() {
    let (mut view, values) = half_hour_view();
    values.borrow_mut().clear();
    let origin_tick = 4;

    view.on_touch_down_at(8_000.0, 0);
    for (i, now) in [10_i64, 20, 30].into_iter().enumerate() {
        view.on_touch_move_at(8_000.0 - (i as f32 + 1.0) * 2_500.0, now);
    }
    view.on_touch_up_at(500.0, 40);
    assert_eq!(view.phase(), GesturePhase::Flinging);

    let mut now = 40;
    while view.phase() != GesturePhase::Idle && now < 60_000 {
        now += 16;
        view.step(now);
    }
    assert_eq!(view.phase(), GesturePhase::Idle);

    let table = CoordinateTable::build(2, 48, 540, 50);
    let landed = table.offset_to_tick(view.scroll_offset());
    assert!(
        (landed - origin_tick).abs() <= 34,
        "fling moved {} ticks",
        (landed - origin_tick).abs()
    );
    // Every intermediate callback stayed in range and on the grid.
    for value in values.borrow().iter() {
        assert!((60..=1440).contains(value));
        assert_eq!(value % 30, 0);
    }
    // And the strongest fling is pinned to exactly origin + 34.
    assert_eq!(landed, origin_tick + 34);
}

#[test]
fn fling_overshoot_clamps_to_the_end_tick() {
    let mut view = RulerView::new(1.0, Arc::new(NullPlayer));
    view.initialize(RulerStyle::HalfHour, 60, 300, 60);
    let values = Rc::new(RefCell::new(Vec::new()));
    let sink = values.clone();
    view.set_on_value_changed(move |value| sink.borrow_mut().push(value));
    view.on_size_changed(1080, 400);

    // Fast swipe whose decay distance far exceeds the short range.
    view.on_touch_down_at(2_000.0, 0);
    for (i, now) in [10_i64, 20, 30].into_iter().enumerate() {
        view.on_touch_move_at(2_000.0 - (i as f32 + 1.0) * 200.0, now);
    }
    view.on_touch_up_at(1_400.0, 40);
    assert_eq!(view.phase(), GesturePhase::Flinging);

    let mut now = 40;
    while view.phase() != GesturePhase::Idle && now < 60_000 {
        now += 16;
        view.step(now);
    }

    let table = CoordinateTable::build(2, 10, 540, 50);
    assert_eq!(view.scroll_offset(), table.lookup(10).unwrap());
    assert_eq!(values.borrow().last(), Some(&300));
    assert!(values.borrow().iter().all(|v| (60..=300).contains(v)));
}

#[test]
fn release_trims_cue_backlog_to_five() {
    let player = StallingPlayer::new();
    // PieceCount voices every tick change with no rate limit.
    let mut view = RulerView::new(1.0, player.clone());
    view.initialize(RulerStyle::PieceCount, 1, 9, 1);
    view.on_size_changed(1080, 400);

    // Sweep up to the last tick and most of the way back: every crossing
    // enqueues a cue while the worker is stalled inside its first play.
    let mut x = 2_000.0;
    let mut now = 0;
    view.on_touch_down_at(x, now);
    for _ in 0..8 {
        x -= 100.0;
        now += 10;
        view.on_touch_move_at(x, now);
    }
    for _ in 0..6 {
        x += 100.0;
        now += 10;
        view.on_touch_move_at(x, now);
    }

    thread::sleep(Duration::from_millis(100));
    assert!(player.played.lock().unwrap().len() <= 1);
    assert!(view.cue_queue().len() > 5, "need a backlog to trim");

    view.on_touch_up_at(x, now + 10);
    assert!(view.cue_queue().len() <= 5);
    view.detach();
}

#[test]
fn detach_then_reattach_gets_fresh_worker_and_queue() {
    let (mut view, _values) = half_hour_view();
    assert!(view.audio_running());

    view.detach();
    assert!(!view.audio_running());

    // The next scroll event re-attaches lazily.
    view.on_touch_down_at(800.0, 10_000);
    view.on_touch_move_at(700.0, 10_016);
    assert!(view.audio_running());
    assert!(!view.cue_queue().is_closed());
}

#[test]
fn second_initialize_overwrites_geometry() {
    let (mut view, values) = half_hour_view();
    assert_eq!(view.selected_value(), Some(120));

    view.initialize(RulerStyle::Temperature, 40, 260, 100);
    assert_eq!(view.selected_value(), Some(100));
    assert_eq!(values.borrow().last(), Some(&100));
}

#[test]
fn render_tracks_scroll_offset() {
    let (mut view, _values) = half_hour_view();
    let before = view.render();
    assert!(!before.is_empty());

    view.on_touch_down_at(800.0, 0);
    view.on_touch_move_at(600.0, 16);
    let after = view.render();

    let first_x = |prims: &[DrawPrimitive]| match &prims[0] {
        DrawPrimitive::Line { start, .. } => start.x,
        _ => panic!("expected a line"),
    };
    // Finger moved left 200px at 0.45 damping: ticks shifted left 90px.
    assert_eq!(first_x(&before) - 90.0, first_x(&after));
}
