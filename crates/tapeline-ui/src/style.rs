//! Per-style design constants and cue asset tables.
//!
//! Every ruler style resolves to one fixed tuple of spacing, granularity,
//! bold interval, leading offset, and velocity window. The values are
//! design constants, not user-tunable.

use tapeline_graphics::Dp;

/// What the ruler measures, which fixes its graduation geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulerStyle {
    /// 5-unit ticks, bold every 20.
    Temperature,
    /// Time in minutes, one tick per half hour.
    HalfHour,
    /// Time in minutes, one tick per hour.
    PerHour,
    /// Time in minutes, fine ticks, bold every 10.
    TenMinute,
    /// Same geometry as TenMinute.
    OneMinute,
    /// 1-unit ticks, bold every 4.
    Probe,
    /// One tick per piece; every tick is bold and individually voiced.
    PieceCount,
}

/// The fixed per-style tuple.
#[derive(Debug, Clone, Copy)]
pub struct StyleSpec {
    /// Distance between adjacent ticks.
    pub spacing: Dp,
    /// External units represented by one tick index.
    pub tick_granularity: i32,
    /// External-unit interval between bold (labeled) ticks.
    pub bold_interval: i32,
    /// Horizontal inset applied to every drawn tick.
    pub leading_offset: Dp,
    /// Window, in milliseconds, over which release velocity is expressed.
    pub velocity_window_ms: i32,
}

impl RulerStyle {
    pub const fn spec(self) -> StyleSpec {
        match self {
            RulerStyle::Temperature => StyleSpec {
                spacing: Dp(19.0),
                tick_granularity: 5,
                bold_interval: 20,
                leading_offset: Dp(10.0),
                velocity_window_ms: 200,
            },
            RulerStyle::HalfHour => StyleSpec {
                spacing: Dp(50.0),
                tick_granularity: 30,
                bold_interval: 60,
                leading_offset: Dp(30.0),
                velocity_window_ms: 200,
            },
            RulerStyle::PerHour => StyleSpec {
                spacing: Dp(50.0),
                tick_granularity: 60,
                bold_interval: 120,
                leading_offset: Dp(30.0),
                velocity_window_ms: 200,
            },
            RulerStyle::TenMinute => StyleSpec {
                spacing: Dp(10.0),
                tick_granularity: 1,
                bold_interval: 10,
                leading_offset: Dp(30.0),
                velocity_window_ms: 200,
            },
            RulerStyle::OneMinute => StyleSpec {
                spacing: Dp(10.0),
                tick_granularity: 1,
                bold_interval: 10,
                leading_offset: Dp(30.0),
                velocity_window_ms: 200,
            },
            RulerStyle::Probe => StyleSpec {
                spacing: Dp(19.0),
                tick_granularity: 1,
                bold_interval: 4,
                leading_offset: Dp(10.0),
                velocity_window_ms: 200,
            },
            RulerStyle::PieceCount => StyleSpec {
                spacing: Dp(50.0),
                tick_granularity: 1,
                bold_interval: 1,
                leading_offset: Dp(30.0),
                velocity_window_ms: 100,
            },
        }
    }

    /// HalfHour/PerHour label ticks as hours ("H:00"); everything else
    /// labels the raw value.
    pub fn uses_hour_labels(self) -> bool {
        matches!(self, RulerStyle::HalfHour | RulerStyle::PerHour)
    }

    /// TenMinute/OneMinute force a bold first tick even off the bold grid.
    pub fn bolds_first_tick(self) -> bool {
        matches!(self, RulerStyle::TenMinute | RulerStyle::OneMinute)
    }
}

/// The 17 indexed tick sounds. PieceCount voices each piece count with its
/// own asset; Temperature reuses the upper range for its bold boundaries.
pub const CUE_ASSETS: [&str; 17] = [
    "slider_tick_1.wav",
    "slider_tick_2.wav",
    "slider_tick_3.wav",
    "slider_tick_4.wav",
    "slider_tick_5.wav",
    "slider_tick_6.wav",
    "slider_tick_7.wav",
    "slider_tick_8.wav",
    "slider_tick_9.wav",
    "slider_tick_10.wav",
    "slider_tick_11.wav",
    "slider_tick_12.wav",
    "slider_tick_13.wav",
    "slider_tick_14.wav",
    "slider_tick_15.wav",
    "slider_tick_16.wav",
    "slider_tick_17.wav",
];

/// Generic detent sound for styles without a per-value cue.
pub const KNOB_TURN_CUE: &str = "knob_turn.wav";

/// Offset of the piece-count cue table: piece `n` plays `CUE_ASSETS[7 + n]`.
pub const PIECE_CUE_BASE: i32 = 7;

/// PieceCount cue for a tick index, if one is assigned.
pub fn piece_cue(tick: i32) -> Option<&'static str> {
    let index = PIECE_CUE_BASE + tick;
    if (0..CUE_ASSETS.len() as i32).contains(&index) {
        Some(CUE_ASSETS[index as usize])
    } else {
        None
    }
}

/// Temperature cue for an absolute value on a bold boundary. Values
/// 40, 60, ..., 260 each map to a distinct asset; anything else is silent.
pub fn temperature_cue(value: i32) -> Option<&'static str> {
    if !(40..=260).contains(&value) || value % 20 != 0 {
        return None;
    }
    Some(CUE_ASSETS[(5 + (value - 40) / 20) as usize])
}
