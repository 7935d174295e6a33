//! Stateless ruler rendering.
//!
//! Pure function of (scroll offset, config, viewport size) to a list of
//! draw primitives in viewport coordinates. The selection indicator does
//! not scroll; everything else shifts left as the offset grows.

use tapeline_graphics::{Color, Dp, DrawPrimitive, Point, Size};

use crate::config::RulerConfig;
use crate::style::RulerStyle;

const LINE_HEIGHT: Dp = Dp(40.0);
const THIN_LINE_WIDTH: Dp = Dp(1.0);
const BOLD_LINE_WIDTH: Dp = Dp(2.0);
const TEXT_SIZE: Dp = Dp(24.0);
const TEXT_MARGIN_TOP: Dp = Dp(20.0);
const INDICATOR_WIDTH: Dp = Dp(6.0);
/// The indicator stands taller than the ticks by this much.
const INDICATOR_EXTRA_HEIGHT: Dp = Dp(8.0);

/// Ticks drawn beyond each end of the selectable range so the strip never
/// runs out of graduations near the viewport edge during a fast scroll.
const NON_SELECTABLE_TICK_COUNT: i32 = 50;

const SELECTABLE_COLOR: Color = Color::WHITE;
const NON_SELECTABLE_COLOR: Color = Color::from_rgb_u8(0x22, 0x22, 0x22);
const INDICATOR_COLOR: Color = Color::from_rgb_u8(0xFE, 0x40, 0x13);

pub(crate) fn render(config: &RulerConfig, scroll_offset: i32, size: Size) -> Vec<DrawPrimitive> {
    if size.width <= 0.0 || size.height <= 0.0 {
        return Vec::new();
    }

    let density = config.density;
    let line_height = LINE_HEIGHT.to_px(density);
    let text_size = TEXT_SIZE.to_px(density);
    let text_margin = TEXT_MARGIN_TOP.to_px(density);
    let y_offset = size.height / 2.0 - (line_height + text_margin + text_size) / 2.0;
    let baseline_y = y_offset + text_margin + line_height + text_size;

    let spacing = config.spacing_px;
    let leading = config.leading_offset_px as f32;
    let center_offset = size.width as i32 / 2;

    let mut primitives = Vec::new();

    let first = config.tick_start - NON_SELECTABLE_TICK_COUNT;
    let last = config.tick_end + 1 + NON_SELECTABLE_TICK_COUNT;
    for tick in first..last {
        let value = config.value_of(tick);
        let selectable = tick >= config.tick_start && tick <= config.tick_end;
        let on_bold_grid = value % config.bold_interval == 0;

        let x = ((tick - config.tick_start) * spacing - scroll_offset) as f32 + leading;

        let mut bold =
            on_bold_grid || (tick == config.tick_start && config.style.bolds_first_tick());
        // The zero graduation of a TenMinute ruler stays thin.
        if value == 0 && config.style == RulerStyle::TenMinute {
            bold = false;
        }

        primitives.push(DrawPrimitive::Line {
            start: Point::new(x, y_offset),
            end: Point::new(x, y_offset + line_height),
            width: if selectable && bold {
                BOLD_LINE_WIDTH.to_px(density)
            } else {
                THIN_LINE_WIDTH.to_px(density)
            },
            color: if selectable {
                SELECTABLE_COLOR
            } else {
                NON_SELECTABLE_COLOR
            },
        });

        let labeled =
            on_bold_grid || (tick == config.tick_start && config.style.bolds_first_tick());
        if labeled && selectable {
            let text = if config.style.uses_hour_labels() {
                format!("{}:00", value / 60)
            } else {
                value.to_string()
            };
            primitives.push(DrawPrimitive::Text {
                text,
                center_x: x,
                baseline_y,
                size: text_size,
                color: SELECTABLE_COLOR,
            });
        }
    }

    // Fixed-position selection indicator: snapping the viewport center to
    // the spacing grid keeps it pinned over the selected graduation.
    let indicator_x = (center_offset - center_offset % spacing) as f32 + leading;
    let extra = INDICATOR_EXTRA_HEIGHT.to_px(density) / 2.0;
    primitives.push(DrawPrimitive::Line {
        start: Point::new(indicator_x, y_offset - extra),
        end: Point::new(indicator_x, y_offset + line_height + extra),
        width: INDICATOR_WIDTH.to_px(density),
        color: INDICATOR_COLOR,
    });

    primitives
}
