//! Resolved ruler geometry for one (style, range, density) combination.

use crate::style::{RulerStyle, StyleSpec};

/// Geometry and range constants resolved at `initialize` time.
///
/// Raw external values (minutes, degrees, pieces) divide by the style's
/// tick granularity into internal tick indices; callers are expected to
/// pass exact multiples, anything else truncates silently.
#[derive(Debug, Clone, Copy)]
pub struct RulerConfig {
    pub style: RulerStyle,
    pub density: f32,
    /// Pixel distance between adjacent ticks. Always >= 1; all scroll
    /// arithmetic snaps to this grid.
    pub spacing_px: i32,
    /// Horizontal inset for every drawn tick, in pixels.
    pub leading_offset_px: i32,
    /// External units per tick index.
    pub tick_granularity: i32,
    /// External-unit interval between bold ticks.
    pub bold_interval: i32,
    /// Window over which release velocity is expressed, in milliseconds.
    pub velocity_window_ms: i32,
    /// First selectable tick index.
    pub tick_start: i32,
    /// Last selectable tick index.
    pub tick_end: i32,
    /// Tick selected at initialization.
    pub default_tick: i32,
}

impl RulerConfig {
    pub fn configure(
        style: RulerStyle,
        start_value: i32,
        end_value: i32,
        default_selected_value: i32,
        density: f32,
    ) -> Self {
        let StyleSpec {
            spacing,
            tick_granularity,
            bold_interval,
            leading_offset,
            velocity_window_ms,
        } = style.spec();

        Self {
            style,
            density,
            spacing_px: spacing.to_px_i32(density).max(1),
            leading_offset_px: leading_offset.to_px_i32(density),
            tick_granularity,
            bold_interval,
            velocity_window_ms,
            tick_start: start_value / tick_granularity,
            tick_end: end_value / tick_granularity,
            default_tick: default_selected_value / tick_granularity,
        }
    }

    /// External-unit value of a tick index.
    pub fn value_of(&self, tick: i32) -> i32 {
        tick * self.tick_granularity
    }

    pub fn clamp_tick(&self, tick: i32) -> i32 {
        tick.clamp(self.tick_start, self.tick_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_hour_range_divides_to_tick_indices() {
        // 60..1440 minutes at half-hour granularity, default 120.
        let config = RulerConfig::configure(RulerStyle::HalfHour, 60, 1440, 120, 1.0);
        assert_eq!(config.tick_granularity, 30);
        assert_eq!(config.tick_start, 2);
        assert_eq!(config.tick_end, 48);
        assert_eq!(config.default_tick, 4);
        assert_eq!(config.value_of(config.default_tick), 120);
        assert_eq!(config.spacing_px, 50);
    }

    #[test]
    fn misaligned_values_truncate() {
        let config = RulerConfig::configure(RulerStyle::Temperature, 42, 263, 101, 1.0);
        assert_eq!(config.tick_start, 8); // 42 / 5
        assert_eq!(config.tick_end, 52); // 263 / 5
        assert_eq!(config.default_tick, 20); // 101 / 5
    }

    #[test]
    fn density_scales_pixel_geometry() {
        let config = RulerConfig::configure(RulerStyle::Temperature, 40, 260, 100, 2.0);
        assert_eq!(config.spacing_px, 38);
        assert_eq!(config.leading_offset_px, 20);
    }

    #[test]
    fn clamp_tick_bounds_both_sides() {
        let config = RulerConfig::configure(RulerStyle::Probe, 0, 60, 10, 1.0);
        assert_eq!(config.clamp_tick(-5), 0);
        assert_eq!(config.clamp_tick(30), 30);
        assert_eq!(config.clamp_tick(99), 60);
    }
}
