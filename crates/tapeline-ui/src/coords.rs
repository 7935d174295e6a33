//! The authoritative mapping between tick indices and scroll offsets.

/// Tick index → pixel scroll offset table, rebuilt on every size change.
///
/// Offsets are pre-snapped to the spacing grid (offset % spacing == 0);
/// the gesture controller relies on this to avoid half-tick drift when it
/// animates between stored coordinates.
#[derive(Debug, Clone)]
pub struct CoordinateTable {
    tick_start: i32,
    tick_end: i32,
    center_offset: i32,
    spacing: i32,
    offsets: Vec<i32>,
}

impl CoordinateTable {
    /// Build the table for ticks in `[tick_start, tick_end]`, where
    /// `center_offset_px` is the viewport midpoint the selection indicator
    /// sits on.
    pub fn build(tick_start: i32, tick_end: i32, center_offset_px: i32, spacing_px: i32) -> Self {
        let spacing = spacing_px.max(1);
        let count = (tick_end - tick_start).max(0) as usize + 1;
        let mut offsets = Vec::with_capacity(count);
        for i in tick_start..=tick_end {
            let mut x =
                (i - tick_start) * spacing - center_offset_px + center_offset_px % spacing;
            // Snap down onto the spacing grid.
            if x % spacing != 0 {
                x -= x % spacing;
            }
            offsets.push(x);
        }
        Self {
            tick_start,
            tick_end,
            center_offset: center_offset_px,
            spacing,
            offsets,
        }
    }

    /// Scroll offset at which `tick` is centered, or `None` outside the
    /// table's range. Callers clamp before looking up.
    pub fn lookup(&self, tick: i32) -> Option<i32> {
        if tick < self.tick_start || tick > self.tick_end {
            return None;
        }
        Some(self.offsets[(tick - self.tick_start) as usize])
    }

    /// Inverse mapping: the tick index centered at `scroll_offset`, using
    /// the same snap-down rule the table was built with.
    pub fn offset_to_tick(&self, scroll_offset: i32) -> i32 {
        let mut x = self.center_offset + scroll_offset;
        if x % self.spacing != 0 {
            x -= x % self.spacing;
        }
        self.tick_start + x / self.spacing
    }

    /// Scroll offset of the first selectable tick.
    pub fn min_offset(&self) -> i32 {
        self.offsets[0]
    }

    /// Scroll offset of the last selectable tick.
    pub fn max_offset(&self) -> i32 {
        *self.offsets.last().expect("table is never empty")
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn tick_start(&self) -> i32 {
        self.tick_start
    }

    pub fn tick_end(&self) -> i32 {
        self.tick_end
    }
}
