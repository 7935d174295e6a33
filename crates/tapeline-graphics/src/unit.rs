//! Unit types: Dp, Px, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    /// Rounded integer pixels. The ruler's scroll arithmetic is integral
    /// (grid snapping uses `%`), so geometry constants resolve through this.
    pub fn to_px_i32(&self, density: f32) -> i32 {
        (self.0 * density).round() as i32
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);
