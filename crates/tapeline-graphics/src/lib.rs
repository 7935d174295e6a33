//! Pure math/data types shared by the tapeline widget: units, colors,
//! geometry, and the draw primitives a host renderer consumes.

mod color;
mod geometry;
mod unit;

pub use color::Color;
pub use geometry::{DrawPrimitive, Point, Size};
pub use unit::{Dp, Px};
