//! Geometric primitives and the draw-command vocabulary.

use crate::Color;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// Backend-agnostic draw commands emitted by the ruler renderer.
///
/// Text carries a horizontal center anchor rather than a left edge: glyph
/// measurement lives with the host's font stack, so centering is resolved
/// there.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Line {
        start: Point,
        end: Point,
        width: f32,
        color: Color,
    },
    Text {
        text: String,
        /// Horizontal center of the label.
        center_x: f32,
        /// Text baseline.
        baseline_y: f32,
        size: f32,
        color: Color,
    },
}
