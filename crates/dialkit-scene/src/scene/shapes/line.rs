use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroked line segment payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub p0: Vec2,
    pub p1: Vec2,
    /// Stroke width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(p0: Vec2, p1: Vec2, width: f32, color: Color) -> Self {
        Self { p0, p1, width, color }
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, p0: Vec2, p1: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(p0, p1, width, color)));
    }
}
