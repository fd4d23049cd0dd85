use dialkit_scene::coords::Vec2;
use dialkit_scene::paint::Color;
use dialkit_scene::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`ClockFace::paint`].
///
/// Wraps the scene crate's `DrawList` with the two primitives the face
/// emits. Each call takes the next z-layer, so paint order always matches
/// call order.
///
/// [`ClockFace::paint`]: crate::face::ClockFace::paint
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Stroked line segment.
    pub fn stroke_line(&mut self, p0: Vec2, p1: Vec2, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_line(z, p0, p1, width, color);
    }

    /// Solid filled circle.
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_circle(z, center, radius, color);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialkit_scene::scene::DrawCmd;

    #[test]
    fn z_follows_call_order() {
        let mut list = DrawList::new();
        let mut painter = Painter::new(&mut list);
        painter.stroke_line(Vec2::zero(), Vec2::new(1.0, 0.0), 1.0, Color::WHITE);
        painter.fill_circle(Vec2::zero(), 5.0, Color::WHITE);

        assert_eq!(list.items()[0].key.z, ZIndex::new(0));
        assert_eq!(list.items()[1].key.z, ZIndex::new(1));
        assert!(matches!(list.items()[1].cmd, DrawCmd::Circle(_)));
    }
}
