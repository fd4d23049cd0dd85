use dialkit_scene::coords::Rect;
use dialkit_scene::scene::DrawList;

use crate::face::ClockFace;
use crate::painter::Painter;
use crate::style::FaceStyle;

/// Per-frame coordinator owning the draw list.
///
/// The host calls [`frame`] from its redraw handler and feeds the returned
/// list to its rasterizer. The list is rebuilt from scratch on every call;
/// nothing is retained between frames.
///
/// [`frame`]: FaceScene::frame
pub struct FaceScene {
    /// Draw list populated by the most recent [`frame`](FaceScene::frame)
    /// call. Public so the host can hand it to its renderers directly.
    pub draw_list: DrawList,
}

impl FaceScene {
    pub fn new() -> Self {
        Self {
            draw_list: DrawList::new(),
        }
    }

    /// Records one face frame and returns the draw stream.
    ///
    /// `bounds` is the host's currently unobstructed rect; `style` is read
    /// fresh on every call. The returned list is valid until the next
    /// `frame` call.
    #[must_use]
    pub fn frame(&mut self, face: &ClockFace, style: &FaceStyle, bounds: Rect) -> &mut DrawList {
        self.draw_list.clear();
        let mut painter = Painter::new(&mut self.draw_list);
        face.paint(&mut painter, bounds, style);
        &mut self.draw_list
    }
}

impl Default for FaceScene {
    fn default() -> Self {
        Self::new()
    }
}
