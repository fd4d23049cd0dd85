use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(
            self.origin.x + self.size.x / 2.0,
            self.origin.y + self.size.y / 2.0,
        )
    }

    /// Shrinks the rectangle by `pad` at the top and the bottom.
    ///
    /// Width is untouched. A pad larger than half the height produces a
    /// negative-height rect; callers treat that as empty.
    #[inline]
    pub fn inset_y(self, pad: f32) -> Self {
        Rect::new(
            self.origin.x,
            self.origin.y + pad,
            self.size.x,
            self.size.y - pad * 2.0,
        )
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h)
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_origin_rect() {
        assert_eq!(r(0.0, 0.0, 180.0, 180.0).center(), Vec2::new(90.0, 90.0));
    }

    #[test]
    fn center_respects_origin() {
        assert_eq!(r(10.0, 20.0, 100.0, 60.0).center(), Vec2::new(60.0, 50.0));
    }

    // ── inset_y ───────────────────────────────────────────────────────────

    #[test]
    fn inset_y_pads_top_and_bottom() {
        let padded = r(0.0, 0.0, 180.0, 180.0).inset_y(15.0);
        assert_eq!(padded, r(0.0, 15.0, 180.0, 150.0));
    }

    #[test]
    fn inset_y_keeps_horizontal_center() {
        let rect = r(5.0, 0.0, 100.0, 80.0);
        assert_eq!(rect.inset_y(10.0).center().x, rect.center().x);
    }

    #[test]
    fn inset_y_past_half_height_is_empty() {
        assert!(r(0.0, 0.0, 50.0, 20.0).inset_y(15.0).is_empty());
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(r(0.0, 0.0, 5.0, 0.0).is_empty());
    }

    #[test]
    fn is_empty_positive_size() {
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
