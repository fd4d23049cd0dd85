use dialkit_scene::coords::Rect;

/// Physical shape of the watch display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DisplayShape {
    Round,
    Rectangular,
}

/// Shape-dependent face metrics, in logical pixels.
///
/// Hand-tuned values carried over from the shipped face. Round displays get
/// slightly longer ticks and extra outward offset to clear the bezel
/// curvature.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceMetrics {
    /// Radial overshoot past the nominal radius for tick outer endpoints.
    pub tick_overshoot: f32,
    /// Hour tick length, inward from the radius.
    pub hour_tick_len: f32,
    /// Minute tick length, inward from the radius.
    pub minute_tick_len: f32,
    /// Inset of the minute hand tip from the radius.
    pub minute_hand_inset: f32,
    /// Inset of the minute hand's background channel tip.
    pub minute_channel_inset: f32,
    /// Vertical padding applied to the usable area. Zero on rectangular
    /// displays.
    pub vertical_padding: f32,
}

const ROUND: FaceMetrics = FaceMetrics {
    tick_overshoot: 3.0,
    hour_tick_len: 8.0,
    minute_tick_len: 5.0,
    minute_hand_inset: 16.0,
    minute_channel_inset: 20.0,
    vertical_padding: 15.0,
};

const RECTANGULAR: FaceMetrics = FaceMetrics {
    tick_overshoot: 0.0,
    hour_tick_len: 6.0,
    minute_tick_len: 3.0,
    minute_hand_inset: 10.0,
    minute_channel_inset: 12.0,
    vertical_padding: 0.0,
};

impl DisplayShape {
    /// Metric table for this shape.
    #[inline]
    pub fn metrics(self) -> FaceMetrics {
        match self {
            DisplayShape::Round => ROUND,
            DisplayShape::Rectangular => RECTANGULAR,
        }
    }

    #[inline]
    pub fn is_round(self) -> bool {
        matches!(self, DisplayShape::Round)
    }
}

/// Per-session screen record.
///
/// Captured once when the face is constructed and never re-queried; hosts
/// whose screen can change mid-session construct a new face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenGeometry {
    pub screen: Rect,
    pub shape: DisplayShape,
}

impl ScreenGeometry {
    pub fn new(screen: Rect, shape: DisplayShape) -> Self {
        Self { screen, shape }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_ticks_are_longer_and_pushed_out() {
        let round = DisplayShape::Round.metrics();
        let rect = DisplayShape::Rectangular.metrics();
        assert!(round.hour_tick_len > rect.hour_tick_len);
        assert!(round.tick_overshoot > rect.tick_overshoot);
        assert!(round.vertical_padding > 0.0);
        assert_eq!(rect.vertical_padding, 0.0);
    }
}
