use core::f32::consts::TAU;

use dialkit_scene::coords::{Rect, Vec2};

use crate::display::ScreenGeometry;
use crate::painter::Painter;
use crate::style::FaceStyle;
use crate::time::TimeOfDay;

/// Horizontal clearance reserved around the dial: radius = (w − 31) / 2.
const RADIUS_CLEARANCE: f32 = 31.0;
/// Center shift on rectangular displays when the sidebar sits on the left.
const SIDEBAR_LEFT_SHIFT: f32 = 15.0;
/// Center shift on rectangular displays when the sidebar sits on the right.
const SIDEBAR_RIGHT_SHIFT: f32 = -16.0;
/// Hour hand length as a fraction of the radius. Hand-tuned.
const HOUR_HAND_SCALE: f32 = 0.55;
/// The hour channel stops this far short of the hour hand tip.
const HOUR_CHANNEL_SHORTFALL: f32 = 2.0;

const HOUR_TICK_WIDTH: f32 = 2.0;
const MINUTE_TICK_WIDTH: f32 = 1.0;
const HAND_WIDTH: f32 = 4.0;
const CHANNEL_WIDTH: f32 = 1.0;
const HUB_RADIUS: f32 = 5.0;

/// Point at `distance` from `center` in the direction `turns`, where `0.0`
/// points to 12 o'clock and angles grow clockwise.
pub fn radial_point(center: Vec2, distance: f32, turns: f32) -> Vec2 {
    let theta = turns.rem_euclid(1.0) * TAU;
    Vec2::new(
        center.x + theta.sin() * distance,
        center.y - theta.cos() * distance,
    )
}

/// Analog face renderer.
///
/// Emits twelve hour ticks, the five minute ticks of the current 5-minute
/// block, a channeled minute and hour hand, and a center hub. The host
/// drives it with [`set_time`] on clock ticks and [`paint`] on redraw
/// events; both run on the host thread, never concurrently.
///
/// [`set_time`]: ClockFace::set_time
/// [`paint`]: ClockFace::paint
pub struct ClockFace {
    geometry: ScreenGeometry,
    time: TimeOfDay,
    redraw: Option<Box<dyn FnMut()>>,
}

impl ClockFace {
    /// Captures the screen geometry for the session.
    pub fn new(geometry: ScreenGeometry) -> Self {
        Self {
            geometry,
            time: TimeOfDay::default(),
            redraw: None,
        }
    }

    /// Registers the host's repaint-request callback, invoked from
    /// [`set_time`](ClockFace::set_time).
    ///
    /// The handler should schedule a redraw, not draw directly.
    pub fn set_redraw_handler(&mut self, handler: impl FnMut() + 'static) {
        self.redraw = Some(Box::new(handler));
    }

    #[inline]
    pub fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    #[inline]
    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    /// Stores the new time and requests a repaint from the host.
    pub fn set_time(&mut self, hour: u8, minute: u8) {
        self.time = TimeOfDay::new(hour, minute);
        log::trace!(
            "time set to {:02}:{:02}",
            self.time.hour(),
            self.time.minute()
        );
        if let Some(redraw) = self.redraw.as_mut() {
            redraw();
        }
    }

    /// Usable drawing area for this frame.
    ///
    /// Round displays ignore the unobstructed rect and pad the cached screen
    /// vertically; rectangular displays draw in whatever the host left
    /// unobstructed.
    fn paint_area(&self, bounds: Rect) -> Rect {
        if self.geometry.shape.is_round() {
            let pad = self.geometry.shape.metrics().vertical_padding;
            self.geometry.screen.inset_y(pad)
        } else {
            bounds
        }
    }

    fn center(&self, area: Rect, style: &FaceStyle) -> Vec2 {
        let mut center = area.center();
        if !self.geometry.shape.is_round() {
            center.x += if style.sidebar_on_left {
                SIDEBAR_LEFT_SHIFT
            } else {
                SIDEBAR_RIGHT_SHIFT
            };
        }
        center
    }

    /// Records the face into `painter`.
    ///
    /// Pure: the same time, geometry, style, and bounds always produce the
    /// same command stream. `style` is read fresh on every call.
    pub fn paint(&self, painter: &mut Painter<'_>, bounds: Rect, style: &FaceStyle) {
        let metrics = self.geometry.shape.metrics();
        let area = self.paint_area(bounds);

        let radius = ((area.size.x - RADIUS_CLEARANCE) / 2.0).max(0.0);
        if radius <= 0.0 {
            log::trace!("degenerate paint area {area:?}, skipping frame");
            return;
        }
        let center = self.center(area, style);

        // Hour ticks.
        for i in 0..12 {
            let angle = i as f32 / 12.0;
            painter.stroke_line(
                radial_point(center, radius + metrics.tick_overshoot, angle),
                radial_point(center, radius - metrics.hour_tick_len, angle),
                HOUR_TICK_WIDTH,
                style.time_color,
            );
        }

        // Only the current 5-minute block gets minute ticks; the minute hand
        // itself marks the sub-block position.
        let block = self.time.minute_block_start();
        for i in block..block + 5 {
            let angle = f32::from(i) / 60.0;
            painter.stroke_line(
                radial_point(center, radius + metrics.tick_overshoot, angle),
                radial_point(center, radius - metrics.minute_tick_len, angle),
                MINUTE_TICK_WIDTH,
                style.time_color,
            );
        }

        // Minute hand, then its background channel.
        let minute_angle = self.time.minute_angle();
        painter.stroke_line(
            radial_point(center, radius - metrics.minute_hand_inset, minute_angle),
            center,
            HAND_WIDTH,
            style.time_color,
        );
        painter.stroke_line(
            radial_point(center, radius - metrics.minute_channel_inset, minute_angle),
            center,
            CHANNEL_WIDTH,
            style.time_background_color,
        );

        // Hour hand.
        let hour_angle = self.time.hour_angle();
        let hour_len = radius * HOUR_HAND_SCALE;
        painter.stroke_line(
            radial_point(center, hour_len, hour_angle),
            center,
            HAND_WIDTH,
            style.time_color,
        );
        painter.stroke_line(
            radial_point(center, hour_len - HOUR_CHANNEL_SHORTFALL, hour_angle),
            center,
            CHANNEL_WIDTH,
            style.time_background_color,
        );

        // Hub, on top of both hands.
        painter.fill_circle(center, HUB_RADIUS, style.time_color);
    }
}
