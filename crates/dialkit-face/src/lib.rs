//! Dialkit face — analog watchface rendering on top of `dialkit-scene`.
//!
//! The face is a pure geometry-to-primitives renderer: given a time of day,
//! a screen geometry captured once at startup, and the current style, it
//! records twelve hour ticks, the five minute ticks of the current block,
//! two channeled hands, and a center hub into a draw list the host
//! rasterizes however it likes.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dialkit_face::prelude::*;
//!
//! let geometry = ScreenGeometry::new(
//!     Rect::new(0.0, 0.0, 180.0, 180.0),
//!     DisplayShape::Rectangular,
//! );
//! let mut face = ClockFace::new(geometry);
//! face.set_redraw_handler(|| host.request_repaint());
//!
//! // On the host's clock tick:
//! face.set_time(6, 30);
//!
//! // In the host's redraw handler:
//! let mut scene = FaceScene::new();
//! let draw_list = scene.frame(&face, &settings.face_style(), host.unobstructed_bounds());
//! // Pass draw_list to your rasterizer.
//! ```

pub mod display;
pub mod face;
pub mod painter;
pub mod scene;
pub mod style;
pub mod time;

pub use face::ClockFace;
pub use scene::FaceScene;

/// Everything a host needs to drive the face.
pub mod prelude {
    pub use crate::display::{DisplayShape, FaceMetrics, ScreenGeometry};
    pub use crate::face::{ClockFace, radial_point};
    pub use crate::painter::Painter;
    pub use crate::scene::FaceScene;
    pub use crate::style::FaceStyle;
    pub use crate::time::TimeOfDay;

    // Re-export the scene primitives everyone needs.
    pub use dialkit_scene::coords::{Rect, Vec2};
    pub use dialkit_scene::paint::Color;
    pub use dialkit_scene::scene::{CircleCmd, DrawCmd, DrawList, LineCmd};
}
