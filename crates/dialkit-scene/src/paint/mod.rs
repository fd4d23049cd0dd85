//! Paint model for the draw stream.
//!
//! Scope: solid color representation only. The face draws flat strokes and
//! fills; gradients and image paints stay a host concern.
//!
//! Geometry types remain in `coords`.

mod color;

pub use color::Color;
