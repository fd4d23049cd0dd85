//! Dialkit scene crate.
//!
//! Renderer-agnostic drawing primitives for the watchface layer: geometry
//! types, solid colors, and the recorded draw command stream that a host
//! rasterizer consumes.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
