use dialkit_scene::paint::Color;

/// Watchface style supplied by the settings collaborator.
///
/// Owned outside the renderer and borrowed into every paint, so a settings
/// change takes effect on the next frame with no cache invalidation.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    /// Ticks, hands, and hub.
    pub time_color: Color,
    /// Hand channel strokes; matches the face background.
    pub time_background_color: Color,
    /// Rectangular displays shift the face sideways to clear the sidebar.
    pub sidebar_on_left: bool,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            time_color: Color::WHITE,
            time_background_color: Color::BLACK,
            sidebar_on_left: false,
        }
    }
}
