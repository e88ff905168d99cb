// File: crates/dashboard-render-skia/src/options.rs
// Summary: Render options (margins, theme, label toggle).

use dashboard_core::Theme;

/// Screen margins around the stacked plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // left holds the row titles, right the value ticks, bottom the date labels
        Self::new(64, 56, 16, 32)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Text is platform-font dependent; tests turn it off for stable pixels.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { insets: Insets::default(), theme: Theme::default(), draw_labels: true }
    }
}
