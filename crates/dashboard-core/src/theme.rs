// File: crates/dashboard-core/src/theme.rs
// Summary: Light/Dark colour presets used for trace style hints and by renderers.

use serde::{Deserialize, Serialize};

/// Backend-neutral RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// `#rrggbb`, or `#rrggbbaa` when not opaque.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub axis_line: Rgba,
    pub axis_label: Rgba,
    pub candle_up: Rgba,
    pub candle_down: Rgba,
    pub volume: Rgba,
    pub rsi: Rgba,
    pub macd: Rgba,
    pub signal: Rgba,
    pub upper_band: Rgba,
    pub lower_band: Rgba,
    pub sma: Rgba,
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            grid: Rgba::rgb(40, 40, 45),
            axis_line: Rgba::rgb(180, 180, 190),
            axis_label: Rgba::rgb(235, 235, 245),
            candle_up: Rgba::rgb(40, 200, 120),
            candle_down: Rgba::rgb(220, 80, 80),
            volume: Rgba::rgb(96, 156, 255),
            rsi: Rgba::rgb(171, 99, 250),
            macd: Rgba::rgb(64, 160, 255),
            signal: Rgba::rgb(255, 161, 90),
            upper_band: Rgba::rgb(0, 0, 255),
            lower_band: Rgba::rgb(255, 102, 146),
            sma: Rgba::rgb(255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            axis_line: Rgba::rgb(60, 60, 70),
            axis_label: Rgba::rgb(20, 20, 30),
            candle_up: Rgba::rgb(20, 160, 90),
            candle_down: Rgba::rgb(200, 60, 60),
            volume: Rgba::rgb(40, 120, 200),
            rsi: Rgba::rgb(120, 60, 200),
            macd: Rgba::rgb(32, 120, 200),
            signal: Rgba::rgb(230, 120, 30),
            upper_band: Rgba::rgb(0, 0, 255),
            lower_band: Rgba::rgb(220, 60, 120),
            sma: Rgba::rgb(90, 90, 100),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Rgba::rgb(0x00, 0x00, 0x00),
            grid: Rgba::rgb(0x22, 0x22, 0x22),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            axis_label: Rgba::rgb(0xff, 0xff, 0xff),
            candle_up: Rgba::rgb(0x00, 0xff, 0x00),
            candle_down: Rgba::rgb(0xff, 0x00, 0x00),
            volume: Rgba::rgba(0x00, 0xaa, 0xff, 200),
            rsi: Rgba::rgb(0xff, 0x00, 0xff),
            macd: Rgba::rgb(0x00, 0xff, 0xff),
            signal: Rgba::rgb(0xff, 0xff, 0x00),
            upper_band: Rgba::rgb(0x40, 0x40, 0xff),
            lower_band: Rgba::rgb(0xff, 0x80, 0x00),
            sma: Rgba::rgb(0xff, 0xff, 0xff),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
