// File: crates/dashboard-core/src/types.rs
// Summary: Shared constants (chart size, row weights, spacing).

/// Default chart width in pixels.
pub const WIDTH: u32 = 900;
/// Default chart height in pixels.
pub const HEIGHT: u32 = 500;

/// Relative height of the price (candlestick) row.
pub const PRICE_ROW_WEIGHT: f64 = 0.6;
/// Relative height of every row below the price row.
pub const PANEL_ROW_WEIGHT: f64 = 0.2;

/// Gap between stacked rows as a fraction of the plot height.
pub const VERTICAL_SPACING: f64 = 0.02;
