// File: crates/dashboard-render-skia/src/lib.rs
// Summary: Skia raster backend for dashboard charts; stacks rows, autoscales them and writes PNGs.

pub mod options;
pub mod scale;
pub mod rows;
pub mod renderer;

pub use options::{Insets, RenderOptions};
pub use renderer::SkiaRenderer;
pub use rows::{row_bands, RowBand};
