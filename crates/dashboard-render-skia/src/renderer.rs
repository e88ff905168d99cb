// File: crates/dashboard-render-skia/src/renderer.rs
// Summary: Headless PNG rendering of a ChartDescriptor using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use dashboard_core::series::{OhlcPoint, SeriesType, Trace, TraceData};
use dashboard_core::theme::Rgba;
use dashboard_core::view::{row_value_range, x_range};
use dashboard_core::ChartDescriptor;
use skia_safe as skia;
use tracing::debug;

use crate::options::RenderOptions;
use crate::rows::{row_bands, RowBand};
use crate::scale::{linspace, DateScale, ValueScale};

pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new(RenderOptions::default()) }
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, chart: &ChartDescriptor) -> Result<Vec<u8>> {
        let width = chart.layout.width.max(1) as i32;
        let height = chart.layout.height.max(1) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;

        self.draw(surface.canvas(), chart, width, height);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG file, creating parent directories.
    pub fn render_to_png(&self, chart: &ChartDescriptor, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(chart)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, chart: &ChartDescriptor, width: i32, height: i32) {
        let theme = &self.opts.theme;
        let insets = &self.opts.insets;
        canvas.clear(color(theme.background));

        let l = insets.left as f32;
        let r = (width - insets.right as i32) as f32;
        let t = insets.top as f32;
        let b = (height - insets.bottom as i32) as f32;
        let bands = row_bands(&chart.layout, t, b);

        let Some((start, end)) = x_range(chart) else {
            debug!("chart has no data; drawing empty rows");
            for band in &bands {
                draw_row_frame(canvas, l, r, band, theme.grid, theme.axis_line);
            }
            if self.opts.draw_labels {
                self.draw_row_titles(canvas, chart, &bands);
            }
            return;
        };
        let xs = DateScale::new(l, r, start, end);

        for band in &bands {
            draw_row_frame(canvas, l, r, band, theme.grid, theme.axis_line);
            let Some((vmin, vmax)) = row_value_range(chart, band.row) else { continue };
            let ys = ValueScale::new(band.top, band.bottom, vmin, vmax);

            canvas.save();
            canvas.clip_rect(skia::Rect::from_ltrb(l, band.top, r, band.bottom), skia::ClipOp::Intersect, true);
            // traces draw in descriptor order, so overlays land on top
            for trace in chart.traces_in_row(band.row) {
                draw_trace(canvas, trace, &xs, &ys, &self.opts);
            }
            canvas.restore();

            if self.opts.draw_labels {
                draw_value_ticks(canvas, r, &ys, theme.axis_label);
            }
        }

        if self.opts.draw_labels {
            self.draw_row_titles(canvas, chart, &bands);
            if let Some(last) = bands.last() {
                draw_date_ticks(canvas, &xs, last.bottom, theme.axis_label);
            }
        }
    }

    fn draw_row_titles(&self, canvas: &skia::Canvas, chart: &ChartDescriptor, bands: &[RowBand]) {
        let mut paint_text = skia::Paint::default();
        paint_text.set_color(color(self.opts.theme.axis_label));
        paint_text.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(12.0);

        for band in bands {
            if let Some(title) = chart.axis_title(band.row) {
                canvas.draw_str(title, (4.0, band.top + 12.0), &font, &paint_text);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_row_frame(canvas: &skia::Canvas, l: f32, r: f32, band: &RowBand, grid: Rgba, axis: Rgba) {
    let mut paint = skia::Paint::default();
    paint.set_color(color(grid));
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);
    for y in linspace(band.top as f64, band.bottom as f64, 4) {
        canvas.draw_line((l, y as f32), (r, y as f32), &paint);
    }

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(color(axis));
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_line((l, band.top), (l, band.bottom), &axis_paint);
    canvas.draw_line((l, band.bottom), (r, band.bottom), &axis_paint);
}

fn draw_trace(canvas: &skia::Canvas, trace: &Trace, xs: &DateScale, ys: &ValueScale, opts: &RenderOptions) {
    match (&trace.series_type, &trace.data) {
        (SeriesType::Candlestick, TraceData::Ohlc(points)) => draw_candles(canvas, points, xs, ys, trace, opts),
        (SeriesType::Line, TraceData::Xy(points)) => draw_line(canvas, points, xs, ys, trace, opts),
        (SeriesType::Bar, TraceData::Xy(points)) => draw_bars(canvas, points, xs, ys, trace, opts),
        _ => debug!(trace = %trace.name, "series type does not match its data; skipped"),
    }
}

fn draw_candles(
    canvas: &skia::Canvas,
    points: &[OhlcPoint],
    xs: &DateScale,
    ys: &ValueScale,
    trace: &Trace,
    opts: &RenderOptions,
) {
    let up_color = color(trace.style.increasing.unwrap_or(opts.theme.candle_up));
    let down_color = color(trace.style.decreasing.unwrap_or(opts.theme.candle_down));

    let mut wick = skia::Paint::default();
    wick.set_anti_alias(true);
    wick.set_style(skia::paint::Style::Stroke);
    wick.set_stroke_width(1.0);

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    let half = (xs.day_px() * 0.7).max(1.0) * 0.5;
    for c in points {
        let x = xs.to_px(c.date);
        let (y_o, y_c) = (ys.to_px(c.open), ys.to_px(c.close));
        let col = if c.close >= c.open { up_color } else { down_color };
        wick.set_color(col);
        body.set_color(col);

        canvas.draw_line((x, ys.to_px(c.high)), (x, ys.to_px(c.low)), &wick);
        let top = y_o.min(y_c);
        let bot = y_o.max(y_c);
        canvas.draw_rect(skia::Rect::from_ltrb(x - half, top, x + half, bot.max(top + 1.0)), &body);
    }
}

fn draw_line(
    canvas: &skia::Canvas,
    points: &[(chrono::NaiveDate, Option<f64>)],
    xs: &DateScale,
    ys: &ValueScale,
    trace: &Trace,
    opts: &RenderOptions,
) {
    let mut path = skia::Path::new();
    let mut pen_down = false;
    let mut segments = 0usize;
    for &(d, v) in points {
        match v {
            Some(v) => {
                let p = (xs.to_px(d), ys.to_px(v));
                if pen_down {
                    path.line_to(p);
                } else {
                    path.move_to(p);
                    pen_down = true;
                    segments += 1;
                }
            }
            // gaps lift the pen
            None => pen_down = false,
        }
    }
    if segments == 0 {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(trace.style.line_width.unwrap_or(1.5));
    stroke.set_color(color(trace.style.color.unwrap_or(opts.theme.macd)));
    canvas.draw_path(&path, &stroke);
}

fn draw_bars(
    canvas: &skia::Canvas,
    points: &[(chrono::NaiveDate, Option<f64>)],
    xs: &DateScale,
    ys: &ValueScale,
    trace: &Trace,
    opts: &RenderOptions,
) {
    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color(trace.style.color.unwrap_or(opts.theme.volume)));

    let half = (xs.day_px() * 0.7).max(1.0) * 0.5;
    let y0 = ys.to_px(0.0);
    for &(d, v) in points {
        let Some(v) = v else { continue };
        let x = xs.to_px(d);
        let y = ys.to_px(v);
        canvas.draw_rect(skia::Rect::from_ltrb(x - half, y.min(y0), x + half, y.max(y0)), &fill);
    }
}

fn draw_value_ticks(canvas: &skia::Canvas, r: f32, ys: &ValueScale, label: Rgba) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(color(label));
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(10.0);

    for v in linspace(ys.vmin, ys.vmax, 3) {
        let y = ys.to_px(v).clamp(ys.top_px + 10.0, ys.bottom_px);
        canvas.draw_str(format_value(v), (r + 4.0, y), &font, &paint_text);
    }
}

fn draw_date_ticks(canvas: &skia::Canvas, xs: &DateScale, baseline: f32, label: Rgba) {
    let mut paint_text = skia::Paint::default();
    paint_text.set_color(color(label));
    paint_text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(10.0);

    for f in linspace(0.0, 1.0, 5) {
        let d = xs.date_at_fraction(f);
        let x = xs.to_px(d);
        canvas.draw_str(d.format("%Y-%m-%d").to_string(), (x - 28.0, baseline + 16.0), &font, &paint_text);
    }
}

/// Compact tick text: volumes in K/M/B, prices with two decimals.
fn format_value(v: f64) -> String {
    let a = v.abs();
    if a >= 1e9 {
        format!("{:.1}B", v / 1e9)
    } else if a >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if a >= 1e4 {
        format!("{:.0}K", v / 1e3)
    } else {
        format!("{v:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;

    #[test]
    fn tick_formatting() {
        assert_eq!(format_value(1_300_000.0), "1.3M");
        assert_eq!(format_value(45_000.0), "45K");
        assert_eq!(format_value(101.456), "101.46");
        assert_eq!(format_value(-0.5), "-0.50");
    }
}
