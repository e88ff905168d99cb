// File: crates/dashboard-render-skia/src/rows.rs
// Summary: Splits the plot area into stacked row bands from the descriptor's height weights.

use dashboard_core::ChartLayout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowBand {
    /// 1-based chart row.
    pub row: usize,
    pub top: f32,
    pub bottom: f32,
}

impl RowBand {
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Row bands between `top` and `bottom` pixels, top row first.
/// Gaps between rows are `vertical_spacing` of the full plot height.
pub fn row_bands(layout: &ChartLayout, top: f32, bottom: f32) -> Vec<RowBand> {
    let rows = layout.row_heights.len();
    if rows == 0 {
        return Vec::new();
    }
    let total_px = (bottom - top).max(0.0);
    let gap = layout.vertical_spacing as f32 * total_px;
    let usable = (total_px - gap * (rows - 1) as f32).max(0.0);
    let weight_sum: f64 = layout.row_heights.iter().sum();
    let weight_sum = if weight_sum > 0.0 { weight_sum } else { rows as f64 };

    let mut y = top;
    layout
        .row_heights
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let h = (w / weight_sum) as f32 * usable;
            let band = RowBand { row: i + 1, top: y, bottom: y + h };
            y += h + gap;
            band
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(heights: Vec<f64>, spacing: f64) -> ChartLayout {
        ChartLayout {
            width: 900,
            height: 500,
            rows: heights.len(),
            row_heights: heights,
            vertical_spacing: spacing,
            shared_x_axis: true,
            range_slider_visible: false,
        }
    }

    #[test]
    fn bands_follow_weights() {
        let bands = row_bands(&layout(vec![0.6, 0.2, 0.2], 0.0), 0.0, 100.0);
        assert_eq!(bands.len(), 3);
        assert!((bands[0].height() - 60.0).abs() < 1e-3);
        assert!((bands[1].height() - 20.0).abs() < 1e-3);
        assert!((bands[2].bottom - 100.0).abs() < 1e-3);
    }

    #[test]
    fn spacing_separates_rows() {
        let bands = row_bands(&layout(vec![0.6, 0.2], 0.02), 0.0, 400.0);
        assert!((bands[1].top - bands[0].bottom - 8.0).abs() < 1e-3);
        assert!((bands[1].bottom - 400.0).abs() < 1e-3);
    }

    #[test]
    fn no_rows_no_bands() {
        assert!(row_bands(&layout(vec![], 0.02), 0.0, 100.0).is_empty());
    }
}
