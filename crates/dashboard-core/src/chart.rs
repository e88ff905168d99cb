// File: crates/dashboard-core/src/chart.rs
// Summary: Chart assembler; turns prices, computed indicators and a panel plan into a multi-row chart descriptor.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::axis::RowAxis;
use crate::bar::PriceSeries;
use crate::indicator::IndicatorSet;
use crate::layout::{PanelPlan, PanelRole};
use crate::series::{StyleHints, Trace};
use crate::theme::Theme;
use crate::types::{HEIGHT, VERTICAL_SPACING, WIDTH};

/// Caller-controlled knobs for assembly.
#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, theme: Theme::default() }
    }
}

/// Global layout parameters shared by every row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub rows: usize,
    /// Raw height weights, one per row in row order.
    pub row_heights: Vec<f64>,
    pub vertical_spacing: f64,
    pub shared_x_axis: bool,
    pub range_slider_visible: bool,
}

/// Ordered (row, trace) list plus per-row axis titles and global layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    pub traces: Vec<Trace>,
    pub axes: Vec<RowAxis>,
    pub layout: ChartLayout,
}

impl ChartDescriptor {
    pub fn traces_in_row(&self, row: usize) -> impl Iterator<Item = &Trace> + '_ {
        self.traces.iter().filter(move |t| t.row == row)
    }

    pub fn axis_title(&self, row: usize) -> Option<&str> {
        self.axes.iter().find(|a| a.row == row).map(|a| a.title.as_str())
    }

    pub fn trace(&self, name: &str) -> Option<&Trace> {
        self.traces.iter().find(|t| t.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the chart descriptor. Indicators are consumed as computed; a missing
/// indicator, or a plan without a row for it, simply leaves its traces out.
pub fn assemble(
    prices: &PriceSeries,
    indicators: &IndicatorSet,
    plan: &PanelPlan,
    opts: &ChartOptions,
) -> ChartDescriptor {
    let theme = &opts.theme;
    let price_row = plan.row_of(PanelRole::Price).unwrap_or(1);
    let volume_row = plan.volume_row();
    let mut traces = Vec::new();

    traces.push(
        Trace::candlestick("Candlestick", price_row, prices.bars()).with_style(StyleHints {
            increasing: Some(theme.candle_up),
            decreasing: Some(theme.candle_down),
            ..StyleHints::default()
        }),
    );

    let volume = prices.bars().iter().map(|b| (b.date, Some(b.volume as f64))).collect();
    traces.push(Trace::bar("Volume", volume_row, volume).with_style(StyleHints::color(theme.volume)));

    if let Some(rsi) = &indicators.rsi {
        match plan.row_of(PanelRole::Rsi) {
            Some(row) => traces.push(Trace::line(row, rsi).with_style(StyleHints::color(theme.rsi))),
            None => warn!("RSI computed but the panel plan has no RSI row; skipping"),
        }
    }

    if let Some(lines) = &indicators.macd {
        match plan.row_of(PanelRole::Macd) {
            Some(row) => {
                traces.push(Trace::line(row, &lines.macd).with_style(StyleHints::color(theme.macd)));
                traces.push(Trace::line(row, &lines.signal).with_style(StyleHints::color(theme.signal)));
            }
            None => warn!("MACD computed but the panel plan has no MACD row; skipping"),
        }
    }

    // Overlays come after the candlestick so they draw on top of it.
    if let Some(bands) = &indicators.bollinger {
        if plan.bollinger_overlay {
            traces.push(Trace::line(price_row, &bands.upper).with_style(StyleHints::color(theme.upper_band).with_width(1.0)));
            traces.push(Trace::line(price_row, &bands.lower).with_style(StyleHints::color(theme.lower_band).with_width(1.0)));
            traces.push(Trace::line(price_row, &bands.sma).with_style(StyleHints::color(theme.sma).with_width(1.0)));
        } else {
            warn!("Bollinger bands computed but overlay disabled in the panel plan; skipping");
        }
    }

    let axes = plan
        .panels
        .iter()
        .map(|p| RowAxis::new(p.row, p.role.axis_title()))
        .collect();

    let layout = ChartLayout {
        width: opts.width,
        height: opts.height,
        rows: plan.rows(),
        row_heights: plan.row_heights(),
        vertical_spacing: VERTICAL_SPACING,
        shared_x_axis: true,
        range_slider_visible: false,
    };

    debug!(traces = traces.len(), rows = layout.rows, "assembled chart");
    ChartDescriptor { traces, axes, layout }
}
