// File: crates/dashboard-core/src/series.rs
// Summary: Renderer-agnostic trace model (candlestick, line and bar data placed on a chart row).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::bar::Bar;
use crate::indicator::IndicatorSeries;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesType {
    Candlestick,
    Line,
    Bar,         // vertical bars from 0.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OhlcPoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl From<&Bar> for OhlcPoint {
    fn from(b: &Bar) -> Self {
        Self { date: b.date, open: b.open, high: b.high, low: b.low, close: b.close }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "points", rename_all = "lowercase")]
pub enum TraceData {
    Ohlc(Vec<OhlcPoint>),
    /// `None` is a gap; renderers must not draw through it.
    Xy(Vec<(NaiveDate, Option<f64>)>),
}

/// Optional drawing hints; a backend may ignore any of them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub increasing: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decreasing: Option<Rgba>,
}

impl StyleHints {
    pub fn color(color: Rgba) -> Self {
        Self { color: Some(color), ..Self::default() }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    /// 1-based chart row.
    pub row: usize,
    pub series_type: SeriesType,
    pub data: TraceData,
    pub style: StyleHints,
}

impl Trace {
    pub fn candlestick(name: impl Into<String>, row: usize, bars: &[Bar]) -> Self {
        Self {
            name: name.into(),
            row,
            series_type: SeriesType::Candlestick,
            data: TraceData::Ohlc(bars.iter().map(OhlcPoint::from).collect()),
            style: StyleHints::default(),
        }
    }

    pub fn line(row: usize, series: &IndicatorSeries) -> Self {
        Self {
            name: series.name.clone(),
            row,
            series_type: SeriesType::Line,
            data: TraceData::Xy(series.points.clone()),
            style: StyleHints::default(),
        }
    }

    pub fn bar(name: impl Into<String>, row: usize, points: Vec<(NaiveDate, Option<f64>)>) -> Self {
        Self {
            name: name.into(),
            row,
            series_type: SeriesType::Bar,
            data: TraceData::Xy(points),
            style: StyleHints::default(),
        }
    }

    pub fn with_style(mut self, style: StyleHints) -> Self {
        self.style = style;
        self
    }

    pub fn len(&self) -> usize {
        match &self.data {
            TraceData::Ohlc(p) => p.len(),
            TraceData::Xy(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Dates covered by the trace, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        match &self.data {
            TraceData::Ohlc(p) => p.iter().map(|c| c.date).collect(),
            TraceData::Xy(p) => p.iter().map(|&(d, _)| d).collect(),
        }
    }
}
