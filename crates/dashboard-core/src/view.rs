// File: crates/dashboard-core/src/view.rs
// Summary: Autoscale helpers over a chart descriptor: shared date range and per-row value ranges.

use chrono::NaiveDate;

use crate::chart::ChartDescriptor;
use crate::series::{SeriesType, TraceData};

/// Earliest and latest date across all traces (the shared x-axis).
pub fn x_range(chart: &ChartDescriptor) -> Option<(NaiveDate, NaiveDate)> {
    chart
        .traces
        .iter()
        .flat_map(|t| t.dates())
        .fold(None, |acc, d| match acc {
            None => Some((d, d)),
            Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
        })
}

/// Value range of every trace in `row`, padded by 2% on each side.
/// Bars always include 0.0; gaps are skipped. `None` when the row has no values.
pub fn row_value_range(chart: &ChartDescriptor, row: usize) -> Option<(f64, f64)> {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    let mut any = false;
    for t in chart.traces_in_row(row) {
        match &t.data {
            TraceData::Ohlc(points) => {
                for c in points {
                    y_min = y_min.min(c.low);
                    y_max = y_max.max(c.high);
                    any = true;
                }
            }
            TraceData::Xy(points) => {
                for &(_, v) in points {
                    if let Some(v) = v {
                        y_min = y_min.min(v);
                        y_max = y_max.max(v);
                        any = true;
                    }
                }
                if t.series_type == SeriesType::Bar && any {
                    y_min = y_min.min(0.0);
                    y_max = y_max.max(0.0);
                }
            }
        }
    }
    if !any || !y_min.is_finite() || !y_max.is_finite() {
        return None;
    }
    if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
    let m = (y_max - y_min) * 0.02;
    Some((y_min - m, y_max + m))
}
