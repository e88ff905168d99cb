// File: crates/dashboard-core/src/bar.rs
// Summary: Daily OHLCV bar and the date-ordered PriceSeries that indicators consume.
// Notes:
// - Fields stay public so callers can pattern-match, but the checked constructors
//   are the only way the crate itself builds bars and series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Bar {
    /// Try to construct a bar enforcing OHLC invariants:
    /// l <= min(o,c) and h >= max(o,c), and l <= h.
    pub fn try_new(
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Result<Self, SeriesError> {
        let invalid = |reason| Err(SeriesError::InvalidBar { date, reason });
        if ![open, high, low, close].iter().all(|v| v.is_finite()) {
            return invalid("non-finite price");
        }
        if low > open.min(close) { return invalid("low above min(open,close)"); }
        if high < open.max(close) { return invalid("high below max(open,close)"); }
        if low > high { return invalid("low above high"); }
        Ok(Self { date, open, high, low, close, volume })
    }
}

/// Bars ordered strictly by date. Empty means "no data".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn try_new(bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for pair in bars.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(SeriesError::UnorderedDates { prev: pair[0].date, next: pair[1].date });
            }
        }
        Ok(Self { bars })
    }

    pub fn empty() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.bars.len() }

    pub fn is_empty(&self) -> bool { self.bars.is_empty() }

    pub fn bars(&self) -> &[Bar] { &self.bars }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last_close(&self) -> Option<f64> {
        self.bars.last().map(|b| b.close)
    }

    /// Latest close rounded to cents, as shown in the dashboard header.
    pub fn current_price(&self) -> Option<f64> {
        self.last_close().map(|c| (c * 100.0).round() / 100.0)
    }
}
