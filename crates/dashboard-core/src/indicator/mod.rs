// File: crates/dashboard-core/src/indicator/mod.rs
// Summary: Indicator series model, the Indicator trait and the engine that computes enabled indicators.

pub mod bollinger;
pub mod macd;
pub mod rolling;
pub mod rsi;

pub use bollinger::{Bands, BollingerBands};
pub use macd::{Macd, MacdLines};
pub use rsi::Rsi;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bar::PriceSeries;
use crate::config::{IndicatorConfig, IndicatorParams};

/// Named values aligned 1:1 with the dates of the source `PriceSeries`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    pub name: String,
    pub points: Vec<(NaiveDate, Option<f64>)>,
}

impl IndicatorSeries {
    pub fn new(name: impl Into<String>, dates: &[NaiveDate], values: Vec<Option<f64>>) -> Self {
        debug_assert_eq!(dates.len(), values.len());
        Self { name: name.into(), points: dates.iter().copied().zip(values).collect() }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|&(_, v)| v).collect()
    }

    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.points.get(i).and_then(|&(_, v)| v)
    }

    /// Defined values only, with their dates.
    pub fn defined(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.points.iter().filter_map(|&(d, v)| v.map(|v| (d, v)))
    }

    pub fn first_defined_index(&self) -> Option<usize> {
        self.points.iter().position(|(_, v)| v.is_some())
    }
}

/// Uniform view over the indicator implementations.
pub trait Indicator {
    fn id(&self) -> &'static str;
    /// Bars needed before the first defined value.
    fn min_periods(&self) -> usize;
    fn compute(&self, series: &PriceSeries) -> Vec<IndicatorSeries>;
}

/// Output of one engine pass; `None` for indicators that were not enabled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub rsi: Option<IndicatorSeries>,
    pub macd: Option<MacdLines>,
    pub bollinger: Option<Bands>,
}

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute every enabled indicator. Pure: the same inputs give the same set.
    pub fn compute(series: &PriceSeries, config: &IndicatorConfig, params: &IndicatorParams) -> IndicatorSet {
        let rsi = config.rsi.then(|| Rsi::new(params.rsi_window));
        let macd = config
            .macd
            .then(|| Macd::new(params.macd_short, params.macd_long, params.macd_signal));
        let bollinger = config
            .bollinger
            .then(|| BollingerBands::new(params.bollinger_window, params.bollinger_std_dev));

        let enabled: Vec<&dyn Indicator> = [
            rsi.as_ref().map(|i| i as &dyn Indicator),
            macd.as_ref().map(|i| i as &dyn Indicator),
            bollinger.as_ref().map(|i| i as &dyn Indicator),
        ]
        .into_iter()
        .flatten()
        .collect();
        let ids: Vec<&str> = enabled.iter().map(|i| i.id()).collect();
        debug!(bars = series.len(), indicators = ?ids, "computing indicators");
        for id in warming_up(series, &enabled) {
            debug!(indicator = id, bars = series.len(), "series shorter than warm-up; output stays undefined");
        }

        IndicatorSet {
            rsi: rsi.map(|i| i.calculate(series)),
            macd: macd.map(|i| i.calculate(series)),
            bollinger: bollinger.map(|i| i.calculate(series)),
        }
    }
}

/// Ids of the indicators that cannot produce a value for a series this short.
fn warming_up(series: &PriceSeries, indicators: &[&dyn Indicator]) -> Vec<&'static str> {
    indicators
        .iter()
        .filter(|i| series.len() < i.min_periods())
        .map(|i| i.id())
        .collect()
}
