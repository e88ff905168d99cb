// File: crates/dashboard-core/src/indicator/rsi.rs
// Summary: Relative Strength Index over trailing means of close-to-close gains and losses.

use crate::bar::PriceSeries;
use crate::indicator::rolling::rolling_mean;
use crate::indicator::{Indicator, IndicatorSeries};

/// RSI (Relative Strength Index) indicator.
///
/// Compares the trailing mean of close-to-close gains with that of losses.
/// Values range from 0-100. The averages are plain trailing means, not
/// Wilder's smoothed averages.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// RSI for every bar. The first `period` entries have no value, and a window
    /// with neither gains nor losses (0/0) has no value either.
    pub fn calculate(&self, series: &PriceSeries) -> IndicatorSeries {
        let closes = series.closes();

        // delta[0] has no predecessor
        let deltas: Vec<Option<f64>> = std::iter::once(None)
            .chain(closes.windows(2).map(|w| Some(w[1] - w[0])))
            .take(closes.len())
            .collect();

        let gains: Vec<Option<f64>> = deltas.iter().map(|d| d.map(|d| d.max(0.0))).collect();
        let losses: Vec<Option<f64>> = deltas.iter().map(|d| d.map(|d| (-d).max(0.0))).collect();

        let avg_gain = rolling_mean(&gains, self.period);
        let avg_loss = rolling_mean(&losses, self.period);

        let values = avg_gain
            .into_iter()
            .zip(avg_loss)
            .map(|(g, l)| relative_strength_index(g?, l?))
            .collect();

        IndicatorSeries::new("RSI", &series.dates(), values)
    }
}

fn relative_strength_index(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        // RS is +inf (saturates at 100) or 0/0 (undefined)
        return (avg_gain > 0.0).then_some(100.0);
    }
    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

impl Indicator for Rsi {
    fn id(&self) -> &'static str {
        "rsi"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, series: &PriceSeries) -> Vec<IndicatorSeries> {
        vec![self.calculate(series)]
    }
}
