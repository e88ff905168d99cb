// File: crates/dashboard-core/src/indicator/macd.rs
// Summary: MACD line (EMA fast - EMA slow) and its EMA signal line.

use serde::{Deserialize, Serialize};

use crate::bar::PriceSeries;
use crate::indicator::rolling::ema;
use crate::indicator::{Indicator, IndicatorSeries};

/// MACD indicator.
///
/// - MACD Line = EMA(12) - EMA(26) of close
/// - Signal Line = EMA(9) of MACD Line
///
/// EMAs are seeded with the first value, so both lines are defined from the first bar.
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

/// The two MACD lines, aligned with the source series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MacdLines {
    pub macd: IndicatorSeries,
    pub signal: IndicatorSeries,
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self { fast_period, slow_period, signal_period }
    }

    pub fn calculate(&self, series: &PriceSeries) -> MacdLines {
        let closes = series.closes();
        let dates = series.dates();

        let fast = ema(&closes, self.fast_period);
        let slow = ema(&closes, self.slow_period);
        let macd_line: Vec<f64> = fast.iter().zip(&slow).map(|(f, s)| f - s).collect();
        let signal_line = ema(&macd_line, self.signal_period);

        MacdLines {
            macd: IndicatorSeries::new("MACD", &dates, macd_line.into_iter().map(Some).collect()),
            signal: IndicatorSeries::new("Signal Line", &dates, signal_line.into_iter().map(Some).collect()),
        }
    }
}

impl Indicator for Macd {
    fn id(&self) -> &'static str {
        "macd"
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, series: &PriceSeries) -> Vec<IndicatorSeries> {
        let lines = self.calculate(series);
        vec![lines.macd, lines.signal]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::test_support::series_from_closes;

    #[test]
    fn test_macd_defined_from_first_bar() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i as f64 * 0.4).cos() * 3.0).collect();
        let lines = Macd::default().calculate(&series_from_closes(&closes));
        assert_eq!(lines.macd.len(), 40);
        assert_eq!(lines.signal.len(), 40);
        assert!(lines.macd.values().iter().all(Option::is_some));
        assert!(lines.signal.values().iter().all(Option::is_some));
    }

    #[test]
    fn test_macd_first_bar_is_zero() {
        let lines = Macd::default().calculate(&series_from_closes(&[42.0, 43.0]));
        assert_eq!(lines.macd.value_at(0), Some(0.0));
        assert_eq!(lines.signal.value_at(0), Some(0.0));
    }

    #[test]
    fn test_macd_positive_in_uptrend() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let lines = Macd::default().calculate(&series_from_closes(&closes));
        let macd = lines.macd.value_at(59).unwrap();
        let signal = lines.signal.value_at(59).unwrap();
        assert!(macd > 0.0);
        // signal lags the MACD line while it rises
        assert!(macd > signal);
    }

    #[test]
    fn test_macd_known_second_value() {
        // fast alpha 2/13, slow alpha 2/27, step of +13 on the second bar
        let lines = Macd::default().calculate(&series_from_closes(&[100.0, 113.0]));
        let expected = 13.0 * (2.0 / 13.0) - 13.0 * (2.0 / 27.0);
        assert!((lines.macd.value_at(1).unwrap() - expected).abs() < 1e-9);
        let expected_signal = expected * (2.0 / 10.0);
        assert!((lines.signal.value_at(1).unwrap() - expected_signal).abs() < 1e-9);
    }

    #[test]
    fn test_macd_names() {
        let lines = Macd::default().calculate(&series_from_closes(&[1.0]));
        assert_eq!(lines.macd.name, "MACD");
        assert_eq!(lines.signal.name, "Signal Line");
    }
}
