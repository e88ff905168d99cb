// File: crates/dashboard-core/src/indicator/bollinger.rs
// Summary: Bollinger bands (SMA +/- k population standard deviations) over closes.

use serde::{Deserialize, Serialize};

use crate::bar::PriceSeries;
use crate::indicator::rolling::{rolling_mean, rolling_std};
use crate::indicator::{Indicator, IndicatorSeries};

/// Bollinger Bands indicator.
///
/// Consists of:
/// - Middle band: SMA(20) of close
/// - Upper band: SMA + 2 * StdDev
/// - Lower band: SMA - 2 * StdDev
///
/// StdDev is the population deviation over the same trailing window.
pub struct BollingerBands {
    period: usize,
    std_dev_multiplier: f64,
}

impl Default for BollingerBands {
    fn default() -> Self {
        Self {
            period: 20,
            std_dev_multiplier: 2.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bands {
    pub sma: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

impl BollingerBands {
    pub fn new(period: usize, std_dev_multiplier: f64) -> Self {
        Self { period, std_dev_multiplier }
    }

    pub fn calculate(&self, series: &PriceSeries) -> Bands {
        let closes: Vec<Option<f64>> = series.closes().into_iter().map(Some).collect();
        let dates = series.dates();

        let sma = rolling_mean(&closes, self.period);
        let std = rolling_std(&closes, self.period);
        let k = self.std_dev_multiplier;

        let band = |sign: f64| -> Vec<Option<f64>> {
            sma.iter()
                .zip(&std)
                .map(|(&m, &s)| Some(m? + sign * k * s?))
                .collect()
        };
        let upper = band(1.0);
        let lower = band(-1.0);

        Bands {
            upper: IndicatorSeries::new("Upper Band", &dates, upper),
            lower: IndicatorSeries::new("Lower Band", &dates, lower),
            sma: IndicatorSeries::new("SMA", &dates, sma),
        }
    }
}

impl Indicator for BollingerBands {
    fn id(&self) -> &'static str {
        "bollinger"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, series: &PriceSeries) -> Vec<IndicatorSeries> {
        let bands = self.calculate(series);
        vec![bands.upper, bands.lower, bands.sma]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicator::test_support::series_from_closes;

    #[test]
    fn test_bollinger_insufficient_data() {
        let bands = BollingerBands::default().calculate(&series_from_closes(&[10.0; 19]));
        assert_eq!(bands.sma.len(), 19);
        assert!(bands.sma.values().iter().all(Option::is_none));
        assert!(bands.upper.values().iter().all(Option::is_none));
        assert!(bands.lower.values().iter().all(Option::is_none));
    }

    #[test]
    fn test_bollinger_first_defined_index() {
        let closes: Vec<f64> = (0..25).map(|i| 10.0 + i as f64).collect();
        let bands = BollingerBands::default().calculate(&series_from_closes(&closes));
        assert_eq!(bands.sma.first_defined_index(), Some(19));
        assert_eq!(bands.upper.first_defined_index(), Some(19));
        assert_eq!(bands.lower.first_defined_index(), Some(19));
    }

    #[test]
    fn test_bollinger_constant_price_collapses() {
        let bands = BollingerBands::default().calculate(&series_from_closes(&[100.0; 30]));
        for i in 19..30 {
            assert_eq!(bands.sma.value_at(i), Some(100.0));
            assert_eq!(bands.upper.value_at(i), Some(100.0));
            assert_eq!(bands.lower.value_at(i), Some(100.0));
        }
    }

    #[test]
    fn test_bollinger_flat_inexact_price_collapses() {
        let bands = BollingerBands::default().calculate(&series_from_closes(&[101.7; 30]));
        for i in 19..30 {
            assert_eq!(bands.sma.value_at(i), Some(101.7));
            assert_eq!(bands.upper.value_at(i), Some(101.7));
            assert_eq!(bands.lower.value_at(i), Some(101.7));
        }
    }

    #[test]
    fn test_bollinger_band_ordering() {
        let closes: Vec<f64> = (0..90).map(|i| 50.0 + (i as f64 * 0.3).sin() * 4.0 + i as f64 * 0.1).collect();
        let bands = BollingerBands::default().calculate(&series_from_closes(&closes));
        for i in 0..closes.len() {
            if let (Some(u), Some(m), Some(l)) = (bands.upper.value_at(i), bands.sma.value_at(i), bands.lower.value_at(i)) {
                assert!(u >= m && m >= l, "bands out of order at {i}: {u} {m} {l}");
            }
        }
    }

    #[test]
    fn test_bollinger_known_width() {
        // window of {2, 4, 4, 4, 5, 5, 7, 9}: mean 5, population std 2
        let bands = BollingerBands::new(8, 2.0)
            .calculate(&series_from_closes(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]));
        assert_eq!(bands.sma.value_at(7), Some(5.0));
        assert_eq!(bands.upper.value_at(7), Some(9.0));
        assert_eq!(bands.lower.value_at(7), Some(1.0));
    }
}
