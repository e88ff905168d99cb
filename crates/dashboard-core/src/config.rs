// File: crates/dashboard-core/src/config.rs
// Summary: Indicator toggles, fixed indicator parameters and the dashboard's input configuration.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::{HEIGHT, WIDTH};

/// Which indicators the user enabled. Each flag is independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rsi: bool,
    pub macd: bool,
    pub bollinger: bool,
}

impl IndicatorConfig {
    pub const fn new(rsi: bool, macd: bool, bollinger: bool) -> Self {
        Self { rsi, macd, bollinger }
    }

    pub const fn all() -> Self { Self::new(true, true, true) }
}

/// Window parameters for every indicator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub rsi_window: usize,
    pub macd_short: usize,
    pub macd_long: usize,
    pub macd_signal: usize,
    pub bollinger_window: usize,
    pub bollinger_std_dev: f64,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            rsi_window: 14,
            macd_short: 12,
            macd_long: 26,
            macd_signal: 9,
            bollinger_window: 20,
            bollinger_std_dev: 2.0,
        }
    }
}

/// Everything a single render pass needs from the (external) input widgets.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    /// Symbol, upper-cased on construction.
    pub ticker: String,
    pub start: NaiveDate,
    /// Exclusive upper bound of the requested range.
    pub end: NaiveDate,
    pub indicators: IndicatorConfig,
    pub params: IndicatorParams,
    pub width: u32,
    pub height: u32,
    /// Directory read by the CSV price source.
    pub data_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: chrono::Local::now().date_naive(),
            indicators: IndicatorConfig::default(),
            params: IndicatorParams::default(),
            width: WIDTH,
            height: HEIGHT,
            data_dir: PathBuf::from("data"),
        }
    }
}

impl DashboardConfig {
    pub fn with_ticker(mut self, ticker: &str) -> Self {
        self.ticker = ticker.trim().to_uppercase();
        self
    }

    /// Load configuration from `DASHBOARD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`. Unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(t) = lookup("DASHBOARD_TICKER") {
            cfg = cfg.with_ticker(&t);
        }
        if let Some(d) = parse_var(&lookup, "DASHBOARD_START", |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()) {
            cfg.start = d;
        }
        if let Some(d) = parse_var(&lookup, "DASHBOARD_END", |s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()) {
            cfg.end = d;
        }
        if let Some(b) = parse_var(&lookup, "DASHBOARD_RSI", parse_flag) {
            cfg.indicators.rsi = b;
        }
        if let Some(b) = parse_var(&lookup, "DASHBOARD_MACD", parse_flag) {
            cfg.indicators.macd = b;
        }
        if let Some(b) = parse_var(&lookup, "DASHBOARD_BOLLINGER", parse_flag) {
            cfg.indicators.bollinger = b;
        }
        if let Some(w) = parse_var(&lookup, "DASHBOARD_WIDTH", |s| s.parse::<u32>().ok().filter(|v| *v > 0)) {
            cfg.width = w;
        }
        if let Some(h) = parse_var(&lookup, "DASHBOARD_HEIGHT", |s| s.parse::<u32>().ok().filter(|v| *v > 0)) {
            cfg.height = h;
        }
        if let Some(dir) = lookup("DASHBOARD_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        cfg
    }
}

fn parse_var<F, T, P>(lookup: &F, key: &str, parse: P) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let raw = lookup(key)?;
    let parsed = parse(raw.trim());
    if parsed.is_none() {
        warn!("Ignoring invalid value for {}: {:?}", key, raw);
    }
    parsed
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn test_defaults_match_dashboard_widgets() {
        let cfg = DashboardConfig::from_lookup(|_| None);
        assert_eq!(cfg.ticker, "AAPL");
        assert_eq!(cfg.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(cfg.indicators, IndicatorConfig::default());
        assert_eq!((cfg.width, cfg.height), (900, 500));
    }

    #[test]
    fn test_env_overrides() {
        let cfg = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_TICKER", " msft "),
            ("DASHBOARD_START", "2023-06-01"),
            ("DASHBOARD_RSI", "true"),
            ("DASHBOARD_MACD", "1"),
            ("DASHBOARD_BOLLINGER", "off"),
            ("DASHBOARD_WIDTH", "1200"),
        ]));
        assert_eq!(cfg.ticker, "MSFT");
        assert_eq!(cfg.start, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(cfg.indicators, IndicatorConfig::new(true, true, false));
        assert_eq!(cfg.width, 1200);
        assert_eq!(cfg.height, 500);
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let cfg = DashboardConfig::from_lookup(lookup_from(&[
            ("DASHBOARD_START", "yesterday"),
            ("DASHBOARD_RSI", "maybe"),
            ("DASHBOARD_HEIGHT", "0"),
        ]));
        assert_eq!(cfg.start, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(!cfg.indicators.rsi);
        assert_eq!(cfg.height, 500);
    }

    #[test]
    fn test_default_params() {
        let p = IndicatorParams::default();
        assert_eq!(p.rsi_window, 14);
        assert_eq!((p.macd_short, p.macd_long, p.macd_signal), (12, 26, 9));
        assert_eq!(p.bollinger_window, 20);
        assert_eq!(p.bollinger_std_dev, 2.0);
    }
}
