// File: crates/dashboard-core/src/source.rs
// Summary: Price-source contract and a CSV-directory implementation (<dir>/<TICKER>.csv + optional .json profile).

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::bar::{Bar, PriceSeries};
use crate::error::FetchError;

/// Company profile shown above the chart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub long_name: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub summary: String,
}

/// Upstream provider of daily price history.
pub trait PriceSource {
    /// Daily bars with `start <= date < end`.
    fn fetch(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries, FetchError>;

    fn company_info(&self, _ticker: &str) -> Result<Option<CompanyInfo>, FetchError> {
        Ok(None)
    }
}

/// Reads `<dir>/<TICKER>.csv` with date/open/high/low/close/volume columns.
#[derive(Clone, Debug)]
pub struct CsvPriceSource {
    dir: PathBuf,
}

impl CsvPriceSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, ticker: &str, ext: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", ticker.to_uppercase(), ext))
    }
}

impl PriceSource for CsvPriceSource {
    fn fetch(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<PriceSeries, FetchError> {
        let path = self.path_for(ticker, "csv");
        if !path.exists() {
            return Err(FetchError::NotFound(ticker.to_string()));
        }
        let mut bars = load_ohlcv_csv(&path)?;
        let total = bars.len();
        bars.retain(|b| b.date >= start && b.date < end);
        bars.sort_by_key(|b| b.date);
        debug!(ticker, total, kept = bars.len(), "loaded {}", path.display());
        Ok(PriceSeries::try_new(bars)?)
    }

    fn company_info(&self, ticker: &str) -> Result<Option<CompanyInfo>, FetchError> {
        let path = self.path_for(ticker, "json");
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }
}

/// Load an OHLCV CSV into bars (file order). Blank or `null` rows are skipped.
pub fn load_ohlcv_csv(path: &Path) -> Result<Vec<Bar>, FetchError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_date = idx(&["date", "datetime", "time", "timestamp"]).ok_or(FetchError::MissingColumn("date"))?;
    let i_open = idx(&["open", "o"]).ok_or(FetchError::MissingColumn("open"))?;
    let i_high = idx(&["high", "h"]).ok_or(FetchError::MissingColumn("high"))?;
    let i_low = idx(&["low", "l"]).ok_or(FetchError::MissingColumn("low"))?;
    let i_close = idx(&["close", "c", "adj_close", "close_price"]).ok_or(FetchError::MissingColumn("close"))?;
    let i_volume = idx(&["volume", "vol", "v"]).ok_or(FetchError::MissingColumn("volume"))?;

    let mut out = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = n + 2; // 1-based, after the header line
        let field = |i: usize| rec.get(i).unwrap_or("");

        let cells = [i_open, i_high, i_low, i_close, i_volume].map(field);
        if cells.iter().any(|c| c.is_empty() || c.eq_ignore_ascii_case("null")) {
            warn!(row, "skipping row with missing values");
            continue;
        }

        let date = parse_date(field(i_date))
            .ok_or_else(|| FetchError::Parse { row, message: format!("bad date '{}'", field(i_date)) })?;
        let num = |s: &str| -> Result<f64, FetchError> {
            s.parse::<f64>()
                .map_err(|_| FetchError::Parse { row, message: format!("bad number '{s}'") })
        };
        let volume = num(cells[4])?;
        if !volume.is_finite() || volume > u64::MAX as f64 {
            return Err(FetchError::Parse { row, message: "non-finite volume".to_string() });
        }
        if volume < 0.0 {
            return Err(FetchError::Parse { row, message: "negative volume".to_string() });
        }

        out.push(Bar::try_new(date, num(cells[0])?, num(cells[1])?, num(cells[2])?, num(cells[3])?, volume.round() as u64)?);
    }
    Ok(out)
}

/// `YYYY-MM-DD`, optionally followed by a time part.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let day = s.get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}
