// File: crates/demo/src/main.rs
// Summary: Runs one dashboard pass over a CSV data directory, prints the header and writes PNG + JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use dashboard_core::{theme, CsvPriceSource, Dashboard, DashboardConfig, DashboardView};
use dashboard_render_skia::{RenderOptions, SkiaRenderer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "ticker-dashboard")]
#[command(about = "Render a stock dashboard (candles, volume, RSI, MACD, Bollinger) to PNG", long_about = None)]
struct Cli {
    /// Directory holding <TICKER>.csv and optional <TICKER>.json files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Ticker symbol (case-insensitive)
    #[arg(short, long)]
    ticker: Option<String>,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Day after the last bar of the range (YYYY-MM-DD)
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Add the RSI panel
    #[arg(long)]
    rsi: bool,

    /// Add the MACD panel
    #[arg(long)]
    macd: bool,

    /// Overlay Bollinger bands on the price panel
    #[arg(long)]
    bollinger: bool,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// Theme preset (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output path without extension; `.png` and `.json` are appended
    #[arg(short, long, default_value = "target/out/dashboard")]
    out: PathBuf,
}

impl Cli {
    /// Flags win over `DASHBOARD_*` environment values.
    fn apply(&self, mut cfg: DashboardConfig) -> DashboardConfig {
        if let Some(dir) = &self.data_dir {
            cfg.data_dir = dir.clone();
        }
        if let Some(t) = &self.ticker {
            cfg = cfg.with_ticker(t);
        }
        if let Some(d) = self.start {
            cfg.start = d;
        }
        if let Some(d) = self.end {
            cfg.end = d;
        }
        cfg.indicators.rsi |= self.rsi;
        cfg.indicators.macd |= self.macd;
        cfg.indicators.bollinger |= self.bollinger;
        if let Some(w) = self.width.filter(|w| *w > 0) {
            cfg.width = w;
        }
        if let Some(h) = self.height.filter(|h| *h > 0) {
            cfg.height = h;
        }
        cfg
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticker_dashboard=info,dashboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.apply(DashboardConfig::from_env());
    if config.end <= config.start {
        anyhow::bail!("end date {} must be after start date {}", config.end, config.start);
    }
    info!(ticker = %config.ticker, start = %config.start, end = %config.end, "starting render pass");

    let theme = theme::find(&cli.theme);
    let source = CsvPriceSource::new(&config.data_dir);
    let view = Dashboard::new(theme).render(&config, &source);
    print_header(&view);

    let png = cli.out.with_extension("png");
    let opts = RenderOptions { theme, ..RenderOptions::default() };
    SkiaRenderer::new(opts)
        .render_to_png(&view.chart, &png)
        .with_context(|| format!("failed to render {}", png.display()))?;
    println!("Wrote {}", png.display());

    let json_path = cli.out.with_extension("json");
    let json = view.chart.to_json().context("failed to serialize chart descriptor")?;
    std::fs::write(&json_path, json).with_context(|| format!("writing {}", json_path.display()))?;
    println!("Wrote {}", json_path.display());

    Ok(())
}

fn print_header(view: &DashboardView) {
    println!("### {}", view.title);
    if let Some(info) = &view.company {
        println!("{}", info.long_name);
        if !info.sector.is_empty() {
            println!("Sector: {}", info.sector);
        }
        if !info.industry.is_empty() {
            println!("Industry: {}", info.industry);
        }
        if !info.summary.is_empty() {
            println!("{}", info.summary);
        }
    }
    match view.current_price {
        Some(p) => println!("Current price: {p:.2}"),
        None => println!("No price data for {} in the selected range", view.ticker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_environment() {
        let env_cfg = DashboardConfig::from_lookup(|key| match key {
            "DASHBOARD_TICKER" => Some("msft".into()),
            "DASHBOARD_MACD" => Some("true".into()),
            _ => None,
        });
        let cli = Cli::parse_from(["ticker-dashboard", "--ticker", "nvda", "--rsi", "--start", "2024-02-01"]);
        let cfg = cli.apply(env_cfg);
        assert_eq!(cfg.ticker, "NVDA");
        assert!(cfg.indicators.rsi && cfg.indicators.macd && !cfg.indicators.bollinger);
        assert_eq!(cfg.start, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn zero_size_flags_are_ignored() {
        let cli = Cli::parse_from(["ticker-dashboard", "--width", "0", "--height", "600"]);
        let cfg = cli.apply(DashboardConfig::default());
        assert_eq!((cfg.width, cfg.height), (900, 600));
    }
}
