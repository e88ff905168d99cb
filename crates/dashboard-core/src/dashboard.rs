// File: crates/dashboard-core/src/dashboard.rs
// Summary: One render pass: configuration -> fetch -> indicators -> panel plan -> chart descriptor.

use tracing::{info, warn};

use crate::bar::PriceSeries;
use crate::chart::{assemble, ChartDescriptor, ChartOptions};
use crate::config::DashboardConfig;
use crate::indicator::IndicatorEngine;
use crate::layout::plan;
use crate::source::{CompanyInfo, PriceSource};
use crate::theme::Theme;

/// Everything the display shell shows for one ticker.
#[derive(Clone, Debug)]
pub struct DashboardView {
    pub ticker: String,
    /// "<TICKER> from <start> to <end>"
    pub title: String,
    pub company: Option<CompanyInfo>,
    /// Last close rounded to cents; `None` without data.
    pub current_price: Option<f64>,
    pub chart: ChartDescriptor,
}

impl DashboardView {
    pub fn has_data(&self) -> bool { self.current_price.is_some() }
}

pub struct Dashboard {
    theme: Theme,
}

impl Default for Dashboard {
    fn default() -> Self { Self::new(Theme::default()) }
}

impl Dashboard {
    pub fn new(theme: Theme) -> Self { Self { theme } }

    /// Run one pass. Upstream failures are logged and treated as "no data".
    pub fn render(&self, config: &DashboardConfig, source: &dyn PriceSource) -> DashboardView {
        let ticker = config.ticker.trim().to_uppercase();

        let prices = match source.fetch(&ticker, config.start, config.end) {
            Ok(series) => series,
            Err(err) => {
                warn!(%ticker, "price fetch failed, rendering without data: {err}");
                PriceSeries::empty()
            }
        };
        let company = source.company_info(&ticker).unwrap_or_else(|err| {
            warn!(%ticker, "company info unavailable: {err}");
            None
        });

        let indicators = IndicatorEngine::compute(&prices, &config.indicators, &config.params);
        let panels = plan(&config.indicators);
        let opts = ChartOptions { width: config.width, height: config.height, theme: self.theme };
        let chart = assemble(&prices, &indicators, &panels, &opts);

        info!(%ticker, bars = prices.len(), rows = panels.rows(), "dashboard rendered");
        DashboardView {
            title: format!("{} from {} to {}", ticker, config.start, config.end),
            ticker,
            company,
            current_price: prices.current_price(),
            chart,
        }
    }
}
