// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports the price model, indicator engine, panel planner and chart assembler.

pub mod bar;
pub mod error;
pub mod types;
pub mod config;
pub mod indicator;
pub mod layout;
pub mod series;
pub mod axis;
pub mod theme;
pub mod chart;
pub mod view;
pub mod source;
pub mod dashboard;

pub use bar::{Bar, PriceSeries};
pub use error::{FetchError, SeriesError};
pub use config::{DashboardConfig, IndicatorConfig, IndicatorParams};
pub use indicator::{BollingerBands, Indicator, IndicatorEngine, IndicatorSeries, IndicatorSet, Macd, Rsi};
pub use layout::{plan, Panel, PanelPlan, PanelRole};
pub use series::{OhlcPoint, SeriesType, StyleHints, Trace, TraceData};
pub use axis::RowAxis;
pub use theme::{Rgba, Theme};
pub use chart::{assemble, ChartDescriptor, ChartLayout, ChartOptions};
pub use source::{CompanyInfo, CsvPriceSource, PriceSource};
pub use dashboard::{Dashboard, DashboardView};
