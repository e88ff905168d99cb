// File: crates/dashboard-core/src/layout.rs
// Summary: Panel planner; maps enabled indicators to stacked chart rows and height weights.

use serde::{Deserialize, Serialize};

use crate::config::IndicatorConfig;
use crate::types::{PANEL_ROW_WEIGHT, PRICE_ROW_WEIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelRole {
    Price,
    Rsi,
    Macd,
    Volume,
}

impl PanelRole {
    /// Y-axis title shown for the row.
    pub fn axis_title(&self) -> &'static str {
        match self {
            PanelRole::Price => "Price",
            PanelRole::Rsi => "RSI",
            PanelRole::Macd => "MACD",
            PanelRole::Volume => "Volume",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub role: PanelRole,
    /// 1-based row index, top to bottom.
    pub row: usize,
    /// Relative height weight.
    pub height: f64,
}

/// Ordered rows: Price, then enabled RSI and MACD, then Volume.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PanelPlan {
    pub panels: Vec<Panel>,
    /// Bollinger bands are drawn over the price row instead of getting their own.
    pub bollinger_overlay: bool,
}

/// Build the panel plan for an indicator selection.
pub fn plan(config: &IndicatorConfig) -> PanelPlan {
    let mut roles = vec![PanelRole::Price];
    if config.rsi { roles.push(PanelRole::Rsi); }
    if config.macd { roles.push(PanelRole::Macd); }
    roles.push(PanelRole::Volume);

    let panels = roles
        .into_iter()
        .enumerate()
        .map(|(i, role)| Panel {
            role,
            row: i + 1,
            height: if role == PanelRole::Price { PRICE_ROW_WEIGHT } else { PANEL_ROW_WEIGHT },
        })
        .collect();

    PanelPlan { panels, bollinger_overlay: config.bollinger }
}

impl PanelPlan {
    pub fn rows(&self) -> usize { self.panels.len() }

    pub fn row_of(&self, role: PanelRole) -> Option<usize> {
        self.panels.iter().find(|p| p.role == role).map(|p| p.row)
    }

    pub fn volume_row(&self) -> usize { self.rows() }

    /// Raw height weights in row order.
    pub fn row_heights(&self) -> Vec<f64> {
        self.panels.iter().map(|p| p.height).collect()
    }

    /// Height weights scaled to sum to 1.
    pub fn normalized_heights(&self) -> Vec<f64> {
        let total: f64 = self.panels.iter().map(|p| p.height).sum();
        if total <= 0.0 { return self.row_heights(); }
        self.panels.iter().map(|p| p.height / total).collect()
    }
}
