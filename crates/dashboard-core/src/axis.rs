// File: crates/dashboard-core/src/axis.rs
// Summary: Per-row y-axis titles.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowAxis {
    /// 1-based chart row.
    pub row: usize,
    pub title: String,
}

impl RowAxis {
    pub fn new(row: usize, title: impl Into<String>) -> Self {
        Self { row, title: title.into() }
    }
}
