//! Chart series domain — the 7-day daily price series for one asset.

mod convert;
pub mod wire;

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};

/// Ordered date labels and price points for one asset's chart.
///
/// Fully replaced whenever the selected asset changes; never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub asset: AssetId,
    pub labels: Vec<String>,
    pub points: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
