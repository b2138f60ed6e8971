//! Wire types for the market-chart endpoint (REST).

use serde::{Deserialize, Serialize};

/// Raw market-chart response. Each entry is `[timestamp_millis, price]`;
/// timestamps arrive as JSON numbers and may carry a fractional part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
}
