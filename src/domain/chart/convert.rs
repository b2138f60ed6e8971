//! Conversion: MarketChartResponse → ChartSeries.

use super::wire::MarketChartResponse;
use super::ChartSeries;
use crate::shared::AssetId;
use chrono::DateTime;

impl ChartSeries {
    /// Build a series from a raw market-chart response.
    ///
    /// Labels are UTC dates (`%Y-%m-%d`) in response order. Entries whose
    /// timestamp does not map to a representable date are skipped.
    pub fn from_wire(asset: AssetId, wire: MarketChartResponse) -> Self {
        let mut labels = Vec::with_capacity(wire.prices.len());
        let mut points = Vec::with_capacity(wire.prices.len());

        for (millis, price) in wire.prices {
            let Some(date) = DateTime::from_timestamp_millis(millis as i64) else {
                continue;
            };
            labels.push(date.format("%Y-%m-%d").to_string());
            points.push(price);
        }

        Self { asset, labels, points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire_maps_dates_and_points() {
        let json = r#"{"prices":[[1700000000000,37400.12],[1700086400000,37510.5]]}"#;
        let wire: MarketChartResponse = serde_json::from_str(json).unwrap();
        let series = ChartSeries::from_wire(AssetId::from("bitcoin"), wire);

        assert_eq!(series.len(), 2);
        assert_eq!(series.labels, vec!["2023-11-14", "2023-11-15"]);
        assert_eq!(series.points, vec![37400.12, 37510.5]);
        assert_eq!(series.asset, AssetId::from("bitcoin"));
    }

    #[test]
    fn test_from_wire_preserves_order() {
        let wire = MarketChartResponse {
            prices: vec![
                (1700000000000.0, 3.0),
                (1700086400000.0, 1.0),
                (1700172800000.0, 2.0),
            ],
        };
        let series = ChartSeries::from_wire(AssetId::from("cardano"), wire);
        assert_eq!(series.points, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_from_wire_empty() {
        let wire = MarketChartResponse { prices: vec![] };
        let series = ChartSeries::from_wire(AssetId::from("solana"), wire);
        assert!(series.is_empty());
        assert!(series.labels.is_empty());
    }
}
