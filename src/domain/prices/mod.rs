//! Price table domain — app-owned state, SDK-provided update logic.

pub mod wire;

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spot price of one asset in USD.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub usd: f64,
}

/// Live price table for the supported asset set.
///
/// Empty on first load. Each successful fetch replaces the whole table;
/// a failed fetch leaves the previous table untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceTable {
    quotes: HashMap<AssetId, PriceQuote>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole table with a fresh snapshot.
    pub fn apply_snapshot(&mut self, snapshot: wire::SimplePriceResponse) {
        self.quotes = snapshot
            .into_iter()
            .map(|(id, quote)| (id, PriceQuote { usd: quote.usd }))
            .collect();
    }

    pub fn usd(&self, id: &AssetId) -> Option<f64> {
        self.quotes.get(id).map(|q| q.usd)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &PriceQuote)> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(entries: &[(&str, f64)]) -> wire::SimplePriceResponse {
        entries
            .iter()
            .map(|(id, usd)| (AssetId::from(*id), wire::PriceQuoteWire { usd: *usd }))
            .collect()
    }

    #[test]
    fn test_apply_snapshot_replaces_table() {
        let mut table = PriceTable::new();
        table.apply_snapshot(snapshot(&[("bitcoin", 60_000.0), ("ethereum", 3_000.0)]));
        assert_eq!(table.len(), 2);
        assert_eq!(table.usd(&AssetId::from("bitcoin")), Some(60_000.0));

        table.apply_snapshot(snapshot(&[("bitcoin", 61_000.0)]));
        assert_eq!(table.len(), 1);
        assert_eq!(table.usd(&AssetId::from("bitcoin")), Some(61_000.0));
        assert_eq!(table.usd(&AssetId::from("ethereum")), None);
    }

    #[test]
    fn test_unknown_asset_is_none() {
        let table = PriceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.usd(&AssetId::from("bitcoin")), None);
    }

    #[test]
    fn test_wire_deserialization() {
        let json = r#"{"bitcoin":{"usd":60000.5},"ethereum":{"usd":3000.25}}"#;
        let resp: wire::SimplePriceResponse = serde_json::from_str(json).unwrap();
        let mut table = PriceTable::new();
        table.apply_snapshot(resp);
        assert_eq!(table.usd(&AssetId::from("bitcoin")), Some(60000.5));
        assert_eq!(table.usd(&AssetId::from("ethereum")), Some(3000.25));
    }
}
