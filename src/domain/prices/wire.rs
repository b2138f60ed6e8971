//! Wire types for the simple-price endpoint (REST).

use crate::shared::AssetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw per-asset quote from the REST API.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuoteWire {
    pub usd: f64,
}

/// Raw simple-price response: asset id → quote. Assets the API does not
/// recognize are simply absent.
pub type SimplePriceResponse = HashMap<AssetId, PriceQuoteWire>;
