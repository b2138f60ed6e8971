//! Shared newtypes and pure helpers used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the external APIs use, so they can appear
//! directly in wire types without conversion overhead.

pub mod units;

pub use units::{format_base_units, ETH_DECIMALS};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// The fixed set of assets the wallet quotes and charts.
pub const SUPPORTED_ASSETS: [&str; 6] = [
    "ethereum",
    "bitcoin",
    "solana",
    "polygon",
    "cardano",
    "dogecoin",
];

/// The supported asset list as owned ids.
pub fn supported_assets() -> Vec<AssetId> {
    SUPPORTED_ASSETS.iter().copied().map(AssetId::from).collect()
}

// ─── AssetId ─────────────────────────────────────────────────────────────────

/// Newtype for market-data asset identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Uppercased form used in user-facing swap text (`"BITCOIN"`).
    pub fn ticker(&self) -> String {
        self.0.to_uppercase()
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for AssetId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(AssetId(s.to_string()))
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AssetId(s))
    }
}

/// Join asset ids for a comma-separated query parameter.
pub fn join_ids(ids: &[AssetId]) -> String {
    ids.iter()
        .map(AssetId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
