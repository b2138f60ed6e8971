//! Balance snapshot domain.

use crate::shared::{format_base_units, ETH_DECIMALS};
use serde::{Deserialize, Serialize};

/// The latest known balance, pre-formatted for display.
///
/// Replaced wholesale on each successful fetch; a failed fetch keeps the
/// previous snapshot in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    amount: String,
}

impl BalanceSnapshot {
    /// The zero balance shown for a freshly generated wallet.
    pub fn zero() -> Self {
        Self {
            amount: "0.0".to_string(),
        }
    }

    /// Convert an integer wei amount using the chain's fixed 18-decimal
    /// exponent.
    pub fn from_wei(wei: u128) -> Self {
        Self {
            amount: format_base_units(wei, ETH_DECIMALS),
        }
    }

    /// The decimal display string, e.g. `"2.0"`.
    pub fn amount(&self) -> &str {
        &self.amount
    }
}

impl Default for BalanceSnapshot {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for BalanceSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.amount)
    }
}
