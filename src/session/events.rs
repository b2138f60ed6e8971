//! Session event channel — lossy, best-effort observability.
//!
//! Service failures are non-fatal and never clear state; the event channel
//! exists so a view layer (or a test) can still observe them. Delivery is
//! best-effort: events sent with no subscriber, or past a lagging one, are
//! dropped.

use crate::shared::AssetId;

/// Which external collaborator a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureSource {
    Balance,
    Prices,
    Chart,
}

impl FailureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Prices => "prices",
            Self::Chart => "chart",
        }
    }
}

impl std::fmt::Display for FailureSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// State-change and failure notifications emitted by the session.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A balance fetch succeeded and the snapshot was replaced.
    BalanceUpdated { amount: String },
    /// A price fetch succeeded and the table was replaced.
    PricesUpdated { assets: usize },
    /// A chart fetch succeeded for the still-selected asset.
    ChartUpdated { asset: AssetId },
    /// A chart response arrived for an asset that is no longer selected.
    ChartDiscarded { asset: AssetId },
    /// An external call failed; prior state was kept.
    ServiceFailure {
        source: FailureSource,
        detail: String,
    },
}
