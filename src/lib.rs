//! # DemoWallet SDK
//!
//! The wallet core behind the DemoWallet client: key pairs, chain balances,
//! market-data polling, and mock swap validation. The presentation layer is
//! a thin consumer — it owns one [`session::WalletSession`], invokes its
//! actions, and renders read-only snapshots.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, errors (no I/O)
//! 2. **Keys** — Key pair generation/import + address derivation
//! 3. **HTTP** — `MarketHttp` (market-data REST) and `ChainRpc` (JSON-RPC)
//! 4. **Session** — `WalletSession`: state machine, refresh actions,
//!    background price poll, event channel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use demowallet_sdk::prelude::*;
//!
//! let session = WalletSession::builder().build()?;
//! let _poll = session.spawn_price_poll();
//!
//! let keypair = session.generate().await;
//! session.refresh_chart().await;
//! let view = session.snapshot().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and pure helpers used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: Keys ────────────────────────────────────────────────────────────

/// Local key pairs: generation, hex import, address derivation.
pub mod keys;

// ── Layer 3: HTTP ────────────────────────────────────────────────────────────

/// Market-data REST client.
pub mod http;

/// Chain JSON-RPC client.
pub mod rpc;

// ── Layer 4: Session ─────────────────────────────────────────────────────────

/// `WalletSession` — the primary entry point.
pub mod session;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{supported_assets, AssetId, SUPPORTED_ASSETS};

    // Domain types
    pub use crate::domain::balance::BalanceSnapshot;
    pub use crate::domain::chart::ChartSeries;
    pub use crate::domain::prices::{PriceQuote, PriceTable};

    // Keys
    pub use crate::keys::Keypair;

    // Errors
    pub use crate::error::{KeyError, SdkError, ValidationError};

    // Network
    pub use crate::network::{DEFAULT_PRICE_API_URL, DEFAULT_RPC_URL};

    // Clients
    pub use crate::http::MarketHttp;
    pub use crate::rpc::ChainRpc;

    // Session
    pub use crate::session::{
        FailureSource, PollHandle, SessionEvent, SessionSnapshot, SwapConfirmation,
        WalletSession, WalletSessionBuilder, CHART_DAYS,
    };
}
