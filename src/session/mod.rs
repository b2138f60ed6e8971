//! `WalletSession` — the single stateful owner of wallet state.
//!
//! The session composes the key module, the chain RPC client, and the
//! market-data client behind a small action surface. A presentation layer
//! owns one session, drives it through the action methods, and reads
//! display state via [`WalletSession::snapshot`].
//!
//! Lifecycle: a session starts disconnected, becomes connected through
//! `generate` or `import`, and may re-enter the connected state with a
//! different address on re-import. There is no disconnect action; the
//! session is dropped with the process.
//!
//! External-call policy: validation problems are returned to the caller;
//! service failures are logged, emitted on the event channel, and leave
//! previous state untouched. No call is ever retried.

pub mod events;
pub mod poll;
pub mod swap;

pub use events::{FailureSource, SessionEvent};
pub use poll::PollHandle;
pub use swap::SwapConfirmation;

use crate::domain::balance::BalanceSnapshot;
use crate::domain::chart::ChartSeries;
use crate::domain::prices::PriceTable;
use crate::error::{SdkError, ValidationError};
use crate::http::MarketHttp;
use crate::keys::Keypair;
use crate::rpc::ChainRpc;
use crate::shared::{supported_assets, AssetId};

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

/// Length of the chart window, in days of daily candles.
pub const CHART_DAYS: u32 = 7;

const EVENT_CHANNEL_CAPACITY: usize = 64;

// ─── State ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct SessionState {
    keypair: Option<Keypair>,
    balance: BalanceSnapshot,
    prices: PriceTable,
    selected_asset: AssetId,
    chart: Option<ChartSeries>,
}

/// Read-only view of the session for the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub connected: bool,
    pub address: Option<String>,
    pub balance: String,
    pub prices: PriceTable,
    pub selected_asset: AssetId,
    pub chart: Option<ChartSeries>,
}

// ─── WalletSession ───────────────────────────────────────────────────────────

/// The primary entry point of the SDK.
pub struct WalletSession {
    market: MarketHttp,
    rpc: ChainRpc,
    assets: Vec<AssetId>,
    poll_interval: Duration,
    state: Arc<RwLock<SessionState>>,
    /// Bumped on every chart request; a response only commits if the
    /// generation it captured is still current (last-selection-wins).
    chart_generation: Arc<AtomicU64>,
    event_tx: broadcast::Sender<SessionEvent>,
}

impl WalletSession {
    pub fn builder() -> WalletSessionBuilder {
        WalletSessionBuilder::default()
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Create a fresh random wallet and reset the displayed balance to zero.
    pub async fn generate(&self) -> Keypair {
        let keypair = Keypair::generate();
        tracing::info!(address = %keypair.address(), "Generated wallet");

        let mut state = self.state.write().await;
        state.keypair = Some(keypair.clone());
        state.balance = BalanceSnapshot::zero();
        keypair
    }

    /// Import a wallet from a hex private key and fetch its balance.
    ///
    /// On malformed input the error is returned and all prior state —
    /// including any already-connected wallet — is left unchanged.
    pub async fn import(&self, secret_hex: &str) -> Result<Keypair, ValidationError> {
        let keypair = Keypair::from_hex(secret_hex).map_err(ValidationError::InvalidKey)?;
        tracing::info!(address = %keypair.address(), "Imported wallet");

        {
            let mut state = self.state.write().await;
            state.keypair = Some(keypair.clone());
        }

        self.refresh_balance().await.ok();
        Ok(keypair)
    }

    // ── Refresh actions ──────────────────────────────────────────────────

    /// Query the chain for the connected wallet's balance.
    ///
    /// Service failures keep the last snapshot in place and are reported on
    /// the event channel only.
    pub async fn refresh_balance(&self) -> Result<(), ValidationError> {
        let address = {
            let state = self.state.read().await;
            match &state.keypair {
                Some(keypair) => keypair.address().to_string(),
                None => return Err(ValidationError::NotConnected),
            }
        };

        match self.rpc.get_balance(&address).await {
            Ok(wei) => {
                let snapshot = BalanceSnapshot::from_wei(wei);
                let amount = snapshot.amount().to_string();
                self.state.write().await.balance = snapshot;
                self.emit(SessionEvent::BalanceUpdated { amount });
            }
            Err(e) => {
                tracing::warn!(address = %address, "Balance fetch failed: {}", e);
                self.emit(SessionEvent::ServiceFailure {
                    source: FailureSource::Balance,
                    detail: e.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fetch spot prices for the full supported asset list.
    ///
    /// On failure the previous table is kept; a non-empty table is never
    /// cleared by a failed fetch.
    pub async fn refresh_prices(&self) {
        match self.market.simple_price(&self.assets).await {
            Ok(wire) => {
                let mut state = self.state.write().await;
                state.prices.apply_snapshot(wire);
                let assets = state.prices.len();
                drop(state);
                self.emit(SessionEvent::PricesUpdated { assets });
            }
            Err(e) => {
                tracing::warn!("Price fetch failed: {}", e);
                self.emit(SessionEvent::ServiceFailure {
                    source: FailureSource::Prices,
                    detail: e.to_string(),
                });
            }
        }
    }

    /// Change the charted asset and fetch its series.
    ///
    /// Supersedes any in-flight chart request: if an older request's
    /// response arrives after this call, it is discarded rather than
    /// overwriting the newer selection's data.
    pub async fn select_asset(&self, asset: AssetId) {
        self.state.write().await.selected_asset = asset.clone();
        let generation = self.chart_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.fetch_chart(asset, generation).await;
    }

    /// Re-fetch the chart for the currently selected asset.
    pub async fn refresh_chart(&self) {
        let asset = self.state.read().await.selected_asset.clone();
        let generation = self.chart_generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.fetch_chart(asset, generation).await;
    }

    async fn fetch_chart(&self, asset: AssetId, generation: u64) {
        match self.market.market_chart(&asset, CHART_DAYS).await {
            Ok(wire) => {
                let series = ChartSeries::from_wire(asset.clone(), wire);
                let mut state = self.state.write().await;
                if self.chart_generation.load(Ordering::SeqCst) == generation {
                    state.chart = Some(series);
                    drop(state);
                    self.emit(SessionEvent::ChartUpdated { asset });
                } else {
                    drop(state);
                    tracing::debug!(asset = %asset, "Discarding stale chart response");
                    self.emit(SessionEvent::ChartDiscarded { asset });
                }
            }
            Err(e) => {
                tracing::warn!(asset = %asset, "Chart fetch failed: {}", e);
                self.emit(SessionEvent::ServiceFailure {
                    source: FailureSource::Chart,
                    detail: e.to_string(),
                });
            }
        }
    }

    // ── Swap ─────────────────────────────────────────────────────────────

    /// Validate a swap intent and describe it. Nothing is executed.
    pub async fn validate_swap(
        &self,
        amount: &str,
        from: &AssetId,
        to: &AssetId,
    ) -> Result<SwapConfirmation, ValidationError> {
        if self.state.read().await.keypair.is_none() {
            return Err(ValidationError::NotConnected);
        }
        swap::validate(amount, from, to)
    }

    // ── Observation ──────────────────────────────────────────────────────

    /// A read-only copy of the current display state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        SessionSnapshot {
            connected: state.keypair.is_some(),
            address: state.keypair.as_ref().map(|k| k.address().to_string()),
            balance: state.balance.amount().to_string(),
            prices: state.prices.clone(),
            selected_asset: state.selected_asset.clone(),
            chart: state.chart.clone(),
        }
    }

    /// Subscribe to session events. Each subscriber gets every event sent
    /// after the call; delivery is lossy for lagging subscribers.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.event_tx.subscribe()
    }

    fn emit(&self, event: SessionEvent) {
        // Nobody listening is fine.
        let _ = self.event_tx.send(event);
    }
}

impl Clone for WalletSession {
    fn clone(&self) -> Self {
        Self {
            market: self.market.clone(),
            rpc: self.rpc.clone(),
            assets: self.assets.clone(),
            poll_interval: self.poll_interval,
            state: self.state.clone(),
            chart_generation: self.chart_generation.clone(),
            event_tx: self.event_tx.clone(),
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct WalletSessionBuilder {
    price_api_url: String,
    rpc_url: String,
    poll_interval: Duration,
    http_timeout: Duration,
    assets: Vec<AssetId>,
    selected_asset: AssetId,
}

impl Default for WalletSessionBuilder {
    fn default() -> Self {
        Self {
            price_api_url: crate::network::DEFAULT_PRICE_API_URL.to_string(),
            rpc_url: crate::network::DEFAULT_RPC_URL.to_string(),
            poll_interval: Duration::from_secs(10),
            http_timeout: Duration::from_secs(30),
            assets: supported_assets(),
            selected_asset: AssetId::from("bitcoin"),
        }
    }
}

impl WalletSessionBuilder {
    pub fn price_api_url(mut self, url: &str) -> Self {
        self.price_api_url = url.to_string();
        self
    }

    pub fn rpc_url(mut self, url: &str) -> Self {
        self.rpc_url = url.to_string();
        self
    }

    /// Period of the background price poll.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    /// Override the quoted asset list.
    pub fn assets(mut self, assets: Vec<AssetId>) -> Self {
        self.assets = assets;
        self
    }

    /// Initially charted asset.
    pub fn selected_asset(mut self, asset: AssetId) -> Self {
        self.selected_asset = asset;
        self
    }

    pub fn build(self) -> Result<WalletSession, SdkError> {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Ok(WalletSession {
            market: MarketHttp::new(&self.price_api_url, self.http_timeout),
            rpc: ChainRpc::new(&self.rpc_url, self.http_timeout),
            assets: self.assets,
            poll_interval: self.poll_interval,
            state: Arc::new(RwLock::new(SessionState {
                keypair: None,
                balance: BalanceSnapshot::zero(),
                prices: PriceTable::new(),
                selected_asset: self.selected_asset,
                chart: None,
            })),
            chart_generation: Arc::new(AtomicU64::new(0)),
            event_tx,
        })
    }
}
