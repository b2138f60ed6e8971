//! Network URL constants for the DemoWallet SDK.

/// Default market-data REST API base URL.
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default chain JSON-RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://eth.llamarpc.com";
