//! HTTP client layer — `MarketHttp` for the market-data REST API.

pub mod client;

pub use client::MarketHttp;
