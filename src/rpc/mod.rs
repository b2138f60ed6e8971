//! Chain JSON-RPC layer — `ChainRpc` for balance queries.

pub mod client;

pub use client::ChainRpc;
