//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("RPC error: {0}")]
    Rpc(#[from] RpcError),

    #[error("Key error: {0}")]
    Key(#[from] KeyError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors from the market-data REST API.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Chain JSON-RPC errors.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Node error {code}: {message}")]
    Node { code: i64, message: String },

    #[error("Malformed quantity: {0}")]
    InvalidQuantity(String),

    #[error("Response carried neither result nor error")]
    MissingResult,
}

/// Key material errors (generation never fails; import can).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Private key is not valid hex")]
    InvalidHex,

    #[error("Private key must be {expected} bytes, got {got}")]
    InvalidLength { expected: usize, got: usize },

    #[error("Private key is not a valid secp256k1 scalar")]
    InvalidScalar,
}

/// Errors surfaced synchronously to the user. Everything else is logged,
/// emitted on the session event channel, and otherwise swallowed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No wallet connected")]
    NotConnected,

    #[error("Invalid swap amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid private key: {0}")]
    InvalidKey(#[from] KeyError),
}
