//! Minimal JSON-RPC 2.0 client for the chain balance endpoint.
//!
//! The wallet needs exactly one RPC method, so this speaks the protocol
//! directly over the shared HTTP stack rather than pulling in a full chain
//! client.

use crate::error::RpcError;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// JSON-RPC client bound to one chain endpoint.
#[derive(Clone)]
pub struct ChainRpc {
    url: String,
    client: Client,
}

impl ChainRpc {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            url: url.to_string(),
            client,
        }
    }

    /// Current balance of `address` in wei, at the latest block.
    pub async fn get_balance(&self, address: &str) -> Result<u128, RpcError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "eth_getBalance",
            params: json!([address, "latest"]),
        };

        tracing::debug!("POST {} eth_getBalance {}", self.url, address);
        let resp = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .json::<RpcResponse>()
            .await?;

        if let Some(err) = resp.error {
            return Err(RpcError::Node {
                code: err.code,
                message: err.message,
            });
        }

        let quantity = resp.result.ok_or(RpcError::MissingResult)?;
        parse_quantity(&quantity)
    }
}

/// Parse a `0x`-prefixed hex quantity into wei.
fn parse_quantity(s: &str) -> Result<u128, RpcError> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| RpcError::InvalidQuantity(s.to_string()))?;
    if digits.is_empty() {
        return Err(RpcError::InvalidQuantity(s.to_string()));
    }
    u128::from_str_radix(digits, 16).map_err(|_| RpcError::InvalidQuantity(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x1bc16d674ec80000").unwrap(), 2_000_000_000_000_000_000);
        assert_eq!(parse_quantity("0xde0b6b3a7640000").unwrap(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn test_parse_quantity_rejects_missing_prefix() {
        assert!(matches!(
            parse_quantity("1bc16d674ec80000"),
            Err(RpcError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(matches!(parse_quantity("0x"), Err(RpcError::InvalidQuantity(_))));
        assert!(matches!(parse_quantity("0xzz"), Err(RpcError::InvalidQuantity(_))));
    }

    #[test]
    fn test_response_deserialization() {
        let ok: RpcResponse =
            serde_json::from_str(r#"{"jsonrpc":"2.0","id":1,"result":"0x0"}"#).unwrap();
        assert_eq!(ok.result.as_deref(), Some("0x0"));
        assert!(ok.error.is_none());

        let err: RpcResponse = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32602,"message":"invalid address"}}"#,
        )
        .unwrap();
        assert!(err.result.is_none());
        let obj = err.error.unwrap();
        assert_eq!(obj.code, -32602);
        assert_eq!(obj.message, "invalid address");
    }
}
