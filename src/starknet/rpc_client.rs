use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

/// Read-only Starknet JSON-RPC client. One instance per process, cheap to
/// clone (the inner reqwest client is reference-counted).
#[derive(Debug, Clone)]
pub struct StarknetRpcClient {
    http: Client,
    url: String,
}

impl StarknetRpcClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RpcError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    /// Invoke a read-only entry point on a deployed contract at the latest
    /// block. Returns the raw felt array from the node.
    pub async fn call(
        &self,
        contract_address: &str,
        entry_point_selector: &str,
        calldata: &[String],
    ) -> Result<Vec<String>, RpcError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "starknet_call",
            "params": {
                "request": {
                    "contract_address": contract_address,
                    "entry_point_selector": entry_point_selector,
                    "calldata": calldata,
                },
                "block_id": "latest",
            }
        });

        let resp: RpcResponse<Vec<String>> = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = resp.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        resp.result
            .ok_or_else(|| RpcError::Unexpected("missing result field".into()))
    }

    /// Fetch the chain ID. Used as the health-check reachability probe.
    pub async fn chain_id(&self) -> Result<String, RpcError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "starknet_chainId",
            "params": [],
        });

        let resp: RpcResponse<String> = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(err) = resp.error {
            return Err(RpcError::Rpc {
                code: err.code,
                message: err.message,
            });
        }

        resp.result
            .ok_or_else(|| RpcError::Unexpected("missing result field".into()))
    }
}
