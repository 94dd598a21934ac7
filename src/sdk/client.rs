//! HTTP client for the Zora SDK API

use super::*;
use crate::constants::HEADER_API_KEY;
use crate::error::NetworkError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Client for the SDK's REST endpoints
///
/// The API key is installed as a default header when the client is built,
/// so every request made through it is authenticated.
#[derive(Clone)]
pub struct ZoraClient {
    client: Client,
    base_url: String,
}

impl ZoraClient {
    /// Create a client for `base_url`, authenticating with `api_key`
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut key = HeaderValue::from_str(api_key).map_err(|_| {
            CoinsError::Network(NetworkError::Http(
                "API key contains characters not allowed in a header".to_string(),
            ))
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HEADER_API_KEY, key);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Generate the unsigned transactions that create a coin
    ///
    /// Nothing is submitted; the returned calls can be sent by any wallet.
    pub async fn create_coin_call(&self, params: &CreateCoinParams) -> Result<CreateCoinCall> {
        let url = self.url("create/content");
        tracing::debug!(url = %url, name = %params.name, symbol = %params.symbol, "Requesting create calls");

        let response = self.client.post(&url).json(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        crate::telemetry::record_api_request("create", status.as_u16());

        if !status.is_success() {
            return Err(CoinsError::api(status.as_u16(), error_message(status, &body)));
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn get_coin(&self, query: &CoinQuery) -> Result<QueryResponse<CoinResponse>> {
        self.get_query(
            "coin",
            &[
                ("address", query.address.clone()),
                ("chain", query.chain_id.to_string()),
            ],
        )
        .await
    }

    pub async fn get_coins(&self, query: &CoinsQuery) -> Result<QueryResponse<CoinsResponse>> {
        self.get_query(
            "coins",
            &[
                ("chainId", query.chain_id.to_string()),
                ("collectionAddress", query.collection_address.clone()),
                ("count", query.count.to_string()),
            ],
        )
        .await
    }

    pub async fn get_profile_balances(
        &self,
        query: &ProfileBalancesQuery,
    ) -> Result<QueryResponse<ProfileBalancesResponse>> {
        let chain_ids = query
            .chain_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");

        self.get_query(
            "profileBalances",
            &[
                ("identifier", query.identifier.clone()),
                ("count", query.count.to_string()),
                ("chainIds", chain_ids),
            ],
        )
        .await
    }

    pub async fn get_coin_swaps(
        &self,
        query: &CoinSwapsQuery,
    ) -> Result<QueryResponse<CoinSwapsResponse>> {
        self.get_query(
            "coinSwaps",
            &[
                ("address", query.address.clone()),
                ("chain", query.chain_id.to_string()),
                ("first", query.count.to_string()),
            ],
        )
        .await
    }

    /// GET a query endpoint, folding non-2xx answers into `QueryResponse::error`
    async fn get_query<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<QueryResponse<T>> {
        let url = self.url(endpoint);
        tracing::debug!(url = %url, "Querying");

        let response = self.client.get(&url).query(params).send().await?;
        let status = response.status();
        let body = response.text().await?;
        crate::telemetry::record_api_request(endpoint, status.as_u16());

        if !status.is_success() {
            let message = error_message(status, &body);
            tracing::warn!(endpoint, status = status.as_u16(), error = %message, "Query returned an error");
            return Ok(QueryResponse::failed(message));
        }

        Ok(QueryResponse::ok(serde_json::from_str(&body)?))
    }
}

/// Best-effort human readable message from an error response
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error", "message"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
