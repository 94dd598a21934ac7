//! Coins SDK boundary
//!
//! Everything that talks to the outside world lives behind the [`CoinsApi`]
//! trait: the Zora SDK API, the IPFS uploader and the chain wallet. Handlers
//! only ever see an [`SdkContext`], produced once per invocation by a
//! [`Connector`].
//!
//! # Query responses
//!
//! Read-only lookups return [`QueryResponse`], mirroring the SDK's
//! `{ data, error }` envelope: an API-level failure such as an unknown coin
//! fills `error`, while transport failures surface as `Err`.

pub mod client;
pub mod metadata;
pub mod upload;
pub mod wallet;

pub use client::ZoraClient;
pub use metadata::{CoinMetadata, ImageFile, MetadataBuilder};
pub use upload::IpfsUploader;
pub use wallet::{LazyWallet, RpcWallet, SubmittedTransaction, TransactionSender};

use crate::config::Config;
use crate::{CoinsError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// Creation
// ============================================================================

/// Currency a coin is paired with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    Zora,
    Eth,
    CreatorCoin,
}

/// Starting market cap tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StartingMarketCap {
    Low,
    High,
}

/// Where a coin's metadata lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MetadataSource {
    #[serde(rename = "RAW_URI")]
    RawUri { uri: String },
}

/// Parameters for creating a coin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinParams {
    pub creator: String,
    pub name: String,
    pub symbol: String,
    pub metadata: MetadataSource,
    pub currency: Currency,
    pub chain_id: u64,
    pub starting_market_cap: StartingMarketCap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_referrer: Option<String>,
    #[serde(default)]
    pub skip_metadata_validation: bool,
}

impl CreateCoinParams {
    /// Parameters for a ZORA-paired, low market cap coin on the configured chain
    pub fn new(
        config: &Config,
        name: impl Into<String>,
        symbol: impl Into<String>,
        metadata_uri: impl Into<String>,
    ) -> Self {
        Self {
            creator: config.creator_address().to_string(),
            name: name.into(),
            symbol: symbol.into(),
            metadata: MetadataSource::RawUri {
                uri: metadata_uri.into(),
            },
            currency: Currency::Zora,
            chain_id: config.chain_id(),
            starting_market_cap: StartingMarketCap::Low,
            platform_referrer: config.platform_referrer().map(str::to_string),
            skip_metadata_validation: false,
        }
    }

    /// Metadata URI carried by these parameters
    pub fn metadata_uri(&self) -> &str {
        match &self.metadata {
            MetadataSource::RawUri { uri } => uri,
        }
    }
}

/// A single transaction produced by the create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCall {
    pub to: String,
    pub data: String,
    #[serde(default = "zero_value")]
    pub value: String,
}

fn zero_value() -> String {
    "0".to_string()
}

/// Unsigned transactions that create a coin, plus its predicted address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCoinCall {
    pub calls: Vec<TransactionCall>,
    pub predicted_coin_address: String,
}

/// On-chain details of a coin deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDeployment {
    pub chain_id: u64,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub transaction_count: usize,
}

/// Result of a successful coin creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinCreation {
    pub hash: String,
    pub address: String,
    pub deployment: CoinDeployment,
}

/// Uploaded metadata, ready to be used as a `RAW_URI`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataReference {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

// ============================================================================
// Queries
// ============================================================================

/// The SDK's `{ data, error }` envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> QueryResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(error.into()),
        }
    }

    /// Turn an API-level error into `Err`, keeping its message verbatim
    pub fn into_data(self) -> Result<Option<T>> {
        match self.error {
            Some(message) => Err(CoinsError::Query(message)),
            None => Ok(self.data),
        }
    }
}

/// A coin as returned by the query endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Coin {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub description: Option<String>,
    #[serde(alias = "creatorAddress")]
    pub creator: Option<String>,
    pub total_supply: Option<String>,
    pub market_cap: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinResponse {
    #[serde(rename = "zora20Token", default)]
    pub zora20_token: Option<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinsResponse {
    #[serde(rename = "zora20Tokens", default)]
    pub zora20_tokens: Vec<Coin>,
}

/// A coin held by a profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinBalance {
    pub balance: Option<String>,
    pub value: Option<String>,
    pub coin: Option<Coin>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub handle: Option<String>,
    pub balances: Vec<CoinBalance>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileBalancesResponse {
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// A trade of a coin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CoinSwap {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub amount: Option<String>,
    pub user: Option<String>,
    pub tx_hash: Option<String>,
    /// Unix seconds
    pub timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinSwapsResponse {
    #[serde(rename = "zora20Swaps", default)]
    pub zora20_swaps: Vec<CoinSwap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinQuery {
    pub address: String,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinsQuery {
    pub chain_id: u64,
    pub collection_address: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileBalancesQuery {
    pub identifier: String,
    pub count: u32,
    pub chain_ids: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinSwapsQuery {
    pub address: String,
    pub chain_id: u64,
    pub count: u32,
}

// ============================================================================
// Collaborator traits
// ============================================================================

/// Operations the coins SDK exposes to handlers
#[async_trait]
pub trait CoinsApi: Send + Sync {
    /// Build, sign and submit the transactions that create a coin
    async fn create_coin(&self, params: &CreateCoinParams) -> Result<CoinCreation>;

    /// Upload image and metadata JSON, returning a reference usable by `create_coin`
    async fn upload_metadata(&self, metadata: &CoinMetadata) -> Result<MetadataReference>;

    async fn get_coin(&self, query: &CoinQuery) -> Result<QueryResponse<CoinResponse>>;

    async fn get_coins(&self, query: &CoinsQuery) -> Result<QueryResponse<CoinsResponse>>;

    async fn get_profile_balances(
        &self,
        query: &ProfileBalancesQuery,
    ) -> Result<QueryResponse<ProfileBalancesResponse>>;

    async fn get_coin_swaps(
        &self,
        query: &CoinSwapsQuery,
    ) -> Result<QueryResponse<CoinSwapsResponse>>;
}

/// Capability handed to handlers once the SDK has been initialized
#[derive(Clone)]
pub struct SdkContext {
    pub api: Arc<dyn CoinsApi>,
    pub config: Arc<Config>,
}

impl SdkContext {
    pub fn new(api: Arc<dyn CoinsApi>, config: Config) -> Self {
        Self {
            api,
            config: Arc::new(config),
        }
    }
}

/// One-time SDK initialization
///
/// Prepares the API client and transaction sender for the rest of the
/// invocation. Called by the dispatcher at most once, after configuration
/// has been validated.
pub trait Connector: Send + Sync {
    fn connect(&self, config: &Config) -> Result<SdkContext>;
}

/// Production connector: Zora API, IPFS uploader and an RPC wallet
///
/// The wallet key is parsed on the first transaction, so queries and
/// metadata uploads only need the API key.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoraConnector;

impl Connector for ZoraConnector {
    fn connect(&self, config: &Config) -> Result<SdkContext> {
        let client = ZoraClient::new(config.api_url(), config.api_key())?;
        let uploader = IpfsUploader::new(config.upload_url(), config.api_key())?;
        let wallet = LazyWallet::new(config.private_key(), config.rpc_url(), config.chain_id());

        tracing::info!(
            api_url = config.api_url(),
            chain_id = config.chain_id(),
            "SDK initialized"
        );

        let sdk = ZoraSdk::new(client, uploader, Arc::new(wallet), config.chain_id());
        Ok(SdkContext::new(Arc::new(sdk), config.clone()))
    }
}

/// [`CoinsApi`] over the Zora API, an IPFS uploader and a transaction sender
pub struct ZoraSdk {
    client: ZoraClient,
    uploader: IpfsUploader,
    sender: Arc<dyn TransactionSender>,
    chain_id: u64,
}

impl ZoraSdk {
    pub fn new(
        client: ZoraClient,
        uploader: IpfsUploader,
        sender: Arc<dyn TransactionSender>,
        chain_id: u64,
    ) -> Self {
        Self {
            client,
            uploader,
            sender,
            chain_id,
        }
    }
}

#[async_trait]
impl CoinsApi for ZoraSdk {
    async fn create_coin(&self, params: &CreateCoinParams) -> Result<CoinCreation> {
        let call = self.client.create_coin_call(params).await?;
        if call.calls.is_empty() {
            return Err(CoinsError::chain("create endpoint returned no transactions"));
        }

        let mut hash = String::new();
        let mut block_number = None;
        let mut gas_used = 0u64;
        for tx in &call.calls {
            let submitted = self.sender.send(tx).await?;
            if !submitted.success {
                return Err(CoinsError::chain(format!(
                    "transaction {} reverted",
                    submitted.hash
                )));
            }
            gas_used = gas_used.saturating_add(submitted.gas_used);
            hash = submitted.hash;
            block_number = submitted.block_number;
        }

        Ok(CoinCreation {
            hash,
            address: call.predicted_coin_address,
            deployment: CoinDeployment {
                chain_id: self.chain_id,
                block_number,
                gas_used,
                transaction_count: call.calls.len(),
            },
        })
    }

    async fn upload_metadata(&self, metadata: &CoinMetadata) -> Result<MetadataReference> {
        self.uploader.upload(metadata).await
    }

    async fn get_coin(&self, query: &CoinQuery) -> Result<QueryResponse<CoinResponse>> {
        self.client.get_coin(query).await
    }

    async fn get_coins(&self, query: &CoinsQuery) -> Result<QueryResponse<CoinsResponse>> {
        self.client.get_coins(query).await
    }

    async fn get_profile_balances(
        &self,
        query: &ProfileBalancesQuery,
    ) -> Result<QueryResponse<ProfileBalancesResponse>> {
        self.client.get_profile_balances(query).await
    }

    async fn get_coin_swaps(
        &self,
        query: &CoinSwapsQuery,
    ) -> Result<QueryResponse<CoinSwapsResponse>> {
        self.client.get_coin_swaps(query).await
    }
}

#[cfg(test)]
mod sdk_test;
