//! Chain submission
//!
//! Signs the calls produced by the create endpoint with a local private key
//! and submits them over JSON-RPC.

use super::*;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, Bytes, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use once_cell::sync::OnceCell;
use url::Url;

/// A mined transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedTransaction {
    pub hash: String,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub success: bool,
}

/// Sends a transaction call and waits for its receipt
#[async_trait]
pub trait TransactionSender: Send + Sync {
    async fn send(&self, call: &TransactionCall) -> Result<SubmittedTransaction>;
}

/// Wallet signing with a local key against an HTTP RPC endpoint
pub struct RpcWallet {
    signer: PrivateKeySigner,
    rpc_url: Url,
    chain_id: u64,
}

impl RpcWallet {
    /// Create a wallet from a hex private key (with or without `0x`)
    pub fn new(private_key: &str, rpc_url: &str, chain_id: u64) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .trim()
            .parse()
            .map_err(|_| CoinsError::chain("PRIVATE_KEY is not a valid secp256k1 key"))?;
        let rpc_url = Url::parse(rpc_url)?;

        Ok(Self {
            signer,
            rpc_url,
            chain_id,
        })
    }

    /// Address derived from the private key
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl TransactionSender for RpcWallet {
    async fn send(&self, call: &TransactionCall) -> Result<SubmittedTransaction> {
        let request = build_request(call, self.chain_id)?;

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(self.signer.clone()))
            .connect_http(self.rpc_url.clone());

        tracing::info!(to = %call.to, chain_id = self.chain_id, "Submitting transaction");
        let pending = provider
            .send_transaction(request)
            .await
            .map_err(|e| CoinsError::chain(format!("failed to send transaction: {}", e)))?;

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| CoinsError::chain(format!("failed to fetch receipt: {}", e)))?;

        let submitted = SubmittedTransaction {
            hash: receipt.transaction_hash.to_string(),
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            success: receipt.status(),
        };
        tracing::info!(hash = %submitted.hash, success = submitted.success, "Transaction mined");

        Ok(submitted)
    }
}

/// Wallet whose key is only parsed when the first transaction is sent
///
/// Read-only commands never touch the signer, so a placeholder key does
/// not prevent them from running.
pub struct LazyWallet {
    private_key: String,
    rpc_url: String,
    chain_id: u64,
    wallet: OnceCell<RpcWallet>,
}

impl LazyWallet {
    pub fn new(private_key: &str, rpc_url: &str, chain_id: u64) -> Self {
        Self {
            private_key: private_key.to_string(),
            rpc_url: rpc_url.to_string(),
            chain_id,
            wallet: OnceCell::new(),
        }
    }

    /// The underlying wallet, created on first use
    pub fn wallet(&self) -> Result<&RpcWallet> {
        self.wallet.get_or_try_init(|| {
            let wallet = RpcWallet::new(&self.private_key, &self.rpc_url, self.chain_id)?;
            tracing::info!(signer = %wallet.address(), chain_id = self.chain_id, "Wallet ready");
            Ok(wallet)
        })
    }
}

#[async_trait]
impl TransactionSender for LazyWallet {
    async fn send(&self, call: &TransactionCall) -> Result<SubmittedTransaction> {
        self.wallet()?.send(call).await
    }
}

/// Decode a call's hex fields into a transaction request
fn build_request(call: &TransactionCall, chain_id: u64) -> Result<TransactionRequest> {
    let to: Address = call
        .to
        .parse()
        .map_err(|_| CoinsError::chain(format!("invalid call target: {}", call.to)))?;
    let data: Bytes = call
        .data
        .parse()
        .map_err(|_| CoinsError::chain("invalid call data"))?;
    let value: U256 = call
        .value
        .parse()
        .map_err(|_| CoinsError::chain(format!("invalid call value: {}", call.value)))?;

    Ok(TransactionRequest::default()
        .with_to(to)
        .with_input(data)
        .with_value(value)
        .with_chain_id(chain_id))
}
