//! Configuration management for zora-coins
//!
//! Loads the immutable runtime configuration from the environment. Required
//! values are checked in a fixed order so that the reported error is always
//! the first missing variable.

use crate::constants::*;
use crate::error::ConfigError;
use crate::secrets::SecretsProvider;
use std::fmt;

/// Complete zora-coins configuration
///
/// Built once per invocation by [`Config::load`] and never mutated; fields
/// are only reachable through accessors.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    api_key: String,
    private_key: String,
    rpc_url: String,
    creator_address: String,
    platform_referrer: Option<String>,
    chain_id: u64,
    api_url: String,
    upload_url: String,
}

impl Config {
    /// Load configuration from a secrets provider
    ///
    /// Checks `ZORA_API_KEY`, then `PRIVATE_KEY`, then `CREATOR_ADDRESS`;
    /// empty values count as missing. Optional values fall back to their
    /// defaults.
    pub fn load(secrets: &dyn SecretsProvider) -> Result<Self, ConfigError> {
        let api_key = require(secrets, ENV_API_KEY)?;
        let private_key = require(secrets, ENV_PRIVATE_KEY)?;
        let creator_address = require(secrets, ENV_CREATOR_ADDRESS)?;

        let config = Self {
            api_key,
            private_key,
            rpc_url: secrets.get_secret_or(ENV_RPC_URL, DEFAULT_RPC_URL),
            creator_address,
            platform_referrer: secrets.get_non_empty(ENV_PLATFORM_REFERRER),
            chain_id: CHAIN_ID,
            api_url: secrets
                .get_secret_or(ENV_API_URL, DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            upload_url: secrets.get_secret_or(ENV_UPLOAD_URL, DEFAULT_UPLOAD_URL),
        };

        tracing::debug!(
            creator = %config.creator_address,
            chain_id = config.chain_id,
            rpc_url = %config.rpc_url,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Zora API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Private key of the signing wallet
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    /// JSON-RPC endpoint
    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    /// Address credited as coin creator
    pub fn creator_address(&self) -> &str {
        &self.creator_address
    }

    /// Platform referrer, if configured
    pub fn platform_referrer(&self) -> Option<&str> {
        self.platform_referrer.as_deref()
    }

    /// Chain id selected at build time
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// SDK API base URL, without trailing slash
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// IPFS uploader endpoint
    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

// Keys never reach logs or panics.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("private_key", &"<redacted>")
            .field("rpc_url", &self.rpc_url)
            .field("creator_address", &self.creator_address)
            .field("platform_referrer", &self.platform_referrer)
            .field("chain_id", &self.chain_id)
            .field("api_url", &self.api_url)
            .field("upload_url", &self.upload_url)
            .finish()
    }
}

fn require(secrets: &dyn SecretsProvider, key: &'static str) -> Result<String, ConfigError> {
    secrets.get_non_empty(key).ok_or(ConfigError::Missing(key))
}
