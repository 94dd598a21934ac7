//! Command handlers
//!
//! Each handler sequences calls on the [`SdkContext`] and returns a
//! [`CommandResult`]. Errors never escape a handler: they are logged and
//! converted into a [`CommandFailure`] carrying only the message.

mod create;
mod query;
mod report;

pub use create::{
    build_metadata, create_coin, create_coin_with_metadata, load_image, sample_coin_params,
};
pub use query::{analyze_token, explore, profile_balances};

use crate::CoinsError;
use crate::sdk::{Coin, CoinBalance, CoinCreation, CoinSwap, MetadataReference};
use std::fmt;

/// Outcome of a single handler invocation
pub type CommandResult = std::result::Result<CommandOutput, CommandFailure>;

/// Payload of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    Created(CoinCreation),
    CreatedWithMetadata {
        creation: CoinCreation,
        metadata_uri: String,
    },
    MetadataBuilt(MetadataReference),
    Explored(Exploration),
    Balances(ProfileBalances),
    Analyzed(TokenAnalysis),
}

/// Coins on the configured chain plus the creator's holdings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exploration {
    pub coins: Vec<Coin>,
    pub balances: Vec<CoinBalance>,
}

/// Holdings of one profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileBalances {
    pub identifier: String,
    pub handle: Option<String>,
    pub balances: Vec<CoinBalance>,
}

/// Details and recent trades of one coin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenAnalysis {
    pub address: String,
    pub details: Coin,
    pub activity: Vec<CoinSwap>,
}

/// A failed command, reduced to its message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub message: String,
}

impl CommandFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<CoinsError> for CommandFailure {
    fn from(err: CoinsError) -> Self {
        Self::new(err.to_string())
    }
}

/// Convert a handler's inner result at the boundary, logging failures
fn finish(operation: &str, result: crate::Result<CommandOutput>) -> CommandResult {
    result.map_err(|e| {
        tracing::error!(operation, error = %e, "Command failed");
        CommandFailure::from(e)
    })
}
