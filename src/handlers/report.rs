//! Console rendering of command outputs

use super::*;
use chrono::{DateTime, Local};

const NOT_AVAILABLE: &str = "N/A";
const UNKNOWN: &str = "Unknown";

fn or<'a>(value: &'a Option<String>, fallback: &'a str) -> &'a str {
    value.as_deref().unwrap_or(fallback)
}

/// Render unix seconds as a local date-time
pub(crate) fn format_timestamp(seconds: Option<i64>) -> String {
    seconds
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|t| {
            t.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn write_creation(f: &mut fmt::Formatter<'_>, creation: &CoinCreation) -> fmt::Result {
    let deployment = &creation.deployment;
    writeln!(f, "Token Address: {}", creation.address)?;
    writeln!(f, "Transaction Hash: {}", creation.hash)?;
    write!(
        f,
        "Deployment: chain {}, block {}, gas used {}, {} transaction(s)",
        deployment.chain_id,
        deployment
            .block_number
            .map(|b| b.to_string())
            .unwrap_or_else(|| "pending".to_string()),
        deployment.gas_used,
        deployment.transaction_count
    )
}

impl fmt::Display for CommandOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandOutput::Created(creation) => write_creation(f, creation),
            CommandOutput::CreatedWithMetadata {
                creation,
                metadata_uri,
            } => {
                write_creation(f, creation)?;
                write!(f, "\nMetadata URI: {}", metadata_uri)
            }
            CommandOutput::MetadataBuilt(reference) => {
                writeln!(f, "- Name: {}", reference.name)?;
                writeln!(f, "- Symbol: {}", reference.symbol)?;
                write!(f, "- URI: {}", reference.uri)
            }
            CommandOutput::Explored(exploration) => fmt::Display::fmt(exploration, f),
            CommandOutput::Balances(balances) => fmt::Display::fmt(balances, f),
            CommandOutput::Analyzed(analysis) => fmt::Display::fmt(analysis, f),
        }
    }
}

impl fmt::Display for Exploration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "🪙 Available Coins:")?;
        if self.coins.is_empty() {
            writeln!(f, "   (none)")?;
        }
        for (index, coin) in self.coins.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({})",
                index + 1,
                or(&coin.name, UNKNOWN),
                or(&coin.symbol, NOT_AVAILABLE)
            )?;
            writeln!(f, "   Address: {}", or(&coin.address, NOT_AVAILABLE))?;
            writeln!(f, "   Creator: {}", or(&coin.creator, NOT_AVAILABLE))?;
            writeln!(f, "   Market Cap: {}", or(&coin.market_cap, NOT_AVAILABLE))?;
            writeln!(f, "   Total Supply: {}", or(&coin.total_supply, NOT_AVAILABLE))?;
        }

        writeln!(f)?;
        write_balances(f, &self.balances)
    }
}

impl fmt::Display for ProfileBalances {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.handle {
            Some(handle) => writeln!(f, "Profile: {} (@{})", self.identifier, handle)?,
            None => writeln!(f, "Profile: {}", self.identifier)?,
        }
        write_balances(f, &self.balances)
    }
}

fn write_balances(f: &mut fmt::Formatter<'_>, balances: &[CoinBalance]) -> fmt::Result {
    write!(f, "📈 Profile Balances:")?;
    if balances.is_empty() {
        write!(f, "\n   (none)")?;
    }
    for (index, held) in balances.iter().enumerate() {
        let coin = held.coin.clone().unwrap_or_default();
        write!(
            f,
            "\n{}. {} ({})",
            index + 1,
            or(&coin.name, UNKNOWN),
            or(&coin.symbol, NOT_AVAILABLE)
        )?;
        write!(f, "\n   Balance: {}", or(&held.balance, NOT_AVAILABLE))?;
        write!(f, "\n   Value: {}", or(&held.value, NOT_AVAILABLE))?;
        write!(f, "\n   Coin Address: {}", or(&coin.address, NOT_AVAILABLE))?;
    }
    Ok(())
}

impl fmt::Display for TokenAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let details = &self.details;
        writeln!(f, "🔄 Recent Token Activity:")?;
        if self.activity.is_empty() {
            writeln!(f, "   (none)")?;
        }
        for (index, swap) in self.activity.iter().enumerate() {
            writeln!(
                f,
                "{}. {} - {}",
                index + 1,
                swap.kind.as_deref().unwrap_or("SWAP"),
                or(&swap.amount, NOT_AVAILABLE)
            )?;
            writeln!(f, "   User: {}", or(&swap.user, NOT_AVAILABLE))?;
            writeln!(f, "   Transaction: {}", or(&swap.tx_hash, NOT_AVAILABLE))?;
            writeln!(f, "   Timestamp: {}", format_timestamp(swap.timestamp))?;
        }

        writeln!(f)?;
        writeln!(f, "📋 Analysis Summary:")?;
        writeln!(f, "================")?;
        writeln!(
            f,
            "Token: {} ({})",
            or(&details.name, UNKNOWN),
            or(&details.symbol, NOT_AVAILABLE)
        )?;
        writeln!(f, "Address: {}", self.address)?;
        writeln!(f, "Creator: {}", or(&details.creator, NOT_AVAILABLE))?;
        writeln!(f, "Current Price: {}", or(&details.price, NOT_AVAILABLE))?;
        writeln!(f, "Market Cap: {}", or(&details.market_cap, NOT_AVAILABLE))?;
        writeln!(f, "Total Supply: {}", or(&details.total_supply, NOT_AVAILABLE))?;
        write!(f, "Recent Activity Count: {}", self.activity.len())
    }
}
