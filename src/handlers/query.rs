//! Query handlers
//!
//! Exploration and token analysis issue two independent lookups concurrently
//! and only build a result once both have completed.

use super::*;
use crate::constants::*;
use crate::sdk::{CoinQuery, CoinSwapsQuery, CoinsQuery, ProfileBalancesQuery, SdkContext};

/// List coins on the configured chain and the creator's balances
pub async fn explore(ctx: &SdkContext) -> CommandResult {
    finish("query", explore_inner(ctx).await)
}

async fn explore_inner(ctx: &SdkContext) -> crate::Result<CommandOutput> {
    let chain_id = ctx.config.chain_id();
    let coins_query = CoinsQuery {
        chain_id,
        collection_address: ZERO_ADDRESS.to_string(),
        count: EXPLORE_COUNT,
    };
    let profile_query = balances_query(ctx, ctx.config.creator_address());

    tracing::info!(chain_id, creator = %profile_query.identifier, "Exploring coins");
    let (coins, balances) = tokio::try_join!(
        ctx.api.get_coins(&coins_query),
        ctx.api.get_profile_balances(&profile_query),
    )?;

    let coins = coins
        .into_data()?
        .map(|d| d.zora20_tokens)
        .unwrap_or_default();
    let balances = balances
        .into_data()?
        .and_then(|d| d.profile)
        .map(|p| p.balances)
        .unwrap_or_default();

    tracing::info!(coins = coins.len(), balances = balances.len(), "Exploration complete");
    Ok(CommandOutput::Explored(Exploration { coins, balances }))
}

/// Balances held by one profile on the configured chain
pub async fn profile_balances(ctx: &SdkContext, identifier: &str) -> CommandResult {
    finish("profile", profile_balances_inner(ctx, identifier).await)
}

async fn profile_balances_inner(
    ctx: &SdkContext,
    identifier: &str,
) -> crate::Result<CommandOutput> {
    let query = balances_query(ctx, identifier);
    tracing::info!(identifier, chain_id = ctx.config.chain_id(), "Querying profile balances");

    let profile = ctx
        .api
        .get_profile_balances(&query)
        .await?
        .into_data()?
        .and_then(|d| d.profile)
        .unwrap_or_default();

    Ok(CommandOutput::Balances(ProfileBalances {
        identifier: identifier.to_string(),
        handle: profile.handle,
        balances: profile.balances,
    }))
}

fn balances_query(ctx: &SdkContext, identifier: &str) -> ProfileBalancesQuery {
    ProfileBalancesQuery {
        identifier: identifier.to_string(),
        count: PROFILE_BALANCES_COUNT,
        chain_ids: vec![ctx.config.chain_id()],
    }
}

/// Fetch details and recent swaps of one coin
pub async fn analyze_token(ctx: &SdkContext, address: &str) -> CommandResult {
    finish("analyze", analyze_token_inner(ctx, address).await)
}

async fn analyze_token_inner(ctx: &SdkContext, address: &str) -> crate::Result<CommandOutput> {
    let chain_id = ctx.config.chain_id();
    let coin_query = CoinQuery {
        address: address.to_string(),
        chain_id,
    };
    let swaps_query = CoinSwapsQuery {
        address: address.to_string(),
        chain_id,
        count: COIN_SWAPS_COUNT,
    };

    tracing::info!(address, chain_id, "Analyzing token");
    let (details, swaps) = tokio::try_join!(
        ctx.api.get_coin(&coin_query),
        ctx.api.get_coin_swaps(&swaps_query),
    )?;

    let details = details
        .into_data()?
        .and_then(|d| d.zora20_token)
        .ok_or_else(|| CoinsError::not_found("Token not found"))?;
    let activity = swaps
        .into_data()?
        .map(|d| d.zora20_swaps)
        .unwrap_or_default();

    Ok(CommandOutput::Analyzed(TokenAnalysis {
        address: address.to_string(),
        details,
        activity,
    }))
}
