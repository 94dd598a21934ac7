//! Coin creation handlers

use super::*;
use crate::config::Config;
use crate::constants::*;
use crate::sdk::{CreateCoinParams, ImageFile, MetadataBuilder, SdkContext};
use std::path::Path;

/// Parameters of the sample coin minted by `create`
///
/// Points at pre-uploaded metadata, so validation of the URI is skipped.
pub fn sample_coin_params(config: &Config) -> CreateCoinParams {
    let mut params = CreateCoinParams::new(
        config,
        SAMPLE_COIN_NAME,
        SAMPLE_COIN_SYMBOL,
        SAMPLE_METADATA_URI,
    );
    params.skip_metadata_validation = true;
    params
}

/// The image at `path`, or the embedded sample stored under `sample_name`
pub fn load_image(path: Option<&Path>, sample_name: &str) -> crate::Result<ImageFile> {
    match path {
        Some(path) => ImageFile::from_path(path),
        None => {
            let mut image = ImageFile::sample_png()?;
            image.name = sample_name.to_string();
            Ok(image)
        }
    }
}

/// Create a coin with a raw metadata URI
pub async fn create_coin(ctx: &SdkContext) -> CommandResult {
    finish("create", create_coin_inner(ctx).await)
}

async fn create_coin_inner(ctx: &SdkContext) -> crate::Result<CommandOutput> {
    let params = sample_coin_params(&ctx.config);
    let rendered = serde_json::to_string(&params)?;
    tracing::info!(creator = %params.creator, params = %rendered, "Creating coin");

    let creation = ctx.api.create_coin(&params).await?;
    tracing::info!(hash = %creation.hash, address = %creation.address, "Coin created");

    Ok(CommandOutput::Created(creation))
}

/// Build and upload metadata, then create a coin pointing at it
///
/// Uses the image at `image` when given, the embedded sample otherwise.
pub async fn create_coin_with_metadata(ctx: &SdkContext, image: Option<&Path>) -> CommandResult {
    finish(
        "create-with-metadata",
        create_coin_with_metadata_inner(ctx, image).await,
    )
}

async fn create_coin_with_metadata_inner(
    ctx: &SdkContext,
    image: Option<&Path>,
) -> crate::Result<CommandOutput> {
    let reference = MetadataBuilder::new()
        .with_name(BUILDER_COIN_NAME)
        .with_symbol(BUILDER_COIN_SYMBOL)
        .with_description(BUILDER_COIN_DESCRIPTION)
        .with_image(load_image(image, SAMPLE_IMAGE_NAME)?)
        .upload(ctx.api.as_ref())
        .await?;
    tracing::info!(uri = %reference.uri, "Metadata uploaded");

    let params = CreateCoinParams::new(
        &ctx.config,
        reference.name,
        reference.symbol,
        reference.uri.clone(),
    );
    let creation = ctx.api.create_coin(&params).await?;
    tracing::info!(hash = %creation.hash, address = %creation.address, "Coin with metadata created");

    Ok(CommandOutput::CreatedWithMetadata {
        creation,
        metadata_uri: reference.uri,
    })
}

/// Build and upload metadata without creating a coin
pub async fn build_metadata(ctx: &SdkContext, image: Option<&Path>) -> CommandResult {
    finish("build-metadata", build_metadata_inner(ctx, image).await)
}

async fn build_metadata_inner(
    ctx: &SdkContext,
    image: Option<&Path>,
) -> crate::Result<CommandOutput> {
    let reference = MetadataBuilder::new()
        .with_name(PREVIEW_COIN_NAME)
        .with_symbol(PREVIEW_COIN_SYMBOL)
        .with_description(PREVIEW_COIN_DESCRIPTION)
        .with_image(load_image(image, PREVIEW_IMAGE_NAME)?)
        .upload(ctx.api.as_ref())
        .await?;
    tracing::info!(uri = %reference.uri, "Metadata built and uploaded");

    Ok(CommandOutput::MetadataBuilt(reference))
}
