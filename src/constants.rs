//! Constants used throughout zora-coins
//!
//! Environment variable names, chain identifiers, service endpoints and the
//! fixed parameters of the sample coins.

// ============================================================================
// ENVIRONMENT
// ============================================================================

/// Environment variable: Zora API key
pub const ENV_API_KEY: &str = "ZORA_API_KEY";

/// Environment variable: wallet private key used for signing
pub const ENV_PRIVATE_KEY: &str = "PRIVATE_KEY";

/// Environment variable: JSON-RPC endpoint
pub const ENV_RPC_URL: &str = "RPC_URL";

/// Environment variable: coin creator address
pub const ENV_CREATOR_ADDRESS: &str = "CREATOR_ADDRESS";

/// Environment variable: optional platform referrer address
pub const ENV_PLATFORM_REFERRER: &str = "PLATFORM_REFERRER";

/// Environment variable: override for the SDK API base URL
pub const ENV_API_URL: &str = "ZORA_API_URL";

/// Environment variable: override for the IPFS uploader URL
pub const ENV_UPLOAD_URL: &str = "ZORA_UPLOAD_URL";

// ============================================================================
// NETWORK
// ============================================================================

/// Base mainnet chain id
pub const BASE_MAINNET_CHAIN_ID: u64 = 8453;

/// Base Sepolia chain id
pub const BASE_SEPOLIA_CHAIN_ID: u64 = 84532;

/// Chain targeted by this build
#[cfg(feature = "mainnet")]
pub const CHAIN_ID: u64 = BASE_MAINNET_CHAIN_ID;

/// Chain targeted by this build
#[cfg(not(feature = "mainnet"))]
pub const CHAIN_ID: u64 = BASE_SEPOLIA_CHAIN_ID;

/// RPC endpoint used when `RPC_URL` is not set
pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";

/// Zora SDK API base URL
pub const DEFAULT_API_URL: &str = "https://api-sdk.zora.engineering";

/// IPFS uploader endpoint
pub const DEFAULT_UPLOAD_URL: &str = "https://ipfs-uploader.zora.co/api/v0/add?cid-version=1";

/// Header carrying the API key on every SDK request
pub const HEADER_API_KEY: &str = "api-key";

/// Placeholder collection address used when exploring coins
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

// ============================================================================
// QUERY LIMITS
// ============================================================================

/// Coins listed by `query`
pub const EXPLORE_COUNT: u32 = 5;

/// Balances listed per profile
pub const PROFILE_BALANCES_COUNT: u32 = 20;

/// Swaps listed per coin
pub const COIN_SWAPS_COUNT: u32 = 10;

// ============================================================================
// SAMPLE COINS
// ============================================================================

/// Name of the coin minted by `create`
pub const SAMPLE_COIN_NAME: &str = "My Awesome Token";

/// Symbol of the coin minted by `create`
pub const SAMPLE_COIN_SYMBOL: &str = "MAT";

/// Pre-uploaded metadata used by `create`
pub const SAMPLE_METADATA_URI: &str =
    "https://bafkreigj4ynovugfqsewvfgche6ql5gozlox7p5cjfiw7uelfscfbk3keu.ipfs.nftstorage.link";

/// Name of the coin minted by `create-with-metadata`
pub const BUILDER_COIN_NAME: &str = "Awesome Builder Token";

/// Symbol of the coin minted by `create-with-metadata`
pub const BUILDER_COIN_SYMBOL: &str = "ABT";

/// Description uploaded by `create-with-metadata`
pub const BUILDER_COIN_DESCRIPTION: &str =
    "A token created using Zora metadata builder with custom image and metadata";

/// Name of the metadata built by `build-metadata`
pub const PREVIEW_COIN_NAME: &str = "Sample Token";

/// Symbol of the metadata built by `build-metadata`
pub const PREVIEW_COIN_SYMBOL: &str = "SAMPLE";

/// Description uploaded by `build-metadata`
pub const PREVIEW_COIN_DESCRIPTION: &str = "This is a sample token metadata";

/// File name of the embedded sample image
pub const SAMPLE_IMAGE_NAME: &str = "token-image.png";

/// File name of the embedded image when uploaded by `build-metadata`
pub const PREVIEW_IMAGE_NAME: &str = "sample.png";

/// 1x1 PNG, base64 encoded
pub const SAMPLE_IMAGE_PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

/// MIME type used when the extension is unknown
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";
