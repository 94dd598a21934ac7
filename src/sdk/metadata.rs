//! Coin metadata builder
//!
//! Collects name, symbol, description, image and free-form properties,
//! validates them, and renders the metadata JSON that gets pinned to IPFS.

use super::*;
use crate::constants::{MIME_OCTET_STREAM, SAMPLE_IMAGE_NAME, SAMPLE_IMAGE_PNG_BASE64};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::path::Path;

/// An image ready for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Load an image from disk, deriving the MIME type from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            CoinsError::metadata(format!("Failed to load image from {}: {}", path.display(), e))
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        let mime = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(mime_for_extension)
            .unwrap_or(MIME_OCTET_STREAM);

        Ok(Self::new(name, mime, bytes))
    }

    /// The embedded 1x1 PNG used by the sample coin
    pub fn sample_png() -> Result<Self> {
        let bytes = STANDARD
            .decode(SAMPLE_IMAGE_PNG_BASE64)
            .map_err(|e| CoinsError::metadata(format!("Invalid embedded image: {}", e)))?;
        Ok(Self::new(SAMPLE_IMAGE_NAME, "image/png", bytes))
    }
}

/// MIME type for a file extension (without the dot), case-insensitive
pub fn mime_for_extension(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        _ => MIME_OCTET_STREAM,
    }
}

/// Validated coin metadata, before upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinMetadata {
    pub name: String,
    pub symbol: String,
    pub description: Option<String>,
    pub image: ImageFile,
    pub properties: BTreeMap<String, String>,
}

impl CoinMetadata {
    /// Metadata JSON pointing at an already uploaded image
    pub fn to_json(&self, image_uri: &str) -> Value {
        let mut doc = json!({
            "name": self.name,
            "symbol": self.symbol,
            "image": image_uri,
            "content": {
                "mime": self.image.mime_type,
                "uri": image_uri,
            },
        });

        if let Some(description) = &self.description {
            doc["description"] = json!(description);
        }
        if !self.properties.is_empty() {
            doc["properties"] = json!(self.properties);
        }

        doc
    }
}

/// Builder for [`CoinMetadata`]
#[derive(Debug, Clone, Default)]
pub struct MetadataBuilder {
    name: Option<String>,
    symbol: Option<String>,
    description: Option<String>,
    image: Option<ImageFile>,
    properties: BTreeMap<String, String>,
}

impl MetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_image(mut self, image: ImageFile) -> Self {
        self.image = Some(image);
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Validate and produce the metadata
    ///
    /// Name, symbol and image are required; blank strings count as missing.
    pub fn build(self) -> Result<CoinMetadata> {
        let name = non_blank(self.name).ok_or_else(|| CoinsError::metadata("name is required"))?;
        let symbol =
            non_blank(self.symbol).ok_or_else(|| CoinsError::metadata("symbol is required"))?;
        let image = self
            .image
            .ok_or_else(|| CoinsError::metadata("image is required"))?;
        if image.bytes.is_empty() {
            return Err(CoinsError::metadata("image is empty"));
        }

        Ok(CoinMetadata {
            name,
            symbol,
            description: non_blank(self.description),
            image,
            properties: self.properties,
        })
    }

    /// Validate, then upload through the SDK
    pub async fn upload(self, api: &dyn CoinsApi) -> Result<MetadataReference> {
        let metadata = self.build()?;
        api.upload_metadata(&metadata).await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
