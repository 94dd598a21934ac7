//! IPFS uploader
//!
//! Pins the coin image, then the metadata JSON referencing it, through an
//! IPFS `add` endpoint. Both are addressed as `ipfs://<cid>`.

use super::*;
use crate::constants::HEADER_API_KEY;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

/// Response of an IPFS `add` call
#[derive(Debug, Deserialize)]
struct AddResponse {
    #[serde(rename = "Hash", alias = "cid")]
    hash: String,
}

/// Uploads coin metadata to IPFS
#[derive(Clone)]
pub struct IpfsUploader {
    client: Client,
    url: String,
    api_key: String,
}

impl IpfsUploader {
    pub fn new(url: &str, api_key: &str) -> Result<Self> {
        url::Url::parse(url)?;
        Ok(Self {
            client: Client::new(),
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Upload image and metadata, returning the metadata reference
    pub async fn upload(&self, metadata: &CoinMetadata) -> Result<MetadataReference> {
        let image = &metadata.image;
        let image_uri = self
            .add(image.bytes.clone(), &image.name, &image.mime_type)
            .await?;
        tracing::info!(uri = %image_uri, "Image uploaded");

        let document = serde_json::to_vec(&metadata.to_json(&image_uri))?;
        let uri = self
            .add(document, "metadata.json", "application/json")
            .await?;
        tracing::info!(uri = %uri, "Metadata uploaded");

        Ok(MetadataReference {
            name: metadata.name.clone(),
            symbol: metadata.symbol.clone(),
            uri,
        })
    }

    /// Add one file, returning its `ipfs://` URI
    async fn add(&self, bytes: Vec<u8>, file_name: &str, mime: &str) -> Result<String> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.url)
            .header(HEADER_API_KEY, &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        crate::telemetry::record_api_request("upload", status.as_u16());

        if !status.is_success() {
            return Err(CoinsError::metadata(format!(
                "upload of {} failed with status {}: {}",
                file_name,
                status.as_u16(),
                body.trim()
            )));
        }

        let added: AddResponse = serde_json::from_str(&body)?;
        Ok(format!("ipfs://{}", added.hash))
    }
}
